//! Static mock content loaded into the store at start-up.

use chrono::NaiveDate;

use crate::models::{
    post::Post,
    profile::{Profile, SkillGroup, TimelineEntry, TimelineKind},
    project::{Project, ProjectStatus},
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Building a Blog with React and TypeScript".into(),
            excerpt: "A walkthrough of building a modern blog with Vite, React, TypeScript and Tailwind CSS.".into(),
            content: Some(
                r#"# Building a Blog with React and TypeScript

Let's look at how to build a modern blog with React and TypeScript.

## Stack

- **React 18**: the latest React features
- **TypeScript**: type safety
- **Vite**: a fast dev server
- **Tailwind CSS**: utility-first CSS

## Getting started

Create the project first:

```bash
npm create vite@latest my-blog -- --template react-ts
cd my-blog
npm install
```

### Component layout

```typescript
interface Post {
  id: number
  title: string
  content: string
}
```

## Wrapping up

React and TypeScript give you a type-safe blog with very little ceremony.
"#
                .into(),
            ),
            cover_image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop".into(),
            category: "React".into(),
            tags: labels(&["React", "TypeScript", "Tailwind"]),
            created_at: date(2025, 10, 10),
            read_time: 5,
            view_count: Some(1234),
            published: None,
        },
        Post {
            id: 2,
            title: "Building a RESTful API with FastAPI".into(),
            excerpt: "How to write a fast and efficient backend API with Python FastAPI.".into(),
            content: Some(
                r#"# Building a RESTful API with FastAPI

FastAPI is a modern web framework built on Python type hints.

## Highlights

- **Performance** on par with Node.js and Go
- **Type safety** through Pydantic
- **Automatic docs** via Swagger UI

## Installing

```bash
pip install fastapi uvicorn
```

## A first endpoint

```python
from fastapi import FastAPI

app = FastAPI()

@app.get("/")
def read_root():
    return {"Hello": "World"}
```
"#
                .into(),
            ),
            cover_image: "https://images.unsplash.com/photo-1629654297299-c8506221ca97?w=800&h=400&fit=crop".into(),
            category: "Backend".into(),
            tags: labels(&["Python", "FastAPI", "API"]),
            created_at: date(2025, 10, 8),
            read_time: 8,
            view_count: Some(856),
            published: None,
        },
        Post {
            id: 3,
            title: "Deploying a Service on AWS".into(),
            excerpt: "Notes on shipping a frontend and backend to AWS with S3, CloudFront and ECS.".into(),
            content: Some(
                r#"# Deploying a Service on AWS

## Layout

### Frontend
- **S3**: static hosting
- **CloudFront**: CDN

### Backend
- **ECS Fargate**: containers
- **RDS**: database

## Uploading to S3

```bash
npm run build
aws s3 sync ./dist s3://my-bucket --delete
```

> **Tip**: remember to invalidate the CloudFront cache.
"#
                .into(),
            ),
            cover_image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&h=400&fit=crop".into(),
            category: "DevOps".into(),
            tags: labels(&["AWS", "S3", "CloudFront"]),
            created_at: date(2025, 10, 5),
            read_time: 10,
            view_count: Some(2103),
            published: None,
        },
        Post {
            id: 4,
            title: "Typed Errors in a Service Layer".into(),
            excerpt: "Draft: mapping domain failures to HTTP responses without losing context.".into(),
            content: Some("# Typed Errors in a Service Layer\n\nWork in progress.\n".into()),
            cover_image: String::new(),
            category: "Backend".into(),
            tags: labels(&["Errors", "API"]),
            created_at: date(2025, 10, 12),
            read_time: 1,
            view_count: Some(0),
            published: Some(false),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Tech Blog Platform".into(),
            description: "A personal tech blog built with React, TypeScript and FastAPI, with a Markdown editor, dark mode and search.".into(),
            detail_content: Some(
                r#"# Tech Blog Project

## Features

- Markdown authoring
- Dark mode
- Search and filtering
- Responsive layout
"#
                .into(),
            ),
            thumbnail: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=800&h=500&fit=crop".into(),
            images: None,
            tech_stack: labels(&["React", "TypeScript", "FastAPI", "PostgreSQL", "Tailwind CSS", "AWS"]),
            role: "Full-stack Developer".into(),
            team_size: Some(1),
            github_url: Some("https://github.com/yourusername/tech-blog".into()),
            live_url: Some("https://yourblog.com".into()),
            start_date: "2025-10".into(),
            end_date: None,
            status: ProjectStatus::InProgress,
            featured: true,
        },
        Project {
            id: 2,
            title: "E-Commerce Platform".into(),
            description: "An online store with product management, a shopping cart and payments.".into(),
            detail_content: None,
            thumbnail: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=500&fit=crop".into(),
            images: None,
            tech_stack: labels(&["Next.js", "Node.js", "MongoDB", "Stripe", "Docker"]),
            role: "Frontend Developer".into(),
            team_size: Some(4),
            github_url: Some("https://github.com/yourusername/ecommerce".into()),
            live_url: Some("https://yourshop.com".into()),
            start_date: "2025-06".into(),
            end_date: Some("2025-09".into()),
            status: ProjectStatus::Completed,
            featured: true,
        },
        Project {
            id: 3,
            title: "Todo Manager".into(),
            description: "A simple todo list with drag and drop and category grouping.".into(),
            detail_content: None,
            thumbnail: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800&h=500&fit=crop".into(),
            images: None,
            tech_stack: labels(&["React", "Redux", "Firebase"]),
            role: "Solo Developer".into(),
            team_size: Some(1),
            github_url: Some("https://github.com/yourusername/todo-app".into()),
            live_url: Some("https://yourtodo.com".into()),
            start_date: "2025-03".into(),
            end_date: Some("2025-04".into()),
            status: ProjectStatus::Completed,
            featured: false,
        },
        Project {
            id: 4,
            title: "Real-time Chat Application".into(),
            description: "A chat application with real-time messaging over WebSockets.".into(),
            detail_content: None,
            thumbnail: "https://images.unsplash.com/photo-1611606063065-ee7946f0787a?w=800&h=500&fit=crop".into(),
            images: None,
            tech_stack: labels(&["React", "Socket.io", "Express", "MongoDB"]),
            role: "Full-stack Developer".into(),
            team_size: Some(2),
            github_url: Some("https://github.com/yourusername/chat-app".into()),
            live_url: None,
            start_date: "2024-12".into(),
            end_date: Some("2025-02".into()),
            status: ProjectStatus::Completed,
            featured: false,
        },
        Project {
            id: 5,
            title: "Weather Dashboard".into(),
            description: "Current conditions for several cities at a glance.".into(),
            detail_content: None,
            thumbnail: "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=800&h=500&fit=crop".into(),
            images: None,
            tech_stack: labels(&["Vue.js", "Chart.js", "OpenWeather API"]),
            role: "Frontend Developer".into(),
            team_size: Some(1),
            github_url: Some("https://github.com/yourusername/weather-dashboard".into()),
            live_url: Some("https://yourweather.com".into()),
            start_date: "2024-10".into(),
            end_date: Some("2024-11".into()),
            status: ProjectStatus::Completed,
            featured: false,
        },
        Project {
            id: 6,
            title: "Portfolio CMS".into(),
            description: "A portfolio site generator on top of a headless CMS.".into(),
            detail_content: None,
            thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=500&fit=crop".into(),
            images: None,
            tech_stack: labels(&["Next.js", "Strapi", "GraphQL", "Vercel"]),
            role: "Full-stack Developer".into(),
            team_size: Some(3),
            github_url: Some("https://github.com/yourusername/portfolio-cms".into()),
            live_url: None,
            start_date: "2024-08".into(),
            end_date: None,
            status: ProjectStatus::Archived,
            featured: false,
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Your Name".into(),
        title: "Full-stack Developer".into(),
        bio: "Hi! I'm a developer who loves building for the web.".into(),
        location: "Seoul, Korea".into(),
        email: "your@email.com".into(),
        experience: "3+ years experience".into(),
        github_url: Some("https://github.com/yourusername".into()),
        linkedin_url: Some("https://linkedin.com/in/yourusername".into()),
        skills: vec![
            SkillGroup {
                name: "Frontend".into(),
                skills: labels(&["React", "TypeScript", "Next.js", "Tailwind CSS", "Redux"]),
            },
            SkillGroup {
                name: "Backend".into(),
                skills: labels(&["Python", "FastAPI", "Node.js", "Express", "Django"]),
            },
            SkillGroup {
                name: "Database".into(),
                skills: labels(&["PostgreSQL", "MongoDB", "Redis", "DynamoDB"]),
            },
            SkillGroup {
                name: "DevOps".into(),
                skills: labels(&["AWS", "Docker", "GitHub Actions", "Vercel"]),
            },
        ],
        timeline: vec![
            TimelineEntry {
                year: "2025".into(),
                title: "Tech blog".into(),
                description: "Personal tech blog built with React, FastAPI and AWS".into(),
                kind: TimelineKind::Project,
            },
            TimelineEntry {
                year: "2024".into(),
                title: "Full-stack Developer".into(),
                description: "Web services at a startup".into(),
                kind: TimelineKind::Work,
            },
            TimelineEntry {
                year: "2023".into(),
                title: "Computer Science degree".into(),
                description: "Graduated".into(),
                kind: TimelineKind::Education,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use validator::Validate;

    #[test]
    fn seed_ids_are_unique() {
        let post_ids: HashSet<i64> = posts().iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), posts().len());
        let project_ids: HashSet<i64> = projects().iter().map(|p| p.id).collect();
        assert_eq!(project_ids.len(), projects().len());
    }

    #[test]
    fn seed_profile_passes_validation() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn seed_contains_one_draft() {
        let drafts = posts().into_iter().filter(|p| !p.is_published()).count();
        assert_eq!(drafts, 1);
    }
}
