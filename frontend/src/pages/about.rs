use crate::{
    api::{ApiClient, Profile, TimelineKind},
    components::{
        cards::TagList,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};
use leptos::*;

pub fn timeline_badge(kind: TimelineKind) -> (&'static str, &'static str) {
    match kind {
        TimelineKind::Project => ("Project", "bg-status-info-bg text-status-info-text"),
        TimelineKind::Work => ("Work", "bg-status-success-bg text-status-success-text"),
        TimelineKind::Education => ("Education", "bg-surface-muted text-fg-muted"),
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let profile = create_resource(|| (), move |_| {
        let client = client.clone();
        async move { client.get_profile().await }
    });

    view! {
        <Layout>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(profile) => view! { <ProfileView profile=profile /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </Layout>
    }
}

#[component]
pub fn ProfileView(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        title,
        bio,
        location,
        email,
        experience,
        github_url,
        linkedin_url,
        skills,
        timeline,
    } = profile;
    let mailto = format!("mailto:{email}");

    view! {
        <div class="max-w-4xl mx-auto space-y-12">
            <section class="space-y-4">
                <h1 class="text-4xl font-bold text-fg">{name}</h1>
                <p class="text-xl text-action-primary-bg">{title}</p>
                <p class="text-fg-muted leading-7 whitespace-pre-line">{bio}</p>
                <ul class="flex flex-wrap gap-4 text-sm text-fg-muted">
                    <li>{location}</li>
                    <li>{experience}</li>
                    <li><a href=mailto class="hover:underline">{email}</a></li>
                    {github_url.map(|url| view! { <li><a href=url class="hover:underline">"GitHub"</a></li> })}
                    {linkedin_url.map(|url| view! { <li><a href=url class="hover:underline">"LinkedIn"</a></li> })}
                </ul>
            </section>
            <section class="space-y-4">
                <h2 class="text-2xl font-bold text-fg">"Skills"</h2>
                <div class="grid gap-6 md:grid-cols-2">
                    {skills
                        .into_iter()
                        .map(|group| view! {
                            <div class="rounded-lg border border-border p-4 space-y-3">
                                <h3 class="font-semibold text-fg">{group.name}</h3>
                                <TagList tags=group.skills />
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="space-y-4">
                <h2 class="text-2xl font-bold text-fg">"Timeline"</h2>
                <ol class="border-l-2 border-border pl-6 space-y-6">
                    {timeline
                        .into_iter()
                        .map(|entry| {
                            let (label, class) = timeline_badge(entry.kind);
                            view! {
                                <li class="space-y-1">
                                    <div class="flex items-center gap-3">
                                        <span class="text-sm font-mono text-fg-muted">{entry.year}</span>
                                        <span class=format!("text-xs px-2 py-0.5 rounded {class}")>{label}</span>
                                    </div>
                                    <h3 class="font-semibold text-fg">{entry.title}</h3>
                                    <p class="text-sm text-fg-muted">{entry.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </div>
    }
}
