//! Record bindings for posts and projects.

use crate::models::{post::Post, project::Project};

use super::repository::{MemoryTable, Record, Repository};

pub type PostRepository = dyn Repository<Post>;
pub type ProjectRepository = dyn Repository<Project>;
pub type PostTable = MemoryTable<Post>;
pub type ProjectTable = MemoryTable<Project>;

impl Record for Post {
    const LABEL: &'static str = "Post";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Record for Project {
    const LABEL: &'static str = "Project";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
