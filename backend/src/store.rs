use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use shared::CourseIdea;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no idea matches the requested identifier")]
    NotFound,
    #[error("idea store lock poisoned")]
    LockFailed,
}

/// Storage seam for course ideas. The in-memory implementation below is the
/// only one today; a persistent backend would slot in behind this trait.
pub trait IdeaDao: Send + Sync {
    /// Append an idea. No validation, no deduplication, no slug-collision
    /// check; two ideas with the same title simply coexist.
    fn add(&self, idea: CourseIdea) -> Result<(), StoreError>;

    /// Snapshot of every idea in insertion order. Callers get clones, so
    /// mutating the returned vector never touches the store.
    fn find_all(&self) -> Result<Vec<CourseIdea>, StoreError>;

    /// First idea whose slug matches, in insertion order.
    fn find_by_slug(&self, slug: &str) -> Result<CourseIdea, StoreError>;

    /// Record a vote against the first idea whose slug matches. Lookup and
    /// voter-set growth happen under a single lock acquisition so concurrent
    /// votes cannot be lost. Returns whether the voter was newly added.
    fn add_voter(&self, slug: &str, username: &str) -> Result<bool, StoreError>;
}

/// Process-lifetime idea store: a mutex around an insertion-ordered vector.
#[derive(Debug, Default)]
pub struct MemoryIdeaDao {
    ideas: Mutex<Vec<CourseIdea>>,
}

impl MemoryIdeaDao {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<CourseIdea>>, StoreError> {
        self.ideas.lock().map_err(|_| StoreError::LockFailed)
    }
}

impl IdeaDao for MemoryIdeaDao {
    fn add(&self, idea: CourseIdea) -> Result<(), StoreError> {
        self.lock()?.push(idea);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<CourseIdea>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn find_by_slug(&self, slug: &str) -> Result<CourseIdea, StoreError> {
        self.lock()?
            .iter()
            .find(|idea| idea.slug() == slug)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn add_voter(&self, slug: &str, username: &str) -> Result<bool, StoreError> {
        let mut ideas = self.lock()?;
        let idea = ideas
            .iter_mut()
            .find(|idea| idea.slug() == slug)
            .ok_or(StoreError::NotFound)?;
        Ok(idea.add_voter(username))
    }
}
