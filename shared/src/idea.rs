use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// A submitted course proposal: a title, the display name of whoever
/// submitted it, a title-derived slug, and the set of voters.
///
/// Title, creator, and slug are fixed at construction; the voter set is the
/// only thing that grows afterwards. There are no setters, so the slug can
/// never drift out of sync with the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseIdea {
    title: String,
    creator: String,
    slug: String,
    voters: HashSet<String>,
}

impl CourseIdea {
    pub fn new(title: impl Into<String>, creator: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            title,
            creator: creator.into(),
            slug,
            voters: HashSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Record a vote. Returns `true` only when the username was not already
    /// in the voter set, so repeat votes never change the count.
    pub fn add_voter(&mut self, username: impl Into<String>) -> bool {
        self.voters.insert(username.into())
    }

    pub fn vote_count(&self) -> usize {
        self.voters.len()
    }

    /// Copy of the voter set.
    pub fn voters(&self) -> HashSet<String> {
        self.voters.clone()
    }
}

// Two ideas are the same entity when title and creator match; the voter set
// and slug play no part in identity.
impl PartialEq for CourseIdea {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.creator == other.creator
    }
}

impl Eq for CourseIdea {}

impl Hash for CourseIdea {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.creator.hash(state);
    }
}
