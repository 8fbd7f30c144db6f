#[cfg(test)]
mod tests {
    use crate::idea::CourseIdea;
    use crate::slug::slugify;

    fn idea(title: &str, creator: &str) -> CourseIdea {
        CourseIdea::new(title, creator)
    }

    #[test]
    fn test_slug_derivation() {
        assert_eq!(slugify("Learn Go"), "learn-go");
        assert_eq!(slugify("Intro to Rust!"), "intro-to-rust");
        assert_eq!(slugify("  C++   for  beginners?  "), "c-for-beginners");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slug_deterministic_and_idempotent() {
        let first = slugify("Advanced Databases 101");
        let second = slugify("Advanced Databases 101");
        assert_eq!(first, second);
        assert_eq!(slugify(&first), first);
    }

    #[test]
    fn test_idea_slug_comes_from_title() {
        let idea = idea("Learn Go", "alice");
        assert_eq!(idea.slug(), "learn-go");
        assert_eq!(idea.title(), "Learn Go");
        assert_eq!(idea.creator(), "alice");
    }

    #[test]
    fn test_repeat_votes_do_not_count() {
        let mut idea = idea("Learn Go", "alice");
        assert_eq!(idea.vote_count(), 0);

        assert!(idea.add_voter("alice"));
        assert_eq!(idea.vote_count(), 1);

        assert!(!idea.add_voter("alice"));
        assert_eq!(idea.vote_count(), 1);

        assert!(idea.add_voter("bob"));
        assert_eq!(idea.vote_count(), 2);
    }

    #[test]
    fn test_distinct_voters_all_count() {
        let mut idea = idea("Learn Go", "alice");
        for n in 0..25 {
            assert!(idea.add_voter(format!("voter-{n}")));
        }
        assert_eq!(idea.vote_count(), 25);
    }

    #[test]
    fn test_voters_returns_a_copy() {
        let mut idea = idea("Learn Go", "alice");
        idea.add_voter("bob");

        let mut copy = idea.voters();
        copy.insert("mallory".to_string());

        assert_eq!(idea.vote_count(), 1);
        assert!(!idea.voters().contains("mallory"));
    }

    #[test]
    fn test_equality_ignores_voters() {
        let mut a = idea("Learn Go", "alice");
        let b = idea("Learn Go", "alice");
        a.add_voter("bob");
        assert_eq!(a, b);

        assert_ne!(idea("Learn Go", "alice"), idea("Learn Go", "carol"));
        assert_ne!(idea("Learn Go", "alice"), idea("Learn Rust", "alice"));
    }
}
