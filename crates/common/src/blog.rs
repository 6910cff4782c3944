// =============================================================================
// NexusCorp Common - Blog Search
// =============================================================================

use crate::types::BlogPost;

impl BlogPost {
    /// Whether `needle` occurs in the title or category.
    ///
    /// `needle` must already be lowercased; the post fields are folded here.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// Posts whose title or category contains `query`, ignoring case.
///
/// Relative order is preserved and an empty query keeps every post. Accepts
/// any iterator of post references so the output can be filtered again.
pub fn filter_posts<'a, I>(posts: I, query: &str) -> Vec<&'a BlogPost>
where
    I: IntoIterator<Item = &'a BlogPost>,
{
    let needle = query.to_lowercase();
    let matched: Vec<&'a BlogPost> = posts.into_iter().filter(|post| post.matches(&needle)).collect();
    tracing::debug!(query, matched = matched.len(), "blog filter applied");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BLOG_POSTS;

    fn ids(posts: &[&BlogPost]) -> Vec<&'static str> {
        posts.iter().map(|p| p.id).collect()
    }

    fn post(id: &'static str, title: &'static str, category: &'static str) -> BlogPost {
        BlogPost {
            id,
            title,
            excerpt: "",
            category,
            date: "",
            author: "",
        }
    }

    #[test]
    fn test_category_match() {
        let result = filter_posts(&BLOG_POSTS, "tech");
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn test_title_match() {
        // "Team" only appears in the third title
        let result = filter_posts(&BLOG_POSTS, "team");
        assert_eq!(ids(&result), ["3"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_posts(&BLOG_POSTS, "zzz").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let result = filter_posts(&BLOG_POSTS, "");
        let all: Vec<&BlogPost> = BLOG_POSTS.iter().collect();
        assert_eq!(result, all);
    }

    #[test]
    fn test_case_insensitive() {
        for query in ["tech", "Strategy", "in", "CORP"] {
            assert_eq!(
                filter_posts(&BLOG_POSTS, &query.to_uppercase()),
                filter_posts(&BLOG_POSTS, &query.to_lowercase()),
                "query {query:?}"
            );
        }
    }

    #[test]
    fn test_preserves_order() {
        let posts = [
            post("a", "Cloud costs", "Finance"),
            post("b", "Hiring", "Cloud"),
            post("c", "Offsites", "Culture"),
            post("d", "Clouded judgement", "Leadership"),
        ];
        let result = filter_posts(&posts, "cloud");
        assert_eq!(ids(&result), ["a", "b", "d"]);
    }

    #[test]
    fn test_idempotent() {
        for query in ["", "e", "in", "tech", "zzz", "Remote"] {
            let once = filter_posts(&BLOG_POSTS, query);
            let twice = filter_posts(once.iter().copied(), query);
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn test_excerpt_and_author_are_not_searched() {
        // "ESG" is only in the second post's excerpt, "Sarah" only an author
        assert!(filter_posts(&BLOG_POSTS, "esg").is_empty());
        assert!(filter_posts(&BLOG_POSTS, "sarah").is_empty());
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(filter_posts(&BLOG_POSTS, "cohesion ").is_empty());
        assert_eq!(ids(&filter_posts(&BLOG_POSTS, " cohesion")), ["3"]);
    }
}
