// =============================================================================
// NexusCorp Common - Case Study Selector
// =============================================================================
// The showcase renders every case study in order. The selector only marks
// which one is active; nothing on the page changes it yet, so it stays at 0.
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseStudySelector {
    active: usize,
}

impl CaseStudySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Select `index`, clamped to the last of `count` entries.
    pub fn select(&mut self, index: usize, count: usize) {
        self.active = index.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CASE_STUDIES;

    #[test]
    fn test_starts_at_first_entry() {
        let selector = CaseStudySelector::new();
        assert_eq!(selector.active(), 0);
        assert!(selector.is_active(0));
        assert!(!selector.is_active(1));
    }

    #[test]
    fn test_select_is_clamped() {
        let mut selector = CaseStudySelector::new();
        selector.select(5, CASE_STUDIES.len());
        assert_eq!(selector.active(), 0);
        selector.select(2, 4);
        assert_eq!(selector.active(), 2);
        selector.select(9, 0);
        assert_eq!(selector.active(), 0);
    }
}
