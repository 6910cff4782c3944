// =============================================================================
// NexusCorp Common - Navigation Bar State
// =============================================================================
// Two independent flags: compact styling (driven by scroll offset) and the
// mobile menu. Starts expanded with the menu closed.
// =============================================================================

/// Scroll offset the page must exceed before the bar turns compact.
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    compact: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compact style applies strictly above the threshold.
    pub fn is_compact_at(offset: f64) -> bool {
        offset > SCROLL_THRESHOLD
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Re-evaluate the scroll flag. Returns `true` only on a boundary crossing.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let compact = Self::is_compact_at(offset);
        if compact == self.compact {
            return false;
        }
        self.compact = compact;
        tracing::debug!(offset, compact, "nav bar crossed scroll threshold");
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "mobile menu toggled");
    }

    /// Following a link always leaves the menu closed.
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert!(!state.is_compact());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut state = NavState::new();
        state.on_scroll(19.0);
        assert!(!state.is_compact());
        state.on_scroll(20.0);
        assert!(!state.is_compact());
        state.on_scroll(21.0);
        assert!(state.is_compact());
    }

    #[test]
    fn test_scroll_back_to_threshold_expands() {
        let mut state = NavState::new();
        assert!(state.on_scroll(400.0));
        assert!(state.on_scroll(20.0));
        assert!(!state.is_compact());
    }

    #[test]
    fn test_on_scroll_reports_only_crossings() {
        let mut state = NavState::new();
        assert!(!state.on_scroll(0.0));
        assert!(!state.on_scroll(12.5));
        assert!(state.on_scroll(20.5));
        assert!(!state.on_scroll(300.0));
        assert!(!state.on_scroll(21.0));
        assert!(state.on_scroll(3.0));
    }

    #[test]
    fn test_double_toggle_returns_to_closed() {
        let mut state = NavState::new();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_select_link_always_closes() {
        let mut open = NavState::new();
        open.toggle_menu();
        open.select_link();
        assert!(!open.is_menu_open());

        let mut closed = NavState::new();
        closed.select_link();
        assert!(!closed.is_menu_open());
    }

    #[test]
    fn test_axes_are_independent() {
        let mut state = NavState::new();
        state.toggle_menu();
        state.on_scroll(100.0);
        assert!(state.is_compact() && state.is_menu_open());
        state.select_link();
        assert!(state.is_compact());
        state.on_scroll(0.0);
        state.toggle_menu();
        assert!(!state.is_compact() && state.is_menu_open());
    }
}
