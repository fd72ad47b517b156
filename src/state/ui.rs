#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for dark mode and the sidebar search panel.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_expanded: bool,
    pub search_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_expanded: true,
            search_open: false,
        }
    }
}
