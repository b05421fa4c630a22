use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed regions of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub input: Rect,
    /// Inline validation line under the input box.
    pub notice: Rect,
    pub panel: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let [title, input, notice, panel, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            title,
            input,
            notice,
            panel,
            footer,
        }
    }
}
