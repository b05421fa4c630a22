use linkshort_core::{AppViewModel, CopyTarget, Msg, PanelView};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Translates a key press into a controller message for the visible panel.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => InputAction::Quit,
            KeyCode::Char('u') if is_idle(view) => {
                InputAction::Dispatch(Msg::InputChanged(String::new()))
            }
            _ => InputAction::Ignore,
        };
    }

    let msg = match &view.panel {
        PanelView::Idle { .. } => match key.code {
            KeyCode::Enter => Some(Msg::SubmitClicked),
            KeyCode::Char(ch) => {
                let mut input = view.input.clone();
                input.push(ch);
                Some(Msg::InputChanged(input))
            }
            KeyCode::Backspace if !view.input.is_empty() => {
                let mut input = view.input.clone();
                input.pop();
                Some(Msg::InputChanged(input))
            }
            _ => None,
        },
        PanelView::Loading { .. } => None,
        PanelView::Result { .. } => match key.code {
            KeyCode::Char('s') => Some(Msg::StatsClicked),
            KeyCode::Char('c') => Some(Msg::CopyClicked(CopyTarget::ShortUrl)),
            KeyCode::Char('o') => Some(Msg::CopyClicked(CopyTarget::LongUrl)),
            KeyCode::Char('n') | KeyCode::Esc => Some(Msg::ResetClicked),
            _ => None,
        },
        PanelView::Stats(_) => match key.code {
            KeyCode::Char('r') => Some(Msg::StatsClicked),
            KeyCode::Char('c') => Some(Msg::CopyClicked(CopyTarget::ShortUrl)),
            KeyCode::Char('b') | KeyCode::Esc => Some(Msg::CloseStatsClicked),
            _ => None,
        },
        PanelView::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Msg::ErrorDismissed),
            _ => None,
        },
    };

    msg.map_or(InputAction::Ignore, InputAction::Dispatch)
}

/// Bracketed paste appends to the URL box; line breaks are dropped.
pub fn map_paste(text: &str, view: &AppViewModel) -> InputAction {
    if !is_idle(view) {
        return InputAction::Ignore;
    }
    let pasted: String = text.chars().filter(|ch| *ch != '\r' && *ch != '\n').collect();
    if pasted.is_empty() {
        return InputAction::Ignore;
    }
    InputAction::Dispatch(Msg::InputChanged(format!("{}{}", view.input, pasted)))
}

fn is_idle(view: &AppViewModel) -> bool {
    matches!(view.panel, PanelView::Idle { .. })
}
