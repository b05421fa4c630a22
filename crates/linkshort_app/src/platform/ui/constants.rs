use ratatui::style::Color;

pub const APP_TITLE: &str = "URL Shortener";
pub const INPUT_TITLE: &str = "Long URL";
pub const INPUT_PLACEHOLDER: &str = "https://example.com/some/long/path";

pub const IDLE_PROMPT: &str = "Enter a long URL and press Enter to shorten it.";
pub const LOADING_CREATE: &str = "Shortening...";
pub const LOADING_STATS: &str = "Loading statistics...";

pub const RESULT_TITLE: &str = "Short link ready";
pub const STATS_TITLE: &str = "Statistics";
pub const ERROR_TITLE: &str = "Error";

pub const HINT_IDLE: &str = "Enter: shorten | Ctrl+U: clear | Ctrl+C: quit";
pub const HINT_LOADING: &str = "Waiting for the server | Ctrl+C: quit";
pub const HINT_RESULT: &str = "s: stats | c: copy short | o: copy original | n/Esc: new | Ctrl+C: quit";
pub const HINT_STATS: &str = "r: refresh | c: copy short | b/Esc: back | Ctrl+C: quit";
pub const HINT_ERROR: &str = "Enter/Esc: dismiss | Ctrl+C: quit";

pub mod colors {
    use super::Color;

    pub const ACCENT: Color = Color::Cyan;
    pub const MUTED: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}
