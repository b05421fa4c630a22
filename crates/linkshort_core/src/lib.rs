//! Linkshort core: pure page-controller state machine and view-model helpers.
mod effect;
mod error;
mod format;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, COPY_FEEDBACK_DURATION};
pub use error::{ControllerError, ErrorBody, RequestFailure};
pub use format::{format_created_at, stats_view, UNKNOWN_CREATED_AT};
pub use msg::Msg;
pub use state::{
    AppState, CopyOutcome, CopyTarget, Panel, RequestId, RequestKind, ShortenResult, StatsRecord,
    DEFAULT_BACKEND,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CopyButtonState, CopyButtonView, PanelView, StatsView, COPIED_LABEL,
    COPY_FAILED_LABEL, COPY_LABEL,
};
