use std::time::Duration;

use crate::{CopyTarget, RequestId};

/// How long a copy acknowledgement stays on its control before reverting.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CreateShortLink { request: RequestId, url: String },
    FetchStats { request: RequestId, short_code: String },
    CopyToClipboard { target: CopyTarget, text: String },
    ScheduleCopyReset { token: u64, after: Duration },
}
