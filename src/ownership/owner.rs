//! Time-decayed code ownership.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returned when no contributor scores above zero.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Power applied to a contribution's age in hours.
const DECAY_EXPONENT: f64 = 1.8;

const SECONDS_PER_HOUR: i64 = 60 * 60;

/// One contributor's aggregate stake in a file's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOwner {
    pub name: String,
    /// Lines currently attributed to this contributor.
    pub line_count: u64,
    /// Unix timestamp (seconds) of their most recent commit to the file.
    pub most_recent_commit_unix_timestamp: i64,
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}

/// Pick the owner of a file as of the current time. See [`code_owner_at`].
pub fn code_owner(owners: &[CodeOwner]) -> &str {
    code_owner_at(owners, now_unix())
}

/// Pick the owner of a file as of `now_unix`.
///
/// Each contributor scores `line_count / age_hours^1.8`, where the age is counted in
/// whole hours since their last commit. Recent work therefore outweighs a larger but
/// older stake, and a commit made within the last hour always wins. The first of
/// several equal scores wins. Returns [`UNKNOWN_OWNER`] when nobody scores above zero.
pub fn code_owner_at(owners: &[CodeOwner], now_unix: i64) -> &str {
    let mut best = 0.0_f64;
    let mut owner = UNKNOWN_OWNER;

    for candidate in owners {
        let age_hours =
            now_unix.saturating_sub(candidate.most_recent_commit_unix_timestamp) / SECONDS_PER_HOUR;
        let score = candidate.line_count as f64 / (age_hours as f64).powf(DECAY_EXPONENT);

        // NaN (no lines in the current hour, or a commit in the future) never wins.
        if score > best {
            best = score;
            owner = &candidate.name;
        }
    }

    owner
}
