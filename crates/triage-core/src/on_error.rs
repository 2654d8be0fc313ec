use serde::{Deserialize, Serialize};

/// What the engine does when an oracle call fails at the transport level.
///
/// The default preserves the reference behavior: the failure propagates and
/// the batch aborts with no partial result. `SubstituteIndeterminate` is the
/// explicit opt-in: the failing category is recorded as indeterminate and
/// the batch continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[default]
    FailFast,
    SubstituteIndeterminate,
}
