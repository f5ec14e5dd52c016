//! Tail type for one- and two-tailed classification.

use serde::{Deserialize, Serialize};

/// Which side(s) of the distribution count as anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TailType {
    /// Only the lower thresholds apply.
    LeftTailed,
    /// Only the upper thresholds apply.
    RightTailed,
    /// Both sides apply.
    TwoTailed,
}
