//! Anomaly severity levels.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Severity of a classified observation.
///
/// `Normal < Weak < Strong` for aggregation purposes. `ModelWarmup` is a
/// distinct state reported while a detector accumulates enough state to
/// classify reliably; it does not participate in the severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyLevel {
    Normal,
    Weak,
    Strong,
    ModelWarmup,
}

impl AnomalyLevel {
    /// Whether this level counts as an anomaly for aggregation.
    pub fn is_anomalous(self) -> bool {
        matches!(self, AnomalyLevel::Weak | AnomalyLevel::Strong)
    }

    fn severity(self) -> Option<u8> {
        match self {
            AnomalyLevel::Normal => Some(0),
            AnomalyLevel::Weak => Some(1),
            AnomalyLevel::Strong => Some(2),
            AnomalyLevel::ModelWarmup => None,
        }
    }
}

impl PartialOrd for AnomalyLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (self.severity(), other.severity()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}
