use serde::{Deserialize, Serialize};

/// Classification of a change notification.
///
/// The provider may introduce new event types over time; anything outside
/// the three lifecycle events parses as `Other` and must be accepted
/// without failing the delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Created,
    Updated,
    Deleted,
    Other,
}

impl EventKind {
    /// Parse a provider event-type string. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "user.created" => Self::Created,
            "user.updated" => Self::Updated,
            "user.deleted" => Self::Deleted,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
