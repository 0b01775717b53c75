use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Internal access role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular marketplace customer
    #[default]
    Standard,
    /// Vendor with access to the vendor portal
    Vendor,
    /// Staff member with access to the admin panel
    Admin,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vendor => "vendor",
            Self::Admin => "admin",
        }
    }

    /// Parse a provider-metadata role value.
    /// Unrecognized values map to `Standard` rather than failing; the
    /// metadata tiers are not trusted to carry only known values.
    pub fn from_metadata_value(value: &str) -> Self {
        Self::from_str(value).unwrap_or_default()
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "standard" => Ok(Self::Standard),
            "vendor" => Ok(Self::Vendor),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
