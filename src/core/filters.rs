//! Player search filters.
//!
//! A [`FilterCriteria`] holds the four free-text constraints a user can put on
//! a player search. Empty and absent values are equivalent, and a field only
//! counts as *active* when its trimmed value is non-empty.
//!
//! # Query parameters
//!
//! Active fields are sent to the backend as query parameters in a fixed order:
//!
//! - **name**: substring of the player's name
//! - **team**: team name
//! - **position**: playing position
//! - **nation**: nationality
//!
//! The order never depends on which field was filled in first, so the same
//! criteria always produce the same request URL.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// One of the four filterable player fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Name,
    Team,
    Position,
    Nation,
}

impl FilterField {
    /// Query-string order used for every request.
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Team,
        FilterField::Position,
        FilterField::Nation,
    ];

    /// Query parameter name understood by the backend.
    pub fn param_name(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Team => "team",
            FilterField::Position => "position",
            FilterField::Nation => "nation",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

impl FromStr for FilterField {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "player" => Ok(FilterField::Name),
            "team" | "club" => Ok(FilterField::Team),
            "position" | "pos" => Ok(FilterField::Position),
            "nation" | "nationality" => Ok(FilterField::Nation),
            other => Err(ApiError::validation(format!("unknown filter field: {other}"))),
        }
    }
}

/// Optional constraints narrowing a player search.
///
/// # Examples
///
/// ```rust
/// use premier_zone::core::filters::{FilterCriteria, FilterField};
///
/// let mut criteria = FilterCriteria::default();
/// assert!(!criteria.has_active_filters());
///
/// criteria.set(FilterField::Team, "Arsenal");
/// criteria.set(FilterField::Name, "Saka");
/// assert_eq!(
///     criteria.active_pairs(),
///     vec![("name", "Saka"), ("team", "Arsenal")]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
}

impl FilterCriteria {
    /// Criteria constraining only the player name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Raw (untrimmed) value of a field.
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Name => self.name.as_deref(),
            FilterField::Team => self.team.as_deref(),
            FilterField::Position => self.position.as_deref(),
            FilterField::Nation => self.nation.as_deref(),
        }
    }

    /// Replace one field. An empty value is stored as `None`.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FilterField::Name => &mut self.name,
            FilterField::Team => &mut self.team,
            FilterField::Position => &mut self.position,
            FilterField::Nation => &mut self.nation,
        };
        *slot = if value.is_empty() { None } else { Some(value) };
    }

    /// Trimmed value of a field, or `None` when the field is not active.
    pub fn active(&self, field: FilterField) -> Option<&str> {
        self.get(field)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// True when any field has a non-whitespace value.
    pub fn has_active_filters(&self) -> bool {
        FilterField::ALL
            .iter()
            .any(|field| self.active(*field).is_some())
    }

    /// Active fields as `(param, trimmed value)` pairs in query-string order.
    pub fn active_pairs(&self) -> Vec<(&'static str, &str)> {
        FilterField::ALL
            .iter()
            .filter_map(|field| self.active(*field).map(|v| (field.param_name(), v)))
            .collect()
    }
}
