use crate::error::{ApiError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Identity used to key a player in listings.
///
/// Records that have not been persisted yet carry no id and fall back to
/// their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKey<'a> {
    Id(u64),
    Name(&'a str),
}

/// One player as served by the backend.
///
/// Every field except the name is optional. Missing, `null` or wrong-typed
/// stats decode as `None` and are shown as unknown rather than zero; a `null`
/// text field decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(
        rename = "playerName",
        alias = "name",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub name: String,
    #[serde(
        rename = "teamName",
        alias = "team",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub team: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nation: String,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub matches_played: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub starts: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub minutes_played: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub assists: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub penalty_goals: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub yellow_cards: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub red_cards: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_goals: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_assists: Option<f64>,
}

impl PlayerRecord {
    /// A record with only the descriptive fields filled in.
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
        nation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            position: position.into(),
            nation: nation.into(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> PlayerKey<'_> {
        match self.id {
            Some(id) => PlayerKey::Id(id),
            None => PlayerKey::Name(&self.name),
        }
    }

    /// Fractional stats by label, in display order.
    fn decimal_stats(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("minutesPlayed", self.minutes_played),
            ("goals", self.goals),
            ("assists", self.assists),
            ("penaltyGoals", self.penalty_goals),
            ("yellowCards", self.yellow_cards),
            ("redCards", self.red_cards),
            ("expectedGoals", self.expected_goals),
            ("expectedAssists", self.expected_assists),
        ]
    }

    /// Check the record invariants: a non-empty name and every present
    /// numeric stat finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation(match self.id {
                Some(id) => format!("player {id} has no name"),
                None => "player has no name".to_string(),
            }));
        }
        for (label, value) in self.decimal_stats() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ApiError::validation(format!(
                        "player {:?} has invalid {label}: {v}",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}

fn lenient_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Wire names of the whole-number stats.
const COUNT_FIELDS: [&str; 3] = ["age", "matchesPlayed", "starts"];

/// Wire names of the fractional stats.
const DECIMAL_FIELDS: [&str; 8] = [
    "minutesPlayed",
    "goals",
    "assists",
    "penaltyGoals",
    "yellowCards",
    "redCards",
    "expectedGoals",
    "expectedAssists",
];

/// Reject a raw entry whose stats would otherwise be dropped to unknown by
/// the lenient decoders.
fn check_wire_types(entry: &Value) -> Result<()> {
    let fields = entry
        .as_object()
        .ok_or_else(|| ApiError::validation(format!("player entry is not an object: {entry}")))?;

    for key in COUNT_FIELDS {
        match fields.get(key) {
            None | Some(Value::Null) => {}
            Some(v) if v.as_u64().is_some_and(|n| u32::try_from(n).is_ok()) => {}
            Some(v) => {
                return Err(ApiError::validation(format!(
                    "{key} is not a whole non-negative number: {v}"
                )))
            }
        }
    }
    for key in DECIMAL_FIELDS {
        match fields.get(key) {
            None | Some(Value::Null) | Some(Value::Number(_)) => {}
            Some(v) => return Err(ApiError::validation(format!("{key} is not a number: {v}"))),
        }
    }
    Ok(())
}

/// How the client treats records decoded from a backend response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Pass decoded records through untouched.
    #[default]
    Permissive,
    /// Reject the whole response if any record fails [`PlayerRecord::validate`].
    Strict,
}

impl ResponsePolicy {
    /// Decode a response body holding a JSON array of players.
    ///
    /// The body must be an array under either policy. `Permissive` keeps
    /// every entry with unreadable fields as unknown; `Strict` fails on the
    /// first entry with a wrong-typed stat or a record that does not
    /// [validate](PlayerRecord::validate).
    pub fn decode_list(&self, body: &str) -> Result<Vec<PlayerRecord>> {
        match self {
            ResponsePolicy::Permissive => Ok(serde_json::from_str(body)?),
            ResponsePolicy::Strict => {
                let entries: Vec<Value> = serde_json::from_str(body)?;
                entries.into_iter().map(strict_record).collect()
            }
        }
    }

    /// Decode a response body holding a single player.
    pub fn decode_one(&self, body: &str) -> Result<PlayerRecord> {
        match self {
            ResponsePolicy::Permissive => Ok(serde_json::from_str(body)?),
            ResponsePolicy::Strict => strict_record(serde_json::from_str(body)?),
        }
    }
}

fn strict_record(entry: Value) -> Result<PlayerRecord> {
    check_wire_types(&entry)?;
    let record: PlayerRecord = serde_json::from_value(entry)?;
    record.validate()?;
    Ok(record)
}
