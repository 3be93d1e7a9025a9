//! Tests for player record decoding and validation

use super::*;
use serde_json::json;

fn backend_player() -> serde_json::Value {
    json!({
        "id": 9,
        "playerName": "Erling Haaland",
        "nation": "NOR",
        "position": "FW",
        "age": 23,
        "matchesPlayed": 31,
        "starts": 29,
        "minutesPlayed": 2552.0,
        "goals": 27.0,
        "assists": 5.0,
        "penaltyGoals": 7.0,
        "yellowCards": 1.0,
        "redCards": 0.0,
        "expectedGoals": 29.2,
        "expectedAssists": 3.8,
        "teamName": "Manchester City"
    })
}

#[test]
fn test_decode_backend_player() {
    let record: PlayerRecord = serde_json::from_value(backend_player()).unwrap();

    assert_eq!(record.id, Some(9));
    assert_eq!(record.name, "Erling Haaland");
    assert_eq!(record.team, "Manchester City");
    assert_eq!(record.position, "FW");
    assert_eq!(record.age, Some(23));
    assert_eq!(record.matches_played, Some(31));
    assert_eq!(record.minutes_played, Some(2552.0));
    assert_eq!(record.expected_goals, Some(29.2));
    assert!(record.validate().is_ok());
}

#[test]
fn test_decode_accepts_short_aliases() {
    let record: PlayerRecord = serde_json::from_value(json!({
        "id": 4,
        "name": "Bukayo Saka",
        "team": "Arsenal",
        "position": "Forward",
        "nation": "England",
        "goals": 14
    }))
    .unwrap();

    assert_eq!(record.name, "Bukayo Saka");
    assert_eq!(record.team, "Arsenal");
    assert_eq!(record.goals, Some(14.0));
}

#[test]
fn test_decode_missing_fields_are_unknown() {
    let record: PlayerRecord = serde_json::from_value(json!({ "playerName": "Nobody" })).unwrap();

    assert_eq!(record.id, None);
    assert_eq!(record.team, "");
    assert_eq!(record.age, None);
    assert_eq!(record.goals, None);
    assert_eq!(record.expected_assists, None);
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let record: PlayerRecord = serde_json::from_value(json!({
        "playerName": "Cole Palmer",
        "hibernateLazyInitializer": {},
        "appearances": 34
    }))
    .unwrap();
    assert_eq!(record.name, "Cole Palmer");
}

#[test]
fn test_serialize_uses_backend_names_and_skips_absent() {
    let record = PlayerRecord::new("Mohamed Salah", "Liverpool", "Forward", "Egypt");
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        json!({
            "playerName": "Mohamed Salah",
            "teamName": "Liverpool",
            "position": "Forward",
            "nation": "Egypt"
        })
    );
}

#[test]
fn test_key_prefers_id_then_name() {
    let mut record = PlayerRecord::new("Son Heung-min", "Tottenham", "Forward", "South Korea");
    assert_eq!(record.key(), PlayerKey::Name("Son Heung-min"));

    record.id = Some(7);
    assert_eq!(record.key(), PlayerKey::Id(7));
}

#[test]
fn test_validate_rejects_blank_name() {
    let record = PlayerRecord {
        id: Some(3),
        name: "  ".to_string(),
        ..PlayerRecord::default()
    };
    let err = record.validate().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("player 3 has no name"));
}

#[test]
fn test_validate_rejects_negative_stat() {
    let record = PlayerRecord {
        goals: Some(-1.0),
        ..PlayerRecord::new("Virgil van Dijk", "Liverpool", "Defender", "Netherlands")
    };
    let err = record.validate().unwrap_err();
    assert!(err.to_string().contains("goals"));
}

#[test]
fn test_validate_rejects_non_finite_stat() {
    let record = PlayerRecord {
        expected_goals: Some(f64::NAN),
        ..PlayerRecord::new("Kevin De Bruyne", "Manchester City", "Midfielder", "Belgium")
    };
    assert!(record.validate().is_err());
}

#[test]
fn test_decode_null_fields_are_unknown() {
    let records: Vec<PlayerRecord> = serde_json::from_str(
        r#"[{"id":1,"playerName":"A","teamName":null,"position":"FW","nation":null,"age":null}]"#,
    )
    .unwrap();

    assert_eq!(records[0].name, "A");
    assert_eq!(records[0].team, "");
    assert_eq!(records[0].position, "FW");
    assert_eq!(records[0].nation, "");
    assert_eq!(records[0].age, None);
}

#[test]
fn test_decode_null_name_is_blank() {
    let record: PlayerRecord = serde_json::from_value(json!({ "id": 2, "playerName": null })).unwrap();
    assert_eq!(record.name, "");
    assert!(record.validate().is_err());
}

#[test]
fn test_decode_mistyped_stats_are_unknown() {
    let record: PlayerRecord = serde_json::from_value(json!({
        "playerName": "Trialist",
        "goals": "n/a",
        "assists": true,
        "matchesPlayed": -3,
        "starts": 2.5,
        "age": "21",
        "minutesPlayed": 900
    }))
    .unwrap();

    assert_eq!(record.goals, None);
    assert_eq!(record.assists, None);
    assert_eq!(record.matches_played, None);
    assert_eq!(record.starts, None);
    assert_eq!(record.age, None);
    assert_eq!(record.minutes_played, Some(900.0));
}

#[test]
fn test_permissive_decode_list_keeps_every_entry() {
    let body = r#"[
        {"playerName": "Erling Haaland", "goals": 27.0},
        {"playerName": null, "goals": -2.0},
        {"playerName": "Trialist", "teamName": null, "goals": "n/a"}
    ]"#;
    let records = ResponsePolicy::Permissive.decode_list(body).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].goals, Some(-2.0));
    assert_eq!(records[2].goals, None);
}

#[test]
fn test_decode_list_requires_an_array() {
    for policy in [ResponsePolicy::Permissive, ResponsePolicy::Strict] {
        match policy.decode_list(r#"{"playerName": "Solo"}"#).unwrap_err() {
            ApiError::Decode(_) => (),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }
}

#[test]
fn test_strict_decode_list_rejects_negative_count() {
    let err = ResponsePolicy::Strict
        .decode_list(r#"[{"playerName": "Broken", "matchesPlayed": -3}]"#)
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("matchesPlayed"));
}

#[test]
fn test_strict_decode_list_rejects_mistyped_decimal() {
    let err = ResponsePolicy::Strict
        .decode_list(r#"[{"playerName": "Broken", "goals": "n/a"}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("goals is not a number"));
}

#[test]
fn test_strict_decode_list_rejects_invalid_record() {
    let body = r#"[
        {"playerName": "Bruno Fernandes", "teamName": "Manchester United"},
        {"playerName": "", "goals": 1.0}
    ]"#;
    assert!(ResponsePolicy::Strict.decode_list(body).unwrap_err().is_validation());
}

#[test]
fn test_strict_decode_list_keeps_valid_records_in_order() {
    let body = r#"[{"playerName": "B", "teamName": null}, {"playerName": "A", "age": 20}]"#;
    let records = ResponsePolicy::Strict.decode_list(body).unwrap();
    assert_eq!(records[0].name, "B");
    assert_eq!(records[1].name, "A");
    assert_eq!(records[1].age, Some(20));
}

#[test]
fn test_decode_one_follows_policy() {
    let body = r#"{"id": 5, "playerName": "Kai Havertz", "goals": "n/a"}"#;

    let record = ResponsePolicy::Permissive.decode_one(body).unwrap();
    assert_eq!(record.id, Some(5));
    assert_eq!(record.goals, None);

    assert!(ResponsePolicy::Strict.decode_one(body).unwrap_err().is_validation());
}
