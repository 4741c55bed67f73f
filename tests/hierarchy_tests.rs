//! Integration tests for hierarchy-path reads over realistic fixtures.

use hierpath::{decode, encode, get_in, get_in_or, is_wildcard_hp, Segment, Value};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// League data with nested sequences: single and double wildcard territory.
fn teams() -> Value {
    v(json!({
        "compile-day": "monday",
        "compile-secret": "SECRET!",
        "nhl": [
            {"team": "stars", "players": 10, "pos": ["l", "r", "c"]},
            {"team": "bruins", "players": 30},
            {"team": "preds", "players": 90},
        ],
        "nba": [
            {"team": "mavs", "players": -9, "details": [
                {"who": "bill", "pos": ["r", "c", "l"]},
                {"who": "ted", "pos": ["d"]},
                {"who": "fred"},
            ]},
            {"team": "bucks", "players": 3, "details": [
                {"who": "ken", "pos": ["c"]},
            ]},
        ],
    }))
}

/// Roster data with deep object nesting and uneven sequence lengths.
fn roster() -> Value {
    v(json!({
        "Coach": {
            "Name": {"Title": "Mr", "Surname": "one", "GivenName": "person"},
            "DOB": "1984-01-01",
            "Gender": "F",
        },
        "TeamPlayers": [
            {
                "Name": {"Title": "Mr", "Surname": "one", "GivenName": "person"},
                "DOB": "1984-01-01",
                "jerseyDetails": [
                    {"JerseyNumber": "#1", "Size": "Large"},
                    {"JerseyNumber": "1", "Size": "Small"},
                ],
                "Gender": "M",
            },
            {
                "Name": {"Title": "Mr", "Surname": "two", "GivenName": "person"},
                "DOB": "1901-01-01",
                "jerseyDetails": [{"JerseyNumber": "ID2", "Size": "Large"}],
                "Gender": "F",
            },
        ],
        "ExtraData": [
            {"Name": "LikesCake", "Value": "true"},
            {"Name": "HasTwin", "Value": "true"},
            {"Name": "EnjoysTwin", "Value": "false"},
            {"Name": "FavCity", "Value": "Dallas"},
            {"Name": "HasChildren", "Value": "false"},
            {"Name": "MathGrade", "Value": "A"},
            {"Name": "US-State", "Value": "CT"},
            {"Name": "Date", "Value": "2019-01-01"},
        ],
    }))
}

#[test]
fn test_path_codec_round_trip() {
    let segments = vec![
        Segment::key("root"),
        Segment::index(0),
        Segment::key("thing"),
        Segment::index(2),
    ];
    let hp = encode(&segments).unwrap();
    assert_eq!(hp, "/root/0/thing/2");
    assert_eq!(decode(&hp), segments);
}

#[test]
fn test_get_simple() {
    assert_eq!(get_in("/a", &v(json!({"a": 33}))).unwrap(), v(json!(33)));
    assert_eq!(
        get_in("/a/b/c", &v(json!({"a": {"b": {"c": 99}}}))).unwrap(),
        v(json!(99))
    );
}

#[test]
fn test_get_through_sequences() {
    let teams = teams();

    assert_eq!(get_in("/nhl/1/team", &teams).unwrap(), v(json!("bruins")));
    assert_eq!(get_in("/nhl/2/team", &teams).unwrap(), v(json!("preds")));

    // A path can resolve to a whole object...
    assert_eq!(
        get_in("/nhl/1", &teams).unwrap(),
        v(json!({"team": "bruins", "players": 30}))
    );

    // ...or a whole sequence.
    assert_eq!(
        get_in("/nhl/0/pos", &teams).unwrap(),
        v(json!(["l", "r", "c"]))
    );
}

#[test]
fn test_get_single_wildcard() {
    let teams = teams();
    assert_eq!(
        get_in("/nhl/*/team", &teams).unwrap(),
        v(json!(["stars", "bruins", "preds"]))
    );
}

#[test]
fn test_get_double_wildcard_mirrors_shape() {
    // The first team has three detail records, the second has one; the
    // result nests the same way.
    let teams = teams();
    assert_eq!(
        get_in("/nba/*/details/*/who", &teams).unwrap(),
        v(json!([["bill", "ted", "fred"], ["ken"]]))
    );
}

#[test]
fn test_get_triple_wildcard_with_missing_leaf() {
    // fred has no pos, so that branch resolves to null in place.
    let teams = teams();
    assert_eq!(
        get_in("/nba/*/details/*/pos/*/", &teams).unwrap(),
        v(json!([[["r", "c", "l"], ["d"], null], [["c"]]]))
    );
}

#[test]
fn test_flatten_wildcard_read() {
    let teams = teams();
    let nested = get_in("/nba/*/details/*/pos/*/", &teams).unwrap();
    let flat = hierpath::flatten(nested.as_array().unwrap());
    assert_eq!(
        flat,
        vec![
            v(json!("r")),
            v(json!("c")),
            v(json!("l")),
            v(json!("d")),
            Value::Null,
            v(json!("c")),
        ]
    );
}

#[test]
fn test_get_atomic_roster_fields() {
    let roster = roster();
    assert_eq!(
        get_in("/Coach/Name/GivenName", &roster).unwrap(),
        v(json!("person"))
    );
    assert_eq!(get_in("/Coach/Name/Surname", &roster).unwrap(), v(json!("one")));
    assert_eq!(get_in("/Coach/DOB", &roster).unwrap(), v(json!("1984-01-01")));
}

#[test]
fn test_get_with_integer_segments() {
    let roster = roster();
    assert_eq!(
        get_in("/TeamPlayers/0/Name/GivenName", &roster).unwrap(),
        v(json!("person"))
    );
    assert_eq!(
        get_in("/TeamPlayers/1/Name/Surname", &roster).unwrap(),
        v(json!("two"))
    );
    assert_eq!(
        get_in("/TeamPlayers/1/DOB", &roster).unwrap(),
        v(json!("1901-01-01"))
    );
    assert_eq!(
        get_in("/ExtraData/0/Name", &roster).unwrap(),
        v(json!("LikesCake"))
    );
    assert_eq!(
        get_in("/ExtraData/2/Value", &roster).unwrap(),
        v(json!("false"))
    );
}

#[test]
fn test_get_single_wildcard_roster() {
    let roster = roster();
    assert_eq!(
        get_in("/ExtraData/*/Name", &roster).unwrap(),
        v(json!([
            "LikesCake",
            "HasTwin",
            "EnjoysTwin",
            "FavCity",
            "HasChildren",
            "MathGrade",
            "US-State",
            "Date",
        ]))
    );
    assert_eq!(
        get_in("/TeamPlayers/*/Name/GivenName", &roster).unwrap(),
        v(json!(["person", "person"]))
    );
    assert_eq!(
        get_in("/TeamPlayers/*/Name/Surname", &roster).unwrap(),
        v(json!(["one", "two"]))
    );
    assert_eq!(
        get_in("/TeamPlayers/*/DOB", &roster).unwrap(),
        v(json!(["1984-01-01", "1901-01-01"]))
    );
}

#[test]
fn test_get_double_wildcard_roster() {
    let roster = roster();
    assert_eq!(
        get_in("/TeamPlayers/*/jerseyDetails/*/JerseyNumber", &roster).unwrap(),
        v(json!([["#1", "1"], ["ID2"]]))
    );
    assert_eq!(
        get_in("/TeamPlayers/*/jerseyDetails/*/Size", &roster).unwrap(),
        v(json!([["Large", "Small"], ["Large"]]))
    );
}

#[test]
fn test_defaulting_read_on_miss() {
    let teams = teams();
    assert_eq!(
        get_in_or("/nhl/9/team", &teams, Value::Null).unwrap(),
        Value::Null
    );
    assert_eq!(
        get_in_or("/nhl/0/coach", &teams, v(json!("none"))).unwrap(),
        v(json!("none"))
    );
}

#[test]
fn test_wildcard_detection_quirk() {
    // The detection predicate matches the exact substring `/*/`, so a
    // trailing wildcard needs a trailing delimiter to fan out.
    assert!(is_wildcard_hp("/nhl/*/team"));
    assert!(is_wildcard_hp("/nhl/*/"));
    assert!(!is_wildcard_hp("/nhl/*"));
}

#[test]
fn test_numeric_looking_keys_coerce_to_indices() {
    // After decoding, a map key "0" is indistinguishable from index 0,
    // so it cannot be addressed through a path.
    let tree = v(json!({"0": "zero"}));
    assert!(get_in("/0", &tree).is_err());
}
