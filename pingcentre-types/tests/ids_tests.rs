use pingcentre_types::ClientId;
use std::collections::HashSet;
use std::str::FromStr;

// ── ClientId ──────────────────────────────────────────────────────

#[test]
fn client_id_new_is_unique() {
    let a = ClientId::new();
    let b = ClientId::new();
    assert_ne!(a, b);
}

#[test]
fn client_id_is_v4() {
    let id = ClientId::new();
    assert_eq!(id.as_uuid().get_version_num(), 4);
}

#[test]
fn client_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::new_v4();
    let id = ClientId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn client_id_display_is_hyphenated() {
    let uuid = uuid::Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let id = ClientId::from_uuid(uuid);
    assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
}

#[test]
fn client_id_display_and_parse() {
    let id = ClientId::new();
    let parsed = ClientId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn client_id_from_str_invalid() {
    assert!(ClientId::from_str("garbage").is_err());
}

#[test]
fn client_id_hash_and_eq() {
    let id = ClientId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn client_id_serializes_as_plain_string() {
    let id = ClientId::new();
    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json, serde_json::Value::String(id.to_string()));
}
