use chrono::{TimeZone, Utc};
use libiotconnect::rest::credentials::parse_expiration;
use libiotconnect::rest::parser::{
    EC_RESPONSE_MAPPING, parse_credentials_response, parse_discovery_response,
    parse_identity_response,
};

const IDENTITY_OK: &str = r#"{
  "d": {
    "ec": 0,
    "ct": 1,
    "meta": {
      "at": 1, "df": 60, "cd": "ABC123",
      "gtw": 0, "edge": 1, "pf": 1,
      "hwv": "", "swv": "1.0", "v": 2.1
    },
    "has": { "d": 1, "attr": 1, "set": 0, "r": 0, "ota": 1 },
    "p": {
      "n": "my-device-01",
      "h": "broker.example.com",
      "p": 8883,
      "id": "MYCPID-my-device-01",
      "un": "broker.example.com/MYCPID-my-device-01",
      "topics": {
        "rpt": "$aws/rules/msg_d2c_rpt/MYCPID-my-device-01/2.1/0",
        "ack": "iot/MYCPID-my-device-01/ack",
        "c2d": "iot/MYCPID-my-device-01/cmd",
        "set": {
          "pub": "$aws/things/MYCPID-my-device-01/shadow/name/setting_info/report",
          "sub": "$aws/things/MYCPID-my-device-01/shadow/name/setting_info/property_desired"
        }
      },
      "vs": {
        "url": "https://creds.example.com/role-aliases/kvs-role/credentials",
        "as": true
      },
      "fs": {
        "url": "https://creds.example.com/role-aliases/fs-role/credentials",
        "buckets": [
          {
            "bn": "device-uploads",
            "ca": true,
            "rarn": "arn:aws:iam::123456789012:role/CrossAccountAccess"
          },
          { "bn": "device-logs", "ca": false }
        ]
      }
    },
    "dt": "2026-01-20T22:00:00Z"
  },
  "status": 200,
  "message": ""
}"#;

#[test]
fn discovery_returns_base_url() {
    let raw = br#"{"d":{"ec":0,"bu":"https://x","pf":"aws","dip":1},"status":200,"message":""}"#;
    let base_url = parse_discovery_response(raw).unwrap();
    assert_eq!(base_url.as_str(), "https://x");
}

#[test]
fn discovery_maps_error_code_seven() {
    let raw = br#"{"d":{"ec":7},"status":200,"message":"denied"}"#;
    let error = parse_discovery_response(raw).unwrap_err();
    assert!(error.is_config());
    assert!(error.message().contains("Subscription is expired."));
    assert!(error.message().contains("ec=7"));
    assert!(error.message().contains("status=200"));
    assert!(error.message().contains("denied"));
}

#[test]
fn discovery_reports_unmapped_error_code() {
    let raw = br#"{"d":{"ec":42},"status":200}"#;
    let error = parse_discovery_response(raw).unwrap_err();
    assert!(error.message().contains("ec==42"));
    assert!(error.message().contains("(message not available)"));
}

#[test]
fn highest_mapped_error_code_is_in_range() {
    let last = EC_RESPONSE_MAPPING.len() - 1;
    let raw = format!(r#"{{"d":{{"ec":{}}},"status":200}}"#, last);
    let error = parse_discovery_response(raw.as_bytes()).unwrap_err();
    assert!(error.message().contains("Invalid Operational Certificate."));
}

#[test]
fn first_out_of_table_error_code_is_unmapped() {
    let raw = format!(r#"{{"d":{{"ec":{}}},"status":200}}"#, EC_RESPONSE_MAPPING.len());
    let error = parse_discovery_response(raw.as_bytes()).unwrap_err();
    assert!(error.message().contains("ec==11"));
}

#[test]
fn discovery_rejects_missing_base_url() {
    let raw = br#"{"d":{"ec":0,"bu":null},"status":200,"message":""}"#;
    let error = parse_discovery_response(raw).unwrap_err();
    assert!(error.is_config());
    assert!(error.message().contains("missing base URL"));
}

#[test]
fn discovery_rejects_bad_status_despite_zero_ec() {
    let raw = br#"{"d":{"ec":0,"bu":"https://x"},"status":204,"message":"moved"}"#;
    let error = parse_discovery_response(raw).unwrap_err();
    assert!(error.message().contains("status=204"));
    assert!(error.message().contains("moved"));
}

#[test]
fn discovery_rejects_missing_data_block() {
    let raw = br#"{"status":200,"message":"hello"}"#;
    let error = parse_discovery_response(raw).unwrap_err();
    assert!(error.message().contains("not available"));
}

#[test]
fn discovery_rejects_malformed_json() {
    let error = parse_discovery_response(b"{not json").unwrap_err();
    assert!(error.is_config());
    assert!(error.message().contains("Discovery JSON Parsing Error"));
}

#[test]
fn identity_maps_full_payload() {
    let identity = parse_identity_response(IDENTITY_OK.as_bytes()).unwrap();

    assert_eq!(identity.host.as_deref(), Some("broker.example.com"));
    assert_eq!(identity.port, 8883);
    assert_eq!(identity.client_id.as_deref(), Some("MYCPID-my-device-01"));
    assert_eq!(
        identity.username.as_deref(),
        Some("broker.example.com/MYCPID-my-device-01")
    );
    assert_eq!(
        identity.topics.rpt.as_deref(),
        Some("$aws/rules/msg_d2c_rpt/MYCPID-my-device-01/2.1/0")
    );
    assert!(
        identity
            .topics
            .set
            .publish
            .as_deref()
            .unwrap()
            .ends_with("/report")
    );
    assert!(identity.is_edge_device);
    assert!(!identity.is_gateway_device);
    assert_eq!(identity.protocol_version.as_str(), "2.1");
    assert!(identity.capabilities.data);
    assert!(identity.capabilities.ota);
    assert!(!identity.capabilities.settings);

    let vs = identity.video_streaming.as_ref().unwrap();
    assert!(vs.auto_start);
    assert_eq!(
        vs.credential_endpoint.as_deref(),
        Some("https://creds.example.com/role-aliases/kvs-role/credentials")
    );

    let fs = identity.file_storage.as_ref().unwrap();
    assert_eq!(fs.buckets.len(), 2);
    assert_eq!(fs.buckets[0].name.as_deref(), Some("device-uploads"));
    assert!(fs.buckets[0].is_cross_account);
    assert_eq!(
        fs.buckets[0].role_arn.as_deref(),
        Some("arn:aws:iam::123456789012:role/CrossAccountAccess")
    );
    assert!(!fs.buckets[1].is_cross_account);
    assert!(fs.buckets[1].role_arn.is_none());
}

#[test]
fn identity_without_optional_blocks() {
    let raw = br#"{
      "d": {
        "ec": 0,
        "meta": { "gtw": 1, "edge": 0, "v": 2.1 },
        "has": { "d": 1 },
        "p": { "h": "h.example.com", "id": "cp-d", "topics": {} }
      },
      "status": 200
    }"#;
    let identity = parse_identity_response(raw).unwrap();
    assert!(identity.video_streaming.is_none());
    assert!(identity.file_storage.is_none());
    assert!(identity.is_gateway_device);
    assert!(!identity.is_edge_device);
}

#[test]
fn identity_maps_error_code_one() {
    let raw = br#"{"d":{"ec":1},"status":200,"message":""}"#;
    let error = parse_identity_response(raw).unwrap_err();
    assert!(error.is_config());
    assert!(error.message().contains("Identity failed"));
    assert!(error.message().contains("not whitelisted"));
}

#[test]
fn credentials_complete_payload() {
    let raw = br#"{
      "credentials": {
        "accessKeyId": "ASIAEXAMPLEKEY",
        "secretAccessKey": "secret",
        "sessionToken": "token",
        "expiration": "2026-01-20T22:54:09Z"
      }
    }"#;
    let data = parse_credentials_response(raw).unwrap();
    assert_eq!(data.access_key_id.as_deref(), Some("ASIAEXAMPLEKEY"));
    assert_eq!(data.secret_access_key.as_deref(), Some("secret"));
    assert_eq!(data.session_token.as_deref(), Some("token"));
    assert_eq!(data.expiration.as_deref(), Some("2026-01-20T22:54:09Z"));
}

#[test]
fn credentials_missing_session_token() {
    let raw = br#"{"credentials":{"accessKeyId":"a","secretAccessKey":"b"}}"#;
    let error = parse_credentials_response(raw).unwrap_err();
    assert!(error.is_client());
    assert!(error.message().contains("missing required fields"));
}

#[test]
fn credentials_empty_field_counts_as_missing() {
    let raw = br#"{"credentials":{"accessKeyId":"a","secretAccessKey":"b","sessionToken":""}}"#;
    let error = parse_credentials_response(raw).unwrap_err();
    assert!(error.is_client());
}

#[test]
fn credentials_access_denied_gets_template_hint() {
    let raw = br#"{"credentials":{},"message":"Access Denied"}"#;
    let error = parse_credentials_response(raw).unwrap_err();
    assert!(error.is_client());
    assert!(error.message().contains("Access Denied"));
    assert!(error.message().contains("template"));
}

#[test]
fn credentials_surfaces_server_message() {
    let raw = br#"{"credentials":{},"message":"Forbidden"}"#;
    let error = parse_credentials_response(raw).unwrap_err();
    assert!(error.message().contains("Forbidden"));
}

#[test]
fn credentials_malformed_json_is_client_error() {
    let error = parse_credentials_response(b"oops").unwrap_err();
    assert!(error.is_client());
    assert!(error.message().contains("Credentials JSON Parsing Error"));
}

#[test]
fn expiration_parses_utc_instant() {
    let instant = parse_expiration("2026-01-20T22:54:09Z").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 20, 22, 54, 9).unwrap());
}

#[test]
fn expiration_accepts_offset_and_normalizes_to_utc() {
    let instant = parse_expiration("2026-01-20T23:54:09+01:00").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 20, 22, 54, 9).unwrap());
}

#[test]
fn expiration_rejects_malformed_string() {
    let error = parse_expiration("not-a-date").unwrap_err();
    assert!(error.is_client());
    assert!(error.message().contains("not-a-date"));
}
