//! Tests for the construction-time option set.

use std::collections::HashMap;

use gcm_message::{DEFAULT_PRIORITY, DEFAULT_TIME_TO_LIVE, Message, MessageOptions};
use serde_json::{Value, json};

#[test]
fn test_defaults() {
    let options = MessageOptions::default();

    assert_eq!(options.collapse_key, "");
    assert_eq!(options.time_to_live, DEFAULT_TIME_TO_LIVE);
    assert!(!options.delay_while_idle);
    assert_eq!(options.restricted_package_name, "");
    assert!(!options.dry_run);
    assert!(options.content_available);
    assert_eq!(options.priority, DEFAULT_PRIORITY);
}

#[test]
fn test_struct_update_overrides_only_named_fields() {
    let options = MessageOptions {
        collapse_key: "updates".to_string(),
        delay_while_idle: true,
        ..Default::default()
    };

    assert_eq!(options.collapse_key, "updates");
    assert!(options.delay_while_idle);
    assert_eq!(options.time_to_live, DEFAULT_TIME_TO_LIVE);
    assert!(!options.dry_run);
}

#[test]
fn test_options_flow_through_to_the_document() {
    let options = MessageOptions {
        collapse_key: "updates".to_string(),
        time_to_live: 300,
        delay_while_idle: true,
        restricted_package_name: "com.example.app".to_string(),
        dry_run: true,
        ..Default::default()
    };
    let message = Message::with_options(HashMap::new(), options);

    let body = message.build("tok").expect("build");
    let doc: Value = serde_json::from_str(&body).expect("valid JSON");

    assert_eq!(doc["collapse_key"], json!("updates"));
    assert_eq!(doc["time_to_live"], json!(300));
    assert_eq!(doc["delay_while_idle"], json!(true));
    assert_eq!(doc["restricted_package_name"], json!("com.example.app"));
    assert_eq!(doc["dry_run"], json!(true));
}

#[test]
fn test_delay_while_idle_option_is_honored() {
    let options = MessageOptions {
        delay_while_idle: true,
        ..Default::default()
    };
    let message = Message::with_options(HashMap::new(), options);

    assert!(message.delay_while_idle());
    let body = message.build("tok").expect("build");
    assert!(body.contains("\"delay_while_idle\":true"));
}
