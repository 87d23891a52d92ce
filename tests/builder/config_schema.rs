use lessonprompt::config::Config;

#[test]
fn minimal_config_deserializes_with_defaults() {
    let toml = r#"
schema = "v1"
"#;

    let parsed: Config = toml::from_str(toml).expect("minimal config should deserialize");

    assert_eq!(parsed.schema, "v1");
    assert!(parsed.clipboard.enabled);
    assert_eq!(parsed.clipboard.ack_millis, 900);
    assert_eq!(parsed.clipboard.hold_millis, 10_000);
    assert!(parsed.storage.dir.is_none());
    assert!(parsed.prompt.templates_dir.is_none());
}

#[test]
fn full_config_round_trips_sections() {
    let toml = r#"
schema = "v2"

[storage]
dir = "/var/lib/lessonprompt"

[prompt]
templates_dir = "/etc/lessonprompt/templates"

[clipboard]
enabled = false
ack_millis = 1200
hold_millis = 0
"#;

    let parsed: Config = toml::from_str(toml).expect("full config should deserialize");
    assert!(parsed.validate().is_ok());
    assert!(!parsed.clipboard.enabled);
    assert_eq!(parsed.ack_duration().as_millis(), 1200);
    assert!(parsed.clipboard_hold().is_zero());
    assert_eq!(
        parsed.storage_dir(),
        std::path::PathBuf::from("/var/lib/lessonprompt")
    );
    assert_eq!(
        parsed.field_schema().unwrap(),
        lessonprompt::FieldSchema::streamlined_v2()
    );
}
