use dicom_node_settings::{DicomServicesConfig, MoveDestination, SopClass};

fn sample_document() -> &'static str {
    r#"
        aetitle = "ARCHIVE-1"
        device-description = "main archive"
        allowed-aetitles = "TRUSTED-SCU"
        priority-aetitles = ["CT-1"]
        allowed-local-interfaces = ["eth0", "lo"]
        allowed-hostnames = "any"

        sop-classes = [
            "1.2.840.10008.5.1.4.1.1.1",
            { uid = "1.2.840.10008.5.1.4.1.1.2", transfer-syntaxes = ["1.2.840.10008.1.2.1"] },
            { uid = "default", transfer-syntaxes = ["1.2.840.10008.1.2"] },
        ]

        [[move-destinations]]
        ae-title = "OFFSITE"
        ip-address = "10.0.0.9"
        port = 104

        [storage]
        autostart = false
        port = 6667

        [query-retrieve]
        port = 1046
    "#
}

#[test]
fn test_document_decodes_with_coercion_and_resolution() {
    let config = DicomServicesConfig::from_toml_str(sample_document()).unwrap();

    assert_eq!(config.aetitle, "ARCHIVE-1");
    assert_eq!(config.device_description.as_deref(), Some("main archive"));
    // Bare scalars arrive as one-element lists
    assert_eq!(config.allowed_aetitles, vec!["TRUSTED-SCU"]);
    assert_eq!(config.allowed_hostnames, vec!["any"]);
    assert_eq!(config.allowed_local_interfaces, vec!["eth0", "lo"]);
    assert_eq!(config.priority_aetitles, vec!["CT-1"]);

    // The default entry is extracted, the bare UID is backfilled with it
    assert_eq!(
        config.sop_classes(),
        [
            SopClass::new("1.2.840.10008.5.1.4.1.1.1")
                .with_transfer_syntaxes(["1.2.840.10008.1.2"]),
            SopClass::new("1.2.840.10008.5.1.4.1.1.2")
                .with_transfer_syntaxes(["1.2.840.10008.1.2.1"]),
        ]
    );
    assert_eq!(config.default_transfer_syntaxes(), ["1.2.840.10008.1.2"]);

    assert_eq!(config.move_destinations().len(), 1);
    assert_eq!(config.move_destinations()[0].ae_title, "OFFSITE");

    assert!(!config.storage.autostart);
    assert_eq!(config.storage.port, 6667);
    assert_eq!(config.query_retrieve.port, 1046);
    // Keys the document does not mention keep their defaults
    assert!(config.query_retrieve.autostart);
}

#[test]
fn test_default_factory_roundtrips_through_toml() {
    let original = DicomServicesConfig::default();
    let encoded = original.to_toml_string().unwrap();
    let decoded = DicomServicesConfig::from_toml_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_populated_settings_roundtrip_through_toml() {
    let mut original = DicomServicesConfig::from_toml_str(sample_document()).unwrap();
    original.add_move_destination(
        MoveDestination::new("OFFSITE", "10.0.0.10", 11112).with_description("mirror"),
    );

    let encoded = original.to_toml_string().unwrap();
    let decoded = DicomServicesConfig::from_toml_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_empty_uid_default_reencodes_with_canonical_spelling() {
    let config = DicomServicesConfig::from_toml_str(
        r#"
        sop-classes = [
            "1.2.840.10008.5.1.4.1.1.7",
            { uid = "", transfer-syntaxes = ["1.2.840.10008.1.2"] },
        ]
    "#,
    )
    .unwrap();

    let encoded = config.to_toml_string().unwrap();
    // The extracted default goes back out as a "default" pseudo-entry
    assert!(encoded.contains("default"));

    let decoded = DicomServicesConfig::from_toml_str(&encoded).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn test_json_document_decodes_the_same_shape() {
    let value = serde_json::json!({
        "aetitle": "ARCHIVE-2",
        "allowed-aetitles": "TRUSTED-SCU",
        "allowed-hostnames": ["pacs.local"],
        "sop-classes": [
            "1.2.840.10008.5.1.4.1.1.1",
            { "uid": "default", "transfer-syntaxes": ["1.2.840.10008.1.2"] },
        ],
        "move-destinations": [
            { "ae-title": "R1", "ip-address": "10.0.0.9", "port": 104 },
        ],
    });

    let config: DicomServicesConfig = serde_json::from_value(value).unwrap();

    assert_eq!(config.aetitle, "ARCHIVE-2");
    assert_eq!(config.allowed_aetitles, vec!["TRUSTED-SCU"]);
    assert_eq!(
        config.sop_classes(),
        [SopClass::new("1.2.840.10008.5.1.4.1.1.1")
            .with_transfer_syntaxes(["1.2.840.10008.1.2"])]
    );
    assert_eq!(config.move_destinations()[0].ae_title, "R1");
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dicom-services.toml");

    let original = DicomServicesConfig::from_toml_str(sample_document()).unwrap();
    original.save(&path).unwrap();

    let loaded = DicomServicesConfig::load(&path).unwrap();
    assert_eq!(loaded, original);
}
