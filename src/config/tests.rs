mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;
    use crate::store::enums::store_engine::StoreEngine;

    #[test]
    fn test_default_configuration_values() {
        let config = Configuration::default();
        assert_eq!(config.tracker_config.request_interval, 60);
        assert_eq!(config.tracker_config.peers_timeout, 86400);
        assert_eq!(config.tracker_config.peers_scan_limit, 160);
        assert_eq!(config.tracker_config.tracker_id, "tg snapshot tracker");
        assert!(config.tracker_config.serialize_updates);
        assert_eq!(config.store.engine, StoreEngine::sqlite3);
        assert_eq!(config.store.table_name, "peers");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip_keeps_every_section() {
        let config = Configuration::default();
        let serialized = toml::to_string(&config).unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_broken_toml() {
        assert!(Configuration::load(b"log_level = ").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_table_name() {
        let mut config = Configuration::default();
        config.store.table_name = String::from("peers; DROP TABLE x");
        match config.validate() {
            Err(ConfigurationError::ValidationError(message)) => assert!(message.contains("[STORE] Table")),
            other => panic!("unexpected validation result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = Configuration::default();
        config.tracker_config.peers_scan_limit = 0;
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.tracker_config.update_locks = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_caps_update_locks() {
        let mut config = Configuration::default();
        config.tracker_config.update_locks = 256;
        assert!(config.validate().is_ok());

        config.tracker_config.update_locks = 257;
        match config.validate() {
            Err(ConfigurationError::ValidationError(message)) => assert!(message.contains("update_locks")),
            other => panic!("unexpected validation result: {:?}", other),
        }

        config.tracker_config.update_locks = 10_000_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_error_display() {
        let error = ConfigurationError::ValidationError(String::from("bad value"));
        assert_eq!(error.to_string(), "bad value");
    }
}
