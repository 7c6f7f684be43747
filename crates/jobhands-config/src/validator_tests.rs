    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_invalid_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.port"));
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.host"));
    }

    #[test]
    fn test_validate_blank_instance_name() {
        let mut config = Config::default();
        config.scheduler.instance_name = "   ".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "scheduler.instance_name"));
    }

    #[test]
    fn test_validate_no_builders() {
        let mut config = Config::default();
        config.scheduler.builders.clear();

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "scheduler.builders"));
    }

    #[test]
    fn test_validate_unknown_builder() {
        let mut config = Config::default();
        config.scheduler.builders = vec!["generic".to_string(), "sms".to_string()];

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors[0].message.contains("sms"));
    }

    #[test]
    fn test_validate_duplicate_builder() {
        let mut config = Config::default();
        config.scheduler.builders = vec!["email".to_string(), "email".to_string()];

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_validate_filter_directive_level_warning() {
        let mut config = Config::default();
        config.logging.level = "jobhands_core=debug".to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "logging.level"));
    }

    #[test]
    fn test_into_result_reports_first_error() {
        let mut config = Config::default();
        config.server.port = 0;
        config.server.host = String::new();

        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "server.port"
        ));
    }

    #[test]
    fn test_into_result_passes_warnings_through() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        let warnings = ConfigValidator::validate(&config).into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }
