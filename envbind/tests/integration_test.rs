//! Integration tests

use envbind::{BindError, CaseTransform, EnvSchema, Options, Value};
use serial_test::serial;
use std::env;

#[derive(EnvSchema)]
struct BasicConfig {
    pub database_url: String,
    pub api_key: String,
}

#[derive(EnvSchema)]
struct ConfigWithDefaults {
    #[env(default = "127.0.0.1:8080")]
    pub server_addr: String,

    #[env(default = 10)]
    pub max_connections: i64,

    #[env(default = false)]
    pub debug_mode: bool,
}

#[derive(EnvSchema)]
struct ConfigWithOptionals {
    pub app_name: String,
    pub token: Option<String>,
    pub port: Option<u16>,
}

#[derive(EnvSchema)]
struct BoolConfig {
    pub feature_flag: bool,
}

#[test]
#[serial]
fn test_basic_config() {
    env::set_var("DATABASE_URL", "postgres://localhost/test");
    env::set_var("API_KEY", "test_api_key");

    let config = BasicConfig::schema().from_env(&Options::default()).unwrap();
    assert_eq!(
        config.get("database_url").unwrap(),
        Some(&Value::Str("postgres://localhost/test".to_string()))
    );
    assert_eq!(
        config.get("api_key").unwrap(),
        Some(&Value::Str("test_api_key".to_string()))
    );

    env::remove_var("DATABASE_URL");
    env::remove_var("API_KEY");
}

#[test]
#[serial]
fn test_missing_required_attribute() {
    env::remove_var("DATABASE_URL");
    env::remove_var("API_KEY");

    let result = BasicConfig::schema().from_env(&Options::default());
    match result {
        Err(BindError::Missing {
            schema, attribute, ..
        }) => {
            assert_eq!(schema, "BasicConfig");
            assert!(attribute == "database_url" || attribute == "api_key");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
#[serial]
fn test_config_with_defaults() {
    env::remove_var("SERVER_ADDR");
    env::remove_var("MAX_CONNECTIONS");
    env::remove_var("DEBUG_MODE");

    let config = ConfigWithDefaults::schema()
        .from_env(&Options::default())
        .unwrap();
    assert_eq!(
        config.get("server_addr").unwrap(),
        Some(&Value::Str("127.0.0.1:8080".to_string()))
    );
    assert_eq!(config.get("max_connections").unwrap(), Some(&Value::Int(10)));
    assert_eq!(config.get("debug_mode").unwrap(), Some(&Value::Bool(false)));
}

#[test]
#[serial]
fn test_config_override_defaults() {
    env::set_var("SERVER_ADDR", "0.0.0.0:9090");
    env::set_var("MAX_CONNECTIONS", "20");
    env::set_var("DEBUG_MODE", "true");

    let config = ConfigWithDefaults::schema()
        .from_env(&Options::default())
        .unwrap();
    assert_eq!(
        config.get("server_addr").unwrap(),
        Some(&Value::Str("0.0.0.0:9090".to_string()))
    );
    assert_eq!(config.get("max_connections").unwrap(), Some(&Value::Int(20)));
    assert_eq!(config.get("debug_mode").unwrap(), Some(&Value::Bool(true)));

    env::remove_var("SERVER_ADDR");
    env::remove_var("MAX_CONNECTIONS");
    env::remove_var("DEBUG_MODE");
}

#[test]
#[serial]
fn test_optional_attributes() {
    env::set_var("APP_NAME", "my-application");
    env::set_var("PORT", "8080");
    env::remove_var("TOKEN");

    let config = ConfigWithOptionals::schema()
        .from_env(&Options::default())
        .unwrap();
    assert_eq!(
        config.get("app_name").unwrap(),
        Some(&Value::Str("my-application".to_string()))
    );
    assert_eq!(config.get("token").unwrap(), None);
    assert_eq!(config.get("port").unwrap(), Some(&Value::Int(8080)));

    env::remove_var("APP_NAME");
    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_bool_spellings() {
    for (raw, expected) in [("Yes", true), ("ON", true), ("off", false), ("0", false)] {
        env::set_var("FEATURE_FLAG", raw);
        let config = BoolConfig::schema().from_env(&Options::default()).unwrap();
        assert_eq!(
            config.get("feature_flag").unwrap(),
            Some(&Value::Bool(expected)),
            "{raw}"
        );
    }
    env::remove_var("FEATURE_FLAG");
}

#[test]
#[serial]
fn test_bool_conversion_error_is_structured() {
    env::set_var("FEATURE_FLAG", "maybe");

    let err = BoolConfig::schema()
        .from_env(&Options::default())
        .unwrap_err();
    match err {
        BindError::Convert {
            schema,
            attribute,
            value,
            ..
        } => {
            assert_eq!(schema, "BoolConfig");
            assert_eq!(attribute, "feature_flag");
            assert_eq!(value, "maybe");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    env::remove_var("FEATURE_FLAG");
}

#[test]
#[serial]
fn test_lazy_missing_check() {
    env::set_var("DATABASE_URL", "postgres://localhost/test");
    env::remove_var("API_KEY");

    let options = Options {
        lazy_missing: true,
        ..Options::default()
    };
    let config = BasicConfig::schema().from_env(&options).unwrap();

    // The resolvable attribute is usable even though another one is missing.
    assert_eq!(
        config.get("database_url").unwrap(),
        Some(&Value::Str("postgres://localhost/test".to_string()))
    );
    assert!(matches!(
        config.get("api_key").unwrap_err(),
        BindError::Missing { .. }
    ));

    env::remove_var("DATABASE_URL");
}

#[test]
#[serial]
fn test_identity_case_transform() {
    env::remove_var("APP_NAME");
    env::remove_var("TOKEN");
    env::remove_var("PORT");
    env::set_var("app_name", "lowercase-keys");

    let options = Options {
        case: CaseTransform::Identity,
        ..Options::default()
    };
    let config = ConfigWithOptionals::schema().from_env(&options).unwrap();
    assert_eq!(
        config.get("app_name").unwrap(),
        Some(&Value::Str("lowercase-keys".to_string()))
    );

    env::remove_var("app_name");
}
