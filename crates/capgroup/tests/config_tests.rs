//! Configuration tests.

use capgroup::config::file::parse_config;
use capgroup::{Config, ConfigFormat, ConfigLoader, Dialect, EnvConfig, Error, LogFormat};

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.matcher.dialect, Dialect::Extended);
    assert_eq!(config.matcher.max_groups, None);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn file_then_environment() {
    let mut config = parse_config(
        r#"
        [matcher]
        max_groups = 20
        newline = true
        "#,
        ConfigFormat::Toml,
    )
    .unwrap();

    let env = EnvConfig::from_vars("CAPGROUP", [("CAPGROUP_MAX_GROUPS", "3")]);
    env.apply(&mut config).unwrap();

    assert_eq!(config.matcher.max_groups, Some(3));
    assert!(config.matcher.newline);
}

#[test]
fn configured_matcher_uses_capacity() {
    let config = parse_config(r#"{ "matcher": { "max_groups": 20 } }"#, ConfigFormat::Json).unwrap();
    let mut matcher = config.matcher.compile(r"^(g\.)?([0-9]*)$").unwrap();
    let groups = matcher.matches("g.1").unwrap();
    assert_eq!(groups.len(), 20);
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.matcher.dialect = Dialect::Rust;
    config.matcher.max_groups = Some(4);
    config.logging.format = LogFormat::Json;

    let text = toml::to_string(&config).unwrap();
    let back = parse_config(&text, ConfigFormat::Toml).unwrap();
    assert_eq!(back, config);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = ConfigLoader::new()
        .load(std::path::Path::new("/nonexistent/capgroup.toml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn unknown_extension_without_default_format() {
    let path = std::env::temp_dir().join(format!("capgroup-config-{}.conf", std::process::id()));
    std::fs::write(&path, "[matcher]\nmax_groups = 2\n").unwrap();

    let err = ConfigLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));

    let config = ConfigLoader::new()
        .with_format(ConfigFormat::Toml)
        .load(&path)
        .unwrap();
    assert_eq!(config.matcher.max_groups, Some(2));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn loader_searches_by_stem() {
    let dir = std::env::temp_dir().join(format!("capgroup-search-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("capgroup.json"), r#"{ "matcher": { "newline": true } }"#).unwrap();

    let loader = ConfigLoader::new().add_path(&dir);
    let config = loader.load_by_name("capgroup").unwrap().unwrap();
    assert!(config.matcher.newline);

    std::fs::remove_dir_all(&dir).unwrap();
}
