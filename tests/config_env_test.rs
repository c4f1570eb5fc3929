use adder::{OverflowPolicy, Settings};
use std::env;
use tempfile::TempDir;

// Single test: env vars are process-wide and integration test binaries run
// their tests on parallel threads.
#[test]
fn test_env_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        r#"
overflow = "error"
initial = 7

[logging]
default = "info"
"#,
    )
    .unwrap();

    unsafe {
        // Double underscore separates nested levels
        env::set_var("ADDER_OVERFLOW", "saturate");
        env::set_var("ADDER_LOGGING__DEFAULT", "debug");
    }

    let settings = Settings::load_from(&config_path).unwrap();

    unsafe {
        env::remove_var("ADDER_OVERFLOW");
        env::remove_var("ADDER_LOGGING__DEFAULT");
    }

    // Environment overrides config file
    assert_eq!(settings.overflow, OverflowPolicy::Saturate);
    assert_eq!(settings.logging.default, "debug");
    // Config file value used when no env var
    assert_eq!(settings.initial, 7);
    // Default fills the rest
    assert_eq!(settings.version, 1);
}
