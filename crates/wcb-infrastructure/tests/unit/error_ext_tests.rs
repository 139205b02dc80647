//! Error context extension tests

use wcb_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "wcb.toml"))
}

#[test]
fn test_config_context_produces_configuration_error() {
    let err = io_failure().config_context("Failed to read config").unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("Failed to read config"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_config_context_keeps_ok_value() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(7);
    assert_eq!(ok.config_context("unused").unwrap(), 7);
}
