//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::PortError;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("jwt_secret must not be empty");

    match &error {
        CoreError::Configuration(msg) => assert_eq!(msg, "jwt_secret must not be empty"),
    }
    assert_eq!(
        error.to_string(),
        "Configuration error: jwt_secret must not be empty"
    );
}

#[test]
fn test_port_error_display_includes_entity() {
    let error = PortError::not_found("InterestRate", 5);
    assert_eq!(error.to_string(), "Not found: InterestRate with id 5");
}

#[test]
fn test_port_error_transience() {
    assert!(PortError::connection("refused").is_transient());
    assert!(!PortError::conflict("duplicate").is_transient());
}
