//! Integration tests for the database-free tools and the greeting resource.

use customer_mcp_server::CustomerService;
use customer_mcp_server::error::ServerError;
use customer_mcp_server::tools::arithmetic::{add, calculate_magic_amount};
use customer_mcp_server::tools::greeting::{get_greeting, parse_greeting_uri};

#[test]
fn test_add_examples() {
    assert_eq!(add(2, 3).unwrap(), 5);
    assert_eq!(add(-1, 1).unwrap(), 0);
}

#[test]
fn test_magic_amount_examples() {
    assert_eq!(calculate_magic_amount(&[2, 3, 4]).unwrap(), 24);
    assert_eq!(calculate_magic_amount(&[5]).unwrap(), 5);
}

#[test]
fn test_magic_amount_empty_input_is_an_explicit_error() {
    let err = calculate_magic_amount(&[]).unwrap_err();
    assert!(matches!(err, ServerError::InvalidInput { .. }));

    let mcp_err: rmcp::ErrorData = err.into();
    assert_eq!(mcp_err.code.0, -32602);
    assert!(mcp_err.message.contains("at least one value"));
}

#[test]
fn test_greeting_through_template() {
    let name = parse_greeting_uri("greeting://Ada").unwrap();
    assert_eq!(get_greeting(name), "Hello, Ada!");
}

#[test]
fn test_greeting_name_is_a_single_segment() {
    assert_eq!(parse_greeting_uri("greeting://a/b"), None);
}

#[test]
fn test_greeting_template_is_advertised() {
    let templates = CustomerService::resource_templates();
    assert!(
        templates
            .iter()
            .any(|t| t.raw.uri_template == "greeting://{name}")
    );
}
