use super::*;

#[test]
fn missing_leptos_config_is_a_typed_router_error() {
    let err = RouterError::from(get_configuration(Some("no-such-dir/Cargo.toml")).unwrap_err());
    assert!(matches!(err, RouterError::LeptosConfig(_)));
    assert!(err.to_string().starts_with("leptos configuration: "), "{err}");
}
