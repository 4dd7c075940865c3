use super::*;

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("t1"), "Bearer t1");
}

#[test]
fn product_paths_embed_identity() {
    assert_eq!(edit_product_path("p1"), "/api/products/edit/p1");
    assert_eq!(delete_product_path("p1"), "/api/products/delete/p1");
}

#[test]
fn http_api_trims_trailing_slash_from_base_url() {
    let api = HttpApi::new("https://api.example.com/");
    assert_eq!(api.url(PRODUCTS_PATH), "https://api.example.com/api/products/all");
}

#[test]
fn http_api_with_empty_base_uses_same_origin_paths() {
    let api = HttpApi::new("");
    assert_eq!(api.url(LOGIN_PATH), "/api/auth/login");
}

#[test]
fn session_invalid_covers_400_and_401_only() {
    let unauthorized = ApiError::Status { status: 401, message: None };
    let bad_request = ApiError::Status { status: 400, message: Some("jwt malformed".to_owned()) };
    let forbidden = ApiError::Status { status: 403, message: None };
    let server = ApiError::Status { status: 500, message: None };
    assert!(unauthorized.is_session_invalid());
    assert!(bad_request.is_session_invalid());
    assert!(!forbidden.is_session_invalid());
    assert!(!server.is_session_invalid());
    assert!(!ApiError::Network("offline".to_owned()).is_session_invalid());
    assert!(!ApiError::Decode("eof".to_owned()).is_session_invalid());
}

#[test]
fn server_message_only_comes_from_status_errors() {
    let err = ApiError::Status { status: 409, message: Some("User already exists".to_owned()) };
    assert_eq!(err.server_message(), Some("User already exists"));
    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
}

#[test]
fn server_message_ignores_blank_messages() {
    let empty = ApiError::Status { status: 401, message: Some(String::new()) };
    let spaces = ApiError::Status { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(empty.server_message(), None);
    assert_eq!(spaces.server_message(), None);
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Status { status: 502, message: None };
    assert_eq!(err.to_string(), "request failed: 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn transport_is_unavailable_outside_the_browser() {
    let api = HttpApi::new("");
    let result = futures::executor::block_on(api.list_products("t1"));
    assert_eq!(result, Err(ApiError::Network("not available on server".to_owned())));
}
