use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::{LoginResponse, Role, SessionUser};

// =============================================================
// Fake backend
// =============================================================

#[derive(Default)]
struct FakeAuth {
    login_result: Option<Result<LoginResponse, ApiError>>,
    signup_result: Option<Result<(), ApiError>>,
    validate_result: Option<Result<bool, ApiError>>,
    calls: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl AuthApi for FakeAuth {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(format!("login:{}", request.email));
        self.login_result.clone().unwrap_or(Err(ApiError::Network("unset".to_owned())))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("signup:{}", request.email));
        self.signup_result.clone().unwrap_or(Ok(()))
    }

    async fn validate(&self, token: &str) -> Result<bool, ApiError> {
        self.calls.borrow_mut().push(format!("validate:{token}"));
        self.validate_result.clone().unwrap_or(Ok(true))
    }
}

fn admin_login() -> LoginResponse {
    LoginResponse {
        token: "t1".to_owned(),
        user: SessionUser { id: "1".to_owned(), name: "A".to_owned(), role: Role::Admin },
    }
}

fn login_request(email: &str) -> LoginRequest {
    LoginRequest { email: email.to_owned(), password: "x".to_owned() }
}

fn signup_request(contact: &str) -> SignupRequest {
    SignupRequest {
        email: "new@user.com".to_owned(),
        password: "pw".to_owned(),
        name: "New".to_owned(),
        contact_number: contact.to_owned(),
    }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_session() {
    let api = FakeAuth { login_result: Some(Ok(admin_login())), ..FakeAuth::default() };
    let store = SessionStore::in_memory();
    let session = block_on(AuthGateway::new(&api, &store).login(&login_request("a@b.com"))).unwrap();
    assert_eq!(session.token, "t1");
    assert!(session.is_admin());
    assert_eq!(store.get(), Some(session));
}

#[test]
fn login_failure_surfaces_server_message_and_leaves_store_alone() {
    let api = FakeAuth {
        login_result: Some(Err(ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) })),
        ..FakeAuth::default()
    };
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).login(&login_request("a@b.com"))).unwrap_err();
    assert_eq!(err, "Invalid credentials");
    assert!(!store.is_authenticated());
}

#[test]
fn login_failure_without_message_uses_generic_fallback() {
    let api = FakeAuth { login_result: Some(Err(ApiError::Network("offline".to_owned()))), ..FakeAuth::default() };
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).login(&login_request("a@b.com"))).unwrap_err();
    assert_eq!(err, GENERIC_FAILURE);
}

#[test]
fn login_failure_with_empty_message_uses_generic_fallback() {
    let api = FakeAuth {
        login_result: Some(Err(ApiError::Status { status: 401, message: Some(String::new()) })),
        ..FakeAuth::default()
    };
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).login(&login_request("a@b.com"))).unwrap_err();
    assert_eq!(err, GENERIC_FAILURE);
}

#[test]
fn login_with_malformed_email_makes_no_request() {
    let api = FakeAuth { login_result: Some(Ok(admin_login())), ..FakeAuth::default() };
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).login(&login_request("not-an-email"))).unwrap_err();
    assert_eq!(err, validate::INVALID_EMAIL);
    assert!(api.calls.borrow().is_empty());
    assert!(!store.is_authenticated());
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_rejects_contact_not_starting_six_to_nine_without_request() {
    let api = FakeAuth::default();
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).signup(&signup_request("1234567890"))).unwrap_err();
    assert_eq!(err, validate::INVALID_CONTACT);
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn signup_success_does_not_log_in() {
    let api = FakeAuth::default();
    let store = SessionStore::in_memory();
    block_on(AuthGateway::new(&api, &store).signup(&signup_request("9876543210"))).unwrap();
    assert_eq!(api.calls.borrow().as_slice(), ["signup:new@user.com"]);
    assert!(!store.is_authenticated());
}

#[test]
fn signup_failure_with_blank_message_uses_generic_fallback() {
    let api = FakeAuth {
        signup_result: Some(Err(ApiError::Status { status: 500, message: Some(" ".to_owned()) })),
        ..FakeAuth::default()
    };
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).signup(&signup_request("9876543210"))).unwrap_err();
    assert_eq!(err, GENERIC_FAILURE);
}

#[test]
fn signup_failure_surfaces_server_message() {
    let api = FakeAuth {
        signup_result: Some(Err(ApiError::Status { status: 409, message: Some("User already exists".to_owned()) })),
        ..FakeAuth::default()
    };
    let store = SessionStore::in_memory();
    let err = block_on(AuthGateway::new(&api, &store).signup(&signup_request("9876543210"))).unwrap_err();
    assert_eq!(err, "User already exists");
}

// =============================================================
// validate_existing_token
// =============================================================

#[test]
fn validate_without_stored_token_skips_request() {
    let api = FakeAuth::default();
    let store = SessionStore::in_memory();
    assert!(!block_on(AuthGateway::new(&api, &store).validate_existing_token()));
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn validate_accepted_token_keeps_session() {
    let api = FakeAuth { validate_result: Some(Ok(true)), ..FakeAuth::default() };
    let store = SessionStore::in_memory();
    store.set(&Session { token: "t1".to_owned(), user: admin_login().user });
    assert!(block_on(AuthGateway::new(&api, &store).validate_existing_token()));
    assert_eq!(api.calls.borrow().as_slice(), ["validate:t1"]);
    assert!(store.is_authenticated());
}

#[test]
fn validate_rejected_token_clears_session_silently() {
    let api = FakeAuth {
        validate_result: Some(Err(ApiError::Status { status: 401, message: Some("expired".to_owned()) })),
        ..FakeAuth::default()
    };
    let store = SessionStore::in_memory();
    store.set(&Session { token: "t1".to_owned(), user: admin_login().user });
    assert!(!block_on(AuthGateway::new(&api, &store).validate_existing_token()));
    assert!(!store.is_authenticated());
}

#[test]
fn validate_unsuccessful_flag_clears_session() {
    let api = FakeAuth { validate_result: Some(Ok(false)), ..FakeAuth::default() };
    let store = SessionStore::in_memory();
    store.set(&Session { token: "t1".to_owned(), user: admin_login().user });
    assert!(!block_on(AuthGateway::new(&api, &store).validate_existing_token()));
    assert!(!store.is_authenticated());
}
