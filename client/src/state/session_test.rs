use super::*;

fn admin_session() -> Session {
    Session {
        token: "t1".to_owned(),
        user: SessionUser { id: "1".to_owned(), name: "A".to_owned(), role: Role::Admin },
    }
}

fn store_with_backend() -> (SessionStore, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::default());
    (SessionStore::new(backend.clone()), backend)
}

#[test]
fn empty_store_has_no_session() {
    let store = SessionStore::in_memory();
    assert_eq!(store.get(), None);
    assert!(!store.is_authenticated());
    assert!(!store.has_role(Role::Admin));
    assert!(!store.has_role(Role::User));
}

#[test]
fn set_then_get_returns_same_session() {
    let store = SessionStore::in_memory();
    store.set(&admin_session());
    assert_eq!(store.get(), Some(admin_session()));
    assert_eq!(store.token().as_deref(), Some("t1"));
    assert!(store.is_authenticated());
}

#[test]
fn set_writes_both_fixed_keys() {
    let (store, backend) = store_with_backend();
    store.set(&admin_session());
    assert_eq!(backend.read(TOKEN_KEY).as_deref(), Some("t1"));
    let user: SessionUser = serde_json::from_str(&backend.read(USER_KEY).unwrap()).unwrap();
    assert_eq!(user.name, "A");
}

#[test]
fn has_role_matches_only_stored_role() {
    let store = SessionStore::in_memory();
    store.set(&admin_session());
    assert!(store.has_role(Role::Admin));
    assert!(!store.has_role(Role::User));
}

#[test]
fn clear_removes_token_and_user() {
    let (store, backend) = store_with_backend();
    store.set(&admin_session());
    store.clear();
    assert_eq!(store.get(), None);
    assert_eq!(backend.read(TOKEN_KEY), None);
    assert_eq!(backend.read(USER_KEY), None);
}

#[test]
fn token_without_user_reads_as_absent_and_is_wiped() {
    let (store, backend) = store_with_backend();
    backend.write(TOKEN_KEY, "orphan");
    assert_eq!(store.get(), None);
    assert_eq!(backend.read(TOKEN_KEY), None);
}

#[test]
fn user_without_token_reads_as_absent_and_is_wiped() {
    let (store, backend) = store_with_backend();
    backend.write(USER_KEY, r#"{"id":"1","name":"A","role":"user"}"#);
    assert_eq!(store.get(), None);
    assert_eq!(backend.read(USER_KEY), None);
}

#[test]
fn unparseable_user_reads_as_absent_and_is_wiped() {
    let (store, backend) = store_with_backend();
    backend.write(TOKEN_KEY, "t1");
    backend.write(USER_KEY, "{not json");
    assert!(!store.is_authenticated());
    assert_eq!(backend.read(TOKEN_KEY), None);
}

#[test]
fn unknown_role_reads_as_absent() {
    let (store, backend) = store_with_backend();
    backend.write(TOKEN_KEY, "t1");
    backend.write(USER_KEY, r#"{"id":"1","name":"A","role":"root"}"#);
    assert_eq!(store.get(), None);
}

#[test]
fn clones_share_the_same_backend() {
    let store = SessionStore::in_memory();
    let other = store.clone();
    store.set(&admin_session());
    assert!(other.is_authenticated());
    other.clear();
    assert!(!store.is_authenticated());
}

#[test]
fn session_is_admin_follows_role() {
    let mut session = admin_session();
    assert!(session.is_admin());
    session.user.role = Role::User;
    assert!(!session.is_admin());
    assert_eq!(session.role(), Role::User);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_falls_back_to_memory_outside_the_browser() {
    let store = SessionStore::browser();
    assert!(!store.is_authenticated());
    store.set(&admin_session());
    assert!(store.is_authenticated());
}
