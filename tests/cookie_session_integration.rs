mod common;

use std::sync::Arc;

use todotron::client::{ClientState, Session};
use todotron::config::{RemoteAuthConfig, SessionMode};
use todotron::error::{AuthError, LoginError};
use todotron::guard::Access;
use todotron::models::Credentials;
use todotron::session::{Authenticated, CookieSessionModel, HttpRemoteAuth, RemoteAuth};
use todotron::validation::LoginForm;

use common::{load_test_config, spawn_server};

fn remote(base_url: &str) -> Arc<HttpRemoteAuth> {
    Arc::new(
        HttpRemoteAuth::new(&RemoteAuthConfig {
            base_url: base_url.to_string(),
            timeout_in_ms: Some(5000),
        })
        .unwrap(),
    )
}

#[tokio::test]
async fn integration_cookie_session_round_trip() {
    let base_url = spawn_server(load_test_config()).await;
    let remote = remote(&base_url);

    let mut session = CookieSessionModel::restore(remote.clone()).await;
    assert!(!session.is_authenticated());

    let rejected = session
        .login_remote(&Credentials::new("ada@example.com", "wrong"))
        .await;
    assert_eq!(rejected, Err(AuthError::Rejected));
    assert!(!session.is_authenticated());

    session
        .login_remote(&Credentials::new("ada@example.com", "hunter22"))
        .await
        .unwrap();
    assert!(session.is_authenticated());

    // A restart of the client with the same cookie jar finds the session again.
    let restored = CookieSessionModel::restore(remote.clone()).await;
    assert!(restored.is_authenticated());

    session.logout_remote().await.unwrap();
    assert!(!session.is_authenticated());

    assert_eq!(remote.validate().await, Err(AuthError::Rejected));
    assert!(session.validate_session().await.is_err());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn integration_separate_clients_do_not_share_sessions() {
    let base_url = spawn_server(load_test_config()).await;

    let mut ada = CookieSessionModel::new(remote(&base_url));
    ada.login_remote(&Credentials::new("ada@example.com", "hunter22"))
        .await
        .unwrap();

    let other = CookieSessionModel::restore(remote(&base_url)).await;
    assert!(ada.is_authenticated());
    assert!(!other.is_authenticated());
}

#[tokio::test]
async fn integration_unreachable_server_fails_closed() {
    let mut config = load_test_config();
    config.session.mode = SessionMode::Cookie;
    config.session.remote.base_url = "http://127.0.0.1:9".to_string();

    let client = ClientState::initialize(&config).await.unwrap();
    assert!(!client.is_authenticated());
    assert_eq!(
        client.check_route("/todos"),
        Access::Redirect("/login".to_string())
    );
}

#[tokio::test]
async fn integration_client_state_in_cookie_mode() {
    let base_url = spawn_server(load_test_config()).await;
    let mut config = load_test_config();
    config.session.mode = SessionMode::Cookie;
    config.session.remote.base_url = base_url;

    let mut client = ClientState::initialize(&config).await.unwrap();
    assert!(matches!(client.session(), Session::Cookie(_)));
    assert!(!client.is_authenticated());

    let invalid = client.login(&LoginForm::new("not-an-email", "x")).await;
    assert!(matches!(invalid, Err(LoginError::Invalid(_))));

    client
        .login(&LoginForm::new("grace@example.com", "cobol"))
        .await
        .unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.check_route("/todos"), Access::Allow);

    // Nothing credential-like lands in client storage in cookie mode.
    assert!(client.storage().get("token").is_none());

    client.logout().await.unwrap();
    assert!(!client.is_authenticated());
}
