use admin_bff::config::UpstreamConfig;
use admin_bff::gateway::{Credentials, GatewayError, UpstreamGateway};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upstream(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        base_url: server.uri(),
        request_timeout_secs: 10,
    }
}

#[tokio::test]
async fn login_success_holds_token_and_attaches_it_to_later_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "admin@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "T",
                "user": {"id": "u1", "email": "admin@example.com", "role": "admin"}
            }
        })))
        .mount(&server)
        .await;

    // The follow-up call must carry the freshly held credential.
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(header("Authorization", "Bearer T"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": "u1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut gateway = UpstreamGateway::new(&upstream(&server), Credentials::anonymous()).unwrap();
    let session = gateway.login("admin@example.com", "pw").await.unwrap();

    assert_eq!(session.token, "T");
    assert_eq!(session.user["role"], "admin");
    assert_eq!(gateway.credentials().token(), Some("T"));

    let users = gateway.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn login_rejected_by_success_flag_surfaces_upstream_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let mut gateway = UpstreamGateway::new(&upstream(&server), Credentials::anonymous()).unwrap();
    let err = gateway.login("admin@example.com", "wrong").await.unwrap_err();

    match err {
        GatewayError::LoginRejected { message } => {
            assert_eq!(message.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("expected LoginRejected, got {other:?}"),
    }
    // A failed login never fabricates a credential.
    assert_eq!(gateway.credentials().token(), None);
}

#[tokio::test]
async fn login_non_2xx_is_a_failed_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let mut gateway = UpstreamGateway::new(&upstream(&server), Credentials::anonymous()).unwrap();
    assert!(matches!(
        gateway.login("a@b.c", "pw").await,
        Err(GatewayError::LoginRejected { .. })
    ));
}

#[tokio::test]
async fn connection_refused_yields_transport_failure_with_message() {
    // Nothing listens on this port.
    let port = portpicker::pick_unused_port().expect("free port");
    let config = UpstreamConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        request_timeout_secs: 10,
    };

    let mut gateway = UpstreamGateway::new(&config, Credentials::anonymous()).unwrap();
    let err = gateway.login("a@b.c", "pw").await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn hung_upstream_is_bounded_by_the_request_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/activities"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": []}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = UpstreamConfig {
        base_url: server.uri(),
        request_timeout_secs: 1,
    };
    let gateway = UpstreamGateway::new(&config, Credentials::bearer("T")).unwrap();

    let err = gateway.list_activities().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}
