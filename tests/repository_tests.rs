use heroboard::notifier::NotificationCenter;
use heroboard::transport::{HttpTransport, Request, Transport};
use heroboard::{build_client, Config, HeroDraft, HeroboardError, HeroesClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn batman_json() -> serde_json::Value {
    json!({
        "id": "1",
        "superhero": "Batman",
        "alter_ego": "Bruce Wayne",
        "publisher": "DC Comics",
        "first_appearance": "Detective Comics #27",
        "img": "dc-batman"
    })
}

fn client_for(server: &MockServer) -> HeroesClient {
    let config = Config {
        base_url: server.uri(),
        ..Config::default()
    };
    build_client(&config, Arc::new(NotificationCenter::new())).unwrap()
}

// ── Transport ───────────────────────────────────────────────────

#[tokio::test]
async fn http_transport_joins_base_url_and_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&format!("{}/", server.uri()), Duration::from_secs(5)).unwrap();
    assert_eq!(transport.base_url(), server.uri());

    let response = transport.send(Request::get("/heroes")).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn http_transport_maps_empty_bodies_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/heroes/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let response = transport.send(Request::delete("/heroes/1")).await.unwrap();
    assert!(response.body.is_null());
}

#[tokio::test]
async fn http_transport_reports_status_and_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let err = transport.send(Request::get("/heroes/9")).await.unwrap_err();
    match err {
        HeroboardError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error_with_status_zero() {
    let transport = HttpTransport::new(&closed_port_url(), Duration::from_secs(5)).unwrap();
    let err = transport.send(Request::get("/heroes")).await.unwrap_err();
    assert!(matches!(err, HeroboardError::Network(_)));
    assert_eq!(err.status(), 0);
}

/// Returns a local URL nothing listens on.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

// ── Repository client ───────────────────────────────────────────

#[tokio::test]
async fn list_decodes_backend_field_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([batman_json()])))
        .mount(&server)
        .await;

    let heroes = client_for(&server).list().await.unwrap();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name, "Batman");
    assert_eq!(heroes[0].secret_identity, "Bruce Wayne");
    assert_eq!(heroes[0].image.as_deref(), Some("dc-batman"));
}

#[tokio::test]
async fn list_rejects_heroes_without_an_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"superhero": "Nobody"}])))
        .mount(&server)
        .await;

    let err = client_for(&server).list().await.unwrap_err();
    assert!(matches!(err, HeroboardError::Decode(_)));
}

#[tokio::test]
async fn get_by_id_returns_none_for_a_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batman_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/heroes/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_by_id("1").await.unwrap().unwrap().id, "1");
    assert_eq!(client.get_by_id("2").await.unwrap(), None);
}

#[tokio::test]
async fn get_by_id_propagates_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/heroes/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).get_by_id("404").await.unwrap_err();
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn create_posts_the_draft_without_an_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/heroes"))
        .and(body_partial_json(json!({"superhero": "Batman", "alter_ego": "Bruce Wayne"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(batman_json()))
        .expect(1)
        .mount(&server)
        .await;

    let draft = HeroDraft {
        name: "Batman".into(),
        secret_identity: "Bruce Wayne".into(),
        publisher: "DC Comics".into(),
        first_appearance: "Detective Comics #27".into(),
        image: Some("dc-batman".into()),
        alt_image: None,
    };
    let created = client_for(&server).create(&draft).await.unwrap();
    assert_eq!(created.id, "1");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("id").is_none());
}

#[tokio::test]
async fn update_puts_to_the_hero_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/heroes/1"))
        .and(body_partial_json(json!({"id": "1", "publisher": "Marvel"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut hero: heroboard::Hero = serde_json::from_value(batman_json()).unwrap();
    hero.publisher = "Marvel".into();
    let updated = client_for(&server).update(&hero).await.unwrap();
    assert_eq!(updated, hero, "an empty body echoes the submitted hero");
}

#[tokio::test]
async fn update_without_id_sends_nothing() {
    let server = MockServer::start().await;
    let mut hero: heroboard::Hero = serde_json::from_value(batman_json()).unwrap();
    hero.id = " ".into();

    let err = client_for(&server).update(&hero).await.unwrap_err();
    assert!(matches!(err, HeroboardError::MissingId));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_by_id_absorbs_failures() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/heroes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/heroes/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.delete_by_id("1").await);
    assert!(!client.delete_by_id("2").await);

    let offline = build_client(
        &Config { base_url: closed_port_url(), ..Config::default() },
        Arc::new(NotificationCenter::new()),
    )
    .unwrap();
    assert!(!offline.delete_by_id("1").await);
}
