//! Gateway and store behavior against a local HTTP server.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use userdeck::app::UserStore;
use userdeck::{Config, HttpUserGateway, UserGateway, UserdeckError};

fn users_payload() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            },
            "phone": "010-692-6593 x09125",
            "company": { "name": "Deckow-Crist" }
        }
    ])
}

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route("/users", get(|| async { Json(users_payload()) }))
        .route(
            "/created",
            get(|| async { (StatusCode::CREATED, Json(users_payload())) }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage", get(|| async { "<html>not json</html>" }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(users_payload())
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn gateway(base: &str, endpoint: &str, timeout_ms: u64) -> HttpUserGateway {
    let map: BTreeMap<String, String> = [
        ("USERDECK_API_BASE_URL", base.to_string()),
        ("USERDECK_USERS_ENDPOINT", endpoint.to_string()),
        ("USERDECK_API_TIMEOUT", timeout_ms.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    HttpUserGateway::new(&Config::from_map(&map)).unwrap()
}

async fn gateway_for(endpoint: &str, timeout_ms: u64) -> HttpUserGateway {
    let addr = serve().await;
    gateway(&format!("http://{addr}"), endpoint, timeout_ms)
}

#[tokio::test(flavor = "multi_thread")]
async fn primary_fetch_decodes_users() {
    let gateway = gateway_for("/users", 2_000).await;

    let users = gateway.fetch_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].address.suite, None);
    assert_eq!(users[1].company.name, "Deckow-Crist");
}

#[tokio::test(flavor = "multi_thread")]
async fn fallback_fetch_decodes_users() {
    let gateway = gateway_for("/users", 2_000).await;

    let users = gateway.fetch_users_fallback().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "Bret");
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_an_http_error() {
    let gateway = gateway_for("/broken", 2_000).await;

    let primary = gateway.fetch_users().await.unwrap_err();
    assert!(matches!(primary, UserdeckError::Http { status: 500 }));
    assert_eq!(primary.to_string(), "HTTP error! status: 500");

    let fallback = gateway.fetch_users_fallback().await.unwrap_err();
    assert!(matches!(fallback, UserdeckError::Http { status: 500 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn fallback_accepts_only_ok() {
    let gateway = gateway_for("/created", 2_000).await;

    assert_eq!(gateway.fetch_users().await.unwrap().len(), 2);
    assert!(matches!(
        gateway.fetch_users_fallback().await,
        Err(UserdeckError::Http { status: 201 })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_body_is_a_parse_error() {
    let gateway = gateway_for("/garbage", 2_000).await;

    assert!(matches!(gateway.fetch_users().await, Err(UserdeckError::Parse(_))));
    assert!(matches!(
        gateway.fetch_users_fallback().await,
        Err(UserdeckError::Parse(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_server_times_out() {
    let gateway = gateway_for("/slow", 200).await;

    assert!(matches!(gateway.fetch_users().await, Err(UserdeckError::Timeout)));
    assert!(matches!(
        gateway.fetch_users_fallback().await,
        Err(UserdeckError::Timeout)
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let gateway = gateway(&format!("http://{addr}"), "/users", 2_000);

    assert!(matches!(gateway.fetch_users().await, Err(UserdeckError::Network(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn store_loads_users_once() {
    let gateway = gateway_for("/users", 2_000).await;
    let mut store = UserStore::new();

    store.load_users(&gateway).await;
    store.load_users(&gateway).await;

    let state = store.state();
    assert_eq!(state.users.len(), 2);
    assert!(state.has_fetched_users);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn store_reports_combined_failure() {
    let gateway = gateway_for("/broken", 2_000).await;
    let mut store = UserStore::new();

    store.load_users(&gateway).await;

    let state = store.state();
    assert!(state.users.is_empty());
    assert!(!state.loading);
    assert!(!state.has_fetched_users);
    assert_eq!(state.error.as_deref(), Some("Unable to fetch users from API"));
}
