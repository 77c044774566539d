//! HTTP round trips against a real server bound to an ephemeral port.

use std::sync::Arc;

use game_catalog::api::CatalogApi;
use game_catalog::client::CatalogClient;
use game_catalog::router::RequestRouter;
use game_catalog::server;
use game_catalog::store::fs::FileStore;
use game_catalog::view::Browser;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn spawn_server(prefix: &str) -> (String, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("db.json")).unwrap();
    let router = Arc::new(RequestRouter::new(CatalogApi::new(store), prefix));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::app(router)).await.unwrap();
    });

    (format!("http://{}", addr), dir)
}

#[tokio::test]
async fn create_patch_list_delete_scenario() {
    let (base, _dir) = spawn_server("/api/games").await;
    let http = reqwest::Client::new();
    let games_url = format!("{base}/api/games");

    let resp = http
        .post(&games_url)
        .json(&json!({ "name": "Game A", "rating": 8 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()["location"].to_str().unwrap().to_string();
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(location, format!("/api/games/{id}"));
    assert_eq!(created["rating"], json!(8.0));
    assert_eq!(created["createdAt"], created["updatedAt"]);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let resp = http
        .patch(format!("{base}{location}"))
        .json(&json!({ "rating": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = resp.json().await.unwrap();
    assert_eq!(patched["rating"], json!(9.0));
    assert_eq!(patched["createdAt"], created["createdAt"]);
    assert_ne!(patched["updatedAt"], created["updatedAt"]);

    let listed: Value = http.get(&games_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["rating"], json!(9.0));

    let resp = http.delete(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({}));

    let resp = http.get(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({ "message": "Game Not Found" })
    );
}

#[tokio::test]
async fn responses_are_json_with_cors_headers() {
    let (base, _dir) = spawn_server("/api/games").await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/games"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert_eq!(resp.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn preflight_allows_patch() {
    let (base, _dir) = spawn_server("/api/games").await;
    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/games/1"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "PATCH")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(resp.headers()["content-type"], "application/json");
    let methods = resp.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("PATCH"), "allowed methods: {methods}");
}

#[tokio::test]
async fn options_is_empty_json_success() {
    let (base, _dir) = spawn_server("/api/games").await;
    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/anything"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert!(resp.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (base, _dir) = spawn_server("/api/games").await;
    let resp = reqwest::get(format!("{base}/favicon.ico")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({ "message": "Not Found" })
    );
}

#[tokio::test]
async fn malformed_body_is_server_error() {
    let (base, _dir) = spawn_server("/api/games").await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/games"))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({ "message": "Server Error" })
    );
}

#[tokio::test]
async fn non_object_body_is_server_error() {
    let (base, _dir) = spawn_server("/api/games").await;
    let http = reqwest::Client::new();
    let games_url = format!("{base}/api/games");

    for body in [r#"["Zelda", 9]"#, "[]", "7", "null"] {
        let resp = http
            .post(&games_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
        assert_eq!(
            resp.json::<Value>().await.unwrap(),
            json!({ "message": "Server Error" })
        );
    }

    let listed: Value = http.get(&games_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn player_counts_keep_any_number() {
    let (base, _dir) = spawn_server("/api/games").await;
    let http = reqwest::Client::new();
    let resp = http
        .post(format!("{base}/api/games"))
        .json(&json!({ "name": "X", "multiplayer": { "offline": 1.5, "online": -1 } }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["multiplayer"], json!({ "offline": 1.5, "online": -1.0 }));
}

#[tokio::test]
async fn custom_prefix_is_honoured() {
    let (base, _dir) = spawn_server("/v2/games").await;
    let resp = reqwest::get(format!("{base}/v2/games")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = reqwest::get(format!("{base}/api/games")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn client_search_and_browser_view() {
    let (base, _dir) = spawn_server("/api/games").await;
    let http = reqwest::Client::new();
    let games_url = format!("{base}/api/games");
    for body in [
        json!({ "name": "Half-Life", "rating": 9.6, "platforms": ["PC"],
                "multiplayer": { "offline": 0, "online": 32 } }),
        json!({ "name": "Half-Life 2", "rating": 9.7, "platforms": ["PC", "Xbox"],
                "languages": ["English", "Russian"] }),
        json!({ "name": "Mario Kart", "rating": 8.9, "platforms": ["Nintendo Switch"],
                "multiplayer": { "offline": 4, "online": 12 } }),
    ] {
        let resp = http.post(&games_url).json(&body).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let client = CatalogClient::new(&games_url);
    let found = client.list_games(Some("half life")).await.unwrap();
    assert!(found.is_empty(), "search is a plain substring match");
    let found = client.list_games(Some(" HALF-LIFE ")).await.unwrap();
    assert_eq!(found.len(), 2);

    let mut browser = Browser::default();
    let all = browser.refresh(&client, None).await;
    assert_eq!(all.len(), 3);

    browser.set_platform("PC");
    let view = browser.set_multiplayer("online");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Half-Life");

    let view = browser.set_platform("all");
    let names: Vec<&str> = view.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Half-Life", "Mario Kart"]);

    browser.set_multiplayer("all");
    let view = browser.set_sort("rating");
    let names: Vec<&str> = view.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Half-Life 2", "Half-Life", "Mario Kart"]);
}
