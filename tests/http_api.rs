//! End-to-end tests over real HTTP.
//!
//! Each test spawns its own service instance on an ephemeral port, so tests
//! never share state and run in parallel.

use genre_registry::{Genre, Registry, Server, api};
use reqwest::StatusCode;
use tokio::net::TcpListener;

async fn spawn_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(Server::serve_on(listener, api::routes(), Registry::seeded()));
    format!("http://{addr}")
}

fn genre(id: u32, name: &str) -> Genre {
    Genre { id, name: name.to_owned() }
}

#[tokio::test]
async fn fresh_service_lists_the_seed_genres_in_order() {
    let base = spawn_service().await;

    let res = reqwest::get(format!("{base}/api/genres/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Vec<Genre>>().await.unwrap(),
        [genre(1, "Action"), genre(2, "Drama"), genre(3, "Horror")],
    );
}

#[tokio::test]
async fn listing_works_with_and_without_the_trailing_slash() {
    let base = spawn_service().await;

    let with = reqwest::get(format!("{base}/api/genres/")).await.unwrap();
    let without = reqwest::get(format!("{base}/api/genres")).await.unwrap();
    assert_eq!(with.status(), StatusCode::OK);
    assert_eq!(without.status(), StatusCode::OK);
    assert_eq!(
        with.json::<Vec<Genre>>().await.unwrap(),
        without.json::<Vec<Genre>>().await.unwrap(),
    );
}

#[tokio::test]
async fn get_by_id_returns_the_genre_or_404() {
    let base = spawn_service().await;

    let res = reqwest::get(format!("{base}/api/genres/2")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Genre>().await.unwrap(), genre(2, "Drama"));

    let res = reqwest::get(format!("{base}/api/genres/999")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.text().await.unwrap(),
        "The given genre ID was not found in the database",
    );
}

#[tokio::test]
async fn non_numeric_ids_behave_like_unknown_ones() {
    let base = spawn_service().await;

    let res = reqwest::get(format!("{base}/api/genres/comedy")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_creates_a_genre_with_a_fresh_id() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/api/genres/"))
        .json(&serde_json::json!({"name": "Comedy"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Genre>().await.unwrap(), genre(4, "Comedy"));

    let all = reqwest::get(format!("{base}/api/genres/"))
        .await
        .unwrap()
        .json::<Vec<Genre>>()
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn post_rejects_short_names_and_leaves_the_collection_alone() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/api/genres/"))
        .json(&serde_json::json!({"name": "ab"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await.unwrap(),
        r#""name" length must be at least 3 characters long"#,
    );

    let all = reqwest::get(format!("{base}/api/genres/"))
        .await
        .unwrap()
        .json::<Vec<Genre>>()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn post_rejects_a_body_that_is_not_json() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/api/genres/"))
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_renames_and_the_change_is_visible_afterwards() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{base}/api/genres/1"))
        .json(&serde_json::json!({"name": "Thriller"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Genre>().await.unwrap(), genre(1, "Thriller"));

    let res = reqwest::get(format!("{base}/api/genres/1")).await.unwrap();
    assert_eq!(res.json::<Genre>().await.unwrap(), genre(1, "Thriller"));
}

#[tokio::test]
async fn put_on_an_unknown_id_is_404_and_changes_nothing() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{base}/api/genres/999"))
        .json(&serde_json::json!({"name": "Thriller"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let all = reqwest::get(format!("{base}/api/genres/"))
        .await
        .unwrap()
        .json::<Vec<Genre>>()
        .await
        .unwrap();
    assert_eq!(
        all,
        [genre(1, "Action"), genre(2, "Drama"), genre(3, "Horror")],
    );
}

#[tokio::test]
async fn put_with_an_invalid_name_is_400() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{base}/api/genres/1"))
        .json(&serde_json::json!({"name": "ab"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = reqwest::get(format!("{base}/api/genres/1")).await.unwrap();
    assert_eq!(res.json::<Genre>().await.unwrap(), genre(1, "Action"));
}

#[tokio::test]
async fn delete_removes_the_genre_and_returns_the_remainder() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{base}/api/genres/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Vec<Genre>>().await.unwrap(),
        [genre(1, "Action"), genre(2, "Drama")],
    );

    let res = reqwest::get(format!("{base}/api/genres/3")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_on_an_unknown_id_is_404_and_changes_nothing() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{base}/api/genres/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let all = reqwest::get(format!("{base}/api/genres/"))
        .await
        .unwrap()
        .json::<Vec<Genre>>()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn ids_are_not_reused_after_a_delete() {
    let base = spawn_service().await;
    let client = reqwest::Client::new();

    client
        .delete(format!("{base}/api/genres/3"))
        .send()
        .await
        .unwrap();

    let res = client
        .post(format!("{base}/api/genres/"))
        .json(&serde_json::json!({"name": "Comedy"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.json::<Genre>().await.unwrap(), genre(4, "Comedy"));
}

#[tokio::test]
async fn repeated_gets_without_mutations_are_identical() {
    let base = spawn_service().await;

    let first = reqwest::get(format!("{base}/api/genres/"))
        .await
        .unwrap()
        .json::<Vec<Genre>>()
        .await
        .unwrap();
    for _ in 0..5 {
        let again = reqwest::get(format!("{base}/api/genres/"))
            .await
            .unwrap()
            .json::<Vec<Genre>>()
            .await
            .unwrap();
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn unrouted_paths_are_404() {
    let base = spawn_service().await;

    let res = reqwest::get(format!("{base}/api/films/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_probes_answer() {
    let base = spawn_service().await;

    let res = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = reqwest::get(format!("{base}/readyz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "ready");
}
