use axum_test::TestServer;
use serde_json::json;

use replay_api::catalog::Catalog;
use replay_api::routes::create_router;
use replay_api::services::{EngineOptions, RecommendationEngine};
use replay_api::state::AppState;

const DATASET: &str = "\
name,year,plot,Action,Adventure,Comedy,Crime,Family,Fantasy,Mystery,Sci-Fi,Thriller
Shadow Strike,2019,A covert operative hunts a rogue agent.,True,False,False,False,False,False,False,False,True
Galaxy Raiders,,,True,False,False,False,False,False,False,True,False
Farm Days,2021,Build the farm of your dreams.,False,False,False,False,True,False,False,False,False
Castle of Riddles,,,False,False,False,False,False,True,True,False,False
Night Heist,2018,Five strangers plan the perfect robbery.,False,False,False,True,False,False,False,False,True
";

fn create_test_server(include_genre_detail: bool) -> TestServer {
    let catalog = Catalog::from_reader(DATASET.as_bytes()).unwrap();
    let engine = RecommendationEngine::new(
        catalog,
        EngineOptions {
            include_genre_detail,
            ..EngineOptions::default()
        },
    );
    let app = create_router(AppState::new(engine));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(false);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommend_three_titles() {
    let server = create_test_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({
            "games": ["shadow strike", "galaxy raiders", "night heist"]
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"]
        .as_object()
        .expect("recommendations map");

    assert_eq!(recommendations.len(), 3);
    for method in ["cosine", "pearson", "euclidean"] {
        let ranked = recommendations[method].as_array().expect("ranked list");
        assert_eq!(ranked.len(), 3, "method {}", method);
        for item in ranked {
            assert!(item["title"].is_string());
            let score = item["score"].as_f64().unwrap();
            // Rounded to 3 decimals.
            let thousandths = score * 1000.0;
            assert!((thousandths - thousandths.round()).abs() < 1e-6);
            // Genre detail is off by default.
            assert!(item.get("genres").is_none());
        }
    }
}

#[tokio::test]
async fn test_recommend_accepts_fuzzy_titles() {
    let server = create_test_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({
            "games": ["shadow strikke", "GALAXY RAIDERS", " night heist "]
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommend_with_genre_detail() {
    let server = create_test_server(true);

    let response = server
        .post("/recommend")
        .json(&json!({
            "games": ["shadow strike", "galaxy raiders", "night heist"]
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    for item in body["recommendations"]["cosine"].as_array().unwrap() {
        let genres = item["genres"].as_object().expect("genre detail enabled");
        assert_eq!(genres.len(), 9);
        assert!(genres.contains_key("Sci-Fi"));
    }
}

#[tokio::test]
async fn test_recommend_wrong_count_is_rejected() {
    let server = create_test_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({
            "games": ["shadow strike", "night heist"]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "exactly 3 titles required");
}

#[tokio::test]
async fn test_recommend_unknown_titles_is_rejected() {
    let server = create_test_server(false);

    let response = server
        .post("/recommend")
        .json(&json!({
            "games": ["totally_unknown_a", "totally_unknown_b", "totally_unknown_c"]
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "insufficient matches");
}

#[tokio::test]
async fn test_game_detail_with_metadata() {
    let server = create_test_server(false);

    let response = server.get("/games/shadow%20strike").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Shadow Strike");
    assert_eq!(body["year"], "2019");
    assert_eq!(body["plot"], "A covert operative hunts a rogue agent.");
    assert_eq!(body["genres"]["Thriller"], true);
    assert_eq!(body["genres"]["Comedy"], false);
}

#[tokio::test]
async fn test_game_detail_placeholders() {
    let server = create_test_server(false);

    let response = server.get("/games/galaxy%20raiders").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["year"], "Information not available");
    assert_eq!(body["plot"], "No description found for this game.");
}

#[tokio::test]
async fn test_game_detail_miss_is_404() {
    let server = create_test_server(false);

    let response = server.get("/games/half-life").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = create_test_server(false);

    let response = server.get("/health").await;
    assert!(response.maybe_header("x-request-id").is_some());
}
