//! Integration tests for the SWAPI client against a mocked upstream.
//!
//! These tests verify request shaping (paths, query parameters), response
//! parsing, and the mapping of upstream failures onto the error taxonomy.

use std::time::Duration;

use swapi_client::{SwapiClient, SwapiConfig, SwapiError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn luke_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/",
            "https://swapi.dev/api/films/3/",
            "https://swapi.dev/api/films/6/",
            "https://swapi.dev/api/films/7/"
        ]
    })
}

fn tatooine_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Tatooine",
        "climate": "arid",
        "terrain": "desert",
        "population": "200000",
        "diameter": "10465",
        "rotation_period": "23",
        "orbital_period": "304"
    })
}

fn film_json(episode: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "episode_id": episode,
        "director": "George Lucas",
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": "1977-05-25",
        "opening_crawl": "It is a period of civil war."
    })
}

fn page(results: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

fn client_for(server: &MockServer) -> SwapiClient {
    SwapiClient::new(SwapiConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn search_people_sends_query_and_parses_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("search", "luke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![luke_json()])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.search_people("luke").await.unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].name, "Luke Skywalker");
    assert_eq!(result.results[0].films.len(), 5);
}

#[tokio::test]
async fn search_people_zero_results_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("search", "nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.search_people("nobody").await.unwrap();

    assert_eq!(result.results.len(), 0);
}

#[tokio::test]
async fn search_planets_hits_planets_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets/"))
        .and(query_param("search", "tatooine"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![tatooine_json()])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.search_planets("tatooine").await.unwrap();

    assert_eq!(result.results[0].name, "Tatooine");
    assert_eq!(result.results[0].climate, "arid");
}

#[tokio::test]
async fn search_films_hits_films_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/films/"))
        .and(query_param("search", "hope"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![film_json(4, "A New Hope")])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.search_films("hope").await.unwrap();

    assert_eq!(result.results[0].title, "A New Hope");
    assert_eq!(result.results[0].episode_id, 4);
}

#[tokio::test]
async fn person_by_id_hits_id_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(luke_json()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let character = client.person_by_id(1).await.unwrap();

    assert_eq!(character.name, "Luke Skywalker");
    assert_eq!(character.homeworld, "https://swapi.dev/api/planets/1/");
}

#[tokio::test]
async fn missing_id_surfaces_status_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/9999/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.person_by_id(9999).await.unwrap_err();

    match err {
        SwapiError::UpstreamStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Not found"));
        }
        other => panic!("expected UpstreamStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/films/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.all_films().await.unwrap_err();

    assert!(matches!(err, SwapiError::UpstreamStatus { status: 500, .. }));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn malformed_body_is_unexpected_shape() {
    let server = MockServer::start().await;

    // Well-formed JSON, wrong shape: "results" entries missing fields.
    Mock::given(method("GET"))
        .and(path("/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [{"name": "Luke Skywalker"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_people("luke").await.unwrap_err();

    assert!(matches!(err, SwapiError::UnexpectedShape(_)));
    assert!(!err.is_upstream());
}

#[tokio::test]
async fn slow_upstream_times_out_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = SwapiConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let client = SwapiClient::new(config).unwrap();
    let err = client.search_people("luke").await.unwrap_err();

    assert!(matches!(err, SwapiError::Transport(_)));
}

#[tokio::test]
async fn repeated_search_is_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("search", "luke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![luke_json()])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.search_people("luke").await.unwrap();
    let second = client.search_people("luke").await.unwrap();

    assert_eq!(first.results[0].name, second.results[0].name);
    assert_eq!(first.count, second.count);
}
