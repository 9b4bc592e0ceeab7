//! Contract tests for the HTTP todos client: request shape, response parsing
//! and error mapping.

use serde_json::json;
use taskdeck::api::{ApiError, Remote, TodosApi, TodosConfig};
use taskdeck::libs::task::Task;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> TodosApi {
    TodosApi::new(&TodosConfig {
        base_url: server.uri(),
        user_id: 1,
    })
}

#[tokio::test]
async fn test_fetch_all_parses_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tasks = api(&mock_server).fetch_all().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].title, "quis ut nam facilis");
    assert!(tasks[1].completed);
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = TodosApi::new(&TodosConfig {
        base_url: format!("{}/", mock_server.uri()),
        user_id: 1,
    });

    assert!(api.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_posts_title_user_and_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(header("content-type", "application/json; charset=UTF-8"))
        .and(body_json(json!({
            "title": "Buy milk",
            "userId": 1,
            "completed": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "title": "Buy milk",
            "userId": 1,
            "completed": false,
            "id": 201
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = api(&mock_server).create("Buy milk").await.unwrap();

    assert_eq!(created.id, 201);
    assert_eq!(created.title, "Buy milk");
}

#[tokio::test]
async fn test_update_puts_full_object() {
    let mock_server = MockServer::start().await;
    let task = Task {
        user_id: 1,
        id: 5,
        title: "Renamed".to_string(),
        completed: true,
    };

    Mock::given(method("PUT"))
        .and(path("/todos/5"))
        .and(body_json(json!({
            "userId": 1,
            "id": 5,
            "title": "Renamed",
            "completed": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&task))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = api(&mock_server).update(&task).await.unwrap();

    assert_eq!(updated, task);
}

#[tokio::test]
async fn test_update_accepts_empty_success() {
    let mock_server = MockServer::start().await;
    let task = Task::new(6, "Renamed", 1);

    Mock::given(method("PUT"))
        .and(path("/todos/6"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/todos/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api(&mock_server);
    assert_eq!(api.update(&task).await.unwrap(), task);

    let other = Task::new(7, "Also renamed", 1);
    assert_eq!(api.update(&other).await.unwrap(), other);
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(api(&mock_server).delete(9).await.is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/9"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = api(&mock_server).delete(9).await.unwrap_err();

    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/todos/9"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = api(&mock_server).fetch_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() {
    let mock_server = MockServer::start().await;
    let api = api(&mock_server);
    drop(mock_server);

    let err = api.fetch_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Request { .. }));
}
