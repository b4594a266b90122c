//! Integration tests for the File Manager endpoints using wiremock
//!
//! These go through the default reqwest provider, so they cover URL
//! building, authentication and body encoding end to end.

mod common;

use std::time::Duration;

use hubspot_filemanager::{
    Client, Error, UploadFile,
    http::StatusCode,
    types::{FileListParams, FolderListParams, MoveFileParams, UploadParams},
};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_key_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key(common::test_api_key())
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}

async fn last_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    let request = requests.last().expect("at least one request");
    String::from_utf8_lossy(&request.body).into_owned()
}

#[tokio::test]
async fn test_upload_sends_multipart_with_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/filemanager/api/v2/files"))
        .and(query_param("overwrite", "false"))
        .and(query_param("hapikey", common::test_api_key().as_str()))
        .and(body_string_contains("name=\"files\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"objects": [{"id": 1001}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("notes.txt");
    std::fs::write(&file_path, "quarterly numbers").unwrap();

    let client = api_key_client(&mock_server);
    let response = client
        .files()
        .upload(&file_path, UploadParams::new().file_name("q3.txt"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["objects"][0]["id"], 1001);

    let sent = last_body(&mock_server).await;
    assert!(sent.contains("filename=\"notes.txt\""));
    assert!(sent.contains("quarterly numbers"));
    assert!(sent.contains("name=\"file_names\""));
    assert!(sent.contains("q3.txt"));
    assert!(!sent.contains("folder_paths"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_upload_with_overwrite_and_in_memory_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/filemanager/api/v2/files"))
        .and(query_param("overwrite", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    client
        .files()
        .upload_file(
            UploadFile::from_bytes("pixel.gif", b"GIF89a".to_vec()),
            UploadParams::new().overwrite(true).folder_path("/images"),
        )
        .await
        .unwrap();

    let sent = last_body(&mock_server).await;
    assert!(sent.contains("filename=\"pixel.gif\""));
    assert!(sent.contains("name=\"folder_paths\""));
    assert!(sent.contains("/images"));
    assert!(!sent.contains("file_names"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_upload_of_missing_file_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = api_key_client(&mock_server);
    let result = client
        .files()
        .upload(dir.path().join("nope.png"), UploadParams::new())
        .await;

    match result {
        Err(Error::FileOpen { path, .. }) => assert!(path.ends_with("nope.png")),
        other => panic!("Expected FileOpen error, got {other:?}"),
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_list_sends_filters_as_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/filemanager/api/v2/files"))
        .and(body_json(json!({"limit": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": [], "total": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/filemanager/api/v2/files"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": [], "total": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    client
        .files()
        .list(FileListParams::new().limit(10))
        .await
        .unwrap();
    client.files().list(FileListParams::new()).await.unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_bearer_token_is_sent_as_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/filemanager/api/v2/folders"))
        .and(header("authorization", "Bearer pat-na1-test"))
        .and(query_param_is_missing("hapikey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .access_token("pat-na1-test")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    client
        .files()
        .list_folders(FolderListParams::new())
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_create_folder_posts_exact_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/filemanager/api/v2/folders"))
        .and(body_json(json!({"name": "Campaigns", "parent_folder_id": 12})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 77, "name": "Campaigns"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let folder: serde_json::Value = client
        .files()
        .create_folder("Campaigns", 12)
        .await
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(folder["id"], 77);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_replace_archive_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/filemanager/api/v2/files/55"))
        .and(query_param_is_missing("overwrite"))
        .and(body_string_contains("name=\"files\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 55})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/filemanager/api/v2/files/55/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"succeeded": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/filemanager/api/v2/files/55"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let files = client.files();

    let replaced = files
        .replace_file(55, UploadFile::from_bytes("v2.txt", "second draft"))
        .await
        .unwrap();
    assert!(replaced.is_success());

    files.archive(55).await.unwrap();

    let deleted = files.delete(55).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(deleted.body().is_empty());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_move_file_posts_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/filemanager/api/v2/files/9/move-file"))
        .and(body_json(json!({"folder_path": "/archive", "name": "old.png"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    client
        .files()
        .move_file(9, MoveFileParams::new().folder_path("/archive").name("old.png"))
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_not_found_is_returned_as_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/filemanager/api/v2/folders/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "Folder not found",
            "correlationId": "c0ffee"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let response = client.files().get_folder(404).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.is_error());

    match response.error_for_status() {
        Err(Error::Api {
            status,
            message,
            correlation_id,
        }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Folder not found");
            assert_eq!(correlation_id.as_deref(), Some("c0ffee"));
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.files().meta(1).await.unwrap_err();
    assert!(err.is_timeout(), "Expected timeout, got {err:?}");
}

#[tokio::test]
async fn test_custom_default_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/filemanager/api/v2/files/3"))
        .and(header("x-request-source", "integration-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .default_header("x-request-source", "integration-test")
        .unwrap()
        .build()
        .unwrap();

    client.files().meta(3).await.unwrap();
    mock_server.verify().await;
}
