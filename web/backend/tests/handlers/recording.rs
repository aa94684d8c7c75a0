use crate::fixtures::{create_recording_app, create_test_state, get_request, upload_request};
use axum::http::StatusCode;
use textcleanse_core::CleansingRow;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_text_result_is_recorded_when_recorder_injected() {
    let app = create_recording_app();

    let response = app
        .router
        .clone()
        .oneshot(get_request("/text-processing?add_text=Hello%2C%20World!"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        app.recorder.rows().unwrap(),
        vec![CleansingRow::new("Hello, World!", "Hello World")]
    );
}

#[tokio::test]
async fn test_file_results_are_recorded_as_one_batch() {
    let app = create_recording_app();

    let response = app
        .router
        .clone()
        .oneshot(upload_request("file", b"one!\ntwo?\nthree.\n"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.recorder.rows().unwrap();
    assert_eq!(
        rows,
        vec![
            CleansingRow::new("one!", "one"),
            CleansingRow::new("two?", "two"),
            CleansingRow::new("three.", "three"),
        ]
    );
}

#[tokio::test]
async fn test_failed_requests_record_nothing() {
    let app = create_recording_app();

    let response = app
        .router
        .clone()
        .oneshot(get_request("/text-processing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(!app.database_path.exists());
}

#[test]
fn test_no_recorder_by_default() {
    let (state, _upload_dir) = create_test_state();
    assert!(state.recorder.is_none());
}
