use application_submitter::{
    ApplicationConfig, ApplicationPayload, HmacSha256Signer, PayloadSigner, SubmitError, run_at,
};
use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};

fn config(submission_url: Option<String>) -> ApplicationConfig {
    ApplicationConfig {
        name: Some("Grace Hopper".into()),
        email: Some("grace@example.com".into()),
        resume_link: Some("https://example.com/grace.pdf".into()),
        application_repository_link: Some("https://github.com/grace/cobol".into()),
        application_action_run_link: Some("https://github.com/grace/cobol/actions/runs/42".into()),
        signing_secret: Some("shared-secret".into()),
        submission_url,
        ..Default::default()
    }
}

// ── End-to-end submission ────────────────────────────────────────────

#[tokio::test]
async fn submits_signed_canonical_payload() {
    let mut server = Server::new_async().await;
    let timestamp = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
    let config = config(Some(format!("{}/submit", server.url())));

    let expected_body = concat!(
        r#"{"action_run_link":"https://github.com/grace/cobol/actions/runs/42","#,
        r#""email":"grace@example.com","#,
        r#""name":"Grace Hopper","#,
        r#""repository_link":"https://github.com/grace/cobol","#,
        r#""resume_link":"https://example.com/grace.pdf","#,
        r#""timestamp":"2026-10-17T12:00:00.000000Z"}"#
    );
    let mock = server
        .mock("POST", "/submit")
        .match_header("content-type", "application/json")
        .match_header(
            "x-signature-256",
            Matcher::Regex("^sha256=[0-9a-f]{64}$".to_string()),
        )
        .match_body(Matcher::Exact(expected_body.to_string()))
        .with_status(200)
        .with_body(r#"{"success":true,"receipt":"RCPT-9"}"#)
        .create_async()
        .await;

    let receipt = run_at(&config, timestamp).await.unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.to_string(), "RCPT-9");
}

#[tokio::test]
async fn sends_the_signature_of_the_sent_body() {
    let mut server = Server::new_async().await;
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let config = config(Some(format!("{}/submit", server.url())));

    let body = ApplicationPayload::from_config(&config, timestamp)
        .unwrap()
        .to_canonical_json()
        .unwrap();
    let signature = HmacSha256Signer::new("shared-secret").unwrap().sign(&body);

    let mock = server
        .mock("POST", "/submit")
        .match_header("x-signature-256", signature.as_str())
        .with_status(200)
        .with_body(r#"{"success":true,"receipt":"R1"}"#)
        .create_async()
        .await;

    let receipt = run_at(&config, timestamp).await.unwrap();

    mock.assert_async().await;
    assert_eq!(receipt.as_str(), Some("R1"));
}

// ── Configuration ordering ───────────────────────────────────────────

#[tokio::test]
async fn payload_fields_are_checked_before_secret_and_url() {
    let config = ApplicationConfig {
        name: None,
        signing_secret: None,
        ..config(None)
    };
    match run_at(&config, Utc::now()).await {
        Err(SubmitError::Configuration { missing }) => assert_eq!(missing, vec!["name"]),
        other => panic!("expected Configuration, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_secret_is_reported() {
    let config = ApplicationConfig {
        signing_secret: Some(String::new()),
        ..config(Some("http://127.0.0.1:1/submit".into()))
    };
    match run_at(&config, Utc::now()).await {
        Err(SubmitError::Configuration { missing }) => assert_eq!(missing, vec!["SIGNING_SECRET"]),
        other => panic!("expected Configuration, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_url_is_reported() {
    match run_at(&config(None), Utc::now()).await {
        Err(SubmitError::Configuration { missing }) => assert_eq!(missing, vec!["SUBMISSION_URL"]),
        other => panic!("expected Configuration, got {:?}", other),
    }
}
