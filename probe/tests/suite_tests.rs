use detector::{EmotionLabel, EmotionReading, EmotionScores, EndpointClient, EndpointConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};
use probe::suite::{ProbeSuite, BUILTIN_CASES};

/// Canonical response sentence with the given label dominant.
fn canonical_body(label: EmotionLabel) -> String {
    let mut scores = EmotionScores {
        anger: 0.01,
        disgust: 0.01,
        fear: 0.01,
        joy: 0.01,
        sadness: 0.01,
    };
    match label {
        EmotionLabel::Anger => scores.anger = 0.96,
        EmotionLabel::Disgust => scores.disgust = 0.96,
        EmotionLabel::Fear => scores.fear = 0.96,
        EmotionLabel::Joy => scores.joy = 0.96,
        EmotionLabel::Sadness => scores.sadness = 0.96,
    }
    EmotionReading::from_scores(scores).render()
}

fn client_for(server: &ServerGuard) -> EndpointClient {
    let config = EndpointConfig::default().with_base_url(server.url());
    EndpointClient::new(config).unwrap()
}

/// Stand up a fully conforming endpoint: root liveness, the four
/// classification cases, and the in-band empty-input error. The mock
/// handles ride along so they stay registered.
async fn conforming_server() -> (ServerGuard, Vec<Mock>) {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();

    mocks.push(
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("Emotion Detector is running")
            .create_async()
            .await,
    );

    for case in &BUILTIN_CASES {
        mocks.push(
            server
                .mock("GET", "/emotionDetector")
                .match_query(Matcher::UrlEncoded(
                    "textToAnalyze".into(),
                    case.text.into(),
                ))
                .with_status(200)
                .with_body(canonical_body(case.expected))
                .create_async()
                .await,
        );
    }

    mocks.push(
        server
            .mock("GET", "/emotionDetector")
            .match_query(Matcher::UrlEncoded("textToAnalyze".into(), "".into()))
            .with_status(200)
            .with_body("Invalid text! Please try again!")
            .create_async()
            .await,
    );

    (server, mocks)
}

#[tokio::test]
async fn test_full_suite_passes_against_conforming_endpoint() {
    let (server, _mocks) = conforming_server().await;
    let client = client_for(&server);

    let summary = ProbeSuite::new(&client).run().await;

    assert!(summary.endpoint_available);
    assert_eq!(summary.cases.len(), 6); // health + 4 cases + empty input
    assert_eq!(summary.passed(), 6);
    assert_eq!(summary.mismatched(), 0);
    assert_eq!(summary.failed(), 0);
    assert!(summary.all_passed());
}

#[tokio::test]
async fn test_unavailable_service_skips_endpoint_cases() {
    // Discard port; nothing listens there.
    let config = EndpointConfig::default().with_base_url("http://127.0.0.1:9");
    let client = EndpointClient::new(config).unwrap();

    let summary = ProbeSuite::new(&client).run().await;

    assert!(!summary.endpoint_available);
    assert_eq!(summary.cases.len(), 1);
    assert!(summary.cases[0].outcome.is_failure());
    assert!(!summary.all_passed());
}

#[tokio::test]
async fn test_mismatched_labels_are_reported_not_fatal() {
    let mut server = Server::new_async().await;
    let _root = server
        .mock("GET", "/")
        .with_status(200)
        .create_async()
        .await;
    // Every probe gets a sadness verdict, whatever the input.
    let _mock = server
        .mock("GET", "/emotionDetector")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(canonical_body(EmotionLabel::Sadness))
        .expect_at_least(5)
        .create_async()
        .await;

    let client = client_for(&server);
    let summary = ProbeSuite::new(&client).run().await;

    // Health and the sadness case pass; the other three cases and the
    // empty-input probe come back without their expected substrings.
    assert!(summary.endpoint_available);
    assert_eq!(summary.cases.len(), 6);
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.mismatched(), 4);
    assert_eq!(summary.failed(), 0);
    assert!(!summary.all_passed());
}

#[tokio::test]
async fn test_non_200_is_failure_and_run_continues() {
    let mut server = Server::new_async().await;
    let _root = server
        .mock("GET", "/")
        .with_status(200)
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/emotionDetector")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .expect_at_least(5)
        .create_async()
        .await;

    let client = client_for(&server);
    let summary = ProbeSuite::new(&client).run().await;

    assert_eq!(summary.cases.len(), 6);
    assert_eq!(summary.passed(), 1);
    assert_eq!(summary.failed(), 5);
    assert!(!summary.all_passed());
}

#[tokio::test]
async fn test_empty_input_error_path() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/emotionDetector")
        .match_query(Matcher::UrlEncoded("textToAnalyze".into(), "".into()))
        .with_status(200)
        .with_body("Invalid text! Please try again!")
        .create_async()
        .await;

    let client = client_for(&server);
    let outcome = ProbeSuite::new(&client).probe_empty_input().await;

    assert!(outcome.is_pass(), "got: {}", outcome);
}

#[tokio::test]
async fn test_empty_input_without_marker_is_mismatch() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/emotionDetector")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(canonical_body(EmotionLabel::Joy))
        .create_async()
        .await;

    let client = client_for(&server);
    let outcome = ProbeSuite::new(&client).probe_empty_input().await;

    assert!(outcome.is_mismatch(), "got: {}", outcome);
}

#[tokio::test]
async fn test_repeated_probe_is_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/emotionDetector")
        .match_query(Matcher::UrlEncoded(
            "textToAnalyze".into(),
            "I love this new technology!".into(),
        ))
        .with_status(200)
        .with_body(canonical_body(EmotionLabel::Joy))
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let suite = ProbeSuite::new(&client);

    let first = suite.probe_case(&BUILTIN_CASES[0]).await;
    let second = suite.probe_case(&BUILTIN_CASES[0]).await;

    assert!(first.is_pass());
    assert!(second.is_pass());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_probe_records_metrics() {
    let (server, _mocks) = conforming_server().await;
    let client = client_for(&server);

    let outcome = ProbeSuite::new(&client).probe_case(&BUILTIN_CASES[1]).await;

    let metrics = outcome.metrics().expect("pass outcomes carry metrics");
    assert_eq!(metrics.status, Some(200));
    assert!(metrics.body_length.unwrap() > 0);
}
