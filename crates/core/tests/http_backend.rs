use project_screen_core::{
    BackendError, HttpSimilarityBackend, ResultId, SearchQuery, SearchSession, SessionState,
    SimilarityBackend, Tier,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn find_similar_posts_the_proposal_and_keeps_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/find_similar_projects"))
        .and(body_json(json!({"text": "X", "abstract": "Y"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Existing project",
                "abstract": "Prior work.",
                "matching_score": 90.0,
                "matching_comments": "### Similarities\n- same domain"
            },
            {
                "id": 2,
                "title": "Distant project",
                "abstract": "Unrelated work.",
                "matching_score": 40.0,
                "matching_comments": ""
            }
        ])))
        .mount(&server)
        .await;

    let backend = HttpSimilarityBackend::new(&server.uri()).expect("backend url");
    let results = backend
        .find_similar(&SearchQuery::new("X", "Y"))
        .await
        .expect("find_similar should succeed");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, ResultId::Number(1));
    assert_eq!(results[0].matching_score, 90.0);
    assert_eq!(results[1].title, "Distant project");
}

#[tokio::test]
async fn session_against_the_real_client_classifies_the_maximum() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/find_similar_projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "a", "abstract": "a", "matching_score": 90.0, "matching_comments": ""},
            {"id": 2, "title": "b", "abstract": "b", "matching_score": 40.0, "matching_comments": ""}
        ])))
        .mount(&server)
        .await;

    let session = SearchSession::new(HttpSimilarityBackend::new(&server.uri()).expect("backend url"));
    session.submit(SearchQuery::new("X", "Y")).await;

    let state = session.current_state();
    assert_eq!(state.results().len(), 2);
    assert_eq!(
        state.recommendation().map(|rec| rec.tier),
        Some(Tier::NotRecommended)
    );
}

#[tokio::test]
async fn server_error_status_is_surfaced_as_such() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/find_similar_projects"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = HttpSimilarityBackend::new(&server.uri()).expect("backend url");
    let error = backend
        .find_similar(&SearchQuery::new("X", "Y"))
        .await
        .expect_err("500 should fail");

    assert!(matches!(error, BackendError::Server { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn unexpected_body_shape_is_malformed_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/find_similar_projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"surprise": true})))
        .mount(&server)
        .await;

    let backend = HttpSimilarityBackend::new(&server.uri()).expect("backend url");
    let error = backend
        .find_similar(&SearchQuery::new("X", "Y"))
        .await
        .expect_err("object body should not decode as a result list");

    assert!(matches!(error, BackendError::MalformedResponse { .. }));
}

#[tokio::test]
async fn unreachable_service_fails_the_session_not_the_caller() {
    // Discard port; nothing listens there.
    let backend = HttpSimilarityBackend::new("http://127.0.0.1:9/").expect("backend url");
    let session = SearchSession::new(backend);

    session.submit(SearchQuery::new("X", "Y")).await;

    let state = session.current_state();
    assert!(matches!(state, SessionState::Failed { .. }));
    assert!(state.results().is_empty());
    assert!(state.recommendation().is_none());
}

#[tokio::test]
async fn maintenance_triggers_pass_the_status_message_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/load_data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Original data loaded successfully"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate_embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let backend = HttpSimilarityBackend::new(&server.uri()).expect("backend url");

    let loaded = backend.load_data().await.expect("load_data should succeed");
    assert_eq!(
        loaded.message.as_deref(),
        Some("Original data loaded successfully")
    );

    let generated = backend
        .generate_embeddings()
        .await
        .expect("generate_embeddings should succeed");
    assert_eq!(generated.message, None);
}
