//! End-to-end checks against a stub analysis service bound to an ephemeral port.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gitgrade_cli::adapters::gitgrade_adapter::GitGradeAdapter;
use gitgrade_cli::enums::commands::Commands;
use gitgrade_cli::enums::failure_policy::FailurePolicy;
use gitgrade_cli::enums::lifecycle_state::LifecycleState;
use gitgrade_cli::enums::output_format::OutputFormat;
use gitgrade_cli::errors::GitGradeError;
use gitgrade_cli::enums::result_source::ResultSource;
use gitgrade_cli::enums::roadmap_encoding::RoadmapEncoding;
use gitgrade_cli::enums::tier::Tier;
use gitgrade_cli::logger::result_printer::ResultPrinter;
use gitgrade_cli::services::endpoint_resolver::EndpointResolver;
use gitgrade_cli::services::fallback_content::FallbackContent;
use gitgrade_cli::services::result_orchestrator::ResultOrchestrator;
use gitgrade_cli::services::view_builder::ViewBuilder;
use gitgrade_cli::structs::navigation_context::NavigationContext;
use gitgrade_cli::structs::result_view::RoadmapView;
use gitgrade_cli::workers::command_runner::{AnalyzeOptions, CommandRunner};
use serde_json::{json, Value};
use url::Url;
use warp::http::StatusCode;
use warp::Filter;

const WIDGET: &str = "https://github.com/acme/widget";

/// Replies to `POST /analyze` with whatever `respond` returns for the request body,
/// counting every call.
fn spawn_backend<F>(respond: F) -> (Url, Arc<AtomicUsize>)
where
    F: Fn(Value) -> (StatusCode, Value, u64) + Clone + Send + Sync + 'static,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let route = warp::post()
        .and(warp::path("analyze"))
        .and(warp::body::json())
        .and_then(move |body: Value| {
            let respond = respond.clone();
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let (status, payload, delay_ms) = respond(body);
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok::<_, warp::Rejection>(warp::reply::with_status(warp::reply::json(&payload), status))
            }
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let url = Url::parse(&format!("http://{}/analyze", addr)).unwrap();
    (url, calls)
}

fn widget_payload(roadmap: Value) -> Value {
    json!({
        "repo_name": "widget",
        "owner": "acme",
        "score": 85,
        "level": "Strong Hire",
        "summary": "Great repo",
        "roadmap": roadmap,
        "details": {"code": {}, "commits": {}}
    })
}

fn orchestrator_for(url: Url, policy: FailurePolicy) -> ResultOrchestrator {
    let adapter = GitGradeAdapter::new(url, Duration::from_secs(5)).unwrap();
    ResultOrchestrator::new(Arc::new(adapter), policy)
}

/// An address nothing listens on.
fn refused_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/analyze", addr)).unwrap()
}

#[tokio::test]
async fn successful_analysis_renders_advanced_tier_and_roadmap_in_order() {
    let (url, calls) = spawn_backend(|body| {
        assert_eq!(body, json!({ "url": WIDGET }));
        (StatusCode::OK, widget_payload(json!(["Add tests", "Improve docs"])), 0)
    });
    let report_base = EndpointResolver::report_base(url.as_str());
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Strict);

    let navigation = NavigationContext::from_link("/result?repo=https%3A%2F%2Fgithub.com%2Facme%2Fwidget");
    let state = orchestrator.run(navigation.repository()).await;
    let outcome = state.outcome().expect("success state");
    assert_eq!(outcome.source, ResultSource::Live);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let view = ViewBuilder::build(outcome, &report_base, RoadmapEncoding::Joined);
    assert_eq!(view.tier.tier, Tier::Advanced);
    assert_eq!(view.tier.label, "Advanced");
    assert_eq!(view.tier.badge, "Gold Developer");
    assert_eq!(view.verdict.as_deref(), Some("Strong Hire"));
    assert_eq!(view.roadmap.steps(), ["Add tests", "Improve docs"]);
    assert_eq!(
        view.report_url,
        format!("{}/download-pdf?repo=widget&score=85&summary=Great+repo&roadmap=Add+tests%2CImprove+docs", report_base)
    );

    let text = ResultPrinter::with_width(false, 60).render_view(&view);
    assert!(text.contains("[ ] 1. Add tests\n  [ ] 2. Improve docs"));
}

#[tokio::test]
async fn empty_roadmap_shows_placeholder() {
    let (url, _) = spawn_backend(|_| (StatusCode::OK, widget_payload(json!([])), 0));
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Strict);

    let outcome = orchestrator.run(Some(WIDGET)).await.outcome().cloned().expect("success state");
    let view = ViewBuilder::build(&outcome, "http://localhost:8000", RoadmapEncoding::Joined);

    assert_eq!(
        view.roadmap,
        RoadmapView::NothingToImprove { message: "Excellent repository! No major improvements needed.".to_string() }
    );
    assert!(view.report_url.ends_with("&roadmap="));
}

#[tokio::test]
async fn missing_repository_never_contacts_the_service() {
    let (url, calls) = spawn_backend(|_| (StatusCode::OK, widget_payload(json!([])), 0));
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Lenient);

    let navigation = NavigationContext::from_link("/result");
    assert_eq!(orchestrator.run(navigation.repository()).await, &LifecycleState::MissingInput);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_service_under_strict_policy_is_an_error() {
    let mut orchestrator = orchestrator_for(refused_url(), FailurePolicy::Strict);

    match orchestrator.run(Some(WIDGET)).await {
        LifecycleState::Error(message) => assert!(message.starts_with("Network Error:"), "{}", message),
        other => panic!("expected error state, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_service_under_lenient_policy_shows_labeled_demo() {
    let mut orchestrator = orchestrator_for(refused_url(), FailurePolicy::Lenient);

    let outcome = orchestrator.run(Some(WIDGET)).await.outcome().cloned().expect("demo success");
    assert!(outcome.is_demo());
    assert_eq!(outcome.result, FallbackContent::demo_result());

    let view = ViewBuilder::build(&outcome, "http://localhost:8000", RoadmapEncoding::Joined);
    let text = ResultPrinter::with_width(false, 60).render_view(&view);
    assert!(text.starts_with("⚠️  DEMO CONTENT"));
}

#[tokio::test]
async fn server_error_detail_reaches_the_error_state() {
    let (url, _) = spawn_backend(|_| {
        (StatusCode::BAD_REQUEST, json!({ "detail": "GitHub API Error: Not Found" }), 0)
    });
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Strict);

    assert_eq!(
        orchestrator.run(Some("https://github.com/acme/missing")).await,
        &LifecycleState::Error("Server Error: 400 GitHub API Error: Not Found".to_string())
    );
}

#[tokio::test]
async fn malformed_success_body_is_unparseable() {
    let (url, _) = spawn_backend(|_| (StatusCode::OK, json!({ "repo_name": "widget" }), 0));
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Strict);

    match orchestrator.run(Some(WIDGET)).await {
        LifecycleState::Error(message) => assert!(message.starts_with("Unparseable response:"), "{}", message),
        other => panic!("expected error state, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_superseded_response_is_discarded() {
    let (url, calls) = spawn_backend(|body| {
        let repo = body["url"].as_str().unwrap_or_default().to_string();
        let name = repo.rsplit('/').next().unwrap_or_default().to_string();
        let delay = if name == "slow" { 300 } else { 0 };
        let mut payload = widget_payload(json!([]));
        payload["repo_name"] = json!(name);
        (StatusCode::OK, payload, delay)
    });
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Strict);

    let slow = orchestrator.begin(Some("https://github.com/acme/slow")).expect("slow request");
    let fast = orchestrator.begin(Some("https://github.com/acme/fast")).expect("fast request");

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for pending in [slow, fast] {
        let tx = tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(pending.execute().await);
        });
    }
    drop(tx);

    let mut applied = Vec::new();
    while let Some(completed) = rx.recv().await {
        let repository = completed.repository().to_string();
        applied.push((repository, orchestrator.complete(completed)));
    }

    assert_eq!(
        applied,
        vec![
            ("https://github.com/acme/fast".to_string(), true),
            ("https://github.com/acme/slow".to_string(), false),
        ]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let outcome = orchestrator.state().outcome().expect("success state");
    assert_eq!(outcome.result.repo_name, "fast");
}

#[tokio::test]
async fn teardown_ignores_late_response() {
    let (url, _) = spawn_backend(|_| (StatusCode::OK, widget_payload(json!(["Add tests"])), 100));
    let mut orchestrator = orchestrator_for(url, FailurePolicy::Strict);

    let pending = orchestrator.begin(Some(WIDGET)).expect("request");
    let handle = tokio::spawn(pending.execute());
    orchestrator.teardown();

    let completed = handle.await.unwrap();
    assert!(completed.is_success());
    assert!(!orchestrator.complete(completed));
    assert!(orchestrator.is_torn_down());
    assert_eq!(orchestrator.state(), &LifecycleState::Loading);
}

fn config_file(dir: &tempfile::TempDir, api_url: &Url) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, format!("[service]\napi_url = \"{}\"\ntimeout_secs = 5\n", api_url)).unwrap();
    path
}

#[tokio::test]
async fn analyze_command_with_repo_less_link_exits_as_missing_input() {
    let (url, calls) = spawn_backend(|_| (StatusCode::OK, widget_payload(json!([])), 0));
    let dir = tempfile::tempdir().unwrap();
    let config = config_file(&dir, &url);

    let error = CommandRunner::new()
        .run_command(Commands::Analyze {
            repo: None,
            link: Some("/result?tab=summary".to_string()),
            policy: Some(FailurePolicy::Lenient),
            format: Some(OutputFormat::Json),
            open_report: false,
            config: Some(config),
        })
        .await
        .unwrap_err();

    assert_eq!(error, GitGradeError::InputMissing);
    assert_eq!(error.exit_code(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn analyze_command_prints_json_view() {
    let (url, calls) = spawn_backend(|_| (StatusCode::OK, widget_payload(json!(["Add tests"])), 0));
    let dir = tempfile::tempdir().unwrap();
    let config = config_file(&dir, &url);

    let result = CommandRunner::new()
        .run_command(Commands::Analyze {
            repo: Some(WIDGET.to_string()),
            link: None,
            policy: None,
            format: Some(OutputFormat::Json),
            open_report: false,
            config: Some(config),
        })
        .await;

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn json_view_carries_live_source_and_report_link() {
    let (url, _) = spawn_backend(|_| (StatusCode::OK, widget_payload(json!(["Add tests"])), 0));
    let dir = tempfile::tempdir().unwrap();
    let options = AnalyzeOptions {
        repo: Some(WIDGET.to_string()),
        format: Some(OutputFormat::Json),
        config: Some(config_file(&dir, &url)),
        ..AnalyzeOptions::default()
    };

    let config = CommandRunner::effective_config(&options).unwrap();
    let view = CommandRunner::analyze(&config, &options).await.unwrap();
    let json: Value = serde_json::from_str(&CommandRunner::render(&config.output, &view).unwrap()).unwrap();

    assert_eq!(json["source"], "live");
    assert_eq!(json["score"], 85);
    assert_eq!(json["roadmap"], json!({ "kind": "steps", "steps": ["Add tests"] }));
    assert_eq!(
        json["report_url"],
        format!("{}/download-pdf?repo=widget&score=85&summary=Great+repo&roadmap=Add+tests", EndpointResolver::report_base(url.as_str()))
    );
}

#[tokio::test]
async fn analyze_command_failure_under_strict_policy_offers_retry() {
    let dir = tempfile::tempdir().unwrap();
    let options = AnalyzeOptions {
        repo: Some(WIDGET.to_string()),
        config: Some(config_file(&dir, &refused_url())),
        ..AnalyzeOptions::default()
    };

    let config = CommandRunner::effective_config(&options).unwrap();
    let error = CommandRunner::analyze(&config, &options).await.unwrap_err();
    assert!(matches!(error, GitGradeError::AnalysisFailed { .. }));
    assert!(error.user_message().contains("Try again: gitgrade analyze https://github.com/acme/widget"));
}
