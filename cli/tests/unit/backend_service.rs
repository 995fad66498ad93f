//! Backend deployment: project link, variables, status polling, URL.

#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::time::Duration;

use tandem_cli::application::services::backend::{
    deploy_backend, resolve_backend_url, wait_for_deployment,
};
use tandem_cli::domain::{DeployConfirmation, DeployError, Tier};

use crate::mocks::{
    RecordingReporter, ScriptedBackend, ScriptedPrompt, fail, ok, test_config,
};

#[tokio::test(start_paused = true)]
async fn test_linked_project_is_not_recreated() {
    let backend = ScriptedBackend::default();
    let result = deploy_backend(
        &backend,
        &ScriptedPrompt::default(),
        &RecordingReporter::default(),
        &test_config(),
    )
    .await
    .expect("deploy");

    assert!(!result.project_created);
    assert!(!backend.calls.borrow().iter().any(|c| c.starts_with("init")));
    assert_eq!(result.url.as_str(), "https://shop-backend.up.railway.app");
}

#[tokio::test(start_paused = true)]
async fn test_unlinked_directory_creates_named_project() {
    let backend = ScriptedBackend {
        linked: false,
        ..ScriptedBackend::default()
    };
    let result = deploy_backend(
        &backend,
        &ScriptedPrompt::default(),
        &RecordingReporter::default(),
        &test_config(),
    )
    .await
    .expect("deploy");

    assert!(result.project_created);
    assert!(backend.called("init shop-backend"));
    assert!(backend.called("add mysql"));
}

#[tokio::test(start_paused = true)]
async fn test_variables_are_pushed_in_order_with_fresh_secret() {
    let backend = ScriptedBackend::default();
    deploy_backend(
        &backend,
        &ScriptedPrompt::default(),
        &RecordingReporter::default(),
        &test_config(),
    )
    .await
    .expect("deploy");

    let variables = backend.variables.borrow();
    let keys: Vec<&str> = variables.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "NODE_ENV",
            "PORT",
            "JWT_SECRET",
            "JWT_EXPIRES_IN",
            "RATE_LIMIT_WINDOW_MS",
            "RATE_LIMIT_MAX_REQUESTS",
            "LOG_LEVEL",
            "FRONTEND_URL",
        ]
    );
    let secret = &variables[2].1;
    assert!(secret.starts_with("shop-"));
    assert_eq!(secret.len(), "shop-".len() + 64);
}

#[tokio::test(start_paused = true)]
async fn test_failed_variable_does_not_stop_the_rest() {
    let backend = ScriptedBackend {
        failing_variables: vec!["PORT".to_string()],
        ..ScriptedBackend::default()
    };
    let reporter = RecordingReporter::default();
    let result = deploy_backend(&backend, &ScriptedPrompt::default(), &reporter, &test_config())
        .await
        .expect("deploy");

    assert_eq!(result.failed_variables, ["PORT"]);
    assert_eq!(backend.count("variables"), 8);
    assert!(reporter.has("warn", "PORT not set"));
}

#[tokio::test(start_paused = true)]
async fn test_wait_confirms_after_in_progress_polls() {
    let backend = ScriptedBackend {
        statuses: VecDeque::from([
            ok(r#"{"status":"BUILDING"}"#),
            fail(1, "network error"),
            ok(r#"{"status":"SUCCESS"}"#),
        ])
        .into(),
        ..ScriptedBackend::default()
    };
    let start = tokio::time::Instant::now();

    let confirmation = wait_for_deployment(&backend, Duration::from_secs(5), 10).await;

    assert_eq!(confirmation, DeployConfirmation::Confirmed { attempts: 3 });
    assert_eq!(start.elapsed(), Duration::from_secs(15));
}

#[tokio::test(start_paused = true)]
async fn test_wait_gives_up_after_max_polls() {
    let backend = ScriptedBackend {
        statuses: VecDeque::new().into(),
        ..ScriptedBackend::default()
    };

    let confirmation = wait_for_deployment(&backend, Duration::from_secs(5), 3).await;

    assert_eq!(confirmation, DeployConfirmation::NotConfirmed { attempts: 3 });
    assert_eq!(backend.count("service status"), 3);
}

#[tokio::test(start_paused = true)]
async fn test_not_confirmed_deployment_continues_with_warning() {
    let backend = ScriptedBackend {
        statuses: VecDeque::new().into(),
        ..ScriptedBackend::default()
    };
    let reporter = RecordingReporter::default();

    let result = deploy_backend(&backend, &ScriptedPrompt::default(), &reporter, &test_config())
        .await
        .expect("deploy");

    assert!(matches!(result.confirmation, DeployConfirmation::NotConfirmed { .. }));
    assert!(reporter.has("warn", "not yet confirmed"));
    assert!(backend.called("domain"));
}

#[tokio::test(start_paused = true)]
async fn test_crashed_deployment_is_fatal() {
    let backend = ScriptedBackend {
        statuses: VecDeque::from([ok(r#"{"status":"CRASHED"}"#)]).into(),
        ..ScriptedBackend::default()
    };

    let err = deploy_backend(
        &backend,
        &ScriptedPrompt::default(),
        &RecordingReporter::default(),
        &test_config(),
    )
    .await
    .expect_err("crash must abort");

    assert!(matches!(
        err.downcast_ref::<DeployError>(),
        Some(DeployError::DeploymentFailed { .. })
    ));
    assert!(!backend.called("domain"));
}

#[tokio::test]
async fn test_domain_output_is_normalized() {
    let backend = ScriptedBackend {
        domain: ok("🚀 shop-backend.up.railway.app/\n"),
        ..ScriptedBackend::default()
    };
    let prompt = ScriptedPrompt::default();

    let url = resolve_backend_url(&backend, &prompt, &RecordingReporter::default())
        .await
        .expect("url");

    assert_eq!(url.as_str(), "https://shop-backend.up.railway.app");
    assert!(prompt.asked.borrow().is_empty());
}

#[tokio::test]
async fn test_missing_domain_falls_back_to_operator() {
    let backend = ScriptedBackend {
        domain: fail(1, "no service linked"),
        ..ScriptedBackend::default()
    };
    let prompt = ScriptedPrompt::answering(&["http://api.shop.example"]);

    let url = resolve_backend_url(&backend, &prompt, &RecordingReporter::default())
        .await
        .expect("url");

    assert_eq!(url.as_str(), "https://api.shop.example");
    assert_eq!(*prompt.asked.borrow(), ["Backend URL"]);
}

#[tokio::test]
async fn test_no_domain_and_no_answer_is_url_unavailable() {
    let backend = ScriptedBackend {
        domain: ok("   "),
        ..ScriptedBackend::default()
    };

    let err = resolve_backend_url(
        &backend,
        &ScriptedPrompt::default(),
        &RecordingReporter::default(),
    )
    .await
    .expect_err("no url");

    assert_eq!(
        err.downcast_ref::<DeployError>(),
        Some(&DeployError::UrlUnavailable {
            tier: Tier::Backend
        })
    );
}
