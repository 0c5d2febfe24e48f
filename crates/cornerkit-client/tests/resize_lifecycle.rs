//! Integration tests for the resize subscription lifecycle.
//!
//! The contract under test:
//!
//! - A resize notification triggers exactly one reposition carrying the
//!   most recently activated offsets.
//! - Before activation and after cleanup the reposition path is a no-op
//!   producing no outbound request.
//! - Re-activation replaces the subscription: the old handle is cancelled
//!   before the new one is installed, and exactly one is live afterwards.
//! - A reposition failure inside the listener is swallowed and does not
//!   stop later notifications from being handled.
//! - Cleanup is idempotent, and dropping the session releases the
//!   subscription the same way.
//!
//! The listener runs as a spawned task on the test's current-thread
//! runtime, so after emitting a synthetic resize the test yields until the
//! task has drained the notification.

use std::sync::Arc;

use cornerkit_client::{MockWindowHost, SubscriptionEvent, WindowHost, WindowStyleSession};
use cornerkit_core::StyleConfig;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

fn session_with_mock(label: &str) -> (Arc<MockWindowHost>, WindowStyleSession) {
    let host = Arc::new(MockWindowHost::new());
    let session = WindowStyleSession::new(host.clone() as Arc<dyn WindowHost>, label);
    (host, session)
}

/// Lets the spawned listener task run until emitted notifications have
/// been processed.
async fn drain_listener() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

fn offsets(corner_radius: f64, offset_x: f64, offset_y: f64) -> StyleConfig {
    StyleConfig {
        corner_radius,
        offset_x,
        offset_y,
    }
}

/// The worked example: activate with explicit offsets, then a simulated
/// resize triggers one reposition carrying those offsets.
#[tokio::test]
async fn resize_triggers_reposition_with_activated_offsets() {
    init_tracing();
    let (host, mut session) = session_with_mock("main");

    session
        .enable_modern_window_style(Some(offsets(20.0, 5.0, -3.0)))
        .await
        .unwrap();

    assert_eq!(host.emit_resize(), 1);
    drain_listener().await;

    assert_eq!(host.reposition_offsets(), vec![(5.0, -3.0)]);
}

/// Every resize is a self-loop on the active state: three notifications,
/// three repositions, same offsets each time.
#[tokio::test]
async fn repeated_resizes_keep_repositioning() {
    init_tracing();
    let (host, mut session) = session_with_mock("main");

    session
        .enable_rounded_corners(Some(offsets(12.0, 4.0, 0.0)))
        .await
        .unwrap();

    for _ in 0..3 {
        host.emit_resize();
        drain_listener().await;
    }

    assert_eq!(host.reposition_offsets(), vec![(4.0, 0.0); 3]);
}

/// Before any activation there is nothing to reposition: no outbound
/// request is issued.
#[tokio::test]
async fn reposition_before_activation_is_noop() {
    init_tracing();
    let (host, session) = session_with_mock("main");

    session.reposition_traffic_lights().await;

    assert!(host.recorded_calls().is_empty());
}

/// Cleanup clears the cached configuration, so a later reposition is a
/// no-op producing no outbound request.
#[tokio::test]
async fn cleanup_then_reposition_is_noop() {
    init_tracing();
    let (host, mut session) = session_with_mock("main");

    session.enable_modern_window_style(None).await.unwrap();
    session.cleanup();
    let calls_after_cleanup = host.recorded_calls().len();

    session.reposition_traffic_lights().await;

    assert_eq!(host.recorded_calls().len(), calls_after_cleanup);
    assert_eq!(host.live_subscriptions(), 0);
    assert_eq!(session.applied_style(), None);
}

/// Re-activating replaces the subscription: the first handle is cancelled
/// before the second is installed, and exactly one is live afterwards.
#[tokio::test]
async fn reactivation_cancels_previous_subscription_first() {
    init_tracing();
    let (host, mut session) = session_with_mock("main");

    session.enable_modern_window_style(None).await.unwrap();
    session
        .enable_rounded_corners(Some(offsets(12.0, 6.0, 6.0)))
        .await
        .unwrap();

    let journal = host.subscription_journal();
    assert_eq!(journal.len(), 3, "install, cancel, install: {journal:?}");
    let SubscriptionEvent::Installed(first) = journal[0] else {
        panic!("expected first install, got {journal:?}");
    };
    assert_eq!(journal[1], SubscriptionEvent::Cancelled(first));
    assert!(matches!(journal[2], SubscriptionEvent::Installed(id) if id != first));

    assert_eq!(host.live_subscriptions(), 1);
}

/// A failed reposition inside the listener is logged and swallowed; the
/// subscription stays installed and the next notification is handled.
#[tokio::test]
async fn reposition_failure_does_not_tear_down_listener() {
    init_tracing();
    let (host, mut session) = session_with_mock("main");

    session
        .enable_modern_window_style(Some(offsets(12.0, 7.0, 1.0)))
        .await
        .unwrap();

    host.set_fail_reposition(true);
    assert_eq!(host.emit_resize(), 1);
    drain_listener().await;
    assert!(host.reposition_offsets().is_empty());

    // The listener survived the failure and handles the next resize.
    host.set_fail_reposition(false);
    assert_eq!(host.emit_resize(), 1, "subscription must still be live");
    drain_listener().await;
    assert_eq!(host.reposition_offsets(), vec![(7.0, 1.0)]);
}

/// Cleanup is idempotent: calling it on an inactive session does nothing
/// and cancels nothing twice.
#[tokio::test]
async fn cleanup_is_idempotent() {
    init_tracing();
    let (host, mut session) = session_with_mock("main");

    // Safe with nothing active.
    session.cleanup();
    assert!(host.subscription_journal().is_empty());

    session.enable_modern_window_style(None).await.unwrap();
    session.cleanup();
    session.cleanup();

    let cancels = host
        .subscription_journal()
        .into_iter()
        .filter(|event| matches!(event, SubscriptionEvent::Cancelled(_)))
        .count();
    assert_eq!(cancels, 1);
}

/// Dropping the session releases the subscription like an explicit
/// cleanup would: the guard cancels on every exit path.
#[tokio::test]
async fn dropping_session_cancels_subscription() {
    init_tracing();
    let host = Arc::new(MockWindowHost::new());
    {
        let mut session =
            WindowStyleSession::new(host.clone() as Arc<dyn WindowHost>, "main");
        session.enable_modern_window_style(None).await.unwrap();
        assert_eq!(host.live_subscriptions(), 1);
    }

    assert_eq!(host.live_subscriptions(), 0);
    assert!(matches!(
        host.subscription_journal().last(),
        Some(SubscriptionEvent::Cancelled(_))
    ));
}

/// Two sessions on two windows keep independent configurations: a resize
/// repositions each window with its own offsets, and cleaning one up does
/// not disturb the other.
#[tokio::test]
async fn sessions_do_not_interfere_across_windows() {
    init_tracing();
    let host = Arc::new(MockWindowHost::new());
    let mut main = WindowStyleSession::new(host.clone() as Arc<dyn WindowHost>, "main");
    let mut settings = WindowStyleSession::new(host.clone() as Arc<dyn WindowHost>, "settings");

    main.enable_modern_window_style(Some(offsets(12.0, 5.0, 0.0)))
        .await
        .unwrap();
    settings
        .enable_modern_window_style(Some(offsets(12.0, 9.0, 9.0)))
        .await
        .unwrap();

    settings.cleanup();
    assert_eq!(host.live_subscriptions(), 1);

    host.emit_resize();
    drain_listener().await;
    assert_eq!(host.reposition_offsets(), vec![(5.0, 0.0)]);
}
