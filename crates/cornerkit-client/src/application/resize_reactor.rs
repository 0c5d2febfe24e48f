//! Resize subscription lifecycle and the reposition path it drives.
//!
//! The shell resets the traffic-light frame whenever it relayouts a window,
//! so the offset correction has to be reapplied after every resize. This
//! module owns that loop:
//!
//! ```text
//! install_resize_listener()
//!   └─ host.subscribe_resized()          -- one registration per session
//!   └─ spawned listener task
//!        └─ per notification: reposition_best_effort()
//!             └─ host.reposition_traffic_lights(cached offsets)
//! ```
//!
//! Everything here is best-effort by design: a failed subscription or a
//! failed reposition is logged and swallowed, because it happens outside
//! the caller's direct invocation and a cosmetic correction must never
//! crash the application.

use std::sync::{Arc, Mutex};

use cornerkit_core::{StyleConfig, WindowLabel};
use tokio::task::JoinHandle;
use tracing::warn;

use super::window_host::{HostSubscription, ResizeEvents, WindowHost};

/// Owns one live resize registration and the task draining it.
///
/// Dropping the guard cancels the host-side registration and stops the
/// listener task, so teardown is guaranteed whether the guard falls to
/// explicit cleanup, session drop, or replacement by a newer subscription.
pub struct ResizeGuard {
    subscription: Option<Box<dyn HostSubscription>>,
    listener: JoinHandle<()>,
}

impl Drop for ResizeGuard {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        // Cancelling closes the notification channel, which ends the
        // listener loop on its own; aborting also covers a host whose
        // cancel does not drop the sender promptly.
        self.listener.abort();
    }
}

/// Requests a resize subscription and spawns the listener task.
///
/// Returns `None` when the host refuses the registration: the failure is
/// logged and swallowed, since this runs after the activation call has
/// already completed and must not fail it retroactively.
pub async fn install_resize_listener(
    host: &Arc<dyn WindowHost>,
    window: &WindowLabel,
    applied: &Arc<Mutex<Option<StyleConfig>>>,
) -> Option<ResizeGuard> {
    let ResizeEvents {
        mut notifications,
        subscription,
    } = match host.subscribe_resized(window).await {
        Ok(events) => events,
        Err(err) => {
            warn!(
                window = %window,
                error = %err,
                "resize subscription failed; traffic lights will not track resizes"
            );
            return None;
        }
    };

    let listener = {
        let host = Arc::clone(host);
        let window = window.clone();
        let applied = Arc::clone(applied);
        tokio::spawn(async move {
            while notifications.recv().await.is_some() {
                reposition_best_effort(host.as_ref(), &window, &applied).await;
            }
        })
    };

    Some(ResizeGuard {
        subscription: Some(subscription),
        listener,
    })
}

/// Issues one reposition call with the cached offsets.
///
/// No-op when no configuration is currently applied. Failures are logged,
/// never raised, and do not stop later notifications from being attempted.
pub async fn reposition_best_effort(
    host: &dyn WindowHost,
    window: &WindowLabel,
    applied: &Mutex<Option<StyleConfig>>,
) {
    // Copy the offsets out so the lock is never held across an await.
    let offsets = applied
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .as_ref()
        .map(StyleConfig::offsets);

    let Some((offset_x, offset_y)) = offsets else {
        return;
    };

    if let Err(err) = host
        .reposition_traffic_lights(window, offset_x, offset_y)
        .await
    {
        warn!(
            window = %window,
            error = %err,
            "repositioning traffic lights failed"
        );
    }
}
