//! Mock host shell for unit and integration testing.
//!
//! # Why a mock host?
//!
//! The real adapter talks to the desktop-shell runtime, which only exists
//! inside a running application with an actual window. The mock replaces
//! every shell call with in-memory recording, so tests can assert exactly
//! which commands were issued, with which parameters, and in which order,
//! including the subscription lifecycle (every install and every cancel,
//! journalled in call order).
//!
//! # Usage in tests
//!
//! ```ignore
//! let host = Arc::new(MockWindowHost::new());
//! let mut session = WindowStyleSession::new(Arc::clone(&host) as Arc<dyn WindowHost>, "main");
//!
//! session.enable_modern_window_style(None).await.unwrap();
//! host.emit_resize();
//!
//! assert_eq!(host.recorded_calls().len(), 2); // activation + reposition
//! ```
//!
//! # Failure switches
//!
//! Three independent switches simulate host failures per command class:
//! style activation, reposition, and subscription setup. Each is an
//! `AtomicBool` so it can be flipped mid-test through the `Arc`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cornerkit_core::{commands, HostError, SubscriptionId, WindowLabel};
use tokio::sync::mpsc;

use crate::application::window_host::{HostSubscription, ResizeEvents, WindowHost};

// ── Records ───────────────────────────────────────────────────────────────────

/// One outbound command as the mock host received it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    EnableRoundedCorners {
        window: WindowLabel,
        offset_x: f64,
        offset_y: f64,
    },
    EnableModernWindowStyle {
        window: WindowLabel,
        corner_radius: f64,
        offset_x: f64,
        offset_y: f64,
    },
    RepositionTrafficLights {
        window: WindowLabel,
        offset_x: f64,
        offset_y: f64,
    },
}

/// One subscription lifecycle transition, journalled in the order the host
/// observed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionEvent {
    Installed(SubscriptionId),
    Cancelled(SubscriptionId),
}

/// Shared between the mock and the handles it mints, so a handle can
/// journal its own cancellation after the mock reference is gone.
#[derive(Default)]
struct SubscriptionRegistry {
    journal: Mutex<Vec<SubscriptionEvent>>,
    senders: Mutex<HashMap<SubscriptionId, mpsc::UnboundedSender<()>>>,
}

// ── Mock host ─────────────────────────────────────────────────────────────────

/// A host shell that records all calls without touching any real window.
#[derive(Default)]
pub struct MockWindowHost {
    calls: Mutex<Vec<RecordedCall>>,
    registry: Arc<SubscriptionRegistry>,
    fail_style_commands: AtomicBool,
    fail_reposition: AtomicBool,
    fail_subscribe: AtomicBool,
}

impl MockWindowHost {
    /// Creates a mock with empty records and all failure switches off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in call order.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.lock(&self.calls).clone()
    }

    /// Every reposition received so far, as `(offset_x, offset_y)` pairs.
    pub fn reposition_offsets(&self) -> Vec<(f64, f64)> {
        self.lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                RecordedCall::RepositionTrafficLights {
                    offset_x, offset_y, ..
                } => Some((*offset_x, *offset_y)),
                _ => None,
            })
            .collect()
    }

    /// The subscription lifecycle journal, in observation order.
    pub fn subscription_journal(&self) -> Vec<SubscriptionEvent> {
        self.lock(&self.registry.journal).clone()
    }

    /// Number of subscriptions installed and not yet cancelled.
    pub fn live_subscriptions(&self) -> usize {
        self.lock(&self.registry.senders).len()
    }

    /// Delivers one resize notification to every live subscription.
    /// Returns how many subscriptions were notified.
    pub fn emit_resize(&self) -> usize {
        let senders = self.lock(&self.registry.senders);
        let mut notified = 0;
        for sender in senders.values() {
            if sender.send(()).is_ok() {
                notified += 1;
            }
        }
        notified
    }

    /// When set, both style activation commands fail with
    /// [`HostError::CommandRejected`].
    pub fn set_fail_style_commands(&self, fail: bool) {
        self.fail_style_commands.store(fail, Ordering::SeqCst);
    }

    /// When set, reposition commands fail with
    /// [`HostError::CommandRejected`].
    pub fn set_fail_reposition(&self, fail: bool) {
        self.fail_reposition.store(fail, Ordering::SeqCst);
    }

    /// When set, subscription setup fails with
    /// [`HostError::SubscriptionRefused`].
    pub fn set_fail_subscribe(&self, fail: bool) {
        self.fail_subscribe.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: RecordedCall) {
        self.lock(&self.calls).push(call);
    }

    fn lock<'a, T>(&self, mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl WindowHost for MockWindowHost {
    async fn enable_rounded_corners(
        &self,
        window: &WindowLabel,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), HostError> {
        if self.fail_style_commands.load(Ordering::SeqCst) {
            return Err(HostError::CommandRejected {
                command: commands::ENABLE_ROUNDED_CORNERS,
                reason: "simulated failure".into(),
            });
        }
        self.record(RecordedCall::EnableRoundedCorners {
            window: window.clone(),
            offset_x,
            offset_y,
        });
        Ok(())
    }

    async fn enable_modern_window_style(
        &self,
        window: &WindowLabel,
        corner_radius: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), HostError> {
        if self.fail_style_commands.load(Ordering::SeqCst) {
            return Err(HostError::CommandRejected {
                command: commands::ENABLE_MODERN_WINDOW_STYLE,
                reason: "simulated failure".into(),
            });
        }
        self.record(RecordedCall::EnableModernWindowStyle {
            window: window.clone(),
            corner_radius,
            offset_x,
            offset_y,
        });
        Ok(())
    }

    async fn reposition_traffic_lights(
        &self,
        window: &WindowLabel,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), HostError> {
        if self.fail_reposition.load(Ordering::SeqCst) {
            return Err(HostError::CommandRejected {
                command: commands::REPOSITION_TRAFFIC_LIGHTS,
                reason: "simulated failure".into(),
            });
        }
        self.record(RecordedCall::RepositionTrafficLights {
            window: window.clone(),
            offset_x,
            offset_y,
        });
        Ok(())
    }

    async fn subscribe_resized(&self, _window: &WindowLabel) -> Result<ResizeEvents, HostError> {
        if self.fail_subscribe.load(Ordering::SeqCst) {
            return Err(HostError::SubscriptionRefused("simulated failure".into()));
        }

        let id = SubscriptionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock(&self.registry.senders).insert(id, tx);
        self.lock(&self.registry.journal)
            .push(SubscriptionEvent::Installed(id));

        Ok(ResizeEvents {
            notifications: rx,
            subscription: Box::new(MockSubscription {
                id,
                registry: Arc::clone(&self.registry),
            }),
        })
    }
}

// ── Subscription handle ───────────────────────────────────────────────────────

/// Handle minted by [`MockWindowHost::subscribe_resized`]. Cancelling drops
/// the sender (closing the notification channel) and journals the
/// cancellation.
struct MockSubscription {
    id: SubscriptionId,
    registry: Arc<SubscriptionRegistry>,
}

impl HostSubscription for MockSubscription {
    fn id(&self) -> SubscriptionId {
        self.id
    }

    fn cancel(self: Box<Self>) {
        self.registry
            .senders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.id);
        self.registry
            .journal
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(SubscriptionEvent::Cancelled(self.id));
    }
}
