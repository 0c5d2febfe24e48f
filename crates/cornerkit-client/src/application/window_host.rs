//! The host windowing layer port.
//!
//! The host shell owns the actual window; this trait is the seam through
//! which the client reaches it. Each method is one named remote call
//! carrying the window label plus numeric parameters. All calls are
//! asynchronous, awaited sequentially, and attempted exactly once: no
//! retries, no backoff, no timeouts.
//!
//! Implementations live in the infrastructure layer:
//! [`MockWindowHost`](crate::infrastructure::host::mock::MockWindowHost)
//! records calls for tests, and the macOS adapter forwards them to the
//! shell runtime.

use async_trait::async_trait;
use cornerkit_core::{HostError, SubscriptionId, WindowLabel};
use tokio::sync::mpsc;

/// The command/event surface the host shell provides.
#[async_trait]
pub trait WindowHost: Send + Sync {
    /// Applies rounded corners to `window`, shifting the traffic lights by
    /// the given offsets.
    async fn enable_rounded_corners(
        &self,
        window: &WindowLabel,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), HostError>;

    /// Applies the full modern window style: rounded corners with the given
    /// radius, shadow, and shifted traffic lights.
    async fn enable_modern_window_style(
        &self,
        window: &WindowLabel,
        corner_radius: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), HostError>;

    /// Moves the traffic-light buttons by the given offsets. Issued after
    /// every resize because the shell resets the button frame during layout.
    async fn reposition_traffic_lights(
        &self,
        window: &WindowLabel,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), HostError>;

    /// Installs a "window resized" subscription for `window`.
    ///
    /// The notification carries no payload; its arrival is the trigger.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::SubscriptionRefused`] (or another host failure)
    /// when the event registration cannot be installed. Callers treat this
    /// as best-effort: the failure is logged and swallowed.
    async fn subscribe_resized(&self, window: &WindowLabel) -> Result<ResizeEvents, HostError>;
}

/// An active resize registration handed out by a [`WindowHost`].
///
/// Cancellable exactly once: `cancel` consumes the box, so a handle cannot
/// be cancelled twice by construction.
pub trait HostSubscription: Send {
    /// The id the host minted for this registration.
    fn id(&self) -> SubscriptionId;

    /// Tears the registration down on the host side.
    fn cancel(self: Box<Self>);
}

/// What a successful [`WindowHost::subscribe_resized`] returns: the stream
/// of notifications plus the cancellation capability for the registration
/// that produces them.
pub struct ResizeEvents {
    /// One `()` per resize notification. Closed when the subscription is
    /// cancelled on the host side.
    pub notifications: mpsc::UnboundedReceiver<()>,
    /// Opaque handle that cancels the registration.
    pub subscription: Box<dyn HostSubscription>,
}
