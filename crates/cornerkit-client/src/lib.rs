//! cornerkit-client library entry point.
//!
//! Re-exports the public surface so that integration tests in `tests/` and
//! host applications share the same module tree.
//!
//! # What does the client do?
//!
//! The client is the piece that runs inside the desktop application and
//! talks to the surrounding shell runtime (the "host windowing layer"). It
//! never touches a native window handle itself; it issues three named
//! commands (enable rounded corners, enable the modern window style,
//! reposition the traffic lights) and listens for one event, "window
//! resized".
//!
//! The flow for a host application:
//!
//! 1. Construct a [`WindowStyleSession`] for the window to decorate,
//!    passing the shell adapter (`Arc<dyn WindowHost>`).
//! 2. Call one of the activation operations. The resolved configuration is
//!    forwarded to the shell and a resize subscription is installed.
//! 3. On every resize notification the session re-issues the reposition
//!    command with the offsets it last activated with; the shell resets
//!    the traffic-light frame during layout, so the correction has to be
//!    reapplied each time.
//! 4. Call [`WindowStyleSession::cleanup`] to tear the subscription down,
//!    or just drop the session; both release the subscription.
//!
//! [`WindowStyleSession`]: application::style_session::WindowStyleSession
//! [`WindowHost`]: application::window_host::WindowHost

/// Application layer: the style session, the resize reactor, and the host
/// port they are written against.
pub mod application;

/// Infrastructure layer: host shell adapters (recording mock, macOS).
pub mod infrastructure;

pub use application::style_session::WindowStyleSession;
pub use application::window_host::{HostSubscription, ResizeEvents, WindowHost};
#[cfg(target_os = "macos")]
pub use infrastructure::host::macos::MacosWindowHost;
pub use infrastructure::host::mock::{MockWindowHost, RecordedCall, SubscriptionEvent};
