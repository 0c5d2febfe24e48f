//! Names of the remote calls the client issues to the host shell.
//!
//! The same names appear in three places that must never drift: the client
//! adapters issuing the calls, the installer's handler-registration
//! snippet, and the native command module the installer copies into the
//! host project. They are defined once, here.

/// Applies rounded corners to a window. Parameters: `offsetX`, `offsetY`.
pub const ENABLE_ROUNDED_CORNERS: &str = "enable_rounded_corners";

/// Applies the full modern window style (rounded corners plus shadow).
/// Parameters: `cornerRadius`, `offsetX`, `offsetY`.
pub const ENABLE_MODERN_WINDOW_STYLE: &str = "enable_modern_window_style";

/// Moves the traffic-light buttons. Parameters: `offsetX`, `offsetY`.
pub const REPOSITION_TRAFFIC_LIGHTS: &str = "reposition_traffic_lights";

/// Every command the host must register a handler for, in the order the
/// installer lists them.
pub const HOST_COMMANDS: [&str; 3] = [
    ENABLE_ROUNDED_CORNERS,
    ENABLE_MODERN_WINDOW_STYLE,
    REPOSITION_TRAFFIC_LIGHTS,
];

/// The event the client subscribes to. Carries no payload; the notification
/// itself is the trigger.
pub const WINDOW_RESIZED_EVENT: &str = "window_resized";
