//! The typed failure a host call can produce.

use thiserror::Error;

use crate::window::WindowLabel;

/// Error returned by the host windowing layer for an outbound call.
///
/// Activation callers receive this unchanged: the client logs it but does
/// not wrap or translate it, so the caller can decide how to react (for
/// example, the style commands are macOS-only and an unsupported platform
/// surfaces as [`HostError::Unsupported`]).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HostError {
    /// The host executed the command handler and it failed.
    #[error("host rejected `{command}`: {reason}")]
    CommandRejected {
        command: &'static str,
        reason: String,
    },

    /// The addressed window does not exist in the host shell.
    #[error("window `{label}` is not known to the host shell")]
    UnknownWindow { label: WindowLabel },

    /// The host refused to install the resize subscription.
    #[error("resize subscription refused: {0}")]
    SubscriptionRefused(String),

    /// The command is not available on the current platform.
    #[error("`{command}` is not supported on this platform")]
    Unsupported { command: &'static str },
}
