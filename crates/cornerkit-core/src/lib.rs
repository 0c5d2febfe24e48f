//! # cornerkit-core
//!
//! Shared library for CornerKit containing the style configuration record,
//! window identity, host command names, subscription identity, and the host
//! error type.
//!
//! This crate is used by both the client library and the installer.
//! It has zero dependencies on OS APIs, UI frameworks, or async runtimes.
//!
//! # What is CornerKit?
//!
//! CornerKit decorates a desktop-shell window with rounded corners and
//! repositioned title-bar controls (the macOS "traffic lights": close,
//! minimize, maximize). It does not draw anything itself; the surrounding
//! desktop shell owns the actual window and exposes command/event
//! primitives. CornerKit is the thin, well-behaved client of that API:
//!
//! - **`style`** – The configuration record carried on every activation
//!   call: corner radius and the traffic-light offsets, with documented
//!   defaults for absent fields.
//!
//! - **`window`** – The label identifying one shell window. Every outbound
//!   command names the window it applies to.
//!
//! - **`commands`** – The names of the three remote calls the client issues
//!   to the shell. Published here so the client adapters, the installer's
//!   registration snippet, and the native module cannot drift apart.
//!
//! - **`subscription`** – Identity for the resize registrations the shell
//!   hands out.
//!
//! - **`error`** – The typed failure a host call can produce.

pub mod commands;
pub mod error;
pub mod style;
pub mod subscription;
pub mod window;

// Re-export the most-used types at the crate root so callers can write
// `cornerkit_core::StyleConfig` instead of `cornerkit_core::style::StyleConfig`.
pub use error::HostError;
pub use style::{StyleConfig, DEFAULT_CORNER_RADIUS, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y};
pub use subscription::SubscriptionId;
pub use window::WindowLabel;
