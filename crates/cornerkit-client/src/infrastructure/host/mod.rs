//! Host shell adapters.
//!
//! - **`mock`** – Records every outbound command and the full subscription
//!   lifecycle, and can emit synthetic resize notifications. Used by this
//!   repo's tests and usable from host-application test code.
//!
//! - **`macos`** – The macOS adapter, selected at compile time with
//!   `#[cfg(target_os = "macos")]`. The style commands are macOS-only;
//!   there is no adapter for other platforms, where a host returns
//!   [`HostError::Unsupported`](cornerkit_core::HostError::Unsupported).

pub mod mock;

#[cfg(target_os = "macos")]
pub mod macos;
