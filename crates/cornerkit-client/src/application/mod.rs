//! Application layer for the client library.
//!
//! # What lives here?
//!
//! - **`window_host`** – The [`WindowHost`](window_host::WindowHost) port:
//!   the trait describing the command/event surface the host shell
//!   provides. Adapters implementing it live in the infrastructure layer
//!   and are injected at construction time.
//!
//! - **`style_session`** – The activation operations. A
//!   [`WindowStyleSession`](style_session::WindowStyleSession) owns one
//!   window's applied configuration and resize subscription.
//!
//! - **`resize_reactor`** – Subscription lifecycle and the best-effort
//!   reposition path triggered by resize notifications.
//!
//! **Dependency rule**: this layer depends only on `cornerkit_core` and the
//! async runtime. It must not import the infrastructure layer.

pub mod resize_reactor;
pub mod style_session;
pub mod window_host;
