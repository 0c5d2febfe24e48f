//! Infrastructure layer for the client library.
//!
//! Contains the adapters implementing the
//! [`WindowHost`](crate::application::window_host::WindowHost) port.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `cornerkit_core`, but MUST NOT be imported by the application layer.

pub mod host;
