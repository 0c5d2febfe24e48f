//! The style activation operations, bound to one window.
//!
//! The "last applied configuration" is owned by a per-window session, not
//! by ambient module state, so two decorated windows cannot interfere.
//! Activation and cleanup take `&mut self`, which makes two activations
//! racing each other on one session unrepresentable: the borrow checker
//! serializes them.
//!
//! # Session lifecycle
//!
//! Two states. **Inactive**: no configuration, no subscription.
//! **Active**: configuration applied, resize subscription installed.
//! Activation moves the session to Active (replacing any prior
//! subscription); [`cleanup`](WindowStyleSession::cleanup) or dropping the
//! session moves it back. Resize notifications do not change state.
//!
//! A failed activation is the one wrinkle: the configuration stays applied
//! (no rollback) while no new subscription is installed.

use std::sync::{Arc, Mutex};

use cornerkit_core::{HostError, StyleConfig, WindowLabel};
use tracing::{debug, error};

use super::resize_reactor::{install_resize_listener, reposition_best_effort, ResizeGuard};
use super::window_host::WindowHost;

/// One window's styling session against the host shell.
pub struct WindowStyleSession {
    host: Arc<dyn WindowHost>,
    window: WindowLabel,
    /// Most recently activated configuration, shared with the listener
    /// task. Set on activation, cleared on cleanup, read by reposition.
    applied: Arc<Mutex<Option<StyleConfig>>>,
    resize: Option<ResizeGuard>,
}

impl WindowStyleSession {
    /// Creates an inactive session for `window`.
    ///
    /// Must be called from within the shell's async runtime; activation
    /// spawns the resize listener task onto it.
    pub fn new(host: Arc<dyn WindowHost>, window: impl Into<WindowLabel>) -> Self {
        Self {
            host,
            window: window.into(),
            applied: Arc::new(Mutex::new(None)),
            resize: None,
        }
    }

    /// The window this session decorates.
    pub fn window(&self) -> &WindowLabel {
        &self.window
    }

    /// The configuration currently applied, if any.
    pub fn applied_style(&self) -> Option<StyleConfig> {
        *self.lock_applied()
    }

    /// Whether a resize subscription is currently installed.
    pub fn is_active(&self) -> bool {
        self.resize.is_some()
    }

    /// Enables rounded corners for the window.
    ///
    /// An absent `config` resolves every field to its documented default.
    /// The resolved configuration is stored first, then forwarded to the
    /// host (this command carries the offsets only); on success the resize
    /// subscription is installed, replacing any prior one.
    ///
    /// # Errors
    ///
    /// A host failure is logged and returned unchanged. The stored
    /// configuration is not rolled back.
    pub async fn enable_rounded_corners(
        &mut self,
        config: Option<StyleConfig>,
    ) -> Result<(), HostError> {
        let style = StyleConfig::resolve(config);
        *self.lock_applied() = Some(style);

        if let Err(err) = self
            .host
            .enable_rounded_corners(&self.window, style.offset_x, style.offset_y)
            .await
        {
            error!(window = %self.window, error = %err, "enabling rounded corners failed");
            return Err(err);
        }

        debug!(window = %self.window, offset_x = style.offset_x, offset_y = style.offset_y,
               "rounded corners enabled");
        self.reinstall_resize_listener().await;
        Ok(())
    }

    /// Enables the modern window style: rounded corners with the configured
    /// radius, shadow, and shifted traffic lights. Otherwise behaves like
    /// [`enable_rounded_corners`](Self::enable_rounded_corners).
    ///
    /// # Errors
    ///
    /// A host failure is logged and returned unchanged. The stored
    /// configuration is not rolled back.
    pub async fn enable_modern_window_style(
        &mut self,
        config: Option<StyleConfig>,
    ) -> Result<(), HostError> {
        let style = StyleConfig::resolve(config);
        *self.lock_applied() = Some(style);

        if let Err(err) = self
            .host
            .enable_modern_window_style(
                &self.window,
                style.corner_radius,
                style.offset_x,
                style.offset_y,
            )
            .await
        {
            error!(window = %self.window, error = %err, "enabling modern window style failed");
            return Err(err);
        }

        debug!(window = %self.window, corner_radius = style.corner_radius,
               "modern window style enabled");
        self.reinstall_resize_listener().await;
        Ok(())
    }

    /// Issues one reposition call with the most recently activated offsets.
    ///
    /// No-op before the first activation and after cleanup. Failures are
    /// logged, never raised.
    pub async fn reposition_traffic_lights(&self) {
        reposition_best_effort(self.host.as_ref(), &self.window, &self.applied).await;
    }

    /// Cancels the resize subscription, if any, and clears the applied
    /// configuration. Idempotent; safe to call when nothing is active.
    ///
    /// Dropping the session performs the same teardown.
    pub fn cleanup(&mut self) {
        self.resize = None;
        *self.lock_applied() = None;
    }

    /// Replaces the resize subscription. The previous guard is dropped
    /// first, so its host-side registration is cancelled before the new
    /// one is requested.
    async fn reinstall_resize_listener(&mut self) {
        self.resize = None;
        self.resize = install_resize_listener(&self.host, &self.window, &self.applied).await;
    }

    fn lock_applied(&self) -> std::sync::MutexGuard<'_, Option<StyleConfig>> {
        self.applied
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
