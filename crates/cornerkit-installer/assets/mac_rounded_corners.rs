//! macOS rounded corners and traffic-light repositioning commands.
//!
//! Installed by cornerkit-installer. Uses only public AppKit APIs, so App
//! Store review is unaffected. All three commands are macOS-only and
//! return an error on other platforms.
//!
//! Register the handlers in `lib.rs`:
//!
//! ```ignore
//! .invoke_handler(tauri::generate_handler![
//!     plugins::mac_rounded_corners::enable_rounded_corners,
//!     plugins::mac_rounded_corners::enable_modern_window_style,
//!     plugins::mac_rounded_corners::reposition_traffic_lights,
//! ])
//! ```

#[cfg(target_os = "macos")]
use cocoa::appkit::{NSView, NSWindow, NSWindowButton, NSWindowStyleMask};
#[cfg(target_os = "macos")]
use cocoa::base::{id, nil, YES};
#[cfg(target_os = "macos")]
use cocoa::foundation::NSPoint;
#[cfg(target_os = "macos")]
use objc::{msg_send, sel, sel_impl};

/// Rounds the window corners and shifts the traffic lights.
#[tauri::command]
pub async fn enable_rounded_corners(
    window: tauri::WebviewWindow,
    offset_x: f64,
    offset_y: f64,
) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        let ns_window = ns_window(&window)?;
        unsafe {
            extend_content_into_titlebar(ns_window);
            shift_traffic_lights(ns_window, offset_x, offset_y);
        }
        Ok(())
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = (window, offset_x, offset_y);
        Err("enable_rounded_corners is only supported on macOS".into())
    }
}

/// Rounds the corners with an explicit radius, keeps the window shadow,
/// and shifts the traffic lights. Recommended for the best appearance.
#[tauri::command]
pub async fn enable_modern_window_style(
    window: tauri::WebviewWindow,
    corner_radius: f64,
    offset_x: f64,
    offset_y: f64,
) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        let ns_window = ns_window(&window)?;
        unsafe {
            extend_content_into_titlebar(ns_window);
            round_content_view(ns_window, corner_radius);
            shift_traffic_lights(ns_window, offset_x, offset_y);
        }
        Ok(())
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = (window, corner_radius, offset_x, offset_y);
        Err("enable_modern_window_style is only supported on macOS".into())
    }
}

/// Re-applies the traffic-light offsets. AppKit resets the button frames
/// during layout, so call this after every resize.
#[tauri::command]
pub async fn reposition_traffic_lights(
    window: tauri::WebviewWindow,
    offset_x: f64,
    offset_y: f64,
) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        let ns_window = ns_window(&window)?;
        unsafe {
            shift_traffic_lights(ns_window, offset_x, offset_y);
        }
        Ok(())
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = (window, offset_x, offset_y);
        Err("reposition_traffic_lights is only supported on macOS".into())
    }
}

#[cfg(target_os = "macos")]
fn ns_window(window: &tauri::WebviewWindow) -> Result<id, String> {
    window
        .ns_window()
        .map(|ptr| ptr as id)
        .map_err(|err| format!("failed to resolve NSWindow: {err}"))
}

/// Transparent titlebar with the content view extended underneath it.
#[cfg(target_os = "macos")]
unsafe fn extend_content_into_titlebar(ns_window: id) {
    let mut style_mask = ns_window.styleMask();
    style_mask |= NSWindowStyleMask::NSFullSizeContentViewWindowMask;
    ns_window.setStyleMask_(style_mask);
    ns_window.setTitlebarAppearsTransparent_(YES);
}

/// Rounds the content view's backing layer and refreshes the shadow.
#[cfg(target_os = "macos")]
unsafe fn round_content_view(ns_window: id, corner_radius: f64) {
    let content_view: id = ns_window.contentView();
    if content_view == nil {
        return;
    }
    let _: () = msg_send![content_view, setWantsLayer: YES];
    let layer: id = msg_send![content_view, layer];
    if layer != nil {
        let _: () = msg_send![layer, setCornerRadius: corner_radius];
        let _: () = msg_send![layer, setMasksToBounds: YES];
    }
    ns_window.setHasShadow_(YES);
    ns_window.invalidateShadow();
}

/// Moves the three standard window buttons by the configured offsets.
/// AppKit's Y axis grows upward, so a positive "down" offset subtracts.
#[cfg(target_os = "macos")]
unsafe fn shift_traffic_lights(ns_window: id, offset_x: f64, offset_y: f64) {
    let buttons = [
        NSWindowButton::NSWindowCloseButton,
        NSWindowButton::NSWindowMiniaturizeButton,
        NSWindowButton::NSWindowZoomButton,
    ];
    for button in buttons {
        let button: id = ns_window.standardWindowButton_(button);
        if button == nil {
            continue;
        }
        let frame = NSView::frame(button);
        button.setFrameOrigin(NSPoint::new(
            frame.origin.x + offset_x,
            frame.origin.y - offset_y,
        ));
    }
}
