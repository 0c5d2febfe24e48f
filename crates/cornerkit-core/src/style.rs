//! The style configuration record carried on activation calls.
//!
//! Every field is optional at the boundary: callers pass
//! `Option<StyleConfig>` (an absent record resolves every field), and a
//! partial JSON record resolves field-wise through the serde defaults. The
//! field names on the wire are camelCase (`cornerRadius`, `offsetX`,
//! `offsetY`) to match what the host shell expects.
//!
//! # Offset sign convention
//!
//! Offsets move the traffic-light buttons relative to their native
//! position: positive `offset_x` moves them right, positive `offset_y`
//! moves them down.

use serde::{Deserialize, Serialize};

// ── Documented defaults ───────────────────────────────────────────────────────

/// Corner radius in pixels applied when the caller does not specify one.
pub const DEFAULT_CORNER_RADIUS: f64 = 12.0;

/// Horizontal traffic-light offset applied when unspecified.
pub const DEFAULT_OFFSET_X: f64 = 0.0;

/// Vertical traffic-light offset applied when unspecified.
pub const DEFAULT_OFFSET_Y: f64 = 0.0;

fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

fn default_offset_x() -> f64 {
    DEFAULT_OFFSET_X
}

fn default_offset_y() -> f64 {
    DEFAULT_OFFSET_Y
}

// ── Configuration record ──────────────────────────────────────────────────────

/// Style configuration for one activation call.
///
/// Immutable once passed to an activation operation; the session keeps the
/// most recently activated record and reads it (never mutates it) on each
/// resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Corner radius in pixels.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    /// Horizontal traffic-light offset in pixels. Positive = right.
    #[serde(default = "default_offset_x")]
    pub offset_x: f64,
    /// Vertical traffic-light offset in pixels. Positive = down.
    #[serde(default = "default_offset_y")]
    pub offset_y: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
        }
    }
}

impl StyleConfig {
    /// Resolves an optional record the way the activation operations do:
    /// an absent record yields the documented defaults.
    pub fn resolve(config: Option<StyleConfig>) -> StyleConfig {
        config.unwrap_or_default()
    }

    /// The traffic-light offsets as an `(x, y)` pair.
    pub fn offsets(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_record_resolves_to_documented_defaults() {
        let resolved = StyleConfig::resolve(None);
        assert_eq!(resolved.corner_radius, 12.0);
        assert_eq!(resolved.offset_x, 0.0);
        assert_eq!(resolved.offset_y, 0.0);
    }

    #[test]
    fn partial_json_record_resolves_field_wise() {
        // Only the radius is present; the offsets must fall back per field.
        let parsed: StyleConfig = serde_json::from_str(r#"{"cornerRadius": 20.0}"#).unwrap();
        assert_eq!(parsed.corner_radius, 20.0);
        assert_eq!(parsed.offset_x, DEFAULT_OFFSET_X);
        assert_eq!(parsed.offset_y, DEFAULT_OFFSET_Y);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let config = StyleConfig {
            corner_radius: 20.0,
            offset_x: 5.0,
            offset_y: -3.0,
        };
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["cornerRadius"], 20.0);
        assert_eq!(json["offsetX"], 5.0);
        assert_eq!(json["offsetY"], -3.0);
    }
}
