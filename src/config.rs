// Binding options, read from an element's `data-rotator` attribute when present.

use serde::{Deserialize, Serialize};

use crate::error::BindError;

/// Name of the element attribute holding a JSON [`RotatorConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-rotator";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    /// Listen for touchstart / touchmove / touchend.
    pub touch: bool,
    /// Listen for mousedown / mousemove / mouseup.
    pub mouse: bool,
    /// Call `preventDefault` on events the rotator consumed.
    pub prevent_default: bool,
    /// Decimal places in the emitted `rotate(...)` transform.
    pub precision: usize,
    pub transform_origin: String,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            touch: true,
            mouse: true,
            prevent_default: true,
            precision: 2,
            transform_origin: "center center".to_string(),
        }
    }
}

impl RotatorConfig {
    pub fn from_json(raw: &str) -> Result<Self, BindError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional attribute value; missing or blank means defaults.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, BindError> {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_behaviour() {
        let c = RotatorConfig::default();
        assert!(c.touch && c.mouse && c.prevent_default);
        assert_eq!(c.precision, 2);
        assert_eq!(c.transform_origin, "center center");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = RotatorConfig::from_json(r#"{"touch": false, "precision": 0}"#).unwrap();
        assert!(!c.touch);
        assert!(c.mouse);
        assert_eq!(c.precision, 0);
        assert_eq!(c.transform_origin, "center center");
    }

    #[test]
    fn missing_or_blank_attribute_is_default() {
        assert_eq!(RotatorConfig::from_attribute(None).unwrap(), RotatorConfig::default());
        assert_eq!(RotatorConfig::from_attribute(Some("  ")).unwrap(), RotatorConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = RotatorConfig::from_attribute(Some("{touch:")).unwrap_err();
        assert!(matches!(err, BindError::InvalidConfig(_)));
    }

    #[test]
    fn serializes_back_to_json() {
        let c = RotatorConfig {
            transform_origin: "50% 50%".to_string(),
            ..Default::default()
        };
        let raw = serde_json::to_string(&c).unwrap();
        assert_eq!(RotatorConfig::from_json(&raw).unwrap(), c);
    }
}
