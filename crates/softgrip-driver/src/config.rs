//! Typed configuration extracted from a component's attribute map.

use softgrip_types::{ComponentConfig, GripError};

/// Attribute naming the release ("open") actuator pin.
pub const ATTR_OPEN_PIN: &str = "d1_pin";
/// Attribute naming the grab actuator pin.
pub const ATTR_GRAB_PIN: &str = "d2_pin";
/// Attribute naming the shared vacuum-generator ("common") pin.
pub const ATTR_COM_PIN: &str = "d3_pin";
/// Attribute naming the board dependency that provides the pins.
pub const ATTR_BOARD_NAME: &str = "board_name";

/// Resolved gripper settings: three pin names and the board they live on.
///
/// Rebuilt wholesale from the raw attributes on every reconfiguration;
/// there is no partial mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GripperConfig {
    pub open_pin: String,
    pub grab_pin: String,
    pub com_pin: String,
    pub board_name: String,
}

impl GripperConfig {
    /// Extract the required attributes from `config`.
    ///
    /// Keys are checked in a fixed order – [`ATTR_OPEN_PIN`],
    /// [`ATTR_GRAB_PIN`], [`ATTR_COM_PIN`], [`ATTR_BOARD_NAME`] – and the
    /// first missing or malformed one fails the whole extraction.  No board
    /// or pin is touched here.
    ///
    /// # Errors
    ///
    /// [`GripError::MissingAttribute`] / [`GripError::InvalidAttribute`]
    /// naming the offending key.
    pub fn from_config(config: &ComponentConfig) -> Result<Self, GripError> {
        let attrs = &config.attributes;
        let open_pin = attrs.require_str(ATTR_OPEN_PIN)?.to_string();
        let grab_pin = attrs.require_str(ATTR_GRAB_PIN)?.to_string();
        let com_pin = attrs.require_str(ATTR_COM_PIN)?.to_string();
        let board_name = attrs.require_str(ATTR_BOARD_NAME)?.to_string();
        Ok(Self {
            open_pin,
            grab_pin,
            com_pin,
            board_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgrip_types::Attributes;

    fn full_config() -> ComponentConfig {
        let mut attributes = Attributes::new();
        attributes.insert_str(ATTR_OPEN_PIN, "16");
        attributes.insert_str(ATTR_GRAB_PIN, "18");
        attributes.insert_str(ATTR_COM_PIN, "22");
        attributes.insert_str(ATTR_BOARD_NAME, "b1");
        ComponentConfig {
            name: "gripper".to_string(),
            model: "softgrip:soft-robotics:codrive".to_string(),
            attributes,
        }
    }

    #[test]
    fn extracts_all_four_attributes() {
        let config = GripperConfig::from_config(&full_config()).unwrap();
        assert_eq!(
            config,
            GripperConfig {
                open_pin: "16".to_string(),
                grab_pin: "18".to_string(),
                com_pin: "22".to_string(),
                board_name: "b1".to_string(),
            }
        );
    }

    #[test]
    fn each_missing_key_is_named() {
        for key in [ATTR_OPEN_PIN, ATTR_GRAB_PIN, ATTR_COM_PIN, ATTR_BOARD_NAME] {
            let mut config = full_config();
            config.attributes.0.remove(key);
            let err = GripperConfig::from_config(&config).unwrap_err();
            assert!(
                matches!(err, GripError::MissingAttribute(ref k) if k == key),
                "expected missing `{key}`, got: {err}"
            );
        }
    }

    #[test]
    fn first_missing_key_wins() {
        // With both d2_pin and board_name absent, the earlier key in the
        // check order is the one reported.
        let mut config = full_config();
        config.attributes.0.remove(ATTR_GRAB_PIN);
        config.attributes.0.remove(ATTR_BOARD_NAME);

        let err = GripperConfig::from_config(&config).unwrap_err();
        assert!(matches!(err, GripError::MissingAttribute(ref k) if k == ATTR_GRAB_PIN));
    }

    #[test]
    fn empty_pin_name_is_rejected() {
        let mut config = full_config();
        config.attributes.insert_str(ATTR_COM_PIN, "");
        let err = GripperConfig::from_config(&config).unwrap_err();
        assert!(matches!(err, GripError::InvalidAttribute { ref key, .. } if key == ATTR_COM_PIN));
    }

    #[test]
    fn non_string_pin_is_rejected() {
        let mut config = full_config();
        config
            .attributes
            .0
            .insert(ATTR_OPEN_PIN.to_string(), serde_json::json!(16));
        let err = GripperConfig::from_config(&config).unwrap_err();
        assert!(matches!(err, GripError::InvalidAttribute { ref key, .. } if key == ATTR_OPEN_PIN));
    }
}
