//! Instance configuration loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use softgrip_types::{Attributes, ComponentConfig};

fn default_model() -> String {
    softgrip_driver::CODRIVE.to_string()
}

/// One gripper instance as described by a TOML config file:
///
/// ```toml
/// name = "left_gripper"
///
/// [attributes]
/// d1_pin = "16"
/// d2_pin = "18"
/// d3_pin = "22"
/// board_name = "b1"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceConfig {
    pub name: String,
    /// Model triplet; defaults to the codrive driver.
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub attributes: toml::Table,
}

impl InstanceConfig {
    /// Read and parse an instance config file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Built-in demo instance used when no config file is given.
    pub fn demo() -> Self {
        Self {
            name: "demo_gripper".to_string(),
            model: default_model(),
            attributes: toml::toml! {
                d1_pin = "16"
                d2_pin = "18"
                d3_pin = "22"
                board_name = "b1"
            },
        }
    }

    /// Convert into the generic component config the driver consumes.
    pub fn to_component_config(&self) -> Result<ComponentConfig, serde_json::Error> {
        let attributes: Attributes =
            serde_json::to_value(&self.attributes).and_then(serde_json::from_value)?;
        Ok(ComponentConfig {
            name: self.name.clone(),
            model: self.model.clone(),
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgrip_driver::Codrive;
    use softgrip_hal::Component;

    #[test]
    fn loads_instance_from_toml_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("gripper.toml");
        fs::write(
            &path,
            r#"
name = "left_gripper"

[attributes]
d1_pin = "16"
d2_pin = "18"
d3_pin = "22"
board_name = "b1"
"#,
        )?;

        let instance = InstanceConfig::load(&path)?;
        assert_eq!(instance.name, "left_gripper");
        assert_eq!(instance.model, "softgrip:soft-robotics:codrive");

        let config = instance.to_component_config()?;
        assert_eq!(config.attributes.get_str("board_name"), Some("b1"));
        Ok(())
    }

    #[test]
    fn demo_instance_passes_driver_validation() {
        let config = InstanceConfig::demo().to_component_config().unwrap();
        let deps = Codrive::validate_config(&config).unwrap();
        assert_eq!(deps.required, vec!["b1".to_string()]);
    }
}
