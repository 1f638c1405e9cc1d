use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Generic string-keyed attribute mapping carried by every component config.
///
/// The host hands drivers their per-instance settings as this untyped bag;
/// drivers pull out the keys they understand with [`Attributes::require_str`]
/// and friends, converting absent or malformed values into typed
/// [`GripError`] failures before any hardware is touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Attributes(pub serde_json::Map<String, Value>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup of an attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Lookup an attribute expected to be a string; `None` if absent or not
    /// a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Lookup a required string attribute.
    ///
    /// # Errors
    ///
    /// * [`GripError::MissingAttribute`] – the key is absent.
    /// * [`GripError::InvalidAttribute`] – the value is not a string, or is
    ///   an empty string.
    pub fn require_str(&self, key: &str) -> Result<&str, GripError> {
        match self.0.get(key) {
            None => Err(GripError::MissingAttribute(key.to_string())),
            Some(Value::String(s)) if s.is_empty() => Err(GripError::InvalidAttribute {
                key: key.to_string(),
                reason: "must not be empty".to_string(),
            }),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(GripError::InvalidAttribute {
                key: key.to_string(),
                reason: format!("expected a string, got {other}"),
            }),
        }
    }

    /// Insert a string attribute, replacing any previous value.
    pub fn insert_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }
}

impl FromIterator<(String, Value)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-instance configuration block the host supplies to a driver's
/// `validate_config`, `new`, and `reconfigure` lifecycle calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentConfig {
    /// Instance name, e.g. `"left_gripper"`.
    pub name: String,
    /// Colon-joined model triplet selecting the driver, e.g.
    /// `"softgrip:soft-robotics:codrive"`.
    pub model: String,
    /// Driver-specific settings.
    #[serde(default)]
    pub attributes: Attributes,
}

/// Fixed model identifier namespacing a driver within the host's component
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Model {
    pub namespace: &'static str,
    pub family: &'static str,
    pub name: &'static str,
}

impl Model {
    /// Build a model triplet. `const` so drivers can expose theirs as an
    /// associated constant.
    pub const fn new(namespace: &'static str, family: &'static str, name: &'static str) -> Self {
        Self {
            namespace,
            family,
            name,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.family, self.name)
    }
}

/// Result of a holding-status query on a gripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HoldingStatus {
    pub is_holding_something: bool,
}

/// File format of a kinematics description returned by `get_kinematics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KinematicsFileFormat {
    Unspecified,
    Sva,
    Urdf,
}

/// Pose of a geometry's centre relative to the component's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pose {
    pub x_mm: f64,
    pub y_mm: f64,
    pub z_mm: f64,
    pub theta_rad: f64,
}

/// Shape of a reported geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "shape", content = "dims")]
pub enum Shape {
    Box { x_mm: f64, y_mm: f64, z_mm: f64 },
    Sphere { radius_mm: f64 },
    Capsule { radius_mm: f64, length_mm: f64 },
}

/// A single collision/visualisation geometry reported by a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Geometry {
    pub label: String,
    pub center: Pose,
    pub shape: Shape,
}

/// Unified error type spanning configuration validation, dependency
/// resolution, GPIO faults, and unsupported capability calls.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum GripError {
    #[error("config attribute `{0}` is required")]
    MissingAttribute(String),

    #[error("config attribute `{key}` is invalid: {reason}")]
    InvalidAttribute { key: String, reason: String },

    #[error("dependency `{0}` is not in the resource table")]
    MissingDependency(String),

    #[error("gpio fault on pin {pin}: {details}")]
    Gpio { pin: String, details: String },

    #[error("`{0}` is not supported")]
    Unsupported(String),
}
