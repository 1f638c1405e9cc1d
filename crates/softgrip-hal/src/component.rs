//! Component construction lifecycle.
//!
//! Before instantiating a driver the host calls
//! [`Component::validate_config`] to reject broken configs early and learn
//! which named dependencies the instance needs.  Once every required
//! dependency is resolved into a [`ResourceTable`], the host calls
//! [`Component::new`].

use softgrip_types::{ComponentConfig, GripError, Model};

use crate::registry::ResourceTable;

/// Dependency names a component declares during validation.
///
/// The host must resolve every `required` name before construction;
/// `optional` names are resolved on a best-effort basis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl Dependencies {
    /// Dependencies with only required names.
    pub fn required(names: Vec<String>) -> Self {
        Self {
            required: names,
            optional: Vec::new(),
        }
    }
}

/// The validate/construct contract the host drives for every component
/// model it can load.
pub trait Component: Sized {
    /// Fixed model identifier this driver registers under.
    const MODEL: Model;

    /// Check `config` for the attributes this model requires and report the
    /// dependencies it will need.
    ///
    /// Validation must not touch any dependency or hardware.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending attribute.
    fn validate_config(config: &ComponentConfig) -> Result<Dependencies, GripError>;

    /// Build an instance from a validated config and its resolved
    /// dependencies.
    ///
    /// # Errors
    ///
    /// Returns a configuration or dependency-resolution error.
    fn new(config: &ComponentConfig, deps: &ResourceTable) -> Result<Self, GripError>;
}
