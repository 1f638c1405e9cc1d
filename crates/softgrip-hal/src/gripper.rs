//! The `Gripper` trait – the full end-effector contract.
//!
//! The host only ever holds grippers through this trait, so drivers can be
//! swapped without touching the calling code.  A driver is not required to
//! support every capability; unsupported operations return
//! [`GripError::Unsupported`] instead of faulting.

use std::time::Duration;

use async_trait::async_trait;
use softgrip_types::{
    Attributes, ComponentConfig, Geometry, GripError, HoldingStatus, KinematicsFileFormat, Model,
};

use crate::registry::ResourceTable;

/// Per-call options every gripper operation accepts.
///
/// `extra` carries opaque driver-specific arguments; `timeout` bounds the
/// call where the driver honours it.  Drivers that ignore either field must
/// do so consistently and document it.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub extra: Option<Attributes>,
    pub timeout: Option<Duration>,
}

/// A robotic end effector capable of open/grab/status operations.
///
/// All hardware-touching methods are asynchronous and fallible.  The trait
/// provides no mutual exclusion: whether two in-flight calls on the same
/// instance may interleave is driver-defined, and callers should serialise
/// access unless a driver documents otherwise.
#[async_trait]
pub trait Gripper: Send + Sync {
    /// Instance name this gripper was configured under.
    fn name(&self) -> &str;

    /// The model identifier of the driver behind this instance.
    fn model(&self) -> Model;

    /// Release whatever the gripper is holding.
    async fn open(&self, opts: CallOptions) -> Result<(), GripError>;

    /// Close on / pick up an object.  Returns `true` when the driver
    /// believes it has grabbed something.
    async fn grab(&self, opts: CallOptions) -> Result<bool, GripError>;

    /// Report whether the gripper is currently holding an object.
    async fn is_holding_something(&self, opts: CallOptions) -> Result<HoldingStatus, GripError>;

    /// Halt any in-progress motion.
    async fn stop(&self, opts: CallOptions) -> Result<(), GripError>;

    /// Report whether the gripper is currently moving.
    async fn is_moving(&self) -> Result<bool, GripError>;

    /// Return the kinematics description of this gripper and its format.
    async fn get_kinematics(
        &self,
        opts: CallOptions,
    ) -> Result<(KinematicsFileFormat, Vec<u8>), GripError>;

    /// Dispatch an arbitrary driver-specific command.
    async fn do_command(
        &self,
        command: Attributes,
        opts: CallOptions,
    ) -> Result<Attributes, GripError>;

    /// Report the gripper's collision geometries.
    async fn get_geometries(&self, opts: CallOptions) -> Result<Vec<Geometry>, GripError>;

    /// Apply a new configuration in place.
    ///
    /// The host calls this with the updated [`ComponentConfig`] and the
    /// freshly resolved dependency table whenever the instance's
    /// configuration changes.
    ///
    /// # Errors
    ///
    /// Returns a configuration or dependency-resolution error; on failure
    /// the driver documents whether its previous configuration remains
    /// active.
    fn reconfigure(
        &mut self,
        config: &ComponentConfig,
        deps: &ResourceTable,
    ) -> Result<(), GripError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Minimal gripper that counts open calls; everything else is
    /// unsupported.
    struct CountingGripper {
        opens: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Gripper for CountingGripper {
        fn name(&self) -> &str {
            "counter"
        }

        fn model(&self) -> Model {
            Model::new("softgrip", "test", "counter")
        }

        async fn open(&self, _opts: CallOptions) -> Result<(), GripError> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn grab(&self, _opts: CallOptions) -> Result<bool, GripError> {
            Err(GripError::Unsupported("grab".to_string()))
        }

        async fn is_holding_something(
            &self,
            _opts: CallOptions,
        ) -> Result<HoldingStatus, GripError> {
            Err(GripError::Unsupported("is_holding_something".to_string()))
        }

        async fn stop(&self, _opts: CallOptions) -> Result<(), GripError> {
            Err(GripError::Unsupported("stop".to_string()))
        }

        async fn is_moving(&self) -> Result<bool, GripError> {
            Err(GripError::Unsupported("is_moving".to_string()))
        }

        async fn get_kinematics(
            &self,
            _opts: CallOptions,
        ) -> Result<(KinematicsFileFormat, Vec<u8>), GripError> {
            Err(GripError::Unsupported("get_kinematics".to_string()))
        }

        async fn do_command(
            &self,
            _command: Attributes,
            _opts: CallOptions,
        ) -> Result<Attributes, GripError> {
            Err(GripError::Unsupported("do_command".to_string()))
        }

        async fn get_geometries(&self, _opts: CallOptions) -> Result<Vec<Geometry>, GripError> {
            Err(GripError::Unsupported("get_geometries".to_string()))
        }

        fn reconfigure(
            &mut self,
            _config: &ComponentConfig,
            _deps: &ResourceTable,
        ) -> Result<(), GripError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn dyn_gripper_dispatch() -> Result<(), GripError> {
        let opens = Arc::new(AtomicUsize::new(0));
        let gripper: Box<dyn Gripper> = Box::new(CountingGripper {
            opens: opens.clone(),
        });

        gripper.open(CallOptions::default()).await?;
        gripper.open(CallOptions::default()).await?;
        assert_eq!(opens.load(Ordering::SeqCst), 2);
        assert_eq!(gripper.model().to_string(), "softgrip:test:counter");

        let err = gripper.grab(CallOptions::default()).await.unwrap_err();
        assert!(matches!(err, GripError::Unsupported(_)));
        Ok(())
    }
}
