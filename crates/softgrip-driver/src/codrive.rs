//! The codrive vacuum gripper.
//!
//! Two pneumatic actuators share one vacuum-generator rail.  Releasing an
//! object energises the release line long enough for the vacuum to
//! dissipate and then returns every line to a safe low state; grabbing
//! leaves the grab line energised, because a vacuum hold only lasts while
//! the line is powered.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::error;

use softgrip_hal::board::GpioPin;
use softgrip_hal::{Board, CallOptions, Component, Dependencies, Gripper, ResourceTable};
use softgrip_types::{
    Attributes, ComponentConfig, Geometry, GripError, HoldingStatus, KinematicsFileFormat, Model,
};

use crate::config::GripperConfig;

/// Model identifier the codrive driver registers under.
pub const CODRIVE: Model = Model::new("softgrip", "soft-robotics", "codrive");

/// Mechanical settle time kept on the release line so the vacuum has
/// dissipated before the line is dropped again.
pub const RELEASE_SETTLE: Duration = Duration::from_millis(500);

// Everything a reconfiguration replaces, swapped in as a single unit.
struct State {
    config: GripperConfig,
    board: Arc<dyn Board>,
}

impl State {
    fn resolve(config: &ComponentConfig, deps: &ResourceTable) -> Result<Self, GripError> {
        let config = GripperConfig::from_config(config)?;
        let board = deps
            .board(&config.board_name)
            .ok_or_else(|| GripError::MissingDependency(config.board_name.clone()))?;
        Ok(Self { config, board })
    }
}

/// Driver for the codrive two-finger vacuum gripper.
///
/// Construct through [`Component::new`]; the host later updates the
/// instance in place through [`Gripper::reconfigure`].
pub struct Codrive {
    name: String,
    state: State,
}

impl std::fmt::Debug for Codrive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codrive").field("name", &self.name).finish()
    }
}

impl Codrive {
    // Pin handles are resolved fresh from the board on every operation and
    // never cached across calls.
    async fn pins(
        &self,
    ) -> Result<(Arc<dyn GpioPin>, Arc<dyn GpioPin>, Arc<dyn GpioPin>), GripError> {
        let grab_pin = self
            .state
            .board
            .gpio_pin_by_name(&self.state.config.grab_pin)
            .await?;
        let open_pin = self
            .state
            .board
            .gpio_pin_by_name(&self.state.config.open_pin)
            .await?;
        let com_pin = self
            .state
            .board
            .gpio_pin_by_name(&self.state.config.com_pin)
            .await?;
        Ok((grab_pin, open_pin, com_pin))
    }

    fn unsupported(op: &str) -> GripError {
        error!("`{op}` is not supported by the codrive gripper");
        GripError::Unsupported(op.to_string())
    }
}

impl Component for Codrive {
    const MODEL: Model = CODRIVE;

    fn validate_config(config: &ComponentConfig) -> Result<Dependencies, GripError> {
        let config = GripperConfig::from_config(config)?;
        Ok(Dependencies::required(vec![config.board_name]))
    }

    fn new(config: &ComponentConfig, deps: &ResourceTable) -> Result<Self, GripError> {
        Ok(Self {
            name: config.name.clone(),
            state: State::resolve(config, deps)?,
        })
    }
}

/// Calls on one instance are not mutually excluded: two in-flight
/// `open`/`grab` futures interleave their pin writes.  Callers must
/// serialise access to a given gripper.
#[async_trait]
impl Gripper for Codrive {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> Model {
        Self::MODEL
    }

    /// Release the held object.
    ///
    /// Powers the generator rail, drops the grab line, pulses the release
    /// line for [`RELEASE_SETTLE`], then returns both the release line and
    /// the rail to low so no line is left energised.
    ///
    /// If the returned future is dropped during the settle sleep, the
    /// release line and the generator rail stay energised; drive the future
    /// to completion.
    ///
    /// `opts` is accepted for interface compatibility and ignored.
    async fn open(&self, _opts: CallOptions) -> Result<(), GripError> {
        let (grab_pin, open_pin, com_pin) = self.pins().await?;

        // Power the vacuum generator rail.
        com_pin.set(true).await?;
        // Make sure the grab actuator is disengaged.
        grab_pin.set(false).await?;
        // Pulse the release actuator, holding it long enough for the
        // vacuum to dissipate.
        open_pin.set(true).await?;
        sleep(RELEASE_SETTLE).await;
        open_pin.set(false).await?;
        // Drop the generator rail again.
        com_pin.set(false).await?;
        Ok(())
    }

    /// Pick up an object.
    ///
    /// Powers the generator rail, drops the release line, and energises the
    /// grab line.  The grab line stays high: the vacuum hold only lasts
    /// while it is powered.  There is no feedback line to read back, so the
    /// call reports success unconditionally.
    ///
    /// `opts` is accepted for interface compatibility and ignored.
    async fn grab(&self, _opts: CallOptions) -> Result<bool, GripError> {
        let (grab_pin, open_pin, com_pin) = self.pins().await?;

        // Power the vacuum generator rail.
        com_pin.set(true).await?;
        // Make sure the release actuator is disengaged.
        open_pin.set(false).await?;
        // Engage the grab actuator and leave it energised.
        grab_pin.set(true).await?;

        Ok(true)
    }

    async fn is_holding_something(&self, _opts: CallOptions) -> Result<HoldingStatus, GripError> {
        Err(Self::unsupported("is_holding_something"))
    }

    async fn stop(&self, _opts: CallOptions) -> Result<(), GripError> {
        Err(Self::unsupported("stop"))
    }

    async fn is_moving(&self) -> Result<bool, GripError> {
        Err(Self::unsupported("is_moving"))
    }

    async fn get_kinematics(
        &self,
        _opts: CallOptions,
    ) -> Result<(KinematicsFileFormat, Vec<u8>), GripError> {
        Err(Self::unsupported("get_kinematics"))
    }

    async fn do_command(
        &self,
        _command: Attributes,
        _opts: CallOptions,
    ) -> Result<Attributes, GripError> {
        Err(Self::unsupported("do_command"))
    }

    async fn get_geometries(&self, _opts: CallOptions) -> Result<Vec<Geometry>, GripError> {
        Err(Self::unsupported("get_geometries"))
    }

    /// Rebuild the pin names and board handle from `config` and swap them
    /// in as one unit.  On any failure the previous configuration stays
    /// active and the instance remains usable.
    fn reconfigure(
        &mut self,
        config: &ComponentConfig,
        deps: &ResourceTable,
    ) -> Result<(), GripError> {
        self.state = State::resolve(config, deps)?;
        Ok(())
    }
}
