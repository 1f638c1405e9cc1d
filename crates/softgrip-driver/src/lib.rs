//! `softgrip-driver` – the codrive vacuum gripper driver.
//!
//! Exposes a two-finger pneumatic ("soft robotics") end effector as a
//! [`Gripper`][softgrip_hal::Gripper] component.  The mechanism is driven
//! entirely through three digital lines on a
//! [`Board`][softgrip_hal::Board] dependency:
//!
//! | Attribute | Line |
//! |---|---|
//! | `d1_pin` | release ("open") actuator |
//! | `d2_pin` | grab actuator |
//! | `d3_pin` | shared vacuum-generator ("common") rail |
//! | `board_name` | name of the board dependency providing the pins |
//!
//! Only `open` and `grab` touch hardware; the remaining capabilities of the
//! gripper contract (holding-status, stop, motion queries, kinematics,
//! command dispatch, geometries) are not supported by this device and fail
//! with [`GripError::Unsupported`][softgrip_types::GripError].

pub mod codrive;
pub mod config;

pub use codrive::{CODRIVE, Codrive, RELEASE_SETTLE};
pub use config::GripperConfig;
