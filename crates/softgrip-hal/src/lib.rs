//! `softgrip-hal` – hardware abstraction seams
//!
//! The traits every driver is written against, and the plumbing the host
//! uses to hand drivers their dependencies.  Drivers never hold concrete
//! board types; they resolve named pins through [`Board`] handles shared
//! out of a [`ResourceTable`].
//!
//! # Modules
//!
//! - [`board`] – [`Board`][board::Board] / [`GpioPin`][board::GpioPin]:
//!   an abstract digital-I/O provider exposing named pins with boolean
//!   set/get operations.
//! - [`gripper`] – [`Gripper`][gripper::Gripper]: the full end-effector
//!   contract (open, grab, status queries, command dispatch, geometry
//!   reporting) plus in-place reconfiguration.
//! - [`component`] – [`Component`][component::Component]: the
//!   validate/construct lifecycle the host drives for every component,
//!   and the [`Dependencies`][component::Dependencies] it returns.
//! - [`registry`] – [`ResourceTable`][registry::ResourceTable]: name-keyed
//!   table of shared board handles resolved during reconfiguration.
//! - [`sim`] – [`SimBoard`][sim::SimBoard]: in-process board double that
//!   records pin writes, for CI pipelines and tests without hardware.

pub mod board;
pub mod component;
pub mod gripper;
pub mod registry;
pub mod sim;

pub use board::{Board, GpioPin};
pub use component::{Component, Dependencies};
pub use gripper::{CallOptions, Gripper};
pub use registry::ResourceTable;
