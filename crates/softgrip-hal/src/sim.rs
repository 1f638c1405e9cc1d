//! In-process simulated board for CI pipelines and tests without hardware.
//!
//! [`SimBoard`] implements [`Board`] with pins that live in memory.  Every
//! successful write is recorded in order, so tests can assert exact pin
//! sequences; writes to a chosen pin can be made to fail, so tests can
//! exercise abort paths.
//!
//! # Example
//!
//! ```rust
//! use softgrip_hal::Board;
//! use softgrip_hal::sim::SimBoard;
//!
//! let board = SimBoard::new("b1");
//! tokio::runtime::Runtime::new().unwrap().block_on(async {
//!     let pin = board.gpio_pin_by_name("16").await.unwrap();
//!     pin.set(true).await.unwrap();
//! });
//! assert_eq!(board.writes(), vec![("16".to_string(), true)]);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use softgrip_types::GripError;
use tracing::debug;

use crate::board::{Board, GpioPin};

// State shared between the board handle and every pin it has handed out.
#[derive(Default)]
struct Shared {
    writes: Mutex<Vec<(String, bool)>>,
    failing: Mutex<HashSet<String>>,
}

/// A simulated digital-I/O board.
///
/// Pins are created on first lookup unless the board was built with
/// [`SimBoard::with_pins`], in which case unknown names fail like they
/// would on real hardware.  Cloning the board shares its state.
#[derive(Clone)]
pub struct SimBoard {
    name: String,
    known: Option<HashSet<String>>,
    pins: Arc<Mutex<HashMap<String, Arc<SimPin>>>>,
    shared: Arc<Shared>,
}

impl SimBoard {
    /// Create a board that accepts any pin name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            known: None,
            pins: Arc::new(Mutex::new(HashMap::new())),
            shared: Arc::new(Shared::default()),
        }
    }

    /// Create a board restricted to the given pin names; looking up any
    /// other name returns a [`GripError::Gpio`] fault.
    pub fn with_pins(name: impl Into<String>, pins: &[&str]) -> Self {
        let mut board = Self::new(name);
        board.known = Some(pins.iter().map(|p| p.to_string()).collect());
        board
    }

    /// Make every subsequent write to `pin` fail with a
    /// [`GripError::Gpio`] fault.
    pub fn fail_writes_to(&self, pin: &str) {
        self.shared.failing.lock().unwrap().insert(pin.to_string());
    }

    /// Snapshot of all successful writes, in order, as `(pin, level)`.
    pub fn writes(&self) -> Vec<(String, bool)> {
        self.shared.writes.lock().unwrap().clone()
    }

    /// Current level of `pin`, or `None` if the pin was never resolved.
    pub fn pin_level(&self, pin: &str) -> Option<bool> {
        self.pins
            .lock()
            .unwrap()
            .get(pin)
            .map(|p| *p.level.lock().unwrap())
    }
}

#[async_trait]
impl Board for SimBoard {
    fn name(&self) -> &str {
        &self.name
    }

    async fn gpio_pin_by_name(&self, name: &str) -> Result<Arc<dyn GpioPin>, GripError> {
        if let Some(known) = &self.known {
            if !known.contains(name) {
                return Err(GripError::Gpio {
                    pin: name.to_string(),
                    details: format!("no such pin on board {}", self.name),
                });
            }
        }

        let mut pins = self.pins.lock().unwrap();
        let pin = pins
            .entry(name.to_string())
            .or_insert_with(|| {
                Arc::new(SimPin {
                    name: name.to_string(),
                    level: Mutex::new(false),
                    shared: self.shared.clone(),
                })
            })
            .clone();
        Ok(pin)
    }
}

/// A pin handed out by a [`SimBoard`].  Starts low.
pub struct SimPin {
    name: String,
    level: Mutex<bool>,
    shared: Arc<Shared>,
}

#[async_trait]
impl GpioPin for SimPin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn set(&self, high: bool) -> Result<(), GripError> {
        if self.shared.failing.lock().unwrap().contains(&self.name) {
            return Err(GripError::Gpio {
                pin: self.name.clone(),
                details: "injected write fault".to_string(),
            });
        }
        *self.level.lock().unwrap() = high;
        self.shared
            .writes
            .lock()
            .unwrap()
            .push((self.name.clone(), high));
        debug!(pin = %self.name, high, "sim gpio write");
        Ok(())
    }

    async fn get(&self) -> Result<bool, GripError> {
        Ok(*self.level.lock().unwrap())
    }
}
