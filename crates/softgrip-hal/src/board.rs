//! `Board` and `GpioPin` traits for named digital-I/O providers.
//!
//! A board owns a set of named digital lines.  Drivers look pins up by name
//! immediately before each use and drive them through the returned
//! [`GpioPin`] handle; handles are not cached across operations, so a board
//! implementation is free to invalidate them between calls.

use std::sync::Arc;

use async_trait::async_trait;
use softgrip_types::GripError;

/// A single named digital I/O line, individually settable high or low.
///
/// Both operations are asynchronous because the underlying transport (a
/// serial link, an SPI expander, a remote board service) may suspend.
#[async_trait]
pub trait GpioPin: Send + Sync {
    /// The pin's name on its board, e.g. `"16"` or `"io22"`.
    fn name(&self) -> &str;

    /// Drive the pin to `high` (`true` = high / energised).
    ///
    /// # Errors
    ///
    /// Returns [`GripError::Gpio`] when the write is refused or the
    /// transport fails.
    async fn set(&self, high: bool) -> Result<(), GripError>;

    /// Read the pin's current level (`true` = high).
    ///
    /// # Errors
    ///
    /// Returns [`GripError::Gpio`] when the read fails.
    async fn get(&self) -> Result<bool, GripError>;
}

impl std::fmt::Debug for dyn GpioPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpioPin").field("name", &self.name()).finish()
    }
}

/// An abstract digital-I/O board exposing pins by name.
///
/// Board handles are shared (`Arc<dyn Board>`) out of a
/// [`ResourceTable`][crate::registry::ResourceTable]; the host guarantees a
/// handle stays valid until the next reconfiguration of its consumers.
#[async_trait]
pub trait Board: Send + Sync {
    /// Stable name the board is registered under, e.g. `"b1"`.
    fn name(&self) -> &str;

    /// Resolve a pin handle by name.
    ///
    /// # Errors
    ///
    /// Returns [`GripError::Gpio`] when the board has no such pin.
    async fn gpio_pin_by_name(&self, name: &str) -> Result<Arc<dyn GpioPin>, GripError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockPin {
        name: String,
        level: Mutex<bool>,
    }

    #[async_trait]
    impl GpioPin for MockPin {
        fn name(&self) -> &str {
            &self.name
        }

        async fn set(&self, high: bool) -> Result<(), GripError> {
            *self.level.lock().unwrap() = high;
            Ok(())
        }

        async fn get(&self) -> Result<bool, GripError> {
            Ok(*self.level.lock().unwrap())
        }
    }

    struct MockBoard {
        name: String,
        pin: Arc<MockPin>,
    }

    #[async_trait]
    impl Board for MockBoard {
        fn name(&self) -> &str {
            &self.name
        }

        async fn gpio_pin_by_name(&self, name: &str) -> Result<Arc<dyn GpioPin>, GripError> {
            if name == self.pin.name {
                Ok(self.pin.clone())
            } else {
                Err(GripError::Gpio {
                    pin: name.to_string(),
                    details: format!("no such pin on board {}", self.name),
                })
            }
        }
    }

    #[tokio::test]
    async fn mock_board_set_and_get_through_trait() -> Result<(), GripError> {
        let board: Arc<dyn Board> = Arc::new(MockBoard {
            name: "b1".to_string(),
            pin: Arc::new(MockPin {
                name: "16".to_string(),
                level: Mutex::new(false),
            }),
        });

        let pin = board.gpio_pin_by_name("16").await?;
        assert!(!pin.get().await?);
        pin.set(true).await?;
        assert!(pin.get().await?);
        Ok(())
    }

    #[tokio::test]
    async fn mock_board_unknown_pin_is_a_gpio_fault() {
        let board = MockBoard {
            name: "b1".to_string(),
            pin: Arc::new(MockPin {
                name: "16".to_string(),
                level: Mutex::new(false),
            }),
        };

        let err = board.gpio_pin_by_name("99").await.unwrap_err();
        assert!(matches!(err, GripError::Gpio { ref pin, .. } if pin == "99"));
    }
}
