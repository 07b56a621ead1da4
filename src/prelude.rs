//! Prelude

pub use crate::digital::{Direction, Level};
pub use crate::gpio::Pins;
pub use embedded_hal::digital::InputPin as _;
pub use embedded_hal::digital::OutputPin as _;
pub use embedded_hal::digital::StatefulOutputPin as _;
