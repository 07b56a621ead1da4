//! Constant-folded digital pin access for the chipKIT Uno32
//! (PIC32MX320F128H).
//!
//! The Arduino-style `digitalWrite(pin, val)` resolves the pin to a port
//! and bit at execution time, every call. On this board the mapping is
//! fixed, so when the pin number is known at compile time the whole
//! lookup can be folded away, leaving a single store to the port's
//! `LATxSET`/`LATxCLR` shadow register. That is what this crate does,
//! split into layers that all share one pin map:
//!
//! - [`pins`]: the Uno32 board table and per-pin register lookups.
//! - [`digital`]: free functions. The `*_fast` entry points take the pin
//!   as a const generic and compile to one volatile store or load; the
//!   plain entry points take the pin as a value and walk the table at
//!   runtime, for pin numbers that arrive from configuration or a wire.
//! - [`gpio`]: owned typestate pins with [`embedded_hal`] digital trait
//!   impls (0.2 compat behind the `embedded-hal-02` feature).
//! - [`batch`]: whole-port bring-up in a handful of writes.
//!
//! ```no_run
//! use pic32mx3xx_fast_gpio::digital::{self, Direction, Level};
//!
//! digital::set_direction_fast::<13>(Direction::Output);
//! digital::write_fast::<13>(Level::High);
//! assert!(digital::read_fast::<13>().is_high());
//! ```
//!
//! Every write in the crate lands in a `SET`/`CLR`/`INV` shadow
//! register, which acts only on the bits written. Pin updates therefore
//! never read-modify-write the port word and are safe from interrupt
//! handlers without masking, unlike ports whose output register is
//! shared state.

#![no_std]
#![deny(missing_docs)]

pub mod batch;
pub mod digital;
pub mod gpio;
pub mod ioport;
pub mod pins;
pub mod prelude;
