//! Whole-port configuration.
//!
//! [`PortConfig`] collects the intended state of several pins on one port
//! and writes it to the hardware all at once, so bringing up a board
//! costs a handful of shadow-register stores instead of one pair per
//! pin. The builder methods are `const fn`, which puts the accumulation
//! at compile time when the configuration is a `const`:
//!
//! ```no_run
//! use pic32mx3xx_fast_gpio::batch::PortConfig;
//! use pic32mx3xx_fast_gpio::ioport::Port;
//!
//! // pins 11, 12, 13 share port G on the Uno32
//! const LEDS: PortConfig = PortConfig::new(Port::G)
//!     .output_low(11)
//!     .output_low(12)
//!     .output_high(13);
//!
//! LEDS.apply();
//! ```
//!
//! Handing a builder method a pin that is off the header, or on a
//! different port, panics; in a `const` the panic lands at compile time.

use crate::ioport::{IoPortPeriph, Port};
use crate::pins::pin_info;

/// Accumulated configuration for the pins of one port.
///
/// Masks accumulate; configuring the same pin twice leaves both
/// intentions set and the last write in [`PortConfig::apply`] order wins.
pub struct PortConfig {
    port: Port,
    dir_out: u32,
    dir_in: u32,
    lat_high: u32,
    lat_low: u32,
    odc_on: u32,
    odc_off: u32,
}

impl PortConfig {
    /// Starts an empty configuration for `port`.
    pub const fn new(port: Port) -> Self {
        PortConfig {
            port,
            dir_out: 0,
            dir_in: 0,
            lat_high: 0,
            lat_low: 0,
            odc_on: 0,
            odc_off: 0,
        }
    }

    const fn pin_mask(&self, pin: u8) -> u32 {
        match pin_info(pin) {
            Some(info) => {
                assert!(
                    info.port as u32 == self.port as u32,
                    "pin is not on this port"
                );
                info.mask
            }
            None => panic!("not a digital pin on the Uno32 header"),
        }
    }

    /// Makes `pin` a push-pull output driving low.
    pub const fn output_low(mut self, pin: u8) -> Self {
        let mask = self.pin_mask(pin);
        self.lat_low |= mask;
        self.odc_off |= mask;
        self.dir_out |= mask;
        self
    }

    /// Makes `pin` a push-pull output driving high.
    pub const fn output_high(mut self, pin: u8) -> Self {
        let mask = self.pin_mask(pin);
        self.lat_high |= mask;
        self.odc_off |= mask;
        self.dir_out |= mask;
        self
    }

    /// Makes `pin` an open-drain output, released (latch high).
    pub const fn open_drain(mut self, pin: u8) -> Self {
        let mask = self.pin_mask(pin);
        self.lat_high |= mask;
        self.odc_on |= mask;
        self.dir_out |= mask;
        self
    }

    /// Returns `pin` to the tri-stated reset direction.
    pub const fn input(mut self, pin: u8) -> Self {
        let mask = self.pin_mask(pin);
        self.dir_in |= mask;
        self
    }

    /// Writes the accumulated configuration to the hardware.
    ///
    /// Latch and drive kind go out before direction so a pin never
    /// drives a stale level while becoming an output.
    pub fn apply(&self) {
        self.apply_to(&self.port);
    }

    fn apply_to<P: IoPortPeriph>(&self, port: &P) {
        if self.lat_high != 0 {
            port.set_high(self.lat_high);
        }
        if self.lat_low != 0 {
            port.set_low(self.lat_low);
        }
        if self.odc_on != 0 {
            port.odc_enable(self.odc_on);
        }
        if self.odc_off != 0 {
            port.odc_disable(self.odc_off);
        }
        if self.dir_out != 0 {
            port.make_output(self.dir_out);
        }
        if self.dir_in != 0 {
            port.make_input(self.dir_in);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ioport::sim::SimPort;
    use crate::pins::bit_mask;

    #[test]
    fn const_built_config_applies_in_one_pass() {
        // pins 11, 12, 13 are port G bits 8, 7, 6
        const LEDS: PortConfig = PortConfig::new(Port::G)
            .output_low(11)
            .output_low(12)
            .output_high(13);

        let port = SimPort::new();
        LEDS.apply_to(&port);

        let out = bit_mask(11) | bit_mask(12) | bit_mask(13);
        assert_eq!(port.tris() & out, 0, "all three must be outputs");
        assert_eq!(port.latch() & out, bit_mask(13));
        assert_eq!(port.odc() & out, 0);
    }

    #[test]
    fn open_drain_pins_are_released_not_driven() {
        let cfg = PortConfig::new(Port::G).open_drain(12);
        let port = SimPort::new();
        cfg.apply_to(&port);
        assert_eq!(port.odc() & bit_mask(12), bit_mask(12));
        assert_eq!(port.latch() & bit_mask(12), bit_mask(12));
        assert_eq!(port.tris() & bit_mask(12), 0);
    }

    #[test]
    fn input_returns_a_pin_to_tristate() {
        let port = SimPort::new();
        PortConfig::new(Port::G).output_high(13).apply_to(&port);
        assert_eq!(port.tris() & bit_mask(13), 0);
        PortConfig::new(Port::G).input(13).apply_to(&port);
        assert_eq!(port.tris() & bit_mask(13), bit_mask(13));
    }

    #[test]
    #[should_panic(expected = "pin is not on this port")]
    fn pins_from_another_port_are_rejected() {
        // pin 13 lives on port G, not port B
        let _ = PortConfig::new(Port::B).output_low(13);
    }

    #[test]
    #[should_panic(expected = "not a digital pin")]
    fn pins_off_the_header_are_rejected() {
        let _ = PortConfig::new(Port::B).output_low(44);
    }
}
