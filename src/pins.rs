//! chipKIT Uno32 pin map.
//!
//! The logical pin numbers silkscreened on the Uno32 header map onto five
//! of the PIC32MX320F128H's ports. This module is that mapping: fixed
//! const tables from pin number to port and bit, and lookups from pin
//! number to each of the registers a digital operation touches. The
//! tables are compiled into the image and never built or changed at
//! runtime.
//!
//! Lookups take the pin as an ordinary `u8` so they serve both worlds:
//! called with a literal (or from a const context) they fold to a single
//! address or mask constant, called with a runtime value they cost one
//! table index. Out-of-range pins resolve to a null pointer and a zero
//! mask; the lookups themselves never check beyond that, so a caller that
//! stores through the sentinel is on its own.

use crate::ioport::Port;
use core::ptr;

/// Number of logical digital pins on the Uno32 header.
pub const NUM_DIGITAL_PINS: u8 = 44;

#[rustfmt::skip]
const PIN_TO_PORT: [Port; NUM_DIGITAL_PINS as usize] = [
    Port::F, Port::F, Port::D, Port::D, Port::F, Port::D, Port::D, Port::D, // 0..=7
    Port::D, Port::D, Port::D, Port::G, Port::G, Port::G,                   // 8..=13
    Port::B, Port::B, Port::B, Port::B, Port::B, Port::B,                   // 14..=19
    Port::B, Port::B, Port::B, Port::B, Port::B, Port::B,                   // 20..=25
    Port::E, Port::E, Port::E, Port::E, Port::E, Port::E, Port::E, Port::E, // 26..=33
    Port::D, Port::D, Port::D, Port::D,                                     // 34..=37
    Port::F, Port::F, Port::F, Port::B, Port::B, Port::F,                   // 38..=43
];

#[rustfmt::skip]
const PIN_TO_BIT: [u8; NUM_DIGITAL_PINS as usize] = [
    2, 3, 8, 0, 1, 1, 2, 9,     // 0..=7
    10, 3, 4, 8, 7, 6,          // 8..=13
    2, 4, 8, 10, 12, 14,        // 14..=19
    3, 5, 9, 11, 13, 15,        // 20..=25
    0, 1, 2, 3, 4, 5, 6, 7,     // 26..=33
    5, 11, 6, 7,                // 34..=37
    6, 4, 5, 1, 0, 0,           // 38..=43
];

/// Port and bit mask of one digital pin.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PinInfo {
    pub(crate) port: Port,
    pub(crate) mask: u32,
}

/// Whether `pin` is a digital pin on the Uno32 header.
#[inline(always)]
pub const fn is_digital_pin(pin: u8) -> bool {
    pin < NUM_DIGITAL_PINS
}

#[inline(always)]
pub(crate) const fn pin_info(pin: u8) -> Option<PinInfo> {
    if pin < NUM_DIGITAL_PINS {
        Some(PinInfo {
            port: PIN_TO_PORT[pin as usize],
            mask: 1 << PIN_TO_BIT[pin as usize],
        })
    } else {
        None
    }
}

/// `pin_info` for pins that must exist. Evaluated inside `const` blocks by
/// the fast paths, so an out-of-range const-generic pin fails to compile
/// instead of reaching the null sentinel.
#[inline(always)]
pub(crate) const fn resolve(pin: u8) -> PinInfo {
    match pin_info(pin) {
        Some(info) => info,
        None => panic!("not a digital pin on the Uno32 header"),
    }
}

/// Single-bit mask locating `pin` within its port word, 0 if out of range.
#[inline(always)]
pub const fn bit_mask(pin: u8) -> u32 {
    match pin_info(pin) {
        Some(info) => info.mask,
        None => 0,
    }
}

/// `LATxSET` register driving `pin` high, null if out of range.
#[inline(always)]
pub const fn set_register(pin: u8) -> *mut u32 {
    match pin_info(pin) {
        Some(info) => info.port.lat_set(),
        None => ptr::null_mut(),
    }
}

/// `LATxCLR` register driving `pin` low, null if out of range.
#[inline(always)]
pub const fn clear_register(pin: u8) -> *mut u32 {
    match pin_info(pin) {
        Some(info) => info.port.lat_clr(),
        None => ptr::null_mut(),
    }
}

/// `TRISxCLR` register switching `pin` to output, null if out of range.
#[inline(always)]
pub const fn output_enable_register(pin: u8) -> *mut u32 {
    match pin_info(pin) {
        Some(info) => info.port.tris_clr(),
        None => ptr::null_mut(),
    }
}

/// `TRISxSET` register switching `pin` to input, null if out of range.
#[inline(always)]
pub const fn input_enable_register(pin: u8) -> *mut u32 {
    match pin_info(pin) {
        Some(info) => info.port.tris_set(),
        None => ptr::null_mut(),
    }
}

/// `PORTx` register sampling `pin`'s electrical level, null if out of
/// range. Reads here reflect the pin, not the latch; use
/// [`latch_register`] for the driven state.
#[inline(always)]
pub const fn input_register(pin: u8) -> *const u32 {
    match pin_info(pin) {
        Some(info) => info.port.port(),
        None => ptr::null(),
    }
}

/// `LATx` register holding `pin`'s driven state, null if out of range.
#[inline(always)]
pub const fn latch_register(pin: u8) -> *const u32 {
    match pin_info(pin) {
        Some(info) => info.port.lat(),
        None => ptr::null(),
    }
}

/// `LATxINV` register toggling `pin`, null if out of range.
#[inline(always)]
pub const fn invert_register(pin: u8) -> *mut u32 {
    match pin_info(pin) {
        Some(info) => info.port.lat_inv(),
        None => ptr::null_mut(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pins() -> impl Iterator<Item = u8> {
        0..NUM_DIGITAL_PINS
    }

    #[test]
    fn every_pin_has_registers_and_a_single_bit_mask() {
        for pin in all_pins() {
            assert!(!set_register(pin).is_null(), "pin {}", pin);
            assert!(!clear_register(pin).is_null(), "pin {}", pin);
            assert!(!output_enable_register(pin).is_null(), "pin {}", pin);
            assert!(!input_enable_register(pin).is_null(), "pin {}", pin);
            assert!(!input_register(pin).is_null(), "pin {}", pin);
            assert!(!latch_register(pin).is_null(), "pin {}", pin);
            assert!(!invert_register(pin).is_null(), "pin {}", pin);
            assert_eq!(bit_mask(pin).count_ones(), 1, "pin {}", pin);
        }
    }

    #[test]
    fn no_two_pins_of_one_port_share_a_bit() {
        for a in all_pins() {
            for b in (a + 1)..NUM_DIGITAL_PINS {
                if input_register(a) == input_register(b) {
                    assert_eq!(
                        bit_mask(a) & bit_mask(b),
                        0,
                        "pins {} and {} alias the same port bit",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn register_lookups_agree_on_the_port_block() {
        for pin in all_pins() {
            let set = set_register(pin) as usize;
            assert_eq!(clear_register(pin) as usize, set - 0x4, "pin {}", pin);
            assert_eq!(invert_register(pin) as usize, set + 0x4, "pin {}", pin);
            assert_eq!(latch_register(pin) as usize, set - 0x8, "pin {}", pin);
            // LAT block sits 0x20 above TRIS, 0x10 above PORT
            assert_eq!(
                output_enable_register(pin) as usize,
                set - 0x20 - 0x4,
                "pin {}",
                pin
            );
            assert_eq!(input_enable_register(pin) as usize, set - 0x20, "pin {}", pin);
            assert_eq!(input_register(pin) as usize, set - 0x10 - 0x8, "pin {}", pin);
        }
    }

    #[test]
    fn pin_13_is_port_g_bit_6() {
        use crate::ioport::Port;

        assert_eq!(bit_mask(13), 1 << 6);
        assert_eq!(set_register(13), Port::G.lat_set());
        assert_eq!(clear_register(13), Port::G.lat_clr());
        assert_eq!(input_register(13), Port::G.port());
    }

    #[test]
    fn spot_checks_against_the_board_table() {
        use crate::ioport::Port;

        // pins 0 and 1 are the UART pair on port F
        assert_eq!(input_register(0), Port::F.port());
        assert_eq!(bit_mask(0), 1 << 2);
        assert_eq!(input_register(1), Port::F.port());
        assert_eq!(bit_mask(1), 1 << 3);
        // the port E block is contiguous: pins 26..=33 are bits 0..=7
        for (i, pin) in (26..=33).enumerate() {
            assert_eq!(input_register(pin), Port::E.port());
            assert_eq!(bit_mask(pin), 1 << i);
        }
        // last header pin
        assert_eq!(input_register(43), Port::F.port());
        assert_eq!(bit_mask(43), 1 << 0);
    }

    #[test]
    fn out_of_range_pins_resolve_to_the_sentinel() {
        for pin in [NUM_DIGITAL_PINS, 100, u8::MAX] {
            assert!(set_register(pin).is_null());
            assert!(clear_register(pin).is_null());
            assert!(output_enable_register(pin).is_null());
            assert!(input_enable_register(pin).is_null());
            assert!(input_register(pin).is_null());
            assert!(latch_register(pin).is_null());
            assert!(invert_register(pin).is_null());
            assert_eq!(bit_mask(pin), 0);
            assert!(!is_digital_pin(pin));
        }
    }
}
