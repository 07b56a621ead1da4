//! Owned GPIO pins.
//!
//! [`Pins::take`] splits the Uno32 header into 44 zero-sized [`Pin`]
//! values, one per digital pin, each carrying its pin number as a const
//! generic and its direction as a typestate. Every method bottoms out in
//! the single-store operations of [`crate::digital`], so going through an
//! owned pin costs nothing over the raw fast calls; what the types add is
//! that only one piece of code can hold a pin, and only a pin in the
//! right direction exposes drive or sample methods.
//!
//! ```no_run
//! use pic32mx3xx_fast_gpio::gpio::Pins;
//!
//! let pins = Pins::take().unwrap();
//! let mut led = pins.p13.into_output();
//! led.set_high();
//! led.toggle();
//! ```

use crate::digital::{self, Level};
use crate::ioport::IoPortPeriph;
use crate::pins::resolve;
use core::convert::Infallible;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

/// Push-pull drive (`ODCx` bit clear).
pub struct PushPull;

/// Open-drain drive (`ODCx` bit set); the pin only pulls low.
pub struct OpenDrain;

/// Typestate of a pin that is tri-stated and sampled.
pub struct Input;

/// Typestate of a pin that drives its latch level.
pub struct Output<KIND = PushPull>(PhantomData<KIND>);

/// One digital pin of the Uno32 header, owned and direction-typed.
pub struct Pin<const N: u8, MODE> {
    _mode: PhantomData<MODE>,
}

macro_rules! make_pin {
    () => {
        Pin { _mode: PhantomData }
    };
}

impl<const N: u8, MODE> Pin<N, MODE> {
    const fn new() -> Self {
        make_pin!()
    }

    /// Logical pin number printed on the header silk.
    pub const fn number(&self) -> u8 {
        N
    }

    /// Reconfigures the pin as a push-pull output.
    ///
    /// The latch keeps whatever level it last held; write the pin before
    /// or right after converting if that level matters.
    pub fn into_output(self) -> Pin<N, Output<PushPull>> {
        let info = const { resolve(N) };
        info.port.odc_disable(info.mask);
        info.port.make_output(info.mask);
        make_pin!()
    }

    /// Reconfigures the pin as an open-drain output.
    pub fn into_open_drain_output(self) -> Pin<N, Output<OpenDrain>> {
        let info = const { resolve(N) };
        info.port.odc_enable(info.mask);
        info.port.make_output(info.mask);
        make_pin!()
    }

    /// Reconfigures the pin as an input.
    pub fn into_input(self) -> Pin<N, Input> {
        let info = const { resolve(N) };
        info.port.make_input(info.mask);
        make_pin!()
    }
}

impl<const N: u8, KIND> Pin<N, Output<KIND>> {
    /// Drives the pin high.
    #[inline(always)]
    pub fn set_high(&mut self) {
        digital::write_fast::<N>(Level::High);
    }

    /// Drives the pin low.
    #[inline(always)]
    pub fn set_low(&mut self) {
        digital::write_fast::<N>(Level::Low);
    }

    /// Drives the pin to `level`.
    #[inline(always)]
    pub fn set_level(&mut self, level: Level) {
        digital::write_fast::<N>(level);
    }

    /// Toggles the driven level.
    #[inline(always)]
    pub fn toggle(&mut self) {
        digital::toggle_fast::<N>();
    }

    /// Level the latch is driving, which on a loaded open-drain pin can
    /// differ from what [`Pin::sampled_level`] observes.
    #[inline(always)]
    pub fn driven_level(&self) -> Level {
        digital::read_back_fast::<N>()
    }

    /// Electrical level currently sampled on the pin.
    #[inline(always)]
    pub fn sampled_level(&self) -> Level {
        digital::read_fast::<N>()
    }
}

impl<const N: u8> Pin<N, Input> {
    /// Electrical level currently sampled on the pin.
    #[inline(always)]
    pub fn level(&self) -> Level {
        digital::read_fast::<N>()
    }

    /// Whether the pin samples high.
    #[inline(always)]
    pub fn is_high(&self) -> bool {
        self.level().is_high()
    }

    /// Whether the pin samples low.
    #[inline(always)]
    pub fn is_low(&self) -> bool {
        self.level().is_low()
    }
}

impl<const N: u8, MODE> ErrorType for Pin<N, MODE> {
    type Error = Infallible;
}

impl<const N: u8, KIND> OutputPin for Pin<N, Output<KIND>> {
    #[inline(always)]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        digital::write_fast::<N>(Level::Low);
        Ok(())
    }

    #[inline(always)]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        digital::write_fast::<N>(Level::High);
        Ok(())
    }
}

impl<const N: u8, KIND> StatefulOutputPin for Pin<N, Output<KIND>> {
    #[inline(always)]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(digital::read_back_fast::<N>().is_high())
    }

    #[inline(always)]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(digital::read_back_fast::<N>().is_low())
    }

    #[inline(always)]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        digital::toggle_fast::<N>();
        Ok(())
    }
}

impl<const N: u8> InputPin for Pin<N, Input> {
    #[inline(always)]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(digital::read_fast::<N>().is_high())
    }

    #[inline(always)]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(digital::read_fast::<N>().is_low())
    }
}

#[cfg(feature = "embedded-hal-02")]
mod compat_02 {
    use super::*;
    use embedded_hal_02::digital::v2 as hal02;

    impl<const N: u8, KIND> hal02::OutputPin for Pin<N, Output<KIND>> {
        type Error = void::Void;

        #[inline(always)]
        fn set_low(&mut self) -> Result<(), Self::Error> {
            digital::write_fast::<N>(Level::Low);
            Ok(())
        }

        #[inline(always)]
        fn set_high(&mut self) -> Result<(), Self::Error> {
            digital::write_fast::<N>(Level::High);
            Ok(())
        }
    }

    impl<const N: u8, KIND> hal02::StatefulOutputPin for Pin<N, Output<KIND>> {
        #[inline(always)]
        fn is_set_high(&self) -> Result<bool, Self::Error> {
            Ok(digital::read_back_fast::<N>().is_high())
        }

        #[inline(always)]
        fn is_set_low(&self) -> Result<bool, Self::Error> {
            Ok(digital::read_back_fast::<N>().is_low())
        }
    }

    impl<const N: u8, KIND> hal02::ToggleableOutputPin for Pin<N, Output<KIND>> {
        type Error = void::Void;

        #[inline(always)]
        fn toggle(&mut self) -> Result<(), Self::Error> {
            digital::toggle_fast::<N>();
            Ok(())
        }
    }

    impl<const N: u8> hal02::InputPin for Pin<N, Input> {
        type Error = void::Void;

        #[inline(always)]
        fn is_high(&self) -> Result<bool, Self::Error> {
            Ok(digital::read_fast::<N>().is_high())
        }

        #[inline(always)]
        fn is_low(&self) -> Result<bool, Self::Error> {
            Ok(digital::read_fast::<N>().is_low())
        }
    }
}

macro_rules! uno32_pins {
    ($($field:ident: $num:literal),* $(,)?) => {
        /// Every digital pin of the Uno32 header, each owned exactly once.
        ///
        /// Pins start in the reset direction (input).
        pub struct Pins {
            $(
                #[doc = concat!("Digital pin ", stringify!($num), ".")]
                pub $field: Pin<$num, Input>,
            )*
        }

        impl Pins {
            const fn new() -> Self {
                Pins {
                    $($field: Pin::new(),)*
                }
            }
        }
    };
}

uno32_pins! {
    p0: 0, p1: 1, p2: 2, p3: 3, p4: 4, p5: 5, p6: 6, p7: 7,
    p8: 8, p9: 9, p10: 10, p11: 11, p12: 12, p13: 13, p14: 14, p15: 15,
    p16: 16, p17: 17, p18: 18, p19: 19, p20: 20, p21: 21, p22: 22, p23: 23,
    p24: 24, p25: 25, p26: 26, p27: 27, p28: 28, p29: 29, p30: 30, p31: 31,
    p32: 32, p33: 33, p34: 34, p35: 35, p36: 36, p37: 37, p38: 38, p39: 39,
    p40: 40, p41: 41, p42: 42, p43: 43,
}

static PINS_TAKEN: AtomicBool = AtomicBool::new(false);

impl Pins {
    /// Returns the pins the first time it is called, `None` afterwards.
    pub fn take() -> Option<Self> {
        if PINS_TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Pins::new())
        }
    }

    /// Conjures the pins regardless of ownership.
    ///
    /// # Safety
    ///
    /// Any pin still held elsewhere is now aliased; the caller is
    /// responsible for keeping uses of the duplicates apart.
    pub unsafe fn steal() -> Self {
        PINS_TAKEN.store(true, Ordering::Release);
        Pins::new()
    }
}
