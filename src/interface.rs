//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with ILI9225 / ILI9341 controllers over a 4-wire SPI bus.
//!
//! ## Hardware Requirements
//!
//! - SPI bus (MOSI + SCK), mode 0
//! - GPIO pins:
//!   - **DC**: Data/Command select (output, low = command)
//!   - **RST**: Reset (output, active low)
//!   - **CS**: Chip select (output, active low)
//!   - **LED**: Backlight (output, optional)
//!
//! Chip select is driven by the interface rather than the SPI driver so that a
//! whole batch of drawing commands can run inside one bus transaction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ili9225::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! // SPI bus, DC, RST, CS and an optional backlight pin
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, Some(MockPin));
//!
//! let _ = interface.begin_transaction();
//! let _ = interface.send_command(0x2C);
//! let _ = interface.send_data16(0xF800);
//! let _ = interface.end_transaction();
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the display controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus that can frame commands and data.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (a parallel bus, bit-banged SPI, a shared bus manager),
/// implement this trait on your own type.
///
/// Only [`begin_transaction`](Self::begin_transaction) and
/// [`end_transaction`](Self::end_transaction) touch chip select. The driver
/// nests its own calls so that one drawing operation is one transaction.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send an 8-bit command (DC low)
    #[allow(clippy::type_complexity)]
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a 16-bit register index (DC low), most significant byte first
    #[allow(clippy::type_complexity)]
    fn send_command16(&mut self, command: u16) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes (DC high)
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send one 16-bit data word (DC high), most significant byte first
    #[allow(clippy::type_complexity)]
    fn send_data16(&mut self, value: u16) -> InterfaceResult<(), Self::Error> {
        self.send_data(&value.to_be_bytes())
    }

    /// Send the same 16-bit data word `count` times
    ///
    /// Used to flood an address window with one color. Implementations are
    /// free to batch the words into larger transfers.
    #[allow(clippy::type_complexity)]
    fn send_data16_repeated(&mut self, value: u16, count: u32) -> InterfaceResult<(), Self::Error> {
        for _ in 0..count {
            self.send_data16(value)?;
        }
        Ok(())
    }

    /// Assert chip select and claim the bus
    #[allow(clippy::type_complexity)]
    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Finish pending transfers and release chip select
    #[allow(clippy::type_complexity)]
    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST high, wait at least 1ms
    /// 2. Set RST low, wait at least 10ms
    /// 3. Set RST high, wait at least 50ms
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D);

    /// Switch the backlight
    ///
    /// `brightness` is a hint for implementations that drive the LED through
    /// PWM; a plain GPIO backlight only honours `on`.
    #[allow(clippy::type_complexity)]
    fn set_backlight(&mut self, on: bool, brightness: u8) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Number of pixels staged per SPI write when flooding a window
pub const FILL_CHUNK_PIXELS: usize = 32;

/// Hardware interface implementation over SPI
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
///
/// All pins must share one error type.
pub struct Interface<SPI, DC, RST, CS, BL> {
    /// SPI bus for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Chip select pin (active low)
    cs: CS,
    /// Backlight pin, if wired
    backlight: Option<BL>,
    /// Last requested brightness
    brightness: u8,
}

impl<SPI, DC, RST, CS, BL> Interface<SPI, DC, RST, CS, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `cs` - Chip select pin (output, active low)
    /// * `backlight` - Backlight pin, `None` if the LED is hard-wired
    pub fn new(spi: SPI, dc: DC, rst: RST, cs: CS, backlight: Option<BL>) -> Self {
        Self {
            spi,
            dc,
            rst,
            cs,
            backlight,
            brightness: u8::MAX,
        }
    }

    /// Last brightness passed to [`DisplayInterface::set_backlight`]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, RST, CS, Option<BL>) {
        (self.spi, self.dc, self.rst, self.cs, self.backlight)
    }
}

impl<SPI, DC, RST, CS, BL, PinErr> DisplayInterface for Interface<SPI, DC, RST, CS, BL>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_command16(&mut self, command: u16) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi
            .write(&command.to_be_bytes())
            .map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data16_repeated(&mut self, value: u16, count: u32) -> InterfaceResult<(), Self::Error> {
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&value.to_be_bytes());
        }

        self.dc.set_high().map_err(InterfaceError::Pin)?;
        let mut remaining = count as usize;
        while remaining > 0 {
            let pixels = remaining.min(FILL_CHUNK_PIXELS);
            self.spi
                .write(&chunk[..pixels * 2])
                .map_err(InterfaceError::Spi)?;
            remaining -= pixels;
        }
        Ok(())
    }

    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: HIGH -> 1ms -> LOW -> 10ms -> HIGH -> 50ms
        let _ = self.rst.set_high();
        delay.delay_ms(1);
        let _ = self.rst.set_low();
        delay.delay_ms(10);
        let _ = self.rst.set_high();
        delay.delay_ms(50);
    }

    fn set_backlight(&mut self, on: bool, brightness: u8) -> InterfaceResult<(), Self::Error> {
        self.brightness = brightness;
        match self.backlight.as_mut() {
            Some(pin) if on => pin.set_high().map_err(InterfaceError::Pin),
            Some(pin) => pin.set_low().map_err(InterfaceError::Pin),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Wire {
        Spi(u8),
        Flush,
        Pin(&'static str, bool),
    }

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi<'a>(&'a RefCell<Vec<Wire>>);
    struct MockPin<'a>(&'static str, &'a RefCell<Vec<Wire>>);

    impl SpiErrorType for MockSpi<'_> {
        type Error = MockError;
    }

    impl SpiBus for MockSpi<'_> {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            let wire = words.iter().map(|b| Wire::Spi(*b));
            self.0.borrow_mut().extend(wire);
            Ok(())
        }
        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Wire::Flush);
            Ok(())
        }
    }

    impl ErrorType for MockPin<'_> {
        type Error = MockError;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.1.borrow_mut().push(Wire::Pin(self.0, false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.1.borrow_mut().push(Wire::Pin(self.0, true));
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn interface(
        log: &RefCell<Vec<Wire>>,
    ) -> Interface<MockSpi<'_>, MockPin<'_>, MockPin<'_>, MockPin<'_>, MockPin<'_>> {
        Interface::new(
            MockSpi(log),
            MockPin("dc", log),
            MockPin("rst", log),
            MockPin("cs", log),
            Some(MockPin("led", log)),
        )
    }

    #[test]
    fn test_command16_is_big_endian_with_dc_low() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log);
        iface.send_command16(0x0022).unwrap();
        assert_eq!(
            *log.borrow(),
            [Wire::Pin("dc", false), Wire::Spi(0x00), Wire::Spi(0x22)]
        );
    }

    #[test]
    fn test_data16_is_big_endian_with_dc_high() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log);
        iface.send_data16(0xF81F).unwrap();
        assert_eq!(
            *log.borrow(),
            [Wire::Pin("dc", true), Wire::Spi(0xF8), Wire::Spi(0x1F)]
        );
    }

    #[test]
    fn test_repeated_words_cover_exact_count() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log);
        let count = FILL_CHUNK_PIXELS as u32 * 2 + 5;
        iface.send_data16_repeated(0xABCD, count).unwrap();
        let bytes: Vec<u8> = log
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Wire::Spi(b) => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!(bytes.len(), count as usize * 2);
        assert!(bytes.chunks(2).all(|pair| pair == [0xAB, 0xCD]));
    }

    #[test]
    fn test_transaction_toggles_chip_select_and_flushes() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log);
        iface.begin_transaction().unwrap();
        iface.end_transaction().unwrap();
        assert_eq!(
            *log.borrow(),
            [Wire::Pin("cs", false), Wire::Flush, Wire::Pin("cs", true)]
        );
    }

    #[test]
    fn test_reset_pulses_reset_pin() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log);
        iface.reset(&mut MockDelay);
        assert_eq!(
            *log.borrow(),
            [
                Wire::Pin("rst", true),
                Wire::Pin("rst", false),
                Wire::Pin("rst", true)
            ]
        );
    }

    #[test]
    fn test_backlight_drives_pin_and_records_brightness() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log);
        iface.set_backlight(true, 128).unwrap();
        iface.set_backlight(false, 0).unwrap();
        assert_eq!(iface.brightness(), 0);
        assert_eq!(
            *log.borrow(),
            [Wire::Pin("led", true), Wire::Pin("led", false)]
        );
    }
}
