//! Controller register and command definitions
//!
//! The two supported controllers speak different dialects over the same
//! 4-wire bus:
//!
//! - **ILI9225**: every access is a 16-bit register index (DC low) followed by
//!   one 16-bit value (DC high). See [`ili9225`].
//! - **ILI9341**: MIPI DCS style 8-bit commands (DC low) followed by zero or
//!   more parameter bytes (DC high). See [`ili9341`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9225::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, None::<MockPin>);
//! // Point the ILI9225 RAM cursor at (10, 20) and write one red pixel
//! let _ = interface.send_command16(command::ili9225::RAM_ADDR_SET1);
//! let _ = interface.send_data16(10);
//! let _ = interface.send_command16(command::ili9225::RAM_ADDR_SET2);
//! let _ = interface.send_data16(20);
//! let _ = interface.send_command16(command::ili9225::GRAM_DATA_REG);
//! let _ = interface.send_data16(0xF800);
//! ```

/// ILI9225 register indices
///
/// Registers are 16 bits wide and addressed with a 16-bit index.
pub mod ili9225 {
    /// Driver output control (0x01)
    ///
    /// Number of driving lines and source/gate scan direction.
    pub const DRIVER_OUTPUT_CTRL: u16 = 0x01;
    /// LCD AC driving control (0x02)
    pub const LCD_AC_DRIVING_CTRL: u16 = 0x02;
    /// Entry mode (0x03)
    ///
    /// - Bit 12 (BGR): swap red and blue on write
    /// - Bit 5 (I/D1): vertical address increments
    /// - Bit 4 (I/D0): horizontal address increments
    /// - Bit 3 (AM): address update direction (0 = horizontal first)
    pub const ENTRY_MODE: u16 = 0x03;
    /// Display control 1 (0x07)
    pub const DISP_CTRL1: u16 = 0x07;
    /// Blank period control 1 (0x08)
    pub const BLANK_PERIOD_CTRL1: u16 = 0x08;
    /// Frame cycle control (0x0B)
    pub const FRAME_CYCLE_CTRL: u16 = 0x0B;
    /// Interface control (0x0C)
    pub const INTERFACE_CTRL: u16 = 0x0C;
    /// Oscillator control (0x0F)
    pub const OSC_CTRL: u16 = 0x0F;
    /// Power control 1 (0x10)
    pub const POWER_CTRL1: u16 = 0x10;
    /// Power control 2 (0x11)
    pub const POWER_CTRL2: u16 = 0x11;
    /// Power control 3 (0x12)
    pub const POWER_CTRL3: u16 = 0x12;
    /// Power control 4 (0x13)
    pub const POWER_CTRL4: u16 = 0x13;
    /// Power control 5 (0x14)
    pub const POWER_CTRL5: u16 = 0x14;
    /// VCI recycling (0x15)
    pub const VCI_RECYCLING: u16 = 0x15;
    /// RAM address set 1, horizontal GRAM address (0x20)
    pub const RAM_ADDR_SET1: u16 = 0x20;
    /// RAM address set 2, vertical GRAM address (0x21)
    pub const RAM_ADDR_SET2: u16 = 0x21;
    /// GRAM data register (0x22)
    ///
    /// Every 16-bit word written after selecting this register is stored at the
    /// RAM cursor, which then auto-increments per the entry mode.
    pub const GRAM_DATA_REG: u16 = 0x22;
    /// Gate scan control (0x30)
    pub const GATE_SCAN_CTRL: u16 = 0x30;
    /// Vertical scroll control 1 (0x31)
    pub const VERTICAL_SCROLL_CTRL1: u16 = 0x31;
    /// Vertical scroll control 2 (0x32)
    pub const VERTICAL_SCROLL_CTRL2: u16 = 0x32;
    /// Vertical scroll control 3 (0x33)
    pub const VERTICAL_SCROLL_CTRL3: u16 = 0x33;
    /// Partial driving position 1 (0x34)
    pub const PARTIAL_DRIVING_POS1: u16 = 0x34;
    /// Partial driving position 2 (0x35)
    pub const PARTIAL_DRIVING_POS2: u16 = 0x35;
    /// Horizontal window address 1, window end (0x36)
    pub const HORIZONTAL_WINDOW_ADDR1: u16 = 0x36;
    /// Horizontal window address 2, window start (0x37)
    pub const HORIZONTAL_WINDOW_ADDR2: u16 = 0x37;
    /// Vertical window address 1, window end (0x38)
    pub const VERTICAL_WINDOW_ADDR1: u16 = 0x38;
    /// Vertical window address 2, window start (0x39)
    pub const VERTICAL_WINDOW_ADDR2: u16 = 0x39;
    /// Gamma control 1 (0x50); gamma registers run through 0x59
    pub const GAMMA_CTRL1: u16 = 0x50;
    /// Gamma control 2 (0x51)
    pub const GAMMA_CTRL2: u16 = 0x51;
    /// Gamma control 3 (0x52)
    pub const GAMMA_CTRL3: u16 = 0x52;
    /// Gamma control 4 (0x53)
    pub const GAMMA_CTRL4: u16 = 0x53;
    /// Gamma control 5 (0x54)
    pub const GAMMA_CTRL5: u16 = 0x54;
    /// Gamma control 6 (0x55)
    pub const GAMMA_CTRL6: u16 = 0x55;
    /// Gamma control 7 (0x56)
    pub const GAMMA_CTRL7: u16 = 0x56;
    /// Gamma control 8 (0x57)
    pub const GAMMA_CTRL8: u16 = 0x57;
    /// Gamma control 9 (0x58)
    pub const GAMMA_CTRL9: u16 = 0x58;
    /// Gamma control 10 (0x59)
    pub const GAMMA_CTRL10: u16 = 0x59;
    /// Undocumented register written before display power changes (0xFF)
    pub const POWER_SEQUENCE_PREFIX: u16 = 0xFF;

    /// Entry mode BGR bit
    pub const ENTRY_MODE_BGR: u16 = 0x1000;
}

/// ILI9341 DCS commands
pub mod ili9341 {
    /// Software reset (0x01)
    pub const SOFTWARE_RESET: u8 = 0x01;
    /// Enter sleep mode (0x10)
    pub const SLEEP_IN: u8 = 0x10;
    /// Exit sleep mode (0x11); needs 120 ms before the next command
    pub const SLEEP_OUT: u8 = 0x11;
    /// Gamma set (0x26)
    pub const GAMMA_SET: u8 = 0x26;
    /// Display off (0x28)
    pub const DISPLAY_OFF: u8 = 0x28;
    /// Display on (0x29)
    pub const DISPLAY_ON: u8 = 0x29;
    /// Column address set (0x2A)
    ///
    /// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    /// Page address set (0x2B)
    ///
    /// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    /// Memory write (0x2C)
    pub const MEMORY_WRITE: u8 = 0x2C;
    /// Memory access control, MADCTL (0x36)
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    /// Vertical scrolling start address (0x37)
    pub const VERTICAL_SCROLL_START: u8 = 0x37;
    /// Pixel format set (0x3A)
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;
    /// Frame rate control, normal mode (0xB1)
    pub const FRAME_RATE_CTRL: u8 = 0xB1;
    /// Display function control (0xB6)
    pub const DISPLAY_FUNCTION_CTRL: u8 = 0xB6;
    /// Power control 1 (0xC0)
    pub const POWER_CTRL1: u8 = 0xC0;
    /// Power control 2 (0xC1)
    pub const POWER_CTRL2: u8 = 0xC1;
    /// VCOM control 1 (0xC5)
    pub const VCOM_CTRL1: u8 = 0xC5;
    /// VCOM control 2 (0xC7)
    pub const VCOM_CTRL2: u8 = 0xC7;
    /// Power control A (0xCB)
    pub const POWER_CTRL_A: u8 = 0xCB;
    /// Power control B (0xCF)
    pub const POWER_CTRL_B: u8 = 0xCF;
    /// Positive gamma correction (0xE0)
    pub const POSITIVE_GAMMA: u8 = 0xE0;
    /// Negative gamma correction (0xE1)
    pub const NEGATIVE_GAMMA: u8 = 0xE1;
    /// Driver timing control A (0xE8)
    pub const DRIVER_TIMING_A: u8 = 0xE8;
    /// Driver timing control B (0xEA)
    pub const DRIVER_TIMING_B: u8 = 0xEA;
    /// Power on sequence control (0xED)
    pub const POWER_ON_SEQUENCE: u8 = 0xED;
    /// Undocumented vendor command used by most init tables (0xEF)
    pub const VENDOR_EF: u8 = 0xEF;
    /// Enable 3 gamma control (0xF2)
    pub const ENABLE_3G: u8 = 0xF2;
    /// Pump ratio control (0xF7)
    pub const PUMP_RATIO_CTRL: u8 = 0xF7;

    /// MADCTL row address order (bottom to top)
    pub const MADCTL_MY: u8 = 0x80;
    /// MADCTL column address order (right to left)
    pub const MADCTL_MX: u8 = 0x40;
    /// MADCTL row/column exchange
    pub const MADCTL_MV: u8 = 0x20;
    /// MADCTL BGR color filter order
    pub const MADCTL_BGR: u8 = 0x08;
}
