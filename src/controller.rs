//! Controller dialects
//!
//! [`Controller`] knows how each supported chip is powered up, how an
//! [`AddressWindow`] is programmed and how a single pixel is addressed. It
//! speaks only through a [`DisplayInterface`] and never touches chip select;
//! bus transactions are owned by [`Display`](crate::display::Display).

use embedded_hal::delay::DelayNs;

use crate::command::{ili9225, ili9341};
use crate::config::{ColorOrder, Dimensions};
use crate::interface::DisplayInterface;
use crate::rotation::AutoIncrement;
use crate::window::AddressWindow;

type ControllerResult<I> = core::result::Result<(), <I as DisplayInterface>::Error>;

/// Supported display controllers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Controller {
    /// ILI9225, 176x220, 16-bit register interface
    #[default]
    Ili9225,
    /// ILI9341, 240x320, MIPI DCS command interface
    Ili9341,
}

/// One step of a power-on sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// ILI9225 register write: 16-bit index, 16-bit value
    Register(u16, u16),
    /// ILI9341 command with parameter bytes
    Command(u8, &'static [u8]),
    /// Wait before the next step
    DelayMs(u32),
}

use InitStep::{Command, DelayMs, Register};

/// ILI9225 power-on sequence
pub const ILI9225_INIT: &[InitStep] = &[
    // Power off everything before the power-up sequence
    Register(ili9225::POWER_CTRL1, 0x0000),
    Register(ili9225::POWER_CTRL2, 0x0000),
    Register(ili9225::POWER_CTRL3, 0x0000),
    Register(ili9225::POWER_CTRL4, 0x0000),
    Register(ili9225::POWER_CTRL5, 0x0000),
    DelayMs(40),
    Register(ili9225::POWER_CTRL2, 0x0018),
    Register(ili9225::POWER_CTRL3, 0x6121),
    Register(ili9225::POWER_CTRL4, 0x006F),
    Register(ili9225::POWER_CTRL5, 0x495F),
    Register(ili9225::POWER_CTRL1, 0x0800),
    DelayMs(10),
    Register(ili9225::POWER_CTRL2, 0x103B),
    DelayMs(50),
    Register(ili9225::DRIVER_OUTPUT_CTRL, 0x011C),
    Register(ili9225::LCD_AC_DRIVING_CTRL, 0x0100),
    Register(ili9225::ENTRY_MODE, 0x1038),
    Register(ili9225::DISP_CTRL1, 0x0000),
    Register(ili9225::BLANK_PERIOD_CTRL1, 0x0808),
    Register(ili9225::FRAME_CYCLE_CTRL, 0x1100),
    Register(ili9225::INTERFACE_CTRL, 0x0000),
    Register(ili9225::OSC_CTRL, 0x0D01),
    Register(ili9225::VCI_RECYCLING, 0x0020),
    Register(ili9225::RAM_ADDR_SET1, 0x0000),
    Register(ili9225::RAM_ADDR_SET2, 0x0000),
    Register(ili9225::GATE_SCAN_CTRL, 0x0000),
    Register(ili9225::VERTICAL_SCROLL_CTRL1, 0x00DB),
    Register(ili9225::VERTICAL_SCROLL_CTRL2, 0x0000),
    Register(ili9225::VERTICAL_SCROLL_CTRL3, 0x0000),
    Register(ili9225::PARTIAL_DRIVING_POS1, 0x00DB),
    Register(ili9225::PARTIAL_DRIVING_POS2, 0x0000),
    Register(ili9225::HORIZONTAL_WINDOW_ADDR1, 0x00AF),
    Register(ili9225::HORIZONTAL_WINDOW_ADDR2, 0x0000),
    Register(ili9225::VERTICAL_WINDOW_ADDR1, 0x00DB),
    Register(ili9225::VERTICAL_WINDOW_ADDR2, 0x0000),
    Register(ili9225::GAMMA_CTRL1, 0x0000),
    Register(ili9225::GAMMA_CTRL2, 0x0808),
    Register(ili9225::GAMMA_CTRL3, 0x080A),
    Register(ili9225::GAMMA_CTRL4, 0x000A),
    Register(ili9225::GAMMA_CTRL5, 0x0A08),
    Register(ili9225::GAMMA_CTRL6, 0x0808),
    Register(ili9225::GAMMA_CTRL7, 0x0000),
    Register(ili9225::GAMMA_CTRL8, 0x0A00),
    Register(ili9225::GAMMA_CTRL9, 0x0710),
    Register(ili9225::GAMMA_CTRL10, 0x0710),
    Register(ili9225::DISP_CTRL1, 0x0012),
    DelayMs(50),
    Register(ili9225::DISP_CTRL1, 0x1017),
];

/// ILI9341 power-on sequence
pub const ILI9341_INIT: &[InitStep] = &[
    Command(ili9341::SOFTWARE_RESET, &[]),
    DelayMs(150),
    Command(ili9341::VENDOR_EF, &[0x03, 0x80, 0x02]),
    Command(ili9341::POWER_CTRL_B, &[0x00, 0xC1, 0x30]),
    Command(ili9341::POWER_ON_SEQUENCE, &[0x64, 0x03, 0x12, 0x81]),
    Command(ili9341::DRIVER_TIMING_A, &[0x85, 0x00, 0x78]),
    Command(ili9341::POWER_CTRL_A, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    Command(ili9341::PUMP_RATIO_CTRL, &[0x20]),
    Command(ili9341::DRIVER_TIMING_B, &[0x00, 0x00]),
    Command(ili9341::POWER_CTRL1, &[0x23]),
    Command(ili9341::POWER_CTRL2, &[0x10]),
    Command(ili9341::VCOM_CTRL1, &[0x3E, 0x28]),
    Command(ili9341::VCOM_CTRL2, &[0x86]),
    // Patched with the configured color order when replayed
    Command(ili9341::MEMORY_ACCESS_CONTROL, &[0x48]),
    Command(ili9341::VERTICAL_SCROLL_START, &[0x00]),
    // 16 bits per pixel
    Command(ili9341::PIXEL_FORMAT_SET, &[0x55]),
    Command(ili9341::FRAME_RATE_CTRL, &[0x00, 0x18]),
    Command(ili9341::DISPLAY_FUNCTION_CTRL, &[0x08, 0x82, 0x27]),
    Command(ili9341::ENABLE_3G, &[0x00]),
    Command(ili9341::GAMMA_SET, &[0x01]),
    Command(
        ili9341::POSITIVE_GAMMA,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    Command(
        ili9341::NEGATIVE_GAMMA,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    Command(ili9341::SLEEP_OUT, &[]),
    DelayMs(120),
    Command(ili9341::DISPLAY_ON, &[]),
    DelayMs(150),
];

impl Controller {
    /// Native panel size in portrait orientation
    pub const fn native_size(self) -> Dimensions {
        match self {
            Self::Ili9225 => Dimensions {
                width: 176,
                height: 220,
            },
            Self::Ili9341 => Dimensions {
                width: 240,
                height: 320,
            },
        }
    }

    /// Power-on sequence for this controller
    pub const fn init_sequence(self) -> &'static [InitStep] {
        match self {
            Self::Ili9225 => ILI9225_INIT,
            Self::Ili9341 => ILI9341_INIT,
        }
    }

    /// Replay the power-on sequence
    ///
    /// Color order bits in the entry mode (ILI9225) and memory access control
    /// (ILI9341) values are replaced by `order`.
    pub(crate) fn init<I, D>(
        self,
        interface: &mut I,
        delay: &mut D,
        order: ColorOrder,
    ) -> ControllerResult<I>
    where
        I: DisplayInterface,
        D: DelayNs,
    {
        for step in self.init_sequence() {
            match *step {
                Register(ili9225::ENTRY_MODE, value) => {
                    let value = (value & !ili9225::ENTRY_MODE_BGR) | entry_mode_order(order);
                    write_register(interface, ili9225::ENTRY_MODE, value)?;
                }
                Register(register, value) => write_register(interface, register, value)?,
                Command(ili9341::MEMORY_ACCESS_CONTROL, _) => {
                    interface.send_command(ili9341::MEMORY_ACCESS_CONTROL)?;
                    interface.send_data(&[madctl(AutoIncrement::L2rTopDown, order)])?;
                }
                Command(command, params) => {
                    interface.send_command(command)?;
                    if !params.is_empty() {
                        interface.send_data(params)?;
                    }
                }
                DelayMs(ms) => delay.delay_ms(ms),
            }
        }
        Ok(())
    }

    /// Program an address window and select the GRAM data register
    ///
    /// After this returns every data word lands in the window, following the
    /// window's auto-increment mode.
    pub(crate) fn write_window<I>(
        self,
        interface: &mut I,
        window: &AddressWindow,
        order: ColorOrder,
    ) -> ControllerResult<I>
    where
        I: DisplayInterface,
    {
        let AddressWindow {
            x0,
            y0,
            x1,
            y1,
            mode,
        } = *window;
        match self {
            Self::Ili9225 => {
                let entry = entry_mode_order(order) | (u16::from(mode.bits()) << 3);
                write_register(interface, ili9225::ENTRY_MODE, entry)?;
                write_register(interface, ili9225::HORIZONTAL_WINDOW_ADDR1, x1)?;
                write_register(interface, ili9225::HORIZONTAL_WINDOW_ADDR2, x0)?;
                write_register(interface, ili9225::VERTICAL_WINDOW_ADDR1, y1)?;
                write_register(interface, ili9225::VERTICAL_WINDOW_ADDR2, y0)?;
                // The cursor starts at the corner the increment directions move away from
                let (cursor_x, cursor_y) = match mode.bits() >> 1 {
                    0 => (x1, y1),
                    1 => (x0, y1),
                    2 => (x1, y0),
                    _ => (x0, y0),
                };
                write_register(interface, ili9225::RAM_ADDR_SET1, cursor_x)?;
                write_register(interface, ili9225::RAM_ADDR_SET2, cursor_y)?;
                interface.send_command16(ili9225::GRAM_DATA_REG)
            }
            Self::Ili9341 => {
                interface.send_command(ili9341::MEMORY_ACCESS_CONTROL)?;
                interface.send_data(&[madctl(mode, order)])?;
                // A mirrored axis counts addresses from the far edge of GRAM
                let Dimensions { width, height } = self.native_size();
                let xs = if mode.x_increments() {
                    (x0, x1)
                } else {
                    mirror((x0, x1), width)
                };
                let ys = if mode.y_increments() {
                    (y0, y1)
                } else {
                    mirror((y0, y1), height)
                };
                // With MV set the controller's columns run along the panel's y axis
                let (columns, pages) = if mode.vertical_first() {
                    (ys, xs)
                } else {
                    (xs, ys)
                };
                write_range(interface, ili9341::COLUMN_ADDRESS_SET, columns)?;
                write_range(interface, ili9341::PAGE_ADDRESS_SET, pages)?;
                interface.send_command(ili9341::MEMORY_WRITE)
            }
        }
    }

    /// Restore the full-panel window with the default scan direction
    pub(crate) fn reset_window<I>(
        self,
        interface: &mut I,
        panel: Dimensions,
        order: ColorOrder,
    ) -> ControllerResult<I>
    where
        I: DisplayInterface,
    {
        let x_end = panel.width.saturating_sub(1);
        let y_end = panel.height.saturating_sub(1);
        match self {
            Self::Ili9225 => {
                write_register(interface, ili9225::HORIZONTAL_WINDOW_ADDR1, x_end)?;
                write_register(interface, ili9225::HORIZONTAL_WINDOW_ADDR2, 0)?;
                write_register(interface, ili9225::VERTICAL_WINDOW_ADDR1, y_end)?;
                write_register(interface, ili9225::VERTICAL_WINDOW_ADDR2, 0)
            }
            Self::Ili9341 => {
                interface.send_command(ili9341::MEMORY_ACCESS_CONTROL)?;
                interface.send_data(&[madctl(AutoIncrement::L2rTopDown, order)])?;
                write_range(interface, ili9341::COLUMN_ADDRESS_SET, (0, x_end))?;
                write_range(interface, ili9341::PAGE_ADDRESS_SET, (0, y_end))
            }
        }
    }

    /// Write one pixel at a physical coordinate
    ///
    /// Assumes the default scan direction left by [`Self::reset_window`].
    pub(crate) fn write_pixel<I>(
        self,
        interface: &mut I,
        x: u16,
        y: u16,
        color: u16,
    ) -> ControllerResult<I>
    where
        I: DisplayInterface,
    {
        match self {
            Self::Ili9225 => {
                write_register(interface, ili9225::RAM_ADDR_SET1, x)?;
                write_register(interface, ili9225::RAM_ADDR_SET2, y)?;
                write_register(interface, ili9225::GRAM_DATA_REG, color)
            }
            Self::Ili9341 => {
                write_range(interface, ili9341::COLUMN_ADDRESS_SET, (x, x))?;
                write_range(interface, ili9341::PAGE_ADDRESS_SET, (y, y))?;
                interface.send_command(ili9341::MEMORY_WRITE)?;
                interface.send_data16(color)
            }
        }
    }

    /// Power the panel up and start scanning
    pub(crate) fn display_on<I, D>(self, interface: &mut I, delay: &mut D) -> ControllerResult<I>
    where
        I: DisplayInterface,
        D: DelayNs,
    {
        match self {
            Self::Ili9225 => {
                write_register(interface, ili9225::POWER_SEQUENCE_PREFIX, 0x0000)?;
                write_register(interface, ili9225::POWER_CTRL1, 0x0000)?;
                delay.delay_ms(50);
                write_register(interface, ili9225::DISP_CTRL1, 0x1017)?;
                delay.delay_ms(200);
            }
            Self::Ili9341 => {
                interface.send_command(ili9341::SLEEP_OUT)?;
                delay.delay_ms(120);
                interface.send_command(ili9341::DISPLAY_ON)?;
                delay.delay_ms(20);
            }
        }
        Ok(())
    }

    /// Stop scanning and put the panel into standby
    pub(crate) fn display_off<I, D>(self, interface: &mut I, delay: &mut D) -> ControllerResult<I>
    where
        I: DisplayInterface,
        D: DelayNs,
    {
        match self {
            Self::Ili9225 => {
                write_register(interface, ili9225::POWER_SEQUENCE_PREFIX, 0x0000)?;
                write_register(interface, ili9225::DISP_CTRL1, 0x0000)?;
                delay.delay_ms(50);
                write_register(interface, ili9225::POWER_CTRL1, 0x0003)?;
                delay.delay_ms(200);
            }
            Self::Ili9341 => {
                interface.send_command(ili9341::DISPLAY_OFF)?;
                delay.delay_ms(20);
                interface.send_command(ili9341::SLEEP_IN)?;
                delay.delay_ms(120);
            }
        }
        Ok(())
    }
}

/// Write one 16-bit ILI9225 register
fn write_register<I: DisplayInterface>(
    interface: &mut I,
    register: u16,
    value: u16,
) -> ControllerResult<I> {
    interface.send_command16(register)?;
    interface.send_data16(value)
}

/// Write an ILI9341 start/end address pair
fn write_range<I: DisplayInterface>(
    interface: &mut I,
    command: u8,
    (start, end): (u16, u16),
) -> ControllerResult<I> {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    interface.send_command(command)?;
    interface.send_data(&[s_hi, s_lo, e_hi, e_lo])
}

/// Reflect an inclusive range across an axis of `size` addresses
const fn mirror((start, end): (u16, u16), size: u16) -> (u16, u16) {
    let last = size.saturating_sub(1);
    (last.saturating_sub(end), last.saturating_sub(start))
}

const fn entry_mode_order(order: ColorOrder) -> u16 {
    match order {
        ColorOrder::Bgr => ili9225::ENTRY_MODE_BGR,
        ColorOrder::Rgb => 0,
    }
}

/// ILI9341 memory access control byte for a physical scan direction
///
/// Physical coordinates are those of the default `0x48` setting, where the
/// panel is column-mirrored: x increases with MX set. MX and MY also move
/// where each address lands, so windows written with either bit flipped
/// relative to the default must mirror their ranges (see `write_window`).
pub(crate) const fn madctl(mode: AutoIncrement, order: ColorOrder) -> u8 {
    let mut value = 0;
    if !mode.y_increments() {
        value |= ili9341::MADCTL_MY;
    }
    if mode.x_increments() {
        value |= ili9341::MADCTL_MX;
    }
    if mode.vertical_first() {
        value |= ili9341::MADCTL_MV;
    }
    if matches!(order, ColorOrder::Bgr) {
        value |= ili9341::MADCTL_BGR;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, MockDelay, MockInterface};
    use alloc::vec;

    #[test]
    fn test_native_sizes() {
        let Dimensions { width, height } = Controller::Ili9225.native_size();
        assert_eq!((width, height), (176, 220));
        let Dimensions { width, height } = Controller::Ili9341.native_size();
        assert_eq!((width, height), (240, 320));
    }

    #[test]
    fn test_ili9225_init_replays_table() {
        let mut iface = MockInterface::new();
        let mut delay = MockDelay::default();
        Controller::Ili9225
            .init(&mut iface, &mut delay, ColorOrder::Bgr)
            .unwrap();

        let writes = iface.register_writes();
        let expected = ILI9225_INIT
            .iter()
            .filter(|step| matches!(step, Register(..)))
            .count();
        assert_eq!(writes.len(), expected);
        assert_eq!(writes[0], (ili9225::POWER_CTRL1, 0x0000));
        assert!(writes.contains(&(ili9225::ENTRY_MODE, 0x1038)));
        assert_eq!(writes.last(), Some(&(ili9225::DISP_CTRL1, 0x1017)));
        assert_eq!(delay.total_ms, 40 + 10 + 50 + 50);
    }

    #[test]
    fn test_ili9225_init_honours_rgb_order() {
        let mut iface = MockInterface::new();
        Controller::Ili9225
            .init(&mut iface, &mut MockDelay::default(), ColorOrder::Rgb)
            .unwrap();
        let writes = iface.register_writes();
        assert!(writes.contains(&(ili9225::ENTRY_MODE, 0x0038)));
    }

    #[test]
    fn test_ili9341_init_sends_commands_with_params() {
        let mut iface = MockInterface::new();
        Controller::Ili9341
            .init(&mut iface, &mut MockDelay::default(), ColorOrder::Bgr)
            .unwrap();
        let events = &iface.events;
        let after = |command: u8| {
            let at = events
                .iter()
                .position(|e| *e == Event::Command(u16::from(command)))
                .unwrap();
            &events[at + 1]
        };
        assert_eq!(after(ili9341::PIXEL_FORMAT_SET), &Event::Data(vec![0x55]));
        let madctl = after(ili9341::MEMORY_ACCESS_CONTROL);
        assert_eq!(madctl, &Event::Data(vec![0x48]));
        assert_eq!(
            events.last(),
            Some(&Event::Command(u16::from(ili9341::DISPLAY_ON)))
        );
    }

    #[test]
    fn test_ili9225_window_registers_and_cursor() {
        let mut iface = MockInterface::new();
        let window = AddressWindow {
            x0: 10,
            y0: 20,
            x1: 30,
            y1: 40,
            mode: AutoIncrement::TopDownL2r,
        };
        Controller::Ili9225
            .write_window(&mut iface, &window, ColorOrder::Bgr)
            .unwrap();
        assert_eq!(
            iface.register_writes(),
            vec![
                (ili9225::ENTRY_MODE, 0x1038),
                (ili9225::HORIZONTAL_WINDOW_ADDR1, 30),
                (ili9225::HORIZONTAL_WINDOW_ADDR2, 10),
                (ili9225::VERTICAL_WINDOW_ADDR1, 40),
                (ili9225::VERTICAL_WINDOW_ADDR2, 20),
                (ili9225::RAM_ADDR_SET1, 10),
                (ili9225::RAM_ADDR_SET2, 20),
            ]
        );
        assert_eq!(
            iface.events.last(),
            Some(&Event::Command(ili9225::GRAM_DATA_REG))
        );
    }

    #[test]
    fn test_ili9225_cursor_starts_at_decrementing_corner() {
        let window = |mode| AddressWindow {
            x0: 1,
            y0: 2,
            x1: 3,
            y1: 4,
            mode,
        };
        for (mode, cursor) in [
            (AutoIncrement::R2lBottomUp, (3, 4)),
            (AutoIncrement::L2rBottomUp, (1, 4)),
            (AutoIncrement::TopDownR2l, (3, 2)),
            (AutoIncrement::L2rTopDown, (1, 2)),
        ] {
            let mut iface = MockInterface::new();
            Controller::Ili9225
                .write_window(&mut iface, &window(mode), ColorOrder::Bgr)
                .unwrap();
            let writes = iface.register_writes();
            assert_eq!(writes[5], (ili9225::RAM_ADDR_SET1, cursor.0), "{mode:?}");
            assert_eq!(writes[6], (ili9225::RAM_ADDR_SET2, cursor.1), "{mode:?}");
        }
    }

    #[test]
    fn test_ili9341_window_exchanges_ranges_for_vertical_first() {
        let mut iface = MockInterface::new();
        let window = AddressWindow {
            x0: 1,
            y0: 2,
            x1: 3,
            y1: 0x0103,
            mode: AutoIncrement::TopDownR2l,
        };
        Controller::Ili9341
            .write_window(&mut iface, &window, ColorOrder::Bgr)
            .unwrap();
        // MX cleared: x addresses count from the right edge
        assert_eq!(
            iface.events,
            vec![
                Event::Command(u16::from(ili9341::MEMORY_ACCESS_CONTROL)),
                Event::Data(vec![ili9341::MADCTL_MV | ili9341::MADCTL_BGR]),
                Event::Command(u16::from(ili9341::COLUMN_ADDRESS_SET)),
                Event::Data(vec![0, 2, 0x01, 0x03]),
                Event::Command(u16::from(ili9341::PAGE_ADDRESS_SET)),
                Event::Data(vec![0, 236, 0, 238]),
                Event::Command(u16::from(ili9341::MEMORY_WRITE)),
            ]
        );
    }

    #[test]
    fn test_ili9341_bottom_up_window_mirrors_pages() {
        let mut iface = MockInterface::new();
        let window = AddressWindow {
            x0: 10,
            y0: 0,
            x1: 20,
            y1: 9,
            mode: AutoIncrement::L2rBottomUp,
        };
        Controller::Ili9341
            .write_window(&mut iface, &window, ColorOrder::Rgb)
            .unwrap();
        assert_eq!(
            iface.events[1],
            Event::Data(vec![ili9341::MADCTL_MY | ili9341::MADCTL_MX])
        );
        assert_eq!(iface.events[3], Event::Data(vec![0, 10, 0, 20]));
        assert_eq!(iface.events[5], Event::Data(vec![0x01, 0x36, 0x01, 0x3F]));
    }

    #[test]
    fn test_mirror_range() {
        assert_eq!(mirror((0, 9), 240), (230, 239));
        assert_eq!(mirror((5, 5), 320), (314, 314));
    }

    #[test]
    fn test_madctl_default_direction() {
        assert_eq!(madctl(AutoIncrement::L2rTopDown, ColorOrder::Bgr), 0x48);
        assert_eq!(madctl(AutoIncrement::L2rTopDown, ColorOrder::Rgb), 0x40);
        assert_eq!(madctl(AutoIncrement::TopDownL2r, ColorOrder::Bgr), 0x68);
        assert_eq!(madctl(AutoIncrement::R2lBottomUp, ColorOrder::Rgb), 0x80);
    }

    #[test]
    fn test_ili9225_reset_window_covers_panel() {
        let mut iface = MockInterface::new();
        Controller::Ili9225
            .reset_window(
                &mut iface,
                Controller::Ili9225.native_size(),
                ColorOrder::Bgr,
            )
            .unwrap();
        assert_eq!(
            iface.register_writes(),
            vec![
                (ili9225::HORIZONTAL_WINDOW_ADDR1, 175),
                (ili9225::HORIZONTAL_WINDOW_ADDR2, 0),
                (ili9225::VERTICAL_WINDOW_ADDR1, 219),
                (ili9225::VERTICAL_WINDOW_ADDR2, 0),
            ]
        );
    }

    #[test]
    fn test_pixel_writes() {
        let mut iface = MockInterface::new();
        Controller::Ili9225
            .write_pixel(&mut iface, 5, 6, 0xF800)
            .unwrap();
        assert_eq!(
            iface.register_writes(),
            vec![
                (ili9225::RAM_ADDR_SET1, 5),
                (ili9225::RAM_ADDR_SET2, 6),
                (ili9225::GRAM_DATA_REG, 0xF800),
            ]
        );

        let mut iface = MockInterface::new();
        Controller::Ili9341
            .write_pixel(&mut iface, 5, 6, 0xF800)
            .unwrap();
        assert_eq!(iface.events[1], Event::Data(vec![0, 5, 0, 5]));
        assert_eq!(iface.events[3], Event::Data(vec![0, 6, 0, 6]));
        assert_eq!(iface.events.last(), Some(&Event::Data16(0xF800)));
    }

    #[test]
    fn test_ili9225_power_sequences() {
        let mut iface = MockInterface::new();
        let mut delay = MockDelay::default();
        Controller::Ili9225
            .display_off(&mut iface, &mut delay)
            .unwrap();
        assert_eq!(
            iface.register_writes(),
            vec![
                (ili9225::POWER_SEQUENCE_PREFIX, 0),
                (ili9225::DISP_CTRL1, 0),
                (ili9225::POWER_CTRL1, 0x0003),
            ]
        );
        assert_eq!(delay.total_ms, 250);

        let mut iface = MockInterface::new();
        Controller::Ili9225
            .display_on(&mut iface, &mut delay)
            .unwrap();
        assert_eq!(
            iface.register_writes().last(),
            Some(&(ili9225::DISP_CTRL1, 0x1017))
        );
    }
}
