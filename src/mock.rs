//! Recording interface for unit tests

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{ili9225, ili9341};
use crate::controller::Controller;
use crate::interface::DisplayInterface;

/// One call observed on the bus
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `send_command` (widened) or `send_command16`
    Command(u16),
    /// `send_data16`
    Data16(u16),
    /// `send_data16_repeated`
    Repeated(u16, u32),
    /// `send_data`
    Data(Vec<u8>),
    /// `begin_transaction`
    Begin,
    /// `end_transaction`
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// ILI9225 traffic decoded into pixel writes
#[derive(Debug, Default)]
pub struct Decoded {
    /// `(x, y, color)` written through the RAM address registers
    pub pixels: Vec<(u16, u16, u16)>,
    /// Words streamed into address windows, in order
    pub streamed: Vec<u16>,
    /// Number of address windows opened
    pub windows: usize,
}

#[derive(Debug, Default)]
pub struct MockInterface {
    pub events: Vec<Event>,
    pub resets: usize,
    pub backlight: Option<(bool, u8)>,
    /// Number of command/data calls that succeed before every later one fails
    pub fail_after: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    fn record(&mut self, event: Event) -> Result<(), MockError> {
        if let Some(budget) = self.fail_after.as_mut() {
            if *budget == 0 {
                return Err(MockError);
            }
            *budget -= 1;
        }
        self.events.push(event);
        Ok(())
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// `(register, value)` pairs: a command immediately followed by one data word
    pub fn register_writes(&self) -> Vec<(u16, u16)> {
        self.events
            .windows(2)
            .filter_map(|pair| match pair {
                [Event::Command(register), Event::Data16(value)] => Some((*register, *value)),
                _ => None,
            })
            .collect()
    }

    /// Split ILI9225 traffic into single-pixel writes and window streams
    ///
    /// A window is opened by an entry mode write; the next `GRAM_DATA_REG`
    /// selection then streams until another command arrives.
    pub fn decode(&self) -> Decoded {
        let mut decoded = Decoded::default();
        let mut register = None;
        let mut cursor = (0, 0);
        let mut window_pending = false;
        let mut streaming = false;

        for event in &self.events {
            match event {
                Event::Command(ili9225::GRAM_DATA_REG) => {
                    streaming = window_pending;
                    if window_pending {
                        decoded.windows += 1;
                    }
                    window_pending = false;
                    register = Some(ili9225::GRAM_DATA_REG);
                }
                Event::Command(command) => {
                    if *command == ili9225::ENTRY_MODE {
                        window_pending = true;
                    }
                    streaming = false;
                    register = Some(*command);
                }
                Event::Data16(word) if streaming => decoded.streamed.push(*word),
                Event::Repeated(word, count) if streaming => {
                    decoded.streamed.extend((0..*count).map(|_| *word));
                }
                Event::Data16(value) => match register {
                    Some(ili9225::RAM_ADDR_SET1) => cursor.0 = *value,
                    Some(ili9225::RAM_ADDR_SET2) => cursor.1 = *value,
                    Some(ili9225::GRAM_DATA_REG) => {
                        decoded.pixels.push((cursor.0, cursor.1, *value));
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        decoded
    }

    /// Replay the traffic into display memory
    ///
    /// Returns the last color written to each physical pixel. Physical
    /// coordinates are those of single-pixel writes: the ILI9225 RAM address
    /// registers, or the ILI9341 address space under its default `0x48`
    /// memory access control value.
    pub fn frame(&self, controller: Controller) -> BTreeMap<(u16, u16), u16> {
        let mut frame = BTreeMap::new();
        match controller {
            Controller::Ili9225 => {
                let mut gram = Ili9225Gram::default();
                for event in &self.events {
                    gram.apply(event, &mut frame);
                }
            }
            Controller::Ili9341 => {
                let mut gram = Ili9341Gram::default();
                for event in &self.events {
                    gram.apply(event, &mut frame);
                }
            }
        }
        frame
    }

    /// Number of `(begin, end)` transaction edges seen
    pub fn transactions(&self) -> (usize, usize) {
        let begins = self.events.iter().filter(|e| **e == Event::Begin).count();
        let ends = self.events.iter().filter(|e| **e == Event::End).count();
        (begins, ends)
    }

    /// Whether the last transaction edge left the bus released
    pub fn bus_released(&self) -> bool {
        !matches!(
            self.events
                .iter()
                .rev()
                .find(|e| matches!(e, Event::Begin | Event::End)),
            Some(Event::Begin)
        )
    }
}

fn words(event: &Event) -> Vec<u16> {
    match event {
        Event::Data16(word) => alloc::vec![*word],
        Event::Repeated(word, count) => (0..*count).map(|_| *word).collect(),
        _ => Vec::new(),
    }
}

/// Move `value` one address within `[start, end]`
///
/// Past either edge it wraps to the opposite one. Returns whether it wrapped.
fn advance(value: &mut u16, (start, end): (u16, u16), increment: bool) -> bool {
    if increment {
        if *value >= end {
            *value = start;
            return true;
        }
        *value += 1;
    } else {
        if *value <= start {
            *value = end;
            return true;
        }
        *value -= 1;
    }
    false
}

/// ILI9225 GRAM: window registers, RAM address and entry mode
#[derive(Default)]
struct Ili9225Gram {
    register: u16,
    entry: u16,
    columns: (u16, u16),
    rows: (u16, u16),
    cursor: (u16, u16),
}

impl Ili9225Gram {
    fn apply(&mut self, event: &Event, frame: &mut BTreeMap<(u16, u16), u16>) {
        match event {
            Event::Command(register) => self.register = *register,
            Event::Data16(_) | Event::Repeated(..) => {
                let words = words(event);
                if self.register == ili9225::GRAM_DATA_REG {
                    for word in words {
                        frame.insert(self.cursor, word);
                        self.step();
                    }
                    return;
                }
                let Some(&value) = words.first() else {
                    return;
                };
                match self.register {
                    ili9225::ENTRY_MODE => self.entry = value,
                    ili9225::HORIZONTAL_WINDOW_ADDR1 => self.columns.1 = value,
                    ili9225::HORIZONTAL_WINDOW_ADDR2 => self.columns.0 = value,
                    ili9225::VERTICAL_WINDOW_ADDR1 => self.rows.1 = value,
                    ili9225::VERTICAL_WINDOW_ADDR2 => self.rows.0 = value,
                    ili9225::RAM_ADDR_SET1 => self.cursor.0 = value,
                    ili9225::RAM_ADDR_SET2 => self.cursor.1 = value,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn step(&mut self) {
        let vertical_first = self.entry & 0x08 != 0;
        let x_inc = self.entry & 0x10 != 0;
        let y_inc = self.entry & 0x20 != 0;
        if vertical_first {
            if advance(&mut self.cursor.1, self.rows, y_inc) {
                advance(&mut self.cursor.0, self.columns, x_inc);
            }
        } else if advance(&mut self.cursor.0, self.columns, x_inc) {
            advance(&mut self.cursor.1, self.rows, y_inc);
        }
    }
}

/// ILI9341 frame memory addressed through MADCTL, CASET and PASET
struct Ili9341Gram {
    command: u8,
    madctl: u8,
    columns: (u16, u16),
    pages: (u16, u16),
    cursor: (u16, u16),
    writing: bool,
}

impl Default for Ili9341Gram {
    fn default() -> Self {
        Self {
            command: 0,
            // As left by the init sequence
            madctl: 0x48,
            columns: (0, 239),
            pages: (0, 319),
            cursor: (0, 0),
            writing: false,
        }
    }
}

impl Ili9341Gram {
    fn apply(&mut self, event: &Event, frame: &mut BTreeMap<(u16, u16), u16>) {
        match event {
            Event::Command(command) => {
                self.command = u8::try_from(*command).unwrap_or(0);
                self.writing = self.command == ili9341::MEMORY_WRITE;
                if self.writing {
                    self.cursor = (self.columns.0, self.pages.0);
                }
            }
            Event::Data(bytes) => match (self.command, bytes.as_slice()) {
                (ili9341::MEMORY_ACCESS_CONTROL, [value]) => self.madctl = *value,
                (ili9341::COLUMN_ADDRESS_SET, [a, b, c, d]) => {
                    self.columns = (u16::from_be_bytes([*a, *b]), u16::from_be_bytes([*c, *d]));
                }
                (ili9341::PAGE_ADDRESS_SET, [a, b, c, d]) => {
                    self.pages = (u16::from_be_bytes([*a, *b]), u16::from_be_bytes([*c, *d]));
                }
                _ => {}
            },
            Event::Data16(_) | Event::Repeated(..) if self.writing => {
                for word in words(event) {
                    frame.insert(self.physical(), word);
                    if advance(&mut self.cursor.0, self.columns, true) {
                        advance(&mut self.cursor.1, self.pages, true);
                    }
                }
            }
            _ => {}
        }
    }

    /// Map the address counter to a panel pixel
    ///
    /// MV exchanges the counters, then MX and MY reflect the panel axes.
    /// Physical x runs opposite to the raw panel columns because the default
    /// setting has MX set.
    fn physical(&self) -> (u16, u16) {
        let (column, page) = self.cursor;
        let (raw_x, raw_y) = if self.madctl & ili9341::MADCTL_MV != 0 {
            (page, column)
        } else {
            (column, page)
        };
        let x = if self.madctl & ili9341::MADCTL_MX != 0 {
            raw_x
        } else {
            239 - raw_x
        };
        let y = if self.madctl & ili9341::MADCTL_MY != 0 {
            319 - raw_y
        } else {
            raw_y
        };
        (x, y)
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Event::Command(u16::from(command)))
    }

    fn send_command16(&mut self, command: u16) -> Result<(), Self::Error> {
        self.record(Event::Command(command))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Event::Data(data.to_vec()))
    }

    fn send_data16(&mut self, value: u16) -> Result<(), Self::Error> {
        self.record(Event::Data16(value))
    }

    fn send_data16_repeated(&mut self, value: u16, count: u32) -> Result<(), Self::Error> {
        self.record(Event::Repeated(value, count))
    }

    fn begin_transaction(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Begin);
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::End);
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
        self.resets += 1;
    }

    fn set_backlight(&mut self, on: bool, brightness: u8) -> Result<(), Self::Error> {
        self.backlight = Some((on, brightness));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ms: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms;
    }
}
