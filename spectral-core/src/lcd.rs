//! HD44780 Zeichen-Display im 4-Bit Modus
//!
//! Jedes Byte wird als zwei Nibbles übertragen (High zuerst). Die Wartezeiten
//! sind großzügiger als im Datenblatt, damit auch langsame Module mitkommen.

use crate::traits::LcdBus;

/// Spalten pro Zeile im DDRAM
pub const LCD_ROW_LENGTH: u8 = 40;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_OFF: u8 = 0x08;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM_ROW0: u8 = 0x80;
const CMD_SET_DDRAM_ROW1: u8 = 0xC0;

const ENABLE_PULSE_US: u32 = 50;
const EXECUTION_DELAY_US: u32 = 200;
const CLEAR_DELAY_US: u32 = 2_000;
const POWER_ON_DELAY_US: u32 = 100_000;

pub struct Hd44780<B: LcdBus> {
    bus: B,
}

impl<B: LcdBus> Hd44780<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Reset-Sequenz: dreimal 0x3 (8-Bit), dann 0x2 (4-Bit), danach Konfiguration
    pub fn init(&mut self) {
        self.bus.set_register_select(false);
        self.bus.set_enable(false);
        self.bus.delay_us(POWER_ON_DELAY_US);

        self.send_nibble(0x03);
        self.bus.delay_us(5_000);
        self.send_nibble(0x03);
        self.bus.delay_us(150);
        self.send_nibble(0x03);
        self.bus.delay_us(150);

        self.send_nibble(0x02);
        self.bus.delay_us(150);

        self.command(CMD_FUNCTION_SET_4BIT_2LINE);
        self.command(CMD_DISPLAY_OFF);
        self.clear();
        self.command(CMD_ENTRY_MODE_INCREMENT);
        self.command(CMD_DISPLAY_ON);
    }

    pub fn clear(&mut self) {
        self.command(CMD_CLEAR);
        self.bus.delay_us(CLEAR_DELAY_US);
    }

    /// Zeile 0 beginnt bei DDRAM 0x00, jede andere Zeile bei 0x40
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        let col = col.min(LCD_ROW_LENGTH - 1);
        let base = if row == 0 {
            CMD_SET_DDRAM_ROW0
        } else {
            CMD_SET_DDRAM_ROW1
        };
        self.command(base + col);
    }

    pub fn write_char(&mut self, c: u8) {
        self.send_byte(c, true);
    }

    pub fn write_string(&mut self, s: &str) {
        for c in s.bytes() {
            self.write_char(c);
        }
    }

    pub fn into_inner(self) -> B {
        self.bus
    }

    fn command(&mut self, cmd: u8) {
        self.send_byte(cmd, false);
    }

    fn send_byte(&mut self, value: u8, data: bool) {
        self.bus.set_register_select(data);
        self.send_nibble(value >> 4);
        self.send_nibble(value & 0x0F);
        self.bus.delay_us(EXECUTION_DELAY_US);
    }

    fn send_nibble(&mut self, nibble: u8) {
        self.bus.set_data_nibble(nibble & 0x0F);
        self.toggle_enable();
    }

    fn toggle_enable(&mut self) {
        self.bus.set_enable(true);
        self.bus.delay_us(ENABLE_PULSE_US);
        self.bus.set_enable(false);
        self.bus.delay_us(ENABLE_PULSE_US);
    }
}
