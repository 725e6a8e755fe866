use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0x5f, g: 0xaf, b: 0xd7 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = Color::TrueColor { r: 0xd7, g: 0x87, b: 0xff };
pub const MANUFACTURER: Color = Color::Green;
pub const NOT_FOUND: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
pub const TIMING: Color = Color::Cyan;
