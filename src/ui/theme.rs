use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SECRET_TEXT: Color = Color::Rgb(0xc0, 0xca, 0xf5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
