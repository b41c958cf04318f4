use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const POPUP_BG: Color = Color::Rgb(0x1f, 0x29, 0x37);

/// Colors for one presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf4, 0xf6, 0xfb),
    text: Color::Rgb(0x11, 0x18, 0x27),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xc7, 0xcc, 0xd6),
    focus: Color::Rgb(0xdb, 0xe4, 0xff),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x0f, 0x17, 0x2a),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0x40, 0x40, 0x40),
    focus: Color::Rgb(0x26, 0x26, 0x40),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
