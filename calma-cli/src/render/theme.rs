use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Soft greens and lavenders for a calm terminal.
pub struct Calm;

impl Calm {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Calm::FG);
        skin.bold.set_fg(Calm::SAGE);
        skin.italic.set_fg(Calm::SKY);

        skin.headers[0].set_fg(Calm::SAGE);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Calm::LAVENDER);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Calm::MUTED);
        skin.bullet.set_fg(Calm::SAGE);
        skin.inline_code.set_fg(Calm::LAVENDER);

        skin
    }

    pub const FG: Color = Color::Rgb {
        r: 0xDC,
        g: 0xE3,
        b: 0xDD,
    }; // #DCE3DD
    pub const SAGE: Color = Color::Rgb {
        r: 0x9C,
        g: 0xC9,
        b: 0xA7,
    }; // #9CC9A7
    pub const LAVENDER: Color = Color::Rgb {
        r: 0xB8,
        g: 0xA9,
        b: 0xE0,
    }; // #B8A9E0
    pub const SKY: Color = Color::Rgb {
        r: 0x8F,
        g: 0xC1,
        b: 0xE3,
    }; // #8FC1E3
    pub const MUTED: Color = Color::Rgb {
        r: 0x6B,
        g: 0x75,
        b: 0x70,
    }; // #6B7570
    pub const ROSE: Color = Color::Rgb {
        r: 0xE8,
        g: 0x9A,
        b: 0x9A,
    }; // #E89A9A
}

/// Parses a `#RRGGBB` color token.
pub fn color_from_hex(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
