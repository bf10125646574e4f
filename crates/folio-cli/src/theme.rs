use ratatui::style::Color;

#[derive(Clone)]
pub struct Theme {
    pub name: &'static str,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub user_color: Color,
    pub model_color: Color,
    pub notice_color: Color,
    pub busy_color: Color,
    pub border: Color,
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            name: "neon",
            fg: Color::Rgb(209, 213, 219),
            accent: Color::Rgb(0, 243, 255),
            muted: Color::Rgb(107, 114, 128),
            user_color: Color::Rgb(0, 243, 255),
            model_color: Color::Rgb(188, 19, 254),
            notice_color: Color::Rgb(224, 175, 104),
            busy_color: Color::Rgb(0, 243, 255),
            border: Color::Rgb(31, 41, 55),
        }
    }

    pub fn mono() -> Self {
        Self {
            name: "mono",
            fg: Color::Gray,
            accent: Color::White,
            muted: Color::DarkGray,
            user_color: Color::White,
            model_color: Color::Gray,
            notice_color: Color::Gray,
            busy_color: Color::White,
            border: Color::DarkGray,
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            _ => Self::neon(),
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["neon", "mono"]
    }
}
