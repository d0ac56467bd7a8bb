use ratatui::style::Color;

/// Theme color palette defining all colors used on the form screen.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub surface: ColorSpec,

    pub success: ColorSpec,
    pub error: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(161, 119, 255), // Purple
            banner: rgb(255, 109, 146), // Pink
            text: rgb(88, 82, 96), // Text
            text_muted: rgb(152, 147, 165), // Muted
            surface: rgb(255, 250, 243), // Surface
            success: rgb(59, 247, 209), // Pine
            error: rgb(235, 111, 146), // Love
            border_active: rgb(161, 119, 255), // Purple
            border_normal: rgb(88, 82, 96), // Text
            highlight_bg: rgb(61, 174, 233), // Foam
            highlight_fg: rgb(0, 0, 0),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249), // Purple
            banner: rgb(255, 121, 198), // Pink
            text: rgb(248, 248, 242), // Foreground
            text_muted: rgb(98, 114, 164), // Comment
            surface: rgb(68, 71, 90), // Selection
            success: rgb(80, 250, 123), // Green
            error: rgb(255, 85, 85), // Red
            border_active: rgb(189, 147, 249), // Purple
            border_normal: rgb(98, 114, 164), // Comment
            highlight_bg: rgb(139, 233, 253), // Cyan
            highlight_fg: rgb(40, 42, 54), // Background
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255), // Blue
            banner: rgb(255, 159, 196), // Magenta
            text: rgb(169, 177, 214), // Foreground
            text_muted: rgb(117, 121, 148), // Comment
            surface: rgb(36, 40, 59), // Selection
            success: rgb(158, 206, 106), // Green
            error: rgb(247, 118, 142), // Red
            border_active: rgb(125, 207, 255), // Blue
            border_normal: rgb(117, 121, 148), // Comment
            highlight_bg: rgb(125, 207, 255), // Blue
            highlight_fg: rgb(26, 27, 38), // Background
        }
    }

    /// Look up a theme by its name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "tokyo-night".to_string(),
        ]
    }
}
