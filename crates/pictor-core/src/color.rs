use serde::{Deserialize, Serialize};

/// An RGBA color sample. Writes replace the destination; there is no blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Look up a palette color by name. Spaces, dashes and underscores are ignored.
    pub fn named(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        let color = match key.as_str() {
            "transparent" => Self::TRANSPARENT,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "yellow" => Self::YELLOW,
            "purple" => Self::PURPLE,
            "orange" => Self::ORANGE,
            "brown" => Self::BROWN,
            "gray" | "grey" => Self::GRAY,
            "lightgray" | "lightgrey" => Self::LIGHT_GRAY,
            "darkgray" | "darkgrey" => Self::DARK_GRAY,
            "lightblue" => Self::LIGHT_BLUE,
            "lightgreen" => Self::LIGHT_GREEN,
            _ => return None,
        };
        Some(color)
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_array(rgba)
    }
}
