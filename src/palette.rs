use rand::Rng;
use strum::{EnumCount, EnumIter, IntoEnumIterator};


#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, EnumCount)]
pub enum PaletteColor {
    Red,
    Blue,
    Yellow,
    Green,
    Pink,
}

impl PaletteColor {
    pub fn for_team(team_idx: usize) -> Option<Self> { Self::iter().nth(team_idx) }

    pub fn emoji(self) -> &'static str {
        match self {
            PaletteColor::Red => "🔴",
            PaletteColor::Blue => "🔵",
            PaletteColor::Yellow => "🟡",
            PaletteColor::Green => "🟢",
            PaletteColor::Pink => "🌸",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PaletteColor::Red => (0xEF, 0x44, 0x44),
            PaletteColor::Blue => (0x3B, 0x82, 0xF6),
            PaletteColor::Yellow => (0xEA, 0xB3, 0x08),
            PaletteColor::Green => (0x22, 0xC5, 0x5E),
            PaletteColor::Pink => (0xEC, 0x48, 0x99),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TeamColor {
    Palette(PaletteColor),
    // Teams past the palette get an arbitrary color and no emoji.
    Generated { r: u8, g: u8, b: u8 },
}

impl TeamColor {
    pub fn for_team(team_idx: usize, rng: &mut impl Rng) -> Self {
        match PaletteColor::for_team(team_idx) {
            Some(color) => TeamColor::Palette(color),
            None => TeamColor::Generated { r: rng.random(), g: rng.random(), b: rng.random() },
        }
    }

    pub fn emoji(self) -> Option<&'static str> {
        match self {
            TeamColor::Palette(color) => Some(color.emoji()),
            TeamColor::Generated { .. } => None,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            TeamColor::Palette(color) => color.rgb(),
            TeamColor::Generated { r, g, b } => (r, g, b),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

pub fn team_emoji(team_idx: usize) -> Option<&'static str> {
    PaletteColor::for_team(team_idx).map(PaletteColor::emoji)
}

pub const PALETTE_SIZE: usize = PaletteColor::COUNT;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::deterministic_rng;

    #[test]
    fn palette_by_index() {
        let mut rng = deterministic_rng();
        assert_eq!(TeamColor::for_team(0, &mut rng), TeamColor::Palette(PaletteColor::Red));
        assert_eq!(TeamColor::for_team(4, &mut rng), TeamColor::Palette(PaletteColor::Pink));
        assert_eq!(team_emoji(1), Some("🔵"));
        assert_eq!(PALETTE_SIZE, 5);
    }

    #[test]
    fn generated_past_palette() {
        let mut rng = deterministic_rng();
        let color = TeamColor::for_team(PALETTE_SIZE, &mut rng);
        assert!(matches!(color, TeamColor::Generated { .. }));
        assert_eq!(color.emoji(), None);
        assert_eq!(team_emoji(PALETTE_SIZE), None);
        let hex = color.hex();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }
}
