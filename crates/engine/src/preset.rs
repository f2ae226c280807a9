//! Built-in color sets for the gradient engine.
//!
//! Each preset is a curated list of four colors that blend well when fed to
//! [`GradientEngine::set_colors`](crate::GradientEngine::set_colors).

use colorwash_core::{EngineError, Rgb};

/// A named built-in color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Sunrise,
    Sunset,
    Love,
    Ocean,
    Barbie,
    Starry,
    Jelly,
    Lavandula,
    Watermelon,
    Dandelion,
    Lemon,
    Spring,
    Summer,
    Autumn,
    Winter,
    Neon,
    Aurora,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: &'static [Preset] = &[
        Preset::Sunrise,
        Preset::Sunset,
        Preset::Love,
        Preset::Ocean,
        Preset::Barbie,
        Preset::Starry,
        Preset::Jelly,
        Preset::Lavandula,
        Preset::Watermelon,
        Preset::Dandelion,
        Preset::Lemon,
        Preset::Spring,
        Preset::Summer,
        Preset::Autumn,
        Preset::Winter,
        Preset::Neon,
        Preset::Aurora,
    ];

    /// The colors of this preset.
    pub fn colors(self) -> Vec<Rgb> {
        let c = Rgb::from_u8;
        match self {
            Preset::Sunrise => vec![
                c(186, 143, 181),
                c(231, 157, 175),
                c(248, 181, 169),
                c(254, 227, 169),
            ],
            Preset::Sunset => vec![
                c(233, 129, 28),
                c(244, 172, 86),
                c(169, 31, 43),
                c(208, 63, 29),
            ],
            Preset::Love => vec![
                c(254, 116, 97),
                c(243, 8, 32),
                c(250, 193, 208),
                c(193, 123, 126),
            ],
            Preset::Ocean => vec![
                c(224, 244, 233),
                c(128, 193, 184),
                c(14, 179, 171),
                c(3, 144, 150),
            ],
            Preset::Barbie => vec![
                c(254, 143, 229),
                c(255, 126, 179),
                c(254, 144, 195),
                c(230, 96, 160),
            ],
            Preset::Starry => vec![
                c(244, 245, 168),
                c(108, 137, 198),
                c(44, 59, 108),
                c(22, 30, 45),
            ],
            Preset::Jelly => vec![
                c(54, 151, 174),
                c(19, 49, 75),
                c(178, 133, 193),
                c(237, 210, 233),
            ],
            Preset::Lavandula => vec![
                c(164, 149, 211),
                c(190, 138, 198),
                c(67, 15, 129),
                c(168, 144, 181),
            ],
            Preset::Watermelon => vec![
                c(203, 18, 25),
                c(255, 103, 112),
                c(233, 167, 80),
                c(162, 183, 4),
            ],
            Preset::Dandelion => vec![
                c(227, 213, 186),
                c(240, 242, 230),
                c(181, 230, 220),
                c(104, 154, 141),
            ],
            Preset::Lemon => vec![
                c(233, 227, 140),
                c(207, 217, 187),
                c(212, 231, 238),
                c(127, 186, 216),
            ],
            Preset::Spring => vec![
                c(254, 109, 170),
                c(254, 169, 199),
                c(252, 250, 246),
                c(99, 147, 164),
            ],
            Preset::Summer => vec![
                c(65, 71, 42),
                c(232, 222, 106),
                c(105, 129, 70),
                c(79, 100, 52),
            ],
            Preset::Autumn => vec![
                c(251, 176, 57),
                c(239, 122, 51),
                c(231, 82, 44),
                c(189, 60, 43),
            ],
            Preset::Winter => vec![
                c(190, 212, 240),
                c(129, 152, 205),
                c(196, 181, 215),
                c(243, 243, 243),
            ],
            Preset::Neon => vec![
                c(22, 4, 74),
                c(240, 54, 248),
                c(79, 216, 248),
                c(74, 0, 217),
            ],
            Preset::Aurora => vec![
                c(0, 209, 172),
                c(0, 150, 150),
                c(4, 76, 112),
                c(23, 38, 69),
            ],
        }
    }

    /// The lowercase name of this preset.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Sunrise => "sunrise",
            Preset::Sunset => "sunset",
            Preset::Love => "love",
            Preset::Ocean => "ocean",
            Preset::Barbie => "barbie",
            Preset::Starry => "starry",
            Preset::Jelly => "jelly",
            Preset::Lavandula => "lavandula",
            Preset::Watermelon => "watermelon",
            Preset::Dandelion => "dandelion",
            Preset::Lemon => "lemon",
            Preset::Spring => "spring",
            Preset::Summer => "summer",
            Preset::Autumn => "autumn",
            Preset::Winter => "winter",
            Preset::Neon => "neon",
            Preset::Aurora => "aurora",
        }
    }

    /// Looks a preset up by name.
    ///
    /// Returns `EngineError::UnknownPreset` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Preset, EngineError> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| EngineError::UnknownPreset(name.to_string()))
    }

    /// All preset names, in display order.
    pub fn list_names() -> Vec<&'static str> {
        Preset::ALL.iter().map(|p| p.name()).collect()
    }
}
