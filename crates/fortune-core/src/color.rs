use crate::name::Name;
use palette::Srgb;
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::hash::{DefaultHasher, Hash, Hasher};
use strum::{Display as StrumDisplay, EnumString};

/// How slice colors are chosen on each redraw.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Fresh random color for every slice on every frame.
    #[default]
    #[strum(serialize = "flicker", serialize = "random")]
    Flicker,
    /// Color derived from the name, constant across frames.
    #[strum(serialize = "stable", serialize = "fixed")]
    Stable,
}

/// Three independently random 8-bit channels.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Srgb<u8> {
    Srgb::new(
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
    )
}

pub fn stable_color(name: &Name) -> Srgb<u8> {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let [r, g, b, ..] = hasher.finish().to_le_bytes();
    Srgb::new(r, g, b)
}

/// Color source handed to the renderer.
pub struct SliceColors {
    mode: ColorMode,
    rng: StdRng,
}

impl SliceColors {
    pub fn new(mode: ColorMode, rng: StdRng) -> Self {
        Self { mode, rng }
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    pub fn pick(&mut self, name: &Name) -> Srgb<u8> {
        match self.mode {
            ColorMode::Flicker => random_color(&mut self.rng),
            ColorMode::Stable => stable_color(name),
        }
    }
}
