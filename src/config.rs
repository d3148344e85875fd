//! Configuration snapshot and replacement conditions.
//!
//! Replacement rules never read settings directly. Each rule carries a
//! [`Condition`] that is evaluated against a borrowed [`HdMaterialConfig`]
//! during a resolution pass.

use bevy::prelude::*;

/// User-facing switches that influence which materials are in use.
///
/// Changing any field (through `ResMut`) triggers a full rebuild of the
/// material mappings on the next `Update`.
#[derive(Resource, Reflect, Clone, Debug, PartialEq, Eq)]
#[reflect(Resource)]
pub struct HdMaterialConfig {
    /// Swap foliage, roofs, paintings and still water for their winter variants.
    pub winter_theme: bool,

    /// Prefer the high-detail textures for walls, roofs and lava on models.
    ///
    /// Default: `true`
    pub model_textures: bool,

    /// Use the animated HD texture for the infernal cape.
    ///
    /// Default: `true`
    pub hd_infernal_texture: bool,
}

impl Default for HdMaterialConfig {
    fn default() -> Self {
        Self {
            winter_theme: false,
            model_textures: true,
            hd_infernal_texture: true,
        }
    }
}

impl HdMaterialConfig {
    /// Reads a single flag.
    pub fn flag(&self, flag: ConfigFlag) -> bool {
        match flag {
            ConfigFlag::WinterTheme => self.winter_theme,
            ConfigFlag::ModelTextures => self.model_textures,
            ConfigFlag::HdInfernalTexture => self.hd_infernal_texture,
        }
    }

    /// Returns a copy with `flag` set to `value`.
    pub fn with_flag(mut self, flag: ConfigFlag, value: bool) -> Self {
        match flag {
            ConfigFlag::WinterTheme => self.winter_theme = value,
            ConfigFlag::ModelTextures => self.model_textures = value,
            ConfigFlag::HdInfernalTexture => self.hd_infernal_texture = value,
        }
        self
    }

    /// Every combination of flags, starting from all-off.
    pub fn all_combinations() -> impl Iterator<Item = Self> {
        (0..1u8 << ConfigFlag::ALL.len()).map(|bits| {
            ConfigFlag::ALL
                .iter()
                .enumerate()
                .fold(Self::default(), |config, (i, &flag)| {
                    config.with_flag(flag, bits & (1 << i) != 0)
                })
        })
    }
}

/// Name of one boolean in [`HdMaterialConfig`].
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigFlag {
    WinterTheme,
    ModelTextures,
    HdInfernalTexture,
}

impl ConfigFlag {
    pub const ALL: [ConfigFlag; 3] = [
        ConfigFlag::WinterTheme,
        ConfigFlag::ModelTextures,
        ConfigFlag::HdInfernalTexture,
    ];
}

/// A boolean expression over configuration flags.
///
/// The set of operators is closed; there is no way to plug in arbitrary code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Flag(ConfigFlag),
    Not(Box<Condition>),
    /// True when every operand is true (and for an empty list).
    All(Vec<Condition>),
    /// True when any operand is true (false for an empty list).
    Any(Vec<Condition>),
}

impl Condition {
    pub fn flag(flag: ConfigFlag) -> Self {
        Self::Flag(flag)
    }

    pub fn not(condition: Condition) -> Self {
        Self::Not(Box::new(condition))
    }

    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Evaluates the expression against a configuration snapshot.
    pub fn evaluate(&self, config: &HdMaterialConfig) -> bool {
        match self {
            Condition::Flag(flag) => config.flag(*flag),
            Condition::Not(inner) => !inner.evaluate(config),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(config)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(config)),
        }
    }
}

impl From<ConfigFlag> for Condition {
    fn from(flag: ConfigFlag) -> Self {
        Self::Flag(flag)
    }
}
