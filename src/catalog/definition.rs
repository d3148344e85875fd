//! Material handles, declarations and published definitions.

use std::fmt;

use bevy::prelude::*;

use super::properties::{MaterialOverrides, MaterialProperties, Specular};
use crate::config::Condition;

/// Stable handle of a catalog entry.
///
/// The value is the declaration index. Later declarations take priority
/// over earlier ones when several replacement rules apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialId(u16);

impl MaterialId {
    /// The empty material. Always declared first.
    pub const NONE: Self = Self(0);

    /// Sentinel for vanilla texture slots that have no material of their own.
    pub const VANILLA: Self = Self(1);

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u16)
    }

    /// Declaration index of this material.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single catalog entry after construction.
#[derive(Clone, Debug)]
pub struct MaterialDefinition {
    pub(crate) id: MaterialId,
    pub(crate) name: String,
    pub(crate) parent: Option<MaterialId>,
    pub(crate) vanilla_index: Option<u32>,
    pub(crate) properties: MaterialProperties,
    pub(crate) replacement_targets: Vec<MaterialId>,
    pub(crate) condition: Option<Condition>,
}

impl MaterialDefinition {
    pub fn id(&self) -> MaterialId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Material this one inherits attributes (and its texture) from.
    pub fn parent(&self) -> Option<MaterialId> {
        self.parent
    }

    /// Native texture slot this material is the default for.
    pub fn vanilla_index(&self) -> Option<u32> {
        self.vanilla_index
    }

    /// Effective attributes, including everything inherited.
    pub fn properties(&self) -> &MaterialProperties {
        &self.properties
    }

    /// Materials superseded by this one while its condition holds.
    ///
    /// Sorted by id, without duplicates.
    pub fn replacement_targets(&self) -> &[MaterialId] {
        &self.replacement_targets
    }

    pub fn replacement_condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn replaces(&self, id: MaterialId) -> bool {
        self.replacement_targets.binary_search(&id).is_ok()
    }

    /// Lowercased name, used to find the backing image file.
    pub fn texture_file_stem(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Declaration of one material, consumed by [`CatalogBuilder::add`].
///
/// Only explicitly set attributes override the parent's.
///
/// # Example
///
/// ```
/// use bevy_hd_materials::prelude::*;
///
/// let mut builder = CatalogBuilder::new();
/// let dirt_n = builder.add(MaterialBuilder::new("DIRT_1_N"));
/// let dirt = builder.add(
///     MaterialBuilder::new("DIRT_1")
///         .with_normal_map(dirt_n)
///         .with_specular(0.5, 35.0),
/// );
/// builder.add(MaterialBuilder::new("DIRT_1_SHINY").with_parent(dirt).with_specular(1.1, 380.0));
///
/// let catalog = builder.build().unwrap();
/// assert_eq!(catalog.len(), 5);
/// ```
///
/// [`CatalogBuilder::add`]: super::CatalogBuilder::add
#[derive(Clone, Debug, Default)]
pub struct MaterialBuilder {
    pub(crate) name: String,
    pub(crate) parent: Option<MaterialId>,
    pub(crate) vanilla_index: Option<u32>,
    pub(crate) overrides: MaterialOverrides,
    pub(crate) replacement_targets: Vec<MaterialId>,
    pub(crate) replacement_target_names: Vec<String>,
    pub(crate) condition: Option<Condition>,
}

impl MaterialBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Inherit attributes and the texture from an earlier material.
    pub fn with_parent(mut self, parent: MaterialId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Make this the default material for a native texture slot.
    pub fn with_vanilla_index(mut self, index: u32) -> Self {
        self.vanilla_index = Some(index);
        self
    }

    pub fn with_transparency(mut self, enable: bool) -> Self {
        self.overrides.has_transparency = Some(enable);
        self
    }

    /// Shorthand for `with_transparency(true)`.
    pub fn transparent(self) -> Self {
        self.with_transparency(true)
    }

    pub fn with_override_base_color(mut self, enable: bool) -> Self {
        self.overrides.override_base_color = Some(enable);
        self
    }

    pub fn with_unlit(mut self, enable: bool) -> Self {
        self.overrides.unlit = Some(enable);
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.overrides.brightness = Some(brightness);
        self
    }

    pub fn with_specular(mut self, strength: f32, gloss: f32) -> Self {
        self.overrides.specular = Some(Specular::new(strength, gloss));
        self
    }

    /// UV scroll in texture repeats per second.
    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.overrides.scroll_speed = Some(Vec2::new(x, y));
        self
    }

    pub fn with_texture_scale(mut self, x: f32, y: f32) -> Self {
        self.overrides.texture_scale = Some(Vec2::new(x, y));
        self
    }

    /// Set the flow map together with its strength and cycle durations.
    pub fn with_flow_map(
        mut self,
        map: MaterialId,
        strength: f32,
        duration_x: f32,
        duration_y: f32,
    ) -> Self {
        self.overrides.flow_map = Some(map);
        self.overrides.flow_map_strength = Some(strength);
        self.overrides.flow_map_duration = Some(Vec2::new(duration_x, duration_y));
        self
    }

    /// Set only the flow map texture, keeping inherited strength and durations.
    pub fn with_flow_map_texture(mut self, map: MaterialId) -> Self {
        self.overrides.flow_map = Some(map);
        self
    }

    pub fn with_flow_map_strength(mut self, strength: f32) -> Self {
        self.overrides.flow_map_strength = Some(strength);
        self
    }

    pub fn with_flow_map_duration(mut self, x: f32, y: f32) -> Self {
        self.overrides.flow_map_duration = Some(Vec2::new(x, y));
        self
    }

    pub fn with_normal_map(mut self, map: MaterialId) -> Self {
        self.overrides.normal_map = Some(map);
        self
    }

    pub fn with_displacement_map(mut self, map: MaterialId) -> Self {
        self.overrides.displacement_map = Some(map);
        self
    }

    pub fn with_roughness_map(mut self, map: MaterialId) -> Self {
        self.overrides.roughness_map = Some(map);
        self
    }

    pub fn with_ambient_occlusion_map(mut self, map: MaterialId) -> Self {
        self.overrides.ambient_occlusion_map = Some(map);
        self
    }

    pub fn with_displacement_scale(mut self, scale: f32) -> Self {
        self.overrides.displacement_scale = Some(scale);
        self
    }

    /// Replace `targets` with this material while `condition` holds.
    ///
    /// The condition also gates the material itself: while it is false the
    /// material resolves to [`MaterialId::NONE`]. Targets must not carry a
    /// condition of their own. Calling this again adds targets and replaces
    /// the condition.
    pub fn replace_if(
        mut self,
        condition: impl Into<Condition>,
        targets: impl IntoIterator<Item = MaterialId>,
    ) -> Self {
        self.replacement_targets.extend(targets);
        self.condition = Some(condition.into());
        self
    }

    /// Like [`replace_if`](Self::replace_if), naming the targets instead.
    ///
    /// Names are looked up when the catalog is built, so the targets may be
    /// declared after this material.
    ///
    /// ```
    /// use bevy_hd_materials::prelude::*;
    ///
    /// let mut builder = CatalogBuilder::new();
    /// let winter = builder.add(
    ///     MaterialBuilder::new("WINTER_WILLOW_LEAVES")
    ///         .replace_named_if(ConfigFlag::WinterTheme, ["WILLOW_LEAVES"]),
    /// );
    /// let willow = builder.add(MaterialBuilder::new("WILLOW_LEAVES"));
    ///
    /// let catalog = builder.build().unwrap();
    /// assert_eq!(catalog.replacers_of(willow), &[winter]);
    /// assert_eq!(catalog.get(winter).replacement_targets(), &[willow]);
    /// ```
    pub fn replace_named_if(
        mut self,
        condition: impl Into<Condition>,
        targets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.replacement_target_names
            .extend(targets.into_iter().map(Into::into));
        self.condition = Some(condition.into());
        self
    }

    /// Gate this material on a condition without replacing anything.
    pub fn only_if(mut self, condition: impl Into<Condition>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFlag;

    #[test]
    fn test_reserved_ids() {
        assert_eq!(MaterialId::NONE.index(), 0);
        assert_eq!(MaterialId::VANILLA.index(), 1);
        assert!(MaterialId::NONE < MaterialId::VANILLA);
    }

    #[test]
    fn test_builder_collects_overrides() {
        let lava_flow = MaterialId::from_index(4);
        let builder = MaterialBuilder::new("LAVA")
            .with_vanilla_index(31)
            .with_unlit(true)
            .with_override_base_color(true)
            .with_flow_map(lava_flow, 0.05, 36.0, 22.0)
            .with_scroll(0.0, 1.0 / 3.0);

        assert_eq!(builder.name, "LAVA");
        assert_eq!(builder.vanilla_index, Some(31));
        assert_eq!(builder.overrides.unlit, Some(true));
        assert_eq!(builder.overrides.flow_map, Some(lava_flow));
        assert_eq!(builder.overrides.flow_map_duration, Some(Vec2::new(36.0, 22.0)));
        assert_eq!(builder.overrides.has_transparency, None);
        assert!(builder.condition.is_none());
    }

    #[test]
    fn test_replace_if_accumulates_targets() {
        let a = MaterialId::from_index(20);
        let b = MaterialId::from_index(21);
        let builder = MaterialBuilder::new("ICE")
            .replace_if(ConfigFlag::WinterTheme, [a])
            .replace_if(ConfigFlag::ModelTextures, [b]);

        assert_eq!(builder.replacement_targets, vec![a, b]);
        assert_eq!(
            builder.condition,
            Some(Condition::Flag(ConfigFlag::ModelTextures))
        );
    }
}
