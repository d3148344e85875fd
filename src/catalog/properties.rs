//! Effective shading attributes and the inheritance merge.

use bevy::prelude::*;

use super::definition::MaterialId;

/// Specular shading parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct Specular {
    pub strength: f32,
    pub gloss: f32,
}

impl Specular {
    pub const fn new(strength: f32, gloss: f32) -> Self {
        Self { strength, gloss }
    }
}

/// Animated UV distortion sampled from another material's texture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowMap {
    /// Material whose texture provides the flow vectors.
    pub map: Option<MaterialId>,

    /// Distortion strength in UV units.
    pub strength: f32,

    /// Seconds per full cycle along each axis. Negative values run backwards.
    pub duration: Vec2,
}

/// Fully resolved attributes of one definition.
///
/// Computed once at catalog construction from the parent's properties and
/// the definition's own overrides, then never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialProperties {
    pub has_transparency: bool,
    pub override_base_color: bool,
    pub unlit: bool,

    /// Linear color multiplier.
    ///
    /// Default: 1.0
    pub brightness: f32,

    pub specular: Specular,

    /// UV scroll in texture repeats per second.
    pub scroll_speed: Vec2,

    /// UV tiling factor.
    ///
    /// Default: (1.0, 1.0)
    pub texture_scale: Vec2,

    pub flow_map: FlowMap,

    pub normal_map: Option<MaterialId>,
    pub displacement_map: Option<MaterialId>,
    pub roughness_map: Option<MaterialId>,
    pub ambient_occlusion_map: Option<MaterialId>,

    /// Default: 0.1
    pub displacement_scale: f32,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            has_transparency: false,
            override_base_color: false,
            unlit: false,
            brightness: 1.0,
            specular: Specular::default(),
            scroll_speed: Vec2::ZERO,
            texture_scale: Vec2::ONE,
            flow_map: FlowMap::default(),
            normal_map: None,
            displacement_map: None,
            roughness_map: None,
            ambient_occlusion_map: None,
            displacement_scale: 0.1,
        }
    }
}

impl MaterialProperties {
    /// Applies `overrides` on top of `self`, field by field.
    pub fn merged(&self, overrides: &MaterialOverrides) -> Self {
        let flow_map = FlowMap {
            map: overrides.flow_map.or(self.flow_map.map),
            strength: overrides
                .flow_map_strength
                .unwrap_or(self.flow_map.strength),
            duration: overrides
                .flow_map_duration
                .unwrap_or(self.flow_map.duration),
        };

        Self {
            has_transparency: overrides.has_transparency.unwrap_or(self.has_transparency),
            override_base_color: overrides
                .override_base_color
                .unwrap_or(self.override_base_color),
            unlit: overrides.unlit.unwrap_or(self.unlit),
            brightness: overrides.brightness.unwrap_or(self.brightness),
            specular: overrides.specular.unwrap_or(self.specular),
            scroll_speed: overrides.scroll_speed.unwrap_or(self.scroll_speed),
            texture_scale: overrides.texture_scale.unwrap_or(self.texture_scale),
            flow_map,
            normal_map: overrides.normal_map.or(self.normal_map),
            displacement_map: overrides.displacement_map.or(self.displacement_map),
            roughness_map: overrides.roughness_map.or(self.roughness_map),
            ambient_occlusion_map: overrides
                .ambient_occlusion_map
                .or(self.ambient_occlusion_map),
            displacement_scale: overrides
                .displacement_scale
                .unwrap_or(self.displacement_scale),
        }
    }

    /// Iterates the auxiliary texture references with their slot names.
    pub fn map_references(&self) -> impl Iterator<Item = (&'static str, MaterialId)> + '_ {
        [
            ("normal_map", self.normal_map),
            ("displacement_map", self.displacement_map),
            ("roughness_map", self.roughness_map),
            ("ambient_occlusion_map", self.ambient_occlusion_map),
            ("flow_map", self.flow_map.map),
        ]
        .into_iter()
        .filter_map(|(slot, id)| id.map(|id| (slot, id)))
    }
}

/// Attributes a declaration sets explicitly. Unset fields are inherited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialOverrides {
    pub has_transparency: Option<bool>,
    pub override_base_color: Option<bool>,
    pub unlit: Option<bool>,
    pub brightness: Option<f32>,
    pub specular: Option<Specular>,
    pub scroll_speed: Option<Vec2>,
    pub texture_scale: Option<Vec2>,
    pub flow_map: Option<MaterialId>,
    pub flow_map_strength: Option<f32>,
    pub flow_map_duration: Option<Vec2>,
    pub normal_map: Option<MaterialId>,
    pub displacement_map: Option<MaterialId>,
    pub roughness_map: Option<MaterialId>,
    pub ambient_occlusion_map: Option<MaterialId>,
    pub displacement_scale: Option<f32>,
}

impl MaterialOverrides {
    /// Iterates every float the overrides set, with its field name.
    pub(crate) fn floats(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        let scalars = [
            ("brightness", self.brightness),
            ("specular.strength", self.specular.map(|s| s.strength)),
            ("specular.gloss", self.specular.map(|s| s.gloss)),
            ("flow_map_strength", self.flow_map_strength),
            ("displacement_scale", self.displacement_scale),
        ];
        let vectors = [
            ("scroll_speed", self.scroll_speed),
            ("texture_scale", self.texture_scale),
            ("flow_map_duration", self.flow_map_duration),
        ];

        scalars
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .chain(vectors.into_iter().flat_map(|(name, value)| {
                value.into_iter().flat_map(move |v| [(name, v.x), (name, v.y)])
            }))
    }

    /// Iterates the map references the overrides set.
    pub(crate) fn map_references(&self) -> impl Iterator<Item = (&'static str, MaterialId)> + '_ {
        [
            ("normal_map", self.normal_map),
            ("displacement_map", self.displacement_map),
            ("roughness_map", self.roughness_map),
            ("ambient_occlusion_map", self.ambient_occlusion_map),
            ("flow_map", self.flow_map),
        ]
        .into_iter()
        .filter_map(|(slot, id)| id.map(|id| (slot, id)))
    }
}
