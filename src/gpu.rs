//! GPU-side material records.
//!
//! One record is built per active material. Texture references are stored as
//! layer indices into the texture array, in the order of
//! [`MaterialSnapshot::texture_materials`].

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::render_resource::ShaderType;
use bytemuck::{Pod, Zeroable};

use crate::catalog::{MaterialId, MaterialProperties};
use crate::resolve::MaterialSnapshot;

/// Layer index meaning "no texture".
pub const NO_TEXTURE: i32 = -1;

/// Packed attributes of one material, indexed by record slot in the shader.
#[derive(Clone, Copy, Debug, Default, PartialEq, ShaderType, Pod, Zeroable)]
#[repr(C)]
pub struct MaterialPropertiesGpu {
    pub flags: u32,

    /// Texture layer of the material's own image.
    pub color_map: i32,
    pub normal_map: i32,
    pub displacement_map: i32,
    pub roughness_map: i32,
    pub ambient_occlusion_map: i32,
    pub flow_map: i32,

    pub brightness: f32,
    pub displacement_scale: f32,
    pub specular_strength: f32,
    pub specular_gloss: f32,
    pub flow_map_strength: f32,
    pub flow_map_duration: Vec2,

    /// UV offset per second. Opposite to the declared scroll direction.
    pub scroll_speed: Vec2,
    pub texture_scale: Vec2,
}

impl MaterialPropertiesGpu {
    pub const FLAG_TRANSPARENCY: u32 = 1 << 0;
    pub const FLAG_OVERRIDE_BASE_COLOR: u32 = 1 << 1;
    pub const FLAG_UNLIT: u32 = 1 << 2;

    /// Pack `properties`, looking up texture layers with `layer_of`.
    pub fn pack(
        properties: &MaterialProperties,
        color_map: i32,
        layer_of: impl Fn(MaterialId) -> i32,
    ) -> Self {
        let layer = |map: Option<MaterialId>| map.map_or(NO_TEXTURE, &layer_of);

        Self {
            flags: pack_flags(properties),
            color_map,
            normal_map: layer(properties.normal_map),
            displacement_map: layer(properties.displacement_map),
            roughness_map: layer(properties.roughness_map),
            ambient_occlusion_map: layer(properties.ambient_occlusion_map),
            flow_map: layer(properties.flow_map.map),
            brightness: properties.brightness,
            displacement_scale: properties.displacement_scale,
            specular_strength: properties.specular.strength,
            specular_gloss: properties.specular.gloss,
            flow_map_strength: properties.flow_map.strength,
            flow_map_duration: properties.flow_map.duration,
            scroll_speed: -properties.scroll_speed,
            texture_scale: properties.texture_scale,
        }
    }
}

/// Render-hint bits of `properties`.
pub fn pack_flags(properties: &MaterialProperties) -> u32 {
    let mut flags = 0u32;

    if properties.has_transparency {
        flags |= MaterialPropertiesGpu::FLAG_TRANSPARENCY;
    }

    if properties.override_base_color {
        flags |= MaterialPropertiesGpu::FLAG_OVERRIDE_BASE_COLOR;
    }

    if properties.unlit {
        flags |= MaterialPropertiesGpu::FLAG_UNLIT;
    }

    flags
}

/// Material records for one generation of resolved tables.
#[derive(Clone, Debug)]
pub struct MaterialRecordBuffer {
    generation: u64,
    records: Vec<MaterialPropertiesGpu>,
    /// Record slot of each catalog entry after resolution.
    slots: Box<[Option<u32>]>,
    texture_layers: HashMap<MaterialId, i32>,
}

impl MaterialRecordBuffer {
    /// Build one record per active material in `snapshot`.
    pub fn from_snapshot(snapshot: &MaterialSnapshot) -> Self {
        let texture_layers: HashMap<MaterialId, i32> = snapshot
            .texture_materials()
            .into_iter()
            .enumerate()
            .map(|(layer, id)| (id, layer as i32))
            .collect();
        let layer_of = |id: MaterialId| {
            texture_layers
                .get(&snapshot.texture_root(id))
                .copied()
                .unwrap_or(NO_TEXTURE)
        };

        let active = snapshot.active_materials();
        let mut record_of = HashMap::with_capacity(active.len());
        let mut records = Vec::with_capacity(active.len());
        for id in active {
            let Some(properties) = snapshot.properties(id) else {
                continue;
            };
            record_of.insert(id, records.len() as u32);
            records.push(MaterialPropertiesGpu::pack(properties, layer_of(id), layer_of));
        }

        let slots = snapshot
            .tables()
            .replacements()
            .iter()
            .map(|resolved| record_of.get(resolved).copied())
            .collect();

        Self {
            generation: snapshot.generation(),
            records,
            slots,
            texture_layers,
        }
    }

    /// Generation of the tables the records were built from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn records(&self) -> &[MaterialPropertiesGpu] {
        &self.records
    }

    /// Raw bytes for uploading into a storage buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.records)
    }

    /// Record slot used when rendering `id`, after replacements.
    ///
    /// `None` for `VANILLA` and for ids outside the catalog.
    pub fn slot(&self, id: MaterialId) -> Option<u32> {
        self.slots.get(id.index()).copied().flatten()
    }

    /// Texture array layer of a texture material.
    pub fn texture_layer(&self, id: MaterialId) -> Option<i32> {
        self.texture_layers.get(&id).copied()
    }
}
