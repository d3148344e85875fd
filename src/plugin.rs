//! Plugin for HD material resolution.
use std::sync::Arc;

use bevy::prelude::*;

use crate::catalog::{MaterialCatalog, MaterialId, VANILLA_TEXTURE_COUNT, builtin};
use crate::config::HdMaterialConfig;
use crate::gpu::MaterialRecordBuffer;
use crate::resolve::{MaterialMappings, MaterialSnapshot};

/// Plugin that installs a material catalog and keeps its mappings in sync
/// with [`HdMaterialConfig`].
///
/// This plugin registers:
/// - [`HdMaterialConfig`] (kept if already inserted)
/// - [`MaterialMappings`] and [`MaterialRecords`]
/// - the [`MaterialMappingsRebuilt`] message
///
/// # Example
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_hd_materials::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .insert_resource(HdMaterialConfig {
///         winter_theme: true,
///         ..default()
///     })
///     .add_plugins(HdMaterialPlugin::default())
///     .run();
/// ```
///
/// # Panics
///
/// Panics during `build` if no catalog was supplied and the builtin catalog
/// fails to construct.
pub struct HdMaterialPlugin {
    catalog: Option<Arc<MaterialCatalog>>,
    native_texture_count: usize,
}

impl Default for HdMaterialPlugin {
    fn default() -> Self {
        Self {
            catalog: None,
            native_texture_count: VANILLA_TEXTURE_COUNT as usize,
        }
    }
}

impl HdMaterialPlugin {
    /// Use `catalog` instead of the builtin one.
    pub fn with_catalog(mut self, catalog: impl Into<Arc<MaterialCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Number of texture slots the host renderer provides.
    ///
    /// Default: 128
    pub fn with_native_texture_count(mut self, count: usize) -> Self {
        self.native_texture_count = count;
        self
    }
}

impl Plugin for HdMaterialPlugin {
    fn build(&self, app: &mut App) {
        let catalog = match &self.catalog {
            Some(catalog) => Arc::clone(catalog),
            None => Arc::new(
                builtin::catalog()
                    .unwrap_or_else(|e| panic!("Builtin material catalog is invalid: {}", e)),
            ),
        };

        let config = app
            .world()
            .get_resource::<HdMaterialConfig>()
            .cloned()
            .unwrap_or_default();
        let mappings = MaterialMappings::new(catalog, self.native_texture_count, &config);
        let records = MaterialRecords(MaterialRecordBuffer::from_snapshot(&mappings.snapshot()));

        info!(
            "Installed material catalog with {} materials over {} native textures",
            mappings.catalog().len(),
            self.native_texture_count
        );

        app.register_type::<HdMaterialConfig>()
            .init_resource::<HdMaterialConfig>()
            .insert_resource(mappings)
            .insert_resource(records)
            .add_message::<MaterialMappingsRebuilt>()
            .configure_sets(Update, HdMaterialSystems)
            .add_systems(
                Update,
                rebuild_material_mappings
                    .in_set(HdMaterialSystems)
                    .run_if(resource_changed::<HdMaterialConfig>),
            );
    }
}

/// System set for material resolution systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HdMaterialSystems;

/// Sent after every rebuild of the material mappings.
#[derive(Message, Clone, Debug)]
pub struct MaterialMappingsRebuilt {
    pub generation: u64,
    pub active_materials: Vec<MaterialId>,
    pub texture_materials: Vec<MaterialId>,
}

/// GPU records for the latest published generation.
#[derive(Resource, Debug, Deref)]
pub struct MaterialRecords(MaterialRecordBuffer);

/// Rebuilds mappings and records whenever the configuration changes.
///
/// Also runs on the first frame, so readers of [`MaterialMappingsRebuilt`]
/// always see the initial sets.
pub fn rebuild_material_mappings(
    config: Res<HdMaterialConfig>,
    mappings: Res<MaterialMappings>,
    mut records: ResMut<MaterialRecords>,
    mut rebuilt: MessageWriter<MaterialMappingsRebuilt>,
) {
    let Some(tables) = mappings.rebuild(&config) else {
        return;
    };
    let snapshot = MaterialSnapshot::new(Arc::clone(mappings.catalog()), tables);

    records.0 = MaterialRecordBuffer::from_snapshot(&snapshot);

    rebuilt.write(MaterialMappingsRebuilt {
        generation: snapshot.generation(),
        active_materials: snapshot.active_materials(),
        texture_materials: snapshot.texture_materials(),
    });
}
