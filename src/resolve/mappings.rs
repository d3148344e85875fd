//! Published resolution state shared with renderer and texture systems.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bevy::prelude::*;
use parking_lot::RwLock;

use super::{ResolvedTables, texture_root};
use crate::catalog::{MaterialCatalog, MaterialDefinition, MaterialId, MaterialProperties};
use crate::config::HdMaterialConfig;

/// The material catalog together with the latest resolved tables.
///
/// Rebuilding resolves into fresh tables and then swaps the published
/// pointer, so a reader on another thread holding a [`MaterialSnapshot`]
/// keeps a consistent generation for as long as it needs.
#[derive(Resource)]
pub struct MaterialMappings {
    catalog: Arc<MaterialCatalog>,
    native_texture_count: usize,
    current: RwLock<Arc<ResolvedTables>>,
    next_generation: AtomicU64,
}

impl MaterialMappings {
    /// Create mappings and resolve them once under `config`.
    pub fn new(
        catalog: Arc<MaterialCatalog>,
        native_texture_count: usize,
        config: &HdMaterialConfig,
    ) -> Self {
        let tables = ResolvedTables::build(&catalog, config, native_texture_count, 0);
        Self {
            catalog,
            native_texture_count,
            current: RwLock::new(Arc::new(tables)),
            next_generation: AtomicU64::new(1),
        }
    }

    pub fn catalog(&self) -> &Arc<MaterialCatalog> {
        &self.catalog
    }

    /// Number of native texture slots the vanilla table covers.
    pub fn native_texture_count(&self) -> usize {
        self.native_texture_count
    }

    /// Recompute both tables under `config` and publish them.
    ///
    /// Must be called whenever any configuration flag changes. Returns
    /// `None` if a newer generation was published while this one was being
    /// built; the new tables are then dropped.
    pub fn rebuild(&self, config: &HdMaterialConfig) -> Option<Arc<ResolvedTables>> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let tables = Arc::new(ResolvedTables::build(
            &self.catalog,
            config,
            self.native_texture_count,
            generation,
        ));

        if !self.publish(Arc::clone(&tables)) {
            debug!(
                "Dropped material mappings generation {}, a newer one is published",
                generation
            );
            return None;
        }

        debug!(
            "Resolved material mappings generation {}: {} active, {} with textures",
            generation,
            tables.active_materials().len(),
            tables.texture_materials(&self.catalog).len()
        );
        Some(tables)
    }

    /// Swap in `tables` unless a newer generation is already published.
    pub(crate) fn publish(&self, tables: Arc<ResolvedTables>) -> bool {
        let mut current = self.current.write();
        // A slower concurrent rebuild must not overwrite a newer one.
        if current.generation() >= tables.generation() {
            return false;
        }
        *current = tables;
        true
    }

    /// Latest published tables.
    pub fn tables(&self) -> Arc<ResolvedTables> {
        Arc::clone(&*self.current.read())
    }

    /// Consistent view of the catalog and the latest tables.
    pub fn snapshot(&self) -> MaterialSnapshot {
        MaterialSnapshot {
            catalog: Arc::clone(&self.catalog),
            tables: self.tables(),
        }
    }

    pub fn resolve_replacement(&self, id: MaterialId) -> MaterialId {
        self.tables().resolve(id)
    }

    pub fn texture_root(&self, id: MaterialId) -> MaterialId {
        self.snapshot().texture_root(id)
    }

    pub fn from_vanilla_texture(&self, native_id: i32) -> MaterialId {
        self.tables().from_vanilla_texture(native_id)
    }

    pub fn active_materials(&self) -> Vec<MaterialId> {
        self.tables().active_materials()
    }

    pub fn texture_materials(&self) -> Vec<MaterialId> {
        self.snapshot().texture_materials()
    }
}

/// A catalog paired with one generation of resolved tables.
///
/// Every query answered by a snapshot reflects the same configuration.
#[derive(Clone, Debug)]
pub struct MaterialSnapshot {
    catalog: Arc<MaterialCatalog>,
    tables: Arc<ResolvedTables>,
}

impl MaterialSnapshot {
    pub fn new(catalog: Arc<MaterialCatalog>, tables: Arc<ResolvedTables>) -> Self {
        Self { catalog, tables }
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn tables(&self) -> &ResolvedTables {
        &self.tables
    }

    pub fn generation(&self) -> u64 {
        self.tables.generation()
    }

    pub fn resolve_replacement(&self, id: MaterialId) -> MaterialId {
        self.tables.resolve(id)
    }

    /// Material owning the texture that `id` renders with.
    pub fn texture_root(&self, id: MaterialId) -> MaterialId {
        texture_root(&self.catalog, self.tables.replacements(), id)
    }

    pub fn from_vanilla_texture(&self, native_id: i32) -> MaterialId {
        self.tables.from_vanilla_texture(native_id)
    }

    /// Materials that need a GPU attribute record.
    pub fn active_materials(&self) -> Vec<MaterialId> {
        self.tables.active_materials()
    }

    /// Materials whose image files must be loaded.
    pub fn texture_materials(&self) -> Vec<MaterialId> {
        self.tables.texture_materials(&self.catalog)
    }

    /// Texture materials paired with the file stem of their image.
    pub fn texture_files(&self) -> Vec<(MaterialId, String)> {
        self.texture_materials()
            .into_iter()
            .map(|id| (id, self.catalog.get(id).texture_file_stem()))
            .collect()
    }

    pub fn definition(&self, id: MaterialId) -> Option<&MaterialDefinition> {
        self.catalog.try_get(id)
    }

    /// Effective attributes of `id` itself, without resolving replacements.
    pub fn properties(&self, id: MaterialId) -> Option<&MaterialProperties> {
        self.catalog.try_get(id).map(MaterialDefinition::properties)
    }
}
