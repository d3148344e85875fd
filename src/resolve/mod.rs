//! Run-time material resolution.
//!
//! Whenever the configuration changes, two tables are rebuilt from scratch:
//! - the replacement table, mapping every material to the one actually used
//! - the vanilla table, mapping native texture slots to materials
//!
//! Both live in an immutable [`ResolvedTables`] that is published as a
//! whole by [`MaterialMappings`], so readers see either the old or the new
//! generation and never a mix.

mod mappings;
mod replacement;
mod vanilla;

use std::collections::HashSet;

pub use mappings::{MaterialMappings, MaterialSnapshot};
pub use replacement::{resolve_all, resolve_one};
pub use vanilla::build_vanilla_table;

use crate::catalog::{MaterialCatalog, MaterialId};
use crate::config::HdMaterialConfig;

/// Follow parent links from the resolved replacement of `id` up to the
/// material that owns the texture.
///
/// Terminates because parents always precede their children.
pub fn texture_root(
    catalog: &MaterialCatalog,
    replacements: &[MaterialId],
    id: MaterialId,
) -> MaterialId {
    let mut root = replacements
        .get(id.index())
        .copied()
        .unwrap_or(MaterialId::NONE);
    while let Some(parent) = catalog.try_get(root).and_then(|d| d.parent()) {
        root = parent;
    }
    root
}

/// One generation of resolved lookup tables.
#[derive(Debug, Clone)]
pub struct ResolvedTables {
    generation: u64,
    config: HdMaterialConfig,
    replacements: Box<[MaterialId]>,
    vanilla: Box<[MaterialId]>,
}

impl ResolvedTables {
    /// Resolve `catalog` under `config`. The replacement table is built
    /// first since the vanilla table depends on it.
    pub fn build(
        catalog: &MaterialCatalog,
        config: &HdMaterialConfig,
        native_texture_count: usize,
        generation: u64,
    ) -> Self {
        let replacements = resolve_all(catalog, config);
        let vanilla = build_vanilla_table(catalog, &replacements, native_texture_count);

        Self {
            generation,
            config: config.clone(),
            replacements,
            vanilla,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Configuration these tables were resolved under.
    pub fn config(&self) -> &HdMaterialConfig {
        &self.config
    }

    /// Replacement table indexed by declaration index.
    pub fn replacements(&self) -> &[MaterialId] {
        &self.replacements
    }

    /// Vanilla table indexed by native texture id.
    pub fn vanilla(&self) -> &[MaterialId] {
        &self.vanilla
    }

    /// Material used in place of `id`. Unknown ids resolve to `NONE`.
    pub fn resolve(&self, id: MaterialId) -> MaterialId {
        self.replacements
            .get(id.index())
            .copied()
            .unwrap_or(MaterialId::NONE)
    }

    /// Material rendering native texture `native_id`.
    ///
    /// The stored slot is resolved again on lookup. Out-of-range ids
    /// return [`MaterialId::VANILLA`].
    pub fn from_vanilla_texture(&self, native_id: i32) -> MaterialId {
        usize::try_from(native_id)
            .ok()
            .and_then(|slot| self.vanilla.get(slot))
            .map_or(MaterialId::VANILLA, |&stored| self.resolve(stored))
    }

    /// Distinct materials in use, in order of first appearance, excluding
    /// `VANILLA`.
    pub fn active_materials(&self) -> Vec<MaterialId> {
        let mut seen = HashSet::new();
        self.replacements
            .iter()
            .copied()
            .filter(|&id| id != MaterialId::VANILLA && seen.insert(id))
            .collect()
    }

    /// Distinct texture roots of every resolved material, in order of
    /// first appearance, excluding `NONE`.
    pub fn texture_materials(&self, catalog: &MaterialCatalog) -> Vec<MaterialId> {
        let mut seen = HashSet::new();
        (0..self.replacements.len())
            .map(|index| texture_root(catalog, &self.replacements, MaterialId::from_index(index)))
            .filter(|&id| id != MaterialId::NONE && seen.insert(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, MaterialBuilder, builtin};
    use crate::config::ConfigFlag;

    fn tables(catalog: &MaterialCatalog, config: &HdMaterialConfig) -> ResolvedTables {
        ResolvedTables::build(catalog, config, 128, 1)
    }

    fn winter(enabled: bool) -> HdMaterialConfig {
        HdMaterialConfig::default().with_flag(ConfigFlag::WinterTheme, enabled)
    }

    #[test]
    fn test_texture_root_walks_to_parentless_ancestor() {
        let mut builder = CatalogBuilder::new();
        let dirt_n = builder.add(MaterialBuilder::new("DIRT_1_N"));
        let dirt = builder.add(
            MaterialBuilder::new("DIRT_1")
                .with_normal_map(dirt_n)
                .with_specular(0.5, 35.0),
        );
        let shiny = builder.add(
            MaterialBuilder::new("DIRT_1_SHINY")
                .with_parent(dirt)
                .with_specular(1.1, 380.0),
        );
        let catalog = builder.build().unwrap();
        let tables = tables(&catalog, &HdMaterialConfig::default());

        assert_eq!(texture_root(&catalog, tables.replacements(), shiny), dirt);
        assert_eq!(texture_root(&catalog, tables.replacements(), dirt), dirt);
        assert_eq!(
            texture_root(&catalog, tables.replacements(), MaterialId::VANILLA),
            MaterialId::NONE
        );
    }

    #[test]
    fn test_texture_root_applies_replacement_first() {
        let mut builder = CatalogBuilder::new();
        let water = builder.add(MaterialBuilder::new("WATER_FLAT").with_vanilla_index(1));
        let water_2 = builder.add(MaterialBuilder::new("WATER_FLAT_2").with_vanilla_index(24));
        let snow = builder.add(MaterialBuilder::new("SNOW_4"));
        let ice = builder.add(
            MaterialBuilder::new("ICE_1")
                .with_parent(snow)
                .replace_if(ConfigFlag::WinterTheme, [water_2, water])
                .with_specular(1.1, 200.0),
        );
        let catalog = builder.build().unwrap();

        let summer = tables(&catalog, &winter(false));
        assert_eq!(summer.resolve(water), water);
        assert_eq!(texture_root(&catalog, summer.replacements(), water), water);

        let cold = tables(&catalog, &winter(true));
        assert_eq!(cold.resolve(water), ice);
        assert_eq!(texture_root(&catalog, cold.replacements(), water), snow);
        // The slot stores the texture root, which has no replacement of its own.
        assert_eq!(cold.from_vanilla_texture(1), snow);
    }

    #[test]
    fn test_from_vanilla_texture() {
        let mut builder = CatalogBuilder::new();
        let brick = builder.add(MaterialBuilder::new("BRICK").with_vanilla_index(2));
        let hd_brick_n = builder.add(MaterialBuilder::new("HD_BRICK_N"));
        let hd_brick = builder.add(
            MaterialBuilder::new("HD_BRICK")
                .replace_if(ConfigFlag::ModelTextures, [brick])
                .with_normal_map(hd_brick_n)
                .with_specular(0.4, 80.0),
        );
        let catalog = builder.build().unwrap();

        let hd = tables(&catalog, &HdMaterialConfig::default().with_flag(ConfigFlag::ModelTextures, true));
        assert_eq!(hd.from_vanilla_texture(2), hd_brick);

        let plain = tables(&catalog, &HdMaterialConfig::default().with_flag(ConfigFlag::ModelTextures, false));
        assert_eq!(plain.from_vanilla_texture(2), brick);
    }

    #[test]
    fn test_from_vanilla_texture_out_of_range() {
        let catalog = CatalogBuilder::new().build().unwrap();
        let tables = tables(&catalog, &HdMaterialConfig::default());

        assert_eq!(tables.from_vanilla_texture(-1), MaterialId::VANILLA);
        assert_eq!(tables.from_vanilla_texture(128), MaterialId::VANILLA);
        assert_eq!(tables.from_vanilla_texture(i32::MAX), MaterialId::VANILLA);
        assert_eq!(tables.from_vanilla_texture(5), MaterialId::VANILLA);
    }

    #[test]
    fn test_vanilla_slot_of_child_replacement_resolves_on_lookup() {
        let mut builder = CatalogBuilder::new();
        let tile = builder.add(MaterialBuilder::new("ROOF_BRICK_TILE").with_vanilla_index(45));
        let hd_tile = builder.add(
            MaterialBuilder::new("HD_ROOF_BRICK_TILE")
                .with_parent(tile)
                .replace_if(ConfigFlag::ModelTextures, [tile]),
        );
        let catalog = builder.build().unwrap();
        let tables = tables(&catalog, &HdMaterialConfig::default());

        assert_eq!(tables.vanilla()[45], tile);
        assert_eq!(tables.from_vanilla_texture(45), hd_tile);
    }

    #[test]
    fn test_set_exclusions() {
        let catalog = builtin::catalog().unwrap();
        for config in HdMaterialConfig::all_combinations() {
            let tables = tables(&catalog, &config);
            let active = tables.active_materials();
            let textures = tables.texture_materials(&catalog);

            assert!(!active.contains(&MaterialId::VANILLA));
            assert!(active.contains(&MaterialId::NONE));
            assert!(!textures.contains(&MaterialId::NONE));

            let distinct: HashSet<_> = active.iter().collect();
            assert_eq!(distinct.len(), active.len());
            let distinct: HashSet<_> = textures.iter().collect();
            assert_eq!(distinct.len(), textures.len());
        }
    }

    #[test]
    fn test_texture_materials_have_no_parent() {
        let catalog = builtin::catalog().unwrap();
        for config in HdMaterialConfig::all_combinations() {
            let tables = tables(&catalog, &config);
            for id in tables.texture_materials(&catalog) {
                assert!(catalog.get(id).parent().is_none());
            }
        }
    }

    #[test]
    fn test_builtin_resolution_is_idempotent() {
        let catalog = builtin::catalog().unwrap();
        for config in HdMaterialConfig::all_combinations() {
            let tables = tables(&catalog, &config);

            assert_eq!(tables.resolve(MaterialId::NONE), MaterialId::NONE);
            for &resolved in tables.replacements() {
                assert_eq!(tables.resolve(resolved), resolved, "{:?}", config);
            }
        }
    }

    #[test]
    fn test_builtin_vanilla_table_holds_roots() {
        let catalog = builtin::catalog().unwrap();
        for config in HdMaterialConfig::all_combinations() {
            let tables = tables(&catalog, &config);
            for &stored in tables.vanilla() {
                assert!(
                    stored == MaterialId::VANILLA || catalog.get(stored).parent().is_none(),
                    "{} has a parent",
                    catalog.get(stored).name()
                );
            }
        }
    }

    #[test]
    fn test_builtin_hd_brick() {
        let catalog = builtin::catalog().unwrap();
        let brick = catalog.find("BRICK").unwrap();
        let hd_brick = catalog.find("HD_BRICK").unwrap();

        let hd = tables(&catalog, &HdMaterialConfig::default());
        assert_eq!(hd.from_vanilla_texture(2), hd_brick);
        assert_eq!(hd.resolve(brick), hd_brick);

        let plain = HdMaterialConfig::default().with_flag(ConfigFlag::ModelTextures, false);
        let plain = tables(&catalog, &plain);
        assert_eq!(plain.from_vanilla_texture(2), brick);
        assert_eq!(plain.resolve(hd_brick), MaterialId::NONE);
    }

    #[test]
    fn test_builtin_winter_water() {
        let catalog = builtin::catalog().unwrap();
        let water = catalog.find("WATER_FLAT").unwrap();
        let glossy_ice = catalog.find("ICE_1_HIGHGLOSS").unwrap();
        let snow = catalog.find("SNOW_4").unwrap();

        let cold = tables(&catalog, &winter(true));
        assert_eq!(cold.resolve(water), glossy_ice);
        assert_eq!(cold.from_vanilla_texture(1), snow);

        let summer = tables(&catalog, &winter(false));
        assert_eq!(summer.resolve(water), water);
        assert_eq!(summer.from_vanilla_texture(1), water);
    }

    #[test]
    fn test_gated_materials_drop_out_of_active_set() {
        let catalog = builtin::catalog().unwrap();
        let winter_willow = catalog.find("WINTER_WILLOW_LEAVES").unwrap();

        let summer = tables(&catalog, &winter(false));
        assert!(!summer.active_materials().contains(&winter_willow));
        assert!(!summer.texture_materials(&catalog).contains(&winter_willow));

        let cold = tables(&catalog, &winter(true));
        assert!(cold.active_materials().contains(&winter_willow));
        assert!(cold.texture_materials(&catalog).contains(&winter_willow));
    }
}
