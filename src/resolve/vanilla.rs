//! Native texture slot mapping.

use bevy::prelude::*;

use super::texture_root;
use crate::catalog::{MaterialCatalog, MaterialId};

/// Build the native texture table from a freshly resolved replacement
/// table.
///
/// Every slot starts out as [`MaterialId::VANILLA`]. Each material with a
/// vanilla index then writes the texture root of its resolved replacement
/// into its slot. Slots at or beyond `native_texture_count` are skipped.
pub fn build_vanilla_table(
    catalog: &MaterialCatalog,
    replacements: &[MaterialId],
    native_texture_count: usize,
) -> Box<[MaterialId]> {
    let mut table = vec![MaterialId::VANILLA; native_texture_count].into_boxed_slice();

    for definition in catalog.iter() {
        let Some(slot) = definition.vanilla_index() else {
            continue;
        };
        let Some(entry) = table.get_mut(slot as usize) else {
            continue;
        };

        *entry = texture_root(catalog, replacements, definition.id());
        if *entry == MaterialId::NONE {
            debug!(
                "Vanilla texture {} ({}) is hidden by the current configuration",
                slot,
                definition.name()
            );
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, MaterialBuilder};
    use crate::config::{ConfigFlag, HdMaterialConfig};
    use crate::resolve::replacement::resolve_all;

    #[test]
    fn test_unclaimed_slots_stay_vanilla() {
        let mut builder = CatalogBuilder::new();
        let brick = builder.add(MaterialBuilder::new("BRICK").with_vanilla_index(2));
        let catalog = builder.build().unwrap();
        let replacements = resolve_all(&catalog, &HdMaterialConfig::default());

        let table = build_vanilla_table(&catalog, &replacements, 4);

        assert_eq!(
            &*table,
            &[MaterialId::VANILLA, MaterialId::VANILLA, brick, MaterialId::VANILLA]
        );
    }

    #[test]
    fn test_slot_holds_texture_root_of_replacement() {
        let mut builder = CatalogBuilder::new();
        let tile = builder.add(MaterialBuilder::new("ROOF_BRICK_TILE").with_vanilla_index(0));
        builder.add(
            MaterialBuilder::new("HD_ROOF_BRICK_TILE")
                .with_parent(tile)
                .replace_if(ConfigFlag::ModelTextures, [tile]),
        );
        let catalog = builder.build().unwrap();
        let replacements = resolve_all(&catalog, &HdMaterialConfig::default());

        let table = build_vanilla_table(&catalog, &replacements, 1);

        assert_eq!(table[0], tile);
    }

    #[test]
    fn test_slots_beyond_host_count_are_skipped() {
        let mut builder = CatalogBuilder::new();
        builder.add(MaterialBuilder::new("SKULLS").with_vanilla_index(100));
        let catalog = builder.build().unwrap();
        let replacements = resolve_all(&catalog, &HdMaterialConfig::default());

        let table = build_vanilla_table(&catalog, &replacements, 64);

        assert_eq!(table.len(), 64);
        assert!(table.iter().all(|&id| id == MaterialId::VANILLA));
    }

    #[test]
    fn test_gated_vanilla_material_is_hidden() {
        let mut builder = CatalogBuilder::new();
        let snow = builder.add(
            MaterialBuilder::new("SNOW_FLAKES")
                .with_vanilla_index(0)
                .only_if(ConfigFlag::WinterTheme),
        );
        let catalog = builder.build().unwrap();

        let off = resolve_all(&catalog, &HdMaterialConfig::default());
        assert_eq!(build_vanilla_table(&catalog, &off, 1)[0], MaterialId::NONE);

        let on_config = HdMaterialConfig::default().with_flag(ConfigFlag::WinterTheme, true);
        let on = resolve_all(&catalog, &on_config);
        assert_eq!(build_vanilla_table(&catalog, &on, 1)[0], snow);
    }
}
