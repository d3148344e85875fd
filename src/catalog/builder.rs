//! Builder for constructing material catalogs.

use std::collections::HashMap;

use bevy::prelude::*;

use super::definition::{MaterialBuilder, MaterialDefinition, MaterialId};
use super::properties::MaterialProperties;
use super::registry::MaterialCatalog;
use super::validation::{self, CatalogError, MAX_CATALOG_MATERIALS};

/// Number of native texture slots in the host engine's texture table.
pub const VANILLA_TEXTURE_COUNT: u32 = 128;

/// Builder for creating [`MaterialCatalog`] instances.
///
/// Handles are assigned in declaration order as materials are added, and
/// `NONE` and `VANILLA` are always the first two entries. Nothing is checked
/// until [`build`](Self::build), which fails on the first structural fault.
///
/// # Example
///
/// ```
/// use bevy_hd_materials::prelude::*;
///
/// let mut builder = CatalogBuilder::new();
/// let leaves = builder.add(MaterialBuilder::new("WILLOW_LEAVES").with_vanilla_index(30).transparent());
/// let winter = builder.add(
///     MaterialBuilder::new("WINTER_WILLOW_LEAVES").replace_if(ConfigFlag::WinterTheme, [leaves]),
/// );
///
/// let catalog = builder.build().unwrap();
/// assert_eq!(catalog.replacers_of(leaves), &[winter]);
/// ```
pub struct CatalogBuilder {
    declarations: Vec<MaterialBuilder>,
    vanilla_texture_count: u32,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    /// Create a builder holding only `NONE` and `VANILLA`.
    pub fn new() -> Self {
        let vanilla = MaterialBuilder::new("VANILLA")
            .with_parent(MaterialId::NONE)
            .transparent();

        Self {
            declarations: vec![MaterialBuilder::new("NONE"), vanilla],
            vanilla_texture_count: VANILLA_TEXTURE_COUNT,
        }
    }

    /// Set the number of native texture slots vanilla indices must fit in.
    ///
    /// Default: [`VANILLA_TEXTURE_COUNT`]
    pub fn with_vanilla_texture_count(mut self, count: u32) -> Self {
        self.vanilla_texture_count = count;
        self
    }

    /// Declare a material and return its handle.
    pub fn add(&mut self, material: MaterialBuilder) -> MaterialId {
        let id = MaterialId::from_index(self.declarations.len());
        self.declarations.push(material);
        id
    }

    /// Number of materials declared so far, including the two reserved ones.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Validate every declaration, resolve attribute inheritance and publish
    /// the catalog.
    pub fn build(self) -> Result<MaterialCatalog, CatalogError> {
        let count = self.declarations.len();
        if count > MAX_CATALOG_MATERIALS {
            return Err(CatalogError::TooManyMaterials {
                count,
                max: MAX_CATALOG_MATERIALS,
            });
        }

        let mut by_name = HashMap::with_capacity(count);
        let mut vanilla_owners: HashMap<u32, MaterialId> = HashMap::new();
        let mut definitions: Vec<MaterialDefinition> = Vec::with_capacity(count);
        let mut named_targets: Vec<(usize, Vec<String>)> = Vec::new();

        for (index, decl) in self.declarations.into_iter().enumerate() {
            let id = MaterialId::from_index(index);
            validation::validate_declaration(id, &decl, count, self.vanilla_texture_count)?;

            if by_name.insert(decl.name.clone(), id).is_some() {
                return Err(CatalogError::DuplicateName { name: decl.name });
            }

            if let Some(slot) = decl.vanilla_index {
                if let Some(&first) = vanilla_owners.get(&slot) {
                    return Err(CatalogError::DuplicateVanillaIndex {
                        index: slot,
                        first: definitions[first.index()].name.clone(),
                        second: decl.name,
                    });
                }
                vanilla_owners.insert(slot, id);
            }

            // Parents are validated to precede the child, so their
            // properties are already final here.
            let properties = match decl.parent {
                Some(parent) => definitions[parent.index()].properties.merged(&decl.overrides),
                None => MaterialProperties::default().merged(&decl.overrides),
            };

            if !decl.replacement_target_names.is_empty() {
                named_targets.push((index, decl.replacement_target_names));
            }

            definitions.push(MaterialDefinition {
                id,
                name: decl.name,
                parent: decl.parent,
                vanilla_index: decl.vanilla_index,
                properties,
                replacement_targets: decl.replacement_targets,
                condition: decl.condition,
            });
        }

        // Every name is known now, so forward targets can be looked up.
        for (index, names) in named_targets {
            let definition = &mut definitions[index];
            for reference in names {
                let Some(&target) = by_name.get(&reference) else {
                    return Err(CatalogError::UnknownMaterialName {
                        name: definition.name.clone(),
                        reference,
                    });
                };
                if target == MaterialId::NONE {
                    return Err(CatalogError::ReplacesNone {
                        name: definition.name.clone(),
                    });
                }
                definition.replacement_targets.push(target);
            }
        }

        for definition in &mut definitions {
            definition.replacement_targets.sort_unstable();
            definition.replacement_targets.dedup();
        }
        validation::validate_replacement_chains(&definitions)?;

        let catalog = MaterialCatalog::new(definitions, by_name, self.vanilla_texture_count);
        debug!(
            "Built material catalog with {} materials ({} conditional, {} vanilla slots)",
            catalog.len(),
            catalog
                .iter()
                .filter(|d| d.replacement_condition().is_some())
                .count(),
            vanilla_owners.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::properties::Specular;
    use crate::config::ConfigFlag;

    #[test]
    fn test_reserved_materials() {
        let catalog = CatalogBuilder::new().build().unwrap();

        assert_eq!(catalog.len(), 2);
        let none = catalog.get(MaterialId::NONE);
        assert_eq!(none.name(), "NONE");
        assert!(none.parent().is_none());
        assert!(none.replacement_condition().is_none());

        let vanilla = catalog.get(MaterialId::VANILLA);
        assert_eq!(vanilla.parent(), Some(MaterialId::NONE));
        assert!(vanilla.properties().has_transparency);
    }

    #[test]
    fn test_handles_follow_declaration_order() {
        let mut builder = CatalogBuilder::new();
        let a = builder.add(MaterialBuilder::new("A"));
        let b = builder.add(MaterialBuilder::new("B"));

        assert_eq!(a.index(), 2);
        assert_eq!(b.index(), 3);
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn test_inheritance_chain() {
        let mut builder = CatalogBuilder::new();
        let white = builder.add(MaterialBuilder::new("WHITE").with_parent(MaterialId::NONE));
        let gloss = builder.add(
            MaterialBuilder::new("BLANK_GLOSS")
                .with_parent(white)
                .with_specular(0.9, 280.0)
                .with_brightness(0.5),
        );
        let child = builder.add(
            MaterialBuilder::new("BLANK_GLOSS_WIDE")
                .with_parent(gloss)
                .with_texture_scale(2.0, 1.0),
        );

        let catalog = builder.build().unwrap();
        let props = catalog.get(child).properties();

        assert_eq!(props.specular, Specular::new(0.9, 280.0));
        assert_eq!(props.brightness, 0.5);
        assert_eq!(props.texture_scale, Vec2::new(2.0, 1.0));
        assert_eq!(props.displacement_scale, 0.1);
    }

    #[test]
    fn test_vanilla_index_and_rules_are_not_inherited() {
        let mut builder = CatalogBuilder::new();
        let tile = builder.add(MaterialBuilder::new("ROOF_BRICK_TILE").with_vanilla_index(45));
        let ice = builder.add(MaterialBuilder::new("ICE").replace_if(ConfigFlag::WinterTheme, [tile]));
        let hd = builder.add(MaterialBuilder::new("HD_ROOF_BRICK_TILE").with_parent(tile));
        let ice_child = builder.add(MaterialBuilder::new("ICE_CHILD").with_parent(ice));

        let catalog = builder.build().unwrap();

        assert_eq!(catalog.get(hd).vanilla_index(), None);
        assert!(catalog.get(ice_child).replacement_targets().is_empty());
        assert!(catalog.get(ice_child).replacement_condition().is_none());
    }

    #[test]
    fn test_forward_parent_fails_fast() {
        let mut builder = CatalogBuilder::new();
        let later = MaterialId::from_index(builder.len() + 1);
        builder.add(MaterialBuilder::new("CHILD").with_parent(later));
        builder.add(MaterialBuilder::new("PARENT"));

        assert!(matches!(
            builder.build(),
            Err(CatalogError::ForwardParent { .. })
        ));
    }

    #[test]
    fn test_duplicate_name() {
        let mut builder = CatalogBuilder::new();
        builder.add(MaterialBuilder::new("GRASS_1"));
        builder.add(MaterialBuilder::new("GRASS_1"));

        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::DuplicateName {
                name: "GRASS_1".into()
            }
        );
    }

    #[test]
    fn test_duplicate_vanilla_index() {
        let mut builder = CatalogBuilder::new();
        builder.add(MaterialBuilder::new("BRICK").with_vanilla_index(2));
        builder.add(MaterialBuilder::new("OTHER_BRICK").with_vanilla_index(2));

        assert!(matches!(
            builder.build(),
            Err(CatalogError::DuplicateVanillaIndex { index: 2, .. })
        ));
    }

    #[test]
    fn test_custom_vanilla_texture_count() {
        let mut builder = CatalogBuilder::new().with_vanilla_texture_count(4);
        builder.add(MaterialBuilder::new("BRICK").with_vanilla_index(4));

        assert!(matches!(
            builder.build(),
            Err(CatalogError::VanillaIndexOutOfRange { max: 4, .. })
        ));
    }

    #[test]
    fn test_chained_replacement_is_rejected() {
        let mut builder = CatalogBuilder::new();
        let a = builder.add(MaterialBuilder::new("A"));
        let r = builder.add(MaterialBuilder::new("R").replace_if(ConfigFlag::WinterTheme, [a]));
        builder.add(MaterialBuilder::new("R2").replace_if(ConfigFlag::WinterTheme, [r]));

        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::ChainedReplacement {
                name: "R2".into(),
                target: "R".into()
            }
        );
    }

    #[test]
    fn test_replacing_a_gated_material_is_rejected() {
        let mut builder = CatalogBuilder::new();
        let puddle = builder.add(MaterialBuilder::new("PUDDLE").only_if(ConfigFlag::WinterTheme));
        builder.add(MaterialBuilder::new("HD_PUDDLE").replace_if(ConfigFlag::ModelTextures, [puddle]));

        assert!(matches!(
            builder.build(),
            Err(CatalogError::ChainedReplacement { .. })
        ));
    }

    #[test]
    fn test_self_replacement_is_rejected() {
        let mut builder = CatalogBuilder::new();
        builder.add(
            MaterialBuilder::new("SELFISH").replace_named_if(ConfigFlag::WinterTheme, ["SELFISH"]),
        );

        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::ChainedReplacement {
                name: "SELFISH".into(),
                target: "SELFISH".into()
            }
        );
    }

    #[test]
    fn test_named_forward_targets() {
        let mut builder = CatalogBuilder::new();
        let ice = builder.add(
            MaterialBuilder::new("ICE_1")
                .replace_named_if(ConfigFlag::WinterTheme, ["WATER_FLAT_2", "WATER_FLAT"]),
        );
        let water = builder.add(MaterialBuilder::new("WATER_FLAT").with_vanilla_index(1));
        let water_2 = builder.add(MaterialBuilder::new("WATER_FLAT_2").with_vanilla_index(24));

        let catalog = builder.build().unwrap();

        assert_eq!(catalog.get(ice).replacement_targets(), &[water, water_2]);
        assert_eq!(catalog.replacers_of(water), &[ice]);
        assert_eq!(catalog.replacers_of(water_2), &[ice]);
    }

    #[test]
    fn test_unknown_target_name() {
        let mut builder = CatalogBuilder::new();
        builder.add(MaterialBuilder::new("ICE_1").replace_named_if(ConfigFlag::WinterTheme, ["LAKE"]));

        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::UnknownMaterialName {
                name: "ICE_1".into(),
                reference: "LAKE".into()
            }
        );
    }

    #[test]
    fn test_named_none_target() {
        let mut builder = CatalogBuilder::new();
        builder.add(MaterialBuilder::new("X").replace_named_if(ConfigFlag::WinterTheme, ["NONE"]));

        assert!(matches!(
            builder.build(),
            Err(CatalogError::ReplacesNone { .. })
        ));
    }

    #[test]
    fn test_too_many_materials() {
        let mut builder = CatalogBuilder::new();
        while builder.len() <= MAX_CATALOG_MATERIALS {
            builder.add(MaterialBuilder::default());
        }

        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::TooManyMaterials {
                count: MAX_CATALOG_MATERIALS + 1,
                max: MAX_CATALOG_MATERIALS
            }
        );
    }

    #[test]
    fn test_replacement_targets_are_deduplicated() {
        let mut builder = CatalogBuilder::new();
        let water = builder.add(MaterialBuilder::new("WATER_FLAT"));
        let ice = builder.add(
            MaterialBuilder::new("ICE_1")
                .replace_if(ConfigFlag::WinterTheme, [water, water])
                .replace_if(ConfigFlag::WinterTheme, [water]),
        );

        let catalog = builder.build().unwrap();
        assert_eq!(catalog.get(ice).replacement_targets(), &[water]);
    }
}
