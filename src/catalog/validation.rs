//! Catalog construction checks.

use thiserror::Error;

use super::definition::{MaterialBuilder, MaterialDefinition, MaterialId};

/// Structural faults detected while building a catalog.
///
/// Any of these aborts construction; a catalog is never published
/// partially.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Material '{name}' references unknown material {reference}")]
    UnknownMaterial { name: String, reference: MaterialId },

    #[error("Material '{name}' ({id}) must be declared after its parent {parent}")]
    ForwardParent {
        name: String,
        id: MaterialId,
        parent: MaterialId,
    },

    #[error("Material '{name}' ({id}) uses {slot} {reference}, which is not declared before it")]
    ForwardMapReference {
        name: String,
        id: MaterialId,
        slot: &'static str,
        reference: MaterialId,
    },

    #[error("Material name '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("Material '{name}' has vanilla index {index}, expected less than {max}")]
    VanillaIndexOutOfRange { name: String, index: u32, max: u32 },

    #[error("Vanilla index {index} is claimed by both '{first}' and '{second}'")]
    DuplicateVanillaIndex {
        index: u32,
        first: String,
        second: String,
    },

    #[error("Material '{name}' has invalid {field}: {value}")]
    InvalidAttribute {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("Material '{name}' replaces unknown material '{reference}'")]
    UnknownMaterialName { name: String, reference: String },

    #[error("Material '{name}' may not replace NONE")]
    ReplacesNone { name: String },

    #[error("Material '{name}' replaces '{target}', which is itself conditional")]
    ChainedReplacement { name: String, target: String },

    #[error("Material count ({count}) exceeds maximum ({max})")]
    TooManyMaterials { count: usize, max: usize },
}

/// Most materials a catalog can hold.
pub const MAX_CATALOG_MATERIALS: usize = u16::MAX as usize;

/// Check a material reference against the number of declared materials.
pub fn validate_reference(
    name: &str,
    reference: MaterialId,
    declared: usize,
) -> Result<(), CatalogError> {
    if reference.index() >= declared {
        return Err(CatalogError::UnknownMaterial {
            name: name.to_owned(),
            reference,
        });
    }
    Ok(())
}

/// Check everything about a declaration that does not depend on other
/// declarations' attributes.
///
/// `id` is the handle the declaration was registered under and `declared`
/// the total number of declarations.
pub fn validate_declaration(
    id: MaterialId,
    decl: &MaterialBuilder,
    declared: usize,
    vanilla_texture_count: u32,
) -> Result<(), CatalogError> {
    if let Some(parent) = decl.parent {
        validate_reference(&decl.name, parent, declared)?;
        if parent >= id {
            return Err(CatalogError::ForwardParent {
                name: decl.name.clone(),
                id,
                parent,
            });
        }
    }

    for (slot, reference) in decl.overrides.map_references() {
        validate_reference(&decl.name, reference, declared)?;
        if reference >= id {
            return Err(CatalogError::ForwardMapReference {
                name: decl.name.clone(),
                id,
                slot,
                reference,
            });
        }
    }

    for &target in &decl.replacement_targets {
        validate_reference(&decl.name, target, declared)?;
        if target == MaterialId::NONE {
            return Err(CatalogError::ReplacesNone {
                name: decl.name.clone(),
            });
        }
    }

    if let Some(index) = decl.vanilla_index {
        if index >= vanilla_texture_count {
            return Err(CatalogError::VanillaIndexOutOfRange {
                name: decl.name.clone(),
                index,
                max: vanilla_texture_count,
            });
        }
    }

    for (field, value) in decl.overrides.floats() {
        validate_float(&decl.name, field, value)?;
    }

    Ok(())
}

/// Check that no replacement rule targets a conditional material.
///
/// Replacements resolve in a single step, so a target must never carry a
/// condition of its own. This includes a material replacing itself.
pub fn validate_replacement_chains(
    definitions: &[MaterialDefinition],
) -> Result<(), CatalogError> {
    for definition in definitions {
        for target in definition.replacement_targets() {
            let target = &definitions[target.index()];
            if target.replacement_condition().is_some() {
                return Err(CatalogError::ChainedReplacement {
                    name: definition.name().to_owned(),
                    target: target.name().to_owned(),
                });
            }
        }
    }
    Ok(())
}

fn validate_float(name: &str, field: &'static str, value: f32) -> Result<(), CatalogError> {
    let valid = match field {
        "brightness" | "specular.strength" | "specular.gloss" | "displacement_scale" => {
            value.is_finite() && value >= 0.0
        }
        "texture_scale" => value.is_finite() && value > 0.0,
        _ => value.is_finite(),
    };

    if !valid {
        return Err(CatalogError::InvalidAttribute {
            name: name.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> MaterialId {
        MaterialId::from_index(index)
    }

    #[test]
    fn test_forward_parent() {
        let decl = MaterialBuilder::new("CHILD").with_parent(id(5));
        let err = validate_declaration(id(3), &decl, 10, 128).unwrap_err();
        assert!(matches!(err, CatalogError::ForwardParent { .. }));
    }

    #[test]
    fn test_self_parent_is_rejected() {
        let decl = MaterialBuilder::new("LOOP").with_parent(id(3));
        let err = validate_declaration(id(3), &decl, 10, 128).unwrap_err();
        assert!(matches!(err, CatalogError::ForwardParent { .. }));
    }

    #[test]
    fn test_unknown_reference() {
        let decl = MaterialBuilder::new("X").with_normal_map(id(40));
        let err = validate_declaration(id(3), &decl, 10, 128).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownMaterial {
                name: "X".into(),
                reference: id(40)
            }
        );
    }

    #[test]
    fn test_forward_map_reference() {
        let decl = MaterialBuilder::new("X").with_normal_map(id(4));
        let err = validate_declaration(id(3), &decl, 10, 128).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ForwardMapReference {
                slot: "normal_map",
                ..
            }
        ));
    }

    #[test]
    fn test_forward_replacement_target_is_allowed() {
        let decl = MaterialBuilder::new("X").replace_if(crate::config::ConfigFlag::WinterTheme, [id(9)]);
        assert!(validate_declaration(id(3), &decl, 10, 128).is_ok());
    }

    #[test]
    fn test_replacing_none() {
        let decl = MaterialBuilder::new("X")
            .replace_if(crate::config::ConfigFlag::WinterTheme, [MaterialId::NONE]);
        let err = validate_declaration(id(3), &decl, 10, 128).unwrap_err();
        assert!(matches!(err, CatalogError::ReplacesNone { .. }));
    }

    #[test]
    fn test_vanilla_index_range() {
        let decl = MaterialBuilder::new("X").with_vanilla_index(128);
        let err = validate_declaration(id(3), &decl, 10, 128).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::VanillaIndexOutOfRange { index: 128, max: 128, .. }
        ));
    }

    #[test]
    fn test_invalid_floats() {
        let nan = MaterialBuilder::new("X").with_brightness(f32::NAN);
        assert!(matches!(
            validate_declaration(id(3), &nan, 10, 128),
            Err(CatalogError::InvalidAttribute { field: "brightness", .. })
        ));

        let zero_scale = MaterialBuilder::new("X").with_texture_scale(0.0, 1.0);
        assert!(matches!(
            validate_declaration(id(3), &zero_scale, 10, 128),
            Err(CatalogError::InvalidAttribute { field: "texture_scale", .. })
        ));

        let backwards_scroll = MaterialBuilder::new("X").with_scroll(0.0, -1.0 / 0.7);
        assert!(validate_declaration(id(3), &backwards_scroll, 10, 128).is_ok());
    }
}
