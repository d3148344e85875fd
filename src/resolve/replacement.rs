//! Conditional replacement resolution.

use crate::catalog::{MaterialCatalog, MaterialId};
use crate::config::HdMaterialConfig;

/// Resolve a single material under `config`.
///
/// The latest-declared material that replaces `id` and whose condition
/// holds wins. If the material reached this way is itself gated by a
/// condition that does not hold, the result is [`MaterialId::NONE`].
pub fn resolve_one(catalog: &MaterialCatalog, config: &HdMaterialConfig, id: MaterialId) -> MaterialId {
    if !catalog.contains(id) {
        return MaterialId::NONE;
    }

    let reached = catalog
        .replacers_of(id)
        .iter()
        .copied()
        .find(|&replacer| {
            catalog
                .get(replacer)
                .replacement_condition()
                .is_some_and(|condition| condition.evaluate(config))
        })
        .unwrap_or(id);

    match catalog.get(reached).replacement_condition() {
        Some(condition) if !condition.evaluate(config) => MaterialId::NONE,
        _ => reached,
    }
}

/// Resolve every material in the catalog, indexed by declaration index.
pub fn resolve_all(catalog: &MaterialCatalog, config: &HdMaterialConfig) -> Box<[MaterialId]> {
    catalog
        .iter()
        .map(|definition| resolve_one(catalog, config, definition.id()))
        .collect()
}
