//! The published, immutable material catalog.

use std::collections::HashMap;
use std::fmt::Write;

use bevy::prelude::*;

use super::definition::{MaterialDefinition, MaterialId};

/// Ordered registry of every material definition.
///
/// Built once through [`CatalogBuilder`](super::CatalogBuilder) and never
/// modified afterwards, so it can be shared freely between threads.
#[derive(Debug)]
pub struct MaterialCatalog {
    definitions: Vec<MaterialDefinition>,
    by_name: HashMap<String, MaterialId>,
    /// For each material, the materials that list it as a replacement
    /// target, latest declaration first.
    replaced_by: Vec<Vec<MaterialId>>,
    vanilla_texture_count: u32,
}

impl MaterialCatalog {
    pub(crate) fn new(
        definitions: Vec<MaterialDefinition>,
        by_name: HashMap<String, MaterialId>,
        vanilla_texture_count: u32,
    ) -> Self {
        let mut replaced_by = vec![Vec::new(); definitions.len()];
        for definition in definitions.iter().rev() {
            for target in definition.replacement_targets() {
                replaced_by[target.index()].push(definition.id());
            }
        }

        Self {
            definitions,
            by_name,
            replaced_by,
            vanilla_texture_count,
        }
    }

    /// Get the number of materials in this catalog.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Check whether `id` belongs to this catalog.
    pub fn contains(&self, id: MaterialId) -> bool {
        id.index() < self.definitions.len()
    }

    /// Get a definition by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was handed out by a different catalog and is out of
    /// range. Use [`try_get`](Self::try_get) for untrusted handles.
    pub fn get(&self, id: MaterialId) -> &MaterialDefinition {
        &self.definitions[id.index()]
    }

    pub fn try_get(&self, id: MaterialId) -> Option<&MaterialDefinition> {
        self.definitions.get(id.index())
    }

    /// Look up a material by its declared name.
    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    /// Iterate definitions in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MaterialDefinition> {
        self.definitions.iter()
    }

    /// Materials that replace `id` when their condition holds, in
    /// decreasing declaration order.
    pub fn replacers_of(&self, id: MaterialId) -> &[MaterialId] {
        self.replaced_by
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of native texture slots vanilla indices were checked against.
    pub fn vanilla_texture_count(&self) -> u32 {
        self.vanilla_texture_count
    }

    /// Lowercased file stem of the image backing `id`'s own texture.
    pub fn texture_file_stem(&self, id: MaterialId) -> Option<String> {
        self.try_get(id).map(MaterialDefinition::texture_file_stem)
    }

    /// Render one `#define` per material so shaders can refer to
    /// materials by name.
    ///
    /// ```
    /// use bevy_hd_materials::prelude::*;
    ///
    /// let catalog = CatalogBuilder::new().build().unwrap();
    /// assert_eq!(catalog.shader_defines("MAT"), "#define MAT_NONE 0\n#define MAT_VANILLA 1\n");
    /// ```
    pub fn shader_defines(&self, prefix: &str) -> String {
        let mut defines = String::new();
        for definition in &self.definitions {
            // Writing into a String cannot fail.
            let _ = writeln!(
                defines,
                "#define {}_{} {}",
                prefix,
                definition.name(),
                definition.id().index()
            );
        }
        debug!(
            "Generated {} material shader defines with prefix '{}_'",
            self.definitions.len(),
            prefix
        );
        defines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, MaterialBuilder};
    use crate::config::ConfigFlag;

    #[test]
    fn test_find_by_name() {
        let mut builder = CatalogBuilder::new();
        let grass = builder.add(MaterialBuilder::new("GRASS_1"));
        let catalog = builder.build().unwrap();

        assert_eq!(catalog.find("GRASS_1"), Some(grass));
        assert_eq!(catalog.find("NONE"), Some(MaterialId::NONE));
        assert_eq!(catalog.find("grass_1"), None);
    }

    #[test]
    fn test_replacers_latest_first() {
        let mut builder = CatalogBuilder::new();
        let base = builder.add(MaterialBuilder::new("A"));
        let b = builder.add(MaterialBuilder::new("B").replace_if(ConfigFlag::WinterTheme, [base]));
        let c = builder.add(MaterialBuilder::new("C").replace_if(ConfigFlag::ModelTextures, [base]));
        let catalog = builder.build().unwrap();

        assert_eq!(catalog.replacers_of(base), &[c, b]);
        assert!(catalog.replacers_of(c).is_empty());
        assert!(catalog.replacers_of(MaterialId::from_index(999)).is_empty());
    }

    #[test]
    fn test_forward_replacement_is_indexed() {
        let mut builder = CatalogBuilder::new();
        let early = builder.add(MaterialBuilder::new("EARLY").replace_named_if(ConfigFlag::WinterTheme, ["LATE"]));
        let late = builder.add(MaterialBuilder::new("LATE"));
        let catalog = builder.build().unwrap();

        assert_eq!(catalog.replacers_of(late), &[early]);
    }

    #[test]
    fn test_texture_file_stem() {
        let mut builder = CatalogBuilder::new();
        let dirt = builder.add(MaterialBuilder::new("DIRT_1_SHINY"));
        let catalog = builder.build().unwrap();

        assert_eq!(catalog.texture_file_stem(dirt).as_deref(), Some("dirt_1_shiny"));
        assert_eq!(catalog.texture_file_stem(MaterialId::from_index(50)), None);
    }
}
