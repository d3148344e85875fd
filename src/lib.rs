//! # bevy_hd_materials
//!
//! A Bevy plugin that resolves which HD material renders each surface of a
//! host renderer, based on a declarative material catalog and a handful of
//! user settings.
//!
//! ## Features
//!
//! - Ordered material catalog with single-parent attribute inheritance
//! - Conditional replacement rules (seasonal themes, HD model textures)
//! - Mapping from the host's native texture slots to materials
//! - Texture-root lookup for sharing images between shading variants
//! - Atomically published tables, safe to read from render threads
//! - `Pod` GPU records for every active material
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_hd_materials::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(HdMaterialPlugin::default())
//!         .add_systems(Update, (toggle_winter, load_textures))
//!         .run();
//! }
//!
//! fn toggle_winter(keys: Res<ButtonInput<KeyCode>>, mut config: ResMut<HdMaterialConfig>) {
//!     if keys.just_pressed(KeyCode::KeyW) {
//!         config.winter_theme = !config.winter_theme;
//!     }
//! }
//!
//! fn load_textures(
//!     mut rebuilt: MessageReader<MaterialMappingsRebuilt>,
//!     mappings: Res<MaterialMappings>,
//!     asset_server: Res<AssetServer>,
//! ) {
//!     for _ in rebuilt.read() {
//!         for (_, stem) in mappings.snapshot().texture_files() {
//!             let _image: Handle<Image> = asset_server.load(format!("materials/{stem}.png"));
//!         }
//!     }
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod gpu;
mod plugin;
pub mod resolve;

pub use plugin::{
    HdMaterialPlugin, HdMaterialSystems, MaterialMappingsRebuilt, MaterialRecords,
    rebuild_material_mappings,
};

pub mod prelude {
    pub use crate::catalog::{
        CatalogBuilder, CatalogError, MaterialBuilder, MaterialCatalog, MaterialId,
        MaterialProperties,
    };
    pub use crate::config::{Condition, ConfigFlag, HdMaterialConfig};
    pub use crate::gpu::{MaterialPropertiesGpu, MaterialRecordBuffer};
    pub use crate::plugin::{HdMaterialPlugin, MaterialMappingsRebuilt, MaterialRecords};
    pub use crate::resolve::{MaterialMappings, MaterialSnapshot};
}
