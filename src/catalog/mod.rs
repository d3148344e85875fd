//! Material catalog: declarations, attribute inheritance and the immutable
//! registry backing every resolution pass.
//!
//! Materials are declared in order through [`CatalogBuilder`]. Declaration
//! order is significant twice over: a parent must be declared before its
//! children, and later replacement rules take priority over earlier ones.

mod builder;
pub mod builtin;
mod definition;
mod properties;
mod registry;
mod validation;

pub use builder::{CatalogBuilder, VANILLA_TEXTURE_COUNT};
pub use definition::{MaterialBuilder, MaterialDefinition, MaterialId};
pub use properties::{FlowMap, MaterialOverrides, MaterialProperties, Specular};
pub use registry::MaterialCatalog;
pub use validation::{CatalogError, MAX_CATALOG_MATERIALS};
