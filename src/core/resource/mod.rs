//=========================================================================
// Resource Location
//
// Resolves resource names ("textures/grass.png") to files.
//
// Components:
// - `ResourceLocator`: lookup contract, not-found is `Ok(None)`
// - `SimpleResourceLocator`: rooted at one directory
// - `MultiFormatResourceLocator`: tries alternative file extensions
// - `ResourceRegistry`: per-type fallback chains of locators
//
//=========================================================================

//=== Submodules ==========================================================
mod error;
mod locator;
mod multi_format;
mod registry;
mod simple_locator;

//=== Re-exports ==========================================================
pub use error::ResourceError;
pub use locator::{ResourceLocation, ResourceLocator};
pub use multi_format::MultiFormatResourceLocator;
pub use registry::{ResourceRegistry, ResourceType};
pub use simple_locator::SimpleResourceLocator;
