//=========================================================================
// Resource Registry
//=========================================================================
//
// Ordered locator chains keyed by resource type.
//
// Architecture:
//   locate(Texture, "grass.png")
//     → chain[Texture] = [mod_dir, base_dir, fallback]
//     → first locator answering Some(..) wins
//
// A failing locator does not break the chain: its error is logged and the
// next locator is asked. Malformed names are the exception, they would
// fail everywhere and are returned directly.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

//=== External Crates =====================================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::error::ResourceError;
use super::locator::{validate_name, ResourceLocation, ResourceLocator};

//=== ResourceType ========================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Texture,
    Model,
    Shader,
    Audio,
    Custom(String),
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture => f.write_str("texture"),
            Self::Model => f.write_str("model"),
            Self::Shader => f.write_str("shader"),
            Self::Audio => f.write_str("audio"),
            Self::Custom(kind) => f.write_str(kind),
        }
    }
}

//=== ResourceRegistry ====================================================

#[derive(Debug, Default)]
pub struct ResourceRegistry {
    chains: HashMap<ResourceType, Vec<Arc<dyn ResourceLocator>>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Chain Management -------------------------------------------------

    /// Appends a locator to the end of the chain for `kind`.
    pub fn add_locator(&mut self, kind: ResourceType, locator: Arc<dyn ResourceLocator>) {
        debug!(target: "resource", "Adding {:?} to {} chain", locator, kind);
        self.chains.entry(kind).or_default().push(locator);
    }

    /// Removes a locator by identity. Returns whether it was registered.
    pub fn remove_locator(&mut self, kind: &ResourceType, locator: &Arc<dyn ResourceLocator>) -> bool {
        let Some(chain) = self.chains.get_mut(kind) else {
            return false;
        };

        let before = chain.len();
        chain.retain(|registered| !Arc::ptr_eq(registered, locator));
        let removed = chain.len() != before;

        if chain.is_empty() {
            self.chains.remove(kind);
        }
        removed
    }

    /// The chain for `kind`, in lookup order.
    pub fn locators(&self, kind: &ResourceType) -> &[Arc<dyn ResourceLocator>] {
        self.chains.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    //--- Lookup -----------------------------------------------------------

    /// Asks each locator of the chain in order; the first hit wins.
    pub fn locate(&self, kind: &ResourceType, name: &str) -> Result<Option<ResourceLocation>, ResourceError> {
        validate_name(name)?;

        for locator in self.locators(kind) {
            match locator.locate(name) {
                Ok(Some(found)) => {
                    debug!(target: "resource", "{} {:?} → {}", kind, name, found);
                    return Ok(Some(found));
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(target: "resource", "Locator {:?} failed for {:?}: {}", locator, name, err);
                }
            }
        }

        Ok(None)
    }

    /// Like [`locate`](Self::locate), but absence is an error.
    pub fn locate_or_err(&self, kind: &ResourceType, name: &str) -> Result<ResourceLocation, ResourceError> {
        self.locate(kind, name)?.ok_or_else(|| ResourceError::NotFound {
            kind: kind.clone(),
            name: name.to_owned(),
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
