//=========================================================================
// Simple Resource Locator
//=========================================================================
//
// Directory-rooted locator.
//
// Lookup order for "models/tree/oak.obj" rooted at `base`:
//   1. base/models/tree/oak.obj
//   2. base/oak.obj            (only when the name has directories)
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::error::ResourceError;
use super::locator::{validate_name, ResourceLocation, ResourceLocator};

//=== SimpleResourceLocator ===============================================

#[derive(Debug, Clone)]
pub struct SimpleResourceLocator {
    base: PathBuf,
}

impl SimpleResourceLocator {
    /// Roots a locator at `base`, which must be an existing directory.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, ResourceError> {
        let base = base.into();
        if !base.is_dir() {
            return Err(ResourceError::NotADirectory { path: base });
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn existing(&self, relative: &Path) -> Option<ResourceLocation> {
        let candidate = self.base.join(relative);
        trace!(target: "resource", "Probing {}", candidate.display());
        candidate.is_file().then(|| ResourceLocation::new(candidate))
    }
}

impl ResourceLocator for SimpleResourceLocator {
    fn locate(&self, name: &str) -> Result<Option<ResourceLocation>, ResourceError> {
        let relative = validate_name(name)?;

        if let Some(found) = self.existing(relative) {
            return Ok(Some(found));
        }

        let has_directories = relative.parent().map_or(false, |p| !p.as_os_str().is_empty());
        if has_directories {
            if let Some(file_name) = relative.file_name() {
                return Ok(self.existing(Path::new(file_name)));
            }
        }

        Ok(None)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
