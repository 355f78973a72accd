//=========================================================================
// Resource Locator
//=========================================================================
//
// Name → location lookup contract.
//
// Names are relative, forward-slash separated paths ("textures/grass.png").
// A locator answers:
//   Ok(Some(location))  the resource exists
//   Ok(None)            this locator does not know it
//   Err(InvalidName)    the name itself is malformed
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

//=== Internal Dependencies ===============================================

use super::error::ResourceError;

//=== ResourceLocator =====================================================

/// Resolves resource names to concrete locations.
pub trait ResourceLocator: Send + Sync + fmt::Debug {
    fn locate(&self, name: &str) -> Result<Option<ResourceLocation>, ResourceError>;
}

//=== ResourceLocation ====================================================

/// Resolved resource handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    path: PathBuf,
}

impl ResourceLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the resource for reading.
    pub fn open(&self) -> Result<File, ResourceError> {
        File::open(&self.path).map_err(|source| ResourceError::Io {
            path: self.path.clone(),
            source,
        })
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

//=== Name Validation =====================================================

/// Checks a resource name and returns it as a relative path.
///
/// Rejects empty names, backslashes, absolute paths and any `..` that
/// would climb above the locator base.
pub(crate) fn validate_name(name: &str) -> Result<&Path, ResourceError> {
    if name.trim().is_empty() {
        return Err(ResourceError::invalid_name(name, "name is empty"));
    }
    if name.contains('\\') {
        return Err(ResourceError::invalid_name(name, "use '/' as separator"));
    }

    let path = Path::new(name);
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ResourceError::invalid_name(name, "escapes the base directory"))?;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ResourceError::invalid_name(name, "name must be relative"));
            }
        }
    }

    if depth == 0 {
        return Err(ResourceError::invalid_name(name, "name has no file component"));
    }

    Ok(path)
}

//=========================================================================
// Unit Tests
//=========================================================================
