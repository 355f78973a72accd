//=========================================================================
// Resource Errors
//=========================================================================

//=== Standard Library Imports ============================================

use std::io;
use std::path::PathBuf;

//=== External Crates =====================================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::registry::ResourceType;

//=== ResourceError =======================================================

/// Failures of resource lookup.
///
/// An unknown resource is not an error: locators report it as `Ok(None)`.
/// `NotFound` is only produced by `ResourceRegistry::locate_or_err`.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource name is malformed.
    #[error("invalid resource name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A locator base path does not exist or is not a directory.
    #[error("resource base {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// No locator of the chain knows the resource.
    #[error("{kind} resource {name:?} not found")]
    NotFound { kind: ResourceType, name: String },

    #[error("resource I/O failed for {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResourceError {
    pub(crate) fn invalid_name(name: &str, reason: &'static str) -> Self {
        Self::InvalidName { name: name.to_owned(), reason }
    }
}
