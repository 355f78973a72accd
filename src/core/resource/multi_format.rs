//=========================================================================
// Multi-Format Resource Locator
//=========================================================================
//
// Finds a resource under alternative file extensions.
//
// With extensions ["dds", "png"] and "terrain/grass.tga":
//   original first:  grass.tga → grass.dds → grass.png
//   original last:   grass.dds → grass.png → grass.tga
//
// Each candidate goes through the wrapped locator, so its fallbacks apply
// to every candidate.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;

//=== Internal Dependencies ===============================================

use super::error::ResourceError;
use super::locator::{validate_name, ResourceLocation, ResourceLocator};
use super::simple_locator::SimpleResourceLocator;

//=== MultiFormatResourceLocator ==========================================

#[derive(Debug, Clone)]
pub struct MultiFormatResourceLocator {
    inner: SimpleResourceLocator,
    extensions: Vec<String>,
    try_original_first: bool,
}

impl MultiFormatResourceLocator {
    /// Extensions are given without the leading dot; a leading dot is
    /// stripped if present.
    pub fn new<I, S>(inner: SimpleResourceLocator, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_owned())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self {
            inner,
            extensions,
            try_original_first: true,
        }
    }

    /// Whether the name as given is tried before (default) or after the
    /// alternatives.
    pub fn try_original_first(mut self, first: bool) -> Self {
        self.try_original_first = first;
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn alternatives(&self, name: &str) -> Vec<String> {
        let stem_path = Path::new(name).with_extension("");
        let stem = stem_path.to_string_lossy();

        self.extensions
            .iter()
            .map(|ext| format!("{stem}.{ext}"))
            .filter(|candidate| candidate != name)
            .collect()
    }
}

impl ResourceLocator for MultiFormatResourceLocator {
    fn locate(&self, name: &str) -> Result<Option<ResourceLocation>, ResourceError> {
        validate_name(name)?;

        let mut candidates = self.alternatives(name);
        if self.try_original_first {
            candidates.insert(0, name.to_owned());
        } else {
            candidates.push(name.to_owned());
        }

        for candidate in &candidates {
            if let Some(found) = self.inner.locate(candidate)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
