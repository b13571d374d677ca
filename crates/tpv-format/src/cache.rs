//! Version-tracked cache for previews.
//!
//! A preview is a pure function of the dataset and the width, so it only
//! needs rebuilding when either changes. Callers own the dataset and bump a
//! version number whenever they mutate it; the cache compares that version
//! and the width with the key the cached preview was built from.

use tracing::debug;

use tpv_model::{Dataset, TablePreview};

use crate::error::Result;
use crate::preview::PreviewFormatter;

/// Inputs a cached preview was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewKey {
    /// Caller-maintained version of the dataset.
    pub dataset_version: u64,
    /// Width the preview was built for.
    pub max_width: u32,
}

/// Wrapper for cached data that tracks the key it was computed from.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    /// The cached data
    pub data: T,
    /// Key of the inputs when this was computed
    pub key: PreviewKey,
}

impl<T> Versioned<T> {
    pub fn new(data: T, key: PreviewKey) -> Self {
        Self { data, key }
    }

    /// Check if this cache entry is stale.
    #[inline]
    pub fn is_stale(&self, key: PreviewKey) -> bool {
        self.key != key
    }

    /// Check if this cache entry is current.
    #[inline]
    pub fn is_current(&self, key: PreviewKey) -> bool {
        self.key == key
    }
}

/// Memoizes the last preview built for `(dataset_version, max_width)`.
#[derive(Debug, Default)]
pub struct PreviewCache {
    formatter: PreviewFormatter,
    entry: Option<Versioned<TablePreview>>,
}

impl PreviewCache {
    pub fn new(formatter: PreviewFormatter) -> Self {
        Self {
            formatter,
            entry: None,
        }
    }

    /// Return the cached preview, rebuilding it if the key changed.
    ///
    /// On error the previous entry is dropped.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PreviewFormatter::build`].
    pub fn get_or_build(
        &mut self,
        data: &Dataset,
        dataset_version: u64,
        max_width: u32,
    ) -> Result<&TablePreview> {
        let key = PreviewKey {
            dataset_version,
            max_width,
        };
        let entry = match self.entry.take() {
            Some(entry) if entry.is_current(key) => entry,
            _ => {
                debug!(dataset_version, max_width, "rebuilding table preview");
                Versioned::new(self.formatter.build(data, max_width)?, key)
            }
        };
        Ok(&self.entry.insert(entry).data)
    }

    /// Cached preview for the key, if it is current.
    pub fn current(&self, dataset_version: u64, max_width: u32) -> Option<&TablePreview> {
        let key = PreviewKey {
            dataset_version,
            max_width,
        };
        self.entry
            .as_ref()
            .filter(|entry| entry.is_current(key))
            .map(|entry| &entry.data)
    }

    /// Key of the cached preview, if any.
    pub fn key(&self) -> Option<PreviewKey> {
        self.entry.as_ref().map(|entry| entry.key)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpv_model::Record;

    fn dataset(weight: &str) -> Dataset {
        vec![Record::new().with_field("weight", weight)].into()
    }

    #[test]
    fn test_versioned_staleness() {
        let key = PreviewKey {
            dataset_version: 1,
            max_width: 600,
        };
        let entry = Versioned::new((), key);
        assert!(entry.is_current(key));
        assert!(entry.is_stale(PreviewKey {
            dataset_version: 2,
            ..key
        }));
        assert!(entry.is_stale(PreviewKey {
            max_width: 300,
            ..key
        }));
    }

    #[test]
    fn test_same_key_returns_cached_preview() {
        let mut cache = PreviewCache::default();
        let first = cache.get_or_build(&dataset("60.0"), 1, 600).unwrap().clone();

        // Data changed but the caller did not bump the version: still cached
        let second = cache.get_or_build(&dataset("80.0"), 1, 600).unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    fn test_version_bump_rebuilds() {
        let mut cache = PreviewCache::default();
        cache.get_or_build(&dataset("60.0"), 1, 600).unwrap();
        let rebuilt = cache.get_or_build(&dataset("80.0"), 2, 600).unwrap();
        assert_eq!(rebuilt.column_values("weight")[0].as_number(), Some(80));
        assert!(cache.current(1, 600).is_none());
        assert!(cache.current(2, 600).is_some());
    }

    #[test]
    fn test_width_change_rebuilds() {
        let mut cache = PreviewCache::default();
        cache.get_or_build(&dataset("60.0"), 1, 600).unwrap();
        cache.get_or_build(&dataset("60.0"), 1, 40).unwrap();
        assert_eq!(
            cache.key(),
            Some(PreviewKey {
                dataset_version: 1,
                max_width: 40
            })
        );
    }

    #[test]
    fn test_error_drops_entry() {
        let mut cache = PreviewCache::default();
        cache.get_or_build(&dataset("60.0"), 1, 600).unwrap();
        assert!(cache.get_or_build(&dataset("60.0"), 1, 0).is_err());
        assert!(cache.key().is_none());
    }

    #[test]
    fn test_invalidate() {
        let mut cache = PreviewCache::default();
        cache.get_or_build(&dataset("60.0"), 1, 600).unwrap();
        cache.invalidate();
        assert!(cache.current(1, 600).is_none());
    }
}
