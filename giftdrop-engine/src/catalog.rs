//! Prize asset catalog
//!
//! The catalog is the external asset source the prize table is seeded
//! from at process start, and the authority the scheduler consults to
//! verify a payload is still retrievable before broadcasting it.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use giftdrop_core::constants::CATALOG_EXTENSIONS;
use giftdrop_core::store::PrizeStore;

use crate::error::{EngineError, EngineResult};

/// External source of prize payload assets
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// List all eligible payload references, in unspecified order.
    async fn list(&self) -> EngineResult<Vec<String>>;

    /// Whether the payload behind a reference is currently retrievable.
    async fn is_retrievable(&self, payload_ref: &str) -> bool;
}

/// Directory-backed asset catalog
///
/// Scans one directory, non-recursively, for files carrying an
/// eligible image extension.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    dir: PathBuf,
}

impl DirCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn eligible(name: &str) -> bool {
        name.rsplit_once('.')
            .map(|(_, ext)| CATALOG_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

#[async_trait]
impl AssetCatalog for DirCatalog {
    async fn list(&self) -> EngineResult<Vec<String>> {
        let mut refs = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if Self::eligible(&name) {
                refs.push(name);
            }
        }
        refs.sort();
        Ok(refs)
    }

    async fn is_retrievable(&self, payload_ref: &str) -> bool {
        self.dir.join(payload_ref).is_file()
    }
}

/// One-shot catalog refresh at process start: wipe the prize table and
/// reseed it with one unconsumed prize per discovered asset.
///
/// Returns the number of prizes seeded; an empty catalog is an error
/// here because a freshly started service with nothing to broadcast is
/// a deployment mistake, not a steady-state condition.
pub async fn refresh_catalog(
    store: &Arc<dyn PrizeStore>,
    catalog: &Arc<dyn AssetCatalog>,
) -> EngineResult<usize> {
    let refs = catalog.list().await?;
    if refs.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }
    let seeded = store.replace_catalog(refs).await?;
    info!(count = seeded, "Catalog refreshed");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftdrop_store::MemoryStore;
    use std::fs::File;

    #[tokio::test]
    async fn test_dir_catalog_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.JPG", "c.jpeg", "notes.txt", "noext"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let catalog = DirCatalog::new(dir.path());
        let refs = catalog.list().await.unwrap();
        assert_eq!(refs, vec!["a.png", "b.JPG", "c.jpeg"]);

        assert!(catalog.is_retrievable("a.png").await);
        assert!(!catalog.is_retrievable("missing.png").await);
    }

    #[tokio::test]
    async fn test_refresh_catalog_seeds_store() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("one.png")).unwrap();
        File::create(dir.path().join("two.png")).unwrap();

        let store: Arc<dyn PrizeStore> = Arc::new(MemoryStore::new());
        let catalog: Arc<dyn AssetCatalog> = Arc::new(DirCatalog::new(dir.path()));

        assert_eq!(refresh_catalog(&store, &catalog).await.unwrap(), 2);
        assert_eq!(store.unused_prize_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_refresh_catalog_rejects_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn PrizeStore> = Arc::new(MemoryStore::new());
        let catalog: Arc<dyn AssetCatalog> = Arc::new(DirCatalog::new(dir.path()));

        let err = refresh_catalog(&store, &catalog).await.unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog));
    }
}
