//! Cached client bundle artifact.
//!
//! Packaging the browser bundle happens outside this process; the
//! server only serves the finished artifact. It is read once on first
//! request and cached for the lifetime of the process, with at most one
//! read in flight.

use std::path::PathBuf;

use tokio::sync::OnceCell;

/// Write-once-then-read-only cache for the bundle bytes.
#[derive(Debug)]
pub struct BundleCache {
    path: PathBuf,
    cell: OnceCell<Vec<u8>>,
}

impl BundleCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// The bundle bytes, reading the artifact on first call.
    ///
    /// A failed read is not cached; the next request retries.
    pub async fn get(&self) -> Result<&[u8], std::io::Error> {
        let bytes = self
            .cell
            .get_or_try_init(|| async {
                tracing::info!(path = %self.path.display(), "loading client bundle");
                tokio::fs::read(&self.path).await
            })
            .await?;
        Ok(bytes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn serves_and_caches_the_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "console.log('grumblr')").unwrap();

        let cache = BundleCache::new(file.path());
        let first = cache.get().await.unwrap().to_vec();
        assert_eq!(first, b"console.log('grumblr')");

        // Deleting the file after the first read must not matter.
        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());
        let second = cache.get().await.unwrap();
        assert_eq!(second, first.as_slice());
    }

    #[tokio::test]
    async fn missing_artifact_errors_without_poisoning_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.js");

        let cache = BundleCache::new(&path);
        assert!(cache.get().await.is_err());

        std::fs::write(&path, b"ok").unwrap();
        assert_eq!(cache.get().await.unwrap(), b"ok");
    }
}
