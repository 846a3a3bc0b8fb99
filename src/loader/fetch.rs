//! Retrieval of section data files

use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::FetchError;

/// Something that can retrieve a resource by its site-relative path
pub trait Fetcher: Send + Sync {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Reads resources from a directory on disk
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative resource path, refusing anything outside the root
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches("./"));
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes || path.is_empty() {
            return Err(FetchError::OutsideRoot(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl Fetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full_path = self.resolve(path)?;
        tracing::debug!("Fetching {:?}", full_path);

        match tokio::fs::read_to_string(&full_path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path.to_string()))
            }
            Err(source) => Err(FetchError::Io {
                path: full_path,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/about.md"), "# About").unwrap();

        let fetcher = FsFetcher::new(dir.path());
        assert_eq!(fetcher.fetch("data/about.md").await.unwrap(), "# About");
        assert_eq!(fetcher.fetch("./data/about.md").await.unwrap(), "# About");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = TempDir::new().unwrap();
        let fetcher = FsFetcher::new(dir.path());
        let err = fetcher.fetch("data/labs.json").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(p) if p == "data/labs.json"));
    }

    #[tokio::test]
    async fn test_fetch_refuses_escape() {
        let dir = TempDir::new().unwrap();
        let fetcher = FsFetcher::new(dir.path());
        for path in ["../secret", "/etc/passwd", "data/../../x", ""] {
            let err = fetcher.fetch(path).await.unwrap_err();
            assert!(matches!(err, FetchError::OutsideRoot(_)), "{}", path);
        }
    }
}
