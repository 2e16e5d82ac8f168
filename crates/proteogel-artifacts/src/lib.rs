//! proteogel-artifacts — directory-backed storage for uploaded files.
//!
//! Artifacts are plain files under one root directory; the file name is
//! the artifact id. Every incoming name is reduced to its base name, so a
//! traversal path can never escape the root.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use proteogel_common::error::{ProteogelError, Result};

/// Metadata for one stored artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMeta {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub url: String,
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        info!(root = %root.display(), "artifact store ready");
        Ok(Self { root })
    }

    /// List every stored artifact, directories excluded.
    pub async fn list(&self) -> Result<Vec<ArtifactMeta>> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut artifacts = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let meta = entry.metadata().await?;
            if !meta.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            artifacts.push(ArtifactMeta {
                id: name.clone(),
                url: format!("/artifacts/{}", name),
                name,
                size: meta.len(),
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
            });
        }
        artifacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(artifacts)
    }

    /// Store `bytes` under the base name of `filename`, replacing any
    /// previous content.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<ArtifactMeta> {
        let name = safe_name(filename)?;
        let path = self.root.join(&name);
        tokio::fs::write(&path, bytes).await?;
        debug!(name, size = bytes.len(), "stored artifact");
        let meta = tokio::fs::metadata(&path).await?;
        Ok(ArtifactMeta {
            id: name.clone(),
            url: format!("/artifacts/{}", name),
            name,
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        })
    }

    /// Absolute path of a stored artifact, for streaming a download.
    pub async fn resolve(&self, filename: &str) -> Result<PathBuf> {
        let name = safe_name(filename)?;
        let path = self.root.join(&name);
        if !tokio::fs::try_exists(&path).await? {
            return Err(ProteogelError::NotFound(name));
        }
        Ok(path)
    }

    /// Rename an artifact; the target name must be free.
    pub async fn rename(&self, old: &str, new: &str) -> Result<(String, String)> {
        let old_name = safe_name(old)?;
        let new_name = safe_name(new)?;
        let src = self.root.join(&old_name);
        let dest = self.root.join(&new_name);

        if !tokio::fs::try_exists(&src).await? {
            return Err(ProteogelError::NotFound(old_name));
        }
        if tokio::fs::try_exists(&dest).await? {
            return Err(ProteogelError::AlreadyExists(new_name));
        }

        tokio::fs::rename(&src, &dest).await?;
        info!(from = old_name, to = new_name, "renamed artifact");
        Ok((old_name, new_name))
    }

    /// Delete an artifact, returning its name.
    pub async fn delete(&self, filename: &str) -> Result<String> {
        let name = safe_name(filename)?;
        let path = self.root.join(&name);
        if !tokio::fs::try_exists(&path).await? {
            return Err(ProteogelError::NotFound(name));
        }
        tokio::fs::remove_file(&path).await?;
        info!(name, "deleted artifact");
        Ok(name)
    }
}

/// Reduce an incoming name to a plain base name.
fn safe_name(filename: &str) -> Result<String> {
    match Path::new(filename).file_name().and_then(|n| n.to_str()) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ProteogelError::MissingFilename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, ArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_list_delete_round_trip() {
        let (_dir, store) = store().await;
        let meta = store.save("run1.fasta", b">a\nGGGG\n").await.unwrap();
        assert_eq!(meta.name, "run1.fasta");
        assert_eq!(meta.url, "/artifacts/run1.fasta");
        assert_eq!(meta.size, 8);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "run1.fasta");

        store.delete("run1.fasta").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_traversal_is_reduced_to_base_name() {
        let (_dir, store) = store().await;
        let meta = store.save("../../etc/passwd", b"x").await.unwrap();
        assert_eq!(meta.name, "passwd");
        assert!(store.resolve("sub/dir/passwd").await.is_ok());
    }

    #[tokio::test]
    async fn test_rename_guards() {
        let (_dir, store) = store().await;
        store.save("a.fasta", b"x").await.unwrap();
        store.save("b.fasta", b"y").await.unwrap();

        assert!(matches!(
            store.rename("missing.fasta", "c.fasta").await,
            Err(ProteogelError::NotFound(_))
        ));
        assert!(matches!(
            store.rename("a.fasta", "b.fasta").await,
            Err(ProteogelError::AlreadyExists(_))
        ));

        let (old, new) = store.rename("a.fasta", "c.fasta").await.unwrap();
        assert_eq!((old.as_str(), new.as_str()), ("a.fasta", "c.fasta"));
        assert!(store.resolve("c.fasta").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_missing_is_not_found() {
        let (_dir, store) = store().await;
        assert!(matches!(
            store.resolve("nope.fasta").await,
            Err(ProteogelError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_filename_is_rejected() {
        let (_dir, store) = store().await;
        assert!(matches!(
            store.save("", b"x").await,
            Err(ProteogelError::MissingFilename)
        ));
        assert!(matches!(
            store.save("..", b"x").await,
            Err(ProteogelError::MissingFilename)
        ));
    }
}
