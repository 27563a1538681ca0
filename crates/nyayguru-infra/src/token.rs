//! Bearer token persistence between CLI invocations.
//!
//! The token lives in `{data_dir}/token` with owner-only permissions.
//! Login writes it, logout deletes it, and every other command loads it
//! on startup. The file holds only the token, never the password.

use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

const TOKEN_FILE: &str = "token";

/// File-backed store for the bearer token.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    /// Load the saved token, if any.
    pub async fn load(&self) -> io::Result<Option<SecretString>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::from(token.to_string())))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Persist the token, restricting the file to the owner.
    pub async fn save(&self, token: &SecretString) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token.expose_secret()).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        Ok(())
    }

    /// Delete the saved token. Missing file is not an error.
    pub async fn clear(&self) -> io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = TokenStore::new(tmp.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = TokenStore::new(tmp.path());
        store
            .save(&SecretString::from("tok-123".to_string()))
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.expose_secret(), "tok-123");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let store = TokenStore::new(tmp.path());
        store
            .save(&SecretString::from("tok-123".to_string()))
            .await
            .unwrap();

        let mode = tokio::fs::metadata(tmp.path().join("token"))
            .await
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = TokenStore::new(tmp.path());
        store
            .save(&SecretString::from("tok-123".to_string()))
            .await
            .unwrap();

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // Second clear: no file, still fine.
        store.clear().await.unwrap();
    }
}
