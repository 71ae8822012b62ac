use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{AppError, AppResult};

use super::name::normalize;
use super::{MacroList, ProfileDocument};

/// JSON-file-backed profile storage.
///
/// Every operation holds one lock across its whole load-modify-save, so
/// concurrent callers never interleave a read and a write of the document.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<ProfileDocument> {
        let _guard = self.acquire();
        self.read_document()
    }

    pub fn save(&self, doc: &ProfileDocument) -> AppResult<()> {
        let _guard = self.acquire();
        self.write_document(doc)
    }

    pub fn set_profile(&self, user: &str, profile: &str, macros: MacroList) -> AppResult<String> {
        let key = normalize(profile);
        let _guard = self.acquire();

        let mut doc = self.read_document()?;
        doc.entry(user.to_string())
            .or_default()
            .insert(key.clone(), macros);
        self.write_document(&doc)?;

        debug!(user, profile = %key, "profile saved");
        Ok(key)
    }

    pub fn delete_profile(&self, user: &str, profile: &str) -> AppResult<()> {
        let key = normalize(profile);
        let _guard = self.acquire();

        let mut doc = self.read_document()?;
        let removed = doc
            .get_mut(user)
            .and_then(|profiles| profiles.remove(&key));
        if removed.is_none() {
            return Err(profile_not_found(user, &key));
        }
        self.write_document(&doc)?;

        debug!(user, profile = %key, "profile deleted");
        Ok(())
    }

    /// Returns the normalized `(from, to)` pair.
    pub fn rename_profile(
        &self,
        user: &str,
        old_name: &str,
        new_name: &str,
    ) -> AppResult<(String, String)> {
        let from = normalize(old_name);
        let to = normalize(new_name);
        let _guard = self.acquire();

        let mut doc = self.read_document()?;
        let Some(profiles) = doc.get_mut(user).filter(|p| p.contains_key(&from)) else {
            return Err(profile_not_found(user, &from));
        };

        if from == to {
            return Ok((from, to));
        }

        if profiles.contains_key(&to) {
            return Err(AppError::Conflict(format!(
                "profile `{to}` already exists for user `{user}`"
            )));
        }

        if let Some(macros) = profiles.remove(&from) {
            profiles.insert(to.clone(), macros);
        }
        self.write_document(&doc)?;

        debug!(user, from = %from, to = %to, "profile renamed");
        Ok((from, to))
    }

    pub fn list_profile_names(&self, user: &str) -> AppResult<Vec<String>> {
        let _guard = self.acquire();
        let doc = self.read_document()?;

        Ok(doc
            .get(user)
            .map(|profiles| profiles.keys().cloned().collect())
            .unwrap_or_default())
    }

    pub fn get_profile(&self, user: &str, profile: &str) -> AppResult<MacroList> {
        let key = normalize(profile);
        let _guard = self.acquire();
        let mut doc = self.read_document()?;

        doc.get_mut(user)
            .and_then(|profiles| profiles.remove(&key))
            .ok_or_else(|| profile_not_found(user, &key))
    }

    pub fn list_all_profiles(&self) -> AppResult<ProfileDocument> {
        self.load()
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a panicked holder leaves nothing half-updated in memory.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_document(&self) -> AppResult<ProfileDocument> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ProfileDocument::new());
            }
            Err(err) => return Err(self.storage_error("read", err)),
        };

        serde_json::from_str(&raw).map_err(|err| self.storage_error("parse", err))
    }

    fn write_document(&self, doc: &ProfileDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.storage_error("create", err))?;
        }

        let payload =
            serde_json::to_string_pretty(doc).map_err(|err| self.storage_error("encode", err))?;

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, payload).map_err(|err| self.storage_error("write", err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            fs::set_permissions(&staging, fs::Permissions::from_mode(0o600))
                .map_err(|err| self.storage_error("chmod", err))?;
        }

        fs::rename(&staging, &self.path).map_err(|err| self.storage_error("replace", err))
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> AppError {
        AppError::Storage(format!(
            "failed to {action} profile document {}: {err}",
            self.path.display()
        ))
    }
}

fn profile_not_found(user: &str, profile: &str) -> AppError {
    AppError::NotFound(format!("profile `{profile}` not found for user `{user}`"))
}
