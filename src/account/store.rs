use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::profile::{UserId, UserProfile};

/// JSON file holding user profiles keyed by id.
///
/// Stands in for the identity collaborator: reads happen once at load and
/// every change is written back with `save`. Concurrent writers are not
/// coordinated; the last save wins.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    profiles: BTreeMap<UserId, UserProfile>,
}

impl ProfileStore {
    /// Opens the store, starting empty when the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        let profiles = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile store at {:?}", path))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse profile store at {:?}", path))?
            }
        } else {
            log::info!("Profile store {:?} not found, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            profiles,
        })
    }

    pub fn get(&self, user_id: UserId) -> Option<&UserProfile> {
        self.profiles.get(&user_id)
    }

    pub fn get_mut(&mut self, user_id: UserId) -> Option<&mut UserProfile> {
        self.profiles.get_mut(&user_id)
    }

    pub fn get_or_create(&mut self, user_id: UserId) -> &mut UserProfile {
        self.profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id, format!("user{}", user_id)))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.profiles)
            .context("Failed to serialize profiles")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write profile store at {:?}", self.path))?;
        log::debug!("Saved {} profile(s) to {:?}", self.profiles.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_empty() -> Result<()> {
        let dir = tempdir()?;
        let store = ProfileStore::load(&dir.path().join("profiles.json"))?;
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("profiles.json");

        let mut store = ProfileStore::load(&path)?;
        let profile = store.get_or_create(42);
        profile.diet_pref = Some("vegan".to_string());
        profile.favorites.toggle(7);
        profile.refresh.last_refresh = Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap());
        store.save()?;

        let reloaded = ProfileStore::load(&path)?;
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(42), store.get(42));
        assert!(reloaded.get(42).unwrap().favorites.contains(7));
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("profiles.json");
        fs::write(&path, "{ not json")?;

        let result = ProfileStore::load(&path);
        assert!(result.unwrap_err().to_string().contains("Failed to parse profile store"));
        Ok(())
    }
}
