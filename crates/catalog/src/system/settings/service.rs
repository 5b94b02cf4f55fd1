use contracts::system::settings::{
    LibrarySettings, Preferences, ProfileSettings, LIBRARY_STORAGE_KEY, PREFERENCES_STORAGE_KEY,
    PROFILE_STORAGE_KEY,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::data::KeyValueStorage;
use crate::shared::errors::{CatalogError, CatalogResult};

/// Сохранение разделов экрана настроек в key/value хранилище
pub struct SettingsService<S> {
    storage: S,
}

impl<S: KeyValueStorage> SettingsService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> CatalogResult<T> {
        match self.storage.get_item(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(T::default()),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> CatalogResult<()> {
        self.storage.set_item(key, &serde_json::to_string(value)?)?;
        tracing::info!("Settings saved: {}", key);
        Ok(())
    }

    pub fn profile(&self) -> CatalogResult<ProfileSettings> {
        self.load(PROFILE_STORAGE_KEY)
    }

    pub fn save_profile(&mut self, profile: &ProfileSettings) -> CatalogResult<()> {
        profile.validate().map_err(CatalogError::Validation)?;
        self.save(PROFILE_STORAGE_KEY, profile)
    }

    pub fn preferences(&self) -> CatalogResult<Preferences> {
        self.load(PREFERENCES_STORAGE_KEY)
    }

    pub fn save_preferences(&mut self, preferences: &Preferences) -> CatalogResult<()> {
        self.save(PREFERENCES_STORAGE_KEY, preferences)
    }

    pub fn library(&self) -> CatalogResult<LibrarySettings> {
        self.load(LIBRARY_STORAGE_KEY)
    }

    pub fn save_library(&mut self, settings: &LibrarySettings) -> CatalogResult<()> {
        settings.validate().map_err(CatalogError::Validation)?;
        self.save(LIBRARY_STORAGE_KEY, settings)
    }
}
