//! Локальное key/value хранилище (аналог localStorage браузера)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::shared::errors::CatalogResult;

/// Строковое key/value хранилище
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> CatalogResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> CatalogResult<()>;

    fn remove_item(&mut self, key: &str) -> CatalogResult<()>;
}

/// Хранилище в памяти (тесты, сессия без диска)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> CatalogResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CatalogResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> CatalogResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Хранилище в JSON-файле; файл перезаписывается целиком при каждом изменении
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Открыть файл; отсутствующий файл означает пустое хранилище
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            tracing::debug!("Storage file not found, starting empty: {}", path.display());
            BTreeMap::new()
        };
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Записать `items` на диск; состояние в памяти меняется только после успешной записи
    fn commit(&mut self, items: BTreeMap<String, String>) -> CatalogResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(&items)?;
        std::fs::write(&self.path, json)?;
        self.items = items;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> CatalogResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CatalogResult<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.commit(items)
    }

    fn remove_item(&mut self, key: &str) -> CatalogResult<()> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut items = self.items.clone();
        items.remove(key);
        self.commit(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("library.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item("library_auth", "{\"user\":{\"username\":\"admin\"}}").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get_item("library_auth").unwrap().as_deref(),
            Some("{\"user\":{\"username\":\"admin\"}}")
        );
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStorage::open(&path).unwrap_err();
        assert!(matches!(err, crate::shared::errors::CatalogError::Serialization(_)));
    }

    #[test]
    fn test_failed_write_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item("library_auth", "kept").unwrap();

        // родительский каталог заменён обычным файлом: запись невозможна
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut broken = FileStorage::open(blocker.join("library.json")).unwrap();
        let err = broken.set_item("library_auth", "flag").unwrap_err();
        assert!(matches!(err, crate::shared::errors::CatalogError::Storage(_)));
        assert_eq!(broken.get_item("library_auth").unwrap(), None);

        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(storage.remove_item("library_auth").is_err());
        assert_eq!(storage.get_item("library_auth").unwrap().as_deref(), Some("kept"));
    }
}
