// src/db/storage.rs

use std::{
    collections::HashMap,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use tempfile::NamedTempFile;

use crate::common::error::AppError;

/// Armazenamento durável chave/valor: chaves e valores são texto, tudo síncrono.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

// --- 1. Em memória (testes e uso efêmero) ---

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaves já gravadas, ordenadas.
    pub fn keys(&self) -> Vec<String> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = slots.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

// --- 2. Em disco: um arquivo `<chave>.json` por slot ---

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Abre (e cria, se preciso) o diretório de dados.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Diretório de dados pronto");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::InvalidStorageKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.slot_path(key)?;

        // Grava num temporário no mesmo diretório e renomeia por cima do slot.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_storage_get_set_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("residents").unwrap(), None);

        storage.set("residents", "[]").unwrap();
        assert_eq!(storage.get("residents").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.keys(), vec!["residents".to_string()]);

        storage.remove("residents").unwrap();
        assert_eq!(storage.get("residents").unwrap(), None);
    }

    #[test]
    fn file_storage_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let storage = FileStorage::open(temp_dir.path()).unwrap();
            storage.set("service_defs", r#"[{"a":1}]"#).unwrap();
        }
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(
            storage.get("service_defs").unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );
        assert!(temp_dir.path().join("service_defs.json").exists());
    }

    #[test]
    fn file_storage_missing_slot_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(storage.get("rooms").unwrap(), None);
        storage.remove("rooms").unwrap();
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        for key in ["", "../etc", "a/b", "with space"] {
            assert!(matches!(
                storage.set(key, "[]"),
                Err(AppError::InvalidStorageKey(_))
            ));
        }
    }

    #[test]
    fn file_storage_overwrites_slot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        storage.set("inventory", "[1]").unwrap();
        storage.set("inventory", "[1,2]").unwrap();
        assert_eq!(storage.get("inventory").unwrap().as_deref(), Some("[1,2]"));
    }
}
