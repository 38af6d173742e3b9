use crate::errors::StoreError;
use std::{
    env, fs,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

/// Name of the single key the counter record lives under.
pub const STORAGE_KEY: &str = "hazem-memorial-tasbih";

/// A single named slot in a host key-value store.
pub trait StorageSlot: Send {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;

    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError>;
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(format!("data/{STORAGE_KEY}.json"))
}

/// Slot backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    value: Option<Vec<u8>>,
    reject_writes: bool,
}

/// In-memory slot. Clones share the same buffer, so a clone handed to a
/// second store behaves like the same storage seen from a new session.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let slot = Self::new();
        slot.lock().value = Some(bytes.into());
        slot
    }

    /// Makes every following write fail, like a full or disabled store.
    pub fn reject_writes(&self, reject: bool) {
        self.lock().reject_writes = reject;
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().value.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().value.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.reject_writes {
            return Err(StoreError::Rejected {
                reason: "storage quota exceeded".to_string(),
            });
        }
        inner.value = Some(bytes.to_vec());
        Ok(())
    }
}
