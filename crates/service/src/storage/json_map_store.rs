use std::{collections::HashMap, hash::Hash, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, sync::RwLock};
use tracing::debug;

use super::{KeyValueStore, ScanFilter, StoreError};

/// Generic JSON file-backed key-value map store.
///
/// Persists a `HashMap<K, V>` to a JSON file and rewrites the whole file after
/// every write. Intended for local runs and small tables where a managed
/// database is overkill.
#[derive(Clone)]
pub struct JsonMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty map if
    /// missing; a file that exists but does not parse is an error.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Serialization(format!("{}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(|e| StoreError::Serialization(e.to_string()))?)
                    .await
                    .map_err(|e| StoreError::Io(e.to_string()))?;
                empty
            }
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        debug!(path = %file_path.display(), entries = map.len(), "json map store opened");

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn save(&self, map: &HashMap<K, V>) -> Result<(), StoreError> {
        let data = serde_json::to_vec(map).map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or update a value by key and persist.
    ///
    /// The write guard is held until the file is written, so snapshots reach
    /// disk in the order they were taken. A failed write restores the
    /// previous entry; readers never see a value that is not on disk.
    pub async fn insert(&self, key: K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        let previous = map.insert(key.clone(), value);
        if let Err(e) = self.save(&map).await {
            match previous {
                Some(old) => map.insert(key, old),
                None => map.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonMapStore<String, Value> {
    async fn put(&self, key: &str, item: Value) -> Result<(), StoreError> {
        self.insert(key.to_string(), item).await
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(JsonMapStore::<String, Value>::get(self, &key.to_string()).await)
    }

    async fn scan(&self, filter: Option<&ScanFilter>) -> Result<Vec<Value>, StoreError> {
        let map = self.inner.read().await;
        Ok(map
            .values()
            .filter(|item| filter.map_or(true, |f| f.matches(item)))
            .cloned()
            .collect())
    }
}
