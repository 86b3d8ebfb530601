//! services/document_store.rs
//! Colecciones persistidas como arreglos JSON planos, un documento por
//! colección. Sin locking, sin índices, sin transacciones: cada mutación es
//! leer-todo → modificar en memoria → escribir-todo, y dos requests
//! concurrentes sobre la misma colección pueden pisarse (gana la última
//! escritura). Es una limitación asumida del diseño, no un bug a tapar acá.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Backend de persistencia: una colección = un documento de texto JSON.
pub trait Storage: Send + Sync {
    /// Contenido crudo de la colección, o `None` si no existe.
    fn load(&self, collection: &str) -> Result<Option<String>>;
    /// Sobrescribe el contenido completo. No atómico.
    fn save(&self, collection: &str, payload: &str) -> Result<()>;
}

/// Backend de producción: un archivo `<collection>.json` bajo `dir`.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }
}

impl Storage for FileStorage {
    fn load(&self, collection: &str) -> Result<Option<String>> {
        let path = self.path_for(collection);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("No se pudo leer {}", path.display()))?;
        Ok(Some(content))
    }

    fn save(&self, collection: &str, payload: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("No se pudo crear {}", self.dir.display()))?;
        let path = self.path_for(collection);
        std::fs::write(&path, payload)
            .with_context(|| format!("No se pudo escribir {}", path.display()))
    }
}

/// Backend en memoria que respalda la suite de tests. Mismas semánticas
/// observables que `FileStorage`: el mutex solo protege el acceso al mapa,
/// no el ciclo leer-modificar-escribir, así que el lost update sigue ahí.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    collections: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, collection: &str) -> Result<Option<String>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("MemoryStorage mutex envenenado"))?;
        Ok(collections.get(collection).cloned())
    }

    fn save(&self, collection: &str, payload: &str) -> Result<()> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("MemoryStorage mutex envenenado"))?;
        collections.insert(collection.to_string(), payload.to_string());
        Ok(())
    }
}

/// Fachada sobre un `Storage` con las operaciones que usan los servicios.
#[derive(Clone)]
pub struct DocumentStore {
    storage: Arc<dyn Storage>,
}

impl DocumentStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        DocumentStore { storage }
    }

    /// Lee una colección completa. Colección ausente, ilegible o con JSON
    /// corrupto equivale a colección vacía; nunca falla.
    pub fn read(&self, collection: &str) -> Vec<Value> {
        let raw = match self.storage.load(collection) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("No se pudo leer la colección '{}': {:?}", collection, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            _ => Vec::new(),
        }
    }

    /// Serializa y sobrescribe la colección completa. Pretty-printed, igual
    /// que los documentos que deja el panel original.
    pub fn write(&self, collection: &str, records: &[Value]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records)
            .with_context(|| format!("No se pudo serializar la colección '{}'", collection))?;
        self.storage.save(collection, &payload)
    }

    /// Primera entrada de una colección singleton, u objeto vacío.
    pub fn read_singleton(&self, collection: &str) -> Value {
        self.read(collection)
            .into_iter()
            .next()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Upsert de singleton: si la colección está vacía crea la única entrada
    /// con id nuevo; si no, hace merge superficial sobre ella. Devuelve el
    /// registro resultante.
    pub fn upsert_singleton(&self, collection: &str, patch: &Value) -> Result<Value> {
        let mut records = self.read(collection);
        if records.is_empty() {
            let mut record = patch.as_object().cloned().unwrap_or_default();
            record.insert("id".to_string(), Value::String(new_id()));
            records.push(Value::Object(record));
        } else {
            shallow_merge(&mut records[0], patch);
        }
        self.write(collection, &records)?;
        Ok(records[0].clone())
    }
}

/// Merge superficial: los campos del patch pisan al destino campo por campo,
/// los no mencionados se conservan. Patches que no son objeto se ignoran.
pub fn shallow_merge(target: &mut Value, patch: &Value) {
    if let (Some(target_map), Some(patch_map)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_map {
            target_map.insert(key.clone(), value.clone());
        }
    }
}

/// Identificador opaco para registros nuevos.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
