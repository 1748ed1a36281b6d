use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use super::LocalStore;
use crate::entity::{AdminSession, Record, Singleton};
use crate::error::{Result, StoreError};
use crate::locale::Lang;

const SESSION_KEY: &str = "adminSession";
const LANGUAGE_KEY: &str = "preferredLanguage";

/// The content store: four record collections and two singletons persisted
/// as serialized text, one storage key each, plus the session flag and the
/// language preference.
///
/// One generic engine covers every collection. A collection is read in full,
/// mutated in memory, and written back in full; records are appended on
/// create, replaced in place on update, and filtered out on delete, so
/// stored order is stable and identity lives in the id field alone.
pub struct ContentStore {
    local: LocalStore,
}

impl ContentStore {
    /// Initialize a new workspace in `root`.
    pub fn init(root: &Path) -> Result<Self> {
        Ok(Self {
            local: LocalStore::init(root)?,
        })
    }

    /// Open an existing workspace in `root`.
    pub fn open(root: &Path) -> Result<Self> {
        Ok(Self {
            local: LocalStore::open(root)?,
        })
    }

    /// Get the workspace storage directory path.
    pub fn dir(&self) -> &Path {
        self.local.dir()
    }

    // ========== Collections ==========

    /// All records of one kind, in stored order. Nothing stored or
    /// unparsable stored text both read as an empty collection; parse
    /// failures are logged, never raised.
    pub fn list<R: Record>(&self) -> Vec<R> {
        let key = R::KIND.storage_key();
        let Some(text) = self.local.read(key) else {
            return Vec::new();
        };

        match serde_json::from_str(&text) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key, error = %err, "stored collection failed to parse, treating as empty");
                Vec::new()
            }
        }
    }

    /// Look up one record by id. A missing id is an explicit error, distinct
    /// from an empty collection.
    pub fn get<R: Record>(&self, id: Uuid) -> Result<R> {
        self.list::<R>()
            .into_iter()
            .find(|item| item.id() == Some(id))
            .ok_or_else(|| StoreError::NotFound {
                kind: R::KIND.singular(),
                id: id.to_string(),
            })
    }

    /// Validate and persist a record. A record whose id matches a stored one
    /// replaces it in place, keeping its position; anything else gets a
    /// freshly generated id and a creation stamp and is appended. The full
    /// collection is rewritten in one store call. Returns the record as
    /// stored.
    pub fn save<R: Record>(&self, mut record: R) -> Result<R> {
        record.validate()?;

        let mut items = self.list::<R>();
        let existing = record
            .id()
            .and_then(|id| items.iter().position(|item| item.id() == Some(id)));

        match existing {
            Some(pos) => items[pos] = record.clone(),
            None => {
                record.set_id(Uuid::now_v7());
                record.stamp_created(Utc::now());
                items.push(record.clone());
            }
        }

        self.write_collection(&items)?;
        Ok(record)
    }

    /// Remove the record with a matching id and rewrite the collection.
    /// Deleting an id that is not present is a no-op, not an error.
    pub fn delete<R: Record>(&self, id: Uuid) -> Result<()> {
        let mut items = self.list::<R>();
        items.retain(|item| item.id() != Some(id));
        self.write_collection(&items)
    }

    /// Number of stored records of one kind.
    pub fn count<R: Record>(&self) -> usize {
        self.list::<R>().len()
    }

    fn write_collection<R: Record>(&self, items: &[R]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.local.write(R::KIND.storage_key(), &text)
    }

    // ========== Singletons ==========

    /// Replace the stored singleton with exactly `value`. Fields absent from
    /// `value` are gone after the save; nothing is merged.
    pub fn save_singleton<S: Singleton>(&self, value: &S) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.local.write(S::SLOT.storage_key(), &text)
    }

    /// The stored singleton, or None when nothing (or nothing readable) is
    /// stored.
    pub fn load_singleton<S: Singleton>(&self) -> Option<S> {
        let key = S::SLOT.storage_key();
        let text = self.local.read(key)?;

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored singleton failed to parse, treating as absent");
                None
            }
        }
    }

    // ========== Session & Language ==========

    /// The stored admin session. Absent or unparsable session text reads as
    /// logged out.
    pub fn session(&self) -> Option<AdminSession> {
        let text = self.local.read(SESSION_KEY)?;

        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "stored session failed to parse, treating as logged out");
                None
            }
        }
    }

    pub fn save_session(&self, session: &AdminSession) -> Result<()> {
        let text = serde_json::to_string(session)?;
        self.local.write(SESSION_KEY, &text)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.local.remove(SESSION_KEY)
    }

    /// The stored display language preference; English when absent or
    /// unrecognized.
    pub fn language(&self) -> Lang {
        let Some(text) = self.local.read(LANGUAGE_KEY) else {
            return Lang::default();
        };

        match text.trim().parse() {
            Ok(lang) => lang,
            Err(err) => {
                tracing::warn!(error = %err, "stored language preference unrecognized, using default");
                Lang::default()
            }
        }
    }

    pub fn set_language(&self, lang: Lang) -> Result<()> {
        self.local.write(LANGUAGE_KEY, &lang.to_string())
    }
}
