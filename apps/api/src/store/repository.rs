//! Résumé collections persisted as one JSON document per user.
//!
//! Every mutation is a read-modify-write of the whole collection under the
//! store's mutex. That is what keeps "at most one active résumé per user" true.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{ResumeDraft, ResumeRecord};
use crate::store::blob::BlobStore;
use crate::store::StoreError;

/// Key prefix for each user's collection blob.
pub const STORAGE_KEY: &str = "resumeScrollify_data";

/// The serialized blob: `{ "resumes": [...] }`, newest first.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Collection {
    #[serde(default)]
    resumes: Vec<ResumeRecord>,
}

impl Collection {
    fn position(&self, id: &str) -> Option<usize> {
        self.resumes.iter().position(|r| r.id == id)
    }

    /// Clears the active flag on every record except `keep`.
    fn deactivate_others(&mut self, keep: &str) {
        for record in self.resumes.iter_mut().filter(|r| r.id != keep) {
            record.is_active = false;
        }
    }

    /// Puts a new record at the front. Ids stay unique, and the first record
    /// in an empty collection is the active one.
    fn prepend(
        &mut self,
        mut record: ResumeRecord,
        limit: usize,
    ) -> Result<ResumeRecord, StoreError> {
        if self.resumes.len() >= limit {
            return Err(StoreError::LimitReached(limit));
        }
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        } else if self.position(&record.id).is_some() {
            return Err(StoreError::Conflict(record.id));
        }

        record.created_at = Some(Utc::now());
        if self.resumes.is_empty() {
            record.is_active = true;
        }
        if record.is_active {
            self.deactivate_others(&record.id);
        }

        self.resumes.insert(0, record.clone());
        Ok(record)
    }

    /// Applies `edit` to the record with `id` and keeps a single active record.
    /// The id and creation time cannot be changed by an edit.
    fn edit<F>(&mut self, id: &str, edit: F) -> Result<ResumeRecord, StoreError>
    where
        F: FnOnce(&mut ResumeRecord),
    {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let record = &mut self.resumes[index];
        let created_at = record.created_at;
        edit(record);
        record.id = id.to_string();
        record.created_at = created_at;

        let record = record.clone();
        if record.is_active {
            self.deactivate_others(id);
        }
        Ok(record)
    }
}

pub struct ResumeStore {
    blobs: Arc<dyn BlobStore>,
    max_per_user: usize,
    write_lock: Mutex<()>,
}

impl ResumeStore {
    pub fn new(blobs: Arc<dyn BlobStore>, max_per_user: usize) -> Self {
        Self {
            blobs,
            max_per_user,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &'static str {
        self.blobs.backend()
    }

    fn key(user_id: Uuid) -> String {
        format!("{STORAGE_KEY}:{user_id}")
    }

    async fn load(&self, user_id: Uuid) -> Result<Collection, StoreError> {
        match self.blobs.get(&Self::key(user_id)).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Collection::default()),
        }
    }

    async fn persist(&self, user_id: Uuid, collection: &Collection) -> Result<(), StoreError> {
        let raw = serde_json::to_string(collection)?;
        self.blobs.set(&Self::key(user_id), &raw).await
    }

    /// Runs one read-modify-write of the user's collection under the lock.
    /// Nothing is written when `change` fails.
    async fn mutate<T, F>(&self, user_id: Uuid, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Collection) -> Result<T, StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.load(user_id).await?;
        let out = change(&mut collection)?;
        self.persist(user_id, &collection).await?;
        Ok(out)
    }

    /// Stores a new record at the front of the collection.
    ///
    /// Assigns an id when the record has none and always stamps `created_at`.
    /// Fails with `Conflict` on a reused id and `LimitReached` when the user
    /// already holds the maximum number of résumés.
    pub async fn save(
        &self,
        user_id: Uuid,
        record: ResumeRecord,
    ) -> Result<ResumeRecord, StoreError> {
        let limit = self.max_per_user;
        let record = self
            .mutate(user_id, |collection| collection.prepend(record, limit))
            .await?;

        info!(
            "Saved resume {} for user {user_id} (ats score {})",
            record.id,
            record.ats_score()
        );
        Ok(record)
    }

    /// All of a user's résumés, newest first. A user with no blob has none.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ResumeRecord>, StoreError> {
        Ok(self.load(user_id).await?.resumes)
    }

    pub async fn get(&self, user_id: Uuid, id: &str) -> Result<Option<ResumeRecord>, StoreError> {
        Ok(self
            .load(user_id)
            .await?
            .resumes
            .into_iter()
            .find(|r| r.id == id))
    }

    /// Rewrites the stored record with `id` through `edit`.
    /// Activating a record deactivates every other one in the same write.
    pub async fn update<F>(
        &self,
        user_id: Uuid,
        id: &str,
        edit: F,
    ) -> Result<ResumeRecord, StoreError>
    where
        F: FnOnce(&mut ResumeRecord),
    {
        let record = self
            .mutate(user_id, |collection| collection.edit(id, edit))
            .await?;

        info!("Updated resume {id} for user {user_id}");
        Ok(record)
    }

    /// Replaces a record's content and re-scores it. Likes, the active flag,
    /// and the creation time are kept.
    pub async fn update_draft(
        &self,
        user_id: Uuid,
        id: &str,
        draft: ResumeDraft,
    ) -> Result<ResumeRecord, StoreError> {
        self.update(user_id, id, |record| record.replace_draft(draft)).await
    }

    /// Flips the like flag. Returns `false` when the id is unknown.
    pub async fn toggle_like(&self, user_id: Uuid, id: &str) -> Result<bool, StoreError> {
        match self.update(user_id, id, ResumeRecord::toggle_like).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn set_active(
        &self,
        user_id: Uuid,
        id: &str,
        active: bool,
    ) -> Result<ResumeRecord, StoreError> {
        self.update(user_id, id, |record| record.is_active = active).await
    }

    /// Drops the user's whole collection.
    pub async fn clear(&self, user_id: Uuid) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.blobs.remove(&Self::key(user_id)).await
    }
}
