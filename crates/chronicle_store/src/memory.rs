//! In-memory implementation of the record store.
//!
//! Stores records in HashMaps protected by an RwLock for thread-safe
//! access. All data is lost when the last clone is dropped. Suitable for
//! tests and single-process deployments.

use crate::{
    ActivityCount, Device, DevicePatch, DeviceStore, Entry, EntryPatch, EntryStore, Journal,
    JournalFilter, JournalPatch, JournalStore, NewDevice, NewEntry, NewJournal, NewPhoto, NewUser,
    Photo, PhotoFilter, PhotoPatch, PhotoStore, SortField, SortOrder, User, UserPatch, UserStore,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chronicle_error::{ChronicleResult, StoreError, StoreErrorKind};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe in-memory record store.
///
/// Cloning is cheap; all clones share the same tables.
///
/// # Example
///
/// ```no_run
/// use chronicle_store::{InMemoryStore, NewUser, UserStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///     let user = store
///         .create_user(NewUser::new("ada", "ada@example.com", "digest"))
///         .await?;
///     println!("registered {}", user.username());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    devices: HashMap<Uuid, Device>,
    journals: HashMap<Uuid, Journal>,
    photos: HashMap<Uuid, Photo>,
    entries: HashMap<Uuid, Entry>,
}

impl Tables {
    fn require_user(&self, user_id: Uuid) -> ChronicleResult<&User> {
        self.users
            .get(&user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id).into())
    }
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of journals currently stored (for testing).
    pub async fn journal_count(&self) -> usize {
        self.tables.read().await.journals.len()
    }
}

fn sort_timestamps<T>(
    records: &mut [T],
    sort_by: SortField,
    order: SortOrder,
    created: impl Fn(&T) -> DateTime<Utc>,
    modified: impl Fn(&T) -> DateTime<Utc>,
) {
    records.sort_by_key(|r| match sort_by {
        SortField::TimeCreated => created(r),
        SortField::TimeModified => modified(r),
    });
    if order == SortOrder::Desc {
        records.reverse();
    }
}

fn paginate<T>(records: Vec<T>, offset: Option<usize>, limit: Option<usize>) -> Vec<T> {
    records
        .into_iter()
        .skip(offset.unwrap_or(0))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

#[async_trait]
impl UserStore for InMemoryStore {
    #[tracing::instrument(skip(self, new), fields(email = %new.email))]
    async fn create_user(&self, new: NewUser) -> ChronicleResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::new(StoreErrorKind::DuplicateEmail(new.email)).into());
        }
        let user = User::create(new, Utc::now());
        tables.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> ChronicleResult<User> {
        let tables = self.tables.read().await;
        tables.require_user(user_id).cloned()
    }

    async fn list_users(&self) -> ChronicleResult<Vec<User>> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by_key(|u| u.time_created);
        Ok(users)
    }

    async fn update_user(&self, user_id: Uuid, patch: &UserPatch) -> ChronicleResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get(&user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id))?;
        if let Some(ref email) = patch.email
            && tables
                .users
                .values()
                .any(|u| u.user_id != user_id && &u.email == email)
        {
            return Err(StoreError::new(StoreErrorKind::DuplicateEmail(email.clone())).into());
        }
        let updated = patch.apply(user);
        tables.users.insert(user_id, updated.clone());
        Ok(updated)
    }

    async fn record_login(&self, user_id: Uuid) -> ChronicleResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id))?;
        user.last_login = Some(Utc::now());
        Ok(user.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_user(&self, user_id: Uuid) -> ChronicleResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&user_id).is_none() {
            return Err(StoreError::not_found("user", user_id).into());
        }
        // cascade: a deleted account takes its content with it
        tables.devices.retain(|_, d| d.user_id != user_id);
        tables.journals.retain(|_, j| j.user_id != user_id);
        tables.photos.retain(|_, p| p.user_id != user_id);
        tables.entries.retain(|_, e| e.user_id != user_id);
        Ok(())
    }

    async fn activity_counts(&self, user_id: Uuid) -> ChronicleResult<Vec<ActivityCount>> {
        let tables = self.tables.read().await;
        tables.require_user(user_id)?;

        let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        let days = tables
            .journals
            .values()
            .filter(|j| j.user_id == user_id)
            .map(|j| j.time_created)
            .chain(
                tables
                    .photos
                    .values()
                    .filter(|p| p.user_id == user_id)
                    .map(|p| p.time_created),
            )
            .chain(
                tables
                    .entries
                    .values()
                    .filter(|e| e.user_id == user_id)
                    .map(|e| e.time_created),
            );
        for day in days {
            *counts.entry(day.date_naive()).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(date, count)| ActivityCount::new(date, count))
            .collect())
    }
}

#[async_trait]
impl DeviceStore for InMemoryStore {
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id))]
    async fn create_device(&self, new: NewDevice) -> ChronicleResult<Device> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&new.user_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "user",
                id: new.user_id,
            })
            .into());
        }
        if tables.devices.values().any(|d| d.api_key == new.api_key) {
            return Err(StoreError::new(StoreErrorKind::DuplicateApiKey).into());
        }
        let device = Device::create(new, Utc::now());
        tables.devices.insert(device.device_id, device.clone());
        Ok(device)
    }

    async fn get_device(&self, device_id: Uuid) -> ChronicleResult<Device> {
        let tables = self.tables.read().await;
        tables
            .devices
            .get(&device_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("device", device_id).into())
    }

    async fn list_devices(&self, user_id: Uuid) -> ChronicleResult<Vec<Device>> {
        let tables = self.tables.read().await;
        tables.require_user(user_id)?;
        let mut devices: Vec<Device> = tables
            .devices
            .values()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect();
        devices.sort_by_key(|d| d.time_created);
        Ok(devices)
    }

    async fn update_device(
        &self,
        device_id: Uuid,
        patch: &DevicePatch,
    ) -> ChronicleResult<Device> {
        let mut tables = self.tables.write().await;
        let device = tables
            .devices
            .get(&device_id)
            .ok_or_else(|| StoreError::not_found("device", device_id))?;
        let updated = patch.apply(device, Utc::now());
        tables.devices.insert(device_id, updated.clone());
        Ok(updated)
    }

    async fn delete_device(&self, device_id: Uuid) -> ChronicleResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .devices
            .remove(&device_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("device", device_id).into())
    }
}

#[async_trait]
impl JournalStore for InMemoryStore {
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id, title = %new.title))]
    async fn create_journal(&self, new: NewJournal) -> ChronicleResult<Journal> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&new.user_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "user",
                id: new.user_id,
            })
            .into());
        }
        let journal = Journal::create(new, Utc::now());
        tables.journals.insert(journal.journal_id, journal.clone());
        Ok(journal)
    }

    async fn get_journal(&self, journal_id: Uuid) -> ChronicleResult<Journal> {
        let tables = self.tables.read().await;
        tables
            .journals
            .get(&journal_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("journal", journal_id).into())
    }

    async fn list_journals(
        &self,
        user_id: Uuid,
        filter: &JournalFilter,
    ) -> ChronicleResult<Vec<Journal>> {
        let tables = self.tables.read().await;
        tables.require_user(user_id)?;

        let mut journals: Vec<Journal> = tables
            .journals
            .values()
            .filter(|j| j.user_id == user_id)
            .filter(|j| filter.starred.is_none_or(|want| j.starred == want))
            .filter(|j| filter.is_public.is_none_or(|want| j.is_public == want))
            .filter(|j| filter.from_date.is_none_or(|from| j.time_modified >= from))
            .filter(|j| filter.to_date.is_none_or(|to| j.time_modified <= to))
            .filter(|j| {
                filter.contains.as_deref().is_none_or(|needle| {
                    j.description.as_deref().is_some_and(|d| d.contains(needle))
                })
            })
            .filter(|j| {
                filter
                    .tag
                    .as_deref()
                    .is_none_or(|tag| j.tags.iter().any(|t| t == tag))
            })
            .cloned()
            .collect();

        sort_timestamps(
            &mut journals,
            filter.sort_by,
            filter.order,
            |j| j.time_created,
            |j| j.time_modified,
        );
        Ok(paginate(journals, filter.offset, filter.limit))
    }

    async fn update_journal(
        &self,
        journal_id: Uuid,
        patch: &JournalPatch,
    ) -> ChronicleResult<Journal> {
        let mut tables = self.tables.write().await;
        let journal = tables
            .journals
            .get(&journal_id)
            .ok_or_else(|| StoreError::not_found("journal", journal_id))?;
        let updated = patch.apply(journal, Utc::now());
        tables.journals.insert(journal_id, updated.clone());
        Ok(updated)
    }

    async fn delete_journal(&self, journal_id: Uuid) -> ChronicleResult<()> {
        let mut tables = self.tables.write().await;
        if tables.journals.remove(&journal_id).is_none() {
            return Err(StoreError::not_found("journal", journal_id).into());
        }
        // entries belong to exactly one journal; photos only detach
        tables.entries.retain(|_, e| e.journal_id != journal_id);
        for photo in tables.photos.values_mut() {
            if photo.journal_id == Some(journal_id) {
                photo.journal_id = None;
            }
        }
        Ok(())
    }

    async fn delete_journals(&self, journal_ids: &[Uuid]) -> ChronicleResult<usize> {
        {
            let tables = self.tables.read().await;
            for id in journal_ids {
                if !tables.journals.contains_key(id) {
                    return Err(StoreError::not_found("journal", *id).into());
                }
            }
        }
        for id in journal_ids {
            self.delete_journal(*id).await?;
        }
        Ok(journal_ids.len())
    }
}

#[async_trait]
impl PhotoStore for InMemoryStore {
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id))]
    async fn create_photo(&self, new: NewPhoto) -> ChronicleResult<Photo> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&new.user_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "user",
                id: new.user_id,
            })
            .into());
        }
        if !tables.devices.contains_key(&new.device_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "device",
                id: new.device_id,
            })
            .into());
        }
        let photo = Photo::create(new, Utc::now());
        tables.photos.insert(photo.photo_id, photo.clone());
        Ok(photo)
    }

    async fn get_photo(&self, photo_id: Uuid) -> ChronicleResult<Photo> {
        let tables = self.tables.read().await;
        tables
            .photos
            .get(&photo_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("photo", photo_id).into())
    }

    async fn get_photos(&self, photo_ids: &[Uuid]) -> ChronicleResult<Vec<Photo>> {
        let tables = self.tables.read().await;
        let mut photos: Vec<Photo> = photo_ids
            .iter()
            .filter_map(|id| tables.photos.get(id))
            .cloned()
            .collect();
        photos.sort_by_key(|p| p.time_created);
        Ok(photos)
    }

    async fn list_photos(
        &self,
        user_id: Uuid,
        filter: &PhotoFilter,
    ) -> ChronicleResult<Vec<Photo>> {
        let tables = self.tables.read().await;
        tables.require_user(user_id)?;

        let mut photos: Vec<Photo> = tables
            .photos
            .values()
            .filter(|p| p.user_id == user_id)
            .filter(|p| filter.starred.is_none_or(|want| p.starred == want))
            .filter(|p| filter.from_date.is_none_or(|from| p.time_modified >= from))
            .filter(|p| filter.to_date.is_none_or(|to| p.time_modified <= to))
            .filter(|p| filter.device_id.is_none_or(|d| p.device_id == d))
            .filter(|p| {
                filter.contains.as_deref().is_none_or(|needle| {
                    p.description.as_deref().is_some_and(|d| d.contains(needle))
                })
            })
            .cloned()
            .collect();

        sort_timestamps(
            &mut photos,
            filter.sort_by,
            filter.order,
            |p| p.time_created,
            |p| p.time_modified,
        );
        Ok(paginate(photos, filter.offset, filter.limit))
    }

    async fn update_photo(&self, photo_id: Uuid, patch: &PhotoPatch) -> ChronicleResult<Photo> {
        let mut tables = self.tables.write().await;
        let photo = tables
            .photos
            .get(&photo_id)
            .ok_or_else(|| StoreError::not_found("photo", photo_id))?;
        if let Some(journal_id) = patch.journal_id
            && !tables.journals.contains_key(&journal_id)
        {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "journal",
                id: journal_id,
            })
            .into());
        }
        let updated = patch.apply(photo, Utc::now());
        tables.photos.insert(photo_id, updated.clone());
        Ok(updated)
    }

    async fn delete_photo(&self, photo_id: Uuid) -> ChronicleResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .photos
            .remove(&photo_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("photo", photo_id).into())
    }

    async fn delete_photos(&self, photo_ids: &[Uuid]) -> ChronicleResult<usize> {
        let mut tables = self.tables.write().await;
        for id in photo_ids {
            if !tables.photos.contains_key(id) {
                return Err(StoreError::not_found("photo", *id).into());
            }
        }
        for id in photo_ids {
            tables.photos.remove(id);
        }
        Ok(photo_ids.len())
    }
}

#[async_trait]
impl EntryStore for InMemoryStore {
    #[tracing::instrument(skip(self, new), fields(user_id = %new.user_id))]
    async fn create_entry(&self, new: NewEntry) -> ChronicleResult<Entry> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&new.user_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "user",
                id: new.user_id,
            })
            .into());
        }
        if !tables.journals.contains_key(&new.journal_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "journal",
                id: new.journal_id,
            })
            .into());
        }
        if !tables.devices.contains_key(&new.device_id) {
            return Err(StoreError::new(StoreErrorKind::ForeignKey {
                entity: "device",
                id: new.device_id,
            })
            .into());
        }
        let entry = Entry::create(new, Utc::now());
        tables.entries.insert(entry.entry_id, entry.clone());
        Ok(entry)
    }

    async fn get_entry(&self, entry_id: Uuid) -> ChronicleResult<Entry> {
        let tables = self.tables.read().await;
        tables
            .entries
            .get(&entry_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("entry", entry_id).into())
    }

    async fn get_entries(&self, entry_ids: &[Uuid]) -> ChronicleResult<Vec<Entry>> {
        let tables = self.tables.read().await;
        let mut entries: Vec<Entry> = entry_ids
            .iter()
            .filter_map(|id| tables.entries.get(id))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.time_created);
        Ok(entries)
    }

    async fn list_entries(&self, user_id: Uuid) -> ChronicleResult<Vec<Entry>> {
        let tables = self.tables.read().await;
        tables.require_user(user_id)?;
        let mut entries: Vec<Entry> = tables
            .entries
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.time_created);
        entries.reverse();
        Ok(entries)
    }

    async fn update_entry(&self, entry_id: Uuid, patch: &EntryPatch) -> ChronicleResult<Entry> {
        let mut tables = self.tables.write().await;
        let entry = tables
            .entries
            .get(&entry_id)
            .ok_or_else(|| StoreError::not_found("entry", entry_id))?;
        let updated = patch.apply(entry, Utc::now());
        tables.entries.insert(entry_id, updated.clone());
        Ok(updated)
    }

    async fn delete_entry(&self, entry_id: Uuid) -> ChronicleResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .entries
            .remove(&entry_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("entry", entry_id).into())
    }
}
