//! Per-entity repository traits.
//!
//! These traits define the injected storage interface consumed by the
//! service layer. Implementations can use databases, filesystems, or
//! in-memory structures; [`crate::InMemoryStore`] is the bundled one.
//! All methods are async to support async database drivers and network
//! I/O.

use crate::{
    ActivityCount, Device, DevicePatch, Entry, EntryPatch, Journal, JournalFilter, JournalPatch,
    NewDevice, NewEntry, NewJournal, NewPhoto, NewUser, Photo, PhotoFilter, PhotoPatch, User,
    UserPatch,
};
use async_trait::async_trait;
use chronicle_error::ChronicleResult;
use uuid::Uuid;

/// Storage operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Register a user. Fails when the email is already registered.
    async fn create_user(&self, new: NewUser) -> ChronicleResult<User>;

    /// Load a user by id.
    async fn get_user(&self, user_id: Uuid) -> ChronicleResult<User>;

    /// List every registered user.
    async fn list_users(&self) -> ChronicleResult<Vec<User>>;

    /// Apply a patch to a user and return the updated record.
    async fn update_user(&self, user_id: Uuid, patch: &UserPatch) -> ChronicleResult<User>;

    /// Stamp the user's last successful login with the current time.
    async fn record_login(&self, user_id: Uuid) -> ChronicleResult<User>;

    /// Delete a user and everything they own.
    async fn delete_user(&self, user_id: Uuid) -> ChronicleResult<()>;

    /// Per-day creation counts across the user's journals, photos, and
    /// entries, sorted by date ascending.
    async fn activity_counts(&self, user_id: Uuid) -> ChronicleResult<Vec<ActivityCount>>;
}

/// Storage operations for registered devices.
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Register a device. Fails when the owning user does not exist or
    /// the api key is already in use.
    async fn create_device(&self, new: NewDevice) -> ChronicleResult<Device>;

    /// Load a device by id.
    async fn get_device(&self, device_id: Uuid) -> ChronicleResult<Device>;

    /// List a user's devices.
    async fn list_devices(&self, user_id: Uuid) -> ChronicleResult<Vec<Device>>;

    /// Apply a patch to a device and return the updated record.
    async fn update_device(&self, device_id: Uuid, patch: &DevicePatch)
    -> ChronicleResult<Device>;

    /// Delete a device.
    async fn delete_device(&self, device_id: Uuid) -> ChronicleResult<()>;
}

/// Storage operations for journals.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Create a journal. Fails when the owning user does not exist.
    async fn create_journal(&self, new: NewJournal) -> ChronicleResult<Journal>;

    /// Load a journal by id.
    async fn get_journal(&self, journal_id: Uuid) -> ChronicleResult<Journal>;

    /// List a user's journals matching the filter.
    async fn list_journals(
        &self,
        user_id: Uuid,
        filter: &JournalFilter,
    ) -> ChronicleResult<Vec<Journal>>;

    /// Apply a patch to a journal and return the updated record.
    async fn update_journal(
        &self,
        journal_id: Uuid,
        patch: &JournalPatch,
    ) -> ChronicleResult<Journal>;

    /// Delete a journal.
    async fn delete_journal(&self, journal_id: Uuid) -> ChronicleResult<()>;

    /// Delete several journals. Fails without deleting anything when any
    /// id does not resolve.
    async fn delete_journals(&self, journal_ids: &[Uuid]) -> ChronicleResult<usize>;
}

/// Storage operations for photos.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Record an uploaded photo. Fails when the owning user or uploading
    /// device does not exist.
    async fn create_photo(&self, new: NewPhoto) -> ChronicleResult<Photo>;

    /// Load a photo by id.
    async fn get_photo(&self, photo_id: Uuid) -> ChronicleResult<Photo>;

    /// Load several photos by id, sorted by creation time ascending.
    /// Ids that do not resolve are skipped.
    async fn get_photos(&self, photo_ids: &[Uuid]) -> ChronicleResult<Vec<Photo>>;

    /// List a user's photos matching the filter.
    async fn list_photos(&self, user_id: Uuid, filter: &PhotoFilter)
    -> ChronicleResult<Vec<Photo>>;

    /// Apply a patch to a photo and return the updated record.
    async fn update_photo(&self, photo_id: Uuid, patch: &PhotoPatch) -> ChronicleResult<Photo>;

    /// Delete a photo.
    async fn delete_photo(&self, photo_id: Uuid) -> ChronicleResult<()>;

    /// Delete several photos. Fails without deleting anything when any id
    /// does not resolve.
    async fn delete_photos(&self, photo_ids: &[Uuid]) -> ChronicleResult<usize>;
}

/// Storage operations for text entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Record a text entry. Fails when the owning user, journal, or
    /// uploading device does not exist.
    async fn create_entry(&self, new: NewEntry) -> ChronicleResult<Entry>;

    /// Load an entry by id.
    async fn get_entry(&self, entry_id: Uuid) -> ChronicleResult<Entry>;

    /// Load several entries by id, sorted by creation time ascending.
    /// Ids that do not resolve are skipped.
    async fn get_entries(&self, entry_ids: &[Uuid]) -> ChronicleResult<Vec<Entry>>;

    /// List a user's entries, newest first.
    async fn list_entries(&self, user_id: Uuid) -> ChronicleResult<Vec<Entry>>;

    /// Apply a patch to an entry and return the updated record.
    async fn update_entry(&self, entry_id: Uuid, patch: &EntryPatch) -> ChronicleResult<Entry>;

    /// Delete an entry.
    async fn delete_entry(&self, entry_id: Uuid) -> ChronicleResult<()>;
}

/// The full record store: every per-entity trait in one bound.
pub trait RecordStore: UserStore + DeviceStore + JournalStore + PhotoStore + EntryStore {}

impl<T> RecordStore for T where T: UserStore + DeviceStore + JournalStore + PhotoStore + EntryStore {}
