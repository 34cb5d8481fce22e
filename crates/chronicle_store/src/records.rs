//! The five domain records and their creation payloads.
//!
//! Records are plain data with explicit foreign-key fields; relations are
//! resolved by the store, not by navigation properties. Creation payloads
//! (`New*`) carry the caller-supplied fields; identifiers and timestamps
//! are assigned when the store materializes the record.

use chrono::{DateTime, NaiveDate, Utc};
use chronicle_core::CaptionedPhoto;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct User {
    /// Unique identifier
    pub(crate) user_id: Uuid,
    /// Display name, not required to be unique
    pub(crate) username: String,
    /// Login email, unique across the store
    pub(crate) email: String,
    /// Digest of the account password
    pub(crate) password_hash: String,
    /// When the account was registered
    pub(crate) time_created: DateTime<Utc>,
    /// Last successful login, if any
    pub(crate) last_login: Option<DateTime<Utc>>,
    /// Whether the account is active
    pub(crate) is_active: bool,
    /// Avatar URL
    pub(crate) profile_picture_url: Option<String>,
    /// Free-form profile text
    pub(crate) bio: Option<String>,
}

/// Payload for registering a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct NewUser {
    /// Display name
    #[setters(skip)]
    pub username: String,
    /// Login email, must be unused
    #[setters(skip)]
    pub email: String,
    /// Digest of the account password
    #[setters(skip)]
    pub password_hash: String,
    /// Avatar URL
    pub profile_picture_url: Option<String>,
    /// Free-form profile text
    pub bio: Option<String>,
}

impl NewUser {
    /// Create a registration payload with the required fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            profile_picture_url: None,
            bio: None,
        }
    }
}

impl User {
    /// Materialize a user record from its creation payload.
    pub fn create(new: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            time_created: now,
            last_login: None,
            is_active: true,
            profile_picture_url: new.profile_picture_url,
            bio: new.bio,
        }
    }
}

/// A device registered to a user: phone, camera, or sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Device {
    /// Unique identifier
    pub(crate) device_id: Uuid,
    /// Owning user
    pub(crate) user_id: Uuid,
    /// Human-readable name
    pub(crate) device_name: String,
    /// Device category, e.g. "phone"
    pub(crate) device_type: Option<String>,
    /// Operating system family
    pub(crate) os_type: Option<String>,
    /// Operating system version
    pub(crate) os_version: Option<String>,
    /// Uploader application version
    pub(crate) app_version: Option<String>,
    /// Last time the device synchronized content
    pub(crate) last_sync: Option<DateTime<Utc>>,
    /// Whether the device may upload
    pub(crate) is_active: bool,
    /// Upload credential, unique across the store
    pub(crate) api_key: String,
    /// When the device was registered
    pub(crate) time_created: DateTime<Utc>,
    /// Last modification time
    pub(crate) time_modified: DateTime<Utc>,
}

/// Payload for registering a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct NewDevice {
    /// Owning user
    #[setters(skip)]
    pub user_id: Uuid,
    /// Human-readable name
    #[setters(skip)]
    pub device_name: String,
    /// Upload credential, must be unused
    #[setters(skip)]
    pub api_key: String,
    /// Device category
    pub device_type: Option<String>,
    /// Operating system family
    pub os_type: Option<String>,
    /// Operating system version
    pub os_version: Option<String>,
    /// Uploader application version
    pub app_version: Option<String>,
}

impl NewDevice {
    /// Create a registration payload with the required fields.
    pub fn new(user_id: Uuid, device_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user_id,
            device_name: device_name.into(),
            api_key: api_key.into(),
            device_type: None,
            os_type: None,
            os_version: None,
            app_version: None,
        }
    }
}

impl Device {
    /// Materialize a device record from its creation payload.
    pub fn create(new: NewDevice, now: DateTime<Utc>) -> Self {
        Self {
            device_id: Uuid::new_v4(),
            user_id: new.user_id,
            device_name: new.device_name,
            device_type: new.device_type,
            os_type: new.os_type,
            os_version: new.os_version,
            app_version: new.app_version,
            last_sync: None,
            is_active: true,
            api_key: new.api_key,
            time_created: now,
            time_modified: now,
        }
    }
}

/// A journal: a titled narrative document owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Journal {
    /// Unique identifier
    pub(crate) journal_id: Uuid,
    /// Owning user
    pub(crate) user_id: Uuid,
    /// Journal title
    pub(crate) title: String,
    /// Markdown body
    pub(crate) description: Option<String>,
    /// When the journal was created
    pub(crate) time_created: DateTime<Utc>,
    /// Last modification time
    pub(crate) time_modified: DateTime<Utc>,
    /// Whether the user starred this journal
    pub(crate) starred: bool,
    /// User-assigned tags
    pub(crate) tags: Vec<String>,
    /// Whether the journal is publicly visible
    pub(crate) is_public: bool,
}

/// Payload for creating a journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct NewJournal {
    /// Owning user
    #[setters(skip)]
    pub user_id: Uuid,
    /// Journal title
    #[setters(skip)]
    pub title: String,
    /// Markdown body
    pub description: Option<String>,
    /// User-assigned tags
    pub tags: Vec<String>,
    /// Whether the journal is publicly visible
    pub is_public: bool,
}

impl NewJournal {
    /// Create a journal payload with the required fields.
    pub fn new(user_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: None,
            tags: Vec::new(),
            is_public: false,
        }
    }
}

impl Journal {
    /// Materialize a journal record from its creation payload.
    pub fn create(new: NewJournal, now: DateTime<Utc>) -> Self {
        Self {
            journal_id: Uuid::new_v4(),
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            time_created: now,
            time_modified: now,
            starred: false,
            tags: new.tags,
            is_public: new.is_public,
        }
    }
}

/// An uploaded photo.
///
/// `description` is the enrichment caption: `None` until a vision model
/// has described the image. Composition requires the caption, witnessed
/// by [`Photo::captioned`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Photo {
    /// Unique identifier
    pub(crate) photo_id: Uuid,
    /// Owning user
    pub(crate) user_id: Uuid,
    /// Journal this photo is attached to, if any
    pub(crate) journal_id: Option<Uuid>,
    /// Device that uploaded the photo
    pub(crate) device_id: Uuid,
    /// When the photo was taken
    pub(crate) time_created: DateTime<Utc>,
    /// Last modification time
    pub(crate) time_modified: DateTime<Utc>,
    /// Free-form capture location
    pub(crate) location: Option<String>,
    /// Enrichment caption, absent until the photo is described
    pub(crate) description: Option<String>,
    /// Public URL of the image
    pub(crate) url: String,
    /// Whether the user starred this photo
    pub(crate) starred: bool,
    /// Original file name
    pub(crate) file_name: Option<String>,
    /// Original file size in bytes
    pub(crate) file_size: Option<u64>,
    /// MIME type of the upload
    pub(crate) file_type: Option<String>,
}

/// Payload for recording an uploaded photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct NewPhoto {
    /// Owning user
    #[setters(skip)]
    pub user_id: Uuid,
    /// Device that uploaded the photo
    #[setters(skip)]
    pub device_id: Uuid,
    /// Public URL of the image
    #[setters(skip)]
    pub url: String,
    /// Free-form capture location
    pub location: Option<String>,
    /// Original file name
    pub file_name: Option<String>,
    /// Original file size in bytes
    pub file_size: Option<u64>,
    /// MIME type of the upload
    pub file_type: Option<String>,
}

impl NewPhoto {
    /// Create a photo payload with the required fields.
    pub fn new(user_id: Uuid, device_id: Uuid, url: impl Into<String>) -> Self {
        Self {
            user_id,
            device_id,
            url: url.into(),
            location: None,
            file_name: None,
            file_size: None,
            file_type: None,
        }
    }
}

impl Photo {
    /// Materialize a photo record from its creation payload.
    pub fn create(new: NewPhoto, now: DateTime<Utc>) -> Self {
        Self {
            photo_id: Uuid::new_v4(),
            user_id: new.user_id,
            journal_id: None,
            device_id: new.device_id,
            time_created: now,
            time_modified: now,
            location: new.location,
            description: None,
            url: new.url,
            starred: false,
            file_name: new.file_name,
            file_size: new.file_size,
            file_type: new.file_type,
        }
    }

    /// View this photo as a captioned reference, if its caption exists.
    ///
    /// Returns `None` for photos that have not been enriched yet, which
    /// keeps uncaptioned photos out of the composer at the type level.
    pub fn captioned(&self) -> Option<CaptionedPhoto> {
        self.description.as_deref().and_then(|caption| {
            CaptionedPhoto::new(self.photo_id, self.url.clone(), caption, self.time_created)
        })
    }
}

/// A text journal entry uploaded from a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Entry {
    /// Unique identifier
    pub(crate) entry_id: Uuid,
    /// Owning user
    pub(crate) user_id: Uuid,
    /// Journal this entry belongs to
    pub(crate) journal_id: Uuid,
    /// Device that uploaded the entry
    pub(crate) device_id: Uuid,
    /// When the entry was written
    pub(crate) time_created: DateTime<Utc>,
    /// Last modification time
    pub(crate) time_modified: DateTime<Utc>,
    /// Free-form capture position
    pub(crate) position: Option<String>,
    /// Entry text
    pub(crate) content: String,
}

/// Payload for recording a text entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct NewEntry {
    /// Owning user
    #[setters(skip)]
    pub user_id: Uuid,
    /// Journal this entry belongs to
    #[setters(skip)]
    pub journal_id: Uuid,
    /// Device that uploaded the entry
    #[setters(skip)]
    pub device_id: Uuid,
    /// Entry text
    #[setters(skip)]
    pub content: String,
    /// Free-form capture position
    pub position: Option<String>,
}

impl NewEntry {
    /// Create an entry payload with the required fields.
    pub fn new(
        user_id: Uuid,
        journal_id: Uuid,
        device_id: Uuid,
        content: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            journal_id,
            device_id,
            content: content.into(),
            position: None,
        }
    }
}

impl Entry {
    /// Materialize an entry record from its creation payload.
    pub fn create(new: NewEntry, now: DateTime<Utc>) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            user_id: new.user_id,
            journal_id: new.journal_id,
            device_id: new.device_id,
            time_created: now,
            time_modified: now,
            position: new.position,
            content: new.content,
        }
    }
}

/// Per-day count of a user's content creation, across journals, photos,
/// and entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ActivityCount {
    /// Calendar day (UTC)
    date: NaiveDate,
    /// Number of records created on that day
    count: u64,
}

impl ActivityCount {
    /// Create an activity count.
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}
