//! Explicit partial-update structures.
//!
//! A patch names only the fields to change; unset fields keep the stored
//! value. Application is a pure merge: the patched record is a new value
//! and the original is untouched. Records carrying a `time_modified`
//! field have it refreshed to the application time.

use crate::{Device, Entry, Journal, Photo, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partial update for a [`User`].
///
/// # Examples
///
/// ```
/// use chronicle_store::UserPatch;
///
/// let patch = UserPatch::default().with_bio("Mountain photographer.");
/// assert!(patch.username.is_none());
/// assert_eq!(patch.bio.as_deref(), Some("Mountain photographer."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct UserPatch {
    /// New display name
    pub username: Option<String>,
    /// New login email
    pub email: Option<String>,
    /// New password digest
    pub password_hash: Option<String>,
    /// Activate or deactivate the account
    pub is_active: Option<bool>,
    /// New avatar URL
    pub profile_picture_url: Option<String>,
    /// New profile text
    pub bio: Option<String>,
}

impl UserPatch {
    /// Merge this patch into a user record, yielding the updated record.
    pub fn apply(&self, user: &User) -> User {
        User {
            username: self.username.clone().unwrap_or_else(|| user.username.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
            password_hash: self
                .password_hash
                .clone()
                .unwrap_or_else(|| user.password_hash.clone()),
            is_active: self.is_active.unwrap_or(user.is_active),
            profile_picture_url: self
                .profile_picture_url
                .clone()
                .or_else(|| user.profile_picture_url.clone()),
            bio: self.bio.clone().or_else(|| user.bio.clone()),
            ..user.clone()
        }
    }
}

/// Partial update for a [`Device`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct DevicePatch {
    /// New device name
    pub device_name: Option<String>,
    /// New device category
    pub device_type: Option<String>,
    /// New operating system family
    pub os_type: Option<String>,
    /// New operating system version
    pub os_version: Option<String>,
    /// New uploader application version
    pub app_version: Option<String>,
    /// Activate or deactivate the device
    pub is_active: Option<bool>,
    /// Rotate the upload credential
    pub api_key: Option<String>,
    /// Record a synchronization time
    pub last_sync: Option<DateTime<Utc>>,
}

impl DevicePatch {
    /// Merge this patch into a device record, refreshing `time_modified`.
    pub fn apply(&self, device: &Device, now: DateTime<Utc>) -> Device {
        Device {
            device_name: self
                .device_name
                .clone()
                .unwrap_or_else(|| device.device_name.clone()),
            device_type: self.device_type.clone().or_else(|| device.device_type.clone()),
            os_type: self.os_type.clone().or_else(|| device.os_type.clone()),
            os_version: self.os_version.clone().or_else(|| device.os_version.clone()),
            app_version: self
                .app_version
                .clone()
                .or_else(|| device.app_version.clone()),
            is_active: self.is_active.unwrap_or(device.is_active),
            api_key: self.api_key.clone().unwrap_or_else(|| device.api_key.clone()),
            last_sync: self.last_sync.or(device.last_sync),
            time_modified: now,
            ..device.clone()
        }
    }
}

/// Partial update for a [`Journal`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct JournalPatch {
    /// New title
    pub title: Option<String>,
    /// New markdown body
    pub description: Option<String>,
    /// Star or unstar the journal
    pub starred: Option<bool>,
    /// Replace the tag list
    pub tags: Option<Vec<String>>,
    /// Publish or unpublish the journal
    pub is_public: Option<bool>,
}

impl JournalPatch {
    /// Merge this patch into a journal record, refreshing `time_modified`.
    pub fn apply(&self, journal: &Journal, now: DateTime<Utc>) -> Journal {
        Journal {
            title: self.title.clone().unwrap_or_else(|| journal.title.clone()),
            description: self
                .description
                .clone()
                .or_else(|| journal.description.clone()),
            starred: self.starred.unwrap_or(journal.starred),
            tags: self.tags.clone().unwrap_or_else(|| journal.tags.clone()),
            is_public: self.is_public.unwrap_or(journal.is_public),
            time_modified: now,
            ..journal.clone()
        }
    }
}

/// Partial update for a [`Photo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct PhotoPatch {
    /// New capture location
    pub location: Option<String>,
    /// New or corrected caption
    pub description: Option<String>,
    /// Star or unstar the photo
    pub starred: Option<bool>,
    /// New file name
    pub file_name: Option<String>,
    /// Attach the photo to a journal
    pub journal_id: Option<Uuid>,
}

impl PhotoPatch {
    /// Merge this patch into a photo record, refreshing `time_modified`.
    pub fn apply(&self, photo: &Photo, now: DateTime<Utc>) -> Photo {
        Photo {
            location: self.location.clone().or_else(|| photo.location.clone()),
            description: self.description.clone().or_else(|| photo.description.clone()),
            starred: self.starred.unwrap_or(photo.starred),
            file_name: self.file_name.clone().or_else(|| photo.file_name.clone()),
            journal_id: self.journal_id.or(photo.journal_id),
            time_modified: now,
            ..photo.clone()
        }
    }
}

/// Partial update for an [`Entry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct EntryPatch {
    /// New entry text
    pub content: Option<String>,
    /// New capture position
    pub position: Option<String>,
    /// Move the entry to another journal
    pub journal_id: Option<Uuid>,
}

impl EntryPatch {
    /// Merge this patch into an entry record, refreshing `time_modified`.
    pub fn apply(&self, entry: &Entry, now: DateTime<Utc>) -> Entry {
        Entry {
            content: self.content.clone().unwrap_or_else(|| entry.content.clone()),
            position: self.position.clone().or_else(|| entry.position.clone()),
            journal_id: self.journal_id.unwrap_or(entry.journal_id),
            time_modified: now,
            ..entry.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewJournal, NewPhoto, NewUser};

    #[test]
    fn patch_sets_only_provided_fields() {
        let now = Utc::now();
        let journal = Journal::create(NewJournal::new(Uuid::new_v4(), "Original"), now);
        let later = now + chrono::Duration::seconds(30);

        let patched = JournalPatch::default()
            .with_starred(true)
            .apply(&journal, later);

        assert_eq!(patched.title(), "Original");
        assert!(*patched.starred());
        assert_eq!(*patched.time_created(), now);
        assert_eq!(*patched.time_modified(), later);
        // the original record is untouched
        assert!(!journal.starred());
    }

    #[test]
    fn photo_caption_patch_enables_captioned_view() {
        let now = Utc::now();
        let photo = Photo::create(
            NewPhoto::new(Uuid::new_v4(), Uuid::new_v4(), "https://static.example.com/p.jpg"),
            now,
        );
        assert!(photo.captioned().is_none());

        let patched = PhotoPatch::default()
            .with_description("A dog chasing waves.")
            .apply(&photo, now);
        let captioned = patched.captioned().unwrap();
        assert_eq!(captioned.caption(), "A dog chasing waves.");
    }

    #[test]
    fn user_patch_does_not_touch_identity_or_creation_time() {
        let now = Utc::now();
        let user = User::create(NewUser::new("ada", "ada@example.com", "digest"), now);
        let patched = UserPatch::default().with_is_active(false).apply(&user);
        assert_eq!(patched.user_id(), user.user_id());
        assert_eq!(*patched.time_created(), now);
        assert!(!patched.is_active());
    }
}
