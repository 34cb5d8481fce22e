//! Dated content items: the normalized input units of journal composition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of content a [`DatedItem`] carries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    /// A text journal entry
    Text,
    /// A photo, represented by its caption
    Image,
}

/// A photo reference whose caption is known to be non-empty.
///
/// This type witnesses the caption-before-compose precondition: a
/// `CaptionedPhoto` can only be built from a non-empty caption, so an
/// image item can never reach the composer without one.
///
/// # Examples
///
/// ```
/// use chronicle_core::CaptionedPhoto;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let photo = CaptionedPhoto::new(
///     Uuid::new_v4(),
///     "https://static.example.com/a.jpg",
///     "A sunny beach at low tide.",
///     Utc::now(),
/// );
/// assert!(photo.is_some());
///
/// let blank = CaptionedPhoto::new(Uuid::new_v4(), "https://x/y.jpg", "  ", Utc::now());
/// assert!(blank.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CaptionedPhoto {
    /// Identifier of the underlying photo record
    photo_id: Uuid,
    /// Public URL of the image
    url: String,
    /// Non-empty textual description of the image content
    caption: String,
    /// When the photo was taken (creation timestamp of the record)
    taken_at: DateTime<Utc>,
}

impl CaptionedPhoto {
    /// Build a captioned photo reference.
    ///
    /// Returns `None` when the caption is empty or whitespace-only.
    pub fn new(
        photo_id: Uuid,
        url: impl Into<String>,
        caption: impl Into<String>,
        taken_at: DateTime<Utc>,
    ) -> Option<Self> {
        let caption = caption.into();
        if caption.trim().is_empty() {
            return None;
        }
        Some(Self {
            photo_id,
            url: url.into(),
            caption,
            taken_at,
        })
    }
}

/// A normalized unit of journal content: a text entry or a photo caption,
/// carrying the timestamp used for chronological ordering.
///
/// Items are produced transiently per composition request and never
/// persisted on their own. `content` holds either raw entry text or an
/// image's caption, never both.
///
/// # Examples
///
/// ```
/// use chronicle_core::{DatedItem, ItemKind};
/// use chrono::Utc;
///
/// let item = DatedItem::text(Utc::now(), "Walked along the river today.");
/// assert_eq!(*item.kind(), ItemKind::Text);
/// assert!(item.source_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DatedItem {
    /// When the content was created
    timestamp: DateTime<Utc>,
    /// Whether this item is entry text or an image caption
    kind: ItemKind,
    /// Entry text, or the image's caption
    content: String,
    /// URL of the image, present only for image items
    source_url: Option<String>,
}

impl DatedItem {
    /// Build a text item from a journal entry's content.
    pub fn text(timestamp: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            kind: ItemKind::Text,
            content: content.into(),
            source_url: None,
        }
    }

    /// Build an image item from a captioned photo.
    ///
    /// Taking [`CaptionedPhoto`] rather than a raw photo record makes the
    /// missing-caption case unrepresentable at this boundary.
    pub fn image(photo: CaptionedPhoto) -> Self {
        Self {
            timestamp: photo.taken_at,
            kind: ItemKind::Image,
            content: photo.caption,
            source_url: Some(photo.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_item_carries_caption_and_url() {
        let photo = CaptionedPhoto::new(
            Uuid::new_v4(),
            "https://static.example.com/cat.jpg",
            "A cat asleep on a windowsill.",
            Utc::now(),
        )
        .unwrap();
        let item = DatedItem::image(photo);
        assert_eq!(*item.kind(), ItemKind::Image);
        assert_eq!(item.content(), "A cat asleep on a windowsill.");
        assert_eq!(
            item.source_url().as_deref(),
            Some("https://static.example.com/cat.jpg")
        );
    }

    #[test]
    fn empty_caption_is_rejected() {
        assert!(CaptionedPhoto::new(Uuid::new_v4(), "https://x/y.jpg", "", Utc::now()).is_none());
        assert!(
            CaptionedPhoto::new(Uuid::new_v4(), "https://x/y.jpg", " \n\t", Utc::now()).is_none()
        );
    }

    #[test]
    fn item_kind_round_trips_through_strings() {
        assert_eq!(ItemKind::Image.to_string(), "image");
        assert_eq!("text".parse::<ItemKind>().unwrap(), ItemKind::Text);
    }
}
