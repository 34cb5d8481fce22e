//! Filter criteria for list queries.
//!
//! All predicate fields are optional; combining multiple criteria forms an
//! AND condition. Date bounds apply to the modification timestamp, which
//! is also the default sort field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp field used for sorting list results.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    /// Sort by creation time
    TimeCreated,
    /// Sort by last modification time
    #[default]
    TimeModified,
}

/// Sort direction for list results.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

/// Filter criteria for listing a user's journals.
///
/// # Examples
///
/// ```
/// use chronicle_store::{JournalFilter, SortField, SortOrder};
///
/// let filter = JournalFilter::default()
///     .with_starred(true)
///     .with_tag("travel")
///     .with_sort_by(SortField::TimeCreated)
///     .with_order(SortOrder::Asc)
///     .with_limit(5usize);
/// assert_eq!(filter.limit, Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct JournalFilter {
    /// Keep only starred journals when `Some(true)`
    pub starred: Option<bool>,
    /// Filter by public visibility
    pub is_public: Option<bool>,
    /// Keep journals modified at or after this instant
    pub from_date: Option<DateTime<Utc>>,
    /// Keep journals modified at or before this instant
    pub to_date: Option<DateTime<Utc>>,
    /// Keep journals whose body contains this substring
    pub contains: Option<String>,
    /// Keep journals carrying this tag
    pub tag: Option<String>,
    /// Timestamp field to sort by
    pub sort_by: SortField,
    /// Sort direction
    pub order: SortOrder,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Number of results to skip
    pub offset: Option<usize>,
}

/// Filter criteria for listing a user's photos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct PhotoFilter {
    /// Keep only starred photos when `Some(true)`
    pub starred: Option<bool>,
    /// Keep photos modified at or after this instant
    pub from_date: Option<DateTime<Utc>>,
    /// Keep photos modified at or before this instant
    pub to_date: Option<DateTime<Utc>>,
    /// Keep photos uploaded by this device
    pub device_id: Option<Uuid>,
    /// Keep photos whose caption contains this substring
    pub contains: Option<String>,
    /// Timestamp field to sort by
    pub sort_by: SortField,
    /// Sort direction
    pub order: SortOrder,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Number of results to skip
    pub offset: Option<usize>,
}
