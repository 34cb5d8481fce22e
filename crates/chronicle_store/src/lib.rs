//! Domain records and the record-store abstraction for Chronicle.
//!
//! This crate owns the five entity kinds of the journaling backend
//! (users, devices, journals, photos, and text entries) as plain records
//! with explicit foreign-key fields. Persistence goes through per-entity
//! repository traits so callers receive an injected storage interface
//! rather than a concrete backend; [`InMemoryStore`] is the bundled
//! thread-safe implementation.
//!
//! Partial updates are explicit patch structures naming only the fields to
//! change, applied by pure merge functions. There is no reflection and no
//! hidden collection mutation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filter;
mod memory;
mod patch;
mod records;
mod repository;

pub use filter::{JournalFilter, PhotoFilter, SortField, SortOrder};
pub use memory::InMemoryStore;
pub use patch::{DevicePatch, EntryPatch, JournalPatch, PhotoPatch, UserPatch};
pub use records::{
    ActivityCount, Device, Entry, Journal, NewDevice, NewEntry, NewJournal, NewPhoto, NewUser,
    Photo, User,
};
pub use repository::{DeviceStore, EntryStore, JournalStore, PhotoStore, RecordStore, UserStore};
