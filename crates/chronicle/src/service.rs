//! Caller-side orchestration of enrichment, composition, and persistence.

use crate::auth::hash_password;
use chronicle_composer::JournalComposer;
use chronicle_core::DatedItem;
use chronicle_error::{ChronicleResult, GeminiError, GeminiErrorKind};
use chronicle_interface::{NarrativeDriver, VisionDriver};
use chronicle_store::{Journal, NewJournal, NewUser, PhotoPatch, RecordStore, User};
use uuid::Uuid;

/// The content selected for one composition: photos and/or text entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalSelection {
    /// Photos to include, by id
    pub photo_ids: Vec<Uuid>,
    /// Entries to include, by id
    pub entry_ids: Vec<Uuid>,
}

impl JournalSelection {
    /// Select photos only.
    pub fn photos(photo_ids: Vec<Uuid>) -> Self {
        Self {
            photo_ids,
            entry_ids: Vec::new(),
        }
    }

    /// Builder method to add entry ids to the selection.
    pub fn with_entries(mut self, entry_ids: Vec<Uuid>) -> Self {
        self.entry_ids = entry_ids;
        self
    }
}

/// Orchestrates journal generation for a user.
///
/// The service owns the caption-before-compose precondition: every
/// selected photo lacking a caption is described by the vision driver and
/// the caption is persisted onto the photo *before* the item set is
/// built. The composer itself never sees an uncaptioned photo: the
/// conversion to [`chronicle_core::CaptionedPhoto`] makes that
/// unrepresentable.
///
/// Enrichment and generation calls run sequentially; timeouts are
/// transport-level inside the drivers. A failed generation surfaces as a
/// retryable error to the caller and persists nothing.
pub struct JournalService<S, V, D>
where
    S: RecordStore,
    V: VisionDriver,
    D: NarrativeDriver,
{
    store: S,
    vision: V,
    composer: JournalComposer<D>,
}

impl<S, V, D> JournalService<S, V, D>
where
    S: RecordStore,
    V: VisionDriver,
    D: NarrativeDriver,
{
    /// Create a service over a record store, a vision driver, and a
    /// configured composer.
    pub fn new(store: S, vision: V, composer: JournalComposer<D>) -> Self {
        Self {
            store,
            vision,
            composer,
        }
    }

    /// Access the underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a user, hashing the password before it reaches the store.
    #[tracing::instrument(skip(self, password), fields(email = %email))]
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ChronicleResult<User> {
        let new = NewUser::new(username, email, hash_password(password));
        self.store.create_user(new).await
    }

    /// Compose a journal from the selected photos and entries, persist
    /// it, and return the stored record.
    ///
    /// # Errors
    ///
    /// - store errors when the user or any referenced record is missing;
    /// - enrichment errors when a photo cannot be captioned;
    /// - [`chronicle_error::ComposerErrorKind::EmptyItems`] when the
    ///   selection resolves to nothing;
    /// - [`chronicle_error::ComposerErrorKind::GenerationFailed`] when
    ///   generation fails; retryable by the user, nothing is persisted.
    #[tracing::instrument(skip(self, selection), fields(photo_count = selection.photo_ids.len(), entry_count = selection.entry_ids.len()))]
    pub async fn compose_journal(
        &self,
        user_id: Uuid,
        selection: &JournalSelection,
    ) -> ChronicleResult<Journal> {
        self.store.get_user(user_id).await?;

        let mut items = Vec::new();

        for photo in self.store.get_photos(&selection.photo_ids).await? {
            let captioned = match photo.captioned() {
                Some(captioned) => captioned,
                None => {
                    let caption = self.vision.describe(photo.url()).await?;
                    let updated = self
                        .store
                        .update_photo(
                            *photo.photo_id(),
                            &PhotoPatch::default().with_description(caption),
                        )
                        .await?;
                    updated
                        .captioned()
                        .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?
                }
            };
            items.push(DatedItem::image(captioned));
        }

        for entry in self.store.get_entries(&selection.entry_ids).await? {
            items.push(DatedItem::text(*entry.time_created(), entry.content().clone()));
        }

        let composition = self.composer.compose(&items).await?;

        let new = NewJournal::new(user_id, composition.title().clone())
            .with_description(composition.body().clone());
        self.store.create_journal(new).await
    }
}
