//! In-memory record store tests: CRUD, patches, filters, and relations.

use chronicle_store::{
    DeviceStore, EntryStore, InMemoryStore, JournalFilter, JournalPatch, JournalStore, NewDevice,
    NewEntry, NewJournal, NewPhoto, NewUser, PhotoFilter, PhotoPatch, PhotoStore, SortField,
    SortOrder, UserPatch, UserStore,
};
use uuid::Uuid;

async fn seeded_user(store: &InMemoryStore, email: &str) -> Uuid {
    let user = store
        .create_user(NewUser::new("tester", email, "digest"))
        .await
        .unwrap();
    *user.user_id()
}

async fn seeded_device(store: &InMemoryStore, user_id: Uuid, key: &str) -> Uuid {
    let device = store
        .create_device(NewDevice::new(user_id, "phone", key))
        .await
        .unwrap();
    *device.device_id()
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let store = InMemoryStore::new();
    seeded_user(&store, "ada@example.com").await;

    let err = store
        .create_user(NewUser::new("other", "ada@example.com", "digest"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));
}

#[tokio::test]
async fn user_patch_updates_only_named_fields() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;

    let updated = store
        .update_user(user_id, &UserPatch::default().with_bio("Hiker."))
        .await
        .unwrap();
    assert_eq!(updated.bio().as_deref(), Some("Hiker."));
    assert_eq!(updated.email(), "ada@example.com");
}

#[tokio::test]
async fn record_login_stamps_last_login() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;

    let before = store.get_user(user_id).await.unwrap();
    assert!(before.last_login().is_none());

    let after = store.record_login(user_id).await.unwrap();
    assert!(after.last_login().is_some());
}

#[tokio::test]
async fn device_creation_requires_existing_user() {
    let store = InMemoryStore::new();
    let err = store
        .create_device(NewDevice::new(Uuid::new_v4(), "phone", "key-1"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[tokio::test]
async fn duplicate_api_key_is_rejected() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    seeded_device(&store, user_id, "key-1").await;

    let err = store
        .create_device(NewDevice::new(user_id, "tablet", "key-1"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("api key"));
}

#[tokio::test]
async fn journal_filters_compose_as_and() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;

    let starred = store
        .create_journal(
            NewJournal::new(user_id, "Coast trip")
                .with_description("A weekend on the coast")
                .with_tags(vec!["travel".to_string()]),
        )
        .await
        .unwrap();
    store
        .update_journal(*starred.journal_id(), &JournalPatch::default().with_starred(true))
        .await
        .unwrap();
    store
        .create_journal(
            NewJournal::new(user_id, "Groceries")
                .with_description("A list of groceries"),
        )
        .await
        .unwrap();

    let found = store
        .list_journals(
            user_id,
            &JournalFilter::default()
                .with_starred(true)
                .with_contains("coast")
                .with_tag("travel"),
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Coast trip");

    let none = store
        .list_journals(
            user_id,
            &JournalFilter::default().with_starred(true).with_tag("food"),
        )
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn journal_sort_and_pagination_honor_the_filter() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;

    for title in ["one", "two", "three"] {
        store
            .create_journal(NewJournal::new(user_id, title))
            .await
            .unwrap();
    }

    let ascending = store
        .list_journals(
            user_id,
            &JournalFilter::default()
                .with_sort_by(SortField::TimeCreated)
                .with_order(SortOrder::Asc),
        )
        .await
        .unwrap();
    assert_eq!(ascending.len(), 3);
    assert_eq!(ascending[0].title(), "one");
    assert_eq!(ascending[2].title(), "three");

    let page = store
        .list_journals(
            user_id,
            &JournalFilter::default()
                .with_sort_by(SortField::TimeCreated)
                .with_order(SortOrder::Asc)
                .with_offset(1usize)
                .with_limit(1usize),
        )
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title(), "two");
}

#[tokio::test]
async fn photo_caption_patch_round_trips() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let device_id = seeded_device(&store, user_id, "key-1").await;

    let photo = store
        .create_photo(NewPhoto::new(
            user_id,
            device_id,
            "https://static.example.com/p.jpg",
        ))
        .await
        .unwrap();
    assert!(photo.captioned().is_none());

    let updated = store
        .update_photo(
            *photo.photo_id(),
            &PhotoPatch::default().with_description("A red kite in a grey sky."),
        )
        .await
        .unwrap();
    let captioned = updated.captioned().unwrap();
    assert_eq!(captioned.caption(), "A red kite in a grey sky.");
    assert_eq!(captioned.url(), "https://static.example.com/p.jpg");
}

#[tokio::test]
async fn get_photos_skips_unknown_ids_and_sorts_by_creation() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let device_id = seeded_device(&store, user_id, "key-1").await;

    let first = store
        .create_photo(NewPhoto::new(user_id, device_id, "https://x/1.jpg"))
        .await
        .unwrap();
    let second = store
        .create_photo(NewPhoto::new(user_id, device_id, "https://x/2.jpg"))
        .await
        .unwrap();

    let photos = store
        .get_photos(&[*second.photo_id(), Uuid::new_v4(), *first.photo_id()])
        .await
        .unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].photo_id(), first.photo_id());
    assert_eq!(photos[1].photo_id(), second.photo_id());
}

#[tokio::test]
async fn photo_filter_by_device() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let phone = seeded_device(&store, user_id, "key-1").await;
    let camera = seeded_device(&store, user_id, "key-2").await;

    store
        .create_photo(NewPhoto::new(user_id, phone, "https://x/1.jpg"))
        .await
        .unwrap();
    store
        .create_photo(NewPhoto::new(user_id, camera, "https://x/2.jpg"))
        .await
        .unwrap();

    let from_camera = store
        .list_photos(user_id, &PhotoFilter::default().with_device_id(camera))
        .await
        .unwrap();
    assert_eq!(from_camera.len(), 1);
    assert_eq!(from_camera[0].url(), "https://x/2.jpg");
}

#[tokio::test]
async fn bulk_journal_delete_is_all_or_nothing() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let journal = store
        .create_journal(NewJournal::new(user_id, "keep me"))
        .await
        .unwrap();

    let err = store
        .delete_journals(&[*journal.journal_id(), Uuid::new_v4()])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert_eq!(store.journal_count().await, 1);

    let deleted = store.delete_journals(&[*journal.journal_id()]).await.unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(store.journal_count().await, 0);
}

#[tokio::test]
async fn deleting_a_journal_detaches_photos_and_drops_entries() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let device_id = seeded_device(&store, user_id, "key-1").await;
    let journal = store
        .create_journal(NewJournal::new(user_id, "Trip"))
        .await
        .unwrap();

    let photo = store
        .create_photo(NewPhoto::new(user_id, device_id, "https://x/1.jpg"))
        .await
        .unwrap();
    store
        .update_photo(
            *photo.photo_id(),
            &PhotoPatch::default().with_journal_id(*journal.journal_id()),
        )
        .await
        .unwrap();
    let entry = store
        .create_entry(NewEntry::new(
            user_id,
            *journal.journal_id(),
            device_id,
            "we arrived",
        ))
        .await
        .unwrap();

    store.delete_journal(*journal.journal_id()).await.unwrap();

    let orphaned = store.get_photo(*photo.photo_id()).await.unwrap();
    assert!(orphaned.journal_id().is_none());
    assert!(store.get_entry(*entry.entry_id()).await.is_err());
}

#[tokio::test]
async fn deleting_a_user_cascades_to_owned_records() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let device_id = seeded_device(&store, user_id, "key-1").await;
    let journal = store
        .create_journal(NewJournal::new(user_id, "Trip"))
        .await
        .unwrap();
    store
        .create_entry(NewEntry::new(user_id, *journal.journal_id(), device_id, "hi"))
        .await
        .unwrap();

    store.delete_user(user_id).await.unwrap();

    assert!(store.get_user(user_id).await.is_err());
    assert!(store.get_device(device_id).await.is_err());
    assert!(store.get_journal(*journal.journal_id()).await.is_err());
}

#[tokio::test]
async fn activity_counts_cover_all_content_kinds() {
    let store = InMemoryStore::new();
    let user_id = seeded_user(&store, "ada@example.com").await;
    let device_id = seeded_device(&store, user_id, "key-1").await;
    let journal = store
        .create_journal(NewJournal::new(user_id, "Trip"))
        .await
        .unwrap();
    store
        .create_photo(NewPhoto::new(user_id, device_id, "https://x/1.jpg"))
        .await
        .unwrap();
    store
        .create_entry(NewEntry::new(user_id, *journal.journal_id(), device_id, "hi"))
        .await
        .unwrap();

    let counts = store.activity_counts(user_id).await.unwrap();
    let total: u64 = counts.iter().map(|c| *c.count()).sum();
    assert_eq!(total, 3);
}
