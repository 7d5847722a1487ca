use uuid::Uuid;

use hotel_domain::room::BedType;
use hotel_rooms::domain::types::RoomTypeChanges;
use hotel_rooms::error::RoomsServiceError;

use crate::helpers::{Harness, new_room_type};

#[tokio::test]
async fn should_create_active_room_type() {
    let h = Harness::new();

    let created = h.create_type(new_room_type("  Deluxe  ")).await.unwrap();

    assert_eq!(created.name, "Deluxe");
    assert!(created.is_active);
    assert_eq!(created.amenities, vec!["wifi", "tv"]);
    assert_eq!(h.room_types.get(created.id), Some(created));
}

#[tokio::test]
async fn should_reject_invalid_room_type_without_storing() {
    let h = Harness::new();
    let mut input = new_room_type("Suite");
    input.base_price_cents = -100;

    let err = h.create_type(input).await.unwrap_err();

    assert!(matches!(err, RoomsServiceError::InvalidPrice));
    assert!(h.room_types.types.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_list_only_active_types_by_name() {
    let h = Harness::new();
    let suite = h.seed_type("Suite").await;
    h.seed_type("Double").await;
    let retired = h.seed_type("Attic").await;
    h.delete_type(retired.id).await.unwrap();

    let names: Vec<_> = h
        .list_types()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["Double", "Suite"]);
    assert_eq!(h.get_type(suite.id).await.unwrap().name, "Suite");
}

#[tokio::test]
async fn should_hide_soft_deleted_type() {
    let h = Harness::new();
    let t = h.seed_type("Single").await;

    h.delete_type(t.id).await.unwrap();

    let err = h.get_type(t.id).await.unwrap_err();
    assert!(matches!(err, RoomsServiceError::RoomTypeNotFound));
    assert!(!h.room_types.get(t.id).unwrap().is_active);
}

#[tokio::test]
async fn should_report_unknown_type_on_get_update_and_delete() {
    let h = Harness::new();
    let id = Uuid::now_v7();

    assert!(matches!(
        h.get_type(id).await,
        Err(RoomsServiceError::RoomTypeNotFound)
    ));
    assert!(matches!(
        h.update_type(id, RoomTypeChanges::default()).await,
        Err(RoomsServiceError::RoomTypeNotFound)
    ));
    assert!(matches!(
        h.delete_type(id).await,
        Err(RoomsServiceError::RoomTypeNotFound)
    ));
}

#[tokio::test]
async fn should_apply_partial_update() {
    let h = Harness::new();
    let t = h.seed_type("Twin").await;

    let updated = h
        .update_type(
            t.id,
            RoomTypeChanges {
                base_price_cents: Some(9_900),
                bed_type: Some(BedType::Single),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.base_price_cents, 9_900);
    assert_eq!(updated.bed_type, BedType::Single);
    assert_eq!(updated.name, "Twin");
    assert_eq!(updated.capacity, t.capacity);
    assert!(updated.updated_at >= t.updated_at);
}

#[tokio::test]
async fn should_reject_invalid_update_and_keep_row() {
    let h = Harness::new();
    let t = h.seed_type("Family").await;

    let err = h
        .update_type(
            t.id,
            RoomTypeChanges {
                capacity: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RoomsServiceError::InvalidCapacity));
    assert_eq!(h.room_types.get(t.id).unwrap().capacity, t.capacity);
}

#[tokio::test]
async fn should_reactivate_soft_deleted_type() {
    let h = Harness::new();
    let t = h.seed_type("Penthouse").await;
    h.delete_type(t.id).await.unwrap();

    let restored = h
        .update_type(
            t.id,
            RoomTypeChanges {
                is_active: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(restored.is_active);
    assert_eq!(h.get_type(t.id).await.unwrap().id, t.id);
}
