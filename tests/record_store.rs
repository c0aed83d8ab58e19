//! Table<T> against a live database. Set TEST_DATABASE_URL to run; otherwise each test returns early.

mod common;

use common::{test_pool, unique};
use rental_api::sql::BindValue;
use rental_api::{Table, User, Vehicle};

#[tokio::test]
async fn insert_then_get_round_trips_every_field() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    let mut vehicle = Vehicle::new(unique("Toyota"), "Corolla", 100.0);
    vehicles.insert(&mut vehicle).await.unwrap();
    let id = vehicle.id.expect("id assigned by insert");
    assert!(vehicle.created_at.is_some());
    assert!(vehicle.updated_at.is_some());

    let fetched = vehicles.get(id).await.unwrap().expect("row exists");
    assert_eq!(fetched, vehicle);
}

#[tokio::test]
async fn get_missing_row_is_none() {
    let Some(pool) = test_pool().await else { return };
    let users = Table::<User>::new(pool);
    assert!(users.get(i32::MAX).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_by_id_is_true_once_then_false() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    let mut vehicle = Vehicle::new(unique("Honda"), "Civic", 80.0);
    vehicles.insert(&mut vehicle).await.unwrap();
    let id = vehicle.id.unwrap();

    assert!(vehicles.delete_by_id(id).await.unwrap());
    assert!(!vehicles.delete_by_id(id).await.unwrap());
    assert!(vehicles.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_checks_affected_rows() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    assert!(!vehicles.delete(Vehicle::new("never", "saved", 1.0)).await.unwrap());

    let mut saved = Vehicle::new(unique("Mazda"), "3", 70.0);
    vehicles.insert(&mut saved).await.unwrap();
    let stale = saved.clone();
    assert!(vehicles.delete(saved).await.unwrap());
    assert!(!vehicles.delete(stale).await.unwrap());
}

#[tokio::test]
async fn filter_on_unknown_field_is_empty_not_everything() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    let mut vehicle = Vehicle::new(unique("Kia"), "Rio", 50.0);
    vehicles.insert(&mut vehicle).await.unwrap();

    assert!(vehicles.filter(&[("colour", BindValue::from("red"))]).await.unwrap().is_empty());
    assert!(vehicles.filter(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn filter_matches_on_declared_fields_only() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    let name = unique("Subaru");
    let mut a = Vehicle::new(name.clone(), "Impreza", 90.0);
    let mut b = Vehicle::new(name.clone(), "Outback", 120.0);
    vehicles.insert(&mut a).await.unwrap();
    vehicles.insert(&mut b).await.unwrap();

    let both = vehicles
        .filter(&[("name", BindValue::from(name.as_str())), ("colour", BindValue::from("red"))])
        .await
        .unwrap();
    assert_eq!(both, vec![a.clone(), b.clone()]);

    let one = vehicles
        .filter(&[("name", BindValue::from(name.as_str())), ("model", BindValue::from("Outback"))])
        .await
        .unwrap();
    assert_eq!(one, vec![b]);
}

#[tokio::test]
async fn save_inserts_then_updates_from_returning() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    let mut vehicle = Vehicle::new(unique("Ford"), "Focus", 60.0);
    assert!(vehicles.save(&mut vehicle).await.unwrap());
    let id = vehicle.id.unwrap();
    let created_at = vehicle.created_at;

    vehicle.rent_rate = 65.5;
    assert!(vehicles.save(&mut vehicle).await.unwrap());
    assert_eq!(vehicle.id, Some(id));
    assert_eq!(vehicle.rent_rate, 65.5);
    assert_eq!(vehicle.created_at, created_at);
    assert!(vehicle.updated_at >= created_at);

    assert_eq!(vehicles.get(id).await.unwrap(), Some(vehicle));
}

#[tokio::test]
async fn update_of_missing_row_is_false_and_leaves_record() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    let mut ghost = Vehicle::new("ghost", "none", 1.0);
    ghost.id = Some(i32::MAX);
    let before = ghost.clone();
    assert!(!vehicles.update(&mut ghost).await.unwrap());
    assert_eq!(ghost, before);
}

#[tokio::test]
async fn update_of_unsaved_record_is_an_error() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);
    let mut fresh = Vehicle::new("fresh", "none", 1.0);
    assert!(vehicles.update(&mut fresh).await.is_err());
}

#[tokio::test]
async fn list_all_is_ordered_by_id() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool);

    for model in ["A", "B"] {
        let mut v = Vehicle::new(unique("Lada"), model, 10.0);
        vehicles.insert(&mut v).await.unwrap();
    }
    let ids: Vec<i32> = vehicles.list_all().await.unwrap().iter().filter_map(|v| v.id).collect();
    assert!(ids.len() >= 2);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn deleting_a_vehicle_clears_its_users_reference() {
    let Some(pool) = test_pool().await else { return };
    let vehicles = Table::<Vehicle>::new(pool.clone());
    let users = Table::<User>::new(pool);

    let mut vehicle = Vehicle::new(unique("Nissan"), "Leaf", 75.0);
    vehicles.insert(&mut vehicle).await.unwrap();
    let mut user = User::new(unique("driver"), vehicle.id);
    users.insert(&mut user).await.unwrap();
    assert_eq!(user.vehicle_id, vehicle.id);

    assert!(vehicles.delete(vehicle).await.unwrap());
    let reloaded = users.get(user.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(reloaded.vehicle_id, None);
}
