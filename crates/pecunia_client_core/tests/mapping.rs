//! Profile row mapping and gateway payload building.

use pecunia_client_core::models::{
    admin_profile_row, registration_profile_row, sort_notifications_newest_first, user_from_row,
    AdminNewUser, NewUser, Notification, UserUpdate,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn empty_row_maps_to_defaults() {
    let user = user_from_row(&json!({}));
    assert_eq!(user.id, "");
    assert_eq!(user.email, "");
    assert_eq!(user.full_name, "");
    assert_eq!(user.username, "");
    assert_eq!(user.phone_number, "");
    assert!(!user.is_admin);
    assert!(!user.is_verified);
    assert_eq!(user.balance, 0.0);
    assert!(user.notifications.is_empty());
    assert_eq!(user.profile_picture_url, None);
}

#[test]
fn full_row_maps_every_field() {
    let row = json!({
        "id": "5f0c1f9e-9f5a-4f7e-8f7d-1c2b3a4d5e6f",
        "email": "jane@x.com",
        "full_name": "Jane Doe",
        "username": "jane",
        "phone_number": "+1555000",
        "is_admin": true,
        "is_verified": true,
        "balance": 5000.0,
        "profile_picture_url": "https://cdn.example.com/jane.png",
    });
    let user = user_from_row(&row);
    assert_eq!(user.id, "5f0c1f9e-9f5a-4f7e-8f7d-1c2b3a4d5e6f");
    assert_eq!(user.email, "jane@x.com");
    assert_eq!(user.full_name, "Jane Doe");
    assert_eq!(user.username, "jane");
    assert_eq!(user.phone_number, "+1555000");
    assert!(user.is_admin);
    assert!(user.is_verified);
    assert_eq!(user.balance, 5000.0);
    assert_eq!(
        user.profile_picture_url.as_deref(),
        Some("https://cdn.example.com/jane.png")
    );
}

#[test]
fn mistyped_fields_fall_back_to_defaults() {
    let row = json!({
        "id": "abc",
        "email": 42,
        "is_admin": "yes",
        "is_verified": 1,
        "balance": "a lot",
    });
    let user = user_from_row(&row);
    assert_eq!(user.id, "abc");
    assert_eq!(user.email, "");
    assert!(!user.is_admin);
    assert!(!user.is_verified);
    assert_eq!(user.balance, 0.0);
}

#[test]
fn integer_balance_maps_as_float() {
    let user = user_from_row(&json!({ "balance": 100000 }));
    assert_eq!(user.balance, 100000.0);
}

fn notification(id: &str, date: &str) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        message: "hello".to_string(),
        date: date.to_string(),
        read: false,
    }
}

#[test]
fn notifications_sort_newest_first() {
    let mut list = vec![
        notification("a", "2026-01-01T08:00:00+00:00"),
        notification("b", "2026-03-10T12:30:00+00:00"),
        notification("c", "2026-02-14T09:15:00+00:00"),
    ];
    sort_notifications_newest_first(&mut list);
    let order: Vec<&str> = list.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["b", "c", "a"]);
}

#[test]
fn sparse_update_omits_untouched_fields() {
    let update = UserUpdate {
        id: "5f0c1f9e-9f5a-4f7e-8f7d-1c2b3a4d5e6f".to_string(),
        full_name: Some("Jane Doe".to_string()),
        ..Default::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("full_name"), Some(&json!("Jane Doe")));
    // the id selects the row; it is never part of the body
    assert!(obj.get("id").is_none());
}

#[test]
fn sparse_update_can_clear_a_field() {
    let update = UserUpdate {
        id: "5f0c1f9e-9f5a-4f7e-8f7d-1c2b3a4d5e6f".to_string(),
        phone_number: Some(String::new()),
        ..Default::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body.as_object().unwrap().get("phone_number"), Some(&json!("")));
}

#[test]
fn sparse_update_writes_false_flags() {
    let update = UserUpdate {
        id: "5f0c1f9e-9f5a-4f7e-8f7d-1c2b3a4d5e6f".to_string(),
        is_verified: Some(false),
        ..Default::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body.as_object().unwrap().get("is_verified"), Some(&json!(false)));
}

#[test]
fn registration_row_starts_unverified_with_zero_balance() {
    let new_user = NewUser {
        email: "jane@x.com".to_string(),
        password: "secret1".to_string(),
        full_name: "Jane Doe".to_string(),
        username: "jane".to_string(),
        phone_number: String::new(),
    };
    let row = registration_profile_row("account-1", &new_user);
    assert_eq!(row["id"], json!("account-1"));
    assert_eq!(row["email"], json!("jane@x.com"));
    assert_eq!(row["is_admin"], json!(false));
    assert_eq!(row["is_verified"], json!(false));
    assert_eq!(row["balance"], json!(0.0));
    // the password goes to the account service only, never into the table
    assert!(row.get("password").is_none());
}

#[test]
fn admin_row_carries_flags_and_balance() {
    let new_user = AdminNewUser {
        email: "jane@x.com".to_string(),
        password: "secret1".to_string(),
        full_name: "Jane Doe".to_string(),
        username: String::new(),
        phone_number: String::new(),
        is_admin: false,
        is_verified: true,
        balance: 5000.0,
    };
    let row = admin_profile_row("account-1", &new_user);
    assert_eq!(row["is_admin"], json!(false));
    assert_eq!(row["is_verified"], json!(true));
    assert_eq!(row["balance"], json!(5000.0));
    assert!(row.get("password").is_none());
}
