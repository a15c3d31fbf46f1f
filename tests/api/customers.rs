use fake::{faker::{internet::en::SafeEmail, name::en::Name}, Fake};
use food_orders::{routes::customer::{CustomerEnvelope, CustomerList}, utils::ErrorBody};

use crate::helpers::TestApp;

#[actix_web::test]
async fn post_customer_with_valid_data_creates_customer(){
    let app = TestApp::spawn_app().await;
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let body = serde_json::json!({
        "name": name,
        "phone": "9876543210",
        "email": email,
        "address": "123 Test Street"
    });

    let response = app.post_customer(&body).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: CustomerEnvelope = response.json().await.unwrap();
    assert_eq!(body.message.as_deref(), Some("Customer created successfully"));
    assert_eq!(body.customer.name, name);
    assert_eq!(body.customer.phone, "9876543210");
    assert_eq!(body.customer.email, Some(email));
    assert_eq!(body.customer.address, "123 Test Street");

    assert_eq!(app.count_customers_with_phone("9876543210"), 1);
}

#[actix_web::test]
async fn post_customer_without_email_stores_null_email(){
    let app = TestApp::spawn_app().await;

    let body = serde_json::json!({
        "name": "A",
        "phone": "111",
        "address": "X"
    });

    let response = app.post_customer(&body).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: CustomerEnvelope = response.json().await.unwrap();
    assert_eq!(body.customer.email, None);
}

#[actix_web::test]
async fn post_customer_with_missing_fields_returns_400(){
    let app = TestApp::spawn_app().await;

    let cases = vec![
        (serde_json::json!({"phone": "111", "address": "X"}), "missing name"),
        (serde_json::json!({"name": "A", "address": "X"}), "missing phone"),
        (serde_json::json!({"name": "A", "phone": "111"}), "missing address"),
        (serde_json::json!({"name": "", "phone": "111", "address": "X"}), "empty name"),
        (serde_json::json!({}), "empty body")
    ];

    for (body, description) in cases {
        let response = app.post_customer(&body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 when the payload had {}",
            description
        );

        let error: ErrorBody = response.json().await.unwrap();
        assert_eq!(error.error, "Name, phone, and address are required");
    }

    assert_eq!(app.count_customers_with_phone("111"), 0);
}

#[actix_web::test]
async fn post_customer_with_invalid_email_returns_400(){
    let app = TestApp::spawn_app().await;

    let body = serde_json::json!({
        "name": "A",
        "phone": "111",
        "email": "not-an-email",
        "address": "X"
    });

    let response = app.post_customer(&body).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.count_customers_with_phone("111"), 0);
}

#[actix_web::test]
async fn post_customer_with_malformed_json_returns_400(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.post(format!("{}/api/customers", app.get_app_url()))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);

    let error: ErrorBody = response.json().await.unwrap();
    assert!(!error.error.is_empty());
}

#[actix_web::test]
async fn post_customer_without_json_content_type_returns_415(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.post(format!("{}/api/customers", app.get_app_url()))
        .body("name=A&phone=111&address=X")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 415);
}

#[actix_web::test]
async fn post_customer_twice_with_same_phone_creates_two_rows(){
    let app = TestApp::spawn_app().await;

    let body = serde_json::json!({"name": "A", "phone": "111", "address": "X"});

    assert_eq!(app.post_customer(&body).await.status().as_u16(), 201);
    assert_eq!(app.post_customer(&body).await.status().as_u16(), 201);

    assert_eq!(app.count_customers_with_phone("111"), 2);
}

#[actix_web::test]
async fn get_customers_returns_newest_first_with_count(){
    let app = TestApp::spawn_app().await;

    let response = app.get_customers().await;
    assert_eq!(response.status().as_u16(), 200);
    let body: CustomerList = response.json().await.unwrap();
    assert_eq!(body.count, 0);
    assert!(body.customers.is_empty());

    for phone in ["111", "222", "333"] {
        let body = serde_json::json!({"name": "A", "phone": phone, "address": "X"});
        assert_eq!(app.post_customer(&body).await.status().as_u16(), 201);
    }

    let body: CustomerList = app.get_customers().await.json().await.unwrap();
    assert_eq!(body.count, 3);

    let phones: Vec<&str> = body.customers.iter().map(|c| c.phone.as_str()).collect();
    assert_eq!(phones, vec!["333", "222", "111"]);
}
