use crate::helpers::{order_payload, TestApp};

const FRONTEND_ORIGIN: &str = "http://localhost:5000";

#[actix_web::test]
async fn preflight_request_from_another_origin_is_allowed(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client
        .request(reqwest::Method::OPTIONS, format!("{}/api/orders", app.get_app_url()))
        .header("Origin", FRONTEND_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to send preflight request");

    assert_eq!(response.status().as_u16(), 200);

    let allow_origin = response.headers()
        .get("access-control-allow-origin")
        .expect("Preflight response has no Access-Control-Allow-Origin header");
    assert_eq!(allow_origin, FRONTEND_ORIGIN);
}

#[actix_web::test]
async fn cross_origin_post_carries_allow_origin_header(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client
        .post(format!("{}/api/orders", app.get_app_url()))
        .header("Origin", FRONTEND_ORIGIN)
        .json(&order_payload("A", "111", serde_json::json!([
            {"name": "P", "price": 100, "quantity": 1}
        ])))
        .send()
        .await
        .expect("Failed to send request to create order endpoint");

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(
        response.headers().get("access-control-allow-origin").map(|v| v.as_bytes()),
        Some(FRONTEND_ORIGIN.as_bytes())
    );
}
