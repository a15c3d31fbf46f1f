use food_orders::models::DashboardStats;

use crate::helpers::{order_payload, TestApp};

#[actix_web::test]
async fn stats_of_empty_store_are_zero(){
    let app = TestApp::spawn_app().await;

    let response = app.get_dashboard_stats().await;
    assert_eq!(response.status().as_u16(), 200);

    let stats: DashboardStats = response.json().await.unwrap();
    assert_eq!(stats, DashboardStats{
        total_orders: 0,
        total_customers: 0,
        pending_orders: 0,
        total_revenue: 0.0
    });
}

#[actix_web::test]
async fn stats_sum_revenue_and_count_orders(){
    let app = TestApp::spawn_app().await;

    let orders = vec![
        ("111", serde_json::json!([{"name": "P", "price": 100, "quantity": 2}])),
        ("111", serde_json::json!([{"name": "Q", "price": 349, "quantity": 1}])),
        ("222", serde_json::json!([
            {"name": "R", "price": 12.5, "quantity": 2},
            {"name": "S", "price": 5, "quantity": 3}
        ]))
    ];

    let mut ids = Vec::new();
    for (phone, items) in orders {
        let response = app.post_order(&order_payload("A", phone, items)).await;
        assert_eq!(response.status().as_u16(), 201);
        let body: serde_json::Value = response.json().await.unwrap();
        ids.push(body["order"]["id"].as_i64().unwrap() as i32);
    }

    let stats: DashboardStats = app.get_dashboard_stats().await.json().await.unwrap();
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_customers, 2);
    assert_eq!(stats.pending_orders, 3);
    assert_eq!(stats.total_revenue, 200.0 + 349.0 + 40.0);

    let response = app.put_order_status(ids[0], &serde_json::json!({"status": "delivered"})).await;
    assert_eq!(response.status().as_u16(), 200);

    let stats: DashboardStats = app.get_dashboard_stats().await.json().await.unwrap();
    assert_eq!(stats.pending_orders, 2);
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_revenue, 589.0);
}

#[actix_web::test]
async fn demo_data_is_seeded_on_startup_when_enabled(){
    let app = TestApp::spawn_app_with_demo_data().await;

    let stats: DashboardStats = app.get_dashboard_stats().await.json().await.unwrap();
    assert_eq!(stats, DashboardStats{
        total_orders: 1,
        total_customers: 1,
        pending_orders: 0,
        total_revenue: 1147.0
    });

    assert_eq!(app.count_customers_with_phone("9016748921"), 1);
}
