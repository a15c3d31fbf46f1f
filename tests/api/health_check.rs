use food_orders::routes::HealthCheckResponse;

use crate::helpers::TestApp;

#[actix_web::test]
async fn root_route_reports_api_is_running(){
    let app = TestApp::spawn_app().await;

    let response = reqwest::get(app.get_app_url())
                    .await
                    .expect("Failed to get response");

    assert_eq!(response.status().as_u16(), 200);

    let body: HealthCheckResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Pizza Ordering API is running!");
}
