mod dashboards;
mod errors;
mod insurance;
mod space_objects;
mod weather;
mod wildfire;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let health = app.client.health_check().await?;
    assert_eq!(health.status, "healthy");

    Ok(())
}

#[tokio::test]
async fn json_content_type_is_sent_by_default() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;
    app.create_test_space_object().await?;

    for request in app.requests() {
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
    }
    Ok(())
}
