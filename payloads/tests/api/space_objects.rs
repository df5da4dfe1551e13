use payloads::{SpaceObjectId, responses};
use reqwest::StatusCode;
use test_helpers::{
    assert_space_object_equal, assert_status_code, space_object_details_a_update,
    spawn_app,
};

#[tokio::test]
async fn get_seeded_object() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mars = app.client.get_space_object(SpaceObjectId(1)).await?;
    assert_eq!(mars.id, SpaceObjectId(1));
    assert_eq!(mars.name, "Mars");
    assert_eq!(mars.object_type, "planet");

    let requests = app.requests_to("/space-objects/1");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    Ok(())
}

#[tokio::test]
async fn missing_object_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_space_object(SpaceObjectId(404)).await;
    let message = result.as_ref().err().map(ToString::to_string);
    assert!(message.is_some_and(|message| message.contains("404")));
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn create_update_delete() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_space_object().await?;

    let objects = app.client.list_space_objects().await?;
    assert!(objects.contains(&created));

    let details = space_object_details_a_update();
    let updated = app
        .client
        .update_space_object(created.id, &details)
        .await?;
    assert_eq!(updated.id, created.id);
    assert_space_object_equal(&details, &updated)?;

    let deleted = app.client.delete_space_object(created.id).await?;
    assert!(deleted.message.contains("Vega"));

    let result = app.client.get_space_object(created.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    let result = app.client.delete_space_object(created.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn objects_by_type() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let planets = app.client.space_objects_by_type("planet").await?;
    let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Mars", "Jupiter"]);

    let comets: Vec<responses::SpaceObject> =
        app.client.space_objects_by_type("comet").await?;
    assert!(comets.is_empty());

    Ok(())
}

#[tokio::test]
async fn repeated_reads_are_equal() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.client.list_space_objects().await?;
    let second = app.client.list_space_objects().await?;
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);

    Ok(())
}
