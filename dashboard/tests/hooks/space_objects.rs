use dashboard::hooks::use_space_objects;
use test_helpers::spawn_app;

#[tokio::test]
async fn stats_follow_the_list() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut hook = use_space_objects(app.client.clone());
    assert_eq!(hook.total_count(), 0);
    hook.settled().await;

    assert_eq!(hook.total_count(), 4);
    let stats = hook.type_stats();
    assert_eq!(stats.get("planet"), Some(&2));
    assert_eq!(stats.get("star"), Some(&1));
    assert_eq!(stats.get("asteroid"), Some(&1));
    assert_eq!(hook.objects_by_type("PLANET").len(), 2);

    app.create_test_space_object().await?;
    hook.refetch();
    hook.settled().await;
    assert_eq!(hook.total_count(), 5);
    assert_eq!(hook.type_stats().get("star"), Some(&2));

    Ok(())
}

#[tokio::test]
async fn stats_survive_a_failed_refresh() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut hook = use_space_objects(app.client.clone());
    hook.settled().await;

    app.fail_with("/space-objects/", reqwest::StatusCode::BAD_GATEWAY);
    hook.refetch();
    let state = hook.settled().await;

    assert_eq!(state.error(), Some("HTTP error, status: 502"));
    assert_eq!(hook.total_count(), 4);

    Ok(())
}
