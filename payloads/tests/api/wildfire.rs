use payloads::FireId;
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn active_fires_by_region() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let all = app.client.active_fires(None).await?;
    let kazakhstan = app.client.active_fires(Some("Kazakhstan")).await?;
    assert!(kazakhstan.len() < all.len());
    assert!(kazakhstan.iter().all(|fire| fire.region == "Kazakhstan"));

    let requests = app.requests_to("/wildfire/active-fires");
    assert_eq!(requests[0].param("region"), None);
    assert_eq!(requests[1].param("region").as_deref(), Some("Kazakhstan"));

    Ok(())
}

#[tokio::test]
async fn spread_forecast() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fires = app.client.active_fires(None).await?;
    let fire_id = &fires[0].fire_id;

    let forecast = app.client.fire_spread_forecast(fire_id).await?;
    assert_eq!(&forecast.fire_id, fire_id);

    let result = app
        .client
        .fire_spread_forecast(&FireId("FIRE-XX-000".into()))
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn affected_air_quality_is_a_subset() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let all = app.client.air_quality(false).await?;
    let affected = app.client.air_quality(true).await?;
    assert!(affected.len() <= all.len());
    assert!(affected.iter().all(|area| all.contains(area)));

    let requests = app.requests_to("/wildfire/air-quality");
    assert_eq!(requests[1].param("affected").as_deref(), Some("true"));

    Ok(())
}

#[tokio::test]
async fn risk_forecast_hours() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let regions = app.client.wildfire_risk_forecast(48).await?;
    assert!(!regions.is_empty());

    let request = &app.requests_to("/wildfire/risk-forecast")[0];
    assert_eq!(request.param("hours").as_deref(), Some("48"));

    Ok(())
}
