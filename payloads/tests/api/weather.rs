use payloads::Coordinates;
use test_helpers::{mock, spawn_app};

#[tokio::test]
async fn current_weather() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let almaty = mock::resolve_city("almaty").unwrap();

    let weather = app.client.current_weather(&almaty).await?;
    assert_eq!(weather.timestamp, mock::observed_at());
    assert!((0.0..=100.0).contains(&weather.humidity));

    let request = &app.requests_to("/weather/current")[0];
    assert_eq!(request.param("lat").as_deref(), Some("43.222"));
    assert_eq!(request.param("lon").as_deref(), Some("76.8512"));

    Ok(())
}

#[tokio::test]
async fn forecast_has_one_entry_per_day() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let coordinates = Coordinates::new(51.1694, 71.4491);

    let forecast = app.client.weather_forecast(&coordinates, 5).await?;
    assert_eq!(forecast.len(), 5);
    assert_eq!(forecast[0].date, mock::FORECAST_START);
    for day in &forecast {
        assert!(day.temp_min <= day.temp_max);
        assert_eq!(day.frost_risk, day.temp_min <= 0.0);
    }

    Ok(())
}

#[tokio::test]
async fn farm_recommendations_and_alerts() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let coordinates = mock::resolve_city("pavlodar").unwrap();

    let recommendation = app.client.farm_recommendations(&coordinates).await?;
    assert!(recommendation.best_work_days.len() <= 3);
    assert_eq!(
        recommendation.frost_warning.active,
        recommendation.frost_warning.temperature.is_some()
    );

    let alerts = app.client.farm_alerts(&coordinates).await?;
    assert_eq!(alerts, mock::farm_alerts(&coordinates));

    Ok(())
}
