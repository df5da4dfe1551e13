use payloads::{Coordinates, Location};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, mock, spawn_app};

#[tokio::test]
async fn city_id_is_sent_as_query() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let dashboard = app.client.dashboard_main(&Location::city("astana")).await?;
    let astana = mock::resolve_city("astana").unwrap();
    assert_eq!(dashboard.location, astana);

    let requests = app.requests_to("/dashboard/main");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].param("city_id").as_deref(), Some("astana"));
    assert_eq!(requests[0].param("lat"), None);

    Ok(())
}

#[tokio::test]
async fn coordinates_are_sent_as_lat_lon() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = Location::coordinates(-33.87, 151.21);

    let dashboard = app.client.dashboard_agriculture(&location).await?;
    assert_eq!(dashboard.location, Coordinates::new(-33.87, 151.21));

    let request = &app.requests_to("/dashboard/agriculture")[0];
    assert_eq!(request.param("lat").as_deref(), Some("-33.87"));
    assert_eq!(request.param("lon").as_deref(), Some("151.21"));
    assert_eq!(request.param("city_id"), None);

    Ok(())
}

#[tokio::test]
async fn unknown_city_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.dashboard_main(&Location::city("atlantis")).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn insurance_region_is_optional() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let almaty = Location::city("almaty");

    let default = app.client.dashboard_insurance(&almaty, None).await?;
    assert_eq!(default.region, "Kazakhstan");
    let pavlodar = app
        .client
        .dashboard_insurance(&almaty, Some("Pavlodar"))
        .await?;
    assert_eq!(pavlodar.region, "Pavlodar");

    let requests = app.requests_to("/dashboard/insurance");
    assert_eq!(requests[0].param("region"), None);
    assert_eq!(requests[1].param("region").as_deref(), Some("Pavlodar"));

    Ok(())
}

#[tokio::test]
async fn wildfires_within_radius() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let almaty = Location::city("almaty");

    let dashboard = app.client.dashboard_wildfires(&almaty, 200.0).await?;
    assert_eq!(dashboard.search_radius_km, 200.0);
    assert!(dashboard.nearest_fires.len() <= 10);
    assert!(
        dashboard
            .nearest_fires
            .windows(2)
            .all(|pair| pair[0].distance_km <= pair[1].distance_km)
    );
    assert!(
        dashboard
            .nearest_fires
            .iter()
            .all(|fire| fire.distance_km <= 200.0)
    );

    let request = &app.requests_to("/dashboard/wildfires")[0];
    assert_eq!(request.param("radius_km").as_deref(), Some("200"));

    Ok(())
}

#[tokio::test]
async fn dashboards_are_stable_across_calls() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let pavlodar = Location::city("pavlodar");

    assert_eq!(
        app.client.dashboard_main(&pavlodar).await?,
        app.client.dashboard_main(&pavlodar).await?
    );
    assert_eq!(
        app.client.dashboard_agriculture(&pavlodar).await?,
        app.client.dashboard_agriculture(&pavlodar).await?
    );

    Ok(())
}
