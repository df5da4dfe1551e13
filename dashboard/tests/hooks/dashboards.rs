use dashboard::cities;
use dashboard::hooks::{
    DEFAULT_RADIUS_KM, InsuranceKey, WildfiresKey, use_agriculture_data,
    use_insurance_data, use_main_dashboard, use_wildfires_data,
};
use payloads::{Coordinates, Location};
use test_helpers::spawn_app;

#[tokio::test]
async fn agriculture_by_coordinates() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let hook = use_agriculture_data(
        app.client.clone(),
        Location::coordinates(52.2873, 76.9665),
    );
    let state = hook.settled().await;
    let data = state.data().expect("agriculture loaded");
    assert_eq!(data.location, Coordinates::new(52.2873, 76.9665));
    assert!(data.frost_risk.percentage <= 100);

    Ok(())
}

#[tokio::test]
async fn insurance_region_is_part_of_the_key() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let almaty = Location::city("almaty");

    let mut hook = use_insurance_data(
        app.client.clone(),
        InsuranceKey::new(almaty.clone(), None),
    );
    hook.settled().await;

    hook.activate(InsuranceKey::new(almaty, Some("Almaty oblast".into())));
    let state = hook.settled().await;
    assert_eq!(state.data().map(|d| d.region.as_str()), Some("Almaty oblast"));

    let requests = app.requests_to("/dashboard/insurance");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].param("region").as_deref(), Some("Almaty oblast"));

    Ok(())
}

#[tokio::test]
async fn wildfires_default_radius() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut hook = use_wildfires_data(
        app.client.clone(),
        WildfiresKey::new(Location::city("almaty")),
    );
    let state = hook.settled().await;
    assert_eq!(
        state.data().map(|d| d.search_radius_km),
        Some(DEFAULT_RADIUS_KM)
    );

    hook.activate(WildfiresKey::new(Location::city("almaty")).with_radius(1000.0));
    let wider = hook.settled().await;
    let (narrow, wide) = (state.data().unwrap(), wider.data().unwrap());
    assert!(wide.active_fires_count >= narrow.active_fires_count);

    let radii: Vec<_> = app
        .requests_to("/dashboard/wildfires")
        .iter()
        .filter_map(|request| request.param("radius_km"))
        .collect();
    assert_eq!(radii, ["200", "1000"]);

    Ok(())
}

#[tokio::test]
async fn every_catalog_city_loads() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut hook =
        use_main_dashboard(app.client.clone(), cities::DEFAULT_CITY.location());

    for city in cities::CITIES {
        hook.activate(city.location());
        let state = hook.settled().await;
        assert_eq!(
            state.data().map(|data| data.location),
            Some(city.coordinates()),
            "{}: {:?}",
            city.id,
            state.error()
        );
    }
    assert_eq!(app.requests_to("/dashboard/main").len(), cities::CITIES.len());

    Ok(())
}
