mod dashboards;
mod space_objects;

use dashboard::hooks::{FetchState, use_main_dashboard};
use payloads::Location;
use reqwest::StatusCode;
use std::time::Duration;
use test_helpers::{mock, spawn_app};

#[tokio::test]
async fn loading_until_settled() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let hook = use_main_dashboard(app.client.clone(), Location::city("almaty"));
    assert!(hook.state().is_initial_loading());

    let state = hook.settled().await;
    let data = state.data().expect("dashboard loaded");
    assert_eq!(data.location, mock::resolve_city("almaty").unwrap());
    assert_eq!(state.error(), None);

    Ok(())
}

#[tokio::test]
async fn new_key_fetches_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut hook =
        use_main_dashboard(app.client.clone(), Location::city("almaty"));
    let almaty = hook.settled().await;

    hook.activate(Location::city("astana"));
    // the previous payload stays visible while the new one loads
    assert_eq!(
        hook.state(),
        FetchState::Loading {
            previous: almaty.data().cloned()
        }
    );

    let state = hook.settled().await;
    let data = state.data().expect("dashboard loaded");
    assert_eq!(data.location, mock::resolve_city("astana").unwrap());

    let requests = app.requests_to("/dashboard/main");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].param("city_id").as_deref(), Some("astana"));

    Ok(())
}

#[tokio::test]
async fn same_key_does_not_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut hook =
        use_main_dashboard(app.client.clone(), Location::city("almaty"));
    let settled = hook.settled().await;

    hook.activate(Location::city("almaty"));
    assert_eq!(hook.state(), settled);
    assert_eq!(app.requests_to("/dashboard/main").len(), 1);

    Ok(())
}

#[tokio::test]
async fn refetch_while_loading_settles_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.delay("almaty", Duration::from_millis(200));

    let mut hook =
        use_main_dashboard(app.client.clone(), Location::city("almaty"));
    hook.refetch();
    assert!(hook.state().is_initial_loading());

    let state = hook.settled().await;
    assert!(state.data().is_some());

    // nothing from the superseded fetch arrives later
    let mut receiver = hook.subscribe();
    receiver.borrow_and_update();
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!receiver.has_changed()?);
    assert_eq!(hook.state(), state);

    Ok(())
}

#[tokio::test]
async fn stale_response_does_not_overwrite_newer_key() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.delay("almaty", Duration::from_millis(500));

    let mut hook =
        use_main_dashboard(app.client.clone(), Location::city("almaty"));
    // let the slow request reach the backend before switching
    tokio::time::sleep(Duration::from_millis(100)).await;
    hook.activate(Location::city("astana"));

    let state = hook.settled().await;
    let astana = mock::resolve_city("astana").unwrap();
    assert_eq!(state.data().map(|data| data.location), Some(astana));

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(hook.state(), state);
    assert_eq!(app.requests_to("/dashboard/main").len(), 2);

    Ok(())
}

#[tokio::test]
async fn failed_refetch_keeps_previous_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut hook =
        use_main_dashboard(app.client.clone(), Location::city("almaty"));
    let loaded = hook.settled().await;

    app.fail_with("/dashboard/main", StatusCode::INTERNAL_SERVER_ERROR);
    hook.refetch();
    let failed = hook.settled().await;
    assert_eq!(failed.data(), None);
    assert_eq!(failed.error(), Some("HTTP error, status: 500"));
    assert_eq!(failed.latest(), loaded.data());

    // retry after the backend recovers
    app.recover();
    hook.refetch();
    assert_eq!(hook.settled().await, loaded);

    Ok(())
}

#[tokio::test]
async fn first_fetch_failure_has_no_data() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let hook =
        use_main_dashboard(app.client.clone(), Location::city("atlantis"));
    let state = hook.settled().await;

    assert_eq!(
        state,
        FetchState::Error {
            message: "HTTP error, status: 404".into(),
            previous: None,
        }
    );
    assert_eq!(
        state.render("dashboard", |_, _, _| String::new()),
        "Error loading dashboard: HTTP error, status: 404"
    );

    Ok(())
}

#[tokio::test]
async fn subscribers_see_each_transition() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut hook =
        use_main_dashboard(app.client.clone(), Location::city("almaty"));
    hook.settled().await;

    let mut receiver = hook.subscribe();
    receiver.borrow_and_update();
    hook.refetch();

    receiver.changed().await?;
    assert!(receiver.borrow_and_update().is_loading());
    receiver.changed().await?;
    assert!(receiver.borrow_and_update().is_settled());

    Ok(())
}
