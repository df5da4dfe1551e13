use payloads::{APIClient, Location, responses};
use std::sync::Arc;

use super::Resource;

pub type MainDashboardHook = Resource<Location, responses::DashboardMain>;

/// Hook for the main dashboard summary of a location.
pub fn use_main_dashboard(
    client: Arc<APIClient>,
    location: Location,
) -> MainDashboardHook {
    let mut hook = Resource::new("main dashboard", move |location: Location| {
        let client = client.clone();
        async move { client.dashboard_main(&location).await }
    });
    hook.activate(location);
    hook
}
