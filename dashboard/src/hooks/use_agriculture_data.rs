use payloads::{APIClient, Location, responses};
use std::sync::Arc;

use super::Resource;

pub type AgricultureHook = Resource<Location, responses::DashboardAgriculture>;

/// Hook for the agriculture dashboard (frost risk, air quality impact and
/// field conditions) of a location.
pub fn use_agriculture_data(
    client: Arc<APIClient>,
    location: Location,
) -> AgricultureHook {
    let mut hook =
        Resource::new("agriculture data", move |location: Location| {
            let client = client.clone();
            async move { client.dashboard_agriculture(&location).await }
        });
    hook.activate(location);
    hook
}
