use payloads::{APIClient, Location, responses};
use std::sync::Arc;

use super::Resource;

/// Search radius used when the view does not pick one.
pub const DEFAULT_RADIUS_KM: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WildfiresKey {
    pub location: Location,
    pub radius_km: f64,
}

impl WildfiresKey {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }
}

pub type WildfiresHook = Resource<WildfiresKey, responses::DashboardWildfires>;

/// Hook for the wildfire dashboard: fires within the search radius, fire
/// danger, wind and smoke.
pub fn use_wildfires_data(
    client: Arc<APIClient>,
    key: WildfiresKey,
) -> WildfiresHook {
    let mut hook = Resource::new("wildfires data", move |key: WildfiresKey| {
        let client = client.clone();
        async move {
            client.dashboard_wildfires(&key.location, key.radius_km).await
        }
    });
    hook.activate(key);
    hook
}
