use payloads::{APIClient, Location, responses};
use std::sync::Arc;

use super::Resource;

/// Inputs that select an insurance dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct InsuranceKey {
    pub location: Location,
    pub region: Option<String>,
}

impl InsuranceKey {
    pub fn new(location: Location, region: Option<String>) -> Self {
        Self { location, region }
    }
}

pub type InsuranceHook = Resource<InsuranceKey, responses::DashboardInsurance>;

/// Hook for the insurance dashboard. A change of either the location or the
/// region triggers a new fetch.
pub fn use_insurance_data(
    client: Arc<APIClient>,
    key: InsuranceKey,
) -> InsuranceHook {
    let mut hook = Resource::new("insurance data", move |key: InsuranceKey| {
        let client = client.clone();
        async move {
            client
                .dashboard_insurance(&key.location, key.region.as_deref())
                .await
        }
    });
    hook.activate(key);
    hook
}
