use payloads::{APIClient, responses::SpaceObject};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::Resource;

/// The space object list has no key; it is fetched once and then only on
/// refetch.
pub type SpaceObjectsHook = Resource<(), Vec<SpaceObject>>;

pub fn use_space_objects(client: Arc<APIClient>) -> SpaceObjectsHook {
    let mut hook = Resource::new("space objects", move |()| {
        let client = client.clone();
        async move { client.list_space_objects().await }
    });
    hook.activate(());
    hook
}

/// Number of objects per type.
pub fn type_stats(objects: &[SpaceObject]) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for object in objects {
        *stats.entry(object.object_type.clone()).or_insert(0) += 1;
    }
    stats
}

impl Resource<(), Vec<SpaceObject>> {
    /// Number of known objects per type.
    pub fn type_stats(&self) -> BTreeMap<String, usize> {
        let state = self.borrow_state();
        type_stats(state.latest().map_or(&[][..], Vec::as_slice))
    }

    /// Objects of one type, compared case-insensitively.
    pub fn objects_by_type(&self, object_type: &str) -> Vec<SpaceObject> {
        self.borrow_state()
            .latest()
            .into_iter()
            .flatten()
            .filter(|object| object.object_type.eq_ignore_ascii_case(object_type))
            .cloned()
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.borrow_state().latest().map_or(0, Vec::len)
    }
}
