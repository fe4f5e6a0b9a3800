use std::collections::HashMap;

use crate::data_types::{InteractionResource, InteractorResource};
use crate::db::InteractionStore;
use crate::error::{InteractorsError, InteractorsResult};

// Resources keyed by lower case name.  This is built for each request
// rather than shared, so there is nothing to invalidate.
#[derive(Debug, Default, Clone)]
pub struct ResourceCache {
    interaction_resources: HashMap<String, InteractionResource>,
    interactor_resources: HashMap<String, InteractorResource>,
}

impl ResourceCache {
    pub fn new(interaction_resources: Vec<InteractionResource>,
               interactor_resources: Vec<InteractorResource>)
        -> ResourceCache
    {
        let interaction_resources =
            interaction_resources.into_iter()
            .map(|resource| (str::to_lowercase(&resource.name), resource))
            .collect();

        let interactor_resources =
            interactor_resources.into_iter()
            .map(|resource| (str::to_lowercase(&resource.name), resource))
            .collect();

        ResourceCache {
            interaction_resources,
            interactor_resources,
        }
    }

    pub async fn load(store: &dyn InteractionStore) -> InteractorsResult<ResourceCache> {
        let interaction_resources = store.get_interaction_resources().await?;
        let interactor_resources = store.get_interactor_resources().await?;

        Ok(ResourceCache::new(interaction_resources, interactor_resources))
    }

    pub fn interaction_resource(&self, name: &str) -> Option<&InteractionResource> {
        self.interaction_resources.get(&name.to_lowercase())
    }

    // not used in responses yet: the interactor URL depends on the type
    // of each interactor
    pub fn interactor_resource(&self, name: &str) -> Option<&InteractorResource> {
        self.interactor_resources.get(&name.to_lowercase())
    }

    pub fn resolve_interaction_resource(&self, name: &str)
        -> InteractorsResult<&InteractionResource>
    {
        self.interaction_resource(name)
            .ok_or_else(|| InteractorsError::ResourceNotResolved(name.to_owned()))
    }

    pub fn interaction_resource_count(&self) -> usize {
        self.interaction_resources.len()
    }

    pub fn interactor_resource_count(&self) -> usize {
        self.interactor_resources.len()
    }
}
