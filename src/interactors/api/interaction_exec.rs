use std::sync::Arc;

use flexstr::ToSharedStr;
use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::api::resource_cache::ResourceCache;
use crate::data_types::{AccessionInteractionsMap, Entity, InteractionResource,
                        InteractionResult, InteractorResult, Pagination, Synonym,
                        SynonymMap};
use crate::db::InteractionStore;
use crate::error::InteractorsResult;
use crate::types::AccessionSet;

// Runs the summary and details queries against a store and turns the
// results into InteractionResults.  Failures are reported in the message
// field of the result rather than as an error.
pub struct InteractionExec {
    store: Arc<dyn InteractionStore>,
}

// Build the details result from the interactions of each accession.  A
// partner that appears more than once gets one synonym; the last one
// written wins.
pub fn make_details_result(resource_name: &str, resource: &InteractionResource,
                           interactions_map: AccessionInteractionsMap)
    -> InteractionResult
{
    let mut entities = vec![];
    let mut synonym = SynonymMap::new();

    for (acc, interactions) in interactions_map.into_iter().sorted_by(|a, b| (*a.0).cmp(&*b.0)) {
        let mut interactors = Vec::with_capacity(interactions.len());

        for interaction in &interactions {
            let partner = &interaction.interactor_b;

            interactors.push(InteractorResult {
                acc: partner.acc.clone(),
                score: interaction.intact_score,
                interaction_id: interaction.first_interaction_ac(),
            });

            synonym.insert(partner.acc.clone(),
                           Synonym {
                               acc: partner.acc.clone(),
                               text: partner.display_text(),
                               image_url: None,
                           });
        }

        entities.push(Entity {
            acc,
            count: interactions.len(),
            interactors: Some(interactors),
        });
    }

    InteractionResult {
        resource: Some(resource_name.to_shared_str()),
        // TODO: interactors can be proteins or chemicals, so this needs a
        // URL per interactor type
        interactor_url: Some(String::new()),
        interaction_url: Some(resource.url.clone()),
        entities,
        synonym,
        message: None,
    }
}

fn result_or_message(res: InteractorsResult<InteractionResult>, context: &str)
    -> InteractionResult
{
    match res {
        Ok(result) => result,
        Err(err) => {
            if err.is_data_access() {
                warn!("{} failed: {}", context, err);
            } else {
                info!("{} failed: {}", context, err);
            }
            InteractionResult::from_message(err.to_string())
        }
    }
}

impl InteractionExec {
    pub fn new(store: Arc<dyn InteractionStore>) -> InteractionExec {
        InteractionExec {
            store,
        }
    }

    async fn try_summary(&self, accs: &AccessionSet, resource: &str)
        -> InteractorsResult<InteractionResult>
    {
        let count_map =
            self.store.count_interactions_by_accessions(accs, resource).await?;

        let entities =
            count_map.into_iter()
            .sorted_by(|a, b| (*a.0).cmp(&*b.0))
            .map(|(acc, count)| Entity {
                acc,
                count,
                interactors: None,
            })
            .collect();

        Ok(InteractionResult {
            resource: Some(resource.to_shared_str()),
            entities,
            .. InteractionResult::default()
        })
    }

    // the number of interactions of each accession in the resource
    pub async fn summary(&self, accs: &AccessionSet, resource: &str) -> InteractionResult {
        debug!("summary of {} accession(s) from {}", accs.len(), resource);

        result_or_message(self.try_summary(accs, resource).await, "summary")
    }

    async fn try_details(&self, accs: &AccessionSet, resource: &str,
                         pagination: Pagination)
        -> InteractorsResult<InteractionResult>
    {
        let resource_cache = ResourceCache::load(self.store.as_ref()).await?;

        let interactions_map =
            self.store.get_interactions(accs, resource, pagination).await?;

        let interaction_resource = resource_cache.resolve_interaction_resource(resource)?;

        Ok(make_details_result(resource, interaction_resource, interactions_map))
    }

    // the interactions of each accession in the resource, paginated if
    // requested
    pub async fn details(&self, accs: &AccessionSet, resource: &str,
                         pagination: Pagination)
        -> InteractionResult
    {
        debug!("details of {} accession(s) from {}, page: {} page size: {}",
               accs.len(), resource, pagination.page, pagination.page_size);

        result_or_message(self.try_details(accs, resource, pagination).await, "details")
    }
}
