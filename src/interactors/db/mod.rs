use async_trait::async_trait;

use crate::data_types::{AccessionCountMap, AccessionInteractionsMap, InteractionResource,
                        InteractorResource, Pagination};
use crate::error::InteractorsResult;
use crate::types::AccessionSet;

pub mod sqlite_store;
pub mod pg_store;

pub use sqlite_store::SqliteInteractionStore;
pub use pg_store::PgInteractionStore;

// Works unchanged on SQLite and PostgreSQL
pub const CREATE_TABLES_SQL: &str = "
CREATE TABLE IF NOT EXISTS interaction_resource (
  id    INTEGER PRIMARY KEY,
  name  TEXT NOT NULL UNIQUE,
  url   TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS interactor_resource (
  id    INTEGER PRIMARY KEY,
  name  TEXT NOT NULL UNIQUE,
  url   TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS interactor (
  id                      INTEGER PRIMARY KEY,
  acc                     TEXT NOT NULL UNIQUE,
  alias                   TEXT,
  interactor_resource_id  INTEGER REFERENCES interactor_resource(id),
  taxid                   INTEGER
);
CREATE TABLE IF NOT EXISTS interaction (
  id                       INTEGER PRIMARY KEY,
  interactor_a             INTEGER NOT NULL REFERENCES interactor(id),
  interactor_b             INTEGER NOT NULL REFERENCES interactor(id),
  intact_score             REAL NOT NULL,
  interaction_resource_id  INTEGER NOT NULL REFERENCES interaction_resource(id)
);
CREATE TABLE IF NOT EXISTS interaction_details (
  id              INTEGER PRIMARY KEY,
  interaction_id  INTEGER NOT NULL REFERENCES interaction(id),
  interaction_ac  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS interaction_interactor_a_idx ON interaction(interactor_a);
CREATE INDEX IF NOT EXISTS interaction_interactor_b_idx ON interaction(interactor_b);
CREATE INDEX IF NOT EXISTS interaction_details_interaction_idx ON interaction_details(interaction_id);
";

// The queries needed to answer the API requests.  Resource names are
// matched case-insensitively and an unknown resource gives
// InteractorsError::InvalidResource.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    // Accessions with no interactions in the resource are left out of
    // the result.
    async fn count_interactions_by_accessions(&self, accs: &AccessionSet, resource: &str)
        -> InteractorsResult<AccessionCountMap>;

    // The interactions of each accession, ordered by score (highest
    // first).  In each Interaction the queried accession is interactor_a.
    async fn get_interactions(&self, accs: &AccessionSet, resource: &str,
                              pagination: Pagination)
        -> InteractorsResult<AccessionInteractionsMap>;

    async fn get_interaction_resources(&self) -> InteractorsResult<Vec<InteractionResource>>;

    async fn get_interactor_resources(&self) -> InteractorsResult<Vec<InteractorResource>>;
}
