use std::sync::Mutex;

use async_trait::async_trait;
use flexstr::ToSharedStr;
use rusqlite::Connection;

use interactors::data_types::{AccessionCountMap, AccessionInteractionsMap, Interaction,
                              InteractionDetails, InteractionResource, Interactor,
                              InteractorResource, Pagination};
use interactors::db::InteractionStore;
use interactors::db::sqlite_store::create_tables;
use interactors::error::{InteractorsError, InteractorsResult};
use interactors::types::AccessionSet;

pub const INTACT_URL: &str = "https://www.ebi.ac.uk/intact/search?query=##ID##";
#[allow(dead_code)]
pub const MINT_URL: &str = "https://mint.bio.uniroma2.it/index.php/results-interactions/?id=##ID##";

// IntAct:
//   P12345 - Q9Y6K9  0.9  EBI-1, EBI-1b
//   O14920 - P12345  0.5  EBI-2   (P12345 stored as interactor B)
//   P12345 - P00533  0.7  EBI-3
//   Q9Y6K9 - O14920  0.6  EBI-4
// MINT:
//   P12345 - Q00000  0.4  MINT-1
#[allow(dead_code)]
pub const TEST_DATA_SQL: &str = "
INSERT INTO interaction_resource (id, name, url) VALUES
  (1, 'IntAct', 'https://www.ebi.ac.uk/intact/search?query=##ID##'),
  (2, 'MINT', 'https://mint.bio.uniroma2.it/index.php/results-interactions/?id=##ID##');
INSERT INTO interactor_resource (id, name, url) VALUES
  (1, 'UniProt', 'https://www.uniprot.org/uniprot/##ID##'),
  (2, 'ChEBI', 'https://www.ebi.ac.uk/chebi/searchId.do?chebiId=##ID##');
INSERT INTO interactor (id, acc, alias, interactor_resource_id, taxid) VALUES
  (1, 'P12345', 'AATM', 1, 9606),
  (2, 'Q9Y6K9', 'NEMO', 1, 9606),
  (3, 'O14920', 'IKKB', 1, 9606),
  (4, 'P00533', 'EGFR', 1, 9606),
  (5, 'Q00000', NULL, 1, 9606);
INSERT INTO interaction (id, interactor_a, interactor_b, intact_score, interaction_resource_id) VALUES
  (1, 1, 2, 0.9, 1),
  (2, 3, 1, 0.5, 1),
  (3, 1, 4, 0.7, 1),
  (4, 2, 3, 0.6, 1),
  (5, 1, 5, 0.4, 2);
INSERT INTO interaction_details (id, interaction_id, interaction_ac) VALUES
  (1, 1, 'EBI-1'),
  (2, 1, 'EBI-1b'),
  (3, 2, 'EBI-2'),
  (4, 3, 'EBI-3'),
  (5, 4, 'EBI-4'),
  (6, 5, 'MINT-1');
";

#[allow(dead_code)]
pub fn make_test_database() -> Connection {
    let conn = Connection::open_in_memory().unwrap();

    create_tables(&conn).unwrap();
    conn.execute_batch(TEST_DATA_SQL).unwrap();

    conn
}

#[allow(dead_code)]
pub fn make_accs(accs: &[&str]) -> AccessionSet {
    accs.iter().map(|acc| acc.to_shared_str()).collect()
}

#[allow(dead_code)]
pub fn make_interaction(acc_a: &str, acc_b: &str, alias_b: Option<&str>, score: f64,
                        interaction_acs: &[&str]) -> Interaction {
    Interaction {
        interactor_a: Interactor {
            acc: acc_a.to_shared_str(),
            alias: None,
        },
        interactor_b: Interactor {
            acc: acc_b.to_shared_str(),
            alias: alias_b.map(|alias| alias.to_shared_str()),
        },
        intact_score: score,
        interaction_details_list:
            interaction_acs.iter()
            .map(|ac| InteractionDetails { interaction_ac: ac.to_shared_str() })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn intact_resource() -> InteractionResource {
    InteractionResource {
        name: "IntAct".to_shared_str(),
        url: INTACT_URL.to_owned(),
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
pub enum Failure {
    InvalidResource,
    DataAccess,
}

impl Failure {
    fn to_error(self, resource: &str) -> InteractorsError {
        match self {
            Failure::InvalidResource =>
                InteractorsError::InvalidResource(resource.to_owned()),
            Failure::DataAccess =>
                InteractorsError::Sqlite(rusqlite::Error::QueryReturnedNoRows),
        }
    }
}

// A store that returns canned results and remembers the arguments it
// was called with
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedStore {
    pub counts: AccessionCountMap,
    pub interactions: AccessionInteractionsMap,
    pub interaction_resources: Vec<InteractionResource>,
    pub interactor_resources: Vec<InteractorResource>,
    pub count_failure: Option<Failure>,
    pub interactions_failure: Option<Failure>,
    pub resources_failure: Option<Failure>,
    pub seen_pagination: Mutex<Option<Pagination>>,
    pub seen_accs: Mutex<Option<AccessionSet>>,
}

#[allow(dead_code)]
impl ScriptedStore {
    pub fn last_pagination(&self) -> Option<Pagination> {
        *self.seen_pagination.lock().unwrap()
    }

    pub fn last_accs(&self) -> Option<AccessionSet> {
        self.seen_accs.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionStore for ScriptedStore {
    async fn count_interactions_by_accessions(&self, accs: &AccessionSet, resource: &str)
        -> InteractorsResult<AccessionCountMap>
    {
        *self.seen_accs.lock().unwrap() = Some(accs.clone());

        if let Some(failure) = self.count_failure {
            return Err(failure.to_error(resource));
        }

        Ok(self.counts.iter()
           .filter(|(acc, _)| accs.contains(*acc))
           .map(|(acc, count)| (acc.clone(), *count))
           .collect())
    }

    async fn get_interactions(&self, accs: &AccessionSet, resource: &str,
                              pagination: Pagination)
        -> InteractorsResult<AccessionInteractionsMap>
    {
        *self.seen_accs.lock().unwrap() = Some(accs.clone());
        *self.seen_pagination.lock().unwrap() = Some(pagination);

        if let Some(failure) = self.interactions_failure {
            return Err(failure.to_error(resource));
        }

        Ok(self.interactions.clone())
    }

    async fn get_interaction_resources(&self) -> InteractorsResult<Vec<InteractionResource>> {
        if let Some(failure) = self.resources_failure {
            return Err(failure.to_error(""));
        }

        Ok(self.interaction_resources.clone())
    }

    async fn get_interactor_resources(&self) -> InteractorsResult<Vec<InteractorResource>> {
        Ok(self.interactor_resources.clone())
    }
}
