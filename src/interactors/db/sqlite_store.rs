use std::sync::{Arc, Mutex, PoisonError};

use tokio::task;

use async_trait::async_trait;
use flexstr::ToSharedStr;
use rusqlite::{params, Connection, OptionalExtension};

use crate::data_types::{AccessionCountMap, AccessionInteractionsMap, Interaction,
                        InteractionDetails, InteractionResource, Interactor,
                        InteractorResource, Pagination};
use crate::db::{InteractionStore, CREATE_TABLES_SQL};
use crate::error::{InteractorsError, InteractorsResult};
use crate::types::AccessionSet;

const RESOURCE_ID_SQL: &str =
    "SELECT id FROM interaction_resource WHERE lower(name) = lower(?1)";

const COUNT_SQL: &str = "
SELECT count(*)
  FROM interaction i
  JOIN interactor a ON a.id = i.interactor_a
  JOIN interactor b ON b.id = i.interactor_b
 WHERE i.interaction_resource_id = ?1
   AND (a.acc = ?2 OR b.acc = ?2)";

// a LIMIT of -1 means no limit in SQLite
const INTERACTIONS_SQL: &str = "
SELECT i.id, i.intact_score, a.acc, a.alias, b.acc, b.alias
  FROM interaction i
  JOIN interactor a ON a.id = i.interactor_a
  JOIN interactor b ON b.id = i.interactor_b
 WHERE i.interaction_resource_id = ?1
   AND (a.acc = ?2 OR b.acc = ?2)
 ORDER BY i.intact_score DESC, i.id
 LIMIT ?3 OFFSET ?4";

const DETAILS_SQL: &str =
    "SELECT interaction_ac FROM interaction_details WHERE interaction_id = ?1 ORDER BY id";

const INTERACTION_RESOURCES_SQL: &str =
    "SELECT name, url FROM interaction_resource ORDER BY id";

const INTERACTOR_RESOURCES_SQL: &str =
    "SELECT name, url FROM interactor_resource ORDER BY id";

pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_TABLES_SQL)
}

pub struct SqliteInteractionStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteInteractionStore {
    pub fn new(conn: Connection) -> SqliteInteractionStore {
        SqliteInteractionStore {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn open(database_path: &str) -> InteractorsResult<SqliteInteractionStore> {
        let conn = Connection::open(database_path)?;
        Ok(SqliteInteractionStore::new(conn))
    }

    // rusqlite calls block, so run them on the blocking pool rather than
    // on a runtime worker
    async fn with_conn<T, F>(&self, f: F) -> InteractorsResult<T>
        where F: FnOnce(&Connection) -> InteractorsResult<T> + Send + 'static,
              T: Send + 'static
    {
        let conn = self.conn.clone();

        task::spawn_blocking(move || {
            let conn = conn.lock().unwrap_or_else(PoisonError::into_inner);
            f(&*conn)
        }).await?
    }
}

fn resource_id(conn: &Connection, resource: &str) -> InteractorsResult<i64> {
    let maybe_id: Option<i64> =
        conn.query_row(RESOURCE_ID_SQL, params![resource], |row| row.get(0))
        .optional()?;

    maybe_id.ok_or_else(|| InteractorsError::InvalidResource(resource.to_owned()))
}

fn count_interactions(conn: &Connection, accs: &AccessionSet, resource: &str)
    -> InteractorsResult<AccessionCountMap>
{
    let resource_id = resource_id(conn, resource)?;

    let mut stmt = conn.prepare_cached(COUNT_SQL)?;
    let mut ret = AccessionCountMap::new();

    for acc in accs {
        let count: i64 =
            stmt.query_row(params![resource_id, &**acc], |row| row.get(0))?;

        if count > 0 {
            ret.insert(acc.clone(), count as usize);
        }
    }

    Ok(ret)
}

fn interaction_details(conn: &Connection, interaction_id: i64)
    -> rusqlite::Result<Vec<InteractionDetails>>
{
    let mut stmt = conn.prepare_cached(DETAILS_SQL)?;

    let rows = stmt.query_map(params![interaction_id], |row| {
        let interaction_ac: String = row.get(0)?;
        Ok(InteractionDetails {
            interaction_ac: interaction_ac.to_shared_str(),
        })
    })?;

    rows.collect()
}

fn interactor_from_columns(acc: String, alias: Option<String>) -> Interactor {
    Interactor {
        acc: acc.to_shared_str(),
        alias: alias.map(|alias| alias.to_shared_str()),
    }
}

fn interactions(conn: &Connection, accs: &AccessionSet, resource: &str,
                pagination: Pagination)
    -> InteractorsResult<AccessionInteractionsMap>
{
    let resource_id = resource_id(conn, resource)?;

    let limit = pagination.limit().unwrap_or(-1);
    let offset = pagination.offset();

    let mut ret = AccessionInteractionsMap::new();

    for acc in accs {
        let rows: Vec<(i64, f64, Interactor, Interactor)> = {
            let mut stmt = conn.prepare_cached(INTERACTIONS_SQL)?;
            let mapped =
                stmt.query_map(params![resource_id, &**acc, limit, offset], |row| {
                    Ok((row.get(0)?, row.get(1)?,
                        interactor_from_columns(row.get(2)?, row.get(3)?),
                        interactor_from_columns(row.get(4)?, row.get(5)?)))
                })?;
            mapped.collect::<rusqlite::Result<_>>()?
        };

        let mut acc_interactions = vec![];

        for (interaction_id, intact_score, first, second) in rows {
            // the queried accession may be stored on either side
            let (interactor_a, interactor_b) =
                if first.acc == *acc {
                    (first, second)
                } else {
                    (second, first)
                };

            acc_interactions.push(Interaction {
                interactor_a,
                interactor_b,
                intact_score,
                interaction_details_list: interaction_details(conn, interaction_id)?,
            });
        }

        if !acc_interactions.is_empty() {
            ret.insert(acc.clone(), acc_interactions);
        }
    }

    Ok(ret)
}

fn resource_rows(conn: &Connection, sql: &str)
    -> rusqlite::Result<Vec<(String, String)>>
{
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}

#[async_trait]
impl InteractionStore for SqliteInteractionStore {
    async fn count_interactions_by_accessions(&self, accs: &AccessionSet, resource: &str)
        -> InteractorsResult<AccessionCountMap>
    {
        let accs = accs.clone();
        let resource = resource.to_owned();

        self.with_conn(move |conn| count_interactions(conn, &accs, &resource)).await
    }

    async fn get_interactions(&self, accs: &AccessionSet, resource: &str,
                              pagination: Pagination)
        -> InteractorsResult<AccessionInteractionsMap>
    {
        let accs = accs.clone();
        let resource = resource.to_owned();

        self.with_conn(move |conn| interactions(conn, &accs, &resource, pagination)).await
    }

    async fn get_interaction_resources(&self) -> InteractorsResult<Vec<InteractionResource>> {
        let rows =
            self.with_conn(|conn| Ok(resource_rows(conn, INTERACTION_RESOURCES_SQL)?)).await?;

        Ok(rows.into_iter()
           .map(|(name, url)| InteractionResource { name: name.to_shared_str(), url })
           .collect())
    }

    async fn get_interactor_resources(&self) -> InteractorsResult<Vec<InteractorResource>> {
        let rows =
            self.with_conn(|conn| Ok(resource_rows(conn, INTERACTOR_RESOURCES_SQL)?)).await?;

        Ok(rows.into_iter()
           .map(|(name, url)| InteractorResource { name: name.to_shared_str(), url })
           .collect())
    }
}
