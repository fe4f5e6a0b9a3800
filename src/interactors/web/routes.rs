use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, Request, State}, http::{StatusCode, Uri}, routing::{get, post}, Json, Router
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};

use tower::Layer;
use tower::util::{MapRequest, MapRequestLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use tracing::warn;

use crate::api::accessions::{accession_set_from_body, accession_set_from_path};
use crate::api::interaction_exec::InteractionExec;
use crate::data_types::{InteractionResult, Pagination};
use crate::web::config::ServerConfig;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

static REPEATED_SLASHES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("/{2,}").expect("invalid slash regex"));

pub struct AllState {
    pub interaction_exec: InteractionExec,
    pub config: ServerConfig,
}

#[derive(Deserialize, Debug, Default)]
pub struct PageParams {
    pub page: Option<i32>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i32>,
}

impl PageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

// The service passed to axum::serve(): the router wrapped in the layers
// that rewrite the request path before routing
pub type App = MapRequest<NormalizePath<Router>, fn(Request) -> Request>;

async fn get_protein_summary(Path(acc): Path<String>,
                             State(all_state): State<Arc<AllState>>)
    -> Json<InteractionResult>
{
    let accs = accession_set_from_path(&acc);
    let resource = &all_state.config.default_resource;

    Json(all_state.interaction_exec.summary(&accs, resource).await)
}

async fn get_protein_details(Path(acc): Path<String>,
                             Query(page_params): Query<PageParams>,
                             State(all_state): State<Arc<AllState>>)
    -> Json<InteractionResult>
{
    let accs = accession_set_from_path(&acc);
    let resource = &all_state.config.default_resource;

    Json(all_state.interaction_exec.details(&accs, resource, page_params.pagination()).await)
}

async fn post_proteins_summary(State(all_state): State<Arc<AllState>>,
                               proteins: String)
    -> Json<InteractionResult>
{
    let accs = accession_set_from_body(&proteins);
    let resource = &all_state.config.default_resource;

    Json(all_state.interaction_exec.summary(&accs, resource).await)
}

async fn post_proteins_details(Query(page_params): Query<PageParams>,
                               State(all_state): State<Arc<AllState>>,
                               proteins: String)
    -> Json<InteractionResult>
{
    let accs = accession_set_from_body(&proteins);
    let resource = &all_state.config.default_resource;

    Json(all_state.interaction_exec.details(&accs, resource, page_params.pagination()).await)
}

async fn ping() -> String {
    String::from("OK") + " " + PKG_NAME + " " + VERSION
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND,
     Json(json!({
         "status": "error",
         "reason": "Resource was not found."
     })))
}

// "/interactors/static//proteins/summary" -> "/interactors/static/proteins/summary"
pub fn collapse_repeated_slashes(mut req: Request) -> Request {
    if !req.uri().path().contains("//") {
        return req;
    }

    let new_path_and_query = {
        let uri = req.uri();
        let new_path = REPEATED_SLASHES_RE.replace_all(uri.path(), "/");

        match uri.query() {
            Some(query) => format!("{}?{}", new_path, query),
            None => new_path.into_owned(),
        }
    };

    let mut parts = req.uri().clone().into_parts();

    match new_path_and_query.parse() {
        Ok(path_and_query) => {
            parts.path_and_query = Some(path_and_query);
            match Uri::from_parts(parts) {
                Ok(uri) => *req.uri_mut() = uri,
                Err(err) => warn!("can't rewrite {}: {}", req.uri(), err),
            }
        },
        Err(err) => warn!("can't rewrite {}: {}", req.uri(), err),
    }

    req
}

pub fn make_router(all_state: AllState) -> Router {
    let base_path = all_state.config.normalised_base_path();
    let timeout = Duration::from_secs(all_state.config.request_timeout_secs);

    let api_routes = Router::new()
        .route("/protein/{acc}/summary", get(get_protein_summary))
        .route("/protein/{acc}/details", get(get_protein_details))
        .route("/proteins/summary", post(post_proteins_summary))
        .route("/proteins/details", post(post_proteins_details));

    let router =
        if base_path.is_empty() {
            api_routes
        } else {
            Router::new().nest(&base_path, api_routes)
        };

    router
        .route("/ping", get(ping))
        .fallback(not_found)
        .with_state(Arc::new(all_state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
}

pub fn make_app(all_state: AllState) -> App {
    let app = NormalizePathLayer::trim_trailing_slash().layer(make_router(all_state));

    MapRequestLayer::new(collapse_repeated_slashes as fn(Request) -> Request).layer(app)
}
