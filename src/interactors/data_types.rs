use std::collections::HashMap;

use serde::{Serialize, Deserialize};

use crate::constants::NO_PAGINATION;
use crate::types::*;

// Store side types

// a source of interaction data, eg. IntAct
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InteractionResource {
    pub name: ResourceName,
    pub url: String,
}

// a source of interactor data, eg. UniProt
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InteractorResource {
    pub name: ResourceName,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Interactor {
    pub acc: Accession,
    pub alias: Option<Alias>,
}

impl Interactor {
    // the text to show for this interactor, falling back to the accession
    pub fn display_text(&self) -> Alias {
        self.alias.clone().unwrap_or_else(|| self.acc.clone())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InteractionDetails {
    pub interaction_ac: InteractionAccession,
}

// interactor_a is always the accession that was queried, interactor_b is
// the partner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Interaction {
    pub interactor_a: Interactor,
    pub interactor_b: Interactor,
    pub intact_score: Score,
    pub interaction_details_list: Vec<InteractionDetails>,
}

impl Interaction {
    // there can be several detail records for one interaction; only the
    // first is reported
    pub fn first_interaction_ac(&self) -> Option<InteractionAccession> {
        self.interaction_details_list.first()
            .map(|details| details.interaction_ac.clone())
    }
}

pub type AccessionCountMap = HashMap<Accession, usize>;
pub type AccessionInteractionsMap = HashMap<Accession, Vec<Interaction>>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: i32,
    pub page_size: i32,
}

impl Pagination {
    // a missing page or page size becomes NO_PAGINATION
    pub fn new(page: Option<i32>, page_size: Option<i32>) -> Pagination {
        Pagination {
            page: page.unwrap_or(NO_PAGINATION),
            page_size: page_size.unwrap_or(NO_PAGINATION),
        }
    }

    pub fn all() -> Pagination {
        Pagination::new(None, None)
    }

    pub fn is_paginated(&self) -> bool {
        self.page > 0 && self.page_size > 0
    }

    // pages are numbered from 1
    pub fn offset(&self) -> i64 {
        if self.is_paginated() {
            (self.page as i64 - 1) * self.page_size as i64
        } else {
            0
        }
    }

    pub fn limit(&self) -> Option<i64> {
        if self.is_paginated() {
            Some(self.page_size as i64)
        } else {
            None
        }
    }
}


// API response types

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractorResult {
    pub acc: Accession,
    pub score: Score,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub interaction_id: Option<InteractionAccession>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Synonym {
    pub acc: Accession,
    pub text: Alias,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub image_url: Option<String>,
}

pub type SynonymMap = HashMap<Accession, Synonym>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Entity {
    pub acc: Accession,
    pub count: usize,
    // only set for detail requests
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub interactors: Option<Vec<InteractorResult>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResult {
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub resource: Option<ResourceName>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub interactor_url: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub interaction_url: Option<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(skip_serializing_if="HashMap::is_empty", default)]
    pub synonym: SynonymMap,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub message: Option<String>,
}

impl InteractionResult {
    pub fn from_message(message: String) -> InteractionResult {
        InteractionResult {
            message: Some(message),
            .. InteractionResult::default()
        }
    }

    pub fn entity(&self, acc: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| &*entity.acc == acc)
    }
}
