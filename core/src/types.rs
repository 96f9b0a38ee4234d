//! Domain DTOs for the Urban Dictionary v0 API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Every `Definition` field is optional on the wire and falls back to an empty
//! string or zero. The list envelopes (`list`, `results`) and both
//! autocomplete fields are required: a body missing them is a decode failure,
//! never a partially populated value.

use serde::{Deserialize, Serialize};

use crate::urbanize::{urbanize, Segment};

/// A single dictionary entry as returned by `random` and `define`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Definition {
    pub definition: String,
    pub permalink: String,
    pub thumbs_up: i64,
    pub author: String,
    pub word: String,
    #[serde(rename = "defid")]
    pub def_id: i64,
    pub current_vote: String,
    /// Timestamp string exactly as the API sent it; never parsed.
    pub written_on: String,
    pub example: String,
    pub thumbs_down: i64,
}

impl Definition {
    /// The definition text split into plain runs and `[term]` references.
    pub fn definition_segments(&self) -> Vec<Segment<'_>> {
        urbanize(&self.definition)
    }

    /// The usage example split into plain runs and `[term]` references.
    pub fn example_segments(&self) -> Vec<Segment<'_>> {
        urbanize(&self.example)
    }
}

/// Envelope for `random` and `define` responses. Order is the API's order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefinitionList {
    #[serde(rename = "list")]
    pub items: Vec<Definition>,
}

impl DefinitionList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One suggestion from `autocomplete-extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoCompleteItem {
    pub preview: String,
    pub term: String,
}

/// Envelope for `autocomplete-extra` responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoCompleteItemList {
    #[serde(rename = "results")]
    pub items: Vec<AutoCompleteItem>,
}

impl AutoCompleteItemList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
