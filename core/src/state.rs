//! Session-scoped view state: the latest result of each query kind.
//!
//! # Design
//! `QueryState` owns a `DictionaryClient` and four independent slots plus a
//! sticky error flag. Each slot is a `tokio::sync::watch` channel, so readers
//! can either take a snapshot or subscribe and be woken on replacement. The
//! channels work without a runtime; `refresh_*` calls are plain blocking
//! calls that may run on any thread.
//!
//! Refreshes take `&self`. Refreshes of different slots never touch each
//! other. Two overlapping refreshes of the same slot are not ordered: whichever
//! response arrives last is what the slot holds.
//!
//! Once set, `has_error` stays set for the life of the session; a later
//! successful refresh does not clear it.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::{ClientConfig, DEFAULT_QUICK_SEARCH_TERM};
use crate::dictionary::DictionaryClient;
use crate::transport::{Transport, UreqTransport};
use crate::types::{AutoCompleteItemList, DefinitionList};

/// Names a slot in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Random,
    QuickSearch,
    Search,
    Autocomplete,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Random => "random",
            Slot::QuickSearch => "quick_search",
            Slot::Search => "search",
            Slot::Autocomplete => "autocomplete",
        }
    }
}

pub struct QueryState<T = UreqTransport> {
    client: DictionaryClient<T>,
    random: watch::Sender<DefinitionList>,
    quick_search: watch::Sender<DefinitionList>,
    search: watch::Sender<DefinitionList>,
    autocomplete: watch::Sender<AutoCompleteItemList>,
    has_error: watch::Sender<bool>,
}

impl QueryState<UreqTransport> {
    /// Session over a fresh `ureq` agent; the agent is released on drop.
    pub fn connect(config: &ClientConfig) -> Self {
        Self::new(DictionaryClient::connect(config))
    }
}

impl<T: Transport> QueryState<T> {
    pub fn new(client: DictionaryClient<T>) -> Self {
        Self {
            client,
            random: watch::channel(DefinitionList::default()).0,
            quick_search: watch::channel(DefinitionList::default()).0,
            search: watch::channel(DefinitionList::default()).0,
            autocomplete: watch::channel(AutoCompleteItemList::default()).0,
            has_error: watch::channel(false).0,
        }
    }

    pub fn client(&self) -> &DictionaryClient<T> {
        &self.client
    }

    /// Returns true when the slot was replaced, false when the error flag was set.
    pub fn refresh_random(&self) -> bool {
        let fetched = self.client.fetch_random();
        self.publish(Slot::Random, &self.random, fetched)
    }

    pub fn refresh_quick_search(&self, term: &str) -> bool {
        let fetched = self.client.fetch_definitions(term);
        self.publish(Slot::QuickSearch, &self.quick_search, fetched)
    }

    pub fn refresh_search(&self, term: &str) -> bool {
        let fetched = self.client.fetch_definitions(term);
        self.publish(Slot::Search, &self.search, fetched)
    }

    pub fn refresh_autocomplete(&self, term: &str) -> bool {
        let fetched = self.client.fetch_autocomplete(term);
        self.publish(Slot::Autocomplete, &self.autocomplete, fetched)
    }

    /// The loads a home screen performs on first display: a random page and
    /// the default quick-search term. Returns true only if both succeeded.
    pub fn refresh_startup(&self) -> bool {
        let random = self.refresh_random();
        let quick = self.refresh_quick_search(DEFAULT_QUICK_SEARCH_TERM);
        random && quick
    }

    pub fn random(&self) -> DefinitionList {
        self.random.borrow().clone()
    }

    pub fn quick_search(&self) -> DefinitionList {
        self.quick_search.borrow().clone()
    }

    pub fn search(&self) -> DefinitionList {
        self.search.borrow().clone()
    }

    pub fn autocomplete(&self) -> AutoCompleteItemList {
        self.autocomplete.borrow().clone()
    }

    pub fn has_error(&self) -> bool {
        *self.has_error.borrow()
    }

    pub fn subscribe_random(&self) -> watch::Receiver<DefinitionList> {
        self.random.subscribe()
    }

    pub fn subscribe_quick_search(&self) -> watch::Receiver<DefinitionList> {
        self.quick_search.subscribe()
    }

    pub fn subscribe_search(&self) -> watch::Receiver<DefinitionList> {
        self.search.subscribe()
    }

    pub fn subscribe_autocomplete(&self) -> watch::Receiver<AutoCompleteItemList> {
        self.autocomplete.subscribe()
    }

    /// Notified once, when the flag first flips to true.
    pub fn subscribe_errors(&self) -> watch::Receiver<bool> {
        self.has_error.subscribe()
    }

    fn publish<V>(&self, slot: Slot, sender: &watch::Sender<V>, fetched: Option<V>) -> bool {
        match fetched {
            Some(value) => {
                sender.send_replace(value);
                debug!(slot = slot.as_str(), "slot replaced");
                true
            }
            None => {
                let first = self.has_error.send_if_modified(|flag| !std::mem::replace(flag, true));
                if first {
                    warn!(slot = slot.as_str(), "fetch unavailable, error flag set");
                }
                false
            }
        }
    }
}
