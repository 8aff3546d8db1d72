//! Shared fixtures for controller tests.

use async_trait::async_trait;
use fb_core::model::ChoiceOption;
use fb_core::{ComponentId, ComponentKind, EventBus, FormStore, catalog};
use fb_remote::{EndpointProbe, FetchError, OptionSource, OptionsRequest};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

pub fn store_with(kinds: &[ComponentKind]) -> (Rc<FormStore>, Vec<ComponentId>) {
    let store = FormStore::new(EventBus::new());
    let mut ids = Vec::new();
    for &kind in kinds {
        let c = catalog::create_component(kind);
        ids.push(c.id);
        store.add_component(c, None);
    }
    (store, ids)
}

/// Canned option source: answers every request the same way and counts
/// the calls.
pub struct StaticSource {
    options: Option<Vec<ChoiceOption>>,
    probe: Option<EndpointProbe>,
    pub fetch_calls: Cell<usize>,
}

impl StaticSource {
    pub fn empty() -> Self {
        Self {
            options: Some(Vec::new()),
            probe: None,
            fetch_calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            options: None,
            probe: None,
            fetch_calls: Cell::new(0),
        }
    }

    pub fn with_options(pairs: &[(&str, i64)]) -> Self {
        Self {
            options: Some(
                pairs
                    .iter()
                    .map(|&(label, value)| ChoiceOption::new(label, value))
                    .collect(),
            ),
            probe: None,
            fetch_calls: Cell::new(0),
        }
    }

    /// Probe derived from a canned response body, the way the HTTP source
    /// would build it.
    pub fn with_body(body: Value, response_path: &str) -> Self {
        let items = fb_remote::locate_array(&body, response_path)
            .cloned()
            .unwrap_or_default();
        let paths = items.first().map(fb_remote::leaf_paths).unwrap_or_default();
        Self {
            options: Some(Vec::new()),
            probe: Some(EndpointProbe {
                status: 200,
                items,
                paths,
            }),
            fetch_calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl OptionSource for StaticSource {
    async fn fetch_options(
        &self,
        _req: &OptionsRequest,
    ) -> Result<Vec<ChoiceOption>, FetchError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.options.clone().ok_or(FetchError::Status(500))
    }

    async fn probe(&self, _req: &OptionsRequest) -> Result<EndpointProbe, FetchError> {
        self.probe.clone().ok_or(FetchError::Status(500))
    }
}
