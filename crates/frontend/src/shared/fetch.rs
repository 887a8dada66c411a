//! Minimal data-fetching hook: a URL signal in, `{data, loading, error}` out.

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::error::CatalogError;
use super::ticket::TicketGate;

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))
}

/// Reactive handle returned by [`use_fetch`].
///
/// `data` keeps the last successful response until a newer request resolves;
/// a failed request clears it. Responses of superseded requests are dropped.
pub struct FetchHandle<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<CatalogError>>,
    url: Signal<Option<String>>,
    gate: StoredValue<TicketGate>,
}

impl<T: Send + Sync + 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchHandle<T> {}

impl<T> FetchHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Re-issue the request with the current URL
    pub fn refetch(&self) {
        self.start(self.url.get_untracked());
    }

    fn start(&self, url: Option<String>) {
        let gate = self.gate.get_value();
        let ticket = gate.issue();

        let Some(url) = url else {
            self.data.set(None);
            self.error.set(None);
            self.loading.set(false);
            return;
        };

        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            log::debug!("fetch #{}: GET {}", ticket, url);
            let result = get_json::<T>(&url).await;

            if !gate.is_current(ticket) {
                log::debug!("fetch #{}: superseded, response dropped", ticket);
                return;
            }

            match result {
                Ok(value) => this.data.set(Some(value)),
                Err(e) => {
                    log::warn!("fetch #{} failed: {}", ticket, e);
                    this.data.set(None);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }
}

/// Fetch `url` whenever it changes; `None` skips the request and clears `data`.
pub fn use_fetch<T>(url: Signal<Option<String>>) -> FetchHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let handle = FetchHandle {
        data: RwSignal::new(None),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        url,
        gate: StoredValue::new(TicketGate::new()),
    };

    Effect::new(move |_| {
        let current = url.get();
        handle.start(current);
    });

    let gate = handle.gate.get_value();
    on_cleanup(move || gate.revoke());

    handle
}
