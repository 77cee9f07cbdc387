use std::collections::HashMap;

use reqwest::{Client, StatusCode};
use shared::{
    domain::{Product, SearchFilter},
    error::ErrorEnvelope,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub mod form;
pub mod query;
pub mod results;
pub mod view;

pub use form::{FormFields, IdentifierClearPolicy};
pub use results::ResultsTable;
pub use view::{FlashSlot, ViewModel};

/// Flash text after a completed create, update, retrieve, like, or search.
const FLASH_SUCCESS: &str = "Success";
/// Flash text after a completed delete.
const FLASH_DELETED: &str = "Product has been Deleted!";
/// Flash text when the service failed without a readable envelope.
const FLASH_SERVER_ERROR: &str = "Server error!";

#[derive(Debug, Error)]
pub enum RequestError {
    /// The service answered with an error envelope; the message is surfaced
    /// to the user verbatim.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    /// The service failed without a parseable envelope.
    #[error("service failed with status {status}")]
    Server { status: StatusCode },
    /// The request never completed, or a success body was not valid JSON.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RequestError {
    /// Envelope-carrying rejections keep their message; everything else
    /// collapses to the generic server-error line.
    fn flash_text(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Server { .. } | Self::Transport(_) => FLASH_SERVER_ERROR.to_string(),
        }
    }
}

/// HTTP half of the dispatcher: one method per remote operation, one
/// request per call, no retry and no timeout.
pub struct ProductClient {
    http: Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn create(&self, draft: &Product) -> Result<Product, RequestError> {
        let response = self
            .http
            .post(format!("{}/products", self.base_url))
            .json(draft)
            .send()
            .await?;
        read_product(response).await
    }

    pub async fn update(&self, product: &Product) -> Result<Product, RequestError> {
        let response = self
            .http
            .put(format!("{}/products/{}", self.base_url, product.id))
            .json(product)
            .send()
            .await?;
        read_product(response).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Product, RequestError> {
        let response = self
            .http
            .get(format!("{}/products/{id}", self.base_url))
            .send()
            .await?;
        read_product(response).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), RequestError> {
        let response = self
            .http
            .delete(format!("{}/products/{id}", self.base_url))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }

    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<Product>, RequestError> {
        let mut url = format!("{}/products", self.base_url);
        let query = query::build_query(filter);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        let response = self.http.get(url).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(error_from(response).await)
        }
    }

    pub async fn like(&self, id: &str) -> Result<Product, RequestError> {
        let response = self
            .http
            .put(format!("{}/products/{id}/like", self.base_url))
            .send()
            .await?;
        read_product(response).await
    }

    /// Readiness probe against the service's health route.
    pub async fn health(&self) -> Result<(), RequestError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }
}

async fn read_product(response: reqwest::Response) -> Result<Product, RequestError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(error_from(response).await)
    }
}

/// Maps an error response to `Rejected` when the body carries a readable
/// envelope and to `Server` otherwise.
async fn error_from(response: reqwest::Response) -> RequestError {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => RequestError::Rejected {
                status,
                message: envelope.message,
            },
            Err(_) => RequestError::Server { status },
        },
        Err(_) => RequestError::Server { status },
    }
}

/// Remote operation kinds; generation tokens are scoped per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Retrieve,
    Remove,
    Search,
    Like,
}

/// Drives the catalog intents and routes every outcome back into the
/// [`ViewModel`].
///
/// Each dispatch clears the flash slot, snapshots the form, and takes a
/// generation token for its operation kind. A completion whose token is no
/// longer the latest for that kind is dropped wholesale (form, rows, and
/// flash alike), so overlapping dispatches resolve to the one issued last,
/// not the one that happened to finish last.
pub struct ProductController {
    client: ProductClient,
    view: Mutex<ViewModel>,
    generations: Mutex<HashMap<Operation, u64>>,
}

impl ProductController {
    pub fn new(client: ProductClient) -> Self {
        Self::with_policy(client, IdentifierClearPolicy::default())
    }

    pub fn with_policy(client: ProductClient, policy: IdentifierClearPolicy) -> Self {
        Self {
            client,
            view: Mutex::new(ViewModel::new(policy)),
            generations: Mutex::new(HashMap::new()),
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    /// Snapshot of the current view state for rendering.
    pub async fn view(&self) -> ViewModel {
        self.view.lock().await.clone()
    }

    /// Overwrites a single form field by wire name. Returns false for
    /// unknown names.
    pub async fn edit_field(&self, field: &str, value: &str) -> bool {
        self.view.lock().await.form.set(field, value)
    }

    /// Blanks the form per the configured identifier policy and empties the
    /// flash slot.
    pub async fn clear_form(&self) {
        let mut view = self.view.lock().await;
        view.form.clear();
        view.flash.clear();
    }

    pub async fn create(&self) {
        let (draft, generation) = self.begin(Operation::Create).await;
        info!(generation, "dispatching create");
        let outcome = self.client.create(&draft).await;
        self.complete(Operation::Create, generation, |view| match outcome {
            Ok(product) => {
                view.form.write(&product);
                view.flash.set(FLASH_SUCCESS);
            }
            Err(err) => {
                warn!(%err, "create failed");
                view.flash.set(err.flash_text());
            }
        })
        .await;
    }

    pub async fn update(&self) {
        let (draft, generation) = self.begin(Operation::Update).await;
        info!(generation, id = %draft.id, "dispatching update");
        let outcome = self.client.update(&draft).await;
        self.complete(Operation::Update, generation, |view| match outcome {
            Ok(product) => {
                view.form.write(&product);
                view.flash.set(FLASH_SUCCESS);
            }
            Err(err) => {
                warn!(%err, "update failed");
                view.flash.set(err.flash_text());
            }
        })
        .await;
    }

    pub async fn retrieve(&self) {
        let (draft, generation) = self.begin(Operation::Retrieve).await;
        info!(generation, id = %draft.id, "dispatching retrieve");
        let outcome = self.client.retrieve(&draft.id).await;
        self.complete(Operation::Retrieve, generation, |view| match outcome {
            Ok(product) => {
                view.form.write(&product);
                view.flash.set(FLASH_SUCCESS);
            }
            Err(err) => {
                warn!(%err, "retrieve failed");
                view.form.clear();
                view.flash.set(err.flash_text());
            }
        })
        .await;
    }

    /// Delete ignores the error body entirely; any failure surfaces the
    /// fixed server-error line and leaves the form as it was.
    pub async fn remove(&self) {
        let (draft, generation) = self.begin(Operation::Remove).await;
        info!(generation, id = %draft.id, "dispatching delete");
        let outcome = self.client.remove(&draft.id).await;
        self.complete(Operation::Remove, generation, |view| match outcome {
            Ok(()) => {
                view.form.clear();
                view.flash.set(FLASH_DELETED);
            }
            Err(err) => {
                warn!(%err, "delete failed");
                view.flash.set(FLASH_SERVER_ERROR);
            }
        })
        .await;
    }

    /// Search criteria come from the form's name, category, and price slots.
    pub async fn search(&self) {
        let (draft, generation) = self.begin(Operation::Search).await;
        let filter = SearchFilter {
            name: draft.name,
            category: draft.category,
            price: draft.price,
        };
        info!(generation, ?filter, "dispatching search");
        let outcome = self.client.search(&filter).await;
        self.complete(Operation::Search, generation, |view| match outcome {
            Ok(products) => {
                view.flash.set(FLASH_SUCCESS);
                let ViewModel { form, results, .. } = view;
                results.render(&products, form);
            }
            Err(err) => {
                warn!(%err, "search failed");
                view.flash.set(err.flash_text());
            }
        })
        .await;
    }

    pub async fn like(&self) {
        let (draft, generation) = self.begin(Operation::Like).await;
        info!(generation, id = %draft.id, "dispatching like");
        let outcome = self.client.like(&draft.id).await;
        self.complete(Operation::Like, generation, |view| match outcome {
            Ok(product) => {
                view.form.write(&product);
                view.flash.set(FLASH_SUCCESS);
            }
            Err(err) => {
                warn!(%err, "like failed");
                view.flash.set(err.flash_text());
            }
        })
        .await;
    }

    /// Clears the flash slot, snapshots the form, and issues the next
    /// generation token for `op`.
    async fn begin(&self, op: Operation) -> (Product, u64) {
        let draft = {
            let mut view = self.view.lock().await;
            view.flash.clear();
            view.form.read()
        };
        let mut generations = self.generations.lock().await;
        let slot = generations.entry(op).or_insert(0);
        *slot += 1;
        (draft, *slot)
    }

    /// Applies `effect` to the view unless a newer dispatch of `op` has
    /// been issued since `generation`.
    async fn complete<F>(&self, op: Operation, generation: u64, effect: F)
    where
        F: FnOnce(&mut ViewModel),
    {
        let mut view = self.view.lock().await;
        let current = self
            .generations
            .lock()
            .await
            .get(&op)
            .copied()
            .unwrap_or(0);
        if current != generation {
            debug!(?op, generation, current, "discarding stale completion");
            return;
        }
        effect(&mut *view);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
