//! Bearer-protected CRUD for every content entity, plus the product reorder
//! operation and the inbound-application listings.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{ApiClient, ApiError};
use crate::models::{
    Association, Exhibition, ExhibitionApplication, NewsItem, PartnerApplication, Product,
    Solution, SortOrderUpdate,
};

/// The gap left between consecutive sort_order values on reorder, so a future
/// manual insertion can slot between two items without renumbering.
pub const SORT_STRIDE: i64 = 10;

/// AdminRecord
///
/// Binds an entity type to its REST collection. Implementing this is all an
/// entity needs to get the uniform list/create/update/delete manager.
pub trait AdminRecord: Serialize + DeserializeOwned + Send + Sync {
    /// Collection path with trailing slash, e.g. `"/products/"`.
    const COLLECTION: &'static str;
    /// Human label used in error context, e.g. `"product"`.
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

impl AdminRecord for Solution {
    const COLLECTION: &'static str = "/solutions/";
    const LABEL: &'static str = "solution";
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminRecord for Product {
    const COLLECTION: &'static str = "/products/";
    const LABEL: &'static str = "product";
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminRecord for NewsItem {
    const COLLECTION: &'static str = "/news/";
    const LABEL: &'static str = "news item";
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminRecord for Exhibition {
    const COLLECTION: &'static str = "/exhibitions/";
    const LABEL: &'static str = "exhibition";
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminRecord for Association {
    const COLLECTION: &'static str = "/associations/";
    const LABEL: &'static str = "association";
    fn id(&self) -> &str {
        &self.id
    }
}

/// CrudManager
///
/// The uniform admin controller for one entity type. Every successful
/// mutation re-runs `list()` and returns the refreshed collection, so the
/// caller's view state is always rebuilt from the server's answer rather than
/// patched locally (no cache invalidation beyond re-fetch).
pub struct CrudManager<'a, R: AdminRecord> {
    api: &'a ApiClient,
    _record: PhantomData<R>,
}

impl ApiClient {
    /// The CRUD manager for an entity type, e.g. `client.manage::<Product>()`.
    pub fn manage<R: AdminRecord>(&self) -> CrudManager<'_, R> {
        CrudManager {
            api: self,
            _record: PhantomData,
        }
    }
}

impl<'a, R: AdminRecord> CrudManager<'a, R> {
    /// Full collection listing. Unlike the public readers this propagates
    /// failures: the admin table shows the error instead of silently
    /// rendering empty.
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.api
            .get_json(R::COLLECTION, &format!("list {}", R::LABEL))
            .await
    }

    /// [Bearer-protected] POST the new record, then return the refreshed list.
    pub async fn create(&self, record: &R) -> Result<Vec<R>, ApiError> {
        let _: serde_json::Value = self
            .api
            .post_authed(R::COLLECTION, record, &format!("create {}", R::LABEL))
            .await?;
        self.list().await
    }

    /// [Bearer-protected] PUT the edited record, then return the refreshed list.
    pub async fn update(&self, id: &str, record: &R) -> Result<Vec<R>, ApiError> {
        let _: serde_json::Value = self
            .api
            .put_authed(
                &format!("{}{id}", R::COLLECTION),
                record,
                &format!("update {}", R::LABEL),
            )
            .await?;
        self.list().await
    }

    /// [Bearer-protected] DELETE by id, then return the refreshed list.
    /// The view layer's `DeleteConfirmation` step must run before this call.
    pub async fn delete(&self, id: &str) -> Result<Vec<R>, ApiError> {
        let _: serde_json::Value = self
            .api
            .delete_authed(
                &format!("{}{id}", R::COLLECTION),
                &format!("delete {}", R::LABEL),
            )
            .await?;
        self.list().await
    }
}

// --- Product Ordering ---

/// MoveDirection
///
/// Adjacent-swap direction for the admin product table's arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// move_product
///
/// The pure permutation step of a reorder: swaps the item at `index` with its
/// neighbor. Returns `None` when the move would fall off either end, in which
/// case the caller submits nothing.
pub fn move_product(
    products: &[Product],
    index: usize,
    direction: MoveDirection,
) -> Option<Vec<Product>> {
    if index >= products.len() {
        return None;
    }
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            let below = index + 1;
            if below >= products.len() {
                return None;
            }
            below
        }
    };

    let mut reordered = products.to_vec();
    reordered.swap(index, target);
    Some(reordered)
}

/// plan_sort_orders
///
/// Renumbers the *entire* list in its new display order as index * stride.
/// Submitting the full set (never just the swapped pair) avoids sort_order
/// collisions from concurrent edits.
pub fn plan_sort_orders(ordered: &[Product]) -> Vec<SortOrderUpdate> {
    ordered
        .iter()
        .enumerate()
        .map(|(index, product)| SortOrderUpdate {
            id: product.id.clone(),
            sort_order: index as i64 * SORT_STRIDE,
        })
        .collect()
}

/// ReorderOutcome
///
/// Result of the optimistic reorder transition. On rollback the caller must
/// replace its view state with `authoritative` wholesale; the local
/// permutation is discarded, never partially kept.
#[derive(Debug)]
pub enum ReorderOutcome {
    /// The server accepted the plan; the renumbered list is the new state.
    Applied(Vec<Product>),
    /// The server rejected the plan; state reverts to the server's order.
    RolledBack {
        authoritative: Vec<Product>,
        error: ApiError,
    },
}

impl<'a> CrudManager<'a, Product> {
    /// reorder
    ///
    /// [Bearer-protected] The single state-transition function for product
    /// ordering: renumber the permuted list, submit the complete set in one
    /// batched PUT /products/reorder, and on failure re-fetch the
    /// authoritative list so the UI never keeps a half-applied order.
    pub async fn reorder(&self, ordered: &[Product]) -> ReorderOutcome {
        let plan = plan_sort_orders(ordered);

        match self
            .api
            .put_authed::<serde_json::Value, _>("/products/reorder", &plan, "reorder products")
            .await
        {
            Ok(_) => {
                let mut applied = ordered.to_vec();
                for (product, update) in applied.iter_mut().zip(&plan) {
                    product.sort_order = update.sort_order;
                }
                ReorderOutcome::Applied(applied)
            }
            Err(error) => {
                tracing::error!(%error, "reorder rejected, reloading authoritative order");
                let authoritative = self.api.products().await;
                ReorderOutcome::RolledBack {
                    authoritative,
                    error,
                }
            }
        }
    }
}

// --- Inbound Application Listings (read-only) ---

impl ApiClient {
    /// [Bearer-protected] GET /partners/applications, newest first.
    pub async fn partner_applications(&self) -> Result<Vec<PartnerApplication>, ApiError> {
        self.get_authed("/partners/applications", "list partner applications")
            .await
    }

    /// [Bearer-protected] GET /exhibitions/applications, newest first.
    pub async fn exhibition_applications(&self) -> Result<Vec<ExhibitionApplication>, ApiError> {
        self.get_authed("/exhibitions/applications", "list exhibition applications")
            .await
    }
}
