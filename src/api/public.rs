//! Anonymous operations backing the marketing surfaces: typed content
//! readers and the two public application forms.
//!
//! Propagation policy: readers never return `Err` — a failed list fetch is
//! logged and degrades to an empty collection, a failed single-record fetch
//! degrades to `None`, and the view layer renders an empty/not-found state.
//! The application submissions are the opposite: failures propagate so the
//! form can show the message and keep the user's input for a manual retry.

use crate::client::{ApiClient, ApiError};
use crate::models::{
    Association, Exhibition, ExhibitionApplicationRequest, NewsItem,
    PartnerApplicationRequest, PartnerBenefit, Product, Solution,
};

impl ApiClient {
    // --- Content Readers ---

    pub async fn solutions(&self) -> Vec<Solution> {
        self.read_list("/solutions/", "fetch solutions").await
    }

    /// Products, sorted by `sort_order`. Every ordering-aware surface renders
    /// this order as-is.
    pub async fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.read_list("/products/", "fetch products").await;
        products.sort_by_key(|product| product.sort_order);
        products
    }

    pub async fn benefits(&self) -> Vec<PartnerBenefit> {
        self.read_list("/partners/", "fetch partner benefits").await
    }

    pub async fn news(&self) -> Vec<NewsItem> {
        self.read_list("/news/", "fetch news").await
    }

    pub async fn exhibitions(&self) -> Vec<Exhibition> {
        self.read_list("/exhibitions/", "fetch exhibitions").await
    }

    pub async fn exhibition(&self, id: &str) -> Option<Exhibition> {
        self.read_single(&format!("/exhibitions/{id}"), "fetch exhibition")
            .await
    }

    pub async fn associations(&self) -> Vec<Association> {
        self.read_list("/associations/", "fetch associations").await
    }

    pub async fn association(&self, id: &str) -> Option<Association> {
        self.read_single(&format!("/associations/{id}"), "fetch association")
            .await
    }

    // --- Application Submissions ---

    /// submit_partner_application
    ///
    /// POST /partners/apply. The required-field check runs first and rejects
    /// with `ApiError::Validation` before any network call, mirroring the
    /// form's `required` attributes.
    pub async fn submit_partner_application(
        &self,
        request: &PartnerApplicationRequest,
    ) -> Result<serde_json::Value, ApiError> {
        request.validate()?;
        self.post_json("/partners/apply", request, "submit partner application")
            .await
    }

    /// submit_exhibition_application
    ///
    /// POST /exhibitions/apply, for both ticket and booth intents.
    pub async fn submit_exhibition_application(
        &self,
        request: &ExhibitionApplicationRequest,
    ) -> Result<serde_json::Value, ApiError> {
        request.validate()?;
        self.post_json("/exhibitions/apply", request, "submit exhibition application")
            .await
    }

    // --- Degradation plumbing ---

    async fn read_list<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Vec<T> {
        match self.get_json(path, context).await {
            Ok(list) => list,
            Err(error) => {
                tracing::warn!(%error, path, "list fetch failed, rendering empty state");
                Vec::new()
            }
        }
    }

    async fn read_single<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Option<T> {
        match self.get_json(path, context).await {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(%error, path, "record fetch failed, rendering not-found state");
                None
            }
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("请填写必填项：{field}")));
    }
    Ok(())
}

impl PartnerApplicationRequest {
    /// The client-side counterpart of the form's `required` attributes.
    /// Company and message are optional free text.
    pub fn validate(&self) -> Result<(), ApiError> {
        require("姓名", &self.name)?;
        require("联系电话", &self.phone)?;
        require("意向城市", &self.target_city)?;
        Ok(())
    }
}

impl ExhibitionApplicationRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require("展会", &self.exhibition_id)?;
        require("姓名", &self.name)?;
        require("公司名称", &self.company)?;
        require("联系电话", &self.phone)?;
        Ok(())
    }
}
