//! View-state for the public list/detail surfaces and the admin tables.
//!
//! Each list view holds the full fetched collection and derives the filtered
//! view synchronously on every render. Filtering is entirely client-side; the
//! backend is never queried with filter parameters, and any pagination shown
//! is cosmetic over the in-memory set.

use crate::catalog::{self, CategoryKind, FILTER_ALL};
use crate::models::{Association, AssociationKind, Exhibition, NewsItem, Product};

/// Detail
///
/// Resolution state of a single-record view. Detail views always resolve from
/// a fresh fetch (not from a list already in memory); an unknown id renders a
/// not-found state with back navigation rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail<T> {
    Found(T),
    NotFound,
}

impl<T> Detail<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Detail::Found(record) => Some(record),
            Detail::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Detail<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(record) => Detail::Found(record),
            None => Detail::NotFound,
        }
    }
}

/// ProductsView
///
/// The product catalog surface: single-select category filter (default 全部)
/// plus a case-insensitive substring search over name+description.
#[derive(Debug, Clone, Default)]
pub struct ProductsView {
    products: Vec<Product>,
    pub category: String,
    pub search: String,
}

impl ProductsView {
    pub fn new(mut products: Vec<Product>) -> Self {
        // sort_order is the sole determinant of display order.
        products.sort_by_key(|product| product.sort_order);
        Self {
            products,
            category: FILTER_ALL.to_string(),
            search: String::new(),
        }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// The filtered view, derived synchronously from the in-memory set.
    pub fn visible(&self) -> Vec<&Product> {
        let needle = self.search.trim().to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                let category_match =
                    self.category == FILTER_ALL || product.category == self.category;
                let search_match = needle.is_empty() || {
                    let haystack =
                        format!("{}{}", product.name, product.description).to_lowercase();
                    haystack.contains(&needle)
                };
                category_match && search_match
            })
            .collect()
    }

    /// Software platforms only (the "systems" surface).
    pub fn systems(&self) -> Vec<&Product> {
        self.of_kind(CategoryKind::System)
    }

    /// Physical products only (the "hardware" surface).
    pub fn hardware(&self) -> Vec<&Product> {
        self.of_kind(CategoryKind::Hardware)
    }

    fn of_kind(&self, kind: CategoryKind) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| catalog::category_kind(&product.category) == Some(kind))
            .collect()
    }
}

/// NewsView
///
/// The news listing with its single-select category filter.
#[derive(Debug, Clone, Default)]
pub struct NewsView {
    items: Vec<NewsItem>,
    pub category: String,
}

impl NewsView {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            category: FILTER_ALL.to_string(),
        }
    }

    pub fn all(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn visible(&self) -> Vec<&NewsItem> {
        self.items
            .iter()
            .filter(|item| self.category == FILTER_ALL || item.category == self.category)
            .collect()
    }
}

/// ExhibitionsView
///
/// The exhibitions listing, filterable by city and by tag.
#[derive(Debug, Clone, Default)]
pub struct ExhibitionsView {
    exhibitions: Vec<Exhibition>,
    pub city: String,
    pub tag: String,
}

impl ExhibitionsView {
    pub fn new(exhibitions: Vec<Exhibition>) -> Self {
        Self {
            exhibitions,
            city: FILTER_ALL.to_string(),
            tag: FILTER_ALL.to_string(),
        }
    }

    pub fn all(&self) -> &[Exhibition] {
        &self.exhibitions
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn visible(&self) -> Vec<&Exhibition> {
        self.exhibitions
            .iter()
            .filter(|exhibition| {
                let city_match = self.city == FILTER_ALL || exhibition.city == self.city;
                let tag_match = self.tag == FILTER_ALL
                    || exhibition.tags.iter().any(|tag| *tag == self.tag);
                city_match && tag_match
            })
            .collect()
    }
}

/// AssociationsView
///
/// The associations listing with its 协会/联盟 type filter.
#[derive(Debug, Clone, Default)]
pub struct AssociationsView {
    associations: Vec<Association>,
    pub kind: Option<AssociationKind>,
}

impl AssociationsView {
    pub fn new(associations: Vec<Association>) -> Self {
        Self {
            associations,
            kind: None,
        }
    }

    pub fn all(&self) -> &[Association] {
        &self.associations
    }

    /// `None` selects 全部.
    pub fn set_kind(&mut self, kind: Option<AssociationKind>) {
        self.kind = kind;
    }

    pub fn visible(&self) -> Vec<&Association> {
        self.associations
            .iter()
            .filter(|association| match self.kind {
                Some(kind) => association.association_type == kind,
                None => true,
            })
            .collect()
    }
}

/// DeleteConfirmation
///
/// The two-step destructive-action state used by every admin table: a delete
/// is first *requested*, and only an explicit `confirm()` yields the id to
/// pass to the manager's `delete`. Cancelling drops the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteConfirmation {
    pending: Option<String>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a delete for the given record id.
    pub fn request(&mut self, id: impl Into<String>) {
        self.pending = Some(id.into());
    }

    /// The id awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Consume the staged id; the caller then issues the destructive call.
    pub fn confirm(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
