use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// --- Public Content Schemas (Owned by the REST backend) ---

/// Solution
///
/// Represents one industry solution card (agriculture, security, logistics, ...)
/// from the `solutions` table. The `icon` field is a name resolved against the
/// closed icon table in `catalog`; unknown names render the default icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Solution {
    pub id: String,
    pub title: String,
    pub description: String,
    // Public URL of the hero image, produced by the upload collaborator.
    pub image: String,
    pub icon: String,
}

/// Product
///
/// Represents a product record (software platform or hardware airframe) from
/// the `products` table. `category` is constrained to the fixed option list in
/// `catalog::PRODUCT_CATEGORIES`; the System/Hardware split is derived from
/// that table, never from free-text inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    /// Sole determinant of display order on ordering-aware surfaces.
    /// Renumbered wholesale (stride 10) on every admin reorder.
    #[serde(default)]
    pub sort_order: i64,
}

/// PartnerBenefit
///
/// A city-partner recruitment benefit. Has no id; the backend returns these in
/// their fixed display order and the client never reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct PartnerBenefit {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// NewsItem
///
/// A news/press record from the `news_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub category: String,
    pub summary: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Exhibition
///
/// An exhibition/trade-show record. Tag order is meaningful (the first tag is
/// rendered as the headline badge), so tags stay a plain ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Exhibition {
    pub id: String,
    pub title: String,
    pub description: String,
    #[ts(type = "string")]
    pub start_date: NaiveDate,
    #[ts(type = "string")]
    pub end_date: NaiveDate,
    pub location: String,
    pub city: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

/// AssociationKind
///
/// The closed set of association types. Wire values are the Chinese labels
/// stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub enum AssociationKind {
    #[default]
    #[serde(rename = "协会")]
    Society,
    #[serde(rename = "联盟")]
    Alliance,
}

/// Association
///
/// An industry association or alliance profile from the `associations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Association {
    pub id: String,
    pub name: String,
    /// 'type' is a reserved keyword in Rust, so we rename it for internal use.
    #[serde(rename = "type")]
    pub association_type: AssociationKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_info: Option<String>,
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

// --- Application Forms (Request Payloads + Records) ---

/// PartnerApplicationRequest
///
/// Input payload for the public city-partner application form
/// (POST /partners/apply). Validated client-side before any network call;
/// see `ApiClient::submit_partner_application`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct PartnerApplicationRequest {
    pub name: String,
    pub phone: String,
    pub company: String,
    pub target_city: String,
    pub message: String,
}

/// PartnerApplication
///
/// A stored partner application as returned by the bearer-protected admin
/// listing (GET /partners/applications).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct PartnerApplication {
    pub name: String,
    pub phone: String,
    pub company: String,
    pub target_city: String,
    pub message: String,
    #[ts(type = "string")]
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

/// ApplicationType
///
/// Ticket vs booth intent on an exhibition application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    #[default]
    Ticket,
    Booth,
}

/// ExhibitionApplicationRequest
///
/// Input payload for the public exhibition ticket/booth form
/// (POST /exhibitions/apply). The exhibition title is denormalized into the
/// record so the admin listing reads without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct ExhibitionApplicationRequest {
    pub exhibition_id: String,
    pub exhibition_title: String,
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    pub name: String,
    pub company: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// ExhibitionApplication
///
/// A stored exhibition application as returned by the admin listing
/// (GET /exhibitions/applications).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct ExhibitionApplication {
    pub exhibition_id: String,
    pub exhibition_title: String,
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    pub name: String,
    pub company: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[ts(type = "string")]
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

// --- Admin Users & Auth Schemas ---

/// AdminRole
///
/// The RBAC field gating admin navigation and user management. Wire format is
/// snake_case to match the backend's `admin_users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    SuperAdmin,
    #[default]
    ContentOperator,
    BusinessOperator,
}

/// AdminUser
///
/// An admin account record from the bearer-protected user listing
/// (GET /auth/users). Password hashes never leave the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub role: AdminRole,
    #[ts(type = "string")]
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

/// AdminUserCreate
///
/// Input payload for provisioning an admin account (POST /auth/users, or the
/// one-time bootstrap POST /auth/register). The password is passed through to
/// the backend for hashing and never persisted or logged client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct AdminUserCreate {
    pub username: String,
    pub password: String,
    pub role: AdminRole,
}

/// LoginRequest
///
/// Input payload for POST /auth/login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// LoginResponse
///
/// The backend's login acknowledgement. All four fields are persisted into
/// the session store; see `session::establish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
    pub role: AdminRole,
}

// --- Ordering ---

/// SortOrderUpdate
///
/// One element of the batched PUT /products/reorder body. A reorder always
/// submits the full renumbered set, never just the swapped pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct SortOrderUpdate {
    pub id: String,
    pub sort_order: i64,
}
