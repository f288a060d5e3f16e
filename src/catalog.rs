//! Fixed content taxonomies shared by the public filter UI and the admin
//! create/edit forms: the product category table and the icon table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The wildcard selector value used by every single-select filter.
pub const FILTER_ALL: &str = "全部";

/// CategoryKind
///
/// Tags each product category as a software platform ("system") or a physical
/// airframe/infrastructure product ("hardware"). This is the single source of
/// truth for the split; the subsets are never derived by set-difference at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CategoryKind {
    System,
    Hardware,
}

/// CategoryOption
///
/// One entry of the closed product category list. The `name` is the exact
/// wire value stored on `Product.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub name: &'static str,
    pub kind: CategoryKind,
}

/// The closed product category taxonomy, in admin-form display order.
/// Adding a category here makes it available to both the public filter bar
/// and the admin product form.
pub const PRODUCT_CATEGORIES: &[CategoryOption] = &[
    CategoryOption { name: "云端管理平台", kind: CategoryKind::System },
    CategoryOption { name: "地面控制软件", kind: CategoryKind::System },
    CategoryOption { name: "行业应用系统", kind: CategoryKind::System },
    CategoryOption { name: "工业巡检级", kind: CategoryKind::Hardware },
    CategoryOption { name: "垂直起降(VTOL)", kind: CategoryKind::Hardware },
    CategoryOption { name: "自动化机库", kind: CategoryKind::Hardware },
    CategoryOption { name: "消费者级", kind: CategoryKind::Hardware },
    CategoryOption { name: "固定翼", kind: CategoryKind::Hardware },
];

/// City options offered by the exhibitions filter bar.
pub const EXHIBITION_CITIES: &[&str] = &[
    "深圳", "广州", "北京", "上海", "成都", "珠海", "杭州", "西安", "南京",
];

/// All category names, for the admin form's category select.
pub fn category_names() -> Vec<&'static str> {
    PRODUCT_CATEGORIES.iter().map(|option| option.name).collect()
}

/// Category names tagged `System` (the "systems" public surface).
pub fn system_category_names() -> Vec<&'static str> {
    names_of_kind(CategoryKind::System)
}

/// Category names tagged `Hardware` (the "products" public surface).
pub fn hardware_category_names() -> Vec<&'static str> {
    names_of_kind(CategoryKind::Hardware)
}

fn names_of_kind(kind: CategoryKind) -> Vec<&'static str> {
    PRODUCT_CATEGORIES
        .iter()
        .filter(|option| option.kind == kind)
        .map(|option| option.name)
        .collect()
}

/// Looks up the kind of a category name. Returns `None` for values outside
/// the closed list (legacy free-text rows are tolerated but belong to
/// neither derived subset).
pub fn category_kind(name: &str) -> Option<CategoryKind> {
    PRODUCT_CATEGORIES
        .iter()
        .find(|option| option.name == name)
        .map(|option| option.kind)
}

/// Icon
///
/// The closed icon vocabulary used by solutions, partner benefits, and the
/// admin navigation. This is an explicit table, not reflection over an icon
/// library namespace: every name the backend can store maps to exactly one
/// variant, and anything else falls back to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub enum Icon {
    Shield,
    Plane,
    TrendingUp,
    Globe,
    Users,
    Briefcase,
    Zap,
    MapPin,
    LayoutDashboard,
    Calendar,
    Package,
    FileText,
    ClipboardList,
    Building2,
    /// Guaranteed fallback for unknown icon names.
    #[default]
    Generic,
}

impl Icon {
    /// Resolves a stored icon name against the closed table.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "Shield" => Icon::Shield,
            "Plane" => Icon::Plane,
            "TrendingUp" => Icon::TrendingUp,
            "Globe" => Icon::Globe,
            "Users" => Icon::Users,
            "Briefcase" => Icon::Briefcase,
            "Zap" => Icon::Zap,
            "MapPin" => Icon::MapPin,
            "LayoutDashboard" => Icon::LayoutDashboard,
            "Calendar" => Icon::Calendar,
            "Package" => Icon::Package,
            "FileText" => Icon::FileText,
            "ClipboardList" => Icon::ClipboardList,
            "Building2" => Icon::Building2,
            _ => Icon::Generic,
        }
    }
}
