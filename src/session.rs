use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::catalog::Icon;
use crate::models::{AdminRole, LoginResponse};

/// Session
///
/// The full client-side session state: the opaque bearer token plus the
/// identity fields needed to gate navigation. Nothing else is persisted; its
/// absence on any admin-route entry forces a redirect to login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
    pub role: AdminRole,
}

impl Session {
    /// Builds the session from a successful login acknowledgement.
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            access_token: response.access_token.clone(),
            token_type: response.token_type.clone(),
            username: response.username.clone(),
            role: response.role,
        }
    }
}

// 1. SessionStore Contract

/// SessionStore
///
/// Defines the abstract contract for session persistence (the browser
/// localStorage analog). This trait allows us to swap the concrete
/// implementation—from the file-backed store (FileSessionStore) in the real
/// client to the in-memory store (MemorySessionStore) during testing—without
/// affecting the API client or the route guard.
///
/// The operations are intentionally infallible from the caller's view:
/// persistence failures are logged and read back as an absent session, which
/// the guard treats as "not signed in".
pub trait SessionStore: Send + Sync {
    /// Returns the persisted session, if any.
    fn load(&self) -> Option<Session>;
    /// Persists the session, replacing whatever was stored.
    fn save(&self, session: &Session);
    /// Removes the persisted session. The explicit "clear on logout" operation.
    fn clear(&self);
}

/// SessionState
///
/// The concrete type used to share session access across the application
/// state (client, route guard, views).
pub type SessionState = Arc<dyn SessionStore>;

/// Persists a successful login and returns the established session.
pub fn establish(store: &dyn SessionStore, response: &LoginResponse) -> Session {
    let session = Session::from_login(response);
    store.save(&session);
    session
}

/// Logs out: clears every persisted session field in one operation.
pub fn sign_out(store: &dyn SessionStore) {
    store.clear();
}

// 2. The Real Implementation (File-backed)

/// FileSessionStore
///
/// JSON-file session persistence for the desktop/CLI client process. Reads
/// that fail (missing file, malformed JSON) are treated as "no session", so a
/// corrupted file degrades to a login redirect instead of a crash.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "session file unreadable, treating as signed out");
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        match serde_json::to_string_pretty(session) {
            Ok(raw) => {
                if let Err(error) = fs::write(&self.path, raw) {
                    tracing::error!(%error, path = %self.path.display(), "failed to persist session");
                }
            }
            Err(error) => tracing::error!(%error, "failed to serialize session"),
        }
    }

    fn clear(&self) {
        // Missing file already means "signed out"; nothing to report.
        let _ = fs::remove_file(&self.path);
    }
}

// 3. The Mock Implementation (For Unit Tests)

/// MemorySessionStore
///
/// In-memory session persistence used by tests and ephemeral tooling.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor: a store already holding a signed-in session.
    pub fn signed_in(session: Session) -> Self {
        let store = Self::new();
        store.save(&session);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

// --- Route Guard ---

/// Gate
///
/// The outcome of an admin-route entry check. `RedirectToLogin` must be
/// honored *before* rendering protected content or issuing any
/// bearer-protected request.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Allow(Session),
    RedirectToLogin,
}

/// check_admin_access
///
/// The admin-area route guard: a persisted token and role are the only
/// admission criteria. Token validity is the backend's concern; a stale token
/// simply surfaces as 401s on the first protected call.
pub fn check_admin_access(store: &dyn SessionStore) -> Gate {
    match store.load() {
        Some(session) => Gate::Allow(session),
        None => Gate::RedirectToLogin,
    }
}

// --- Role-Gated Navigation ---

/// NavItem
///
/// One admin sidebar entry and the static set of roles allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    roles: &'static [AdminRole],
}

impl NavItem {
    pub fn visible_to(&self, role: AdminRole) -> bool {
        self.roles.contains(&role)
    }
}

const ALL_ROLES: &[AdminRole] = &[
    AdminRole::SuperAdmin,
    AdminRole::ContentOperator,
    AdminRole::BusinessOperator,
];
const CONTENT_ROLES: &[AdminRole] = &[AdminRole::SuperAdmin, AdminRole::ContentOperator];
const BUSINESS_ROLES: &[AdminRole] = &[AdminRole::SuperAdmin, AdminRole::BusinessOperator];
const SUPER_ONLY: &[AdminRole] = &[AdminRole::SuperAdmin];

/// The static role → navigation mapping. Content operators manage the
/// marketing content, business operators read inbound applications, and only
/// super admins provision accounts.
pub const ADMIN_NAV: &[NavItem] = &[
    NavItem { path: "/admin/dashboard", label: "仪表盘", icon: Icon::LayoutDashboard, roles: ALL_ROLES },
    NavItem { path: "/admin/exhibitions", label: "展会管理", icon: Icon::Calendar, roles: CONTENT_ROLES },
    NavItem { path: "/admin/solutions", label: "解决方案", icon: Icon::Briefcase, roles: CONTENT_ROLES },
    NavItem { path: "/admin/products", label: "产品管理", icon: Icon::Package, roles: CONTENT_ROLES },
    NavItem { path: "/admin/news", label: "新闻动态", icon: Icon::FileText, roles: CONTENT_ROLES },
    NavItem { path: "/admin/applications", label: "表单提交", icon: Icon::ClipboardList, roles: BUSINESS_ROLES },
    NavItem { path: "/admin/users", label: "用户管理", icon: Icon::Users, roles: SUPER_ONLY },
];

/// The sidebar entries visible to a role, in display order.
pub fn visible_nav(role: AdminRole) -> Vec<&'static NavItem> {
    ADMIN_NAV.iter().filter(|item| item.visible_to(role)).collect()
}
