// Entity-level API operations, segregated the same way the backend
// segregates its routers (Public, Auth, Admin).

pub mod admin;
pub mod auth;
pub mod public;
