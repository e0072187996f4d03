//! SafeSend Risk API Module
//! REST surface for stateless address screening: routes, handlers,
//! middleware, wire types.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use routes::{create_router, create_service};
pub use types::*;
