pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
