pub mod routes;

pub use routes::AppRoutes;
