pub mod api_doc;
pub mod domains;
pub mod routes;
pub mod shared;
