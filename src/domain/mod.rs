pub mod filename;
pub mod links;
pub mod models;
