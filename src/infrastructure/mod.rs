pub mod models;
pub mod sales_repo;
