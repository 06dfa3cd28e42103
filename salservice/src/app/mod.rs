pub mod error;
pub mod filter;
pub mod query_service;
pub mod rows;
pub mod table;
