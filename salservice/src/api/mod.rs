pub mod api;
pub mod state;
pub mod swagger;
pub mod types;
