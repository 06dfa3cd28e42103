pub mod db;
pub mod logger;
