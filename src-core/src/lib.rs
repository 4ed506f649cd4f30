pub mod db;
pub mod errors;
pub mod key_results;
pub mod objectives;
pub mod schema;
