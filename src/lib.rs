pub mod db_adapters;
pub mod entities;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod telemetry;
pub mod types;
pub mod utils;
