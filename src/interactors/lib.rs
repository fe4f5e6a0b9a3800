pub mod types;
pub mod constants;
pub mod data_types;
pub mod error;
pub mod db;
pub mod api;
pub mod web;
