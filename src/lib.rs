pub mod api; // HTTP surface: router, handlers, error mapping
pub mod config;
pub mod dataset; // CSV extraction for batch uploads
pub mod db;
pub mod normalize; // The fixed text-cleaning pipeline
