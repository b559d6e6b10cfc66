pub mod search_service;

pub use search_service::{SESSION_LATENCY, SearchService};
