// Utility modules
pub mod error;
pub mod latency;
