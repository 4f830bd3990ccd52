pub mod registry;
pub mod traits;

// Strategy catalog sources
pub mod http;
pub mod memory;
