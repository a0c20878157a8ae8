// Adapters layer: concrete implementations of the domain ports (http service, surfaces).

pub mod http;
pub mod memory;
pub mod terminal;
