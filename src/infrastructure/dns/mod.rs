//! Public DNS resolution.

pub mod hickory_resolver;

pub use hickory_resolver::HickoryTxtResolver;
