//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod datamall_adapter;

pub use datamall_adapter::DataMallAdapter;
