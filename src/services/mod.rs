//! Service layer for the wiki application

pub mod page_store;

pub use page_store::PageStore;
