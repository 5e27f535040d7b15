pub mod terms;
pub mod triple;
pub mod dictionary;
pub mod index_manager;
pub mod store;
