mod content_store;
mod local_store;

pub use content_store::ContentStore;
pub use local_store::LocalStore;
