pub mod cli;
pub mod entity;
pub mod error;
pub mod locale;
pub mod storage;

pub use error::{Result, StoreError};
pub use locale::Lang;
pub use storage::ContentStore;
