pub mod conversion;
pub mod definition;
pub mod document;
pub mod entry;
pub mod outline;
pub mod variables;

pub use conversion::*;
pub use definition::*;
pub use document::*;
pub use entry::*;
pub use outline::*;
pub use variables::placeholders;
