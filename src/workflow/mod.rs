pub mod conversion;
pub mod definition;
pub mod id;
pub mod link;

pub use conversion::*;
pub use definition::*;
pub use id::*;
pub use link::*;
