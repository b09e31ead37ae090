// Domain value objects
pub mod identifiers;
pub mod zone;

pub use identifiers::*;
pub use zone::*;
