pub mod account_handlers;
pub mod gateway_handlers;
pub mod identity_handlers;
pub mod ops_handlers;
pub mod replay_handlers;

pub use account_handlers::*;
pub use gateway_handlers::*;
pub use identity_handlers::*;
pub use ops_handlers::*;
pub use replay_handlers::*;
