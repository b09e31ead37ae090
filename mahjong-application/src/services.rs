pub mod account_directory;
pub mod gateway_passthrough;
pub mod replay_head_cache;

pub use account_directory::AccountDirectory;
pub use gateway_passthrough::GatewayPassthrough;
pub use replay_head_cache::ReplayHeadCache;
