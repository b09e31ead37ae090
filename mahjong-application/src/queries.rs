pub mod account_queries;
pub mod gateway_queries;
pub mod identity_queries;
pub mod replay_queries;
