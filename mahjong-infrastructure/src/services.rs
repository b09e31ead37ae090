pub mod gateway_client;
pub mod health_service;

pub use gateway_client::*;
pub use health_service::*;
