// Domain entities

pub mod account;
pub mod gateway_reply;
pub mod model;
pub mod replay;

pub use account::*;
pub use gateway_reply::*;
pub use model::*;
pub use replay::*;
