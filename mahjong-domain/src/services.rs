// Pure domain services

pub mod identity_codec;

pub use identity_codec::*;
