// Identifier value objects

/// Numeric account identifier used by the game service.
pub type AccountId = i64;
