//! Explicit query methods over the schema. Every function takes the
//! connection it operates on; there is no process-wide session.

pub mod messages;
pub mod users;
