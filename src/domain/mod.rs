//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, IDs, state machine trait, errors)
//! - `quiz` - Aptitude quiz catalog, stream scoring and recommendation
//! - `conversation` - Chat messages, chat status and counselor copy

pub mod conversation;
pub mod foundation;
pub mod quiz;
