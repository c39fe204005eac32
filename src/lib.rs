//! Career Compass - aptitude quiz scoring and a career-counselor chat.
//!
//! The quiz maps answers onto academic streams and recommends the
//! highest-scoring ones. The chat relays student questions to an
//! OpenAI-compatible completion API with a stream-specific counselor prompt,
//! keeping a local message log that survives upstream failures.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
