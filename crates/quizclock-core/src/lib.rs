//! quizclock-core - Question parsing, answer sources, and the timed game engine.
//!
//! This crate defines the data model, the record parser, and the game loop
//! that races each answer read against a single countdown.

pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod source;
pub mod traits;

pub use error::QuizError;
