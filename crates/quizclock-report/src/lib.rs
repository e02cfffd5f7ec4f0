//! quizclock-report - Console presentation for quizclock games.
//!
//! Renders the banner, the running stats line, each problem line, and the
//! final result block. Colours can be switched off with
//! [`set_color_enabled`].

pub mod console;

pub use console::{set_color_enabled, ConsoleReporter};
