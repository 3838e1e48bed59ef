//! BGI protocol: line-oriented commands in, line-oriented reports out.
//!
//! `parser` turns raw input lines into `Command` values; `report` formats
//! the engine's responses, including the JSON `state` snapshot.

pub mod parser;
pub mod report;
