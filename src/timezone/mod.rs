//! The time extraction, cross-timezone projection, and formatting pipeline.
//!
//! Stages, in data-flow order:
//! - `detect` - find a plausible clock-time substring in raw text
//! - `parse` - resolve the text to a concrete instant against an anchor
//! - `project` - shift the instant between UTC offsets
//! - `format` - render a projected instant with relative-day labels
//! - `reply` - assemble the ordered Block Kit payload

pub mod detect;
pub mod format;
pub mod parse;
pub mod project;
pub mod reply;
