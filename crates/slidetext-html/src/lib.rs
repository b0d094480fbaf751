//! HTML tokenizer and event source for the slidetext converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RAWTEXT, tag and attribute states
//!   - Comments and DOCTYPE (skipped by the event source)
//!   - Named and numeric character references
//!
//! - **Event Source**
//!   - Open tag / text / close tag callbacks on an [`EventSink`]
//!   - Void elements, implied end tags and end-of-input closing
//!
//! # Not Yet Implemented
//!
//! - Tree construction and insertion modes
//! - Script data and RCDATA states (`script` content is read as RAWTEXT)
//! - The full named character reference table

/// Open/text/close events built on top of the tokenizer.
pub mod events;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use events::{Attributes, EventSink, EventSource, parse_events};
pub use tokenizer::{Attribute, HTMLTokenizer, Token};
