//! Shared step-title text utilities for stepscan.
//!
//! The crate holds the text-only half of step materialisation: splitting
//! method identifiers into words, humanizing them into sentences, the
//! [`StepArg`] value model used by argument variants, and the positional
//! template formatter used when a variant supplies its own display text.
//! Keeping these helpers free of scenario types lets the policy crate reuse
//! the word splitter for convention matching.

mod arg;
mod errors;
mod template;
mod words;

pub use arg::{StepArg, flatten_args};
pub use errors::TemplateError;
pub use template::{format_template, join_args};
pub use words::{humanize, humanize_identifier, split_words};
