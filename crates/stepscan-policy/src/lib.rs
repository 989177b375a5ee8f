//! Naming-convention policies for stepscan.
//!
//! This crate centralises the records that classify a scenario method by its
//! name: the [`Convention`] predicate, the [`ExecutionOrder`] rank a runner
//! uses to sequence Given, When and Then groups, and the [`StepMatcher`]
//! policy combining them with the assertion and reporting flags. The default
//! Given/When/Then family lives in [`default_matchers`].
//!
//! It also provides [`TitleTransform`], the caller-supplied text transform the
//! scanner applies to every name-derived title.

mod convention;
mod matcher;
mod order;
mod style;

pub use convention::Convention;
pub use matcher::{StepMatcher, default_matchers, find_matcher};
pub use order::ExecutionOrder;
pub use style::{TitleStyle, TitleTransform};
