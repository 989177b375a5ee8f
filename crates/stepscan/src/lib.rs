//! Convention-based step discovery for behaviour-driven scenarios.
//!
//! A scenario describes its methods with [`StepMethod`] records. The
//! [`StepScanner`] matches each method name against a set of
//! [`StepMatcher`] conventions (Given, When, Then and their And-variants by
//! default), derives a human-readable title, and produces [`ExecutionStep`]s
//! that a runner can order by [`ExecutionOrder`], execute and report.
//!
//! Titles come from the method name (`GivenAUserWithBalance` becomes
//! `A user with balance`), from an [`ArgumentVariant`] template, or, for
//! self-describing methods, from the first item of the [`TextProducer`] the
//! method returns.
//!
//! # Examples
//!
//! ```
//! use stepscan::{ArgumentVariant, StepMethod, StepScanner, share_scenario, step_args};
//!
//! #[derive(Default)]
//! struct Checkout {
//!     completed: Vec<i64>,
//! }
//!
//! let scanner = StepScanner::default();
//! let checkout = share_scenario(Checkout::default());
//! let method = StepMethod::plain("ThenTheOrderIsComplete", |checkout: &mut Checkout, args| {
//!     checkout.completed.extend(args.iter().filter_map(|arg| arg.as_i64()));
//!     Ok(())
//! })
//! .with_variant(ArgumentVariant::new(step_args![42]));
//!
//! let steps = scanner.scan(&checkout, &method).unwrap();
//! assert_eq!(steps[0].title(), "The order is complete 42");
//! assert!(steps[0].asserts());
//! ```

mod action;
mod error;
mod method;
mod panic;
mod scanner;
mod step;
mod title;

pub use action::{MethodCall, StepAction, TextDrain};
pub use error::{ScanError, StepError};
pub use method::{
    ArgumentVariant, DescribeFn, MethodBody, PlainFn, SharedScenario, StepMethod, TextProducer,
    share_scenario,
};
pub use panic::panic_message;
pub use scanner::StepScanner;
pub use step::ExecutionStep;
pub use title::{name_title, variant_title};

pub use stepscan_patterns::{
    StepArg, TemplateError, flatten_args, format_template, humanize, humanize_identifier,
    join_args, split_words, step_args,
};
pub use stepscan_policy::{
    Convention, ExecutionOrder, StepMatcher, TitleStyle, TitleTransform, default_matchers,
    find_matcher,
};
