//! Metadata describing the candidate methods of a scenario.
//!
//! Rust offers no runtime reflection, so the caller enumerates a scenario's
//! methods once and describes each one with a [`StepMethod`]: its name, the
//! callable body, and any declared [`ArgumentVariant`]s. The scanner only
//! reads these records.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use stepscan_patterns::StepArg;

use crate::error::StepError;

/// Handle to a scenario instance shared by every step scanned from it.
pub type SharedScenario<S> = Rc<RefCell<S>>;

/// Wrap a scenario instance so steps can bind to it.
///
/// # Examples
///
/// ```
/// use stepscan::share_scenario;
///
/// let scenario = share_scenario(vec![1, 2, 3]);
/// assert_eq!(scenario.borrow().len(), 3);
/// ```
#[must_use]
pub fn share_scenario<S>(scenario: S) -> SharedScenario<S> {
    Rc::new(RefCell::new(scenario))
}

/// Signature of a plain step body.
pub type PlainFn<S> = dyn Fn(&mut S, &[StepArg]) -> Result<(), StepError>;

/// Signature of a self-describing step body.
pub type DescribeFn<S> = dyn Fn(&SharedScenario<S>, &[StepArg]) -> TextProducer;

/// Lazy sequence of text produced by a self-describing method.
///
/// The first item becomes the step title. Producing later items may carry
/// the step's side effects, so executing the step drains the sequence.
///
/// # Examples
///
/// ```
/// use stepscan::TextProducer;
///
/// let mut producer = TextProducer::from_texts(["opened cart", "added item"]);
/// assert_eq!(producer.next().map(Result::ok), Some(Some("opened cart".to_owned())));
/// assert_eq!(producer.count(), 1);
/// ```
pub struct TextProducer {
    items: Box<dyn Iterator<Item = Result<String, StepError>>>,
}

impl TextProducer {
    /// Wrap any iterator of text results.
    #[must_use]
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Result<String, StepError>>,
        I::IntoIter: 'static,
    {
        Self {
            items: Box::new(items.into_iter()),
        }
    }

    /// Wrap an iterator of infallible text values.
    #[must_use]
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
        T: Into<String>,
    {
        Self::new(texts.into_iter().map(|text| Ok(text.into())))
    }

    /// A producer that yields nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// A producer whose first item is `error`.
    #[must_use]
    pub fn failing(error: StepError) -> Self {
        Self::new(std::iter::once(Err(error)))
    }
}

impl Iterator for TextProducer {
    type Item = Result<String, StepError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl fmt::Debug for TextProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextProducer").finish_non_exhaustive()
    }
}

/// Callable body of a scenario method.
///
/// Plain bodies receive the scenario mutably for the duration of the call.
/// Self-describing bodies receive the shared handle instead, because the
/// producer they return is consumed after the call has returned and must
/// borrow the scenario on its own terms.
pub enum MethodBody<S> {
    /// Runs the step and reports success or failure.
    Plain(Rc<PlainFn<S>>),
    /// Returns a lazy sequence whose first item names the step.
    SelfDescribing(Rc<DescribeFn<S>>),
}

impl<S> Clone for MethodBody<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(body) => Self::Plain(Rc::clone(body)),
            Self::SelfDescribing(body) => Self::SelfDescribing(Rc::clone(body)),
        }
    }
}

impl<S> fmt::Debug for MethodBody<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("MethodBody::Plain"),
            Self::SelfDescribing(_) => f.write_str("MethodBody::SelfDescribing"),
        }
    }
}

/// One declared set of arguments for a parameterised step method.
///
/// # Examples
///
/// ```
/// use stepscan::{ArgumentVariant, step_args};
///
/// let variant = ArgumentVariant::new(step_args![19.99]).with_template("the total is {0}");
/// assert_eq!(variant.args().len(), 1);
/// assert_eq!(variant.template(), Some("the total is {0}"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentVariant {
    args: Vec<StepArg>,
    template: Option<String>,
}

impl ArgumentVariant {
    /// Declare a variant with the given ordered arguments.
    #[must_use]
    pub fn new(args: impl IntoIterator<Item = StepArg>) -> Self {
        Self {
            args: args.into_iter().collect(),
            template: None,
        }
    }

    /// Attach a positional display template such as `"the total is {0}"`.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// The arguments as declared, nested lists included.
    #[must_use]
    pub fn args(&self) -> &[StepArg] {
        &self.args
    }

    /// The display template, if any.
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Returns `true` when the variant declares no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Scanner input describing one method of a scenario type.
///
/// # Examples
///
/// ```
/// use stepscan::{ArgumentVariant, StepError, StepMethod, step_args};
///
/// struct Account {
///     balance: i64,
/// }
///
/// let method = StepMethod::plain("WhenTheUserDeposits", |account: &mut Account, args| {
///     let amount = args
///         .first()
///         .and_then(|arg| arg.as_i64())
///         .ok_or_else(|| StepError::failed("missing amount"))?;
///     account.balance += amount;
///     Ok(())
/// })
/// .with_variant(ArgumentVariant::new(step_args![10]))
/// .with_variant(ArgumentVariant::new(step_args![25]));
///
/// assert_eq!(method.name(), "WhenTheUserDeposits");
/// assert_eq!(method.variants().len(), 2);
/// assert!(!method.returns_its_text());
/// ```
pub struct StepMethod<S> {
    name: String,
    body: MethodBody<S>,
    variants: Vec<ArgumentVariant>,
}

impl<S> StepMethod<S> {
    /// Describe a method that runs against the scenario and returns a result.
    #[must_use]
    pub fn plain<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut S, &[StepArg]) -> Result<(), StepError> + 'static,
    {
        Self::with_body(name, MethodBody::Plain(Rc::new(body)))
    }

    /// Describe a method that returns a lazy sequence of title text.
    #[must_use]
    pub fn self_describing<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&SharedScenario<S>, &[StepArg]) -> TextProducer + 'static,
    {
        Self::with_body(name, MethodBody::SelfDescribing(Rc::new(body)))
    }

    /// Describe a method from an existing body.
    #[must_use]
    pub fn with_body(name: impl Into<String>, body: MethodBody<S>) -> Self {
        Self {
            name: name.into(),
            body,
            variants: Vec::new(),
        }
    }

    /// Append a declared argument variant, preserving declaration order.
    #[must_use]
    pub fn with_variant(mut self, variant: ArgumentVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// The method identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The callable body.
    #[must_use]
    pub const fn body(&self) -> &MethodBody<S> {
        &self.body
    }

    /// Declared argument variants in declaration order.
    #[must_use]
    pub fn variants(&self) -> &[ArgumentVariant] {
        &self.variants
    }

    /// Returns `true` when the method supplies its own title text.
    #[must_use]
    pub const fn returns_its_text(&self) -> bool {
        matches!(self.body, MethodBody::SelfDescribing(_))
    }
}

impl<S> Clone for StepMethod<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            body: self.body.clone(),
            variants: self.variants.clone(),
        }
    }
}

impl<S> fmt::Debug for StepMethod<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepMethod")
            .field("name", &self.name)
            .field("body", &self.body)
            .field("variants", &self.variants)
            .finish()
    }
}
