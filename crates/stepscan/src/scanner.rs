//! Step discovery over scenario method metadata.
//!
//! The scanner tries each configured [`StepMatcher`] in order and stops at
//! the first one whose convention accepts the method name. A matched method
//! yields one step, or one step per non-empty argument variant in declaration
//! order. Plain methods are never invoked while scanning; self-describing
//! methods are invoked once to obtain their title.

use std::rc::Rc;

use stepscan_policy::{StepMatcher, TitleStyle, TitleTransform, default_matchers, find_matcher};

use crate::action::{MethodCall, StepAction, TextDrain};
use crate::error::ScanError;
use crate::method::{ArgumentVariant, MethodBody, SharedScenario, StepMethod};
use crate::step::ExecutionStep;
use crate::title::{describe, name_title, variant_title};

/// Converts scenario methods into [`ExecutionStep`]s.
///
/// The matcher set and title transform are fixed at construction. A scanner
/// holds no per-scan state and may be reused for any number of scenarios.
///
/// # Examples
///
/// ```
/// use stepscan::{StepMethod, StepScanner, share_scenario};
///
/// #[derive(Default)]
/// struct Account {
///     balance: i64,
/// }
///
/// let scanner = StepScanner::default();
/// let account = share_scenario(Account::default());
/// let method = StepMethod::plain("GivenAUserWithBalance", |account: &mut Account, _| {
///     account.balance = 100;
///     Ok(())
/// });
///
/// let steps = scanner.scan(&account, &method).unwrap();
/// assert_eq!(steps.len(), 1);
/// assert_eq!(steps[0].title(), "A user with balance");
/// assert_eq!(account.borrow().balance, 0);
///
/// steps[0].execute().unwrap();
/// assert_eq!(account.borrow().balance, 100);
/// ```
#[derive(Clone, Debug)]
pub struct StepScanner {
    matchers: Vec<StepMatcher>,
    transform: TitleTransform,
}

impl StepScanner {
    /// Create a scanner trying `matchers` in the given order.
    ///
    /// Order matters when conventions overlap: list more specific conventions
    /// such as `AndGiven` before general ones such as `And`.
    #[must_use]
    pub fn new(matchers: impl IntoIterator<Item = StepMatcher>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
            transform: TitleTransform::identity(),
        }
    }

    /// Replace the transform applied to name-derived titles.
    #[must_use]
    pub fn with_transform(mut self, transform: impl Into<TitleTransform>) -> Self {
        self.transform = transform.into();
        self
    }

    /// Apply a built-in casing style to name-derived titles.
    #[must_use]
    pub fn with_title_style(self, style: TitleStyle) -> Self {
        self.with_transform(style)
    }

    /// The matchers in priority order.
    #[must_use]
    pub fn matchers(&self) -> &[StepMatcher] {
        &self.matchers
    }

    /// The transform applied to name-derived titles.
    #[must_use]
    pub const fn transform(&self) -> &TitleTransform {
        &self.transform
    }

    /// The first matcher accepting `method_name`.
    #[must_use]
    pub fn matcher_for(&self, method_name: &str) -> Option<&StepMatcher> {
        find_matcher(&self.matchers, method_name)
    }

    /// Convert one method of `target` into steps.
    ///
    /// Returns no steps when the method matches no convention or when every
    /// declared argument variant is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::TitleDerivationFailed`] when a self-describing
    /// method faults or panics before yielding its title, and
    /// [`ScanError::InvalidTemplate`] when a variant's template cannot be
    /// rendered. No steps are returned for the method in either case.
    pub fn scan<S: 'static>(
        &self,
        target: &SharedScenario<S>,
        method: &StepMethod<S>,
    ) -> Result<Vec<ExecutionStep>, ScanError> {
        let Some(matcher) = self.matcher_for(method.name()) else {
            log::trace!("`{}` matches no step convention", method.name());
            return Ok(Vec::new());
        };
        log::debug!(
            "`{}` matched {:?} (order rank {})",
            method.name(),
            matcher.convention(),
            matcher.execution_order().rank()
        );

        let base = name_title(matcher.convention(), method.name(), &self.transform);
        if method.variants().is_empty() {
            return Ok(vec![build_step(target, method, matcher, &base, None)?]);
        }

        let mut steps = Vec::with_capacity(method.variants().len());
        for (position, variant) in method.variants().iter().enumerate() {
            if variant.is_empty() {
                log::warn!(
                    "skipping argument variant {position} of `{}`: it declares no arguments",
                    method.name()
                );
                continue;
            }
            steps.push(build_step(target, method, matcher, &base, Some(variant))?);
        }
        Ok(steps)
    }

    /// Scan several methods of the same scenario.
    ///
    /// Steps are concatenated in the order the methods are supplied.
    ///
    /// # Errors
    ///
    /// Stops at the first method whose scan fails and returns its error.
    pub fn scan_all<'m, S: 'static>(
        &self,
        target: &SharedScenario<S>,
        methods: impl IntoIterator<Item = &'m StepMethod<S>>,
    ) -> Result<Vec<ExecutionStep>, ScanError> {
        let mut steps = Vec::new();
        for method in methods {
            steps.extend(self.scan(target, method)?);
        }
        Ok(steps)
    }
}

impl Default for StepScanner {
    fn default() -> Self {
        Self::new(default_matchers())
    }
}

fn build_step<S: 'static>(
    target: &SharedScenario<S>,
    method: &StepMethod<S>,
    matcher: &StepMatcher,
    base: &str,
    variant: Option<&ArgumentVariant>,
) -> Result<ExecutionStep, ScanError> {
    let args = variant.map(|v| v.args().to_vec()).unwrap_or_default();
    let invalid_template = |source| ScanError::InvalidTemplate {
        method: method.name().to_owned(),
        source,
    };

    let (title, action): (String, Box<dyn StepAction>) = match method.body() {
        MethodBody::Plain(body) => {
            let title = variant_title(base, variant).map_err(invalid_template)?;
            let call = MethodCall::new(Rc::clone(target), method.name(), Rc::clone(body), args);
            (title, Box::new(call))
        }
        MethodBody::SelfDescribing(body) => {
            let described = describe(target, body.as_ref(), &args).map_err(|source| {
                ScanError::TitleDerivationFailed {
                    method: method.name().to_owned(),
                    source,
                }
            })?;
            let title = described
                .title
                .map_or_else(
                    || {
                        log::warn!(
                            "`{}` produced no title text; using its name",
                            method.name()
                        );
                        variant_title(base, variant)
                    },
                    Ok,
                )
                .map_err(invalid_template)?;
            let drain = TextDrain::new(
                Rc::clone(target),
                method.name(),
                Rc::clone(body),
                args,
                Some(described.rest),
            );
            (title, Box::new(drain))
        }
    };
    Ok(ExecutionStep::new(title, method.name(), matcher, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StepError;
    use crate::method::{TextProducer, share_scenario};
    use rstest::{fixture, rstest};
    use stepscan_patterns::step_args;
    use stepscan_policy::{Convention, ExecutionOrder};

    #[fixture]
    fn scanner() -> StepScanner {
        StepScanner::default()
    }

    fn noop(name: &str) -> StepMethod<()> {
        StepMethod::plain(name, |_, _| Ok(()))
    }

    #[rstest]
    #[case("GivenAUserWithBalance", ExecutionOrder::SetupState)]
    #[case("AndGivenAnEmptyCart", ExecutionOrder::ConsecutiveSetupState)]
    #[case("WhenTheUserPays", ExecutionOrder::Transition)]
    #[case("AndWhenTheUserLeaves", ExecutionOrder::ConsecutiveTransition)]
    #[case("ThenTheOrderIsComplete", ExecutionOrder::Assertion)]
    #[case("AndTheReceiptIsSent", ExecutionOrder::ConsecutiveAssertion)]
    fn first_matching_convention_wins(
        scanner: StepScanner,
        #[case] name: &str,
        #[case] order: ExecutionOrder,
    ) {
        let steps = scanner
            .scan(&share_scenario(()), &noop(name))
            .unwrap_or_default();
        let orders: Vec<_> = steps.iter().map(ExecutionStep::execution_order).collect();
        assert_eq!(orders, [order]);
    }

    #[rstest]
    #[case("EstablishContext")]
    #[case("SetupDatabase")]
    #[case("TearDown")]
    #[case("Givenchy")]
    fn unmatched_methods_yield_nothing(scanner: StepScanner, #[case] name: &str) {
        let steps = scanner.scan(&share_scenario(()), &noop(name));
        assert!(steps.is_ok_and(|steps| steps.is_empty()));
    }

    #[rstest]
    fn custom_matchers_replace_defaults() {
        let scanner = StepScanner::new([StepMatcher::unreported(
            Convention::suffix("Context"),
            false,
            ExecutionOrder::Initialize,
        )]);
        let steps = scanner
            .scan(&share_scenario(()), &noop("EmptyCartContext"))
            .unwrap_or_default();
        assert_eq!(steps.len(), 1);
        assert!(steps.iter().all(|step| !step.should_report()));
        assert!(scanner.matcher_for("GivenACart").is_none());
    }

    #[rstest]
    fn template_errors_abort_the_method(scanner: StepScanner) {
        let method = noop("ThenTotalIs")
            .with_variant(ArgumentVariant::new(step_args![1]).with_template("total {"));
        let Err(err) = scanner.scan(&share_scenario(()), &method) else {
            panic!("expected a template error");
        };
        assert!(matches!(err, ScanError::InvalidTemplate { .. }));
        assert_eq!(err.method_name(), "ThenTotalIs");
    }

    #[rstest]
    fn self_describing_fault_names_the_method(scanner: StepScanner) {
        let method = StepMethod::<()>::self_describing("GivenACart", |_, _| {
            TextProducer::failing(StepError::failed("no stock"))
        });
        let result = scanner.scan(&share_scenario(()), &method);
        assert!(matches!(
            result,
            Err(ScanError::TitleDerivationFailed { ref method, .. }) if method == "GivenACart"
        ));
    }

    #[rstest]
    fn transform_applies_to_name_titles(scanner: StepScanner) {
        let scanner = scanner.with_title_style(TitleStyle::Upper);
        let steps = scanner
            .scan(&share_scenario(()), &noop("GivenAUserWithBalance"))
            .unwrap_or_default();
        let titles: Vec<_> = steps.iter().map(ExecutionStep::title).collect();
        assert_eq!(titles, ["A USER WITH BALANCE"]);
    }
}
