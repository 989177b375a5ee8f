//! Deferred invocations bound to a scenario instance.
//!
//! An action captures the target, the method body and the resolved arguments
//! when a step is scanned, and runs nothing until a runner calls
//! [`StepAction::invoke`]. Faults are returned unchanged.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use stepscan_patterns::StepArg;

use crate::error::StepError;
use crate::method::{DescribeFn, PlainFn, SharedScenario, TextProducer};

/// A zero-argument invocation of a scenario method.
pub trait StepAction {
    /// Run the bound method.
    ///
    /// # Errors
    ///
    /// Returns whatever fault the method raised.
    fn invoke(&self) -> Result<(), StepError>;
}

fn already_borrowed(method: &str) -> StepError {
    StepError::failed(format!(
        "scenario is already borrowed while invoking step method `{method}`"
    ))
}

/// Invokes a plain method with the resolved arguments.
pub struct MethodCall<S> {
    target: SharedScenario<S>,
    method: String,
    body: Rc<PlainFn<S>>,
    args: Vec<StepArg>,
}

impl<S> MethodCall<S> {
    /// Bind `body` to `target` with `args`.
    #[must_use]
    pub fn new(
        target: SharedScenario<S>,
        method: impl Into<String>,
        body: Rc<PlainFn<S>>,
        args: Vec<StepArg>,
    ) -> Self {
        Self {
            target,
            method: method.into(),
            body,
            args,
        }
    }

    /// The resolved arguments.
    #[must_use]
    pub fn args(&self) -> &[StepArg] {
        &self.args
    }
}

impl<S> StepAction for MethodCall<S> {
    fn invoke(&self) -> Result<(), StepError> {
        let mut scenario = self
            .target
            .try_borrow_mut()
            .map_err(|_| already_borrowed(&self.method))?;
        (self.body)(&mut *scenario, &self.args)
    }
}

impl<S> fmt::Debug for MethodCall<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodCall")
            .field("method", &self.method)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Runs a self-describing method by draining its text producer.
///
/// The producer created while the title was derived is kept, so the first
/// invocation finishes that same sequence instead of calling the method again.
/// Later invocations call the method afresh. Produced text is discarded.
pub struct TextDrain<S> {
    target: SharedScenario<S>,
    method: String,
    body: Rc<DescribeFn<S>>,
    args: Vec<StepArg>,
    pending: RefCell<Option<TextProducer>>,
}

impl<S> TextDrain<S> {
    /// Bind `body` to `target` with `args`, reusing `pending` on first use.
    #[must_use]
    pub fn new(
        target: SharedScenario<S>,
        method: impl Into<String>,
        body: Rc<DescribeFn<S>>,
        args: Vec<StepArg>,
        pending: Option<TextProducer>,
    ) -> Self {
        Self {
            target,
            method: method.into(),
            body,
            args,
            pending: RefCell::new(pending),
        }
    }

    /// The resolved arguments.
    #[must_use]
    pub fn args(&self) -> &[StepArg] {
        &self.args
    }

    /// Returns `true` while the producer from title derivation is unused.
    #[must_use]
    pub fn has_pending_producer(&self) -> bool {
        self.pending
            .try_borrow()
            .is_ok_and(|pending| pending.is_some())
    }
}

impl<S> StepAction for TextDrain<S> {
    fn invoke(&self) -> Result<(), StepError> {
        // The producer borrows the scenario itself; refuse while a caller holds it.
        if self.target.try_borrow_mut().is_err() {
            return Err(already_borrowed(&self.method));
        }
        let memoized = self
            .pending
            .try_borrow_mut()
            .map_err(|_| already_borrowed(&self.method))?
            .take();
        let producer = memoized.unwrap_or_else(|| (self.body)(&self.target, &self.args));
        for item in producer {
            item?;
        }
        Ok(())
    }
}

impl<S> fmt::Debug for TextDrain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextDrain")
            .field("method", &self.method)
            .field("args", &self.args)
            .field("pending", &self.has_pending_producer())
            .finish_non_exhaustive()
    }
}
