//! Shared scenario fixtures for stepscan behavioural tests.

use std::cell::Cell;
use std::rc::Rc;

use stepscan::{SharedScenario, StepArg, StepError, StepMethod, TextProducer, join_args};

/// Scenario state mutated by the steps under test.
#[derive(Debug, Default)]
pub struct Checkout {
    pub balance: i64,
    pub items: Vec<String>,
    pub log: Vec<String>,
}

/// A plain step that records its name and arguments in the scenario log.
pub fn recording(name: &'static str) -> StepMethod<Checkout> {
    StepMethod::plain(name, move |checkout: &mut Checkout, args: &[StepArg]| {
        checkout.log.push(format!("{name}({})", join_args(args)));
        Ok(())
    })
}

/// A plain step that always fails with `message`.
pub fn failing(name: &'static str, message: &'static str) -> StepMethod<Checkout> {
    StepMethod::plain(name, move |_: &mut Checkout, _: &[StepArg]| {
        Err(StepError::failed(message))
    })
}

/// Counts invocations of a self-describing method.
#[derive(Clone, Debug, Default)]
pub struct Invocations(Rc<Cell<u32>>);

impl Invocations {
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A self-describing step that titles itself from its first argument and
/// fills the cart while the rest of its text is drained.
pub fn cart_filler(name: &'static str, invocations: &Invocations) -> StepMethod<Checkout> {
    let invocations = invocations.clone();
    StepMethod::self_describing(
        name,
        move |target: &SharedScenario<Checkout>, args: &[StepArg]| {
            invocations.bump();
            let target = Rc::clone(target);
            let count = args.first().and_then(StepArg::as_i64).unwrap_or(1);
            let mut stage = 0_u8;
            TextProducer::new(std::iter::from_fn(move || {
                stage += 1;
                match stage {
                    1 => Some(Ok(format!("a cart with {count} items"))),
                    2 => {
                        let mut checkout = target.borrow_mut();
                        for _ in 0..count {
                            let label = checkout.items.len() + 1;
                            checkout.items.push(format!("item {label}"));
                        }
                        Some(Ok("filled the cart".to_owned()))
                    }
                    _ => None,
                }
            }))
        },
    )
}

/// A self-describing step yielding exactly `texts`.
pub fn describing(name: &'static str, texts: &'static [&'static str]) -> StepMethod<Checkout> {
    StepMethod::self_describing(name, move |_: &SharedScenario<Checkout>, _: &[StepArg]| {
        TextProducer::from_texts(texts.iter().copied())
    })
}
