//! Behavioural coverage for convention matching and step materialisation.
#![expect(clippy::expect_used, reason = "tests assert scan outcomes")]

mod common;

use common::{Checkout, failing, recording};
use rstest::{fixture, rstest};
use stepscan::{
    ArgumentVariant, Convention, ExecutionOrder, ExecutionStep, ScanError, SharedScenario,
    StepError, StepMatcher, StepScanner, TitleStyle, TitleTransform, share_scenario, step_args,
};

#[fixture]
fn scanner() -> StepScanner {
    StepScanner::default()
}

#[fixture]
fn checkout() -> SharedScenario<Checkout> {
    share_scenario(Checkout::default())
}

#[rstest]
fn given_method_becomes_a_setup_step(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let steps = scanner
        .scan(&checkout, &recording("GivenAUserWithBalance"))
        .expect("scan succeeds");

    let [step] = steps.as_slice() else {
        panic!("expected exactly one step, got {steps:?}");
    };
    assert_eq!(step.title(), "A user with balance");
    assert_eq!(step.method_name(), "GivenAUserWithBalance");
    assert!(!step.asserts());
    assert_eq!(step.execution_order(), ExecutionOrder::SetupState);
    assert_eq!(step.execution_rank(), 2);
    assert!(step.should_report());
}

#[rstest]
fn then_method_with_argument_appends_it(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let method = recording("ThenTheOrderIsComplete")
        .with_variant(ArgumentVariant::new(step_args![42]));
    let steps = scanner.scan(&checkout, &method).expect("scan succeeds");

    let titles: Vec<_> = steps.iter().map(ExecutionStep::title).collect();
    assert_eq!(titles, ["The order is complete 42"]);
    assert!(steps.iter().all(ExecutionStep::asserts));
}

#[rstest]
fn template_supplies_the_whole_title(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let method = recording("ThenTheTotalIs")
        .with_variant(ArgumentVariant::new(step_args![19.99]).with_template("the total is {0}"));
    let steps = scanner.scan(&checkout, &method).expect("scan succeeds");

    let titles: Vec<_> = steps.iter().map(ExecutionStep::title).collect();
    assert_eq!(titles, ["the total is 19.99"]);
}

#[rstest]
#[case("EstablishContext")]
#[case("SetupDatabase")]
#[case("TearDown")]
#[case("Thenable")]
#[case("")]
fn unmatched_methods_produce_no_steps(
    scanner: StepScanner,
    checkout: SharedScenario<Checkout>,
    #[case] name: &'static str,
) {
    let steps = scanner.scan(&checkout, &recording(name)).expect("scan succeeds");
    assert!(steps.is_empty());
}

#[rstest]
fn matching_methods_always_yield_one_step(checkout: SharedScenario<Checkout>) {
    let scanners = [
        StepScanner::default(),
        StepScanner::default().with_title_style(TitleStyle::Lower),
    ];
    for scanner in &scanners {
        for _ in 0..2 {
            let steps = scanner
                .scan(&checkout, &recording("GivenAUserWithBalance"))
                .expect("scan succeeds");
            assert_eq!(steps.len(), 1);
        }
    }
}

#[rstest]
fn scanning_never_runs_plain_methods(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let methods = [
        recording("GivenAnEmptyCart"),
        recording("WhenTheUserPays"),
        failing("ThenTheReceiptIsPrinted", "printer jammed"),
    ];
    let steps = scanner
        .scan_all(&checkout, &methods)
        .expect("scan succeeds");
    assert_eq!(steps.len(), 3);
    assert!(checkout.borrow().log.is_empty());
}

#[rstest]
fn execution_faults_reach_the_caller_unchanged(
    scanner: StepScanner,
    checkout: SharedScenario<Checkout>,
) {
    let steps = scanner
        .scan(&checkout, &failing("ThenTheReceiptIsPrinted", "printer jammed"))
        .expect("scan succeeds");
    let step = steps.first().expect("one step");
    let err = step.execute().expect_err("step fails");
    assert!(matches!(err, StepError::Failed { ref message } if message == "printer jammed"));
}

#[rstest]
fn steps_share_the_scenario_instance(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let methods = [recording("GivenAnEmptyCart"), recording("WhenTheUserPays")];
    let steps = scanner.scan_all(&checkout, &methods).expect("scan succeeds");
    for step in &steps {
        step.execute().expect("step runs");
    }
    assert_eq!(
        checkout.borrow().log,
        ["GivenAnEmptyCart()", "WhenTheUserPays()"]
    );
}

#[rstest]
fn runners_can_order_steps_by_rank(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let methods = [
        recording("ThenTheOrderIsComplete"),
        recording("AndTheReceiptIsSent"),
        recording("WhenTheUserPays"),
        recording("GivenAUserWithBalance"),
        recording("AndGivenAnEmptyCart"),
    ];
    let mut steps = scanner.scan_all(&checkout, &methods).expect("scan succeeds");
    steps.sort_by_key(ExecutionStep::execution_order);

    let titles: Vec<_> = steps.iter().map(ExecutionStep::title).collect();
    assert_eq!(
        titles,
        [
            "A user with balance",
            "An empty cart",
            "The user pays",
            "The order is complete",
            "The receipt is sent",
        ]
    );
}

#[rstest]
fn name_titles_are_stable_across_scans(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let method = recording("WhenTheUserPays").with_variant(ArgumentVariant::new(step_args![5]));
    let first = scanner.scan(&checkout, &method).expect("scan succeeds");
    let second = scanner.scan(&checkout, &method).expect("scan succeeds");
    let titles = |steps: &[ExecutionStep]| -> Vec<String> {
        steps.iter().map(|step| step.title().to_owned()).collect()
    };
    assert_eq!(titles(&first), titles(&second));
}

#[rstest]
fn custom_transform_rewrites_name_titles(checkout: SharedScenario<Checkout>) {
    let scanner = StepScanner::default()
        .with_transform(TitleTransform::from_fn(|title| format!("{title}.")));
    let steps = scanner
        .scan(&checkout, &recording("GivenAUserWithBalance"))
        .expect("scan succeeds");
    assert_eq!(
        steps.first().map(ExecutionStep::title),
        Some("A user with balance.")
    );
}

#[rstest]
fn earlier_matchers_take_priority(checkout: SharedScenario<Checkout>) {
    let scanner = StepScanner::new([
        StepMatcher::new(Convention::prefix("And"), true, ExecutionOrder::ConsecutiveAssertion),
        StepMatcher::new(
            Convention::prefix("AndGiven"),
            false,
            ExecutionOrder::ConsecutiveSetupState,
        ),
    ]);
    let steps = scanner
        .scan(&checkout, &recording("AndGivenAnEmptyCart"))
        .expect("scan succeeds");
    let step = steps.first().expect("one step");
    assert_eq!(step.execution_order(), ExecutionOrder::ConsecutiveAssertion);
    assert_eq!(step.title(), "Given an empty cart");
}

#[rstest]
fn scan_all_stops_at_the_first_error(scanner: StepScanner, checkout: SharedScenario<Checkout>) {
    let methods = [
        recording("GivenAnEmptyCart"),
        recording("ThenTheTotalIs")
            .with_variant(ArgumentVariant::new(step_args![1]).with_template("{3}")),
        recording("WhenTheUserPays"),
    ];
    let err = scanner
        .scan_all(&checkout, &methods)
        .expect_err("template is invalid");
    assert!(matches!(err, ScanError::InvalidTemplate { .. }));
    assert_eq!(err.method_name(), "ThenTheTotalIs");
}

#[test]
fn scanners_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StepScanner>();

    let scanner = StepScanner::default();
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let checkout = share_scenario(Checkout::default());
                    let methods = [recording("GivenAnEmptyCart"), recording("WhenTheUserPays")];
                    scanner
                        .scan_all(&checkout, &methods)
                        .map(|steps| steps.len())
                        .unwrap_or_default()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_default())
            .collect()
    });
    assert_eq!(counts, [2, 2, 2, 2]);
}
