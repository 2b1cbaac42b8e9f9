//! Unit tests for the `RequiresContext` container and `Context` algebra.
//!
//! Tests basic functionality including:
//! - Creation and evaluation
//! - Functor operation (map)
//! - Monad operation (bind)
//! - Lifting ordinary functions
//! - Algebra factories (ask, asks, unit) and the placeholder environment

use recontext::context::{Context, EMPTY, RequiresContext};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Basic Construction and Evaluation Tests
// =============================================================================

#[rstest]
fn new_and_call_basic() {
    let computation: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps * 2);
    assert_eq!(computation.call(21), 42);
}

#[rstest]
fn new_and_call_with_string_environment() {
    let computation: RequiresContext<String, usize> =
        RequiresContext::new(|deps: String| deps.len());
    assert_eq!(computation.call("hello".to_string()), 5);
}

#[rstest]
fn new_and_call_with_struct_environment() {
    #[derive(Clone)]
    struct Settings {
        port: u16,
        host: String,
    }

    let computation: RequiresContext<Settings, String> =
        RequiresContext::new(|settings: Settings| format!("{}:{}", settings.host, settings.port));

    let settings = Settings {
        port: 8080,
        host: "localhost".to_string(),
    };

    assert_eq!(computation.call(settings), "localhost:8080");
}

#[rstest]
fn call_is_repeatable_with_independent_results() {
    let computation: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps + 1)
        .map(|value| value * 2)
        .bind(|value| RequiresContext::new(move |deps: i32| value - deps));

    assert_eq!(computation.call(3), 5);
    assert_eq!(computation.call(3), 5);
    assert_eq!(computation.call(10), 12);
}

// =============================================================================
// Laziness Tests
// =============================================================================

#[rstest]
fn construction_never_invokes_the_function() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&invocations);

    let _computation = RequiresContext::new(move |deps: i32| {
        probe.fetch_add(1, Ordering::SeqCst);
        deps
    });

    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[rstest]
fn composition_never_invokes_the_function() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&invocations);

    let computation = RequiresContext::new(move |deps: i32| {
        probe.fetch_add(1, Ordering::SeqCst);
        deps
    });

    let lifted = RequiresContext::<i32, i32>::lift(|value| value + 1);
    let composed = lifted(computation)
        .map(|value| value * 2)
        .bind(|value| Context::unit(value));
    assert_eq!(invocations.load(Ordering::SeqCst), 0);

    composed.call(1);
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Map Tests
// =============================================================================

#[rstest]
#[case(true, 2.5, 25.0)]
#[case(false, 0.1, -1.0)]
fn map_composes_over_the_result(#[case] flag: bool, #[case] deps: f64, #[case] expected: f64) {
    fn first_step(flag: bool) -> RequiresContext<f64, f64> {
        RequiresContext::new(move |deps: f64| if flag { deps } else { -deps })
    }

    assert_eq!(first_step(flag).map(|number| number * 10.0).call(deps), expected);
}

#[rstest]
fn map_changes_the_result_type() {
    let computation: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps);
    let mapped = computation.map(|value| value.to_string());
    assert_eq!(mapped.call(42), "42");
}

// =============================================================================
// Bind Tests
// =============================================================================

#[rstest]
#[case(true, 1.0, ">=")]
#[case(false, 2.0, "<")]
fn bind_chains_environment_dependent_steps(
    #[case] flag: bool,
    #[case] deps: f64,
    #[case] expected: &str,
) {
    fn first_step(flag: bool) -> RequiresContext<f64, f64> {
        RequiresContext::new(move |deps: f64| if flag { deps } else { -deps })
    }

    fn second_step(number: f64) -> RequiresContext<f64, &'static str> {
        RequiresContext::new(move |deps| if number >= deps { ">=" } else { "<" })
    }

    assert_eq!(first_step(flag).bind(second_step).call(deps), expected);
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(-3)]
fn bind_threads_the_identical_environment_into_both_sides(#[case] deps: i32) {
    let observed = Context::<i32>::ask()
        .bind(|outer| Context::<i32>::ask().map(move |inner| (outer, inner)));

    assert_eq!(observed.call(deps), (deps, deps));
}

// =============================================================================
// Lift Tests
// =============================================================================

#[rstest]
fn lift_turns_an_ordinary_function_into_a_container_function() {
    fn example(argument: i32) -> f64 {
        f64::from(argument) / 2.0
    }

    let lifted = RequiresContext::lift(example);
    let container = lifted(Context::unit(2));
    assert_eq!(container.call(EMPTY), 1.0);
}

// =============================================================================
// Algebra Tests
// =============================================================================

#[rstest]
#[case(0)]
#[case(42)]
#[case(-42)]
fn ask_is_the_identity_on_the_environment(#[case] deps: i32) {
    assert_eq!(Context::<i32>::ask().call(deps), deps);
}

#[rstest]
fn asks_projects_out_of_the_environment() {
    #[derive(Clone)]
    struct Settings {
        port: u16,
    }

    let port = Context::asks(|settings: Settings| settings.port);
    assert_eq!(port.call(Settings { port: 8080 }), 8080);
}

#[rstest]
fn unit_ignores_distinct_environments() {
    let unit = Context::<i32>::unit(100);
    assert_eq!(unit.call(-1), 100);
    assert_eq!(unit.call(1), 100);
}

#[rstest]
fn unit_evaluates_with_the_placeholder_environment() {
    let unit = Context::unit(5);
    assert_eq!(unit.call(EMPTY), 5);
}

// =============================================================================
// Dependency Injection Scenario
// =============================================================================

#[rstest]
#[case("abc", 2, "ok")]
#[case("abcd", 5, "error")]
fn ask_reaches_the_ambient_environment_inside_bind(
    #[case] text: &'static str,
    #[case] limit: usize,
    #[case] expected: &str,
) {
    #[derive(Clone)]
    struct Deps {
        message: String,
        limit: usize,
    }

    fn render(long_enough: bool) -> RequiresContext<Deps, String> {
        RequiresContext::new(move |deps: Deps| {
            if long_enough {
                deps.message
            } else {
                "error".to_string()
            }
        })
    }

    fn classify(text: &'static str) -> RequiresContext<Deps, String> {
        Context::ask().bind(move |deps: Deps| render(text.len() > deps.limit))
    }

    let deps = Deps {
        message: "ok".to_string(),
        limit,
    };
    assert_eq!(classify(text).call(deps), expected);
}
