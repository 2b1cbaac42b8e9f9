//! The `RequiresContext` container - deferred environment-dependent
//! computation.
//!
//! `RequiresContext<Deps, A>` encapsulates a pure function `Deps -> A`,
//! where `Deps` is the environment type and `A` is the result type. Wrapping
//! the function in a container lets us compose many such computations while
//! implicitly threading the environment through all of them, and lets us
//! delay evaluation until the caller supplies a concrete environment.
//!
//! The container wraps only functions, never plain values; use
//! [`Context::unit`](super::Context::unit) to inject an already-known value
//! into a pipeline.
//!
//! # Laziness
//!
//! Construction and composition never invoke the wrapped function. Only
//! [`call`](RequiresContext::call) does. A failure raised by a composed
//! function therefore surfaces exactly at the call boundary, never earlier,
//! and propagates unmodified: the container neither catches nor wraps it.

use super::{ContextFn, ReferenceCounter, SharedValue};

#[cfg(feature = "arc")]
type RunFunction<Deps, A> = ReferenceCounter<dyn Fn(Deps) -> A + Send + Sync>;

#[cfg(not(feature = "arc"))]
type RunFunction<Deps, A> = ReferenceCounter<dyn Fn(Deps) -> A>;

/// A container for computations that depend on an environment.
///
/// `RequiresContext<Deps, A>` represents a computation that, given an
/// environment of type `Deps`, produces a value of type `A`. The environment
/// is immutable and is shared by every step of a composed pipeline.
///
/// The container is immutable: every combinator returns a new container and
/// leaves its operands untouched. Evaluation is repeatable; calling the same
/// container twice with the same environment yields the same result, with no
/// caching and no cross-call state.
///
/// # Type Parameters
///
/// - `Deps`: The environment type (read-only context)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use recontext::context::{Context, RequiresContext};
///
/// let computation: RequiresContext<i32, i32> =
///     Context::ask().bind(|deps: i32| Context::unit(deps * 2));
///
/// assert_eq!(computation.call(21), 42);
/// ```
pub struct RequiresContext<Deps, A>
where
    Deps: 'static,
    A: 'static,
{
    /// The wrapped function from environment to result.
    /// Reference-counted so containers can be cheaply cloned.
    run_function: RunFunction<Deps, A>,
}

impl<Deps, A> RequiresContext<Deps, A>
where
    Deps: 'static,
    A: 'static,
{
    /// Creates a new container from a function.
    ///
    /// The function is stored unevaluated. It must be pure; the library does
    /// not (and cannot) check this, but the composition laws depend on it.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes an environment and produces a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::RequiresContext;
    ///
    /// let computation: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps * 2);
    /// assert_eq!(computation.call(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: ContextFn<Deps, A>,
    {
        Self {
            run_function: ReferenceCounter::new(function),
        }
    }

    /// Evaluates the wrapped function with the given environment.
    ///
    /// This is the single evaluation boundary: nothing else in the container
    /// ever invokes the wrapped function. Whatever the function does on
    /// failure (panics, returns a failure-carrying value of some other type)
    /// propagates unmodified.
    ///
    /// # Arguments
    ///
    /// * `deps` - The environment to evaluate the computation with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::RequiresContext;
    ///
    /// let computation: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps + 1);
    /// assert_eq!(computation.call(41), 42);
    /// // The same container can be evaluated any number of times
    /// assert_eq!(computation.call(0), 1);
    /// ```
    pub fn call(&self, deps: Deps) -> A {
        (self.run_function)(deps)
    }

    /// Composes a function over the result of this container.
    ///
    /// This is the Functor operation. The new container evaluates `self`
    /// with the environment and applies `function` to the result; nothing is
    /// evaluated until the new container is called.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::RequiresContext;
    ///
    /// fn first_step(flag: bool) -> RequiresContext<f64, f64> {
    ///     RequiresContext::new(move |deps: f64| if flag { deps } else { -deps })
    /// }
    ///
    /// assert_eq!(first_step(true).map(|number| number * 10.0).call(2.5), 25.0);
    /// assert_eq!(first_step(false).map(|number| number * 10.0).call(0.1), -1.0);
    /// ```
    pub fn map<B, F>(self, function: F) -> RequiresContext<Deps, B>
    where
        F: ContextFn<A, B>,
        B: 'static,
    {
        let run_function = self.run_function;
        RequiresContext::new(move |deps| function((run_function)(deps)))
    }

    /// Composes this container with a function returning another container.
    ///
    /// This is the Monad operation, and the defining property of the
    /// abstraction: the *same* environment is threaded into both this
    /// container and the container produced by `function`, so every step in
    /// a bound chain observes the identical environment value.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and produces a new container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::RequiresContext;
    ///
    /// fn first_step(flag: bool) -> RequiresContext<f64, f64> {
    ///     RequiresContext::new(move |deps: f64| if flag { deps } else { -deps })
    /// }
    ///
    /// fn second_step(number: f64) -> RequiresContext<f64, &'static str> {
    ///     RequiresContext::new(move |deps| if number >= deps { ">=" } else { "<" })
    /// }
    ///
    /// assert_eq!(first_step(true).bind(second_step).call(1.0), ">=");
    /// assert_eq!(first_step(false).bind(second_step).call(2.0), "<");
    /// ```
    pub fn bind<B, F>(self, function: F) -> RequiresContext<Deps, B>
    where
        F: ContextFn<A, RequiresContext<Deps, B>>,
        B: 'static,
        Deps: Clone,
    {
        let run_function = self.run_function;
        RequiresContext::new(move |deps: Deps| {
            let value = (run_function)(deps.clone());
            function(value).call(deps)
        })
    }

    /// Lifts an ordinary function into the container's function space.
    ///
    /// Turns a function `A -> B` into a reusable function
    /// `RequiresContext<Deps, A> -> RequiresContext<Deps, B>`. Works like
    /// [`map`](RequiresContext::map), but with inverse semantics: the
    /// function comes first, containers later.
    ///
    /// # Arguments
    ///
    /// * `function` - The ordinary function to lift
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::{Context, EMPTY, NoDeps, RequiresContext};
    ///
    /// let halve = RequiresContext::<NoDeps, i32>::lift(|value| f64::from(value) / 2.0);
    /// let container = halve(Context::unit(2));
    /// assert_eq!(container.call(EMPTY), 1.0);
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> RequiresContext<Deps, B>
    where
        F: ContextFn<A, B> + Clone,
        B: 'static,
    {
        move |container: Self| container.map(function.clone())
    }

    /// Combines two containers using a binary function.
    ///
    /// Both containers observe the same environment; neither is evaluated
    /// until the combined container is called.
    ///
    /// # Arguments
    ///
    /// * `other` - The second container
    /// * `function` - A function that combines the results
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::RequiresContext;
    ///
    /// let first: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps);
    /// let second: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps * 2);
    /// let combined = first.map2(second, |a, b| a + b);
    /// assert_eq!(combined.call(10), 30); // 10 + 20
    /// ```
    pub fn map2<B, C, F>(self, other: RequiresContext<Deps, B>, function: F) -> RequiresContext<Deps, C>
    where
        F: Fn(A, B) -> C + SharedValue,
        B: 'static,
        C: 'static,
        Deps: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        RequiresContext::new(move |deps: Deps| {
            let a = (self_function)(deps.clone());
            let b = (other_function)(deps);
            function(a, b)
        })
    }

    /// Combines two containers into a tuple.
    ///
    /// # Arguments
    ///
    /// * `other` - The second container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::{Context, RequiresContext};
    ///
    /// let first: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps);
    /// let second: RequiresContext<i32, &str> = Context::unit("hello");
    /// assert_eq!(first.product(second).call(42), (42, "hello"));
    /// ```
    #[must_use]
    pub fn product<B>(self, other: RequiresContext<Deps, B>) -> RequiresContext<Deps, (A, B)>
    where
        B: 'static,
        Deps: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates a computation with a modified view of the environment.
    ///
    /// The modifier transforms the outer environment into the environment
    /// seen by the inner computation. The environment value itself is never
    /// mutated; the modification happens afresh on every call.
    ///
    /// # Arguments
    ///
    /// * `modifier` - A function that transforms the environment
    /// * `computation` - The computation to evaluate with the modified environment
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::RequiresContext;
    ///
    /// let computation: RequiresContext<i32, i32> = RequiresContext::new(|deps| deps * 2);
    /// let widened = RequiresContext::local(|deps| deps + 10, computation);
    /// assert_eq!(widened.call(5), 30); // (5 + 10) * 2
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: ContextFn<Deps, Deps>,
    {
        let run_function = computation.run_function;
        Self::new(move |deps| (run_function)(modifier(deps)))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<Deps, A> Clone for RequiresContext<Deps, A>
where
    Deps: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<Deps, A> std::fmt::Display for RequiresContext<Deps, A>
where
    Deps: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<RequiresContext>")
    }
}

// =============================================================================
// Thread-Safety Guarantees
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RequiresContext<i32, String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(RequiresContext<i32, String>: Send, Sync);
