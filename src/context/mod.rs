//! Environment-dependent computation containers.
//!
//! The [`RequiresContext`] container wraps exactly one pure function from an
//! environment to a result and never evaluates it until it is explicitly
//! called. Composition (`map`, `bind`, `lift`) builds bigger containers out
//! of smaller ones; the environment is supplied once, at the call boundary,
//! and the same value is observed by every step of a bound chain.
//!
//! The [`Context`] type is the stateless companion algebra: `ask` reaches
//! into the ambient environment, `unit` injects an already-known value, and
//! [`EMPTY`] is the placeholder environment for pipelines that do not read
//! their environment at all.
//!
//! # Laws
//!
//! `RequiresContext` satisfies the Functor and Monad laws:
//!
//! - Identity: `container.map(|x| x) == container`
//! - Composition: `container.map(f).map(g) == container.map(|x| g(f(x)))`
//! - Left Identity: `Context::unit(a).bind(f) == f(a)`
//! - Right Identity: `container.bind(Context::unit) == container`
//! - Associativity: `container.bind(f).bind(g) == container.bind(|x| f(x).bind(g))`
//!
//! All equalities are extensional: both sides produce the same result for
//! every environment.
//!
//! # Example
//!
//! ```rust
//! use recontext::context::{Context, RequiresContext};
//!
//! fn first_step(flag: bool) -> RequiresContext<f64, f64> {
//!     RequiresContext::new(move |deps: f64| if flag { deps } else { -deps })
//! }
//!
//! assert_eq!(first_step(true).map(|number| number * 10.0).call(2.5), 25.0);
//! assert_eq!(first_step(false).map(|number| number * 10.0).call(0.1), -1.0);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Capture Bounds
// =============================================================================

/// Values that may be captured into a container's shared function.
///
/// With the `arc` feature enabled this requires `Send + Sync`, because the
/// wrapped function lives behind an `Arc` and may be called from any thread.
/// Without it, only `'static` is required.
///
/// Blanket-implemented for every qualifying type; never implement it
/// manually.
#[cfg(feature = "arc")]
pub trait SharedValue: Send + Sync + 'static {}

#[cfg(feature = "arc")]
impl<T> SharedValue for T where T: Send + Sync + 'static {}

/// Values that may be captured into a container's shared function.
///
/// With the `arc` feature enabled this requires `Send + Sync`, because the
/// wrapped function lives behind an `Arc` and may be called from any thread.
/// Without it, only `'static` is required.
///
/// Blanket-implemented for every qualifying type; never implement it
/// manually.
#[cfg(not(feature = "arc"))]
pub trait SharedValue: 'static {}

#[cfg(not(feature = "arc"))]
impl<T> SharedValue for T where T: 'static {}

/// Functions that may be stored inside a [`RequiresContext`].
///
/// This is a bound alias for `Fn(Input) -> Output` plus the capture
/// requirements of [`SharedValue`]. The function must additionally be pure:
/// no observable side effects, no exceptions thrown for control flow. The
/// library does not enforce purity; it is a caller contract that the
/// composition laws rely on.
///
/// Blanket-implemented for every qualifying closure or function pointer.
pub trait ContextFn<Input, Output>: Fn(Input) -> Output + SharedValue {}

impl<Input, Output, F> ContextFn<Input, Output> for F where
    F: Fn(Input) -> Output + SharedValue
{
}

mod algebra;
mod requires_context;

pub use algebra::Context;
pub use algebra::EMPTY;
pub use algebra::NoDeps;
pub use requires_context::RequiresContext;
