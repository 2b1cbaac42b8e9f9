//! The `Context` algebra - factory operations for `RequiresContext`.
//!
//! `Context<Deps>` is a stateless namespace bound to a specific environment
//! type. It cannot be instantiated; it only constructs [`RequiresContext`]
//! containers. Because the factories take no value of type `Deps`, the
//! environment type usually has to be named explicitly:
//!
//! ```rust
//! use recontext::context::Context;
//!
//! let deps = Context::<String>::ask();
//! assert_eq!(deps.call("shared".to_string()), "shared");
//! ```

use std::marker::PhantomData;

use super::requires_context::RequiresContext;
use super::{ContextFn, SharedValue};

/// A placeholder environment for computations that never read it.
///
/// An opaque zero-sized type carrying no information. Domain logic must
/// never branch on it; it exists purely so that pipelines built from
/// [`Context::unit`] can be evaluated ergonomically via [`EMPTY`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NoDeps;

/// The process-wide placeholder environment value.
///
/// Pass it to [`RequiresContext::call`] when the computation is statically
/// known not to depend on its environment.
///
/// # Examples
///
/// ```rust
/// use recontext::context::{Context, EMPTY};
///
/// let unit = Context::unit(5);
/// assert_eq!(unit.call(EMPTY), 5);
/// ```
pub const EMPTY: NoDeps = NoDeps;

static_assertions::assert_impl_all!(NoDeps: Copy, Send, Sync);
static_assertions::const_assert_eq!(core::mem::size_of::<NoDeps>(), 0);

/// Stateless helpers for constructing [`RequiresContext`] containers bound
/// to the environment type `Deps`.
///
/// # Examples
///
/// ```rust
/// use recontext::context::{Context, RequiresContext};
///
/// #[derive(Clone)]
/// struct Deps {
///     limit: usize,
/// }
///
/// fn within_limit(text: &'static str) -> RequiresContext<Deps, bool> {
///     Context::ask().map(move |deps: Deps| text.len() <= deps.limit)
/// }
///
/// assert!(within_limit("abc").call(Deps { limit: 3 }));
/// assert!(!within_limit("abcd").call(Deps { limit: 3 }));
/// ```
pub struct Context<Deps> {
    _environment: PhantomData<fn() -> Deps>,
}

impl<Deps> Context<Deps>
where
    Deps: 'static,
{
    /// Creates a computation that returns the entire environment.
    ///
    /// Use it to reach into the ambient environment from inside a `bind`
    /// chain without threading it manually as a parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::Context;
    ///
    /// let deps = Context::<i32>::ask();
    /// assert_eq!(deps.call(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> RequiresContext<Deps, Deps> {
        RequiresContext::new(|deps| deps)
    }

    /// Creates a computation that projects a value out of the environment.
    ///
    /// A convenience over [`ask`](Context::ask) followed by
    /// [`map`](RequiresContext::map).
    ///
    /// # Arguments
    ///
    /// * `projection` - A function that extracts a value from the environment
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::Context;
    ///
    /// let length = Context::asks(|deps: String| deps.len());
    /// assert_eq!(length.call("hello".to_string()), 5);
    /// ```
    pub fn asks<A, F>(projection: F) -> RequiresContext<Deps, A>
    where
        A: 'static,
        F: ContextFn<Deps, A>,
    {
        RequiresContext::new(projection)
    }

    /// Creates a computation that ignores its environment and returns `value`.
    ///
    /// Use it to inject an already-known value into a pipeline so it can be
    /// combined with environment-dependent steps. Evaluate the result with
    /// [`EMPTY`] when no real environment exists.
    ///
    /// # Arguments
    ///
    /// * `value` - The constant value to return
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recontext::context::{Context, EMPTY};
    ///
    /// let unit = Context::unit("constant");
    /// assert_eq!(unit.call(EMPTY), "constant");
    /// ```
    pub fn unit<A>(value: A) -> RequiresContext<Deps, A>
    where
        A: Clone + SharedValue,
    {
        RequiresContext::new(move |_| value.clone())
    }
}
