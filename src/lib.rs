//! # recontext
//!
//! Deferred, environment-dependent computation for Rust.
//!
//! ## Overview
//!
//! This library provides a single container, [`RequiresContext`], that wraps
//! a pure function from an immutable environment to a result, together with
//! the algebra needed to compose such functions (`map`, `bind`, `lift`,
//! `ask`, `unit`) without ever supplying the environment until the caller
//! chooses to. It is a typed dependency-injection and lazy-evaluation
//! primitive: business logic is expressed as a pipeline of
//! environment-consuming steps, and the environment is threaded through
//! automatically without any step being able to mutate it.
//!
//! [`RequiresContext`]: crate::context::RequiresContext
//!
//! ## Feature Flags
//!
//! - `arc`: store the wrapped function behind `Arc` instead of `Rc`, making
//!   containers `Send + Sync` at the cost of atomic reference counting
//!
//! ## Example
//!
//! ```rust
//! use recontext::prelude::*;
//!
//! #[derive(Clone)]
//! struct Settings {
//!     greeting: String,
//! }
//!
//! let pipeline: RequiresContext<Settings, String> = Context::ask()
//!     .map(|settings: Settings| settings.greeting)
//!     .bind(|greeting| Context::asks(move |_: Settings| format!("{greeting}!")));
//!
//! let settings = Settings {
//!     greeting: "hello".to_string(),
//! };
//! assert_eq!(pipeline.call(settings), "hello!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and constants.
///
/// # Usage
///
/// ```rust
/// use recontext::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::*;
}

pub mod context;
