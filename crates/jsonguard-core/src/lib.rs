//! # jsonguard-core: Value Model and Failure Taxonomy
//!
//! This crate is the leaf of the jsonguard workspace. It defines the decoded
//! value tree, the exact-type classifiers, the list-structure validator,
//! range value objects, the float equality oracle and the failure taxonomy.
//! `jsonguard-checks` composes these into per-field contracts; this crate
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One value tree.** `Value` is a closed enum. Lists and objects share
//!    the `Array` container and are told apart at runtime by their keys.
//!
//! 2. **No coercion.** Classifiers never treat `"1"`, `1.0` or `true` as the
//!    integer `1`. Numbers must survive a rendering round-trip.
//!
//! 3. **Ranges validate themselves.** A range that exists is well-formed;
//!    malformed bounds are a `RangeError` at construction, not a failure at
//!    check time.
//!
//! 4. **Stable codes.** Every `FailureKind` maps to exactly one wire code
//!    and one family, in one exhaustive `match`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsonguard-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Logging goes through `tracing`; no subscriber is installed here.

pub mod classify;
pub mod config;
pub mod error;
pub mod float;
pub mod kind;
pub mod range;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use classify::check_list_structure;
pub use config::GuardConfig;
pub use error::{ConfigError, FailureReport, GuardError, RangeError, ValidationFailure};
pub use float::{EqualFloats, FloatTolerance, ToleranceFloats};
pub use kind::{FailureFamily, FailureKind, FAILURE_KIND_COUNT};
pub use range::{ArrayLengthRange, BoundViolation, FloatRange, IntValueRange, StringByteLengthRange};
pub use value::{Array, Key, Payload, Value};
