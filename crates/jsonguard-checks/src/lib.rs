//! # jsonguard-checks: Field Contracts for Request Payloads
//!
//! Checkers that validate a decoded JSON request body one key at a time.
//! Each method returns `Result<&Self, ValidationFailure>`, so checks chain
//! with `?` inside a [`ValidateJsonPayload`] implementation and the first
//! violated rule wins.
//!
//! ## Presence (`presence`)
//!
//! [`PresenceChecker`] decides required, forbidden and empty. Every key
//! checker delegates to it first.
//!
//! ## Key-Level Checks (`key_*`)
//!
//! One checker per JSON type: string, integer, float, boolean, enumeration,
//! array and JSON object. Each offers `required` and `optional`; `optional`
//! accepts an absent or null key and collapses every other failure into one
//! per-type code. Constraint checks take a [`Requirement`].
//!
//! ## Value-Level Checks (`value_*`)
//!
//! The same rules applied to bare values, used for list elements and for
//! strings that do not live under a key.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsonguard-core` internally.
//! - Checkers are stateless, `Send + Sync`, and built once per process.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Collapsed optional failures are logged at `debug` through `tracing`.

pub mod key_array;
pub mod key_boolean;
pub mod key_enum;
pub mod key_float;
pub mod key_integer;
pub mod key_object;
pub mod key_string;
pub mod payload;
pub mod presence;
pub mod value_array;
pub mod value_integer;
pub mod value_string;

pub use key_array::KeyArrayChecker;
pub use key_boolean::KeyBooleanChecker;
pub use key_enum::KeyEnumChecker;
pub use key_float::KeyFloatChecker;
pub use key_integer::KeyIntegerChecker;
pub use key_object::KeyJsonObjectChecker;
pub use key_string::KeyStringChecker;
pub use payload::ValidateJsonPayload;
pub use presence::{Presence, PresenceChecker, Requirement};
pub use value_array::ValueArrayChecker;
pub use value_integer::ValueIntegerChecker;
pub use value_string::ValueStringChecker;
