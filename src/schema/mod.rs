//! Template record validation.
//!
//! Rules run against the raw JSON value so that key order, integer-vs-float literals and unknown
//! keys are still observable.

pub(crate) mod validate;
