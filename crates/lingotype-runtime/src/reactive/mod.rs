#![forbid(unsafe_code)]

//! Reactive primitives backing the language state container.

pub mod observable;

pub use observable::{Observable, Subscription};
