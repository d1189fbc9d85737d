//! Web front end
//!
//! The page binding runs against a mock DOM, so it is always compiled and
//! tested natively.

pub mod dom;
pub mod page;

pub use dom::{DomElement, DomEvent, MockDom};
pub use page::{CalculatorPage, ERROR_CLASS, EXPRESSION_ID, RESULT_ID};
