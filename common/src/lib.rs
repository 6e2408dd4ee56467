//! Domain logic for the Create Event workspace.
//!
//! Everything here is free of DOM and timer concerns so the frontend can
//! delegate to it from its `update` functions and the behavior can be tested
//! natively.

pub mod error;
pub mod generation;
pub mod history;
pub mod model;
pub mod validation;
pub mod versions;
pub mod workspace;
