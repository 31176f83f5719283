//! Digit-generation strategies.
//!
//! `compensated` covers the whole positive finite range with double-double
//! interval arithmetic; `exact` handles the bands where the work can be done
//! in integers end to end. The entry points in the crate root pick between
//! them per input.

pub mod compensated;
pub mod exact;
