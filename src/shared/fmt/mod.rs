//! Number formatting for path data and human-readable labels.

pub mod num;
