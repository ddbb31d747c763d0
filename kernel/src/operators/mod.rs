//! Operators module: move enumeration and application.

pub mod apply;
