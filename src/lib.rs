//! Salary engine with sandwich-leave deductions.
//!
//! This crate calculates monthly salaries after leave deductions, where
//! weekends and public holidays sandwiched between leave dates are counted
//! as leave, and settles each employee's month exactly once.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod settlement;
pub mod storage;
