//! Calculation logic for the salary engine.
//!
//! This module contains the pure calculation functions for a monthly salary:
//! day detection for weekends and public holidays, Friday-to-Monday weekend
//! bridging, the sandwich-leave day count and salary proration. The
//! [`calculate_salary`] pipeline runs them in order.

mod day_detection;
mod proration;
mod salary;
mod sandwich_leave;
mod weekend_bridge;

pub use day_detection::{DayType, get_day_type, is_non_working_day};
pub use proration::{DEDUCTION_SCALE, ProrationResult, compute_deduction};
pub use salary::calculate_salary;
pub use sandwich_leave::{
    MAX_SANDWICH_GAP, MIN_SANDWICH_GAP, SandwichLeaveResult, count_effective_leave_days,
};
pub use weekend_bridge::{FRIDAY_TO_MONDAY_DAYS, WeekendBridgeResult, bridge_weekends};
