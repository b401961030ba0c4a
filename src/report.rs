//! Plain-text salary slips.
//!
//! A slip shows the fields of a settled [`SalaryRecord`] with money rounded
//! to two decimal places, followed by the configured policy note and footer.
//! Rounding happens only here; stored records keep full precision.

use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ReportSettings;
use crate::models::SalaryRecord;

/// Width used for the rule lines and for wrapping the policy note.
pub const SLIP_WIDTH: usize = 72;

const LABEL_WIDTH: usize = 22;

/// A renderable salary slip for one settled record.
///
/// # Example
///
/// ```
/// use salary_engine::config::ReportSettings;
/// use salary_engine::models::SalaryRecord;
/// use salary_engine::report::SalarySlip;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     name: "John Doe".to_string(),
///     role: "Employee".to_string(),
///     month: "2025-01".parse().unwrap(),
///     selected_leave_dates: vec![],
///     effective_leave_days: 0,
///     deduction: Decimal::ZERO,
///     effective_salary: Decimal::new(3100, 0),
/// };
/// let settings = ReportSettings::default();
/// let slip = SalarySlip::new(&record, &settings);
///
/// assert_eq!(slip.file_name(), "John_Doe_2025-01.txt");
/// assert!(slip.render().contains("RS 3100.00"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SalarySlip<'a> {
    record: &'a SalaryRecord,
    settings: &'a ReportSettings,
}

impl<'a> SalarySlip<'a> {
    /// Creates a slip for the record using the given report settings.
    pub fn new(record: &'a SalaryRecord, settings: &'a ReportSettings) -> Self {
        Self { record, settings }
    }

    /// File name in the form `Employee_Name_YYYY-MM.txt`.
    pub fn file_name(&self) -> String {
        format!("{}_{}.txt", file_safe(&self.record.name), self.record.month)
    }

    /// Renders the slip as text.
    pub fn render(&self) -> String {
        let record = self.record;
        let rule = "=".repeat(SLIP_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{}", center(&self.settings.title, SLIP_WIDTH));
        let _ = writeln!(out, "{}", rule);
        self.field(&mut out, "Employee Name:", &record.name);
        self.field(&mut out, "Role:", &record.role);
        self.field(&mut out, "Month:", &record.month.to_string());
        self.field(
            &mut out,
            "Effective Leave Days:",
            &record.effective_leave_days.to_string(),
        );
        self.field(&mut out, "Deduction:", &self.money(record.deduction));
        self.field(&mut out, "Effective Salary:", &self.money(record.effective_salary));

        if !record.selected_leave_dates.is_empty() {
            let dates: Vec<String> = record
                .selected_leave_dates
                .iter()
                .map(ToString::to_string)
                .collect();
            let _ = writeln!(out, "Leave Dates:");
            for line in wrap(&dates.join(", "), SLIP_WIDTH - 2) {
                let _ = writeln!(out, "  {}", line);
            }
        }
        let _ = writeln!(out, "{}", rule);

        if !self.settings.policy_note.trim().is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Sandwich Leave Policy");
            for line in wrap(&self.settings.policy_note, SLIP_WIDTH) {
                let _ = writeln!(out, "{}", line);
            }
        }

        if !self.settings.footer.trim().is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", center(&self.settings.footer, SLIP_WIDTH));
        }

        out
    }

    fn field(&self, out: &mut String, label: &str, value: &str) {
        let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);
    }

    fn money(&self, amount: Decimal) -> String {
        format!("{} {}", self.settings.currency_label, format_money(amount))
    }
}

/// Formats an amount with exactly two decimal places, rounding half away
/// from zero.
///
/// ```
/// use salary_engine::report::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(3214285714, 7)), "321.43");
/// assert_eq!(format_money(Decimal::new(200, 0)), "200.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Replaces whitespace runs with `_` and trims the ends.
fn file_safe(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record() -> SalaryRecord {
        SalaryRecord {
            name: "Alice  Khan".to_string(),
            role: "Accountant".to_string(),
            month: "2025-02".parse().unwrap(),
            selected_leave_dates: vec![
                "2025-02-04".parse().unwrap(),
                "2025-02-06".parse().unwrap(),
            ],
            effective_leave_days: 3,
            deduction: dec("535.714285714285714286"),
            effective_salary: dec("4464.285714285714285714"),
        }
    }

    #[test]
    fn test_file_name_replaces_whitespace() {
        let settings = ReportSettings::default();
        let record = record();
        assert_eq!(
            SalarySlip::new(&record, &settings).file_name(),
            "Alice_Khan_2025-02.txt"
        );
    }

    #[test]
    fn test_file_safe_collapses_whitespace_runs() {
        assert_eq!(file_safe("  Ali   Raza Khan "), "Ali_Raza_Khan");
        assert_eq!(file_safe("Bilal\tAhmed"), "Bilal_Ahmed");
    }

    #[test]
    fn test_render_contains_all_fields() {
        let settings = ReportSettings::default();
        let record = record();
        let text = SalarySlip::new(&record, &settings).render();

        assert!(text.contains("Employee Name:        Alice  Khan"));
        assert!(text.contains("Role:                 Accountant"));
        assert!(text.contains("Month:                2025-02"));
        assert!(text.contains("Effective Leave Days: 3"));
        assert!(text.contains("Deduction:            RS 535.71"));
        assert!(text.contains("Effective Salary:     RS 4464.29"));
        assert!(text.contains("2025-02-04, 2025-02-06"));
        assert!(text.contains(&settings.footer));
    }

    #[test]
    fn test_render_omits_empty_sections() {
        let settings = ReportSettings {
            policy_note: String::new(),
            footer: " ".to_string(),
            ..ReportSettings::default()
        };
        let mut record = record();
        record.selected_leave_dates.clear();

        let text = SalarySlip::new(&record, &settings).render();
        assert!(!text.contains("Leave Dates:"));
        assert!(!text.contains("Sandwich Leave Policy"));
    }

    #[test]
    fn test_custom_currency_label() {
        let settings = ReportSettings {
            currency_label: "PKR".to_string(),
            ..ReportSettings::default()
        };
        let record = record();
        let text = SalarySlip::new(&record, &settings).render();
        assert!(text.contains("PKR 535.71"));
    }

    #[test]
    fn test_format_money_rounding() {
        assert_eq!(format_money(dec("0.005")), "0.01");
        assert_eq!(format_money(dec("-200")), "-200.00");
        assert_eq!(format_money(dec("1.994")), "1.99");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert_eq!(lines, vec!["one two", "three", "four five", "six"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
