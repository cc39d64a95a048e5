mod finance;
mod payout;

pub use finance::{FinanceGraph, FinanceOverview, GraphPoint};
pub use payout::{PayoutRequest, PayoutRequestPage, PayoutStatus};

/// "1234567" -> "1,234,567". `unsigned_abs` keeps `i64::MIN` from overflowing.
pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
