use serde::{Deserialize, Serialize};

/// Aggregate earnings figures returned by `/earnings/overview`.
/// Amounts are whole currency units as reported by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinanceOverview {
    pub total_earnings: i64,
    pub total_payouts: i64,
    pub pending_payouts: i64,
    pub available_balance: i64,
    pub currency: String,
}

impl FinanceOverview {
    pub fn formatted(&self, amount: i64) -> String {
        format!("{} {}", super::group_thousands(amount), self.currency)
    }
}

/// One sample of the earnings time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub date: chrono::NaiveDate,
    pub amount: i64,
}

/// Earnings time series returned by `/earnings/graph`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinanceGraph {
    pub points: Vec<GraphPoint>,
    pub currency: String,
}
