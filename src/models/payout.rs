use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl PayoutStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "Pending",
            PayoutStatus::Approved => "Approved",
            PayoutStatus::Rejected => "Rejected",
            PayoutStatus::Paid => "Paid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutRequest {
    pub id: String,
    pub requester: String,
    pub amount: i64,
    pub currency: String,
    pub status: PayoutStatus,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PayoutRequest {
    pub fn formatted_amount(&self) -> String {
        format!("{} {}", super::group_thousands(self.amount), self.currency)
    }
}

/// One page of payout requests as returned by `/withdrawal/requests`.
/// `total` is the server-side count across all pages after filtering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutRequestPage {
    pub requests: Vec<PayoutRequest>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}