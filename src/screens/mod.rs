mod earnings;
mod payouts;

pub use earnings::EarningsScreen;
pub use payouts::PayoutsScreen;
