//! Amortization engine: constant payment and period-by-period schedule

mod breakdown;
mod payment;
mod schedule;

pub use breakdown::{PaymentBreakdown, ScheduleSummary};
pub use payment::monthly_payment;
pub use schedule::payment_schedule;
