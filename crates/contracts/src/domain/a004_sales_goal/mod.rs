pub mod calendar;
pub mod distribution;
pub mod goals;
pub mod sales;

pub use calendar::{has_invalid_holiday, parse_holidays, sanitize_holidays, working_day_count};
pub use distribution::{distribution_status, DistributionStatus};
pub use goals::{GoalsPageData, SellerGoal};
pub use sales::{UserSale, UserSalesResponse};
