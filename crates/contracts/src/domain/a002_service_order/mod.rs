pub mod aggregate;
pub mod filter;

pub use aggregate::{LineItem, OrderHistory, ServiceOrder, TimelineEvent};
pub use filter::OrderFilter;
