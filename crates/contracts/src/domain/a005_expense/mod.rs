pub mod fields;
pub mod filter;

pub use fields::{Categoria, FormaPagamento};
pub use filter::FinanceFilter;
