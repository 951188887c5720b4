pub mod a001_quote;
pub mod a002_service_order;
pub mod a003_product_stock;
pub mod a004_sales_goal;
pub mod a005_expense;
pub mod a006_production_board;
