pub mod movement;
pub mod product;

pub use movement::{MovementKind, MovementSource, StockMovement};
pub use product::Product;
