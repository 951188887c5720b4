//! Sales Wizard UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: QuoteWizardVm with RwSignals
//! - view.rs: Main component QuoteWizard

mod model;
mod view;
mod view_model;

pub use view::QuoteWizard;
pub use view_model::QuoteWizardVm;
