//! Quote wizard domain: draft DTO, pure pricing and per-step validation.
//!
//! Everything here is synchronous and DOM-free; the frontend view model only
//! wires signals to these functions.

pub mod draft;
pub mod pricing;
pub mod validate;

pub use draft::{ClientType, ColorOption, DiscountMode, MeasurementUnit, QuoteDraft};
pub use pricing::{compute_pricing, unit_lock, PricingResult, UnitLock};
pub use validate::{validate_step, StepErrors, WizardStep};
