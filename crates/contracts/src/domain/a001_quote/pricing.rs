use super::draft::{ColorOption, DiscountMode, MeasurementUnit, QuoteDraft};
use serde::{Deserialize, Serialize};

/// Discount share of the subtotal above which the UI shows a non-blocking
/// warning. The boundary itself does not warn.
pub const HIGH_DISCOUNT_RATIO: f64 = 0.15;

/// Derived price preview. Never stored; recomputed on every relevant input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Area (m²) or volume (m³) of a single piece.
    pub measure: f64,
    pub unit_price: f64,
    /// measure × unit price × quantity.
    pub base_value: f64,
    pub surcharge: f64,
    /// Discount converted to R$, whatever the input mode.
    pub discount_applied: f64,
    /// max(0, base + surcharge − discount).
    pub final_value: f64,
    /// Discount exceeds 15% of the subtotal (strictly).
    pub high_discount: bool,
}

/// How the unit selector must behave for a given color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLock {
    /// Both prices registered; user choice preserved.
    Free,
    ForceM2,
    ForceM3,
    /// No price registered for either unit; selector locked, error shown.
    NoPrice,
}

impl UnitLock {
    /// Unit the selector must be set to, when the lock forces one.
    pub fn forced_unit(&self) -> Option<MeasurementUnit> {
        match self {
            UnitLock::ForceM2 => Some(MeasurementUnit::M2),
            UnitLock::ForceM3 => Some(MeasurementUnit::M3),
            UnitLock::Free | UnitLock::NoPrice => None,
        }
    }
}

/// Unit/color lock policy, re-evaluated on every color selection change.
pub fn unit_lock(color: &ColorOption) -> UnitLock {
    match (color.preco_m2 > 0.0, color.preco_m3 > 0.0) {
        (true, true) => UnitLock::Free,
        (true, false) => UnitLock::ForceM2,
        (false, true) => UnitLock::ForceM3,
        (false, false) => UnitLock::NoPrice,
    }
}

/// Computes the live price preview from the draft and the selected color.
///
/// Quantity is applied exactly once, at the base-value step. For volume
/// pricing the measure is the strict product of the three dimensions, so a
/// missing third dimension zeroes the base instead of silently degrading to
/// an area.
pub fn compute_pricing(draft: &QuoteDraft, color: Option<&ColorOption>) -> PricingResult {
    let measure = match draft.tipo_medida {
        MeasurementUnit::M2 => draft.dim_1 * draft.dim_2,
        MeasurementUnit::M3 => draft.dim_1 * draft.dim_2 * draft.dim_3,
    };

    let unit_price = color.map(|c| c.price_for(draft.tipo_medida)).unwrap_or(0.0);

    let base_value = measure * unit_price * f64::from(draft.qtd_pecas);
    let surcharge = draft.input_acrescimo.max(0.0);
    let subtotal = base_value + surcharge;

    let discount_applied = match draft.tipo_desconto {
        DiscountMode::Percent => subtotal * (draft.input_desconto / 100.0),
        DiscountMode::Amount => draft.input_desconto,
    }
    .max(0.0);

    let final_value = (subtotal - discount_applied).max(0.0);
    let high_discount = subtotal > 0.0 && discount_applied / subtotal > HIGH_DISCOUNT_RATIO;

    PricingResult {
        measure,
        unit_price,
        base_value,
        surcharge,
        discount_applied,
        final_value,
        high_discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(m2: f64, m3: f64) -> ColorOption {
        ColorOption {
            id: 1,
            nome: "Preto Fosco".to_string(),
            preco_m2: m2,
            preco_m3: m3,
        }
    }

    fn draft() -> QuoteDraft {
        QuoteDraft {
            dim_1: 2.0,
            dim_2: 3.0,
            qtd_pecas: 1,
            ..QuoteDraft::default()
        }
    }

    #[test]
    fn test_area_pricing_formula() {
        let mut d = draft();
        d.qtd_pecas = 4;
        d.input_acrescimo = 10.0;
        d.input_desconto = 5.0;
        let c = color(12.5, 0.0);

        let p = compute_pricing(&d, Some(&c));
        assert_eq!(p.measure, 6.0);
        assert_eq!(p.base_value, 2.0 * 3.0 * 4.0 * 12.5);
        assert_eq!(p.final_value, p.base_value + 10.0 - 5.0);
    }

    #[test]
    fn test_volume_with_zero_third_dimension_is_zero() {
        let mut d = draft();
        d.tipo_medida = MeasurementUnit::M3;
        d.dim_3 = 0.0;
        let c = color(0.0, 80.0);

        let p = compute_pricing(&d, Some(&c));
        assert_eq!(p.measure, 0.0);
        assert_eq!(p.base_value, 0.0);
    }

    #[test]
    fn test_discount_modes() {
        let mut d = draft();
        d.input_acrescimo = 0.0;
        d.dim_1 = 10.0;
        d.dim_2 = 1.0;
        let c = color(10.0, 0.0); // subtotal = 100

        d.tipo_desconto = DiscountMode::Percent;
        d.input_desconto = 10.0;
        assert_eq!(compute_pricing(&d, Some(&c)).discount_applied, 10.0);

        d.tipo_desconto = DiscountMode::Amount;
        d.input_desconto = 10.0;
        assert_eq!(compute_pricing(&d, Some(&c)).discount_applied, 10.0);
    }

    #[test]
    fn test_final_value_never_negative() {
        let mut d = draft();
        d.tipo_desconto = DiscountMode::Amount;
        d.input_desconto = 10_000.0;
        let c = color(5.0, 0.0);

        let p = compute_pricing(&d, Some(&c));
        assert_eq!(p.final_value, 0.0);
    }

    #[test]
    fn test_high_discount_boundary_is_exclusive() {
        let mut d = draft();
        d.dim_1 = 10.0;
        d.dim_2 = 1.0;
        let c = color(10.0, 0.0); // subtotal = 100
        d.tipo_desconto = DiscountMode::Amount;

        d.input_desconto = 15.0; // exactly 15%
        assert!(!compute_pricing(&d, Some(&c)).high_discount);

        d.input_desconto = 15.01;
        assert!(compute_pricing(&d, Some(&c)).high_discount);
    }

    #[test]
    fn test_no_warning_on_zero_subtotal() {
        let mut d = draft();
        d.dim_1 = 0.0;
        d.tipo_desconto = DiscountMode::Amount;
        d.input_desconto = 50.0;

        let p = compute_pricing(&d, None);
        assert!(!p.high_discount);
        assert_eq!(p.final_value, 0.0);
    }

    #[test]
    fn test_missing_price_for_active_unit_is_zero() {
        let mut d = draft();
        d.tipo_medida = MeasurementUnit::M3;
        d.dim_3 = 1.0;
        let c = color(30.0, 0.0);

        let p = compute_pricing(&d, Some(&c));
        assert_eq!(p.unit_price, 0.0);
        assert_eq!(p.base_value, 0.0);
    }

    #[test]
    fn test_unit_lock_table() {
        assert_eq!(unit_lock(&color(10.0, 20.0)), UnitLock::Free);
        assert_eq!(unit_lock(&color(10.0, 0.0)), UnitLock::ForceM2);
        assert_eq!(unit_lock(&color(0.0, 50.0)), UnitLock::ForceM3);
        assert_eq!(unit_lock(&color(0.0, 0.0)), UnitLock::NoPrice);
    }

    #[test]
    fn test_forced_unit_feeds_calculator() {
        let c = color(0.0, 50.0);
        let lock = unit_lock(&c);
        assert_eq!(lock.forced_unit(), Some(MeasurementUnit::M3));

        let mut d = draft();
        d.tipo_medida = lock.forced_unit().unwrap();
        d.dim_3 = 1.0;
        assert_eq!(compute_pricing(&d, Some(&c)).unit_price, 50.0);
    }
}
