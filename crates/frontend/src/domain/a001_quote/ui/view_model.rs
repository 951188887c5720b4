//! Sales Wizard - ViewModel
//!
//! Reactive state for the six-step quote form. All pricing and validation
//! logic lives in `contracts`; this layer only wires it to signals.

use super::model;
use crate::shared::api_utils::navigate_to;
use crate::shared::masks::{mask_cnpj, mask_cpf, mask_phone};
use contracts::domain::a001_quote::draft::{ColorOption, MeasurementUnit, QuoteDraft};
use contracts::domain::a001_quote::pricing::{compute_pricing, unit_lock, PricingResult, UnitLock};
use contracts::domain::a001_quote::validate::{validate_step, StepErrors, WizardStep};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the quote wizard
#[derive(Clone, Copy)]
pub struct QuoteWizardVm {
    pub draft: RwSignal<QuoteDraft>,
    pub step: RwSignal<WizardStep>,
    pub errors: RwSignal<Option<StepErrors>>,
    pub colors: RwSignal<Vec<ColorOption>>,
    pub colors_error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,
}

impl QuoteWizardVm {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(QuoteDraft {
                qtd_pecas: 1,
                ..QuoteDraft::default()
            }),
            step: RwSignal::new(WizardStep::FIRST),
            errors: RwSignal::new(None),
            colors: RwSignal::new(Vec::new()),
            colors_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            submit_error: RwSignal::new(None),
        }
    }

    pub fn load_colors(&self) {
        let colors = self.colors;
        let colors_error = self.colors_error;
        spawn_local(async move {
            match model::fetch_colors().await {
                Ok(v) => {
                    colors.set(v);
                    colors_error.set(None);
                }
                Err(e) => colors_error.set(Some(e)),
            }
        });
    }

    pub fn selected_color(&self) -> Option<ColorOption> {
        let id = self.draft.get().cor_id?;
        self.colors.get().into_iter().find(|c| c.id == id)
    }

    /// Live price preview; recomputed on every draft or color change.
    pub fn pricing(&self) -> PricingResult {
        let draft = self.draft.get();
        compute_pricing(&draft, self.selected_color().as_ref())
    }

    /// Lock policy of the currently selected color.
    pub fn lock(&self) -> Option<UnitLock> {
        self.selected_color().map(|c| unit_lock(&c))
    }

    /// Selects a color and applies the unit lock: a single-price color forces
    /// the measurement unit, overriding whatever the user had picked.
    pub fn select_color(&self, id: Option<i64>) {
        self.draft.update(|d| d.cor_id = id);
        if let Some(forced) = self.lock().and_then(|l| l.forced_unit()) {
            self.draft.update(|d| d.tipo_medida = forced);
        }
    }

    /// Unit selector is disabled whenever the color does not leave the choice
    /// free.
    pub fn unit_selector_disabled(&self) -> bool {
        !matches!(self.lock(), Some(UnitLock::Free))
    }

    pub fn set_unit(&self, unit: MeasurementUnit) {
        self.draft.update(|d| {
            d.tipo_medida = unit;
            if unit == MeasurementUnit::M2 {
                d.dim_3 = 0.0;
            }
        });
    }

    pub fn set_cpf(&self, raw: &str) {
        let masked = mask_cpf(raw);
        self.draft.update(|d| d.pf_cpf = masked);
    }

    pub fn set_cnpj(&self, raw: &str) {
        let masked = mask_cnpj(raw);
        self.draft.update(|d| d.pj_cnpj = masked);
    }

    pub fn set_phone(&self, raw: &str) {
        let masked = mask_phone(raw);
        self.draft.update(|d| d.telefone = masked);
    }

    /// Validate the current step; on success clear errors and move forward.
    pub fn advance(&self) {
        let step = self.step.get();
        match validate_step(&self.draft.get(), step) {
            Ok(()) => {
                self.errors.set(None);
                if let Some(next) = step.next() {
                    self.step.set(next);
                }
            }
            Err(e) => self.errors.set(Some(e)),
        }
    }

    /// Going back never validates and never loses data.
    pub fn retreat(&self) {
        self.errors.set(None);
        if let Some(prev) = self.step.get().prev() {
            self.step.set(prev);
        }
    }

    pub fn field_invalid(&self, field: &str) -> bool {
        self.errors
            .get()
            .map(|e| e.has(field))
            .unwrap_or(false)
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let vm = *self;
        vm.submitting.set(true);
        vm.submit_error.set(None);
        let draft = vm.draft.get_untracked();
        spawn_local(async move {
            match model::submit_quote(&draft).await {
                Ok(()) => navigate_to("/vendas/servicos"),
                Err(e) => {
                    vm.submit_error.set(Some(e));
                    vm.submitting.set(false);
                }
            }
        });
    }
}

impl Default for QuoteWizardVm {
    fn default() -> Self {
        Self::new()
    }
}
