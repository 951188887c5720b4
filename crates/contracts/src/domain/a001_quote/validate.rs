use super::draft::{ClientType, MeasurementUnit, QuoteDraft};

/// Linear wizard steps. No branching, no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Cliente,
    Servico,
    Medidas,
    Quantidade,
    Financeiro,
    Revisao,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Cliente;
    pub const LAST: WizardStep = WizardStep::Revisao;

    pub fn all() -> [WizardStep; 6] {
        [
            WizardStep::Cliente,
            WizardStep::Servico,
            WizardStep::Medidas,
            WizardStep::Quantidade,
            WizardStep::Financeiro,
            WizardStep::Revisao,
        ]
    }

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Cliente => 1,
            WizardStep::Servico => 2,
            WizardStep::Medidas => 3,
            WizardStep::Quantidade => 4,
            WizardStep::Financeiro => 5,
            WizardStep::Revisao => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Cliente => "Cliente",
            WizardStep::Servico => "Serviço",
            WizardStep::Medidas => "Cor e Medidas",
            WizardStep::Quantidade => "Quantidade",
            WizardStep::Financeiro => "Financeiro",
            WizardStep::Revisao => "Revisão",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Cliente => Some(WizardStep::Servico),
            WizardStep::Servico => Some(WizardStep::Medidas),
            WizardStep::Medidas => Some(WizardStep::Quantidade),
            WizardStep::Quantidade => Some(WizardStep::Financeiro),
            WizardStep::Financeiro => Some(WizardStep::Revisao),
            WizardStep::Revisao => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Cliente => None,
            WizardStep::Servico => Some(WizardStep::Cliente),
            WizardStep::Medidas => Some(WizardStep::Servico),
            WizardStep::Quantidade => Some(WizardStep::Medidas),
            WizardStep::Financeiro => Some(WizardStep::Quantidade),
            WizardStep::Revisao => Some(WizardStep::Financeiro),
        }
    }
}

/// Validation outcome of one step: the offending field keys (for styling) and
/// one aggregate message. Not an exception, a UI-state signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepErrors {
    pub fields: Vec<&'static str>,
    pub message: String,
}

impl StepErrors {
    pub fn has(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }
}

fn digit_count(masked: &str) -> usize {
    masked.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Validates the fields of one step. Pure and synchronous; never touches the
/// network or the DOM.
pub fn validate_step(draft: &QuoteDraft, step: WizardStep) -> Result<(), StepErrors> {
    let mut fields: Vec<&'static str> = Vec::new();
    let mut message = String::new();

    match step {
        WizardStep::Cliente => {
            match draft.tipo_cliente {
                ClientType::Pf => {
                    if draft.pf_nome.trim().is_empty() {
                        fields.push("pf_nome");
                    }
                    let cpf_digits = digit_count(&draft.pf_cpf);
                    if cpf_digits != 0 && cpf_digits != 11 {
                        fields.push("pf_cpf");
                        message = "CPF incompleto: informe os 11 dígitos ou deixe em branco."
                            .to_string();
                    }
                }
                ClientType::Pj => {
                    if draft.pj_fantasia.trim().is_empty() {
                        fields.push("pj_fantasia");
                    }
                    if draft.pj_solicitante.trim().is_empty() {
                        fields.push("pj_solicitante");
                    }
                    let cnpj_digits = digit_count(&draft.pj_cnpj);
                    if cnpj_digits != 0 && cnpj_digits != 14 {
                        fields.push("pj_cnpj");
                        message = "CNPJ incompleto: informe os 14 dígitos ou deixe em branco."
                            .to_string();
                    }
                }
            }
            if draft.telefone.trim().is_empty() {
                fields.push("telefone");
            }
        }
        WizardStep::Servico => {
            if draft.descricao_servico.trim().is_empty() {
                fields.push("descricao_servico");
            }
        }
        WizardStep::Medidas => {
            if draft.cor_id.is_none() {
                fields.push("cor_id");
            }
            if draft.dim_1 <= 0.0 {
                fields.push("dim_1");
            }
            if draft.dim_2 <= 0.0 {
                fields.push("dim_2");
            }
            if draft.tipo_medida == MeasurementUnit::M3 && draft.dim_3 <= 0.0 {
                fields.push("dim_3");
            }
        }
        WizardStep::Quantidade => {
            if draft.qtd_pecas < 1 {
                fields.push("qtd_pecas");
            }
        }
        WizardStep::Financeiro => {
            if draft.input_acrescimo < 0.0 {
                fields.push("input_acrescimo");
            }
            if draft.input_desconto < 0.0 {
                fields.push("input_desconto");
            }
        }
        // The review step only displays accumulated state.
        WizardStep::Revisao => {}
    }

    if fields.is_empty() {
        Ok(())
    } else {
        if message.is_empty() {
            message = "Preencha os campos destacados antes de continuar.".to_string();
        }
        Err(StepErrors { fields, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_quote::draft::DiscountMode;

    fn valid_pf_draft() -> QuoteDraft {
        QuoteDraft {
            pf_nome: "Maria Souza".to_string(),
            pf_cpf: "123.456.789-01".to_string(),
            telefone: "(11) 98765-4321".to_string(),
            descricao_servico: "Pintura de portão".to_string(),
            cor_id: Some(3),
            dim_1: 2.0,
            dim_2: 1.5,
            qtd_pecas: 2,
            ..QuoteDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_passes_every_step() {
        let d = valid_pf_draft();
        for step in WizardStep::all() {
            assert!(validate_step(&d, step).is_ok(), "step {:?}", step);
        }
    }

    #[test]
    fn test_untouched_cpf_is_accepted() {
        let mut d = valid_pf_draft();
        d.pf_cpf.clear();
        assert!(validate_step(&d, WizardStep::Cliente).is_ok());
    }

    #[test]
    fn test_partial_cpf_is_an_error() {
        let mut d = valid_pf_draft();
        d.pf_cpf = "123.456".to_string();
        let err = validate_step(&d, WizardStep::Cliente).unwrap_err();
        assert!(err.has("pf_cpf"));
        assert!(err.message.contains("CPF"));
    }

    #[test]
    fn test_pj_requires_fantasia_solicitante_and_full_cnpj() {
        let mut d = valid_pf_draft();
        d.tipo_cliente = ClientType::Pj;
        d.pj_cnpj = "12.345".to_string();
        let err = validate_step(&d, WizardStep::Cliente).unwrap_err();
        assert!(err.has("pj_fantasia"));
        assert!(err.has("pj_solicitante"));
        assert!(err.has("pj_cnpj"));
        // PF fields are no longer required
        assert!(!err.has("pf_nome"));
    }

    #[test]
    fn test_zero_dimension_flags_field() {
        let mut d = valid_pf_draft();
        d.dim_1 = 0.0;
        let err = validate_step(&d, WizardStep::Medidas).unwrap_err();
        assert!(err.has("dim_1"));
        assert!(!err.has("dim_2"));
    }

    #[test]
    fn test_dim3_required_only_for_volume() {
        let mut d = valid_pf_draft();
        d.dim_3 = 0.0;
        assert!(validate_step(&d, WizardStep::Medidas).is_ok());

        d.tipo_medida = MeasurementUnit::M3;
        let err = validate_step(&d, WizardStep::Medidas).unwrap_err();
        assert!(err.has("dim_3"));
    }

    #[test]
    fn test_quantity_must_be_at_least_one() {
        let mut d = valid_pf_draft();
        d.qtd_pecas = 0;
        assert!(validate_step(&d, WizardStep::Quantidade).is_err());
        d.qtd_pecas = 1;
        assert!(validate_step(&d, WizardStep::Quantidade).is_ok());
    }

    #[test]
    fn test_negative_adjustments_are_flagged() {
        let mut d = valid_pf_draft();
        d.tipo_desconto = DiscountMode::Amount;
        d.input_desconto = -5.0;
        let err = validate_step(&d, WizardStep::Financeiro).unwrap_err();
        assert!(err.has("input_desconto"));
    }
}
