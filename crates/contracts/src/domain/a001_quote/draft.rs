use serde::{Deserialize, Serialize};

/// Brazilian customer classification. Drives which identity fields are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientType {
    #[serde(rename = "PF")]
    Pf,
    #[serde(rename = "PJ")]
    Pj,
}

impl Default for ClientType {
    fn default() -> Self {
        ClientType::Pf
    }
}

/// Area- vs volume-based pricing mode for a coating service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementUnit {
    #[serde(rename = "m2")]
    M2,
    #[serde(rename = "m3")]
    M3,
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        MeasurementUnit::M2
    }
}

impl MeasurementUnit {
    pub fn code(&self) -> &'static str {
        match self {
            MeasurementUnit::M2 => "m2",
            MeasurementUnit::M3 => "m3",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MeasurementUnit::M2 => "m²",
            MeasurementUnit::M3 => "m³",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountMode {
    /// Absolute value in R$.
    #[serde(rename = "real")]
    Amount,
    /// Percentage of base + surcharge.
    #[serde(rename = "perc")]
    Percent,
}

impl Default for DiscountMode {
    fn default() -> Self {
        DiscountMode::Amount
    }
}

/// A registered color/finish with its unit prices.
///
/// Either price may be zero, meaning the color is not sold by that unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub preco_m2: f64,
    #[serde(default)]
    pub preco_m3: f64,
}

impl ColorOption {
    /// Price for the given unit; zero when the color has no price registered
    /// for it (the calculator never fails on a missing price).
    pub fn price_for(&self, unit: MeasurementUnit) -> f64 {
        match unit {
            MeasurementUnit::M2 => self.preco_m2,
            MeasurementUnit::M3 => self.preco_m3,
        }
    }
}

/// Accumulated state of the sales wizard form.
///
/// Mask-formatted strings are kept as typed in the inputs; digit counting for
/// CPF/CNPJ validation strips the punctuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteDraft {
    // Step 1: client
    pub tipo_cliente: ClientType,
    pub pf_nome: String,
    pub pf_cpf: String,
    pub pj_fantasia: String,
    pub pj_solicitante: String,
    pub pj_cnpj: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,

    // Step 2: service
    pub descricao_servico: String,
    pub observacoes_internas: String,

    // Step 3: color and dimensions
    pub cor_id: Option<i64>,
    pub tipo_medida: MeasurementUnit,
    pub dim_1: f64,
    pub dim_2: f64,
    pub dim_3: f64,

    // Step 4: quantity
    pub qtd_pecas: u32,

    // Step 5: financial adjustments
    pub input_acrescimo: f64,
    pub tipo_desconto: DiscountMode,
    pub input_desconto: f64,
}

impl QuoteDraft {
    /// Display name for the review panel: fantasy name for PJ, full name for PF.
    pub fn client_name(&self) -> &str {
        match self.tipo_cliente {
            ClientType::Pf => &self.pf_nome,
            ClientType::Pj => &self.pj_fantasia,
        }
    }

    pub fn document(&self) -> &str {
        match self.tipo_cliente {
            ClientType::Pf => &self.pf_cpf,
            ClientType::Pj => &self.pj_cnpj,
        }
    }
}
