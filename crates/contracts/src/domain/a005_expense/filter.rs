use serde::{Deserialize, Serialize};

/// Query parameters of `GET /financeiro/?mes&ano&...`.
///
/// Period is mandatory; optional criteria are skipped when empty so the URL
/// stays short (serialized with `serde_qs` on the frontend).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceFilter {
    pub mes: u32,
    pub ano: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fornecedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forma_pagamento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_custo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vencimento: Option<String>,
}

impl FinanceFilter {
    pub fn new(mes: u32, ano: i32) -> Self {
        Self {
            mes,
            ano,
            categoria: None,
            status: None,
            fornecedor: None,
            forma_pagamento: None,
            tipo_custo: None,
            vencimento: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_are_omitted() {
        let f = FinanceFilter::new(8, 2026);
        let json = serde_json::to_value(&f).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["mes"], 8);
        assert_eq!(obj["ano"], 2026);
    }

    #[test]
    fn test_set_criteria_survive_round_trip() {
        let mut f = FinanceFilter::new(1, 2027);
        f.categoria = Some("material".to_string());
        f.status = Some("pago".to_string());
        let json = serde_json::to_string(&f).unwrap();
        let back: FinanceFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
