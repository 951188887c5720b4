//! Typed payloads embedded by the server in the rendered page.
//!
//! One schema per page, parsed at a single point. Malformed input degrades to
//! the default empty structure instead of breaking rendering.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Revenue/expense series of the finance line chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub receitas: Vec<f64>,
    #[serde(default)]
    pub despesas: Vec<f64>,
}

/// Category breakdown of the doughnut chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub valores: Vec<f64>,
}

/// KPI card values of the overview dashboard (`kpi-data` element).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    #[serde(default)]
    pub faturamento_mes: f64,
    #[serde(default)]
    pub despesas_mes: f64,
    #[serde(default)]
    pub servicos_abertos: u32,
    #[serde(default)]
    pub ticket_medio: f64,
    #[serde(default)]
    pub grafico: ChartData,
    #[serde(default)]
    pub categorias: CategoryBreakdown,
}

/// Parses an embedded JSON payload. Callers decide how to surface the error;
/// the frontend logs it and falls back to `T::default()`.
pub fn parse_embedded<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).context("malformed embedded payload")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_payload() {
        let raw = r#"{
            "faturamento_mes": 15000.0,
            "despesas_mes": 4200.5,
            "servicos_abertos": 7,
            "ticket_medio": 830.0,
            "grafico": {"labels": ["Jan", "Fev"], "receitas": [1.0, 2.0], "despesas": [0.5, 0.7]},
            "categorias": {"labels": ["Material"], "valores": [4200.5]}
        }"#;
        let kpi: KpiData = parse_embedded(raw).unwrap();
        assert_eq!(kpi.servicos_abertos, 7);
        assert_eq!(kpi.grafico.labels.len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let kpi: KpiData = parse_embedded("{}").unwrap();
        assert_eq!(kpi, KpiData::default());
    }

    #[test]
    fn test_malformed_payload_is_an_error_not_a_panic() {
        let res: Result<KpiData, _> = parse_embedded("{not json");
        assert!(res.is_err());
        // the caller falls back to the default structure
        let fallback = res.unwrap_or_default();
        assert_eq!(fallback, KpiData::default());
    }
}
