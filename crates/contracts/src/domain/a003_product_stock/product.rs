use serde::{Deserialize, Serialize};

/// Inventory product as listed by the stock page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nome: String,
    /// Commercial unit (CX, KG, L...).
    pub unidade: String,
    #[serde(default)]
    pub saldo: f64,
    #[serde(default)]
    pub estoque_minimo: Option<f64>,
    #[serde(default)]
    pub preco_m2: Option<f64>,
    #[serde(default)]
    pub preco_m3: Option<f64>,
}

impl Product {
    /// Below-minimum indicator for the list row.
    pub fn below_minimum(&self) -> bool {
        self.estoque_minimo.map(|m| self.saldo < m).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_minimum_needs_a_configured_minimum() {
        let mut p = Product {
            saldo: 2.0,
            ..Product::default()
        };
        assert!(!p.below_minimum());
        p.estoque_minimo = Some(5.0);
        assert!(p.below_minimum());
        p.saldo = 5.0;
        assert!(!p.below_minimum());
    }
}
