use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entrada,
    Saida,
}

impl MovementKind {
    /// Sign shown next to the quantity.
    pub fn sign(&self) -> &'static str {
        match self {
            MovementKind::Entrada => "+",
            MovementKind::Saida => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementSource {
    Compra,
    Producao,
    Manual,
}

impl MovementSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            MovementSource::Compra => "Compra",
            MovementSource::Producao => "Produção",
            MovementSource::Manual => "Manual",
        }
    }
}

/// One row of `GET /estoque/api/historico/{productId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub data: String,
    pub tipo: MovementKind,
    pub origem: MovementSource,
    pub quantidade: f64,
    pub saldo_novo: f64,
    pub usuario: String,
    #[serde(default)]
    pub observacao: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_row_matches_wire_contract() {
        let json = r#"{
            "data": "10/08/2026 14:30",
            "tipo": "entrada",
            "origem": "compra",
            "quantidade": 12.5,
            "saldo_novo": 40.0,
            "usuario": "ana"
        }"#;
        let m: StockMovement = serde_json::from_str(json).unwrap();
        assert_eq!(m.tipo, MovementKind::Entrada);
        assert_eq!(m.origem, MovementSource::Compra);
        assert_eq!(m.observacao, "");
        assert_eq!(m.tipo.sign(), "+");
    }
}
