use serde::{Deserialize, Serialize};

/// One sale of `GET /metas/api/vendas-usuario/{userId}?mes&ano`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSale {
    pub id: i64,
    pub data: String,
    pub cliente: String,
    /// Pre-formatted by the server ("1.234,56").
    pub valor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSalesResponse {
    #[serde(default)]
    pub vendas: Vec<UserSale>,
}
