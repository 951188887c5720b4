use super::aggregate::ServiceOrder;
use crate::enums::ServiceStatus;
use serde::{Deserialize, Serialize};

/// Live-search filter over the order list. Criteria are conjunctive; empty
/// criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    /// Case-insensitive substring over client, description and id.
    pub texto: String,
    pub status: Option<ServiceStatus>,
    /// Exact seller match.
    pub vendedor: String,
    /// Exact creation date, `YYYY-MM-DD`.
    pub data: String,
}

impl OrderFilter {
    pub fn is_empty(&self) -> bool {
        self.texto.is_empty()
            && self.status.is_none()
            && self.vendedor.is_empty()
            && self.data.is_empty()
    }

    pub fn matches(&self, order: &ServiceOrder) -> bool {
        let match_texto = self.texto.is_empty() || {
            let needle = self.texto.to_lowercase();
            let haystack = format!(
                "#{} {} {}",
                order.id,
                order.cliente.to_lowercase(),
                order.descricao.to_lowercase()
            );
            haystack.contains(&needle)
        };
        let match_status = self.status.map(|s| s == order.status).unwrap_or(true);
        let match_vendedor =
            self.vendedor.is_empty() || order.vendedor.as_deref() == Some(self.vendedor.as_str());
        let match_data = self.data.is_empty() || order.data == self.data;

        match_texto && match_status && match_vendedor && match_data
    }

    /// Query for the server-rendered list page, `GET /vendas/lista?...`.
    /// Unset criteria and page 1 are omitted so the URL stays short.
    pub fn to_query(&self, page: u32) -> OrderListQuery {
        let some_if_set = |s: &str| (!s.is_empty()).then(|| s.to_string());
        OrderListQuery {
            q: some_if_set(&self.texto),
            status: self.status.map(|s| s.code().to_string()),
            vendedor: some_if_set(&self.vendedor),
            data: some_if_set(&self.data),
            page: (page > 1).then_some(page),
        }
    }
}

/// Query parameters of `GET /vendas/lista?q&status&vendedor&data&page`
/// (serialized with `serde_qs` on the frontend).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_service_order::aggregate::OrderHistory;

    fn order() -> ServiceOrder {
        ServiceOrder {
            id: 42,
            cliente: "Metalúrgica Prata".to_string(),
            contato: String::new(),
            descricao: "Pintura de corrimão".to_string(),
            restante: 10.0,
            status: ServiceStatus::Producao,
            vendedor: Some("bruno".to_string()),
            data: "2026-08-10".to_string(),
            historico: OrderHistory::default(),
            itens: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(OrderFilter::default().matches(&order()));
    }

    #[test]
    fn test_text_search_is_case_insensitive_and_covers_id() {
        let mut f = OrderFilter::default();
        f.texto = "PRATA".to_string();
        assert!(f.matches(&order()));
        f.texto = "#42".to_string();
        assert!(f.matches(&order()));
        f.texto = "corrimão".to_string();
        assert!(f.matches(&order()));
        f.texto = "inexistente".to_string();
        assert!(!f.matches(&order()));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let mut f = OrderFilter::default();
        f.texto = "prata".to_string();
        f.status = Some(ServiceStatus::Producao);
        f.vendedor = "bruno".to_string();
        f.data = "2026-08-10".to_string();
        assert!(f.matches(&order()));

        f.status = Some(ServiceStatus::Pronto);
        assert!(!f.matches(&order()));
    }

    #[test]
    fn test_query_keeps_only_set_criteria() {
        let mut f = OrderFilter::default();
        f.texto = "prata".to_string();
        f.status = Some(ServiceStatus::Producao);
        let q = f.to_query(2);
        assert_eq!(q.q.as_deref(), Some("prata"));
        assert_eq!(q.status.as_deref(), Some("producao"));
        assert_eq!(q.vendedor, None);
        assert_eq!(q.data, None);
        assert_eq!(q.page, Some(2));

        let blank = OrderFilter::default().to_query(1);
        assert_eq!(blank, OrderListQuery::default());
    }

    #[test]
    fn test_seller_is_exact_match() {
        let mut f = OrderFilter::default();
        f.vendedor = "brun".to_string();
        assert!(!f.matches(&order()));
        f.vendedor = "bruno".to_string();
        assert!(f.matches(&order()));
    }
}
