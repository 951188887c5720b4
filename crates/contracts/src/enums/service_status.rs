use serde::{Deserialize, Serialize};

/// Workflow stages of a service order (and of individual line items).
///
/// Linear flow `pendente → producao → pronto → entregue` with a terminal
/// side branch `cancelado`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Pendente,
    Producao,
    Pronto,
    Entregue,
    Cancelado,
}

impl ServiceStatus {
    /// Wire code used in URLs and `data-*` payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceStatus::Pendente => "pendente",
            ServiceStatus::Producao => "producao",
            ServiceStatus::Pronto => "pronto",
            ServiceStatus::Entregue => "entregue",
            ServiceStatus::Cancelado => "cancelado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceStatus::Pendente => "Pendente",
            ServiceStatus::Producao => "Em Produção",
            ServiceStatus::Pronto => "Pronto p/ Retirada",
            ServiceStatus::Entregue => "Entregue",
            ServiceStatus::Cancelado => "Cancelado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pendente" => Some(ServiceStatus::Pendente),
            "producao" => Some(ServiceStatus::Producao),
            "pronto" => Some(ServiceStatus::Pronto),
            "entregue" => Some(ServiceStatus::Entregue),
            "cancelado" => Some(ServiceStatus::Cancelado),
            _ => None,
        }
    }

    /// Next stage in the linear flow. Terminal states have none.
    pub fn next(&self) -> Option<Self> {
        match self {
            ServiceStatus::Pendente => Some(ServiceStatus::Producao),
            ServiceStatus::Producao => Some(ServiceStatus::Pronto),
            ServiceStatus::Pronto => Some(ServiceStatus::Entregue),
            ServiceStatus::Entregue | ServiceStatus::Cancelado => None,
        }
    }

    /// Label for the single action button that moves the order forward.
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            ServiceStatus::Pendente => Some("Iniciar Produção"),
            ServiceStatus::Producao => Some("Marcar Pronto"),
            ServiceStatus::Pronto => Some("Confirmar Entrega"),
            ServiceStatus::Entregue | ServiceStatus::Cancelado => None,
        }
    }

    pub fn all() -> Vec<ServiceStatus> {
        vec![
            ServiceStatus::Pendente,
            ServiceStatus::Producao,
            ServiceStatus::Pronto,
            ServiceStatus::Entregue,
            ServiceStatus::Cancelado,
        ]
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_flow() {
        assert_eq!(ServiceStatus::Pendente.next(), Some(ServiceStatus::Producao));
        assert_eq!(ServiceStatus::Producao.next(), Some(ServiceStatus::Pronto));
        assert_eq!(ServiceStatus::Pronto.next(), Some(ServiceStatus::Entregue));
        assert_eq!(ServiceStatus::Entregue.next(), None);
        assert_eq!(ServiceStatus::Cancelado.next(), None);
    }

    #[test]
    fn test_codes_round_trip() {
        for status in ServiceStatus::all() {
            assert_eq!(ServiceStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ServiceStatus::from_code("finalizado"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&ServiceStatus::Producao).unwrap();
        assert_eq!(json, "\"producao\"");
        let back: ServiceStatus = serde_json::from_str("\"entregue\"").unwrap();
        assert_eq!(back, ServiceStatus::Entregue);
    }
}
