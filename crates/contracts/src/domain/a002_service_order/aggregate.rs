use crate::enums::ServiceStatus;
use serde::{Deserialize, Serialize};

/// Balances at or below this are treated as fully paid (rounding noise from
/// partial payments).
const PAID_TOLERANCE: f64 = 0.01;

/// Stage timestamps and actors of one order, as embedded by the server.
///
/// Field names follow the wire payload (`data-historico` JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    pub criado_em: String,
    #[serde(default)]
    pub vendedor: Option<String>,
    #[serde(default)]
    pub data_producao: Option<String>,
    #[serde(default)]
    pub user_producao: Option<String>,
    #[serde(default)]
    pub data_pronto: Option<String>,
    #[serde(default)]
    pub user_pronto: Option<String>,
    #[serde(default)]
    pub data_entrega: Option<String>,
    #[serde(default)]
    pub user_entrega: Option<String>,
    #[serde(default)]
    pub data_cancelamento: Option<String>,
    #[serde(default)]
    pub user_cancelamento: Option<String>,
    #[serde(default)]
    pub motivo_cancelamento: Option<String>,
}

/// One rendered timeline entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub titulo: &'static str,
    pub data: String,
    pub usuario: String,
    /// Cancellation entries carry the reason and render in the danger style.
    pub motivo: Option<String>,
}

/// A line item of a "multiple items" order, with its own workflow status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub descricao: String,
    pub quantidade: u32,
    pub status: ServiceStatus,
}

/// Read-only, server-supplied service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: i64,
    pub cliente: String,
    #[serde(default)]
    pub contato: String,
    pub descricao: String,
    /// Remaining balance in R$.
    pub restante: f64,
    pub status: ServiceStatus,
    #[serde(default)]
    pub vendedor: Option<String>,
    /// Creation date, `YYYY-MM-DD`, used by the date filter.
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub historico: OrderHistory,
    /// Present only for multiple-items mode orders.
    #[serde(default)]
    pub itens: Option<Vec<LineItem>>,
}

impl ServiceOrder {
    pub fn is_paid(&self) -> bool {
        self.restante <= PAID_TOLERANCE
    }

    /// Cancellation is blocked once the order is cancelled, or delivered and
    /// fully paid.
    pub fn can_cancel(&self) -> bool {
        match self.status {
            ServiceStatus::Cancelado => false,
            ServiceStatus::Entregue => !self.is_paid(),
            _ => true,
        }
    }

    /// Payment collection only makes sense while something is owed on a
    /// non-cancelled order.
    pub fn accepts_payment(&self) -> bool {
        !self.is_paid() && self.status != ServiceStatus::Cancelado
    }

    /// Chronological timeline of the order, cancellation last.
    pub fn timeline(&self) -> Vec<TimelineEvent> {
        let h = &self.historico;
        let mut events = vec![TimelineEvent {
            titulo: "Solicitação Criada",
            data: h.criado_em.clone(),
            usuario: h.vendedor.clone().unwrap_or_else(|| "Sistema".to_string()),
            motivo: None,
        }];

        let stages: [(&'static str, &Option<String>, &Option<String>); 3] = [
            ("Iniciou Produção", &h.data_producao, &h.user_producao),
            ("Pronto p/ Retirada", &h.data_pronto, &h.user_pronto),
            ("Entregue ao Cliente", &h.data_entrega, &h.user_entrega),
        ];
        for (titulo, data, usuario) in stages {
            if let Some(data) = data {
                events.push(TimelineEvent {
                    titulo,
                    data: data.clone(),
                    usuario: usuario.clone().unwrap_or_else(|| "Sistema".to_string()),
                    motivo: None,
                });
            }
        }

        if let Some(data) = &h.data_cancelamento {
            events.push(TimelineEvent {
                titulo: "Serviço Cancelado",
                data: data.clone(),
                usuario: h
                    .user_cancelamento
                    .clone()
                    .unwrap_or_else(|| "Admin".to_string()),
                motivo: Some(h.motivo_cancelamento.clone().unwrap_or_default()),
            });
        }

        events
    }

    /// `wa.me` link for the order contact, when it looks like a phone number
    /// (DDD + number, 10+ digits).
    pub fn whatsapp_link(&self) -> Option<String> {
        let digits: String = self.contato.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() >= 10 {
            Some(format!("https://wa.me/55{digits}"))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: ServiceStatus, restante: f64) -> ServiceOrder {
        ServiceOrder {
            id: 7,
            cliente: "Oficina do Zé".to_string(),
            contato: "(11) 91234-5678".to_string(),
            descricao: "Pintura eletrostática de grade".to_string(),
            restante,
            status,
            vendedor: Some("carla".to_string()),
            data: "2026-08-01".to_string(),
            historico: OrderHistory {
                criado_em: "2026-08-01T09:00:00".to_string(),
                vendedor: Some("carla".to_string()),
                ..OrderHistory::default()
            },
            itens: None,
        }
    }

    #[test]
    fn test_paid_tolerance() {
        assert!(order(ServiceStatus::Pronto, 0.0).is_paid());
        assert!(order(ServiceStatus::Pronto, 0.01).is_paid());
        assert!(!order(ServiceStatus::Pronto, 0.02).is_paid());
    }

    #[test]
    fn test_can_cancel_rules() {
        assert!(order(ServiceStatus::Pendente, 100.0).can_cancel());
        assert!(order(ServiceStatus::Entregue, 50.0).can_cancel());
        assert!(!order(ServiceStatus::Entregue, 0.0).can_cancel());
        assert!(!order(ServiceStatus::Cancelado, 50.0).can_cancel());
    }

    #[test]
    fn test_accepts_payment() {
        assert!(order(ServiceStatus::Producao, 80.0).accepts_payment());
        assert!(!order(ServiceStatus::Producao, 0.0).accepts_payment());
        assert!(!order(ServiceStatus::Cancelado, 80.0).accepts_payment());
    }

    #[test]
    fn test_timeline_order_and_cancellation() {
        let mut o = order(ServiceStatus::Cancelado, 10.0);
        o.historico.data_producao = Some("2026-08-02T10:00:00".to_string());
        o.historico.user_producao = Some("joão".to_string());
        o.historico.data_cancelamento = Some("2026-08-03T15:00:00".to_string());
        o.historico.motivo_cancelamento = Some("Cliente desistiu".to_string());

        let tl = o.timeline();
        assert_eq!(tl.len(), 3);
        assert_eq!(tl[0].titulo, "Solicitação Criada");
        assert_eq!(tl[1].usuario, "joão");
        assert_eq!(tl[2].titulo, "Serviço Cancelado");
        assert_eq!(tl[2].motivo.as_deref(), Some("Cliente desistiu"));
        // Missing actor falls back to Admin for cancellations
        assert_eq!(tl[2].usuario, "Admin");
    }

    #[test]
    fn test_whatsapp_link_requires_plausible_phone() {
        let o = order(ServiceStatus::Pendente, 10.0);
        assert_eq!(
            o.whatsapp_link().as_deref(),
            Some("https://wa.me/5511912345678")
        );

        let mut short = o.clone();
        short.contato = "4321".to_string();
        assert_eq!(short.whatsapp_link(), None);
    }

    #[test]
    fn test_line_items_deserialize_with_own_status() {
        let json = r#"{
            "id": 1, "cliente": "ACME", "descricao": "Lote de peças",
            "restante": 0.0, "status": "producao",
            "historico": {"criado_em": "2026-08-01T08:00:00"},
            "itens": [
                {"id": 10, "descricao": "Portão", "quantidade": 1, "status": "pronto"},
                {"id": 11, "descricao": "Grade", "quantidade": 4, "status": "pendente"}
            ]
        }"#;
        let o: ServiceOrder = serde_json::from_str(json).unwrap();
        let itens = o.itens.unwrap();
        assert_eq!(itens.len(), 2);
        assert_eq!(itens[0].status, ServiceStatus::Pronto);
        assert_eq!(itens[1].status, ServiceStatus::Pendente);
    }
}
