use serde::{Deserialize, Serialize};

/// Per-seller goal line of the embedded goals payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerGoal {
    pub user_id: i64,
    pub nome: String,
    #[serde(default)]
    pub meta: f64,
    #[serde(default)]
    pub vendido: f64,
}

impl SellerGoal {
    /// Raw completion percentage; display layers clamp as needed.
    pub fn percent(&self) -> f64 {
        if self.meta > 0.0 {
            self.vendido / self.meta * 100.0
        } else {
            0.0
        }
    }

    pub fn reached(&self) -> bool {
        self.meta > 0.0 && self.vendido >= self.meta
    }
}

/// Embedded payload of the goals page (`#metas-data`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsPageData {
    pub mes: u32,
    pub ano: i32,
    #[serde(default)]
    pub meta_loja: f64,
    #[serde(default)]
    pub metas: Vec<SellerGoal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_guards_zero_goal() {
        let mut g = SellerGoal {
            user_id: 1,
            nome: "bruno".to_string(),
            meta: 0.0,
            vendido: 500.0,
        };
        assert_eq!(g.percent(), 0.0);
        assert!(!g.reached());

        g.meta = 1000.0;
        assert_eq!(g.percent(), 50.0);
        g.vendido = 1200.0;
        assert!(g.reached());
        assert!(g.percent() > 100.0);
    }
}
