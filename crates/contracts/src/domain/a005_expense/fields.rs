use serde::{Deserialize, Serialize};

/// Payment methods of the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormaPagamento {
    Dinheiro,
    Pix,
    Boleto,
    Cartao,
    Transferencia,
}

impl FormaPagamento {
    pub fn code(&self) -> &'static str {
        match self {
            FormaPagamento::Dinheiro => "dinheiro",
            FormaPagamento::Pix => "pix",
            FormaPagamento::Boleto => "boleto",
            FormaPagamento::Cartao => "cartao",
            FormaPagamento::Transferencia => "transferencia",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormaPagamento::Dinheiro => "Dinheiro",
            FormaPagamento::Pix => "PIX",
            FormaPagamento::Boleto => "Boleto",
            FormaPagamento::Cartao => "Cartão",
            FormaPagamento::Transferencia => "Transferência",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dinheiro" => Some(FormaPagamento::Dinheiro),
            "pix" => Some(FormaPagamento::Pix),
            "boleto" => Some(FormaPagamento::Boleto),
            "cartao" => Some(FormaPagamento::Cartao),
            "transferencia" => Some(FormaPagamento::Transferencia),
            _ => None,
        }
    }

    pub fn all() -> Vec<FormaPagamento> {
        vec![
            FormaPagamento::Dinheiro,
            FormaPagamento::Pix,
            FormaPagamento::Boleto,
            FormaPagamento::Cartao,
            FormaPagamento::Transferencia,
        ]
    }

    /// Boleto and PIX payments carry a barcode/copy-paste code field.
    pub fn needs_barcode(&self) -> bool {
        matches!(self, FormaPagamento::Boleto | FormaPagamento::Pix)
    }
}

/// Expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Categoria {
    Pessoal,
    Material,
    Infraestrutura,
    Manutencao,
    Marketing,
    Impostos,
    Outros,
}

impl Categoria {
    pub fn code(&self) -> &'static str {
        match self {
            Categoria::Pessoal => "pessoal",
            Categoria::Material => "material",
            Categoria::Infraestrutura => "infraestrutura",
            Categoria::Manutencao => "manutencao",
            Categoria::Marketing => "marketing",
            Categoria::Impostos => "impostos",
            Categoria::Outros => "outros",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Categoria::Pessoal => "Pessoal",
            Categoria::Material => "Material",
            Categoria::Infraestrutura => "Infraestrutura",
            Categoria::Manutencao => "Manutenção",
            Categoria::Marketing => "Marketing",
            Categoria::Impostos => "Impostos",
            Categoria::Outros => "Outros",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pessoal" => Some(Categoria::Pessoal),
            "material" => Some(Categoria::Material),
            "infraestrutura" => Some(Categoria::Infraestrutura),
            "manutencao" => Some(Categoria::Manutencao),
            "marketing" => Some(Categoria::Marketing),
            "impostos" => Some(Categoria::Impostos),
            "outros" => Some(Categoria::Outros),
            _ => None,
        }
    }

    pub fn all() -> Vec<Categoria> {
        vec![
            Categoria::Pessoal,
            Categoria::Material,
            Categoria::Infraestrutura,
            Categoria::Manutencao,
            Categoria::Marketing,
            Categoria::Impostos,
            Categoria::Outros,
        ]
    }

    /// Personnel expenses point at an employee instead of a supplier.
    pub fn needs_employee(&self) -> bool {
        matches!(self, Categoria::Pessoal)
    }

    pub fn needs_supplier(&self) -> bool {
        matches!(
            self,
            Categoria::Material
                | Categoria::Infraestrutura
                | Categoria::Manutencao
                | Categoria::Marketing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_rule() {
        assert!(FormaPagamento::Boleto.needs_barcode());
        assert!(FormaPagamento::Pix.needs_barcode());
        assert!(!FormaPagamento::Dinheiro.needs_barcode());
    }

    #[test]
    fn test_supplier_and_employee_are_mutually_exclusive() {
        for cat in Categoria::all() {
            assert!(!(cat.needs_employee() && cat.needs_supplier()), "{:?}", cat);
        }
        assert!(Categoria::Pessoal.needs_employee());
        assert!(Categoria::Material.needs_supplier());
        assert!(!Categoria::Impostos.needs_supplier());
    }
}
