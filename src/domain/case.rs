//! Printing case domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a printing case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct CaseId(pub i64);

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Print status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CaseStatus {
    /// Queued, awaiting print.
    #[serde(rename = "em_fila")]
    Pending,
    /// Printed and acknowledged.
    #[serde(rename = "impresso")]
    Printed,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Pending => write!(f, "em_fila"),
            CaseStatus::Printed => write!(f, "impresso"),
        }
    }
}

impl std::str::FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "em_fila" => Ok(CaseStatus::Pending),
            "impresso" => Ok(CaseStatus::Printed),
            _ => Err(format!("Invalid case status: {}", s)),
        }
    }
}

/// Postal address of the case holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    /// Street name.
    pub rua: String,
    /// Street number.
    pub numero: String,
    /// District.
    pub bairro: String,
    /// City and state, e.g. "São Paulo — SP".
    pub cidade_estado: String,
    /// Postal code (CEP).
    pub cep: String,
}

/// Document URLs attached to a case, keyed by document kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CaseFiles {
    /// Notification letter.
    pub notificacao: String,
    /// Power of attorney.
    pub procuracao: String,
    /// Announcement evidence.
    pub anuncio: String,
}

/// A printing job tied to a legal/administrative matter.
///
/// Cases are created upstream and are read-only here; the print status is
/// tracked by the store, not on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Case {
    pub id: CaseId,
    /// Human-facing case number, e.g. "CASO-001".
    pub numero_caso: String,
    /// Holder name.
    pub nome: String,
    /// Holder tax ID (CPF or CNPJ).
    pub cpf_cnpj: String,
    pub endereco: Address,
    /// Reference URLs (the offending listings).
    pub urls: Vec<String>,
    pub arquivos: CaseFiles,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Case {
        Case {
            id: CaseId(7),
            numero_caso: "CASO-007".to_string(),
            nome: "Beltrana".to_string(),
            cpf_cnpj: "00.000.000/0001-00".to_string(),
            endereco: Address {
                rua: "Rua A".to_string(),
                numero: "1".to_string(),
                bairro: "Centro".to_string(),
                cidade_estado: "Recife — PE".to_string(),
                cep: "50000-000".to_string(),
            },
            urls: vec!["https://exemplo.com/x".to_string()],
            arquivos: CaseFiles {
                notificacao: "n.pdf".to_string(),
                procuracao: "p.pdf".to_string(),
                anuncio: "a.pdf".to_string(),
            },
        }
    }

    #[test]
    fn test_case_status_from_str() {
        assert_eq!("em_fila".parse::<CaseStatus>().unwrap(), CaseStatus::Pending);
        assert_eq!("impresso".parse::<CaseStatus>().unwrap(), CaseStatus::Printed);
        assert!("EM_FILA".parse::<CaseStatus>().is_err());
        assert!("".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn test_case_status_wire_names() {
        assert_eq!(
            serde_json::to_value(CaseStatus::Pending).unwrap(),
            serde_json::json!("em_fila")
        );
        assert_eq!(CaseStatus::Printed.to_string(), "impresso");
    }

    #[test]
    fn test_case_serializes_with_flat_integer_id() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["id"], serde_json::json!(7));
        assert_eq!(value["endereco"]["cidade_estado"], "Recife — PE");
        assert_eq!(value["arquivos"]["procuracao"], "p.pdf");
        assert!(value.get("status").is_none());
    }
}
