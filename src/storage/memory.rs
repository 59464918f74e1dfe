//! In-memory case store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::domain::{Address, Case, CaseFiles, CaseId, CaseStatus};
use crate::error::{ApiError, ApiResult};
use crate::storage::{CaseStore, MarkOutcome};

#[derive(Debug)]
struct StoredCase {
    case: Case,
    status: CaseStatus,
}

/// Case store kept in process memory, keyed by case id.
#[derive(Debug, Default)]
pub struct InMemoryCaseStore {
    cases: RwLock<BTreeMap<CaseId, StoredCase>>,
}

impl InMemoryCaseStore {
    /// Create a store holding the given cases, all pending.
    pub fn new(cases: impl IntoIterator<Item = Case>) -> Self {
        let cases = cases
            .into_iter()
            .map(|case| {
                (
                    case.id,
                    StoredCase {
                        case,
                        status: CaseStatus::Pending,
                    },
                )
            })
            .collect();

        Self {
            cases: RwLock::new(cases),
        }
    }

    /// Create a store seeded with the sample case (id 123).
    pub fn with_sample_case() -> Self {
        Self::new([sample_case()])
    }
}

impl CaseStore for InMemoryCaseStore {
    fn pending_cases(&self) -> ApiResult<Vec<Case>> {
        let cases = self.cases.read().map_err(|_| poisoned())?;

        Ok(cases
            .values()
            .filter(|stored| stored.status == CaseStatus::Pending)
            .map(|stored| stored.case.clone())
            .collect())
    }

    fn mark_as_printed(&self, ids: &[Value]) -> ApiResult<MarkOutcome> {
        let mut cases = self.cases.write().map_err(|_| poisoned())?;
        let mut outcome = MarkOutcome::default();

        for id in ids {
            let stored = id.as_i64().and_then(|id| cases.get_mut(&CaseId(id)));
            match stored {
                Some(stored) if stored.status == CaseStatus::Pending => {
                    stored.status = CaseStatus::Printed;
                    outcome.transitioned += 1;
                    tracing::debug!(case_id = %id, "Case marked as printed");
                }
                Some(_) => outcome.already_printed += 1,
                None => {
                    outcome.unknown += 1;
                    tracing::debug!(case_id = %id, "Ignoring unknown case id");
                }
            }
        }

        Ok(outcome)
    }
}

fn poisoned() -> ApiError {
    ApiError::Internal("case store lock poisoned".to_string())
}

/// The sample case served when the store is seeded.
fn sample_case() -> Case {
    Case {
        id: CaseId(123),
        numero_caso: "CASO-001".to_string(),
        nome: "Fulano de Tal".to_string(),
        cpf_cnpj: "123.456.789-00".to_string(),
        endereco: Address {
            rua: "Rua Exemplo".to_string(),
            numero: "123".to_string(),
            bairro: "Centro".to_string(),
            cidade_estado: "São Paulo — SP".to_string(),
            cep: "12345-678".to_string(),
        },
        urls: vec![
            "https://exemplo.com/anuncio1".to_string(),
            "https://exemplo.com/anuncio2".to_string(),
        ],
        arquivos: CaseFiles {
            notificacao: "https://sistema.com/pdfs/notificacao_123.pdf".to_string(),
            procuracao: "https://sistema.com/pdfs/procuracao_123.pdf".to_string(),
            anuncio: "https://sistema.com/pdfs/anuncio_123.pdf".to_string(),
        },
    }
}
