use crate::estados;
use crate::fetch::Municipio;
use serde::Serialize;

/// One row destined for the `cidades` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRow {
    pub nome: String,
    pub estado_id: &'static str,
    pub ibge_code: u64,
}

impl CityRow {
    /// Build a row from a municipality record, resolving its state code.
    ///
    /// Returns `None` when the record carries no UF sigla or the sigla is
    /// absent from the state table; such records are dropped without a
    /// diagnostic.
    pub fn from_municipio(mun: &Municipio) -> Option<CityRow> {
        let sigla = mun.sigla_uf()?;
        let estado_id = estados::resolve(sigla)?;

        Some(CityRow {
            nome: mun.nome.clone(),
            estado_id,
            ibge_code: mun.id,
        })
    }
}

/// Configuration for the batching process
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Rows per rendered statement
    pub chunk_size: usize,

    /// Emit the three-column form with `ibge_code`, conflicting on
    /// `ibge_code` instead of `(nome, estado_id)`
    pub include_ibge_code: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            chunk_size: 500,
            include_ibge_code: false,
        }
    }
}
