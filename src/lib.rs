//! # Cidades - IBGE municipality SQL generator
//!
//! Fetches the public IBGE municipality dataset, resolves each entry's UF
//! sigla to a pre-known `estados` identifier, and renders the result as
//! batched `INSERT INTO cidades ... ON CONFLICT DO NOTHING;` statements,
//! written out as a JSON array for downstream consumption.
//!
//! ## Modules
//!
//! - **fetch**: one blocking GET against the IBGE API + payload parsing
//! - **estados**: the fixed sigla → UUID state table
//! - **sql**: batching, statement rendering, and output writers
//!
//! ## Quick Start
//!
//! ```rust
//! use cidades::{statements_from_municipios, BatchConfig, Municipio};
//!
//! # fn main() -> cidades::Result<()> {
//! let municipios: Vec<Municipio> = serde_json::from_str(
//!     r#"[{"id": 1200013,
//!          "nome": "Acrelândia",
//!          "microrregiao": {"mesorregiao": {"UF": {"sigla": "AC"}}}}]"#,
//! )?;
//!
//! let statements = statements_from_municipios(&municipios, &BatchConfig::default());
//!
//! assert_eq!(statements.len(), 1);
//! assert!(statements[0].starts_with("INSERT INTO cidades (nome, estado_id) VALUES"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod error;
pub mod estados;
pub mod fetch;
pub mod sql;

// Re-export commonly used types for convenience
pub use error::{CidadesError, Result};
pub use fetch::{fetch_municipios, parse_municipios, Municipio, MUNICIPIOS_URL};
pub use sql::{statements_from_municipios, BatchConfig, CityRow, SqlBatcher};

/// Fetch and transform, reporting progress on stdout.
///
/// Unlike [`populate`], errors propagate to the caller.
pub fn fetch_statements(url: &str, config: &BatchConfig) -> Result<Vec<String>> {
    println!("Iniciando busca de municípios no IBGE...");
    let municipios = fetch_municipios(url)?;

    println!("Processando {} municípios...", municipios.len());
    Ok(statements_from_municipios(&municipios, config))
}

/// Main entry point: fetch the dataset from `url` and write the batched
/// statements to `output` as a JSON array.
///
/// Any failure while fetching or parsing is printed to stdout and collapses
/// into an empty statement list; the output file is written either way.
/// Returns the number of statements written.
pub fn populate<P: AsRef<Path>>(url: &str, output: P, config: &BatchConfig) -> Result<usize> {
    let statements = match fetch_statements(url, config) {
        Ok(statements) => statements,
        Err(e) => {
            println!("Erro: {e}");
            Vec::new()
        }
    };

    sql::write_json_array_file(output, &statements)?;
    Ok(statements.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_fixture_pipeline_end_to_end() {
        let municipios: Vec<Municipio> = serde_json::from_value(json!([
            {"id": 1, "nome": "Rio Branco",
             "microrregiao": {"mesorregiao": {"UF": {"sigla": "AC"}}}},
            {"id": 2, "nome": "Lugar Nenhum",
             "microrregiao": {"mesorregiao": {"UF": {"sigla": "ZZ"}}}},
            {"id": 3, "nome": "Maceió",
             "microrregiao": {"mesorregiao": {"UF": {"sigla": "AL"}}}}
        ]))
        .unwrap();

        let statements = statements_from_municipios(&municipios, &BatchConfig::default());
        assert_eq!(statements.len(), 1);

        let mut buffer = Vec::new();
        sql::write_json_array(&mut buffer, &statements).unwrap();

        // the file round-trips as a JSON array of statement strings
        let parsed: Vec<String> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, statements);
        assert!(parsed[0].contains("('Rio Branco',"));
        assert!(parsed[0].contains("('Maceió',"));
        assert!(!parsed[0].contains("Lugar Nenhum"));
    }

    #[test]
    fn test_populate_still_writes_file_on_network_failure() {
        let output = std::env::temp_dir().join("cidades_populate_failure_test.json");
        let _ = fs::remove_file(&output);

        // nothing listens on the discard port; the GET fails immediately
        let count = populate(
            "http://127.0.0.1:9/api/v1/localidades/municipios",
            &output,
            &BatchConfig::default(),
        )
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");

        fs::remove_file(&output).unwrap();
    }
}
