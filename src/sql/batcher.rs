use crate::fetch::Municipio;
use crate::sql::types::{BatchConfig, CityRow};

/// Escape a city name for inclusion in a single-quoted SQL literal.
///
/// Postgres convention: single quotes are doubled.
pub fn escape_nome(nome: &str) -> String {
    nome.replace('\'', "''")
}

fn render_tuple(row: &CityRow, config: &BatchConfig) -> String {
    let nome = escape_nome(&row.nome);
    if config.include_ibge_code {
        format!("('{}', '{}', '{}')", nome, row.estado_id, row.ibge_code)
    } else {
        format!("('{}', '{}')", nome, row.estado_id)
    }
}

fn render_statement(values: &[String], config: &BatchConfig) -> String {
    let vals = values.join(",\n");
    if config.include_ibge_code {
        format!(
            "INSERT INTO cidades (nome, estado_id, ibge_code) VALUES \n{} \nON CONFLICT (ibge_code) DO NOTHING;",
            vals
        )
    } else {
        format!(
            "INSERT INTO cidades (nome, estado_id) VALUES\n{}\nON CONFLICT (nome, estado_id) DO NOTHING;",
            vals
        )
    }
}

/// Accumulates rows and renders one statement per full batch.
///
/// Rows come out in the order they went in, both inside a statement and
/// across statements.
pub struct SqlBatcher {
    config: BatchConfig,
    values: Vec<String>,
    statements: Vec<String>,
}

impl SqlBatcher {
    pub fn new(config: BatchConfig) -> Self {
        SqlBatcher {
            config,
            values: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Append one row to the current batch, flushing it once full.
    pub fn push(&mut self, row: &CityRow) {
        self.values.push(render_tuple(row, &self.config));
        if self.values.len() >= self.config.chunk_size {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let statement = render_statement(&self.values, &self.config);
        self.statements.push(statement);
        self.values.clear();
    }

    /// Render the trailing partial batch, if any, and return all statements.
    pub fn finish(mut self) -> Vec<String> {
        if !self.values.is_empty() {
            self.flush();
        }
        self.statements
    }
}

/// The full transform pass: resolve each record's state, drop the ones that
/// don't resolve, batch and render the rest.
pub fn statements_from_municipios(
    municipios: &[Municipio],
    config: &BatchConfig,
) -> Vec<String> {
    let mut batcher = SqlBatcher::new(config.clone());

    for mun in municipios {
        if let Some(row) = CityRow::from_municipio(mun) {
            batcher.push(&row);
        }
    }

    batcher.finish()
}
