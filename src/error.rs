use std::io;
use thiserror::Error;

/// Tipo de retorno conveniente para todo o projeto
pub type Result<T> = std::result::Result<T, CidadesError>;

#[derive(Error, Debug)]
pub enum CidadesError {
    #[error("falha na requisição ao IBGE: {0}")]
    Http(#[from] reqwest::Error),

    #[error("resposta do IBGE não é um JSON válido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("erro de I/O: {0}")]
    Io(#[from] io::Error),
}
