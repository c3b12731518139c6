//! Fetching and parsing the IBGE municipality dataset
//!
//! One blocking GET against the public `localidades` API, then a
//! simd-accelerated parse of the response body (the payload is a single
//! JSON array of ~5500 municipality objects).

use crate::error::Result;
use serde::Deserialize;

/// Public IBGE endpoint listing every Brazilian municipality
pub const MUNICIPIOS_URL: &str =
    "https://servicodados.ibge.gov.br/api/v1/localidades/municipios";

/// One municipality entry as returned by the IBGE API.
///
/// Only the fields this program consumes are declared; everything else in
/// the payload is ignored. The two regional views are both optional because
/// the API can serve either depending on the requested `view`.
#[derive(Debug, Clone, Deserialize)]
pub struct Municipio {
    pub id: u64,
    pub nome: String,
    pub microrregiao: Option<Microrregiao>,
    #[serde(rename = "regiao-imediata")]
    pub regiao_imediata: Option<RegiaoImediata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Microrregiao {
    pub mesorregiao: Option<Mesorregiao>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mesorregiao {
    #[serde(rename = "UF")]
    pub uf: Option<Uf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegiaoImediata {
    #[serde(rename = "regiao-intermediaria")]
    pub regiao_intermediaria: Option<RegiaoIntermediaria>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegiaoIntermediaria {
    #[serde(rename = "UF")]
    pub uf: Option<Uf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Uf {
    pub sigla: String,
}

impl Municipio {
    /// The two-letter UF code, read through the mesoregion chain with the
    /// intermediate-region chain as fallback.
    pub fn sigla_uf(&self) -> Option<&str> {
        self.microrregiao
            .as_ref()
            .and_then(|m| m.mesorregiao.as_ref())
            .and_then(|m| m.uf.as_ref())
            .map(|uf| uf.sigla.as_str())
            .or_else(|| {
                self.regiao_imediata
                    .as_ref()
                    .and_then(|r| r.regiao_intermediaria.as_ref())
                    .and_then(|r| r.uf.as_ref())
                    .map(|uf| uf.sigla.as_str())
            })
    }
}

/// Fetch the full municipality list from `url`.
///
/// Blocking; no timeout beyond the client default. Non-2xx responses are
/// reported as errors rather than parsed.
pub fn fetch_municipios(url: &str) -> Result<Vec<Municipio>> {
    let body = reqwest::blocking::get(url)?
        .error_for_status()?
        .bytes()?;
    parse_municipios(&body)
}

/// Parse a response body into municipality records.
///
/// Tries SIMD parsing first (faster), falling back to serde_json. The SIMD
/// attempt runs on a scratch copy: simd-json parses in place and would leave
/// the buffer mangled for the fallback.
pub fn parse_municipios(body: &[u8]) -> Result<Vec<Municipio>> {
    let mut scratch = body.to_vec();
    match simd_json::from_slice::<Vec<Municipio>>(&mut scratch) {
        Ok(municipios) => Ok(municipios),
        Err(_) => Ok(serde_json::from_slice(body)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Vec<Municipio> {
        parse_municipios(&serde_json::to_vec(&value).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_mesoregion_path() {
        let municipios = parse(json!([{
            "id": 1200013,
            "nome": "Acrelândia",
            "microrregiao": {
                "id": 12002,
                "nome": "Rio Branco",
                "mesorregiao": {
                    "id": 1202,
                    "nome": "Vale do Acre",
                    "UF": {"id": 12, "sigla": "AC", "nome": "Acre"}
                }
            }
        }]));

        assert_eq!(municipios.len(), 1);
        assert_eq!(municipios[0].nome, "Acrelândia");
        assert_eq!(municipios[0].sigla_uf(), Some("AC"));
    }

    #[test]
    fn test_parse_intermediate_region_fallback() {
        let municipios = parse(json!([{
            "id": 3550308,
            "nome": "São Paulo",
            "regiao-imediata": {
                "id": 350001,
                "nome": "São Paulo",
                "regiao-intermediaria": {
                    "id": 3501,
                    "nome": "São Paulo",
                    "UF": {"id": 35, "sigla": "SP", "nome": "São Paulo"}
                }
            }
        }]));

        assert_eq!(municipios[0].sigla_uf(), Some("SP"));
    }

    #[test]
    fn test_mesoregion_wins_over_fallback() {
        let municipios = parse(json!([{
            "id": 1,
            "nome": "Cidade",
            "microrregiao": {
                "mesorregiao": {"UF": {"sigla": "MG"}}
            },
            "regiao-imediata": {
                "regiao-intermediaria": {"UF": {"sigla": "RJ"}}
            }
        }]));

        assert_eq!(municipios[0].sigla_uf(), Some("MG"));
    }

    #[test]
    fn test_missing_regional_views_yield_no_sigla() {
        let municipios = parse(json!([{"id": 2, "nome": "Sem Região"}]));
        assert_eq!(municipios[0].sigla_uf(), None);
    }

    #[test]
    fn test_non_array_body_is_an_error() {
        assert!(parse_municipios(b"{\"erro\": true}").is_err());
        assert!(parse_municipios(b"not json at all").is_err());
    }
}
