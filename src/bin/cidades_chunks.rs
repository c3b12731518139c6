//! cidades-chunks: reviewable per-file SQL chunks with IBGE codes
//!
//! Variant of cidades-populate that keeps each municipality's IBGE code,
//! conflicts on it instead of on (nome, estado_id), and writes one .sql
//! file per chunk. Chunks default to 100 rows so the files stay small
//! enough to read before running them.

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use cidades::sql::write_sql_chunks;
use cidades::{fetch_municipios, BatchConfig, CityRow, SqlBatcher, MUNICIPIOS_URL};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cidades-chunks")]
#[command(about = "Write per-chunk .sql files for the cidades table", long_about = None)]
struct Args {
    /// Source endpoint (defaults to the public IBGE municipality API)
    #[arg(long)]
    url: Option<String>,

    /// Directory for the chunk_NNN.sql files
    #[arg(long, short = 'o', default_value = "sql_chunks")]
    output_dir: String,

    /// Rows per chunk file
    #[arg(long, default_value_t = 100)]
    chunk_size: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let url = args.url.as_deref().unwrap_or(MUNICIPIOS_URL);
    let municipios = fetch_municipios(url)?;

    let rows: Vec<CityRow> = municipios
        .iter()
        .filter_map(CityRow::from_municipio)
        .collect();

    let config = BatchConfig {
        chunk_size: args.chunk_size,
        include_ibge_code: true,
    };
    let mut batcher = SqlBatcher::new(config);
    for row in &rows {
        batcher.push(row);
    }
    let statements = batcher.finish();

    let written = write_sql_chunks(&args.output_dir, &statements)?;
    println!(
        "Generated {} SQL files in {} for {} cities.",
        written,
        args.output_dir,
        rows.len()
    );
    Ok(())
}
