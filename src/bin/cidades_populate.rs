//! cidades-populate: batched INSERTs for the cidades table
//!
//! Fetches every municipality from the IBGE localidades API, resolves each
//! UF sigla against the fixed estados table, and writes the batched SQL
//! statements to insert_cities.json as a JSON array.
//!
//! Usage:
//!   # Default: fetch from IBGE, write insert_cities.json
//!   cidades-populate
//!
//!   # Custom output path and batch size
//!   cidades-populate -o /tmp/inserts.json --chunk-size 250
//!
//!   # Fail loudly instead of writing an empty array
//!   cidades-populate --strict

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use cidades::sql::write_json_array_file;
use cidades::{BatchConfig, MUNICIPIOS_URL};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cidades-populate")]
#[command(about = "Generate batched INSERT statements for the cidades table", long_about = None)]
struct Args {
    /// Source endpoint (defaults to the public IBGE municipality API)
    #[arg(long)]
    url: Option<String>,

    /// Output file for the JSON array of statements
    #[arg(long, short = 'o', default_value = "insert_cities.json")]
    output: String,

    /// Rows per INSERT statement (default: 500)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Exit non-zero on fetch/parse errors instead of writing an empty array
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let url = args.url.as_deref().unwrap_or(MUNICIPIOS_URL);

    let mut config = BatchConfig::default();
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }

    let count = if args.strict {
        let statements = cidades::fetch_statements(url, &config)?;
        write_json_array_file(&args.output, &statements)?;
        statements.len()
    } else {
        // Compatibility mode: any failure is reported on stdout, the output
        // file is still written (possibly as "[]"), and the exit code stays 0.
        cidades::populate(url, &args.output, &config)?
    };

    println!("Sucesso! Gerados {} chunks de SQL.", count);
    Ok(())
}
