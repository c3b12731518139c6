//! SQL generation - turn municipality records into batched INSERT statements
//!
//! This module handles the transform half of the program: resolving each
//! record's state identifier, grouping the surviving rows into fixed-size
//! batches, rendering each batch as one `INSERT ... ON CONFLICT DO NOTHING;`
//! statement, and writing the statement list out.

pub mod types;
pub mod batcher;
pub mod writer;

pub use types::{BatchConfig, CityRow};
pub use batcher::{escape_nome, statements_from_municipios, SqlBatcher};
pub use writer::{write_json_array, write_json_array_file, write_sql_chunks};
