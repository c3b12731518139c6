use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the statement list as a pretty-printed JSON array.
///
/// Two-space indent, UTF-8, non-ASCII characters left unescaped. An empty
/// list writes `[]`.
pub fn write_json_array<W: Write>(writer: &mut W, statements: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(statements)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write the statement list as a JSON array to `path`, replacing any
/// existing file.
pub fn write_json_array_file<P: AsRef<Path>>(path: P, statements: &[String]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    write_json_array(&mut file, statements)
}

/// Write one `chunk_NNN.sql` file per statement under `dir`, creating the
/// directory if needed. Returns the number of files written.
pub fn write_sql_chunks<P: AsRef<Path>>(dir: P, statements: &[String]) -> Result<usize> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    for (i, statement) in statements.iter().enumerate() {
        let file_name = format!("chunk_{:03}.sql", i);
        fs::write(dir.join(file_name), statement)?;
    }

    Ok(statements.len())
}
