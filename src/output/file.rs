use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Creates or truncates `path` and writes `content` as-is.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
