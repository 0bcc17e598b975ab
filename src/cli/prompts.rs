//! User prompt functions for interactive CLI input.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Interpret a yes/no answer, defaulting to no
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Ask before replacing an existing export file
pub fn prompt_overwrite(path: &Path) -> io::Result<bool> {
    print!("{} already exists. Overwrite? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(is_yes(&input))
}
