use std::io::{self, Write};

/// Prompt on stdout and read one trimmed line from stdin.
pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
