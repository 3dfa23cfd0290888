//! Build script to embed the default dictionary
//!
//! Turns `data/dictionary.txt` into a const slice so the binary works
//! without any word file on disk.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/dictionary.txt";

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");

    let out_dir = env::var_os("OUT_DIR")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let content = fs::read_to_string(DICTIONARY_PATH)?;

    fs::write(
        Path::new(&out_dir).join("dictionary.rs"),
        render_dictionary(&content),
    )
}

/// Render whitespace-delimited tokens as `DICTIONARY` and `DICTIONARY_COUNT`
fn render_dictionary(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();

    let mut source = String::from("// Generated from data/dictionary.txt\n\n");
    let _ = writeln!(
        source,
        "/// Default dictionary of whitespace-delimited words ({} words)",
        words.len()
    );
    source.push_str("pub const DICTIONARY: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(source, "    {word:?},");
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of words in DICTIONARY\n");
    let _ = writeln!(source, "pub const DICTIONARY_COUNT: usize = {};", words.len());

    source
}
