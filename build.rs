//! Build script to generate the embedded phrase library
//!
//! Reads the phrase file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_phrase_list(
        "data/phrases.txt",
        &Path::new(&out_dir).join("phrases.rs"),
        "PHRASES",
        "Built-in library of secret phrases",
    );

    // Rebuild if the phrase library changes
    println!("cargo:rerun-if-changed=data/phrases.txt");
}

fn generate_phrase_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // One phrase per line, trimmed; blank lines are not phrases
    let phrases: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = phrases.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated phrase list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} phrases)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} phrases)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for phrase in phrases {
        // Debug formatting yields a correctly escaped string literal
        writeln!(output, "    {phrase:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of phrases in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
