//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // Secret word pool, one per day
    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words that can be picked as the daily secret",
    );

    // Everything a player may guess (superset of the answers)
    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "All words accepted as guesses",
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    write_word_list(input_path, output_path, const_name, doc_comment)
        .unwrap_or_else(|e| panic!("Failed to generate {const_name} from {input_path}: {e}"));
}

fn write_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = io::BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment} ({count} words)")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;
    output.flush()
}
