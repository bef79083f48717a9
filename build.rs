//! Build script to generate the embedded word catalog
//!
//! Reads the categorized word list and generates Rust source code with a const table.
//!
//! Input format (`data/words.txt`):
//! - `[Category name]` starts a category
//! - one word per line, `#` starts a comment
//! - blank lines are ignored

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/words.txt",
        &Path::new(&out_dir).join("catalog.rs"),
        "Western Armenian vocabulary grouped by category",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut categories: Vec<(String, Vec<String>)> = Vec::new();

    for (number, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            categories.push((name.trim().to_string(), Vec::new()));
            continue;
        }

        let (_, words) = categories.last_mut().unwrap_or_else(|| {
            panic!("{input_path}:{}: word before any [category] header", number + 1)
        });
        words.push(line.to_string());
    }

    let total: usize = categories.iter().map(|(_, words)| words.len()).sum();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const CATEGORIES: &[(&str, &[&str])] = &[").unwrap();

    for (name, words) in &categories {
        writeln!(output, "    ({name:?}, &[").unwrap();
        for word in words {
            writeln!(output, "        {word:?},").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words across all categories").unwrap();
    writeln!(output, "pub const WORD_COUNT: usize = {total};").unwrap();
}
