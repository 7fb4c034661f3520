//! Embeds the default puzzle dictionary
//!
//! `data/words.txt` becomes `OUT_DIR/words.rs`, which `wordlists::embedded`
//! includes. Words of every length are kept; the bank filters by length at
//! runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const DICTIONARY: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={DICTIONARY}");

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let content = fs::read_to_string(DICTIONARY)
        .unwrap_or_else(|e| panic!("cannot read dictionary {DICTIONARY}: {e}"));

    let source = render_dictionary(&content);
    let target = Path::new(&out_dir).join("words.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
}

/// Render the dictionary as a `WORDS` slice plus its length
fn render_dictionary(content: &str) -> String {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut source = String::from("// Generated from data/words.txt by build.rs\n\n");
    source.push_str("/// Default puzzle dictionary, in file order\n");
    source.push_str("pub const WORDS: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(source, "    {word:?},");
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of entries in `WORDS`\n");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len());
    source
}
