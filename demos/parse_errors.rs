//! Inspecting skipped lines and duplicate keys.
//!
//! Run with: cargo run --example parse_errors

use loc2yaml::convert;

const INPUT: &str = r#"l_english:
 title: "Welcome"
 subtitle: Missing quotes
 title: "Welcome back"
 footer: "Thanks for playing
"#;

fn main() {
    let conversion = convert(INPUT);

    println!("YAML output:\n{}\n", conversion.output);

    // What an interactive front end would show
    if let Some(summary) = conversion.result.summary() {
        println!("{}\n", summary);
    }

    // Every skipped line is kept for stricter consumers
    for error in &conversion.result.errors {
        println!("  {}", error);
    }

    for (key, lines) in conversion.result.key_index().duplicates() {
        println!("duplicate key {:?} on lines {:?}", key, lines);
    }
}
