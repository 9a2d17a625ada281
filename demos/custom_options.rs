//! Customizing YAML output with EmitOptions.
//!
//! Run with: cargo run --example custom_options

use loc2yaml::{from_str, to_string, to_string_with_options, EmitOptions};

const INPUT: &str = r#"l_english:
 title: "Patch notes"
 body: "Fixed crashes.\nImproved loading times."
"#;

fn main() {
    let result = from_str(INPUT);

    // Default two-space indentation
    println!("Default (2 spaces):");
    println!("{}\n", to_string(&result));

    // Four-space indentation
    println!("4 spaces:");
    let options = EmitOptions::new().with_indent(4);
    println!("{}", to_string_with_options(&result, options));
}
