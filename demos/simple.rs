//! Basic localization to YAML conversion.
//!
//! Run with: cargo run --example simple

use loc2yaml::{from_str, to_string};
use std::error::Error;

const INPUT: &str = r#"l_english:
 # Main menu
 menu_title:0 "Main Menu"
 menu_quit:0 "Quit to \"Desktop\""
 tooltip_attack: 1 "Attack the target.\nCosts one action."
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Parse the localization text
    let result = from_str(INPUT);
    println!(
        "Parsed {} entries under {:?}\n",
        result.entries.len(),
        result.root_key
    );

    // Serialize to YAML
    let yaml = to_string(&result);
    println!("YAML output:\n{}\n", yaml);

    // Quoted lines parse back to the same values
    let reparsed = from_str(&yaml);
    assert_eq!(reparsed.entries[1].value, result.entries[1].value);
    println!("✓ Quoted values survive a second pass");

    Ok(())
}
