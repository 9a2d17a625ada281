//! Building parse results with the loc! macro.
//!
//! Run with: cargo run --example macro

use loc2yaml::{loc, to_string};

fn main() {
    // Entries without a root key
    let flat = loc!({
        "greeting" => "Hello",
        "farewell" => "Goodbye",
    });
    println!("Flat:\n{}\n", to_string(&flat));

    // Entries grouped under a root key, with a multi-line value
    let grouped = loc!(root "l_english" {
        "title" => "Patch notes",
        "body" => "Fixed crashes.\nImproved loading times.",
        "empty" => "",
    });
    println!("Grouped:\n{}", to_string(&grouped));
}
