use loc2yaml::{loc, to_string, Entry, ParseResult};

#[test]
fn test_loc_macro_empty() {
    let result = loc!({});
    assert_eq!(result, ParseResult::new());
    assert!(result.is_empty());
}

#[test]
fn test_loc_macro_single_entry() {
    let result = loc!({ "greeting" => "Hello" });
    assert_eq!(
        result.entries,
        vec![Entry {
            key: "greeting".to_string(),
            value: "Hello".to_string(),
            raw_value: "Hello".to_string(),
            line: 1,
        }]
    );
    assert_eq!(result.root_key, None);
    assert!(result.errors.is_empty());
}

#[test]
fn test_loc_macro_expressions() {
    let name = String::from("Alice");
    let result = loc!({
        "owned" => name,
        "formatted" => format!("{}!", 42),
        "number" => 7,
    });

    let values: Vec<_> = result.entries.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["Alice", "42!", "7"]);

    let lines: Vec<_> = result.entries.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn test_loc_macro_root() {
    let result = loc!(root "l_english" {
        "title" => "Hi",
        "body" => "one\ntwo",
    });

    assert_eq!(
        to_string(&result),
        "l_english:\n  title: \"Hi\"\n  body: |-\n    one\n    two"
    );
}

#[test]
fn test_loc_macro_keeps_duplicates() {
    let result = loc!({ "a" => "1", "a" => "2" });
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.key_index().duplicates().count(), 1);
}
