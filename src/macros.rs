/// Builds a [`ParseResult`](crate::ParseResult) from key/value literals.
///
/// Entries are numbered from line 1 in the order written, and `raw_value` is
/// set to the value itself. Mostly useful in tests and demos.
///
/// # Examples
///
/// ```rust
/// use loc2yaml::{loc, to_string};
///
/// let result = loc!({ "title" => "Hello", "body" => "one\ntwo" });
/// assert_eq!(result.entries.len(), 2);
/// assert_eq!(result.entries[1].line, 2);
/// assert_eq!(to_string(&result), "title: \"Hello\"\nbody: |-\n  one\n  two");
///
/// let result = loc!(root "l_english" { "title" => "Hello" });
/// assert_eq!(result.root_key.as_deref(), Some("l_english"));
/// ```
#[macro_export]
macro_rules! loc {
    // Handle empty document
    ({}) => {
        $crate::ParseResult::new()
    };

    // Handle entries under a root key
    (root $root:literal { $($key:literal => $value:expr),* $(,)? }) => {{
        let mut result = $crate::loc!({ $($key => $value),* });
        result.root_key = Some($root.to_string());
        result
    }};

    // Handle entries
    ({ $($key:literal => $value:expr),* $(,)? }) => {{
        let mut result = $crate::ParseResult::new();
        $(
            let value = ::std::string::ToString::to_string(&$value);
            let line = result.entries.len() + 1;
            result.entries.push($crate::Entry {
                key: $key.to_string(),
                raw_value: value.clone(),
                value,
                line,
            });
        )*
        result
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Entry, ParseResult};

    #[test]
    fn test_loc_macro_empty() {
        assert_eq!(loc!({}), ParseResult::new());
    }

    #[test]
    fn test_loc_macro_entries() {
        let result = loc!({ "a" => "1", "b" => String::from("2") });
        assert_eq!(
            result.entries,
            vec![
                Entry {
                    key: "a".to_string(),
                    value: "1".to_string(),
                    raw_value: "1".to_string(),
                    line: 1,
                },
                Entry {
                    key: "b".to_string(),
                    value: "2".to_string(),
                    raw_value: "2".to_string(),
                    line: 2,
                },
            ]
        );
        assert_eq!(result.root_key, None);
    }

    #[test]
    fn test_loc_macro_root() {
        let result = loc!(root "l_german" { "a" => "1", });
        assert_eq!(result.root_key.as_deref(), Some("l_german"));
        assert_eq!(result.entries.len(), 1);
    }
}
