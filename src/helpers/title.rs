//! Display-title helpers

/// Replace filename word separators (underscores and hyphens) with spaces
pub fn widen_separators(s: &str) -> String {
    s.replace(['_', '-'], " ")
}

/// Capitalize the first letter of every word
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_separators() {
        assert_eq!(widen_separators("my_post"), "my post");
        assert_eq!(
            widen_separators("how-to-write-fast-rust-code"),
            "how to write fast rust code"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            title_case("how to write fast rust code"),
            "How To Write Fast Rust Code"
        );
        assert_eq!(title_case("my post"), "My Post");
        assert_eq!(title_case(""), "");
    }
}
