//! pdfinfo line-oriented output parsing
//!
//! Each line is `Key: Value`; keys are lowercased and snake-cased so
//! `Page size` becomes `page_size`. Duplicate keys keep the last line.

use std::collections::HashMap;

/// Parse pdfinfo stdout into a flat key→value map.
pub fn parse(stdout: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in stdout.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key: String = key
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' { '_' } else { c })
            .filter(|c| *c != '"' && *c != '\'')
            .collect();
        if key.is_empty() {
            continue;
        }
        fields.insert(key, value.trim().to_string());
    }
    fields
}

/// First-page width and height in points, from the first two integers
/// embedded in the `page_size` value ("612 x 792 pts (letter)").
pub fn page_dimensions(fields: &HashMap<String, String>) -> Option<(u64, u64)> {
    let value = fields.get("page_size")?;
    let mut integers = embedded_integers(value);
    let width = integers.next()?;
    let height = integers.next()?;
    Some((width, height))
}

/// Total page count from the `pages` field.
pub fn page_count(fields: &HashMap<String, String>) -> Option<u64> {
    fields.get("pages")?.trim().parse().ok()
}

/// Iterator over the maximal digit runs in `value`, parsed as integers.
fn embedded_integers(value: &str) -> impl Iterator<Item = u64> + '_ {
    value
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "Title:          Sample Report\n\
                           Producer:       cairo 1.16.0 (https://cairographics.org)\n\
                           \"Encrypted\":    no\n\
                           Page size:      612 x 792 pts (letter)\n\
                           Pages:          3\n\
                           File size:      11273 bytes\n";

    #[test]
    fn test_parse_normalizes_keys() {
        let fields = parse(FIXTURE);
        assert_eq!(fields.get("title").map(String::as_str), Some("Sample Report"));
        assert_eq!(
            fields.get("page_size").map(String::as_str),
            Some("612 x 792 pts (letter)")
        );
        assert_eq!(fields.get("encrypted").map(String::as_str), Some("no"));
        assert_eq!(fields.get("file_size").map(String::as_str), Some("11273 bytes"));
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let fields = parse("Producer: cairo 1.16.0 (https://cairographics.org)\n");
        assert_eq!(
            fields.get("producer").map(String::as_str),
            Some("cairo 1.16.0 (https://cairographics.org)")
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let fields = parse("Pages: 1\nPages: 7\n");
        assert_eq!(page_count(&fields), Some(7));
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let fields = parse("garbage line\nPages: 2\n");
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_page_dimensions_from_first_two_integers() {
        let fields = parse("Page size: 150 x 150 pts\n");
        assert_eq!(page_dimensions(&fields), Some((150, 150)));

        let fields = parse(FIXTURE);
        assert_eq!(page_dimensions(&fields), Some((612, 792)));
    }

    #[test]
    fn test_page_dimensions_absent_when_unparseable() {
        let fields = parse("Page size: unknown\n");
        assert_eq!(page_dimensions(&fields), None);

        let fields = parse("Pages: 3\n");
        assert_eq!(page_dimensions(&fields), None);
    }

    #[test]
    fn test_page_count() {
        let fields = parse(FIXTURE);
        assert_eq!(page_count(&fields), Some(3));

        let fields = parse("Pages: many\n");
        assert_eq!(page_count(&fields), None);
    }
}
