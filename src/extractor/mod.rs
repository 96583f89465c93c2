mod rules;


pub use rules::{default_rules, ExtractionRule, MEDIA_EXTENSIONS};

/// Scans source text for substrings that look like asset paths.
///
/// Applies every rule independently and unions the matches in rule order.
/// Output is raw: not deduplicated and not normalized — both happen later,
/// at reconciliation time.
pub struct ReferenceExtractor {
    rules: Vec<ExtractionRule>,
}

impl ReferenceExtractor {
    /// Build an extractor for the given assets directory name
    pub fn new(assets_dir: &str) -> Self {
        Self {
            rules: default_rules(assets_dir),
        }
    }

    /// Extract every raw asset reference from a file's text
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut references = Vec::new();

        for rule in &self.rules {
            for caps in rule.pattern.captures_iter(text) {
                if let Some(m) = caps.get(rule.group) {
                    references.push(clean_reference(m.as_str()));
                }
            }
        }

        references
    }

    /// Number of active extraction rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Strip the syntactic wrapping from a matched reference: quote characters,
/// a `url(` prefix with its closing paren, and a leading `src=` token.
pub fn clean_reference(raw: &str) -> String {
    let cleaned = raw
        .replace(['"', '\''], "")
        .replace("url(", "")
        .replace(')', "");
    cleaned
        .strip_prefix("src=")
        .unwrap_or(&cleaned)
        .to_string()
}
