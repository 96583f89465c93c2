use regex::Regex;

/// Media extensions recognized by the bare-relative-path rule
pub const MEDIA_EXTENSIONS: &str = "png|jpg|jpeg|gif|svg|mp3|mp4|webp";

/// One pattern-to-extraction rule: a regex, the capture group holding the
/// path, and a name for diagnostics. Post-processing is shared (see
/// [`clean_reference`](crate::extractor::clean_reference)).
#[derive(Debug)]
pub struct ExtractionRule {
    pub name: &'static str,
    pub pattern: Regex,
    /// Capture group carrying the path; 0 means the whole match
    pub group: usize,
}

impl ExtractionRule {
    fn new(name: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("hard-coded extraction pattern compiles"),
            group,
        }
    }
}

/// The fixed battery of asset-reference patterns, in application order.
///
/// The media-extension rule captures the path in group 1 and discards the
/// extension group. It intentionally also matches relative paths that do
/// not live under the assets root; normalization's prepend fallback folds
/// those into the assets namespace. That over-match is a known heuristic
/// limitation, kept as-is.
pub fn default_rules(assets_dir: &str) -> Vec<ExtractionRule> {
    let root = regex::escape(assets_dir);

    vec![
        ExtractionRule::new(
            "absolute-assets-quoted",
            &format!(r#"["']/{root}/[^"']+["']"#),
            0,
        ),
        ExtractionRule::new(
            "relative-assets-quoted",
            &format!(r#"["']\.\.?/{root}/[^"']+["']"#),
            0,
        ),
        ExtractionRule::new(
            "relative-media-quoted",
            &format!(r#"["']((?:\.\.?/)+[^"']+\.({MEDIA_EXTENSIONS}))["']"#),
            1,
        ),
        ExtractionRule::new(
            "src-absolute",
            &format!(r#"src=["']/{root}/[^"']+["']"#),
            0,
        ),
        ExtractionRule::new(
            "src-relative",
            &format!(r#"src=["']\.\.?/{root}/[^"']+["']"#),
            0,
        ),
        ExtractionRule::new(
            "stylesheet-url",
            &format!(r#"url\(["']?(?:/|\.\.?/)?{root}/[^"']+["']?\)"#),
            0,
        ),
    ]
}
