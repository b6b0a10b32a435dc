pub mod color;
pub mod config;
pub mod linter;
#[cfg(feature = "lsp")]
pub mod lsp;
pub mod messages;
pub mod parser;
pub mod php;
pub mod syntax;

pub use config::Config;
pub use config::ConfigBuilder;
pub use linter::Diagnostic;
pub use syntax::Node;

/// Parses markup into an ordered forest of element nodes.
///
/// Parsing never fails; malformed markup yields a best-effort tree.
///
/// # Examples
///
/// ```rust
/// let roots = a11ymate::parse("<main><img src=\"a.png\"></main>");
/// assert_eq!(roots[0].tag_name, "main");
/// assert_eq!(roots[0].children[0].tag_name, "img");
/// ```
pub fn parse(input: &str) -> Vec<Node> {
    parser::parse(input)
}

/// Runs one full analysis pass over a source text.
///
/// PHP sources are masked first, so diagnostic and fix offsets refer to the
/// original text either way.
///
/// # Arguments
///
/// * `input` - The document text
/// * `is_php` - Whether `input` is a PHP template
/// * `config` - Rule selection and message language
pub fn lint_source(input: &str, is_php: bool, config: &Config) -> Vec<Diagnostic> {
    let source = php::prepare_source(input, is_php);
    let roots = parser::parse(&source);
    linter::lint(&roots, &source, config)
}
