pub mod diagnostics;
pub mod edits;
pub mod rules;
pub mod runner;

pub use diagnostics::{Diagnostic, Edit, Fix, Severity};
pub use edits::apply_fixes;
pub use rules::{Capabilities, Rule, RuleContext, RuleRegistry};
pub use runner::LintRunner;

use crate::config::Config;
use crate::messages::Messages;
use crate::syntax::Node;

/// Lint a parsed document and return its diagnostics, fixes attached.
pub fn lint(roots: &[Node], input: &str, config: &Config) -> Vec<Diagnostic> {
    let runner = LintRunner::new(default_registry());
    runner.run(roots, input, config)
}

/// Compute the remediation for one diagnostic against the current text.
pub fn remediate(diagnostic: &Diagnostic, input: &str, config: &Config) -> Option<Fix> {
    let runner = LintRunner::new(default_registry());
    runner.remediate(diagnostic, input, Messages::for_language(config.language))
}

/// Create the default rule registry with all built-in rules, in report order.
pub fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(rules::img_alt::ImgAltRule));
    registry.register(Box::new(rules::main_landmark::MainLandmarkRule));
    registry.register(Box::new(rules::heading_order::HeadingOrderRule));
    registry.register(Box::new(rules::color_contrast::ColorContrastRule));
    registry.register(Box::new(rules::input_feedback::InputFeedbackRule));
    registry.register(Box::new(rules::html_lang::HtmlLangRule));
    registry
}
