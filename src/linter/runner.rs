use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Fix};
use crate::linter::rules::{Rule, RuleContext, RuleRegistry};
use crate::messages::Messages;
use crate::syntax::Node;

pub struct LintRunner {
    registry: RuleRegistry,
}

impl LintRunner {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// One full analysis pass: a single pre-order walk for node rules, then
    /// each document rule once. Diagnostics come back sorted by position with
    /// their remediations attached.
    pub fn run(&self, roots: &[Node], input: &str, config: &Config) -> Vec<Diagnostic> {
        let messages = Messages::for_language(config.language);
        let enabled: Vec<&dyn Rule> = self
            .registry
            .rules()
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| {
                let on = config.rules.is_enabled(rule.id());
                if !on {
                    log::debug!("Skipping disabled lint rule: {}", rule.id());
                }
                on
            })
            .collect();

        let node_rules: Vec<&dyn Rule> = enabled
            .iter()
            .copied()
            .filter(|rule| rule.capabilities().node)
            .collect();

        let mut diagnostics = Vec::new();
        log::debug!(
            "Running {} node rule(s) over {} root(s), language {}",
            node_rules.len(),
            roots.len(),
            config.language.code()
        );
        walk(roots, &node_rules, messages, &mut diagnostics);

        for rule in enabled.iter().filter(|rule| rule.capabilities().document) {
            log::debug!("Running document rule: {}", rule.id());
            let mut ctx = RuleContext::new(rule.id(), messages, &mut diagnostics);
            rule.check_document(roots, &mut ctx);
        }

        for rule in &enabled {
            log::debug!(
                "Rule {} found {} diagnostic(s)",
                rule.id(),
                diagnostics.iter().filter(|d| d.code == rule.id()).count()
            );
        }

        // Stable, so reports at the same position keep their report order.
        diagnostics.sort_by_key(|d| d.range.start);

        diagnostics
            .into_iter()
            .map(|diagnostic| match self.remediate(&diagnostic, input, messages) {
                Some(fix) => diagnostic.with_fix(fix),
                None => diagnostic,
            })
            .collect()
    }

    /// Remediation for a single diagnostic, computed against `input`.
    pub fn remediate(
        &self,
        diagnostic: &Diagnostic,
        input: &str,
        messages: &Messages,
    ) -> Option<Fix> {
        let rule = self.registry.get(&diagnostic.code)?;
        let fix = rule.fix(diagnostic, input, messages);
        if fix.is_none() {
            log::debug!(
                "No remediation for {} at {}:{}",
                diagnostic.code,
                diagnostic.range.start.line,
                diagnostic.range.start.column
            );
        }
        fix
    }
}

fn walk(
    nodes: &[Node],
    rules: &[&dyn Rule],
    messages: &'static Messages,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for node in nodes {
        for rule in rules {
            let mut ctx = RuleContext::new(rule.id(), messages, diagnostics);
            rule.check_node(node, &mut ctx);
        }
        walk(&node.children, rules, messages, diagnostics);
    }
}
