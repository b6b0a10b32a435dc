use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "a11ymate")]
#[command(author, version)]
#[command(about = "An accessibility linter for HTML and PHP templates")]
#[command(
    long_about = "a11ymate is a CLI linter and LSP that checks HTML and PHP templates for \
    common WCAG violations: images without alt text, a missing or duplicated <main> landmark, \
    skipped heading levels, insufficient color contrast, required inputs without error \
    descriptions and a missing document language. Most findings come with an automatic fix."
)]
#[command(after_help = "\
EXAMPLES:

    # Lint a file
    a11ymate lint index.html

    # Lint every HTML and PHP file below a directory
    a11ymate lint templates/

    # Lint from stdin
    cat page.html | a11ymate lint

    # Apply all automatic fixes in place
    a11ymate lint --fix index.html

    # Use custom config
    a11ymate lint --config custom.toml index.html

    # Parse and inspect the element tree
    a11ymate parse index.html

CONFIGURATION:

a11ymate looks for configuration files in this order:
  1. Explicit --config path
  2. a11ymate.toml or .a11ymate.toml in the input's directory and its parents
  3. ~/.config/a11ymate/config.toml (XDG)
  4. Built-in defaults

Example .a11ymate.toml:

    language = \"de\"

    [rules]
    disable = [\"html-lang\"]")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, a11ymate will \
        search for .a11ymate.toml or a11ymate.toml in the input's directory and its parents, \
        then fall back to ~/.config/a11ymate/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageLanguage {
    En,
    De,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check documents for accessibility issues
    #[command(
        long_about = "Check HTML and PHP documents for accessibility issues. Paths may be \
        files or directories; directories are walked recursively (respecting .gitignore) for \
        .html, .htm, .php and .phtml files. Reads stdin when no path is given."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Lint a file
    a11ymate lint index.html

    # Exit with code 1 when issues are found (for CI)
    a11ymate lint --check site/

    # Show what --fix would change without writing
    a11ymate lint --fix --diff index.html

    # Machine-readable output
    a11ymate lint --format json index.html

RULES:

  img-alt          <img> without an alt attribute
  mainTag          no <main> landmark, or more than one
  heading-order    skipped heading levels and repeated <h1>
  color-contrast   inline colors below WCAG contrast, links marked by color alone
  input-feedback   required <input> without aria-describedby
  html-lang        <html> without a lang attribute")]
    Lint {
        /// Files or directories (stdin if not provided)
        #[arg(help = "Input files or directories")]
        paths: Vec<PathBuf>,

        /// Exit with code 1 if issues are found
        #[arg(long)]
        #[arg(help = "Exit with code 1 if any issue is found")]
        check: bool,

        /// Apply automatic fixes
        #[arg(long)]
        #[arg(help = "Apply automatic fixes")]
        #[arg(
            long_help = "Apply every available automatic fix. Files are rewritten in place; \
            stdin input is fixed to stdout. Fixes that would touch the same text are applied \
            one at a time, so run again to pick up the rest."
        )]
        fix: bool,

        /// Show fixes as a diff instead of writing them
        #[arg(long, requires = "fix")]
        diff: bool,

        /// Output format for diagnostics
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Treat stdin as PHP
        #[arg(long)]
        #[arg(help = "Treat stdin input as a PHP template")]
        php: bool,

        /// Message language (overrides config)
        #[arg(long, value_enum)]
        language: Option<MessageLanguage>,
    },
    /// Parse and display the element tree for debugging
    #[command(
        long_about = "Parse a document and display the element tree the rules operate on. \
        Each node shows its tag name, attributes and the span of its opening tag."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the tree
    a11ymate parse index.html

    # Parse from stdin
    echo '<main><img src=\"a.png\"></main>' | a11ymate parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Treat stdin as PHP
        #[arg(long)]
        php: bool,
    },
    /// Start the Language Server Protocol server
    #[command(
        long_about = "Start the a11ymate Language Server Protocol (LSP) server for editor \
        integration. The server publishes diagnostics on open, change and save, and offers \
        quick fixes as code actions."
    )]
    #[command(after_help = "\
The LSP server communicates via stdin/stdout and is typically launched automatically by your \
editor's LSP client. You generally don't need to run this command manually.")]
    Lsp,
}
