use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use a11ymate::linter::{Diagnostic, Severity, apply_fixes};
use a11ymate::messages::Language;
use a11ymate::php::{is_php_path, prepare_source};
use a11ymate::{Config, lint_source};

mod cli;
use cli::{Cli, Commands, MessageLanguage, OutputFormat};

/// Extensions picked up when walking a directory.
const SOURCE_EXTENSIONS: &[&str] = &["html", "htm", "php", "phtml"];

fn read_all(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: Option<&Path>) -> io::Result<PathBuf> {
    match input_path {
        Some(p) if p.is_dir() => Ok(p.to_path_buf()),
        Some(p) => Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf()),
        None => std::env::current_dir(),
    }
}

fn load_config(explicit: Option<&Path>, input_path: Option<&Path>) -> io::Result<Config> {
    let start_dir = start_dir_for(input_path)?;
    let (cfg, cfg_path) = a11ymate::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

/// Expand directories into the markup files below them, honouring ignore files.
fn collect_files(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in ignore::WalkBuilder::new(path).build() {
            let entry = entry.map_err(io::Error::other)?;
            let is_source = entry.file_type().is_some_and(|ft| ft.is_file())
                && entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
            if is_source {
                found.push(entry.into_path());
            }
        }
        found.sort();
        log::debug!("Found {} file(s) under {}", found.len(), path.display());
        files.extend(found);
    }
    Ok(files)
}

fn print_diff(file_path: &str, original: &str, fixed: &str) {
    let diff = TextDiff::from_lines(original, fixed);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),   // normal
                };

                print!("{}{}{}", style, sign, change.value());

                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

fn message_language(language: MessageLanguage) -> Language {
    match language {
        MessageLanguage::En => Language::En,
        MessageLanguage::De => Language::De,
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, php } => {
            let input = read_all(file.as_deref())?;
            let is_php = php || file.as_deref().is_some_and(is_php_path);
            let source = prepare_source(&input, is_php);
            let roots = a11ymate::parse(&source);
            println!("{:#?}", roots);
            Ok(())
        }
        Commands::Lint {
            paths,
            check,
            fix,
            diff,
            format,
            php,
            language,
        } => {
            let options = LintOptions {
                config: cli.config,
                fix,
                diff,
                format,
                php,
                language: language.map(message_language),
            };
            let remaining = run_lint(&paths, &options)?;
            if check && remaining > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        #[cfg(feature = "lsp")]
        Commands::Lsp => {
            // LSP needs tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async { a11ymate::lsp::run().await })?;
            Ok(())
        }
        #[cfg(not(feature = "lsp"))]
        Commands::Lsp => Err(io::Error::other(
            "a11ymate was built without the `lsp` feature",
        )),
    }
}

struct LintOptions {
    config: Option<PathBuf>,
    fix: bool,
    diff: bool,
    format: OutputFormat,
    php: bool,
    language: Option<Language>,
}

/// Lint every input and report. Returns the number of issues left unfixed.
fn run_lint(paths: &[PathBuf], options: &LintOptions) -> io::Result<usize> {
    let inputs: Vec<Option<PathBuf>> = if paths.is_empty() {
        vec![None]
    } else {
        collect_files(paths)?.into_iter().map(Some).collect()
    };

    let mut remaining = 0;
    let mut json_diagnostics: Vec<(&str, Vec<Diagnostic>)> = Vec::new();

    for path in &inputs {
        let path = path.as_deref();
        let mut cfg = load_config(options.config.as_deref(), path)?;
        if let Some(language) = options.language {
            cfg.language = language;
        }

        let input = read_all(path)?;
        let is_php = options.php || path.is_some_and(is_php_path);
        let file_name = path.and_then(|p| p.to_str()).unwrap_or("<stdin>");
        let diagnostics = lint_source(&input, is_php, &cfg);
        log::debug!("{}: {} diagnostic(s)", file_name, diagnostics.len());

        if options.fix {
            let (fixed, applied) =
                apply_fixes(&input, diagnostics.iter().filter_map(|d| d.fix.as_ref()));
            remaining += lint_source(&fixed, is_php, &cfg).len();

            if options.diff {
                if fixed != input {
                    print_diff(file_name, &input, &fixed);
                }
            } else if let Some(p) = path {
                if applied > 0 {
                    fs::write(p, &fixed)?;
                    println!("Fixed {} issue(s) in {}", applied, p.display());
                }
            } else {
                // Stdin: output to stdout
                print!("{fixed}");
            }
            continue;
        }

        remaining += diagnostics.len();
        match options.format {
            OutputFormat::Human => print_diagnostics(&diagnostics, file_name),
            OutputFormat::Json => json_diagnostics.push((file_name, diagnostics)),
        }
    }

    if options.fix {
        return Ok(remaining);
    }

    match options.format {
        OutputFormat::Human if remaining == 0 => println!("No issues found"),
        OutputFormat::Human => println!("\nFound {} issue(s)", remaining),
        OutputFormat::Json => {
            let json_report: Vec<JsonDiagnostic> = json_diagnostics
                .iter()
                .flat_map(|(file_name, diagnostics)| {
                    diagnostics
                        .iter()
                        .map(|d| JsonDiagnostic::new(d, file_name))
                })
                .collect();
            let json = serde_json::to_string_pretty(&json_report).map_err(io::Error::other)?;
            println!("{json}");
        }
    }

    Ok(remaining)
}

fn print_diagnostics(diagnostics: &[Diagnostic], file_name: &str) {
    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };

        println!(
            "{severity_str}[{}]: {} at {}:{}:{}",
            diag.code,
            diag.message,
            file_name,
            diag.range.start.line + 1,
            diag.range.start.column + 1
        );
        println!("  {}", diag.description);

        if let Some(fix) = &diag.fix {
            println!("  \x1b[36mhelp\x1b[0m: {}", fix.message); // cyan
        }
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    file: &'a str,
    code: &'a str,
    severity: &'static str,
    message: &'a str,
    description: &'a str,
    /// 1-based
    line: usize,
    /// 1-based, in chars
    column: usize,
    end_line: usize,
    end_column: usize,
    fix: Option<JsonFix<'a>>,
}

#[derive(Serialize)]
struct JsonFix<'a> {
    message: &'a str,
    edits: Vec<JsonEdit<'a>>,
}

/// Byte offsets into the original text.
#[derive(Serialize)]
struct JsonEdit<'a> {
    start: usize,
    end: usize,
    replacement: &'a str,
}

impl<'a> JsonDiagnostic<'a> {
    fn new(diag: &'a Diagnostic, file: &'a str) -> Self {
        Self {
            file,
            code: &diag.code,
            severity: match diag.severity {
                Severity::Warning => "warning",
            },
            message: &diag.message,
            description: &diag.description,
            line: diag.range.start.line + 1,
            column: diag.range.start.column + 1,
            end_line: diag.range.end.line + 1,
            end_column: diag.range.end.column + 1,
            fix: diag.fix.as_ref().map(|fix| JsonFix {
                message: &fix.message,
                edits: fix
                    .edits
                    .iter()
                    .map(|edit| JsonEdit {
                        start: edit.range.start().into(),
                        end: edit.range.end().into(),
                        replacement: &edit.replacement,
                    })
                    .collect(),
            }),
        }
    }
}
