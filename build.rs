use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::Path;

#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "a11ymate";
const SHELLS: [Shell; 5] = [
    Shell::Bash,
    Shell::Fish,
    Shell::Zsh,
    Shell::PowerShell,
    Shell::Elvish,
];

fn render(page: Man) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    page.render(&mut buffer)?;
    Ok(buffer)
}

/// `a11ymate.1` plus `a11ymate-<sub>.1` for each subcommand, with the
/// synopsis naming the full invocation.
fn write_man_pages(cmd: &Command, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(format!("{BIN}.1")), render(Man::new(cmd.clone()))?)?;

    for sub in cmd.get_subcommands().filter(|sub| sub.get_name() != "help") {
        let name = sub.get_name();
        let title = format!("{BIN}-{name}");
        let page = render(Man::new(sub.clone()).title(&title))?;
        let page = String::from_utf8_lossy(&page)
            .replace(&format!("\\fB{name}\\fR"), &format!("\\fB{BIN} {name}\\fR"));
        fs::write(out_dir.join(format!("{title}.1")), page)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut cmd = cli::Cli::command();

    if let Some(out_dir) = env::var_os("OUT_DIR") {
        for shell in SHELLS {
            generate_to(shell, &mut cmd, BIN, &out_dir)?;
        }
    }
    write_man_pages(&cmd, Path::new("target/man"))?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
