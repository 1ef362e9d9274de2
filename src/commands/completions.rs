//! Shell completion and man page output

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

use crate::cli::Cli;
use crate::error::{Result, StructureError};

/// Print completions for `shell` to stdout
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    write_completions(shell, &name, &mut cmd, &mut io::stdout());
    Ok(())
}

fn write_completions<W: Write>(shell: Shell, name: &str, cmd: &mut clap::Command, out: &mut W) {
    clap_complete::generate(shell, cmd, name, out);
}

/// Print the roff man page to stdout
pub fn run_man() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_man(&mut out)?;
    out.flush().map_err(StructureError::Write)
}

fn write_man<W: Write>(out: &mut W) -> Result<()> {
    clap_mangen::Man::new(Cli::command())
        .render(out)
        .map_err(StructureError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        write_completions(Shell::Bash, "folder-structure", &mut cmd, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("folder-structure"));
        assert!(script.contains("generate"));
    }

    #[test]
    fn test_man_page_renders() {
        let mut buf = Vec::new();
        write_man(&mut buf).unwrap();

        let page = String::from_utf8(buf).unwrap();
        assert!(page.contains(".TH"));
        assert!(page.contains(".SH NAME"));
    }
}
