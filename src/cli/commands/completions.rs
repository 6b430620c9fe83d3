//! `safezone completions` — generate shell completion scripts.
//!
//! Usage:
//!   safezone completions bash > ~/.bash_completion.d/safezone
//!   safezone completions zsh

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    #[test]
    fn shell_names_parse() {
        for name in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["safezone", "completions", name]).unwrap();
            assert!(matches!(cli.command, Commands::Completions { .. }));
        }
    }

    #[test]
    fn unknown_shell_is_rejected() {
        assert!(Cli::try_parse_from(["safezone", "completions", "csh"]).is_err());
    }
}
