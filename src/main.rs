use clap::Parser;
use safezone::cli::commands;
use safezone::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli),
        Commands::Status => commands::status::execute(&cli),
        Commands::Credential {
            ref label,
            ref user,
            force,
        } => commands::credential::execute(&cli, label, user.as_deref(), force),
        Commands::Note { ref label, force } => commands::note::execute(&cli, label, force),
        Commands::View {
            ref label,
            json,
            copy,
        } => commands::view::execute(&cli, label, json, copy),
        Commands::List => commands::list::execute(&cli),
        Commands::Delete { ref label, force } => commands::delete::execute(&cli, label, force),
        Commands::Reset { force } => commands::reset::execute(&cli, force),
        Commands::Completions { shell } => commands::completions::execute(shell),
        Commands::Audit { last, ref since } => {
            commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
    };

    if let Err(e) = result {
        safezone::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
