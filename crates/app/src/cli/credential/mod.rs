use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct CredentialCommand {
    #[command(subcommand)]
    command: CredentialSubcommand,
}

#[derive(Debug, Subcommand)]
enum CredentialSubcommand {
    Create(create::CreateCredentialArgs),
}

pub(crate) async fn run(command: CredentialCommand) -> Result<(), String> {
    match command.command {
        CredentialSubcommand::Create(args) => create::run(args).await,
    }
}
