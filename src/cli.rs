use anyhow::Result;
use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::commands::{CompletionsCommand, ConsoleCommand};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "aws-console-url",
    version,
    about = "Create an AWS Management Console sign-in URL for any role you can assume",
    long_about = "Create an AWS Management Console sign-in URL for any role you can assume.\n\n\
                  WARNING: the generated link stays valid for the chosen duration and anyone \
                  holding it can log in without further authentication.",
    disable_version_flag = true
)]
pub struct Cli {
    #[command(flatten)]
    pub console: ConsoleCommand,

    #[arg(short = 'd', long, action = ArgAction::Count, help = "Increase verbosity (-d info, -dd debug, -ddd trace)")]
    pub verbose: u8,

    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        exclusive = true,
        help = "Print a shell completion script and exit"
    )]
    pub completions: Option<Shell>,

    #[arg(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    version: (),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.completions {
            Some(shell) => {
                CompletionsCommand { shell }.execute();
                Ok(())
            }
            None => self.console.execute().await,
        }
    }
}
