use clap::Parser;
use colored::Colorize;

use git_user_manager::{cli::Cli, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = git_user_manager::run(cli) {
        eprintln!("{} {err}", "error:".red());
        std::process::exit(1);
    }
}
