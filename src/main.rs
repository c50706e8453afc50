use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use submission_organizer_lib::commands::organize_cmds::{
    format_summary, resolve_request, run_organize, Cli,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => {
            println!("\n{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let request = resolve_request(cli, &mut input, &mut output)?;
    let summary = run_organize(&request)
        .with_context(|| format!("Organizing {} failed", request.target.display()))?;
    Ok(format_summary(&summary))
}
