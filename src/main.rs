use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deepl_cli::cli::commands::{configure, glossary, rewrite, translate};
use deepl_cli::cli::{Args, Command, Failure, GlossaryCommand};
use deepl_cli::deepl::print_languages;
use deepl_cli::output::{self, OutputConfig};
use deepl_cli::ui::TerminalNotifier;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    init_tracing(args.verbose);

    let fallback_title = args.command.failure_title();
    if let Err(err) = run(args.command).await {
        let failure = Failure::classify(&err, fallback_title);
        failure.notify(&TerminalNotifier);
        std::process::exit(failure.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "deepl_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Translate(args) => translate::run_translate(args).await,
        Command::Rewrite(args) => rewrite::run_rewrite(args).await,
        Command::Glossary { command } => match command {
            GlossaryCommand::List { from, to } => {
                glossary::list_glossaries(from.as_deref(), to.as_deref()).await
            }
            GlossaryCommand::Show { id } => glossary::show_glossary(&id).await,
            GlossaryCommand::Entries { id, output } => {
                glossary::export_entries(&id, output.as_deref()).await
            }
            GlossaryCommand::Create {
                name,
                from,
                to,
                file,
            } => glossary::create_glossary(name.as_deref(), &from, &to, file.as_deref()).await,
            GlossaryCommand::Delete { id, yes } => glossary::delete_glossary(&id, yes).await,
        },
        Command::Languages { kind } => {
            print_languages(kind);
            Ok(())
        }
        Command::Configure { show } => configure::run_configure(show),
    }
}
