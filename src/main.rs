use std::sync::Arc;

use clap::Parser;
use tower_lsp::lsp_types::notification::Notification;
use tower_lsp::{LspService, Server};
use tracing::{error, info};
use z80_cheatsheet_lsp::client::LineChanged;
use z80_cheatsheet_lsp::server::Backend;
use z80_cheatsheet_lsp::InstructionTable;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let table = Arc::new(load_table(&args));
    info!("loaded {} instructions", table.len());

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::build(move |client| Backend::new(client, table.clone()))
        .custom_method(LineChanged::METHOD, Backend::on_line_changed)
        .finish();
    Server::new(stdin, stdout, socket).serve(service).await;
}

#[derive(Parser, Debug)]
#[command(name = "z80-cheatsheet-lsp")]
struct Args {
    /// Path to an instruction data file overriding the bundled table
    #[arg(long)]
    instructions_path: Option<std::path::PathBuf>,
}

/// Load the instruction table, exiting on failure. A malformed data resource
/// is fatal at startup; the server cannot operate without its table.
fn load_table(args: &Args) -> InstructionTable {
    let result = match &args.instructions_path {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => InstructionTable::load(&bytes),
            Err(err) => {
                error!("failed to read {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => InstructionTable::bundled(),
    };

    match result {
        Ok(table) => table,
        Err(err) => {
            error!("failed to load instruction data: {err}");
            std::process::exit(1);
        }
    }
}
