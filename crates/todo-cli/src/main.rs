mod cli;
mod render;
mod repl;

use std::io;

use clap::Parser;
use todo_core::ToDoListBuilder;

use crate::cli::Cli;
use crate::render::Renderer;
use crate::repl::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.config();
    let todo = ToDoListBuilder::new().config(config.todo).build();
    let mut session = Session::new(todo, Renderer::new(config.output));

    // Everything lives in memory; nothing to flush on exit.
    session.run(io::stdin().lock(), io::stdout().lock())
}
