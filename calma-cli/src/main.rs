mod cli;
mod command;
mod editor_utils;
mod inference;
mod render;
mod repl;

use anyhow::Result;
use calma_core::Dashboard;
use clap::Parser;
use cli::Cli;
use inference::{HostedGenerator, HostedSentiment, InferenceClient};
use render::{RenderOptions, Renderer};
use repl::Repl;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("calma: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.load_config()?;
    tracing::debug!(
        url = %config.inference_url,
        generation = %config.generation_model,
        sentiment = %config.sentiment_model,
        "starting session"
    );

    // Built once, shared by reference with the session.
    let client = InferenceClient::new(&config)?;
    let generation = Arc::new(HostedGenerator::new(
        client.clone(),
        &config.generation_model,
    ));
    let classification = Arc::new(HostedSentiment::new(client, &config.sentiment_model));
    let dashboard =
        Dashboard::new(generation, classification).with_breath_phase(config.breath_phase());

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.use_color(),
    }));
    let mut repl = Repl::new(dashboard, renderer, config.editor.clone());
    repl.run(io::stdin().lock())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calma=warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
