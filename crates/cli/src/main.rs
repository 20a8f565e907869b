//! Issue labeler CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Resolve inputs** — flags with `INPUT_*` environment fallbacks, assembled
//!    once into a [`labeler::LabelerInputs`] (see [`config`]).
//! 2. **Wire observability** — `tracing-subscriber` on stderr, optionally with an
//!    OpenTelemetry OTLP exporter (see [`observability`]).
//! 3. **Construct infrastructure** — a [`github::GithubClient`], a
//!    [`labeler::RandomColorSource`], and the [`reporter::ActionsReporter`],
//!    injected into a [`labeler::LabelReconciler`].
//! 4. **Map the outcome** — exit code 0 on success; on failure a single
//!    `::error::` line with the failure message and exit code 1.

mod config;
mod observability;
mod reporter;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use github::GithubClient;
use labeler::{LabelReconciler, RandomColorSource};
use tracing::info;

use crate::config::Cli;
use crate::reporter::ActionsReporter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = ActionsReporter;

    let telemetry = match observability::init() {
        Ok(telemetry) => telemetry,
        Err(e) => {
            reporter.error(&format!("{e:#}"));
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli, reporter).await;
    telemetry.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, reporter: ActionsReporter) -> anyhow::Result<()> {
    let (token, inputs) = cli.into_inputs();
    inputs.report(&reporter);

    let api_url = inputs.api_url.clone();
    let request = inputs.validate(&reporter)?;

    let client = GithubClient::new(&api_url, &token).context("failed to create GitHub client")?;
    let reconciler = LabelReconciler::new(client, RandomColorSource, reporter);

    let outcome = reconciler.reconcile(&request).await?;
    info!(?outcome, "reconciliation finished");
    Ok(())
}
