// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use tb_core::{parse, reconcile_with, SyncOperation};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::Result;
use crate::sync::{BoardClient, GraphqlTransport, HttpTransport, MutationBatcher};

use super::{runtime, Context};

/// Outcome of a push.
#[derive(Debug, Serialize)]
pub struct PushReport {
    /// Checklist entries found in the document.
    pub records: usize,
    pub operations: Vec<SyncOperation>,
    /// False for a dry run.
    pub applied: bool,
}

pub fn run(ctx: &Context, file: &str, dry_run: bool, output: OutputFormat) -> Result<()> {
    let text = read_document(ctx, file)?;
    let settings = ctx.settings()?;
    let transport = HttpTransport::new(settings.endpoint.clone(), ctx.token()?);

    let report = runtime()?.block_on(run_impl(&transport, &settings, &text, dry_run))?;
    print_report(&report, output, &mut std::io::stdout())
}

fn read_document(ctx: &Context, file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(ctx.resolve(Path::new(file)))?)
}

/// Internal implementation that accepts a transport for testing.
pub(crate) async fn run_impl<T: GraphqlTransport>(
    transport: &T,
    settings: &Settings,
    text: &str,
    dry_run: bool,
) -> Result<PushReport> {
    let items = parse(text);
    let board = BoardClient::new(transport)
        .fetch_board(&settings.target, settings.project, settings.includes_note)
        .await?;

    let operations = reconcile_with(&items, &board, settings.includes_note, |item| {
        settings.map_item(item)
    });

    if !dry_run {
        MutationBatcher::new(transport).execute(&operations).await?;
    }

    Ok(PushReport {
        records: items.len(),
        operations,
        applied: !dry_run,
    })
}

pub(crate) fn print_report(
    report: &PushReport,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        OutputFormat::Text => {
            let prefix = if report.applied { "" } else { "would " };
            for op in &report.operations {
                writeln!(out, "{}{}", prefix, op)?;
            }
            let count = report.operations.len();
            let noun = if count == 1 { "change" } else { "changes" };
            if count == 0 {
                writeln!(out, "Board is up to date ({} items checked)", report.records)?;
            } else if report.applied {
                writeln!(out, "Applied {} {}", count, noun)?;
            } else {
                writeln!(out, "{} {} planned (dry run)", count, noun)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "push_tests.rs"]
mod tests;
