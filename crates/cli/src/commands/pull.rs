// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use tb_core::{render_with, Board, Column};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::Result;
use crate::sync::{BoardClient, GraphqlTransport, HttpTransport};

use super::{runtime, Context};

pub fn run(ctx: &Context, output: OutputFormat, out: Option<PathBuf>) -> Result<()> {
    let settings = ctx.settings()?;
    let transport = HttpTransport::new(settings.endpoint.clone(), ctx.token()?);

    let board = runtime()?.block_on(run_impl(&transport, &settings))?;
    let text = format_board(&board, &settings, output)?;

    match out {
        Some(path) => {
            let path = ctx.resolve(&path);
            std::fs::write(&path, text)?;
            println!("Wrote {} to {}", board.name, path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Internal implementation that accepts a transport for testing.
pub(crate) async fn run_impl<T: GraphqlTransport>(
    transport: &T,
    settings: &Settings,
) -> Result<Board> {
    BoardClient::new(transport)
        .fetch_board(&settings.target, settings.project, settings.includes_note)
        .await
}

fn map_board(board: &Board, settings: &Settings) -> Board {
    Board {
        name: board.name.clone(),
        columns: board
            .columns
            .iter()
            .map(|column| Column {
                id: column.id.clone(),
                name: column.name.clone(),
                items: column
                    .items
                    .iter()
                    .map(|item| settings.map_board_item(item))
                    .collect(),
            })
            .collect(),
    }
}

/// Format a board for output, applying the configured url mappings.
pub(crate) fn format_board(
    board: &Board,
    settings: &Settings,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(render_with(board, |item| settings.map_board_item(item))),
        OutputFormat::Json => {
            let mapped = map_board(board, settings);
            Ok(format!("{}\n", serde_json::to_string_pretty(&mapped)?))
        }
    }
}

#[cfg(test)]
#[path = "pull_tests.rs"]
mod tests;
