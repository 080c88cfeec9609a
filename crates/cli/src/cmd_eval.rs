// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern function command implementation.

use std::io::Write;

use anyhow::Context;

use sqlre::CompiledPattern;
use sqlre::cli::{Cli, Command, OutputFormat, SubjectArgs};
use sqlre::config::{self, Config};
use sqlre::eval::{self, Operation, Outcome};
use sqlre::subject::Subject;

/// Run the selected command.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Command::Completions(args) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        clap_complete::generate(args.shell, &mut cmd, "sqlre", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(cli)?;
    let (Some(args), Some(op)) =
        (cli.command.subject_args(), cli.command.operation(config.replace.max_output_bytes))
    else {
        return Ok(());
    };

    let encoding = args.encoding();
    let pattern = CompiledPattern::compile_with(
        args.pattern.as_bytes(),
        encoding,
        &config.pattern.compile_options(),
    )?;
    tracing::debug!("evaluating {}", op.name());

    let outcomes = match (args.subject_bytes(), &args.input) {
        (Some(subject), _) => {
            vec![eval::evaluate(&op, &pattern, Subject::new(subject, encoding))?]
        }
        (None, Some(path)) => {
            let content = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let subjects = split_lines(&content);
            eval::evaluate_batch(&op, &pattern, &subjects)
                .into_iter()
                .collect::<Result<Vec<_>, _>>()?
        }
        (None, None) => anyhow::bail!("no subject given"),
    };

    write_outcomes(args, &op, &outcomes)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(ref path) = cli.config {
        return Ok(config::load(path)?);
    }
    let cwd = std::env::current_dir()?;
    match config::find_config(&cwd) {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}

/// Split file content into one subject per line, without terminators.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n').collect()
}

fn write_outcomes(args: &SubjectArgs, op: &Operation, outcomes: &[Outcome]) -> anyhow::Result<()> {
    let encoding = args.encoding();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text if args.input.is_some() => {
            for outcome in outcomes {
                writeln!(handle, "{}", eval::render_line(outcome, encoding))?;
            }
        }
        OutputFormat::Text => {
            for outcome in outcomes {
                let text = eval::render_text(outcome, encoding);
                if matches!(outcome, Outcome::Values(v) if v.is_empty()) {
                    continue;
                }
                writeln!(handle, "{text}")?;
            }
        }
        OutputFormat::Json => {
            let value = if args.input.is_some() {
                serde_json::Value::Array(
                    outcomes.iter().map(|o| eval::render_json(o, encoding)).collect(),
                )
            } else {
                outcomes.first().map(|o| eval::render_json(o, encoding)).unwrap_or_default()
            };
            let doc = serde_json::json!({ "function": op.name(), "result": value });
            serde_json::to_writer_pretty(&mut handle, &doc)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
