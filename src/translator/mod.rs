//! Program-to-commands translator.
//!
//! Runs a learner's generated program inside a closed interpreter whose
//! only ambient capability is the command accumulator: the program can
//! `emit` commands and nothing else. A step budget bounds evaluation so a
//! runaway `repeat` cannot wedge the session.
//!
//! Faults never escape this module. A program that fails to parse yields
//! the empty sequence; a program that faults mid-run keeps every command
//! it emitted before the fault point. Either way the fault is only logged,
//! so a half-built workspace still produces a playable prefix.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

#[cfg(test)]
mod tests;

use log::warn;

use crate::config::translator::STEP_BUDGET;
use crate::game::types::{Command, CommandKind};
use crate::translator::error::RunError;
use crate::translator::parser::Item;

/// Translate program text into its ordered command sequence.
///
/// Same source always yields the same sequence. An empty result means
/// "nothing to run": the caller must surface guidance instead of starting
/// playback.
pub fn translate(source: &str) -> Vec<Command> {
    let tokens = match lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(fault) => {
            warn!("[Translator] Lex fault: {}", fault);
            return Vec::new();
        }
    };

    let program = match parser::parse(tokens) {
        Ok(program) => program,
        Err(fault) => {
            warn!("[Translator] Parse fault: {}", fault);
            return Vec::new();
        }
    };

    let mut sink = Vec::new();
    let mut steps: u32 = 0;
    if let Err(fault) = run_items(&program, &mut sink, &mut steps) {
        warn!(
            "[Translator] Program fault after {} commands: {}",
            sink.len(),
            fault
        );
    }
    sink
}

/// Walk the program tree, appending a command for every `emit`.
fn run_items(items: &[Item], sink: &mut Vec<Command>, steps: &mut u32) -> Result<(), RunError> {
    for item in items {
        match item {
            Item::Emit { name, payload, line } => {
                tick(steps)?;
                let kind = CommandKind::from_name(name).ok_or_else(|| RunError::UnknownCommand {
                    line: *line,
                    name: name.clone(),
                })?;
                sink.push(Command {
                    kind,
                    payload: payload.clone(),
                });
            }
            Item::Repeat { count, body } => {
                for _ in 0..*count {
                    tick(steps)?;
                    run_items(body, sink, steps)?;
                }
            }
        }
    }
    Ok(())
}

fn tick(steps: &mut u32) -> Result<(), RunError> {
    *steps += 1;
    if *steps > STEP_BUDGET {
        return Err(RunError::BudgetExhausted {
            budget: STEP_BUDGET,
        });
    }
    Ok(())
}
