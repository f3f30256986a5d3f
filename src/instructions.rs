use once_cell::sync::Lazy;
use regex::Regex;

use crate::direction::Rotation;
use crate::error::{NetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Forward(u32),
    Turn(Rotation),
}

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+|[LR]").unwrap());

/// Parses a path like `10R5L5`: digit runs move forward, `L`/`R` turn.
pub fn parse_instructions(s: &str) -> Result<Vec<Instruction>> {
    let text = s.trim();
    let mut rv = Vec::new();
    let mut covered = 0;

    for token in TOKEN.find_iter(text) {
        if token.start() != covered {
            return Err(unexpected_at(text, covered));
        }
        covered = token.end();

        rv.push(match token.as_str() {
            "L" => Instruction::Turn(Rotation::Left),
            "R" => Instruction::Turn(Rotation::Right),
            digits => Instruction::Forward(digits.parse().map_err(|_| {
                NetError::MalformedInput(format!("distance {} is too large", digits))
            })?),
        });
    }

    if covered != text.len() {
        return Err(unexpected_at(text, covered));
    }

    Ok(rv)
}

fn unexpected_at(text: &str, offset: usize) -> NetError {
    let ch = text[offset..].chars().next().unwrap_or(' ');
    NetError::InvalidInstruction(format!("unexpected {:?} at offset {}", ch, offset))
}
