//! Referee line protocol: whitespace-separated integer tokens.
//!
//! Startup: lap count, checkpoint count, then `x y` per checkpoint.
//! Each tick: `x y vx vy angle next_checkpoint_id` for the two own pods,
//! then the two opponents.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

use podracer_core::types::{Point, PodTelemetry, RaceSetup, TickTelemetry};
use podracer_core::RaceError;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("input ended while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("invalid {expected}: {token:?}")]
    InvalidToken { token: String, expected: &'static str },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Race(#[from] RaceError),
}

/// Splits buffered input into tokens, one line at a time.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// True once the input is exhausted and no token is buffered.
    pub fn at_end(&mut self) -> Result<bool, ProtocolError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(true);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(false)
    }

    /// Parse the next token as `T`.
    pub fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ProtocolError> {
        if self.at_end()? {
            return Err(ProtocolError::UnexpectedEof { expected });
        }
        let token = self
            .pending
            .pop_front()
            .ok_or(ProtocolError::UnexpectedEof { expected })?;
        token
            .parse()
            .map_err(|_| ProtocolError::InvalidToken { token, expected })
    }
}

/// Read the startup block.
pub fn read_setup<R: BufRead>(reader: &mut TokenReader<R>) -> Result<RaceSetup, ProtocolError> {
    let laps = reader.parse("lap count")?;
    let count: usize = reader.parse("checkpoint count")?;
    let checkpoints = (0..count)
        .map(|_| {
            Ok(Point::new(
                reader.parse("checkpoint x")?,
                reader.parse("checkpoint y")?,
            ))
        })
        .collect::<Result<Vec<_>, ProtocolError>>()?;
    Ok(RaceSetup { laps, checkpoints })
}

/// Read one tick. `None` when the input ends cleanly before the tick starts.
pub fn read_tick<R: BufRead>(
    reader: &mut TokenReader<R>,
) -> Result<Option<TickTelemetry>, ProtocolError> {
    if reader.at_end()? {
        return Ok(None);
    }
    Ok(Some(TickTelemetry {
        own: [read_pod(reader)?, read_pod(reader)?],
        opponents: [read_pod(reader)?, read_pod(reader)?],
    }))
}

fn read_pod<R: BufRead>(reader: &mut TokenReader<R>) -> Result<PodTelemetry, ProtocolError> {
    Ok(PodTelemetry {
        x: reader.parse("pod x")?,
        y: reader.parse("pod y")?,
        vx: reader.parse("pod vx")?,
        vy: reader.parse("pod vy")?,
        facing: reader.parse("pod angle")?,
        next_checkpoint_id: reader.parse("next checkpoint id")?,
    })
}
