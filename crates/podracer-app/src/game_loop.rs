//! Tick loop: read telemetry, decide, write two commands, flush.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use podracer_sim::RaceEngine;

use crate::protocol::{read_setup, read_tick, ProtocolError, TokenReader};

/// Play a whole race over the given streams. Returns the number of ticks
/// played once the input closes.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<u64, ProtocolError> {
    let mut reader = TokenReader::new(input);
    let setup = read_setup(&mut reader)?;
    let mut engine = RaceEngine::new(&setup)?;

    while let Some(telemetry) = read_tick(&mut reader)? {
        let [first, second] = engine.tick(&telemetry)?;
        debug!(tick = engine.ticks(), %first, %second, "commands");
        writeln!(output, "{first}")?;
        writeln!(output, "{second}")?;
        output.flush()?;
    }

    info!(ticks = engine.ticks(), "input closed");
    Ok(engine.ticks())
}
