/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{OutputFormat, SimulationConfig};
use crate::shared::SystemSnapshot;

/**
 * Writes building snapshots for the operator.
 *
 * Text output lists one line per elevator; JSON output writes one snapshot
 * per line. During a leg every step waits for the next tick of a
 * `step_time` ticker so movement plays out at one floor per tick. With a
 * zero step time steps are written back to back.
 */
pub struct Renderer {
    format: OutputFormat,
    step_time: Duration,
    ticker: Option<cbc::Receiver<Instant>>,
}

impl Renderer {
    pub fn new(format: OutputFormat, step_time: Duration) -> Renderer {
        Renderer {
            format,
            step_time,
            ticker: None,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Renderer {
        Renderer::new(config.output, Duration::from_millis(config.step_time))
    }

    /// Restarts pacing so the first step of a leg waits a full step time.
    pub fn begin_leg(&mut self) {
        self.ticker = if self.step_time.is_zero() {
            None
        } else {
            Some(cbc::tick(self.step_time))
        };
    }

    /// Whether steps currently wait for a ticker.
    pub fn is_paced(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn render_step<W: Write>(&mut self, out: &mut W, snapshot: &SystemSnapshot) -> io::Result<()> {
        if let Some(ticker) = &self.ticker {
            // Ticker never disconnects while held
            let _ = ticker.recv();
        }
        self.render(out, snapshot)?;

        let in_motion = snapshot.elevators.iter().any(|status| status.moving);
        if self.format == OutputFormat::Text && self.is_paced() && in_motion {
            writeln!(
                out,
                "\nSimulating elevator movement at {} ms/floor, please wait . . .",
                self.step_time.as_millis()
            )?;
            out.flush()?;
        }
        Ok(())
    }

    pub fn render<W: Write>(&self, out: &mut W, snapshot: &SystemSnapshot) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => write_status(out, snapshot)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, snapshot)?;
                writeln!(out)?;
            }
        }
        out.flush()
    }
}

/// Moving elevators are flagged with a leading `>`.
pub fn write_status<W: Write>(out: &mut W, snapshot: &SystemSnapshot) -> io::Result<()> {
    writeln!(out, "Elevator Status:")?;
    for status in &snapshot.elevators {
        let (marker, moving_status) = if status.moving { ("> ", "Moving") } else { ("", "Stopped") };
        writeln!(
            out,
            "{}{}. Current Floor: {}, Destination Floor: {}, People inside: {}, Capacity: {}, Direction: {}, Moving Status: {}",
            marker,
            status.id,
            status.current_floor,
            status.destination_floor,
            status.occupancy,
            status.capacity,
            status.direction.as_str(),
            moving_status
        )?;
    }
    Ok(())
}
