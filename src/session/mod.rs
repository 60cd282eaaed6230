pub mod prompt;
pub mod render;
pub mod session_tests;

pub use prompt::Prompter;
pub use render::Renderer;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::shared::{ElevatorId, Leg, SystemError};
use crate::system::System;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Served { elevator: ElevatorId, floors: u32 },
    NoElevator,
    InputClosed,
}

/***************************************/
/*             Public API              */
/***************************************/

/// Asks for every building dimension the configuration left at zero.
/// Returns `false` if the input ended first.
pub fn complete_building<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    building: &mut BuildingConfig,
) -> io::Result<bool> {
    if building.n_elevators == 0 {
        match prompter.positive_integer("Enter the number of elevators: ")? {
            Some(n) => building.n_elevators = n as usize,
            None => return Ok(false),
        }
    }
    if building.top_floor == 0 {
        match prompter.positive_integer("Enter the maximum floor: ")? {
            Some(n) => building.top_floor = n,
            None => return Ok(false),
        }
    }
    if building.capacity == 0 {
        match prompter.positive_integer("Enter the maximum capacity: ")? {
            Some(n) => building.capacity = n,
            None => return Ok(false),
        }
    }
    Ok(true)
}

/**
 * Operator session: one call at a time, dispatch then pickup then drop-off.
 */
pub struct Session<R, W> {
    system: System,
    prompter: Prompter<R, W>,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(system: System, prompter: Prompter<R, W>, renderer: Renderer) -> Session<R, W> {
        Session {
            system,
            prompter,
            renderer,
        }
    }

    pub fn into_parts(self) -> (System, Prompter<R, W>) {
        (self.system, self.prompter)
    }

    /// Serves calls until the operator quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.serve_call()? {
                CallOutcome::InputClosed => break,
                CallOutcome::NoElevator => continue,
                CallOutcome::Served { elevator, floors } => {
                    info!("Call served by elevator {} over {} floor(s)", elevator, floors);
                    if !self.prompter.run_again()? {
                        break;
                    }
                }
            }
        }
        info!("Session ended");
        Ok(())
    }

    pub fn serve_call(&mut self) -> io::Result<CallOutcome> {
        let snapshot = self.system.snapshot();
        self.renderer.render(self.prompter.output(), &snapshot)?;

        let top_floor = self.system.top_floor();
        let call_floor = match self.prompter.floor_number(top_floor)? {
            Some(floor) => floor,
            None => return Ok(CallOutcome::InputClosed),
        };
        let waiting = match self.prompter.waiting_count(self.system.elevator_capacity())? {
            Some(waiting) => waiting,
            None => return Ok(CallOutcome::InputClosed),
        };

        let id = match self.system.dispatch(call_floor, waiting) {
            Ok(elevator) => elevator.id(),
            Err(SystemError::NoEligibleElevator { .. }) => {
                writeln!(self.prompter.output(), "No available elevators. Please try again later.")?;
                return Ok(CallOutcome::NoElevator);
            }
            Err(e) => {
                warn!("Unexpected dispatch failure: {}", e);
                return Ok(CallOutcome::NoElevator);
            }
        };

        // Pickup leg
        let pickup = self.system.pickup_leg(id).ok_or_else(|| unknown_elevator(id))?;
        let mut floors = self.drive(id, pickup)?;
        writeln!(
            self.prompter.output(),
            "\nElevator {} has arrived at your floor {}.\n",
            id,
            pickup.destination_floor
        )?;

        let elevator_floor = self.system.elevator(id).map_or(call_floor, |e| e.current_floor());
        let destination = match self
            .prompter
            .destination_floor(id, elevator_floor, call_floor, top_floor)?
        {
            Some(floor) => floor,
            None => return Ok(CallOutcome::InputClosed),
        };

        // Drop-off leg
        let drop_off = self
            .system
            .drop_off_leg(id, destination, waiting)
            .ok_or_else(|| unknown_elevator(id))?;
        floors += self.drive(id, drop_off)?;
        let people = if waiting > 0 {
            format!(" with {} person/people", waiting)
        } else {
            String::new()
        };
        writeln!(
            self.prompter.output(),
            "\nElevator {} has arrived at your floor {}{}.\n",
            id,
            destination,
            people
        )?;

        Ok(CallOutcome::Served { elevator: id, floors })
    }

    fn drive(&mut self, id: ElevatorId, leg: Leg) -> io::Result<u32> {
        let renderer = &mut self.renderer;
        let out = self.prompter.output();
        let mut result = Ok(());

        renderer.begin_leg();
        let floors = self
            .system
            .run(id, leg, |snapshot| {
                if result.is_ok() {
                    result = renderer.render_step(&mut *out, snapshot);
                }
            })
            .ok_or_else(|| unknown_elevator(id))?;
        result.map(|_| floors)
    }
}

fn unknown_elevator(id: ElevatorId) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("elevator {} is not in this building", id))
}
