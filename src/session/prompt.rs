/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::Floor;
use crate::shared::ElevatorId;

/**
 * Line-based operator input with validation.
 *
 * Every question is repeated until the answer parses and lies in the allowed
 * range. `Ok(None)` means the input ended; callers treat it as "quit".
 */
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Prompter<R, W> {
        Prompter { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn positive_integer(&mut self, message: &str) -> io::Result<Option<u32>> {
        loop {
            write!(self.output, "{}", message)?;
            self.output.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.parse::<u32>() {
                Ok(value) if value > 0 => return Ok(Some(value)),
                _ => writeln!(self.output, "Invalid input. Please enter a positive integer.")?,
            }
        }
    }

    pub fn floor_number(&mut self, top_floor: Floor) -> io::Result<Option<Floor>> {
        let question = format!("Please enter your floor number (1 - {}):", top_floor);
        let complaint = format!("Invalid floor number. Please enter a number between 1 and {}.", top_floor);
        self.integer_in(&question, &complaint, 1..=top_floor)
    }

    pub fn waiting_count(&mut self, capacity: u32) -> io::Result<Option<u32>> {
        let question = format!("Please enter the number of people waiting (up to {}):", capacity);
        let complaint = format!("Invalid number of people. Please enter a number between 0 and {}.", capacity);
        self.integer_in(&question, &complaint, 0..=capacity)
    }

    pub fn destination_floor(
        &mut self,
        elevator: ElevatorId,
        elevator_floor: Floor,
        call_floor: Floor,
        top_floor: Floor,
    ) -> io::Result<Option<Floor>> {
        writeln!(self.output, "Elevator {} is now at floor {}.", elevator, elevator_floor)?;
        let question = format!(
            "Please select the floor that you are going to (current floor: {}):",
            call_floor
        );
        let complaint = format!(
            "Invalid destination floor. Please enter a number between 1 and {}.",
            top_floor
        );
        self.integer_in(&question, &complaint, 1..=top_floor)
    }

    /// `false` when the operator typed `q` or the input ended.
    pub fn run_again(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Simulation completed, press any key to run again or 'q' to quit...")?;
        self.output.flush()?;
        Ok(matches!(self.read_line()?, Some(answer) if answer != "q"))
    }

    fn integer_in(
        &mut self,
        question: &str,
        complaint: &str,
        range: RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.parse::<u32>() {
                Ok(value) if range.contains(&value) => return Ok(Some(value)),
                _ => {
                    debug!("Rejected input {:?}, expected {:?}", line, range);
                    writeln!(self.output, "{}", complaint)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
