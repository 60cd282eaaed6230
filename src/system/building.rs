/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::dispatch::select_elevator;
use crate::elevator::movement::snapshot_of;
use crate::elevator::{Elevator, Movement};
use crate::shared::structs::Floor;
use crate::shared::{ElevatorId, Leg, SystemError, SystemSnapshot};

/**
 * The building: a fixed, ordered set of elevators sharing one top floor and
 * one per-car capacity.
 *
 * Serves one call at a time. `dispatch` reserves a car for a call, then the
 * caller runs the pickup leg and the drop-off leg through `run` (or drives
 * `move_elevator` itself when it wants the individual steps).
 */
#[derive(Debug, Clone)]
pub struct System {
    elevators: Vec<Elevator>,
    top_floor: Floor,
    elevator_capacity: u32,
}

impl System {
    /// Builds the elevators, each on a random floor drawn from `rng`.
    pub fn initialize<R: Rng>(
        elevator_count: usize,
        max_floor: Floor,
        capacity: u32,
        rng: &mut R,
    ) -> Result<System, SystemError> {
        if elevator_count == 0 || max_floor == 0 || capacity == 0 {
            return Err(SystemError::InvalidConfiguration {
                elevator_count,
                max_floor,
                capacity,
            });
        }

        let elevators = (1..=elevator_count)
            .map(|id| Elevator::new(ElevatorId(id), max_floor, capacity, rng))
            .collect::<Vec<Elevator>>();

        info!(
            "Building ready: {} elevator(s), floors 1-{}, capacity {}",
            elevator_count, max_floor, capacity
        );
        Ok(System {
            elevators,
            top_floor: max_floor,
            elevator_capacity: capacity,
        })
    }

    /// Seeds the placement from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: &BuildingConfig) -> Result<System, SystemError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        System::initialize(config.n_elevators, config.top_floor, config.capacity, &mut rng)
    }

    #[cfg(test)]
    pub(crate) fn with_floors(floors: &[Floor], max_floor: Floor, capacity: u32) -> System {
        let elevators = floors
            .iter()
            .enumerate()
            .map(|(i, &floor)| Elevator::at_floor(ElevatorId(i + 1), floor, max_floor, capacity))
            .collect();
        System {
            elevators,
            top_floor: max_floor,
            elevator_capacity: capacity,
        }
    }

    #[cfg(test)]
    pub(crate) fn elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }

    pub fn top_floor(&self) -> Floor {
        self.top_floor
    }

    pub fn elevator_capacity(&self) -> u32 {
        self.elevator_capacity
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.index_of(id).map(|index| &self.elevators[index])
    }

    pub fn snapshot(&self) -> SystemSnapshot {
        snapshot_of(&self.elevators)
    }

    /// Selects and reserves the nearest eligible elevator for a call.
    pub fn dispatch(&mut self, request_floor: Floor, waiting_count: u32) -> Result<&Elevator, SystemError> {
        debug_assert!((1..=self.top_floor).contains(&request_floor));
        let id = select_elevator(&mut self.elevators, request_floor, waiting_count)?;
        self.elevator(id).ok_or(SystemError::NoEligibleElevator {
            floor: request_floor,
            waiting: waiting_count,
        })
    }

    /// Leg from the elevator's floor to the floor it was reserved for, empty.
    /// `None` for an id this system did not issue.
    pub fn pickup_leg(&self, id: ElevatorId) -> Option<Leg> {
        self.elevator(id)
            .map(|e| Leg::pickup(e.current_floor(), e.destination_floor()))
    }

    /// Leg from the elevator's floor to `destination_floor` with `boarded` passengers.
    pub fn drop_off_leg(&self, id: ElevatorId, destination_floor: Floor, boarded: u32) -> Option<Leg> {
        self.elevator(id)
            .map(|e| Leg::drop_off(e.current_floor(), destination_floor, boarded))
    }

    /// Starts a leg and returns its steps. The leg completes even if the
    /// returned iterator is dropped before it is exhausted.
    pub fn move_elevator(&mut self, id: ElevatorId, leg: Leg) -> Option<Movement<'_>> {
        let index = self.index_of(id)?;
        Some(Movement::start(&mut self.elevators, index, leg))
    }

    /// Runs a leg to completion, calling `on_step` with every snapshot.
    /// Returns the number of floors travelled.
    pub fn run<F>(&mut self, id: ElevatorId, leg: Leg, mut on_step: F) -> Option<Floor>
    where
        F: FnMut(&SystemSnapshot),
    {
        let mut floors = 0;
        let mut movement = self.move_elevator(id, leg)?;
        while let Some(snapshot) = movement.next() {
            if movement.elevator().is_moving() {
                floors += 1;
            }
            on_step(&snapshot);
        }
        Some(floors)
    }

    // Ids are handed out by this system and are 1-based positions
    fn index_of(&self, id: ElevatorId) -> Option<usize> {
        id.0.checked_sub(1).filter(|&index| index < self.elevators.len())
    }
}
