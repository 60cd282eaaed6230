/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::Rng;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::Floor;
use crate::shared::{Behaviour, Direction, ElevatorId, ElevatorStatus};

/**
 * One physical elevator car.
 *
 * Holds position, reservation and load for a single car. The fields are only
 * readable from outside the crate; the dispatch selector writes
 * `destination_floor` when it reserves the car and the movement engine owns
 * everything else.
 *
 * # Fields
 * - `id`:                  Stable 1-based identifier, position in the building's collection.
 * - `current_floor`:       Floor the car is at, in `[1, max_floor]`.
 * - `destination_floor`:   Reserved or travelling-to floor, in `[1, max_floor]`.
 * - `max_floor`:           Top floor this car can serve.
 * - `capacity`:            Maximum number of passengers.
 * - `occupancy`:           Passengers on board, in `[0, capacity]`.
 * - `moving`:              Whether a leg is in progress.
 * - `going_up`:            Direction of the current leg, or of the last one while idle.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    id: ElevatorId,
    current_floor: Floor,
    destination_floor: Floor,
    max_floor: Floor,
    capacity: u32,
    occupancy: u32,
    moving: bool,
    going_up: bool,
}

impl Elevator {
    /// Creates an idle, empty car on a random floor in `[1, max_floor]`.
    pub fn new<R: Rng>(id: ElevatorId, max_floor: Floor, capacity: u32, rng: &mut R) -> Elevator {
        let start_floor = rng.gen_range(1..=max_floor);
        Elevator::at_floor(id, start_floor, max_floor, capacity)
    }

    pub(crate) fn at_floor(id: ElevatorId, floor: Floor, max_floor: Floor, capacity: u32) -> Elevator {
        debug_assert!((1..=max_floor).contains(&floor));
        Elevator {
            id,
            current_floor: floor,
            destination_floor: floor,
            max_floor,
            capacity,
            occupancy: 0,
            moving: false,
            going_up: true,
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn destination_floor(&self) -> Floor {
        self.destination_floor
    }

    pub fn max_floor(&self) -> Floor {
        self.max_floor
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_going_up(&self) -> bool {
        self.going_up
    }

    pub fn direction(&self) -> Direction {
        Direction::from_going_up(self.going_up)
    }

    pub fn behaviour(&self) -> Behaviour {
        match (self.moving, self.going_up) {
            (false, _) => Behaviour::Idle,
            (true, true) => Behaviour::MovingUp,
            (true, false) => Behaviour::MovingDown,
        }
    }

    /// Whether `waiting` more passengers fit and the car can reach `floor`
    /// without reversing.
    pub fn can_serve(&self, floor: Floor, waiting: u32) -> bool {
        let fits = self.capacity >= waiting && self.occupancy + waiting <= self.capacity;
        let on_the_way = !self.moving
            || (self.going_up && self.current_floor <= floor)
            || (!self.going_up && self.current_floor >= floor);
        fits && on_the_way
    }

    pub fn distance_to(&self, floor: Floor) -> Floor {
        self.current_floor.abs_diff(floor)
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            destination_floor: self.destination_floor,
            occupancy: self.occupancy,
            capacity: self.capacity,
            moving: self.moving,
            direction: self.direction(),
            behaviour: self.behaviour(),
        }
    }

    /***************************************/
    /*       Crate-internal mutators       */
    /***************************************/
    pub(crate) fn reserve(&mut self, floor: Floor) {
        debug_assert!((1..=self.max_floor).contains(&floor));
        self.destination_floor = floor;
    }

    pub(crate) fn begin_leg(&mut self, destination_floor: Floor, occupancy: u32) {
        debug_assert!((1..=self.max_floor).contains(&destination_floor));
        debug_assert!(occupancy <= self.capacity);
        self.destination_floor = destination_floor;
        self.occupancy = occupancy;
        self.moving = true;
    }

    /// Moves one floor toward the destination. Returns `false` once arrived.
    pub(crate) fn step(&mut self) -> bool {
        if self.current_floor == self.destination_floor {
            return false;
        }

        self.going_up = self.destination_floor > self.current_floor;
        if self.going_up {
            self.current_floor += 1;
        } else {
            self.current_floor -= 1;
        }
        true
    }

    pub(crate) fn arrive(&mut self) {
        self.moving = false;
    }

    pub(crate) fn unload(&mut self) {
        self.occupancy = 0;
    }
}
