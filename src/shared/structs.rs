/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = u32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ElevatorId(pub(crate) usize);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "movingUp")]
    MovingUp,
    #[serde(rename = "movingDown")]
    MovingDown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_going_up(going_up: bool) -> Direction {
        if going_up {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }
}

/**
 * A single directed movement of one elevator.
 *
 * A passenger journey is two legs: the pickup leg travels empty to the
 * caller's floor, the drop-off leg carries the boarded passengers to their
 * chosen floor. The movement engine applies `destination_floor` and
 * `occupancy` before the first step and empties the car on arrival.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub origin_floor: Floor,
    pub destination_floor: Floor,
    pub occupancy: u32,
}

impl Leg {
    pub fn pickup(origin_floor: Floor, destination_floor: Floor) -> Leg {
        Leg {
            origin_floor,
            destination_floor,
            occupancy: 0,
        }
    }

    pub fn drop_off(origin_floor: Floor, destination_floor: Floor, occupancy: u32) -> Leg {
        Leg {
            origin_floor,
            destination_floor,
            occupancy,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    #[serde(rename = "currentFloor")]
    pub current_floor: Floor,
    #[serde(rename = "destinationFloor")]
    pub destination_floor: Floor,
    pub occupancy: u32,
    pub capacity: u32,
    pub moving: bool,
    pub direction: Direction,
    pub behaviour: Behaviour,
}

/// State of every elevator in the building at one instant, in collection order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub elevators: Vec<ElevatorStatus>,
}

impl SystemSnapshot {
    pub fn get(&self, id: ElevatorId) -> Option<&ElevatorStatus> {
        self.elevators.iter().find(|status| status.id == id)
    }
}
