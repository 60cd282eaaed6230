/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::Floor;

/***************************************/
/*             Public API              */
/***************************************/
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SystemError {
    /// Building dimensions must all be positive.
    #[error(
        "invalid configuration: elevators={elevator_count}, max floor={max_floor}, capacity={capacity} (all must be positive)"
    )]
    InvalidConfiguration {
        elevator_count: usize,
        max_floor: Floor,
        capacity: u32,
    },

    /// No elevator passed the capacity and direction filter. Recoverable.
    #[error("no eligible elevator for {waiting} passenger(s) at floor {floor}")]
    NoEligibleElevator { floor: Floor, waiting: u32 },
}
