/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::structs::Floor;
use crate::shared::{ElevatorId, SystemError};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Picks the elevator that answers a call and reserves it.
 *
 * An elevator is eligible when the waiting passengers fit next to the ones
 * already on board and it is either idle or already heading toward
 * `request_floor`. Among the eligible ones the nearest wins; equal distances
 * go to the first in collection order (lowest id). The winner's destination
 * is set to `request_floor`.
 *
 * An idle car is eligible regardless of the direction of its last leg and
 * competes on distance alone with cars already travelling toward the call.
 */
pub fn select_elevator(
    elevators: &mut [Elevator],
    request_floor: Floor,
    waiting_count: u32,
) -> Result<ElevatorId, SystemError> {
    debug!("Call at floor {} for {} passenger(s)", request_floor, waiting_count);

    // min_by_key keeps the first of equal keys, which is the lowest id
    let nearest = elevators
        .iter_mut()
        .filter(|e| e.can_serve(request_floor, waiting_count))
        .inspect(|e| debug!("  eligible: elevator {} at floor {}", e.id(), e.current_floor()))
        .min_by_key(|e| e.distance_to(request_floor));

    match nearest {
        Some(elevator) => {
            elevator.reserve(request_floor);
            info!(
                "Elevator {} at floor {} reserved for call at floor {}",
                elevator.id(),
                elevator.current_floor(),
                request_floor
            );
            Ok(elevator.id())
        }
        None => {
            info!("No available elevators for call at floor {}", request_floor);
            Err(SystemError::NoEligibleElevator {
                floor: request_floor,
                waiting: waiting_count,
            })
        }
    }
}
