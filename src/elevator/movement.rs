/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::iter::FusedIterator;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{Leg, SystemSnapshot};

/**
 * Stepwise movement of one elevator through a single leg.
 *
 * `Movement` is a lazy, finite iterator of building snapshots. Every call to
 * `next` advances the elevator by exactly one floor and yields the state of
 * the whole building; once the destination is reached one more snapshot is
 * yielded with the car stopped, after which the car is emptied and the
 * iterator is exhausted. A leg that starts at its destination therefore
 * yields exactly one snapshot.
 *
 * A leg always runs to completion: dropping the iterator early finishes the
 * remaining floors without yielding them.
 *
 * Pacing is left to the consumer; one item is one discrete time unit.
 */
pub struct Movement<'a> {
    elevators: &'a mut [Elevator],
    index: usize,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Travelling,
    Done,
}

impl<'a> Movement<'a> {
    pub(crate) fn start(elevators: &'a mut [Elevator], index: usize, leg: Leg) -> Movement<'a> {
        let elevator = &mut elevators[index];
        debug_assert_eq!(elevator.current_floor(), leg.origin_floor);

        info!(
            "Elevator {} is in motion: floor {} -> {} carrying {}",
            elevator.id(),
            elevator.current_floor(),
            leg.destination_floor,
            leg.occupancy
        );
        elevator.begin_leg(leg.destination_floor, leg.occupancy);

        Movement {
            elevators,
            index,
            phase: Phase::Travelling,
        }
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevators[self.index]
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }
}

impl Iterator for Movement<'_> {
    type Item = SystemSnapshot;

    fn next(&mut self) -> Option<SystemSnapshot> {
        if self.phase == Phase::Done {
            return None;
        }

        let elevator = &mut self.elevators[self.index];
        if elevator.step() {
            debug!("Elevator {} passed floor {}", elevator.id(), elevator.current_floor());
            return Some(snapshot_of(self.elevators));
        }

        // Arrived: report the stopped car with its passengers, then let them out
        elevator.arrive();
        let carried = elevator.occupancy();
        if carried > 0 {
            info!(
                "Elevator {} has arrived at floor {} with {} person/people",
                elevator.id(),
                elevator.destination_floor(),
                carried
            );
        } else {
            info!("Elevator {} has arrived at floor {}", elevator.id(), elevator.destination_floor());
        }

        let snapshot = snapshot_of(self.elevators);
        self.elevators[self.index].unload();
        self.phase = Phase::Done;
        Some(snapshot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Done => (0, Some(0)),
            Phase::Travelling => {
                let elevator = self.elevator();
                let remaining = elevator.distance_to(elevator.destination_floor()) as usize + 1;
                (remaining, Some(remaining))
            }
        }
    }
}

impl ExactSizeIterator for Movement<'_> {}

impl FusedIterator for Movement<'_> {}

impl Drop for Movement<'_> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

pub(crate) fn snapshot_of(elevators: &[Elevator]) -> SystemSnapshot {
    SystemSnapshot {
        elevators: elevators.iter().map(Elevator::status).collect(),
    }
}
