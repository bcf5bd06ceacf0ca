use crate::elevator::requests::RequestTracker;
use crate::shared::{DecisionPoint, Direction, DispatchResponse};
use log::trace;

/// Decides the car's next action at a decision point.
///
/// The discipline is directional (SCAN-style): stop when the current
/// floor is pending, keep travelling while requests remain ahead in the
/// established direction, reverse once only the other side has requests,
/// and go idle when the pending set is empty. From a standstill with
/// requests on both sides the nearest floor wins, an exact distance tie
/// going to the higher floor.
///
/// Pure with respect to its inputs: the tracker is only queried, and the
/// same `(floor, last_direction, pending)` triple always yields the same
/// response. `Up` is never produced at the top floor and `Down` never at
/// floor 0, since both require a pending floor strictly beyond the car.
pub fn decide(
    point: DecisionPoint,
    floor: u8,
    last_direction: Direction,
    requests: &RequestTracker,
) -> DispatchResponse {
    let response = if requests.is_pending(floor) {
        DispatchResponse::Stop
    } else {
        let above = requests.any_pending_above(floor);
        let below = requests.any_pending_below(floor);
        match (above, below) {
            (false, false) => DispatchResponse::None,
            (true, false) => DispatchResponse::Up,
            (false, true) => DispatchResponse::Down,
            (true, true) => match last_direction {
                Direction::Up => DispatchResponse::Up,
                Direction::Down => DispatchResponse::Down,
                Direction::Stop => {
                    // Nearest request wins from standstill, tie to the
                    // higher floor.
                    match (requests.nearest_above(floor), requests.nearest_below(floor)) {
                        (Some(up), Some(down)) if up - floor <= floor - down => {
                            DispatchResponse::Up
                        }
                        _ => DispatchResponse::Down,
                    }
                }
            },
        }
    };
    trace!(
        "decide({:?}, floor {}, {:?}) -> {:?}",
        point,
        floor,
        last_direction,
        response
    );
    response
}
