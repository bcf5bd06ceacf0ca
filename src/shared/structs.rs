/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MotionPhase {
    Idle,
    MovingUp,
    MovingDown,
    DoorsOpening,
    DoorsOpen,
    DoorsClosing,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

/// Verdict of the dispatch policy at a decision point. `None` sends the
/// car idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResponse {
    Stop,
    Up,
    Down,
    None,
}

/// The two points in the motion cycle where the dispatch policy is
/// consulted: on arriving at a floor (an idle wrap counts as arriving at
/// the current floor), and again at the same floor once the doors have
/// closed after a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionPoint {
    Arrival,
    DoorsClosed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarState {
    pub floor: u8,
    pub phase: MotionPhase,
    pub direction: Direction,
    pub progress: u8,
}

impl CarState {
    pub fn new() -> CarState {
        CarState {
            floor: 0,
            phase: MotionPhase::Idle,
            direction: Direction::Stop,
            progress: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: CarState,
    #[serde(rename = "pendingCalls")]
    pub pending_calls: Vec<bool>,
}
