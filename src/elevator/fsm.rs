use crate::config::SimulationConfig;
use crate::elevator::dispatch;
use crate::elevator::requests::{RequestError, RequestTracker};
use crate::shared::{CarState, DecisionPoint, Direction, DispatchResponse, MotionPhase, Snapshot};
use crossbeam_channel as cbc;
use log::{debug, error, warn};
use std::time::Instant;
use thiserror::Error;

/// Ticks spent in each motion phase before the progress counter wraps
/// and the phase transitions.
pub const PHASE_TICKS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchFault {
    #[error("dispatch issued {response:?} at floor {floor} with pending calls {pending:?}")]
    InvalidDispatchResponse {
        response: DispatchResponse,
        floor: u8,
        pending: Vec<u8>,
    },
}

/**
 * Manages elevator operation logic.
 *
 * The `ElevatorFSM` (Finite State Machine) owns the car's physical state
 * and the pending-call set, and advances them one progress unit per tick.
 * When the progress counter wraps it runs the phase transition table:
 * door phases chain into each other, travel phases update the floor, and
 * the idle, arrival and door-close wraps consult the dispatch policy.
 * A `Stop` decision is always followed, after the door cycle, by a second
 * decision at the same floor, which picks the direction to leave in.
 *
 * # Fields
 * - `press_rx`:        Receives call-button presses from the driver.
 * - `tick_rx`:         Receives motion ticks at the driver's cadence.
 * - `snapshot_tx`:     Broadcasts state snapshots for rendering.
 * - `terminate_rx`:    Receives the shutdown signal.
 * - `state`:           The car's floor, phase, direction and progress.
 * - `requests`:        The set of floors with an outstanding call.
 * - `n_floors`:        The total number of floors serviced by the car.
 */

pub struct ElevatorFSM {
    // Driver channels
    press_rx: cbc::Receiver<u8>,
    tick_rx: cbc::Receiver<Instant>,
    snapshot_tx: cbc::Sender<Snapshot>,
    terminate_rx: cbc::Receiver<()>,

    // Private fields
    state: CarState,
    requests: RequestTracker,
    n_floors: u8,
}

impl ElevatorFSM {
    pub fn new(
        config: &SimulationConfig,
        press_rx: cbc::Receiver<u8>,
        tick_rx: cbc::Receiver<Instant>,
        snapshot_tx: cbc::Sender<Snapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> ElevatorFSM {
        ElevatorFSM {
            press_rx,
            tick_rx,
            snapshot_tx,
            terminate_rx,
            state: CarState::new(),
            requests: RequestTracker::new(config.n_floors),
            n_floors: config.n_floors,
        }
    }

    pub fn run(mut self) {
        loop {
            cbc::select! {
                recv(self.press_rx) -> msg => {
                    match msg {
                        Ok(floor) => {
                            if let Err(e) = self.press_call_button(floor) {
                                warn!("ignoring call button: {}", e);
                            }
                        }
                        Err(e) => {
                            error!("press channel closed: {}", e);
                            break;
                        }
                    }
                }
                recv(self.tick_rx) -> msg => {
                    match msg {
                        Ok(_) => {
                            crate::unwrap_or_exit!(self.advance());
                        }
                        Err(e) => {
                            error!("tick channel closed: {}", e);
                            break;
                        }
                    }
                }
                recv(self.terminate_rx) -> _ => break,
            }
        }
    }

    /// Registers a call at `floor`. A press at the floor the car is
    /// currently serving (doors opening or open there) is a documented
    /// no-op; an out-of-range floor is a recoverable caller error that
    /// leaves the car state untouched.
    pub fn press_call_button(&mut self, floor: u8) -> Result<(), RequestError> {
        if floor == self.state.floor
            && matches!(
                self.state.phase,
                MotionPhase::DoorsOpening | MotionPhase::DoorsOpen
            )
        {
            debug!("call at floor {} ignored, car is already serving it", floor);
            return Ok(());
        }
        self.requests.register(floor)?;
        self.send_snapshot();
        Ok(())
    }

    /// Advances the car by one tick. Each phase lasts `PHASE_TICKS`
    /// ticks; on the wrap the phase transition table runs and may invoke
    /// the dispatch policy. The only fallible outcome is a dispatch
    /// contract violation, which is fatal to the simulation.
    pub fn advance(&mut self) -> Result<(), DispatchFault> {
        self.state.progress += 1;
        if self.state.progress < PHASE_TICKS {
            return Ok(());
        }
        self.state.progress = 0;

        let before = (self.state.phase, self.state.floor);
        let outcome = match self.state.phase {
            MotionPhase::Idle => self.on_decision(DecisionPoint::Arrival),
            MotionPhase::MovingUp => {
                self.state.floor += 1;
                self.on_decision(DecisionPoint::Arrival)
            }
            MotionPhase::MovingDown => {
                self.state.floor -= 1;
                self.on_decision(DecisionPoint::Arrival)
            }
            MotionPhase::DoorsOpening => {
                self.state.phase = MotionPhase::DoorsOpen;
                Ok(())
            }
            MotionPhase::DoorsOpen => {
                self.state.phase = MotionPhase::DoorsClosing;
                Ok(())
            }
            MotionPhase::DoorsClosing => self.on_decision(DecisionPoint::DoorsClosed),
        };

        if (self.state.phase, self.state.floor) != before {
            self.send_snapshot();
        }
        outcome
    }

    pub fn current_floor(&self) -> u8 {
        self.state.floor
    }

    pub fn phase(&self) -> MotionPhase {
        self.state.phase
    }

    pub fn progress(&self) -> u8 {
        self.state.progress
    }

    pub fn is_pending(&self, floor: u8) -> bool {
        self.requests.is_pending(floor)
    }

    pub fn has_pending(&self) -> bool {
        self.requests.has_pending()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            pending_calls: self.requests.pending_mask(),
        }
    }

    fn on_decision(&mut self, point: DecisionPoint) -> Result<(), DispatchFault> {
        let floor = self.state.floor;
        let response = dispatch::decide(point, floor, self.state.direction, &self.requests);
        debug!("{:?} decision at floor {}: {:?}", point, floor, response);
        self.apply_response(response)
    }

    fn apply_response(&mut self, response: DispatchResponse) -> Result<(), DispatchFault> {
        match response {
            DispatchResponse::Stop => {
                // Clearing happens as the doors begin opening. The travel
                // direction is retained through the door cycle so the
                // door-close decision continues the sweep.
                self.requests.clear(self.state.floor);
                self.state.phase = MotionPhase::DoorsOpening;
            }
            DispatchResponse::Up => {
                if self.state.floor == self.n_floors - 1 {
                    return self.boundary_fault(response);
                }
                self.state.phase = MotionPhase::MovingUp;
                self.state.direction = Direction::Up;
            }
            DispatchResponse::Down => {
                if self.state.floor == 0 {
                    return self.boundary_fault(response);
                }
                self.state.phase = MotionPhase::MovingDown;
                self.state.direction = Direction::Down;
            }
            DispatchResponse::None => {
                self.state.phase = MotionPhase::Idle;
                self.state.direction = Direction::Stop;
            }
        }
        Ok(())
    }

    /// A direction that would take the car past the end of the shaft is a
    /// dispatch contract violation. The car is parked in the shaft and
    /// the fault is surfaced rather than silently clamped, since an
    /// inconsistent pending set would otherwise go unnoticed.
    fn boundary_fault(&mut self, response: DispatchResponse) -> Result<(), DispatchFault> {
        self.state.phase = MotionPhase::Idle;
        self.state.direction = Direction::Stop;
        Err(DispatchFault::InvalidDispatchResponse {
            response,
            floor: self.state.floor,
            pending: self.requests.pending_floors(),
        })
    }

    fn send_snapshot(&self) {
        let _ = self.snapshot_tx.send(self.snapshot());
    }
}

#[cfg(test)]
impl ElevatorFSM {
    pub fn test_set_state(&mut self, state: CarState) {
        self.state = state;
    }

    pub fn test_state(&self) -> CarState {
        self.state
    }

    pub fn test_apply_response(
        &mut self,
        response: DispatchResponse,
    ) -> Result<(), DispatchFault> {
        self.apply_response(response)
    }
}
