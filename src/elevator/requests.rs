use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("invalid floor {floor}, serviced floors are 0..{n_floors}")]
    InvalidFloor { floor: u8, n_floors: u8 },
}

/// The set of floors with an outstanding call. A floor is a member from
/// the moment its call button is registered until the car clears it when
/// the doors begin opening there. The tracker holds no scheduling logic;
/// the dispatch policy alone interprets the pending set.
pub struct RequestTracker {
    calls: Vec<bool>,
}

impl RequestTracker {
    pub fn new(n_floors: u8) -> RequestTracker {
        RequestTracker {
            calls: vec![false; n_floors as usize],
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.calls.len() as u8
    }

    /// Adds a floor to the pending set. Already-pending floors are left
    /// untouched, so membership stays monotonic between a press and the
    /// corresponding clear.
    pub fn register(&mut self, floor: u8) -> Result<(), RequestError> {
        if floor as usize >= self.calls.len() {
            return Err(RequestError::InvalidFloor {
                floor,
                n_floors: self.n_floors(),
            });
        }
        if !self.calls[floor as usize] {
            debug!("call registered at floor {}", floor);
            self.calls[floor as usize] = true;
        }
        Ok(())
    }

    /// Removes a floor from the pending set, no-op if absent.
    pub fn clear(&mut self, floor: u8) {
        if let Some(slot) = self.calls.get_mut(floor as usize) {
            if *slot {
                debug!("call cleared at floor {}", floor);
            }
            *slot = false;
        }
    }

    pub fn has_pending(&self) -> bool {
        self.calls.iter().any(|&call| call)
    }

    pub fn is_pending(&self, floor: u8) -> bool {
        self.calls.get(floor as usize).copied().unwrap_or(false)
    }

    pub fn any_pending_above(&self, floor: u8) -> bool {
        self.nearest_above(floor).is_some()
    }

    pub fn any_pending_below(&self, floor: u8) -> bool {
        self.nearest_below(floor).is_some()
    }

    pub fn nearest_above(&self, floor: u8) -> Option<u8> {
        for f in (floor as usize + 1)..self.calls.len() {
            if self.calls[f] {
                return Some(f as u8);
            }
        }
        None
    }

    pub fn nearest_below(&self, floor: u8) -> Option<u8> {
        for f in (0..(floor as usize).min(self.calls.len())).rev() {
            if self.calls[f] {
                return Some(f as u8);
            }
        }
        None
    }

    /// Pending floors in ascending order, for diagnostics.
    pub fn pending_floors(&self) -> Vec<u8> {
        self.calls
            .iter()
            .enumerate()
            .filter(|(_, &call)| call)
            .map(|(f, _)| f as u8)
            .collect()
    }

    /// Per-floor pending flags, indexed by floor, for the render boundary.
    pub fn pending_mask(&self) -> Vec<bool> {
        self.calls.clone()
    }
}
