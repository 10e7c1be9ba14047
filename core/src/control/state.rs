use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target position handed to the controller. No plausibility checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TargetCoordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for TargetCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid coordinates {0:?}: expected `x,y,z`")]
pub struct InvalidCoordinates(pub String);

impl FromStr for TargetCoordinates {
    type Err = InvalidCoordinates;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InvalidCoordinates(s.to_string()))?;
        match parts.as_slice() {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(InvalidCoordinates(s.to_string())),
        }
    }
}

/// Lock state of a controller. Coordinates exist exactly when locked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LockState {
    #[default]
    Idle,
    Locked(TargetCoordinates),
}

impl LockState {
    /// Acquisition always succeeds and replaces any previous lock.
    pub fn acquire(self, coordinates: TargetCoordinates) -> LockState {
        LockState::Locked(coordinates)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked(_))
    }

    pub fn coordinates(&self) -> Option<&TargetCoordinates> {
        match self {
            LockState::Locked(coordinates) => Some(coordinates),
            LockState::Idle => None,
        }
    }
}
