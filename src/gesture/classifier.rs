//! Per-frame finger-state classification.
//!
//! A [`GestureCode`] holds one bit per digit, thumb first. The classifier
//! looks at nothing but the current frame's geometry, so identical poses
//! always yield identical codes.
//!
//! The thumb test compares x-coordinates and assumes a right hand seen
//! through a horizontally mirrored camera image: the thumb counts as
//! extended when its tip lies left of its IP joint. Left hands or unflipped
//! feeds classify the thumb inverted.

use anyhow::{bail, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::pose::{
    INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP,
    THUMB_IP, THUMB_TIP,
};
use crate::core::HandPose;

pub const FINGER_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; FINGER_COUNT] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Position of this finger in a gesture code, thumb = 0
    pub fn position(&self) -> usize {
        *self as usize
    }
}

/// (finger, tip landmark, PIP joint landmark)
const VERTICAL_FINGERS: [(Finger, usize, usize); 4] = [
    (Finger::Index, INDEX_TIP, INDEX_PIP),
    (Finger::Middle, MIDDLE_TIP, MIDDLE_PIP),
    (Finger::Ring, RING_TIP, RING_PIP),
    (Finger::Pinky, PINKY_TIP, PINKY_PIP),
];

/// Five-bit finger state: bit `n` set means finger `n` is extended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GestureCode(u8);

impl GestureCode {
    /// Closed fist
    pub const NONE: GestureCode = GestureCode(0);

    pub fn from_fingers(extended: [bool; FINGER_COUNT]) -> Self {
        let bits = extended
            .iter()
            .enumerate()
            .filter(|(_, up)| **up)
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        Self(bits)
    }

    /// Parse the thumb..pinky 0/1 list used by the mapping file
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        if bits.len() != FINGER_COUNT {
            bail!(
                "Gesture needs {} finger states, got {}",
                FINGER_COUNT,
                bits.len()
            );
        }
        let mut extended = [false; FINGER_COUNT];
        for (i, bit) in bits.iter().enumerate() {
            extended[i] = match bit {
                0 => false,
                1 => true,
                other => bail!("Finger state must be 0 or 1, got {}", other),
            };
        }
        Ok(Self::from_fingers(extended))
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0 & (1 << finger.position()) != 0
    }

    pub fn fingers(&self) -> [bool; FINGER_COUNT] {
        Finger::ALL.map(|finger| self.is_extended(finger))
    }

    pub fn bits(&self) -> [u8; FINGER_COUNT] {
        self.fingers().map(u8::from)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn extended_count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for GestureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl Serialize for GestureCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GestureCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = Vec::<u8>::deserialize(deserializer)?;
        GestureCode::from_bits(&bits).map_err(D::Error::custom)
    }
}

/// Classify one hand pose into its finger-state code.
///
/// Exactly equal coordinates count as curled.
pub fn classify(pose: &HandPose) -> GestureCode {
    let mut extended = [false; FINGER_COUNT];

    extended[Finger::Thumb.position()] = pose.landmark(THUMB_TIP).x < pose.landmark(THUMB_IP).x;

    for (finger, tip, pip) in VERTICAL_FINGERS {
        extended[finger.position()] = pose.landmark(tip).y < pose.landmark(pip).y;
    }

    GestureCode::from_fingers(extended)
}
