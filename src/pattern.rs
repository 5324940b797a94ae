use std::convert::TryFrom;
use std::fmt;

use crate::consts::*;
use crate::decoder::decode;
use crate::errors::FormatError;

/// A `Pattern` is one decoded splice file: the hardware version it was saved
/// with, its tempo, and the instrument tracks in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub(crate) version: String,
    pub(crate) tempo: f32, // Beats per minute
    pub(crate) tracks: Vec<Track>,
}

/// A single instrument and its 16-step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub(crate) id: u8, // As declared; not unique
    pub(crate) name: String,
    pub(crate) steps: [Step; NUM_STEPS],
}

/// One cell of the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Rest,
    Hit,
}

impl Pattern {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl Track {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step; NUM_STEPS] {
        &self.steps
    }
}

impl Step {
    pub fn is_hit(self) -> bool {
        self == Step::Hit
    }
}

impl From<u8> for Step {
    /// Any nonzero byte counts as a hit.
    fn from(value: u8) -> Self {
        if value == 0 {
            Step::Rest
        } else {
            Step::Hit
        }
    }
}

impl<'a> TryFrom<&'a [u8]> for Pattern {
    type Error = FormatError;

    fn try_from(data: &'a [u8]) -> Result<Self, Self::Error> {
        decode(data)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::Rest => write!(f, "-"),
            Step::Hit => write!(f, "x"),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) {}\t", self.id, self.name)?;
        for bar in self.steps.chunks(STEPS_PER_BAR) {
            write!(f, "|")?;
            for step in bar {
                write!(f, "{}", step)?;
            }
        }
        write!(f, "|")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }

        Ok(())
    }
}
