use crate::core::data::packed_colour::PackedColour;
use std::{error::Error, fmt};

const DEFAULT_STEPS_PER_SEGMENT: usize = 48;

// Anchor set picked with a gradient tool; any cyclic sequence works.
const DEFAULT_ANCHORS: &[PackedColour] = &[
    PackedColour::from_rgb(0, 7, 100),
    PackedColour::from_rgb(32, 107, 203),
    PackedColour::from_rgb(237, 255, 255),
    PackedColour::from_rgb(255, 170, 0),
    PackedColour::from_rgb(0, 2, 0),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColourRampError {
    NoAnchors,
    ZeroStepsPerSegment,
}

impl fmt::Display for ColourRampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnchors => {
                write!(f, "colour ramp needs at least one anchor colour")
            }
            Self::ZeroStepsPerSegment => {
                write!(f, "colour ramp needs at least one step per segment")
            }
        }
    }
}

impl Error for ColourRampError {}

/// Precomputed cyclic colour table indexed by escape depth.
///
/// Built once before rendering and read concurrently by every worker
/// afterwards; lookups never lock and never fall outside the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourRamp {
    entries: Vec<PackedColour>,
}

impl ColourRamp {
    /// Interpolates `steps_per_segment` colours between each pair of
    /// consecutive anchors, wrapping from the last anchor back to the
    /// first so the table cycles smoothly.
    pub fn from_anchors(
        anchors: &[PackedColour],
        steps_per_segment: usize,
    ) -> Result<Self, ColourRampError> {
        if anchors.is_empty() {
            return Err(ColourRampError::NoAnchors);
        }

        if steps_per_segment == 0 {
            return Err(ColourRampError::ZeroStepsPerSegment);
        }

        let mut entries = Vec::with_capacity(anchors.len() * steps_per_segment);

        for (i, &from) in anchors.iter().enumerate() {
            let to = anchors[(i + 1) % anchors.len()];

            for step in 0..steps_per_segment {
                let t = step as f64 / steps_per_segment as f64;
                entries.push(lerp_colour(from, to, t));
            }
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> PackedColour {
        self.entries[index % self.entries.len()]
    }

    /// Maps an escape depth to its display colour.
    ///
    /// An escaped depth `d` selects `entries[floor(d * density) mod length]`
    /// (floor first, then modulo). A point that never escaped is always
    /// plain black, independent of density and iteration limit.
    #[must_use]
    pub fn colour_for(&self, depth: Option<u32>, colour_density: f64) -> PackedColour {
        match depth {
            Some(d) => {
                let index = (f64::from(d) * colour_density).floor() as usize;
                self.entry(index)
            }
            None => PackedColour::BLACK,
        }
    }
}

impl Default for ColourRamp {
    fn default() -> Self {
        Self::from_anchors(DEFAULT_ANCHORS, DEFAULT_STEPS_PER_SEGMENT)
            .expect("default colour ramp anchors are valid")
    }
}

fn lerp_colour(from: PackedColour, to: PackedColour, t: f64) -> PackedColour {
    PackedColour::from_rgb(
        lerp_channel(from.red(), to.red(), t),
        lerp_channel(from.green(), to.green(), t),
        lerp_channel(from.blue(), to.blue(), t),
    )
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}
