//! Hand landmark data model (MediaPipe hand landmarker convention).
//!
//! 21 normalized 2D points per hand, origin top-left, produced fresh
//! every video frame by the JS-side detector.

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

/// The four non-thumb fingertips used for fist detection.
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked joint position in normalized [0,1]x[0,1] coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark in normalized space.
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One frame's worth of hand landmarks.
#[derive(Clone, Copy, Debug)]
pub struct LandmarkFrame {
    pub points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse a flat array of 63 floats (21 landmarks x [x, y, z]).
    ///
    /// The detector reports a relative depth as the third component;
    /// this pipeline is 2D and discards it. Returns `None` on length
    /// mismatch.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != LANDMARK_COUNT * 3 {
            return None;
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            point.x = data[i * 3];
            point.y = data[i * 3 + 1];
        }
        Some(Self { points })
    }

    pub fn wrist(&self) -> &Landmark {
        &self.points[WRIST]
    }

    pub fn thumb_tip(&self) -> &Landmark {
        &self.points[THUMB_TIP]
    }

    pub fn index_tip(&self) -> &Landmark {
        &self.points[INDEX_TIP]
    }
}

// ============================================================================
// TESTS
// ============================================================================
