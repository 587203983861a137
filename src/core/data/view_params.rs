use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewParamsError {
    NonPositiveHalfExtent { half_extent: f64 },
    ZeroMaxIterations,
    NonPositiveColourDensity { colour_density: f64 },
}

impl fmt::Display for ViewParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveHalfExtent { half_extent } => {
                write!(f, "view half extent must be positive: {}", half_extent)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveColourDensity { colour_density } => {
                write!(f, "colour density must be positive: {}", colour_density)
            }
        }
    }
}

impl Error for ViewParamsError {}

/// The complex-plane window and iteration limit for one render.
///
/// The viewed region is a square of side `2 * half_extent` centred on
/// `(center_x, center_y)`; it is stretched over the full image regardless
/// of the image's aspect ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParams {
    center_x: f64,
    center_y: f64,
    half_extent: f64,
    max_iterations: u32,
    colour_density: f64,
}

impl ViewParams {
    pub fn new(
        center_x: f64,
        center_y: f64,
        half_extent: f64,
        max_iterations: u32,
        colour_density: f64,
    ) -> Result<Self, ViewParamsError> {
        if !(half_extent > 0.0) {
            return Err(ViewParamsError::NonPositiveHalfExtent { half_extent });
        }

        if max_iterations == 0 {
            return Err(ViewParamsError::ZeroMaxIterations);
        }

        if !(colour_density > 0.0) {
            return Err(ViewParamsError::NonPositiveColourDensity { colour_density });
        }

        Ok(Self {
            center_x,
            center_y,
            half_extent,
            max_iterations,
            colour_density,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_density(&self) -> f64 {
        self.colour_density
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.center_x - self.half_extent
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.center_x + self.half_extent
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.center_y - self.half_extent
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.center_y + self.half_extent
    }
}

impl Default for ViewParams {
    /// The classic whole-set view.
    fn default() -> Self {
        Self {
            center_x: -0.65,
            center_y: 0.0,
            half_extent: 1.2,
            max_iterations: 150,
            colour_density: 10.0,
        }
    }
}
