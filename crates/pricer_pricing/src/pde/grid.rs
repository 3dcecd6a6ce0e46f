//! Tanh-stretched (price, variance) mesh.
//!
//! Each axis maps the uniform parameter `t_k = -1 + 2k/(N-1)` through
//! `tanh(β·t) / tanh(β)` and rescales into `[min, max]`. The mapping is
//! steepest at `t = 0`, so nodes are sparsest around the axis centre and
//! densest towards both ends (the barrier side of the price axis and the
//! `v → 0` side of the variance axis). The endpoints land exactly on `min`
//! and `max`.

use super::error::PdeError;

/// Smallest accepted node count per axis (two boundaries plus one interior node).
pub const MIN_AXIS_POINTS: usize = 3;

/// Per-axis stretch factors β.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretch {
    /// Price-axis stretch
    pub price: f64,
    /// Variance-axis stretch
    pub variance: f64,
}

impl Stretch {
    /// Default price-axis stretch.
    pub const DEFAULT_PRICE: f64 = 2.5;
    /// Default variance-axis stretch.
    pub const DEFAULT_VARIANCE: f64 = 2.0;
}

impl Default for Stretch {
    fn default() -> Self {
        Self {
            price: Self::DEFAULT_PRICE,
            variance: Self::DEFAULT_VARIANCE,
        }
    }
}

/// Immutable two-dimensional grid over price `S` and variance `v`.
///
/// Read-only after construction, so one grid can back any number of
/// solvers, including solvers on other threads.
///
/// # Examples
/// ```
/// use pricer_pricing::pde::Grid2D;
///
/// let grid = Grid2D::new(50.0, 150.0, 101, 0.0, 1.0, 51).unwrap();
/// assert_eq!(grid.nx(), 101);
/// assert_eq!(grid.s()[0], 50.0);
/// assert_eq!(grid.s()[100], 150.0);
///
/// // Centered spacing in the interior
/// let expected = 0.5 * (grid.s()[11] - grid.s()[9]);
/// assert!((grid.ds(10) - expected).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D {
    s: Vec<f64>,
    v: Vec<f64>,
    stretch: Stretch,
}

impl Grid2D {
    /// Builds a grid with the default stretch factors.
    ///
    /// # Errors
    /// `PdeError::InvalidGrid` if either axis has fewer than
    /// [`MIN_AXIS_POINTS`] nodes, a bound is not finite, `min >= max`, or
    /// `s_min` / `v_min` is negative.
    pub fn new(
        s_min: f64,
        s_max: f64,
        nx: usize,
        v_min: f64,
        v_max: f64,
        nv: usize,
    ) -> Result<Self, PdeError> {
        Self::with_stretch(s_min, s_max, nx, v_min, v_max, nv, Stretch::default())
    }

    /// Builds a grid with explicit stretch factors.
    ///
    /// # Errors
    /// As [`Grid2D::new`], plus a non-positive or non-finite stretch factor.
    pub fn with_stretch(
        s_min: f64,
        s_max: f64,
        nx: usize,
        v_min: f64,
        v_max: f64,
        nv: usize,
        stretch: Stretch,
    ) -> Result<Self, PdeError> {
        let s = stretched_axis("price", s_min, s_max, nx, stretch.price)?;
        let v = stretched_axis("variance", v_min, v_max, nv, stretch.variance)?;
        Ok(Self { s, v, stretch })
    }

    /// Price axis.
    #[inline]
    pub fn s(&self) -> &[f64] {
        &self.s
    }

    /// Variance axis.
    #[inline]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Number of price nodes.
    #[inline]
    pub fn nx(&self) -> usize {
        self.s.len()
    }

    /// Number of variance nodes.
    #[inline]
    pub fn nv(&self) -> usize {
        self.v.len()
    }

    /// Lowest price node.
    #[inline]
    pub fn s_min(&self) -> f64 {
        self.s[0]
    }

    /// Highest price node.
    #[inline]
    pub fn s_max(&self) -> f64 {
        self.s[self.s.len() - 1]
    }

    /// Lowest variance node.
    #[inline]
    pub fn v_min(&self) -> f64 {
        self.v[0]
    }

    /// Highest variance node.
    #[inline]
    pub fn v_max(&self) -> f64 {
        self.v[self.v.len() - 1]
    }

    /// Stretch factors the grid was built with.
    #[inline]
    pub fn stretch(&self) -> Stretch {
        self.stretch
    }

    /// Local price spacing at `i`.
    ///
    /// # Panics
    /// If `i >= nx()`.
    #[inline]
    pub fn ds(&self, i: usize) -> f64 {
        local_spacing(&self.s, i)
    }

    /// Local variance spacing at `j`.
    ///
    /// # Panics
    /// If `j >= nv()`.
    #[inline]
    pub fn dv(&self, j: usize) -> f64 {
        local_spacing(&self.v, j)
    }
}

/// One-sided difference at the ends, centered half-difference inside.
#[inline]
fn local_spacing(axis: &[f64], k: usize) -> f64 {
    let last = axis.len() - 1;
    if k == 0 {
        axis[1] - axis[0]
    } else if k == last {
        axis[last] - axis[last - 1]
    } else {
        0.5 * (axis[k + 1] - axis[k - 1])
    }
}

fn stretched_axis(
    name: &str,
    min: f64,
    max: f64,
    n: usize,
    beta: f64,
) -> Result<Vec<f64>, PdeError> {
    if n < MIN_AXIS_POINTS {
        return Err(PdeError::InvalidGrid(format!(
            "{} axis needs at least {} points, got {}",
            name, MIN_AXIS_POINTS, n
        )));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(PdeError::InvalidGrid(format!(
            "{} bounds must be finite, got [{}, {}]",
            name, min, max
        )));
    }
    if min < 0.0 {
        return Err(PdeError::InvalidGrid(format!(
            "{} axis must start at or above zero, got {}",
            name, min
        )));
    }
    if min >= max {
        return Err(PdeError::InvalidGrid(format!(
            "{} axis needs min < max, got [{}, {}]",
            name, min, max
        )));
    }
    if !beta.is_finite() || beta <= 0.0 {
        return Err(PdeError::InvalidGrid(format!(
            "{} stretch must be finite and > 0, got {}",
            name, beta
        )));
    }

    let norm = beta.tanh();
    let half_width = 0.5 * (max - min);
    let centre = 0.5 * (max + min);
    let last = n - 1;

    let mut axis: Vec<f64> = (0..n)
        .map(|k| {
            let t = -1.0 + 2.0 * k as f64 / last as f64;
            centre + half_width * (beta * t).tanh() / norm
        })
        .collect();
    axis[0] = min;
    axis[last] = max;

    // Very steep stretches saturate tanh and collapse neighbouring nodes.
    if let Some(k) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(PdeError::InvalidGrid(format!(
            "{} axis is not strictly increasing at node {} (stretch {} too steep for {} points)",
            name,
            k + 1,
            beta,
            n
        )));
    }

    Ok(axis)
}
