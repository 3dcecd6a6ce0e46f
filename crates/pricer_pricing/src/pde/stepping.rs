//! Row systems and the historical price-only backward step.

use pricer_core::math::solvers::{SolverConfig, TridiagonalSolver};
use pricer_core::types::SolverError;

use super::coefficients::HestonPde;
use super::grid::Grid2D;

/// Flat row-major index of node `(i, j)`.
#[inline]
pub(crate) fn idx(i: usize, j: usize, nv: usize) -> usize {
    i * nv + j
}

/// Grid line whose solve broke down, and why.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SliceFailure {
    pub slice: usize,
    pub source: SolverError,
}

/// Read-only inputs shared by every backward step.
pub(crate) struct StepContext<'g> {
    pub grid: &'g Grid2D,
    pub pde: &'g HestonPde,
    pub dt: f64,
    /// First price index strictly above the barrier, never below 1.
    pub first_live: usize,
    pub strike: f64,
}

/// One tridiagonal system plus the solver scratch, reused line after line.
#[derive(Debug)]
pub(crate) struct RowSystem {
    pub lower: Vec<f64>,
    pub diag: Vec<f64>,
    pub upper: Vec<f64>,
    pub rhs: Vec<f64>,
    pub out: Vec<f64>,
    solver: TridiagonalSolver<f64>,
}

impl RowSystem {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
            rhs: vec![0.0; n],
            out: vec![0.0; n],
            solver: TridiagonalSolver::with_capacity(n, SolverConfig::default()),
        }
    }

    /// Pins unknown `k` to `value`.
    #[inline]
    pub(crate) fn identity_row(&mut self, k: usize, value: f64) {
        self.lower[k] = 0.0;
        self.diag[k] = 1.0;
        self.upper[k] = 0.0;
        self.rhs[k] = value;
    }

    pub(crate) fn solve(&mut self, slice: usize) -> Result<(), SliceFailure> {
        self.solver
            .solve_into(&self.lower, &self.diag, &self.upper, &self.rhs, &mut self.out)
            .map_err(|source| SliceFailure { slice, source })
    }
}

/// Fully implicit price-direction step on every interior variance line.
///
/// Row `i` of line `j`:
/// ```text
/// a = -½·dt·(dSS/dx² − dS/(2dx))
/// b =  1 + dt·(dSS/dx² − rTerm)
/// c = -½·dt·(dSS/dx² + dS/(2dx))
/// ```
/// with `dx = ds(i)`. The outer price rows and the knocked-out rows are
/// identity rows holding their current values.
pub(crate) fn price_only_step(
    ctx: &StepContext<'_>,
    values: &mut [f64],
    row: &mut RowSystem,
) -> Result<(), SliceFailure> {
    let grid = ctx.grid;
    let (nx, nv) = (grid.nx(), grid.nv());
    let (s, v) = (grid.s(), grid.v());
    let dt = ctx.dt;

    for j in 1..nv - 1 {
        for i in 0..nx {
            let current = values[idx(i, j, nv)];
            if i == 0 || i == nx - 1 || i < ctx.first_live {
                row.identity_row(i, current);
                continue;
            }

            let c = ctx.pde.coefficients(s[i], v[j]);
            let dx = grid.ds(i);
            let diffusion = c.d_ss / (dx * dx);
            let convection = c.d_s / (2.0 * dx);

            row.lower[i] = -0.5 * dt * (diffusion - convection);
            row.diag[i] = 1.0 + dt * (diffusion - c.r_term);
            row.upper[i] = -0.5 * dt * (diffusion + convection);
            row.rhs[i] = current;
        }

        row.solve(j)?;

        for i in 1..nx - 1 {
            values[idx(i, j, nv)] = row.out[i];
        }
    }

    Ok(())
}

/// Zeroes every price line at or below the barrier, line 0 included.
pub(crate) fn apply_knock_out(values: &mut [f64], nv: usize, first_live: usize) {
    values[..first_live * nv].fill(0.0);
}
