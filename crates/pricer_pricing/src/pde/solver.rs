//! Backward solver for the down-and-out barrier call.

use pricer_models::instruments::BarrierOption;
use pricer_models::models::HestonParams;
use tracing::{debug, trace, warn};

use super::coefficients::HestonPde;
use super::douglas::DouglasStepper;
use super::error::PdeError;
use super::grid::Grid2D;
use super::settings::{AdiScheme, SolverSettings, VarianceSelection};
use super::stepping::{apply_knock_out, idx, price_only_step, RowSystem, StepContext};

/// Relative tolerance for treating the barrier as sitting on `Smin`.
const BARRIER_MATCH_TOLERANCE: f64 = 1e-9;

/// Lifecycle of a [`BarrierAdiSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Surface holds the terminal payoff.
    Initialized,
    /// `completed` backward steps have been applied.
    Stepping {
        /// Steps applied so far
        completed: usize,
    },
    /// All steps applied and a price has been read off.
    Priced,
    /// A step broke down; the surface is unusable.
    Failed,
}

enum Stepper {
    PriceOnly(RowSystem),
    Douglas(Box<DouglasStepper>),
}

/// Finite-difference solver for a down-and-out call under Heston.
///
/// Owns the value surface `V[i][j]` (price index `i`, variance index `j`),
/// starts it at the terminal payoff and steps it backwards `time_steps`
/// times. The grid is borrowed and the parameters are copied in.
///
/// Nodes at or below the barrier, and always the lowest price line, are
/// zeroed after every step. The lowest grid price only coincides with the
/// barrier when the grid is built with `Smin == B`; any other choice is
/// logged at construction.
///
/// # Examples
/// ```
/// use pricer_models::instruments::BarrierOption;
/// use pricer_models::models::HestonParams;
/// use pricer_pricing::pde::{BarrierAdiSolver, Grid2D};
///
/// let grid = Grid2D::new(50.0, 150.0, 101, 0.0, 1.0, 51).unwrap();
/// let params = HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap();
/// let contract = BarrierOption::new(100.0, 50.0, 1.0).unwrap();
///
/// let mut solver = BarrierAdiSolver::new(&grid, &params, contract, 100).unwrap();
/// let price = solver.price_down_and_out_call(100.0).unwrap();
/// assert!(price.is_finite() && price >= 0.0);
/// ```
pub struct BarrierAdiSolver<'a> {
    grid: &'a Grid2D,
    pde: HestonPde,
    contract: BarrierOption,
    settings: SolverSettings,
    time_steps: usize,
    dt: f64,
    first_live: usize,
    values: Vec<f64>,
    completed: usize,
    state: SolverState,
    stepper: Stepper,
}

impl<'a> BarrierAdiSolver<'a> {
    /// Creates a solver with the default settings (price-only scheme,
    /// grid-position variance read-out).
    ///
    /// # Errors
    /// See [`BarrierAdiSolver::with_settings`].
    pub fn new(
        grid: &'a Grid2D,
        params: &HestonParams,
        contract: BarrierOption,
        time_steps: usize,
    ) -> Result<Self, PdeError> {
        Self::with_settings(grid, params, contract, time_steps, SolverSettings::default())
    }

    /// Creates a solver and initialises the surface to the terminal payoff.
    ///
    /// # Errors
    /// - `PdeError::InvalidModel` if `params` fail validation
    /// - `PdeError::InvalidConfiguration` for zero time steps, a Douglas
    ///   weight outside `[0.5, 1]`, or a bilinear read-out with `v0`
    ///   outside the variance axis
    pub fn with_settings(
        grid: &'a Grid2D,
        params: &HestonParams,
        contract: BarrierOption,
        time_steps: usize,
        settings: SolverSettings,
    ) -> Result<Self, PdeError> {
        params.validate()?;
        settings.scheme.validate()?;

        if time_steps == 0 {
            return Err(PdeError::InvalidConfiguration(
                "time_steps must be at least 1".to_string(),
            ));
        }
        check_read_out(grid, params.v0, settings.variance_selection)?;

        let barrier = contract.barrier();
        let s_min = grid.s_min();
        if (barrier - s_min).abs() > BARRIER_MATCH_TOLERANCE * s_min.abs().max(1.0) {
            warn!(
                barrier,
                s_min,
                "barrier does not coincide with the lowest grid price; \
                 nodes at or below the barrier and the lowest price line are both absorbing"
            );
        }

        let (nx, nv) = (grid.nx(), grid.nv());
        let first_live = grid.s().partition_point(|&s| s <= barrier).max(1);

        let mut values = vec![0.0; nx * nv];
        for (i, &s) in grid.s().iter().enumerate() {
            values[idx(i, 0, nv)..idx(i + 1, 0, nv)].fill(contract.terminal_payoff(s));
        }

        let stepper = match settings.scheme {
            AdiScheme::PriceOnly => Stepper::PriceOnly(RowSystem::new(nx)),
            AdiScheme::Douglas { theta } => {
                Stepper::Douglas(Box::new(DouglasStepper::new(grid.s(), grid.v(), theta)))
            }
        };

        if !params.satisfies_feller() {
            debug!(
                feller_ratio = params.feller_ratio(),
                "Feller condition fails; variance can reach the v_min boundary"
            );
        }

        let dt = contract.maturity() / time_steps as f64;
        debug!(
            nx,
            nv,
            time_steps,
            dt,
            strike = contract.strike(),
            barrier,
            feller_ratio = params.feller_ratio(),
            scheme = ?settings.scheme,
            "barrier solver initialised"
        );

        Ok(Self {
            grid,
            pde: HestonPde::new(*params),
            contract,
            settings,
            time_steps,
            dt,
            first_live,
            values,
            completed: 0,
            state: SolverState::Initialized,
            stepper,
        })
    }

    /// Applies one backward time step.
    ///
    /// # Errors
    /// - `PdeError::SolverFailed` if an earlier step failed
    /// - `PdeError::StepsExhausted` once all `time_steps` have been applied
    /// - `PdeError::NumericalInstability` if a line solve breaks down; the
    ///   solver is then failed for good
    pub fn step(&mut self) -> Result<(), PdeError> {
        if self.state == SolverState::Failed {
            return Err(PdeError::SolverFailed);
        }
        if self.completed >= self.time_steps {
            return Err(PdeError::StepsExhausted);
        }

        let step = self.completed + 1;
        let tau_next = step as f64 * self.dt;
        let ctx = StepContext {
            grid: self.grid,
            pde: &self.pde,
            dt: self.dt,
            first_live: self.first_live,
            strike: self.contract.strike(),
        };

        let result = match &mut self.stepper {
            Stepper::PriceOnly(row) => price_only_step(&ctx, &mut self.values, row),
            Stepper::Douglas(douglas) => douglas.step(&ctx, &mut self.values, tau_next),
        };

        if let Err(failure) = result {
            self.state = SolverState::Failed;
            warn!(step, slice = failure.slice, error = %failure.source, "backward step failed");
            return Err(PdeError::NumericalInstability {
                step,
                slice: failure.slice,
                source: failure.source,
            });
        }

        apply_knock_out(&mut self.values, self.grid.nv(), self.first_live);
        self.completed = step;
        self.state = SolverState::Stepping { completed: step };
        trace!(step, tau = tau_next, "backward step applied");
        Ok(())
    }

    /// Applies every remaining step. A no-op once all steps are done.
    ///
    /// # Errors
    /// As [`BarrierAdiSolver::step`], except `StepsExhausted`.
    pub fn solve(&mut self) -> Result<(), PdeError> {
        if self.state == SolverState::Failed {
            return Err(PdeError::SolverFailed);
        }
        while self.completed < self.time_steps {
            self.step()?;
        }
        Ok(())
    }

    /// Runs any remaining steps and returns the value at `spot`.
    ///
    /// Later calls re-read the finished surface without stepping again.
    ///
    /// # Errors
    /// Step failures as in [`BarrierAdiSolver::step`], and
    /// `PdeError::OutOfDomain` if `spot` lies outside the price axis.
    pub fn price_down_and_out_call(&mut self, spot: f64) -> Result<f64, PdeError> {
        self.solve()?;
        self.state = SolverState::Priced;
        let price = self.interpolate(spot)?;
        debug!(spot, price, "down-and-out call priced");
        Ok(price)
    }

    /// Reads the current surface at `spot`.
    ///
    /// Linear in price between the bracketing nodes; the variance line is
    /// chosen by the configured [`VarianceSelection`].
    ///
    /// # Errors
    /// - `PdeError::SolverFailed` on a failed solver
    /// - `PdeError::OutOfDomain` if `spot` is outside `[S[0], S[Nx−1]]`
    pub fn interpolate(&self, spot: f64) -> Result<f64, PdeError> {
        self.interpolate_with(spot, self.settings.variance_selection)
    }

    /// Reads the current surface at `spot` with an explicit variance
    /// read-out, leaving the configured one untouched.
    ///
    /// Spots in the top cell `(S[Nx−2], S[Nx−1]]` interpolate against the
    /// `Smax` line.
    ///
    /// # Errors
    /// As [`BarrierAdiSolver::interpolate`], plus
    /// `PdeError::InvalidConfiguration` for a bilinear read-out with `v0`
    /// outside the variance axis.
    pub fn interpolate_with(
        &self,
        spot: f64,
        selection: VarianceSelection,
    ) -> Result<f64, PdeError> {
        if self.state == SolverState::Failed {
            return Err(PdeError::SolverFailed);
        }

        let s = self.grid.s();
        let (min, max) = (self.grid.s_min(), self.grid.s_max());
        if !(spot >= min && spot <= max) {
            return Err(PdeError::OutOfDomain { spot, min, max });
        }

        let v0 = self.pde.params().v0;
        check_read_out(self.grid, v0, selection)?;

        let i = s.partition_point(|&x| x < spot).clamp(1, s.len() - 1);
        let w = (spot - s[i - 1]) / (s[i] - s[i - 1]);
        let along_s = |j: usize| (1.0 - w) * self.value(i - 1, j) + w * self.value(i, j);

        let nv = self.grid.nv();
        let price = match selection {
            VarianceSelection::GridPosition => {
                let position = (v0 * (nv - 1) as f64).floor();
                let j = if position > 0.0 {
                    (position as usize).min(nv - 2)
                } else {
                    0
                };
                along_s(j)
            }
            VarianceSelection::Bilinear => {
                let v = self.grid.v();
                let k = v.partition_point(|&x| x < v0).clamp(1, nv - 1);
                let wv = (v0 - v[k - 1]) / (v[k] - v[k - 1]);
                (1.0 - wv) * along_s(k - 1) + wv * along_s(k)
            }
        };

        Ok(price)
    }

    /// Surface value at node `(i, j)`.
    ///
    /// # Panics
    /// If `i >= nx` or `j >= nv`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        let nv = self.grid.nv();
        assert!(j < nv, "variance index {} out of range for {} lines", j, nv);
        self.values[idx(i, j, nv)]
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Number of backward steps applied.
    pub fn completed_steps(&self) -> usize {
        self.completed
    }

    /// Configured number of backward steps.
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Step size `T / Nt`.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Time to maturity represented by the current surface.
    pub fn time_to_maturity(&self) -> f64 {
        self.completed as f64 * self.dt
    }

    /// Borrowed grid.
    pub fn grid(&self) -> &'a Grid2D {
        self.grid
    }

    /// Bound copy of the model parameters.
    pub fn params(&self) -> &HestonParams {
        self.pde.params()
    }

    /// Contract being priced.
    pub fn contract(&self) -> &BarrierOption {
        &self.contract
    }

    /// Scheme and read-out settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }
}

/// A bilinear read-out needs `v0` on the variance axis.
fn check_read_out(grid: &Grid2D, v0: f64, selection: VarianceSelection) -> Result<(), PdeError> {
    if selection == VarianceSelection::Bilinear && !(grid.v_min()..=grid.v_max()).contains(&v0) {
        return Err(PdeError::InvalidConfiguration(format!(
            "v0 = {} lies outside the variance axis [{}, {}]",
            v0,
            grid.v_min(),
            grid.v_max()
        )));
    }
    Ok(())
}
