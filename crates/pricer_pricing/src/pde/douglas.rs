//! Douglas splitting of the two-factor Heston operator.
//!
//! With `A = A0 + A1 + A2` (cross term, price terms, variance terms; the
//! discount term is split evenly between `A1` and `A2`):
//!
//! ```text
//! Y0 = U + dt·A·U
//! (I − θ·dt·A1)·Y1 = Y0 − θ·dt·A1·U
//! (I − θ·dt·A2)·Y2 = Y1 − θ·dt·A2·U
//! U' = Y2
//! ```
//!
//! Boundaries: Dirichlet zero at and below the barrier, Dirichlet
//! `max(Smax − K·e^{−rτ}, 0)` at `Smax`, upwind variance drift only at
//! `v_min`, homogeneous Neumann at `v_max`.
//!
//! The payoff jumps from 0 to `S − K` at the first live node when the
//! barrier sits above the strike. Run at `θ < 1` from the start, that kink
//! rings into negative values on coarse time grids, so the first
//! [`SMOOTHING_STEPS`] steps are each replaced by two fully implicit
//! half-steps (Rannacher start-up).

use super::stencil::{AxisStencils, Stencil};
use super::stepping::{idx, RowSystem, SliceFailure, StepContext};

/// Opening steps run as implicit half-step pairs.
pub(crate) const SMOOTHING_STEPS: usize = 2;

#[derive(Debug)]
pub(crate) struct DouglasStepper {
    theta: f64,
    smoothing_left: usize,
    price: AxisStencils,
    variance: AxisStencils,
    a1u: Vec<f64>,
    a2u: Vec<f64>,
    y: Vec<f64>,
    price_row: RowSystem,
    variance_row: RowSystem,
}

impl DouglasStepper {
    pub(crate) fn new(s: &[f64], v: &[f64], theta: f64) -> Self {
        let size = s.len() * v.len();
        Self {
            theta,
            smoothing_left: SMOOTHING_STEPS,
            price: AxisStencils::new(s),
            variance: AxisStencils::new(v),
            a1u: vec![0.0; size],
            a2u: vec![0.0; size],
            y: vec![0.0; size],
            price_row: RowSystem::new(s.len()),
            variance_row: RowSystem::new(v.len()),
        }
    }

    /// Advances `values` by `ctx.dt` to time-to-maturity `tau_next`.
    pub(crate) fn step(
        &mut self,
        ctx: &StepContext<'_>,
        values: &mut [f64],
        tau_next: f64,
    ) -> Result<(), SliceFailure> {
        if self.smoothing_left == 0 {
            return self.advance(ctx, values, ctx.dt, self.theta, tau_next);
        }

        let half = 0.5 * ctx.dt;
        self.advance(ctx, values, half, 1.0, tau_next - half)?;
        self.advance(ctx, values, half, 1.0, tau_next)?;
        self.smoothing_left -= 1;
        Ok(())
    }

    /// One Douglas step of size `dt` with weight `theta`.
    fn advance(
        &mut self,
        ctx: &StepContext<'_>,
        values: &mut [f64],
        dt: f64,
        theta: f64,
        tau_next: f64,
    ) -> Result<(), SliceFailure> {
        let grid = ctx.grid;
        let (nx, nv) = (grid.nx(), grid.nv());
        let (s, v) = (grid.s(), grid.v());
        let live = ctx.first_live..nx - 1;
        let theta_dt = theta * dt;

        let far_value = if ctx.first_live < nx {
            let r = ctx.pde.params().r;
            (grid.s_max() - ctx.strike * (-r * tau_next).exp()).max(0.0)
        } else {
            0.0
        };
        let dirichlet = |i: usize| if i == nx - 1 { far_value } else { 0.0 };

        // Explicit predictor on the previous surface.
        for i in live.clone() {
            let (d1s, d2s) = (&self.price.d1[i], &self.price.d2[i]);
            for j in 0..nv - 1 {
                let p = idx(i, j, nv);
                let c = ctx.pde.coefficients(s[i], v[j]);
                let u = values[p];
                let (u_sm, u_sp) = (values[p - nv], values[p + nv]);

                let a1 = c.d_ss * d2s.apply(u_sm, u, u_sp)
                    + c.d_s * d1s.apply(u_sm, u, u_sp)
                    + 0.5 * c.r_term * u;

                let (a0, a2) = if j == 0 {
                    let h = v[1] - v[0];
                    (0.0, c.d_v * (values[p + 1] - u) / h + 0.5 * c.r_term * u)
                } else {
                    let (d1v, d2v) = (&self.variance.d1[j], &self.variance.d2[j]);
                    let (u_vm, u_vp) = (values[p - 1], values[p + 1]);
                    let a2 = c.d_vv * d2v.apply(u_vm, u, u_vp)
                        + c.d_v * d1v.apply(u_vm, u, u_vp)
                        + 0.5 * c.r_term * u;
                    (c.d_sv * cross_derivative(values, nv, i, j, d1s, d1v), a2)
                };

                self.a1u[p] = a1;
                self.a2u[p] = a2;
                self.y[p] = u + dt * (a0 + a1 + a2);
            }
        }

        // Implicit price correction, one variance line at a time.
        let row = &mut self.price_row;
        for j in 0..nv - 1 {
            for i in 0..nx {
                if !live.contains(&i) {
                    row.identity_row(i, dirichlet(i));
                    continue;
                }
                let p = idx(i, j, nv);
                let c = ctx.pde.coefficients(s[i], v[j]);
                let (d1, d2) = (&self.price.d1[i], &self.price.d2[i]);

                row.lower[i] = -theta_dt * (c.d_ss * d2.m + c.d_s * d1.m);
                row.diag[i] = 1.0 - theta_dt * (c.d_ss * d2.c + c.d_s * d1.c + 0.5 * c.r_term);
                row.upper[i] = -theta_dt * (c.d_ss * d2.p + c.d_s * d1.p);
                row.rhs[i] = self.y[p] - theta_dt * self.a1u[p];
            }
            row.solve(j)?;
            for i in 0..nx {
                self.y[idx(i, j, nv)] = row.out[i];
            }
        }

        // Implicit variance correction, one price line at a time.
        let row = &mut self.variance_row;
        for i in live.clone() {
            for j in 0..nv {
                if j == nv - 1 {
                    // ∂V/∂v = 0
                    row.lower[j] = -1.0;
                    row.diag[j] = 1.0;
                    row.upper[j] = 0.0;
                    row.rhs[j] = 0.0;
                    continue;
                }
                let p = idx(i, j, nv);
                let c = ctx.pde.coefficients(s[i], v[j]);

                if j == 0 {
                    let h = v[1] - v[0];
                    row.lower[j] = 0.0;
                    row.diag[j] = 1.0 - theta_dt * (-c.d_v / h + 0.5 * c.r_term);
                    row.upper[j] = -theta_dt * (c.d_v / h);
                } else {
                    let (d1, d2) = (&self.variance.d1[j], &self.variance.d2[j]);
                    row.lower[j] = -theta_dt * (c.d_vv * d2.m + c.d_v * d1.m);
                    row.diag[j] =
                        1.0 - theta_dt * (c.d_vv * d2.c + c.d_v * d1.c + 0.5 * c.r_term);
                    row.upper[j] = -theta_dt * (c.d_vv * d2.p + c.d_v * d1.p);
                }
                row.rhs[j] = self.y[p] - theta_dt * self.a2u[p];
            }
            row.solve(i)?;
            values[idx(i, 0, nv)..idx(i + 1, 0, nv)].copy_from_slice(&row.out);
        }

        for i in (0..nx).filter(|i| !live.contains(i)) {
            values[idx(i, 0, nv)..idx(i + 1, 0, nv)].fill(dirichlet(i));
        }

        Ok(())
    }
}

/// Tensor product of the first-derivative stencils at interior node `(i, j)`.
#[inline]
fn cross_derivative(
    values: &[f64],
    nv: usize,
    i: usize,
    j: usize,
    price: &Stencil,
    variance: &Stencil,
) -> f64 {
    let along_v = |k: usize| {
        let p = idx(k, j, nv);
        variance.apply(values[p - 1], values[p], values[p + 1])
    };
    price.apply(along_v(i - 1), along_v(i), along_v(i + 1))
}
