//! Three-point finite-difference weights on a non-uniform axis.

/// Weights on the `(k−1, k, k+1)` neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Stencil {
    pub m: f64,
    pub c: f64,
    pub p: f64,
}

impl Stencil {
    #[inline]
    pub(crate) fn apply(&self, minus: f64, centre: f64, plus: f64) -> f64 {
        self.m * minus + self.c * centre + self.p * plus
    }
}

/// First- and second-derivative weights for every interior node of an
/// axis. Boundary entries are zero.
#[derive(Debug, Clone)]
pub(crate) struct AxisStencils {
    pub d1: Vec<Stencil>,
    pub d2: Vec<Stencil>,
}

impl AxisStencils {
    pub(crate) fn new(axis: &[f64]) -> Self {
        let n = axis.len();
        let mut d1 = vec![Stencil::default(); n];
        let mut d2 = vec![Stencil::default(); n];

        for k in 1..n.saturating_sub(1) {
            let h_m = axis[k] - axis[k - 1];
            let h_p = axis[k + 1] - axis[k];
            let span = h_m + h_p;

            d1[k] = Stencil {
                m: -h_p / (h_m * span),
                c: (h_p - h_m) / (h_m * h_p),
                p: h_m / (h_p * span),
            };
            d2[k] = Stencil {
                m: 2.0 / (h_m * span),
                c: -2.0 / (h_m * h_p),
                p: 2.0 / (h_p * span),
            };
        }

        Self { d1, d2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_axis_reduces_to_central_differences() {
        let stencils = AxisStencils::new(&[0.0, 0.5, 1.0, 1.5]);
        let d1 = stencils.d1[1];
        assert_relative_eq!(d1.m, -1.0, epsilon = 1e-14);
        assert_relative_eq!(d1.c, 0.0, epsilon = 1e-14);
        assert_relative_eq!(d1.p, 1.0, epsilon = 1e-14);

        let d2 = stencils.d2[2];
        assert_relative_eq!(d2.m, 4.0, epsilon = 1e-14);
        assert_relative_eq!(d2.c, -8.0, epsilon = 1e-14);
        assert_relative_eq!(d2.p, 4.0, epsilon = 1e-14);

        assert_eq!(stencils.d1[0], Stencil::default());
        assert_eq!(stencils.d2[3], Stencil::default());
    }

    #[test]
    fn test_exact_on_quadratics_for_non_uniform_axis() {
        let axis = [0.0, 0.3, 1.0, 1.2, 2.5];
        let stencils = AxisStencils::new(&axis);
        let f = |x: f64| 3.0 * x * x - 2.0 * x + 1.0;

        for k in 1..axis.len() - 1 {
            let (fm, fc, fp) = (f(axis[k - 1]), f(axis[k]), f(axis[k + 1]));
            assert_relative_eq!(
                stencils.d1[k].apply(fm, fc, fp),
                6.0 * axis[k] - 2.0,
                epsilon = 1e-10
            );
            assert_relative_eq!(stencils.d2[k].apply(fm, fc, fp), 6.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_weights_annihilate_constants() {
        let stencils = AxisStencils::new(&[1.0, 1.7, 1.9, 3.0]);
        for k in 1..3 {
            assert!(stencils.d1[k].apply(1.0, 1.0, 1.0).abs() < 1e-12);
            assert!(stencils.d2[k].apply(1.0, 1.0, 1.0).abs() < 1e-10);
        }
    }
}
