use itertools::Itertools;

use crate::SearchError;

/// `y = a*x^2 + b*x + c` with integer coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadratic {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Quadratic {
    pub fn evaluate(&self, x: i64) -> i64 {
        evaluate(self.a, self.b, self.c, x)
    }

    /// Checks the fit against a sample that was not used to build it.
    pub fn verify(&self, x: i64, observed: i64) -> Result<(), SearchError> {
        let predicted = self.evaluate(x);
        if predicted != observed {
            return Err(SearchError::HeldOutMismatch {
                x,
                predicted,
                observed,
            });
        }
        Ok(())
    }
}

pub fn evaluate(a: i64, b: i64, c: i64, x: i64) -> i64 {
    a * x * x + b * x + c
}

/// The unique quadratic through three points, solved in closed form.
///
/// Fails with [`SearchError::InexactFit`] when two `xs` coincide or the
/// interpolating polynomial has non-integer coefficients.
pub fn fit_quadratic(xs: [i64; 3], ys: [i64; 3]) -> Result<Quadratic, SearchError> {
    let inexact = || SearchError::InexactFit { xs, ys };

    if xs.iter().tuple_combinations().any(|(p, q)| p == q) {
        return Err(inexact());
    }

    let [x0, x1, x2] = xs.map(i128::from);
    let [y0, y1, y2] = ys.map(i128::from);

    // Second divided difference
    let a = exact_div(
        (y2 - y1) * (x1 - x0) - (y1 - y0) * (x2 - x1),
        (x2 - x1) * (x1 - x0) * (x2 - x0),
    )
    .ok_or_else(inexact)?;
    let b = exact_div((y1 - y0) - a * (x1 * x1 - x0 * x0), x1 - x0).ok_or_else(inexact)?;
    let c = y0 - a * x0 * x0 - b * x0;

    let narrow = |v: i128| i64::try_from(v).map_err(|_| inexact());
    let fit = Quadratic {
        a: narrow(a)?,
        b: narrow(b)?,
        c: narrow(c)?,
    };

    tracing::debug!(?fit, "fitted quadratic");

    Ok(fit)
}

fn exact_div(numerator: i128, denominator: i128) -> Option<i128> {
    (numerator % denominator == 0).then(|| numerator / denominator)
}
