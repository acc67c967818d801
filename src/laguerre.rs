//! # Laguerre root finder
//!
//! Fifth-order Laguerre iteration for a scalar equation `f(x) = 0`, given the
//! function and its first two derivatives:
//!
//! ```text
//! δ  = 2·√(4·f'(x)² − 5·f(x)·f''(x))
//! dx = 5·f(x) / (f'(x) + sign(f'(x))·δ)
//! x ← x − dx
//! ```
//!
//! The loop stops as soon as a step is exactly zero, or after
//! [`MAX_ITERATIONS`] passes. There is no tolerance test: the returned value is
//! a bounded-iteration approximation, and a run that hits the cap returns its
//! last iterate without signalling anything. Use [`solve_with_report`] when the
//! caller wants to know how the iteration ended.
//!
//! The square root is taken in the real domain. A negative discriminant
//! produces `NaN`, which then propagates to the result.

use tracing::{debug, trace};

/// Hard cap on the number of Laguerre passes.
pub const MAX_ITERATIONS: usize = 11;

/// Outcome of a Laguerre run.
///
/// * `root` – final iterate, identical to what [`solve`] returns.
/// * `iterations` – number of passes performed, in `1..=MAX_ITERATIONS`.
/// * `last_step` – the last correction `dx` applied.
/// * `converged` – `true` when the loop ended on an exactly zero step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaguerreReport {
    pub root: f64,
    pub iterations: usize,
    pub last_step: f64,
    pub converged: bool,
}

/// Find a root of `f` starting from `guess`.
///
/// Arguments
/// ---------
/// * `guess`: initial value of `x`.
/// * `f`, `df`, `d2f`: the function and its first and second derivatives.
///
/// Return
/// ------
/// * The last iterate after at most [`MAX_ITERATIONS`] passes.
pub fn solve<F, D, D2>(guess: f64, f: F, df: D, d2f: D2) -> f64
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    solve_with_report(guess, f, df, d2f).root
}

/// Same iteration as [`solve`], also reporting how the loop terminated.
pub fn solve_with_report<F, D, D2>(guess: f64, f: F, df: D, d2f: D2) -> LaguerreReport
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    let mut x = guess;
    let mut iterations = 0;

    let last_step = loop {
        let fx = f(x);
        let fp = df(x);
        let fpp = d2f(x);

        let delta = 2.0 * (4.0 * fp * fp - 5.0 * fx * fpp).sqrt();
        // |f'|/f' rather than signum(): f' = 0 must not pick a branch
        let dx = 5.0 * fx / (fp + (fp.abs() / fp) * delta);

        x -= dx;
        iterations += 1;
        trace!(iteration = iterations, x, dx, "laguerre step");

        if dx == 0.0 || iterations >= MAX_ITERATIONS {
            break dx;
        }
    };

    let converged = last_step == 0.0;
    if !converged {
        debug!(
            iterations,
            root = x,
            last_step,
            "laguerre iteration cap reached before a zero step"
        );
    }

    LaguerreReport {
        root: x,
        iterations,
        last_step,
        converged,
    }
}
