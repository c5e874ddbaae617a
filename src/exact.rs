//! Exact enumeration of the sequential-exclusion draw.
//!
//! Walks every branch of the draw in order: at step \(i\) the drawer picks
//! uniformly among the names still in the hat, excluding their own. Each
//! branch therefore carries mass
//!
//! \[
//! \prod_{i} \frac{1}{|\text{pool}_i \setminus \{i\}|}
//! \]
//!
//! A branch that reaches the last step with only the last drawer's own name
//! left has no valid completion under this model; it contributes nothing and
//! the surviving masses are renormalized. This is the "never self-assign at
//! draw time" process, conditioned on the draw succeeding. It intentionally
//! does *not* model the swap fix-up the [`crate::monte_carlo`] sampler
//! applies, so the two distributions differ slightly (see the crate docs).
//!
//! Notes:
//! - Branching is `(pool - 1)` wide at the root and shrinks by one per
//!   level, so the walk visits on the order of \((N-1)!\) paths. The
//!   dispatcher keeps this path to small `N`; direct callers can go higher
//!   at their own expense.
//! - The pool is a single vector with swap-remove and restore-on-return, so
//!   sibling branches never observe each other's state.

use crate::error::DrawError;

/// Enumerate the joint distribution over all completable assignments.
///
/// Returns `(assignment, mass)` pairs where `assignment[i]` is the identity
/// drawn by participant `i` and the masses sum to 1. Output order and values
/// are deterministic: equal `n` gives bit-identical results.
pub fn exact_distribution(n: usize) -> Result<Vec<(Vec<usize>, f64)>, DrawError> {
    if n < 2 {
        return Err(DrawError::GroupTooSmall(n));
    }

    let mut out = Vec::new();
    let mut pool: Vec<usize> = (0..n).collect();
    let mut assigned: Vec<usize> = Vec::with_capacity(n);
    walk(n, &mut pool, &mut assigned, 1.0, &mut out)?;

    // Dead-end branches (last drawer holding their own name) dropped real
    // mass, so the total is below 1 for n >= 3. Condition on success.
    let total: f64 = out.iter().map(|(_, mass)| mass).sum();
    for (_, mass) in &mut out {
        *mass /= total;
    }
    Ok(out)
}

/// Marginalize the exact joint distribution into the N×N pair matrix.
///
/// `matrix[i][j]` is the probability that participant `i` draws participant
/// `j`. Every row sums to 1 and the diagonal is exactly zero.
pub fn exact_matrix(n: usize) -> Result<Vec<Vec<f64>>, DrawError> {
    let dist = exact_distribution(n)?;
    let mut matrix = vec![vec![0.0f64; n]; n];
    for (assignment, mass) in &dist {
        for (giver, &receiver) in assignment.iter().enumerate() {
            matrix[giver][receiver] += mass;
        }
    }
    Ok(matrix)
}

/// Depth-first walk over draw branches.
///
/// `assigned.len()` is the current step; mass splits uniformly across the
/// candidates at each step. Restores `pool` and `assigned` before returning.
fn walk(
    n: usize,
    pool: &mut Vec<usize>,
    assigned: &mut Vec<usize>,
    mass: f64,
    out: &mut Vec<(Vec<usize>, f64)>,
) -> Result<(), DrawError> {
    let step = assigned.len();
    if step == n {
        out.push((assigned.clone(), mass));
        return Ok(());
    }

    let candidates = pool.iter().filter(|&&name| name != step).count();
    if candidates == 0 {
        // Only the final drawer staring at their own name can get here.
        if pool.len() == 1 && pool[0] == step {
            return Ok(());
        }
        return Err(DrawError::ExhaustedPool { step });
    }

    let share = mass / candidates as f64;
    for idx in 0..pool.len() {
        let pick = pool[idx];
        if pick == step {
            continue;
        }

        pool.swap_remove(idx);
        assigned.push(pick);
        walk(n, pool, assigned, share, out)?;
        assigned.pop();
        // Undo the swap_remove: push the pick back and swap it into place.
        pool.push(pick);
        let last = pool.len() - 1;
        pool.swap(idx, last);
    }
    Ok(())
}
