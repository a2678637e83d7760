//! Iterative overlap resolution over the spatial grid.
//!
//! This is a cheap positional relaxation, not a constraint solver: each pass
//! rebuilds the grid, collects every overlapping pair from 3x3 neighbor-cell
//! scans, and asks each pair to separate itself.  Passes repeat until a scan
//! finds no overlaps or the iteration budget runs out, and a configuration
//! the budget can't untangle is simply left with residual overlap.
use crate::grid::SpatialGrid;
use crate::V2;

/// The capability set a body must expose to take part in collision queries
/// and rearrangement.
pub trait Collides {
    /// The body's current center position.
    fn position(&self) -> V2;

    /// Whether this body considers itself to be overlapping `other`.
    fn check_collision(&self, other: &Self) -> bool;

    /// Adjust this body's position, and possibly `other`'s, to reduce the
    /// overlap between the two.
    fn rearrange(&mut self, other: &mut Self);
}

/// Two bodies found overlapping during one scan.  Holds indices into the
/// caller's body slice and lives only for the pass that recorded it.
#[derive(Copy, Clone, Debug)]
struct CollisionPair {
    first: usize,
    second: usize,
}

/// Split two distinct mutable references out of one slice.
fn pair_mut<T>(slice: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b);
    if a < b {
        let (low, high) = slice.split_at_mut(b);
        (&mut low[a], &mut high[0])
    } else {
        let (low, high) = slice.split_at_mut(a);
        (&mut high[0], &mut low[b])
    }
}

impl SpatialGrid {
    /// Drive the bodies toward a locally non-overlapping arrangement, for at
    /// most `max_iters` refresh-and-scan passes.
    ///
    /// `refresh` runs once per pass, before the scan, and must leave this
    /// grid consistent with the bodies' current positions; the usual
    /// implementation is `|grid, bodies| grid.update_cells(bodies)`.
    ///
    /// The only observable effect is in-place mutation of body positions
    /// through [Collides::rearrange].  Pairs are applied in discovery order:
    /// row-major over cells, insertion order within a cell.
    pub fn rearrange_bodies<B, F>(&mut self, max_iters: usize, bodies: &mut [B], mut refresh: F)
    where
        B: Collides,
        F: FnMut(&mut SpatialGrid, &[B]),
    {
        let mut any_colliding = true;
        let mut iters = 0;

        while any_colliding && iters < max_iters {
            refresh(self, bodies);

            let mut collisions: Vec<CollisionPair> = vec![];

            for y in 1..self.rows() {
                for x in 1..self.cols() {
                    let central = self.cell(x, y);
                    if central.is_empty() {
                        continue;
                    }

                    for yy in (y - 1)..=(y + 1) {
                        for xx in (x - 1)..=(x + 1) {
                            // The border margin absorbs most neighbor offsets,
                            // but not every combination at the outer rim; a
                            // cell outside the array counts as empty.
                            if yy >= self.rows() + 2 || xx >= self.cols() + 2 {
                                continue;
                            }

                            let around = self.cell(xx, yy);
                            if around.is_empty() {
                                continue;
                            }

                            for &entity in central {
                                for &nearby in around {
                                    if nearby == entity {
                                        continue;
                                    }

                                    if bodies[entity].check_collision(&bodies[nearby]) {
                                        collisions.push(CollisionPair {
                                            first: entity,
                                            second: nearby,
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }

            any_colliding = !collisions.is_empty();

            // Most overlaps are recorded twice, once from each body's
            // perspective; resolving both directions in the same pass speeds
            // convergence and is intentional, so don't deduplicate.
            for pair in &collisions {
                let (first, second) = pair_mut(bodies, pair.first, pair.second);
                first.rearrange(second);
            }

            iters += 1;
        }

        if any_colliding {
            log::debug!(
                "rearrangement budget of {} passes exhausted with overlaps remaining",
                max_iters
            );
        }
    }
}
