//! Rectangular grid of sample lines in world space.

use glam::DVec2;

pub type Polyline = Vec<DVec2>;

/// Horizontal and vertical line families tiling a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub horizontal: Vec<Polyline>,
    pub vertical: Vec<Polyline>,
}

impl Grid {
    pub fn lines(&self) -> impl Iterator<Item = &Polyline> {
        self.horizontal.iter().chain(self.vertical.iter())
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            start + step * i as f64
        }
    })
}

/// Build the grid over `[lower, upper]`.
///
/// `line_counts[0]` horizontal lines with `resolution[0]` points each, and
/// `line_counts[1]` vertical lines with `resolution[1]` points each.
pub fn make_grid(
    lower: DVec2,
    upper: DVec2,
    line_counts: [usize; 2],
    resolution: [usize; 2],
) -> Grid {
    let horizontal = linspace(lower.y, upper.y, line_counts[0])
        .map(|y| {
            linspace(lower.x, upper.x, resolution[0])
                .map(|x| DVec2::new(x, y))
                .collect()
        })
        .collect();

    let vertical = linspace(lower.x, upper.x, line_counts[1])
        .map(|x| {
            linspace(lower.y, upper.y, resolution[1])
                .map(|y| DVec2::new(x, y))
                .collect()
        })
        .collect();

    Grid {
        horizontal,
        vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grid_shape() {
        let grid = make_grid(DVec2::ZERO, DVec2::splat(10.0), [2, 2], [5, 5]);
        assert_eq!(grid.horizontal.len(), 2);
        assert_eq!(grid.vertical.len(), 2);
        assert!(grid.lines().all(|line| line.len() == 5));

        for (line, y) in grid.horizontal.iter().zip([0.0, 10.0]) {
            assert!(line.iter().all(|p| p.y == y));
            let xs: Vec<f64> = line.iter().map(|p| p.x).collect();
            assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        }
        for (line, x) in grid.vertical.iter().zip([0.0, 10.0]) {
            assert!(line.iter().all(|p| p.x == x));
            assert_eq!(line.first().unwrap().y, 0.0);
            assert_eq!(line.last().unwrap().y, 10.0);
        }
    }

    #[test]
    fn counts_per_axis_are_independent() {
        let grid = make_grid(DVec2::new(-8.0, -4.0), DVec2::new(8.0, 4.0), [3, 7], [11, 4]);
        assert_eq!(grid.horizontal.len(), 3);
        assert_eq!(grid.vertical.len(), 7);
        assert!(grid.horizontal.iter().all(|l| l.len() == 11));
        assert!(grid.vertical.iter().all(|l| l.len() == 4));
        assert_eq!(grid.lines().count(), 10);
    }

    #[test]
    fn linspace_edges() {
        assert_eq!(linspace(1.0, 2.0, 0).count(), 0);
        assert_eq!(linspace(1.0, 2.0, 1).collect::<Vec<_>>(), vec![1.0]);
        assert_eq!(linspace(0.1, 0.7, 3).last(), Some(0.7));
    }
}
