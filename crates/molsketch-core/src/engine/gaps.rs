use std::f64::consts::TAU;

/// An unoccupied arc on the circle around an atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularGap {
    /// The occupied angle the arc starts at, in radians.
    pub start: f64,
    /// Arc length in radians.
    pub size: f64,
}

impl AngularGap {
    pub fn center(&self) -> f64 {
        self.start + self.size / 2.0
    }

    /// Splits the gap at its center into two equal halves.
    pub fn bisect(&self) -> (AngularGap, AngularGap) {
        let half = self.size / 2.0;
        (
            AngularGap {
                start: self.start,
                size: half,
            },
            AngularGap {
                start: self.start + half,
                size: half,
            },
        )
    }
}

/// Sorts gaps by descending size, breaking ties by ascending start angle.
pub(crate) fn sort_largest_first(gaps: &mut [AngularGap]) {
    gaps.sort_by(|a, b| b.size.total_cmp(&a.size).then(a.start.total_cmp(&b.start)));
}

/// Computes the gaps between occupied angles on a circle.
///
/// Angles may be in any range and any order. After sorting them ascending,
/// each angle starts a gap that runs to its successor; the largest angle wraps
/// around to the smallest plus 2π. The result is sorted by descending size,
/// ties in ascending order of start angle.
///
/// Returns an empty list for an empty input; callers handle that case.
pub fn find_angular_gaps(occupied: &[f64]) -> Vec<AngularGap> {
    if occupied.is_empty() {
        return Vec::new();
    }

    let mut sorted = occupied.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut gaps: Vec<AngularGap> = sorted
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let next = sorted.get(i + 1).copied().unwrap_or(sorted[0] + TAU);
            AngularGap {
                start,
                size: next - start,
            }
        })
        .collect();

    sort_largest_first(&mut gaps);
    gaps
}
