use super::gaps::{find_angular_gaps, sort_largest_first};
use crate::core::utils::geometry::UP;
use std::f64::consts::TAU;

/// Places `count` lone pairs around an atom whose bonds leave at `bond_angles`.
///
/// Without bonds the pairs are spread evenly, starting straight up. Otherwise
/// each pair goes to the center of the currently largest gap, which is then
/// replaced by its two halves. Repeated halving keeps pairs apart even when
/// there are more pairs than natural gaps. The procedure is greedy and never
/// revisits an earlier pair.
pub fn place_lone_pairs(bond_angles: &[f64], count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    if bond_angles.is_empty() {
        let step = TAU / count as f64;
        return (0..count).map(|i| UP + step * i as f64).collect();
    }

    let mut gaps = find_angular_gaps(bond_angles);
    let mut placed = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let largest = gaps.remove(0);
        placed.push(largest.center());

        let (first, second) = largest.bisect();
        gaps.push(first);
        gaps.push(second);
        sort_largest_first(&mut gaps);
    }
    placed
}

/// Returns the angle for a single label: the center of the largest gap
/// between `occupied` angles, or straight up when nothing is occupied.
pub fn place_single_annotation(occupied: &[f64]) -> f64 {
    find_angular_gaps(occupied)
        .first()
        .map_or(UP, |gap| gap.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::geometry::normalize_angle;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOLERANCE: f64 = 1e-9;

    fn assert_same_direction(actual: f64, expected: f64) {
        let diff = normalize_angle(actual - expected);
        assert!(
            diff < TOLERANCE || TAU - diff < TOLERANCE,
            "expected angle {} to be equivalent to {}",
            actual,
            expected
        );
    }

    #[test]
    fn zero_pairs_returns_empty() {
        assert!(place_lone_pairs(&[0.0, PI], 0).is_empty());
        assert!(place_lone_pairs(&[], 0).is_empty());
    }

    #[test]
    fn isolated_atom_spreads_pairs_evenly_from_top() {
        for count in 1..=6u32 {
            let angles = place_lone_pairs(&[], count);

            assert_eq!(angles.len(), count as usize);
            assert_eq!(angles[0], UP);
            for pair in angles.windows(2) {
                assert!((pair[1] - pair[0] - TAU / count as f64).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn linear_atom_places_two_pairs_above_and_below() {
        let angles = place_lone_pairs(&[0.0, PI], 2);

        assert_eq!(angles.len(), 2);
        assert_same_direction(angles[0], FRAC_PI_2);
        assert_same_direction(angles[1], -FRAC_PI_2);
    }

    #[test]
    fn single_bond_pair_goes_opposite_the_bond() {
        let angles = place_lone_pairs(&[0.0], 1);
        assert_same_direction(angles[0], PI);
    }

    #[test]
    fn second_pair_splits_the_remaining_largest_gap() {
        // Single gap of 2π from 0: first pair at π, then the halves [0, π] and
        // [π, 2π] tie and the earlier one wins.
        let angles = place_lone_pairs(&[0.0], 3);

        assert_same_direction(angles[0], PI);
        assert_same_direction(angles[1], FRAC_PI_2);
        assert_same_direction(angles[2], 3.0 * FRAC_PI_2);
    }

    #[test]
    fn split_halves_compete_with_older_gaps_by_start_angle() {
        // After three pairs, five gaps of size 1 tie; the one starting at 0
        // comes first even though it was split off earlier than the one at 2.
        let angles = place_lone_pairs(&[0.0, 2.0, 3.0, 5.0], 4);

        assert_eq!(angles.len(), 4);
        assert!((angles[0] - 1.0).abs() < TOLERANCE);
        assert!((angles[1] - 4.0).abs() < TOLERANCE);
        assert!((angles[2] - (5.0 + (TAU - 5.0) / 2.0)).abs() < TOLERANCE);
        assert!((angles[3] - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn more_pairs_than_gaps_never_collide() {
        let bonds = [0.0, FRAC_PI_2];
        let angles = place_lone_pairs(&bonds, 9);

        assert_eq!(angles.len(), 9);
        let mut normalized: Vec<f64> = angles.iter().map(|&a| normalize_angle(a)).collect();
        normalized.sort_by(f64::total_cmp);
        for pair in normalized.windows(2) {
            assert!(pair[1] - pair[0] > TOLERANCE);
        }
        for angle in &normalized {
            for bond in &bonds {
                assert!((angle - normalize_angle(*bond)).abs() > TOLERANCE);
            }
        }
    }

    #[test]
    fn each_step_uses_a_strictly_smaller_or_equal_gap() {
        // Replays the bisection to check the gap consumed by each pair shrinks.
        let bonds = [0.3, 2.0, 4.1];
        let angles = place_lone_pairs(&bonds, 6);
        let mut gaps = find_angular_gaps(&bonds);
        let mut last_size = f64::INFINITY;

        for angle in angles {
            let used = gaps.remove(0);
            assert!((used.center() - angle).abs() < TOLERANCE);
            assert!(used.size <= last_size);
            let (first, second) = used.bisect();
            assert!(first.size < used.size && second.size < used.size);
            last_size = used.size;
            gaps.push(first);
            gaps.push(second);
            sort_largest_first(&mut gaps);
        }
    }

    #[test]
    fn placement_is_deterministic() {
        let bonds = [1.0, -2.0, 0.25];
        assert_eq!(place_lone_pairs(&bonds, 5), place_lone_pairs(&bonds, 5));
    }

    #[test]
    fn single_annotation_defaults_to_top() {
        assert_eq!(place_single_annotation(&[]), UP);
    }

    #[test]
    fn single_annotation_uses_largest_gap_center() {
        let angle = place_single_annotation(&[0.0, FRAC_PI_2]);
        assert_same_direction(angle, FRAC_PI_2 + 3.0 * FRAC_PI_4);
    }

    #[test]
    fn single_annotation_avoids_previous_annotations() {
        let mut occupied = vec![0.0, PI];
        let first = place_single_annotation(&occupied);
        occupied.push(first);
        let second = place_single_annotation(&occupied);

        assert_same_direction(first, FRAC_PI_2);
        assert_same_direction(second, -FRAC_PI_2);
    }
}
