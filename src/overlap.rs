//! Same-date shift conflict detection.
//!
//! Produces the groups fed to the at-most-one booking constraints: each
//! shift is grouped with every later shift (input order) whose time window
//! intersects it. A shift may appear in several groups; the consumer emits
//! an at-most-one constraint per group, so redundant coverage of an
//! overlap relation costs model size, never correctness.

use crate::models::Shift;

/// Whether two same-date shifts intersect in time.
///
/// Open-interval test: a shift ending exactly when the other starts does
/// not conflict with it.
pub fn shifts_overlap(a: &Shift, b: &Shift) -> bool {
    !(a.end <= b.start || b.end <= a.start)
}

/// Conflict groups among the shifts of one calendar date.
///
/// `shifts` pairs each shift with the index the caller knows it by; the
/// returned groups carry those indices. Only groups of two or more
/// members are kept.
pub fn overlap_groups(shifts: &[(usize, &Shift)]) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();

    for (pos, (idx, shift)) in shifts.iter().enumerate() {
        let mut group = vec![*idx];
        for (other_idx, other) in &shifts[pos + 1..] {
            if shifts_overlap(shift, other) {
                group.push(*other_idx);
            }
        }
        if group.len() > 1 {
            groups.push(group);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ClockTime;
    use chrono::NaiveDate;

    fn shift(id: &str, start: &str, end: &str) -> Shift {
        let date: NaiveDate = "2024-03-04".parse().unwrap();
        let start: ClockTime = start.parse().unwrap();
        let end: ClockTime = end.parse().unwrap();
        Shift::new(id, date, start, end)
    }

    #[test]
    fn test_touching_shifts_do_not_overlap() {
        let a = shift("A", "09:00", "13:00");
        let c = shift("C", "13:00", "17:00");
        assert!(!shifts_overlap(&a, &c));
        assert!(!shifts_overlap(&c, &a));
    }

    #[test]
    fn test_overlap_chain() {
        // A(09-13) and B(12-16) overlap; C(16-20) touches B and misses A.
        let shifts = [
            shift("A", "09:00", "13:00"),
            shift("B", "12:00", "16:00"),
            shift("C", "16:00", "20:00"),
        ];
        let indexed: Vec<(usize, &Shift)> = shifts.iter().enumerate().collect();

        let groups = overlap_groups(&indexed);
        assert_eq!(groups, vec![vec![0, 1]]);
    }

    #[test]
    fn test_mutually_overlapping_groups_repeat() {
        let shifts = [
            shift("A", "09:00", "17:00"),
            shift("B", "10:00", "12:00"),
            shift("C", "11:00", "13:00"),
        ];
        let indexed: Vec<(usize, &Shift)> = shifts.iter().enumerate().collect();

        // Non-disjoint by design: the pair (B, C) shows up under both the
        // A-rooted and the B-rooted group.
        let groups = overlap_groups(&indexed);
        assert_eq!(groups, vec![vec![0, 1, 2], vec![1, 2]]);
    }

    #[test]
    fn test_disjoint_shifts_yield_no_groups() {
        let shifts = [shift("A", "06:00", "09:00"), shift("B", "10:00", "12:00")];
        let indexed: Vec<(usize, &Shift)> = shifts.iter().enumerate().collect();

        assert!(overlap_groups(&indexed).is_empty());
    }
}
