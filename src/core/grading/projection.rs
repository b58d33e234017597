//! Required-SGPA projection toward a target CGPA

use super::{round2, MAX_GRADE_POINT};

/// SGPA needed next semester to bring CGPA up (or down) to `target_cgpa`.
///
/// ```text
/// required = (target × (current_credits + next_credits) − current_cgpa × current_credits)
///            / next_credits
/// ```
///
/// Returns:
/// - `None` when `next_semester_credits` is 0, or when the required SGPA is
///   above 4.0 (the target cannot be reached in one semester)
/// - `Some(0.0)` when the target is already exceeded
/// - otherwise the required SGPA rounded to 2 decimals
#[must_use]
pub fn required_sgpa(
    current_cgpa: f64,
    current_credits: u32,
    target_cgpa: f64,
    next_semester_credits: u32,
) -> Option<f64> {
    if next_semester_credits == 0 {
        return None;
    }

    let current = f64::from(current_credits);
    let next = f64::from(next_semester_credits);
    let required = target_cgpa.mul_add(current + next, -(current_cgpa * current)) / next;

    if required > MAX_GRADE_POINT {
        None
    } else if required < 0.0 {
        Some(0.0)
    } else {
        Some(round2(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_target() {
        assert_eq!(required_sgpa(2.0, 60, 4.0, 15), None);
    }

    #[test]
    fn test_target_already_met() {
        // (3.5 × 155 − 3.9 × 140) / 15 < 0
        assert_eq!(required_sgpa(3.9, 140, 3.5, 15), Some(0.0));
    }

    #[test]
    fn test_zero_next_credits() {
        assert_eq!(required_sgpa(3.0, 60, 3.5, 0), None);
    }

    #[test]
    fn test_reachable_target() {
        // (3.0 × 50 − 2.5 × 30) / 20 = 3.75
        assert_eq!(required_sgpa(2.5, 30, 3.0, 20), Some(3.75));
        // (3.1 × 75 − 3.0 × 60) / 15 = 3.5
        assert_eq!(required_sgpa(3.0, 60, 3.1, 15), Some(3.5));
    }

    #[test]
    fn test_first_semester_needs_target_itself() {
        assert_eq!(required_sgpa(0.0, 0, 3.25, 18), Some(3.25));
    }
}
