//! Continuous band-ramp grading (Policy A, `numl`)
//!
//! Marks are always out of 100. Each letter band has a base grade point, and
//! every whole mark above the band threshold adds 0.1, capped at 4.0.

use super::aggregate::{weighted_sgpa, WeightedGradePoint};
use super::{round2, GradeResult, LetterGrade, MAX_GRADE_POINT};

/// Total marks every subject is graded against
pub const STANDARD_TOTAL_MARKS: f64 = 100.0;

/// Grade point added per mark above a band's threshold
const RAMP_PER_MARK: f64 = 0.1;

/// A letter band: marks at or above `min_marks` (and below the next band up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Lowest whole mark in the band
    pub min_marks: u32,
    /// Letter awarded in the band
    pub letter: LetterGrade,
    /// Grade point at exactly `min_marks`
    pub base_grade_point: f64,
}

/// Passing bands, highest threshold first. Anything below the last band is an F.
pub const BANDS: [Band; 8] = [
    Band { min_marks: 85, letter: LetterGrade::APlus, base_grade_point: 4.0 },
    Band { min_marks: 80, letter: LetterGrade::A, base_grade_point: 4.0 },
    Band { min_marks: 75, letter: LetterGrade::BPlus, base_grade_point: 3.5 },
    Band { min_marks: 70, letter: LetterGrade::B, base_grade_point: 3.0 },
    Band { min_marks: 65, letter: LetterGrade::CPlus, base_grade_point: 2.5 },
    Band { min_marks: 60, letter: LetterGrade::C, base_grade_point: 2.0 },
    Band { min_marks: 55, letter: LetterGrade::DPlus, base_grade_point: 1.5 },
    Band { min_marks: 50, letter: LetterGrade::D, base_grade_point: 1.0 },
];

/// Round raw marks to the whole mark used for banding
#[must_use]
pub fn round_marks(marks: f64) -> f64 {
    marks.round()
}

/// Find the band for raw marks, or `None` for a fail
#[must_use]
pub fn band_for(marks: f64) -> Option<&'static Band> {
    let rounded = round_marks(marks);
    BANDS
        .iter()
        .find(|band| rounded >= f64::from(band.min_marks))
}

/// Letter grade for raw marks out of 100
#[must_use]
pub fn letter_grade(marks: f64) -> LetterGrade {
    band_for(marks).map_or(LetterGrade::F, |band| band.letter)
}

/// Unrounded grade point for raw marks out of 100.
///
/// Used when aggregating so per-subject rounding does not compound.
#[must_use]
pub fn raw_grade_point(marks: f64) -> f64 {
    let rounded = round_marks(marks);
    band_for(marks).map_or(0.0, |band| {
        let ramp = (rounded - f64::from(band.min_marks)) * RAMP_PER_MARK;
        (band.base_grade_point + ramp).min(MAX_GRADE_POINT)
    })
}

/// Grade point for raw marks out of 100, rounded to 2 decimals
#[must_use]
pub fn grade_point(marks: f64) -> f64 {
    round2(raw_grade_point(marks))
}

/// Full grade result for marks out of 100
#[must_use]
pub fn grade_result(marks: f64) -> GradeResult {
    GradeResult {
        letter_grade: letter_grade(marks),
        grade_point: grade_point(marks),
        percentage: round2(marks / STANDARD_TOTAL_MARKS * 100.0),
    }
}

/// SGPA from raw marks and credit hours.
///
/// Grade points are derived unrounded and averaged by credit hours.
#[must_use]
pub fn sgpa_from_marks<I>(subjects: I) -> f64
where
    I: IntoIterator<Item = (f64, u32)>,
{
    let weighted: Vec<WeightedGradePoint> = subjects
        .into_iter()
        .map(|(marks, credit_hours)| WeightedGradePoint::new(raw_grade_point(marks), credit_hours))
        .collect();
    weighted_sgpa(&weighted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_band_thresholds_descend() {
        for pair in BANDS.windows(2) {
            assert!(pair[0].min_marks > pair[1].min_marks);
            assert!(pair[0].letter > pair[1].letter);
        }
    }

    #[test]
    fn test_boundary_values() {
        assert!(approx(grade_point(70.0), 3.0));
        assert_eq!(letter_grade(70.0), LetterGrade::B);

        assert!(approx(grade_point(74.0), 3.4));
        assert_eq!(letter_grade(74.0), LetterGrade::B);

        assert!(approx(grade_point(85.0), 4.0));
        assert_eq!(letter_grade(85.0), LetterGrade::APlus);

        assert!(approx(grade_point(49.0), 0.0));
        assert_eq!(letter_grade(49.0), LetterGrade::F);
    }

    #[test]
    fn test_band_base_at_threshold() {
        for band in &BANDS {
            let marks = f64::from(band.min_marks);
            assert!(approx(grade_point(marks), band.base_grade_point));
            assert_eq!(letter_grade(marks), band.letter);
        }
    }

    #[test]
    fn test_ramp_within_band() {
        assert!(approx(grade_point(77.0), 3.7));
        assert!(approx(grade_point(79.0), 3.9));
        assert!(approx(grade_point(52.0), 1.2));
        assert!(approx(grade_point(64.0), 2.4));
    }

    #[test]
    fn test_top_bands_capped() {
        assert!(approx(grade_point(82.0), 4.0));
        assert!(approx(grade_point(100.0), 4.0));
        assert_eq!(letter_grade(100.0), LetterGrade::APlus);
        assert_eq!(letter_grade(84.0), LetterGrade::A);
    }

    #[test]
    fn test_marks_are_rounded_before_banding() {
        assert_eq!(letter_grade(49.5), LetterGrade::D);
        assert!(approx(grade_point(49.5), 1.0));
        assert_eq!(letter_grade(69.4), LetterGrade::CPlus);
        assert!(approx(grade_point(69.4), 2.9));
    }

    #[test]
    fn test_zero_marks() {
        assert!(approx(grade_point(0.0), 0.0));
        assert_eq!(letter_grade(0.0), LetterGrade::F);
    }

    #[test]
    fn test_grade_result() {
        let result = grade_result(72.0);
        assert_eq!(result.letter_grade, LetterGrade::B);
        assert!(approx(result.grade_point, 3.2));
        assert!(approx(result.percentage, 72.0));
    }

    #[test]
    fn test_sgpa_from_marks() {
        // 85 -> 4.0 (3 CH), 60 -> 2.0 (1 CH)
        let sgpa = sgpa_from_marks([(85.0, 3), (60.0, 1)]);
        assert!(approx(sgpa, 3.5));
        assert!(approx(sgpa_from_marks(Vec::new()), 0.0));
    }
}
