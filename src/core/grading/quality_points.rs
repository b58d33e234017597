//! Quality-point lookup grading (Policy B, `gcwuf`)
//!
//! Each credit-hour bucket has a standard total-marks scale and an official
//! table mapping whole marks on that scale to quality points. Marks scored out
//! of a different total are rescaled onto the standard scale before lookup.
//! Grade point is quality points per credit hour.

use super::{round2, GradeResult, LetterGrade, SubjectScore};

/// Tolerance when deciding whether a subject is already on the standard scale
const SCALE_TOLERANCE: f64 = 0.1;

/// Standard marks per credit hour for buckets outside the table
const MARKS_PER_CREDIT_HOUR: f64 = 20.0;

/// One credit-hour bucket of the official quality-point table
#[derive(Debug, Clone, Copy)]
pub struct CreditHourScale {
    /// Credit hours this bucket applies to
    pub credit_hours: u32,
    /// Standard total marks for the bucket
    pub standard_total: f64,
    /// `(whole marks, quality points)`, ascending and contiguous by marks
    pub points: &'static [(u32, f64)],
}

impl CreditHourScale {
    /// Lowest marks with an entry (anything below is a fail)
    #[must_use]
    pub fn min_marks(&self) -> u32 {
        self.points.first().map_or(0, |&(marks, _)| marks)
    }

    /// Marks at which quality points saturate
    #[must_use]
    pub fn max_marks(&self) -> u32 {
        self.points.last().map_or(0, |&(marks, _)| marks)
    }

    /// Highest quality points available in the bucket
    #[must_use]
    pub fn max_quality_points(&self) -> f64 {
        self.points.last().map_or(0.0, |&(_, qp)| qp)
    }

    /// Quality points for whole marks on this bucket's standard scale
    #[must_use]
    pub fn lookup(&self, marks: u32) -> f64 {
        if marks >= self.max_marks() {
            return self.max_quality_points();
        }
        self.points
            .binary_search_by_key(&marks, |&(m, _)| m)
            .map_or(0.0, |idx| self.points[idx].1)
    }
}

const FIVE_CREDIT_POINTS: &[(u32, f64)] = &[
    (40, 5.00), (41, 5.50), (42, 6.00), (43, 6.50), (44, 7.00),
    (45, 7.50), (46, 8.00), (47, 8.50), (48, 9.00), (49, 9.50),
    (50, 10.00), (51, 10.50), (52, 10.50), (53, 11.00), (54, 11.50),
    (55, 11.50), (56, 12.00), (57, 12.50), (58, 12.50), (59, 13.00),
    (60, 13.50), (61, 13.50), (62, 14.00), (63, 14.50), (64, 14.50),
    (65, 15.00), (66, 15.50), (67, 15.50), (68, 16.00), (69, 16.50),
    (70, 16.50), (71, 17.00), (72, 17.50), (73, 17.50), (74, 18.00),
    (75, 18.50), (76, 19.00), (77, 19.00), (78, 19.50), (79, 19.50),
    (80, 20.00),
];

const FOUR_CREDIT_POINTS: &[(u32, f64)] = &[
    (32, 4.00), (33, 4.40), (34, 5.20), (35, 5.60), (36, 6.00),
    (37, 6.40), (38, 7.20), (39, 7.60), (40, 8.00), (41, 8.40),
    (42, 8.80), (43, 8.80), (44, 9.20), (45, 9.60), (46, 10.00),
    (47, 10.40), (48, 10.80), (49, 10.80), (50, 11.20), (51, 11.60),
    (52, 12.00), (53, 12.00), (54, 12.40), (55, 12.80), (56, 13.20),
    (57, 13.60), (58, 14.00), (59, 14.40), (60, 14.80), (61, 14.80),
    (62, 15.20), (63, 15.60), (64, 16.00),
];

const THREE_CREDIT_POINTS: &[(u32, f64)] = &[
    (24, 3.00), (25, 3.60), (26, 3.90), (27, 4.50), (28, 5.10),
    (29, 5.40), (30, 6.00), (31, 6.30), (32, 6.60), (33, 6.90),
    (34, 7.20), (35, 7.50), (36, 8.10), (37, 8.40), (38, 8.70),
    (39, 9.00), (40, 9.30), (41, 9.60), (42, 9.90), (43, 10.20),
    (44, 10.50), (45, 11.10), (46, 11.40), (47, 11.70), (48, 12.00),
];

const TWO_CREDIT_POINTS: &[(u32, f64)] = &[
    (16, 2.00), (17, 2.60), (18, 3.00), (19, 3.60), (20, 4.00),
    (21, 4.40), (22, 4.60), (23, 5.00), (24, 5.40), (25, 5.60),
    (26, 6.00), (27, 6.40), (28, 6.60), (29, 7.00), (30, 7.40),
    (31, 7.60), (32, 8.00),
];

const ONE_CREDIT_POINTS: &[(u32, f64)] = &[
    (8, 1.00), (9, 1.50), (10, 2.00), (11, 2.30), (12, 2.70),
    (13, 3.00), (14, 3.30), (15, 3.70), (16, 4.00),
];

/// The official quality-point table, one entry per credit-hour bucket
pub static QUALITY_POINT_TABLE: [CreditHourScale; 5] = [
    CreditHourScale { credit_hours: 1, standard_total: 20.0, points: ONE_CREDIT_POINTS },
    CreditHourScale { credit_hours: 2, standard_total: 40.0, points: TWO_CREDIT_POINTS },
    CreditHourScale { credit_hours: 3, standard_total: 60.0, points: THREE_CREDIT_POINTS },
    CreditHourScale { credit_hours: 4, standard_total: 80.0, points: FOUR_CREDIT_POINTS },
    CreditHourScale { credit_hours: 5, standard_total: 100.0, points: FIVE_CREDIT_POINTS },
];

/// Table bucket for a credit-hour count, if the policy defines one
#[must_use]
pub fn scale_for(credit_hours: u32) -> Option<&'static CreditHourScale> {
    QUALITY_POINT_TABLE
        .iter()
        .find(|scale| scale.credit_hours == credit_hours)
}

/// Standard total marks for a credit-hour count
#[must_use]
pub fn default_total_marks(credit_hours: u32) -> f64 {
    scale_for(credit_hours).map_or_else(
        || f64::from(credit_hours) * MARKS_PER_CREDIT_HOUR,
        |scale| scale.standard_total,
    )
}

/// Rescale obtained marks onto the bucket's standard scale.
///
/// Marks already scored out of the standard total (within tolerance) are
/// returned unchanged.
#[must_use]
pub fn normalize_marks(obtained_marks: f64, credit_hours: u32, total_marks: f64) -> f64 {
    let expected_max = default_total_marks(credit_hours);
    if (total_marks - expected_max).abs() < SCALE_TOLERANCE {
        obtained_marks
    } else {
        crate::debug!(
            "Rescaling {obtained_marks}/{total_marks} onto the {expected_max}-mark scale for {credit_hours} credit hours"
        );
        obtained_marks / total_marks * expected_max
    }
}

/// Quality points earned for a subject.
///
/// Returns 0 for non-positive total marks, for marks below the bucket's lowest
/// entry, and for credit-hour counts the table does not cover. Marks at or
/// above the bucket's highest entry saturate at its quality points.
#[must_use]
pub fn quality_points(obtained_marks: f64, credit_hours: u32, total_marks: f64) -> f64 {
    if total_marks <= 0.0 {
        return 0.0;
    }

    let normalized = normalize_marks(obtained_marks, credit_hours, total_marks);
    let Some(scale) = scale_for(credit_hours) else {
        return 0.0;
    };

    let rounded = normalized.round();
    if rounded < 0.0 {
        return 0.0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let key = rounded.min(f64::from(u32::MAX)) as u32;
    scale.lookup(key)
}

fn effective_total(credit_hours: u32, total_marks: Option<f64>) -> f64 {
    total_marks.unwrap_or_else(|| f64::from(credit_hours) * MARKS_PER_CREDIT_HOUR)
}

/// Letter grade from the percentage of total marks.
///
/// Total marks default to `credit_hours × 20`; a total of 0 is an F.
#[must_use]
pub fn letter_grade(obtained_marks: f64, credit_hours: u32, total_marks: Option<f64>) -> LetterGrade {
    let total = effective_total(credit_hours, total_marks);
    if total == 0.0 {
        return LetterGrade::F;
    }

    let percentage = obtained_marks / total * 100.0;
    match percentage {
        p if p >= 80.0 => LetterGrade::A,
        p if p >= 65.0 => LetterGrade::B,
        p if p >= 50.0 => LetterGrade::C,
        p if p >= 40.0 => LetterGrade::D,
        _ => LetterGrade::F,
    }
}

/// Grade point: quality points per credit hour, rounded to 2 decimals.
///
/// Returns 0 when `credit_hours` is 0.
#[must_use]
pub fn grade_point(obtained_marks: f64, credit_hours: u32, total_marks: Option<f64>) -> f64 {
    if credit_hours == 0 {
        return 0.0;
    }
    let total = effective_total(credit_hours, total_marks);
    let qp = quality_points(obtained_marks, credit_hours, total);
    round2(qp / f64::from(credit_hours))
}

/// Full grade result for a subject
#[must_use]
pub fn grade_result(obtained_marks: f64, credit_hours: u32, total_marks: Option<f64>) -> GradeResult {
    let total = effective_total(credit_hours, total_marks);
    let percentage = if total > 0.0 {
        round2(obtained_marks / total * 100.0)
    } else {
        0.0
    };

    GradeResult {
        letter_grade: letter_grade(obtained_marks, credit_hours, Some(total)),
        grade_point: grade_point(obtained_marks, credit_hours, Some(total)),
        percentage,
    }
}

/// SGPA: total quality points over total credit hours, rounded once.
///
/// Grade points are not averaged directly; quality points are summed first.
#[must_use]
pub fn sgpa(subjects: &[SubjectScore]) -> f64 {
    let (total_qp, total_credit_hours) =
        subjects
            .iter()
            .fold((0.0_f64, 0_u32), |(qp_sum, ch_sum), subject| {
                let total = effective_total(subject.credit_hours, subject.total_marks);
                let qp = quality_points(subject.obtained_marks, subject.credit_hours, total);
                (qp_sum + qp, ch_sum + subject.credit_hours)
            });

    if total_credit_hours == 0 {
        return 0.0;
    }
    round2(total_qp / f64::from(total_credit_hours))
}
