//! Aggregate statistics over a transcript
//!
//! Computes the figures shown in the summary command and reports: overall
//! CGPA and credits, best semester, SGPA trend, grade distribution, and
//! progress toward a target CGPA.

use crate::core::grading::{round2, LetterGrade, MAX_GRADE_POINT};
use crate::core::models::{GradedSemester, Transcript};
use serde::Serialize;
use std::fmt;

/// Target CGPA assumed when neither the transcript nor the config sets one
pub const DEFAULT_TARGET_CGPA: f64 = 3.5;

/// Direction of SGPA between the first and last graded semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    /// Last SGPA is higher than the first
    Improving,
    /// Last SGPA is lower than the first
    Declining,
    /// First and last SGPA are equal
    Steady,
    /// Fewer than two graded semesters
    Insufficient,
}

impl Trend {
    fn between(first: f64, last: f64) -> Self {
        let delta = round2(last - first);
        if delta > 0.0 {
            Self::Improving
        } else if delta < 0.0 {
            Self::Declining
        } else {
            Self::Steady
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Steady => "steady",
            Self::Insufficient => "not enough data",
        };
        f.write_str(label)
    }
}

/// Coarse grade bucket used in the distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradeBucket {
    /// A and A+
    A,
    /// B and B+
    B,
    /// C and C+
    C,
    /// D, D+ and F
    DAndBelow,
}

impl GradeBucket {
    /// Buckets in display order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::DAndBelow];

    /// Bucket for a letter grade
    #[must_use]
    pub const fn for_letter(letter: LetterGrade) -> Self {
        match letter {
            LetterGrade::APlus | LetterGrade::A => Self::A,
            LetterGrade::BPlus | LetterGrade::B => Self::B,
            LetterGrade::CPlus | LetterGrade::C => Self::C,
            LetterGrade::DPlus | LetterGrade::D | LetterGrade::F => Self::DAndBelow,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::A => "A/A+",
            Self::B => "B/B+",
            Self::C => "C/C+",
            Self::DAndBelow => "D & Below",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::DAndBelow => 3,
        }
    }
}

/// Subject count for one grade bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeShare {
    /// Bucket
    pub bucket: GradeBucket,
    /// Number of subjects in the bucket
    pub count: usize,
    /// Share of all subjects, rounded to a whole percent
    pub percentage: u32,
}

/// Progress of the current CGPA toward a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetProgress {
    /// Target CGPA
    pub target_cgpa: f64,
    /// Whether the current CGPA already meets the target
    pub met: bool,
    /// CGPA points still needed; 0 once met
    pub points_remaining: f64,
    /// Current CGPA as a percentage of the target
    pub percent_of_target: f64,
    /// Current CGPA as a percentage of the 4.0 maximum
    pub percent_of_max: f64,
}

impl TargetProgress {
    /// Compare a CGPA with a target
    #[must_use]
    pub fn new(cgpa: f64, target_cgpa: f64) -> Self {
        let percent_of_target = if target_cgpa > 0.0 {
            round2(cgpa / target_cgpa * 100.0)
        } else {
            100.0
        };
        Self {
            target_cgpa,
            met: cgpa >= target_cgpa,
            points_remaining: round2((target_cgpa - cgpa).max(0.0)),
            percent_of_target,
            percent_of_max: round2(cgpa / MAX_GRADE_POINT * 100.0),
        }
    }
}

/// Semester with the highest SGPA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestSemester {
    /// Semester number
    pub number: u32,
    /// Semester name
    pub name: String,
    /// Its SGPA
    pub sgpa: f64,
}

/// Derived statistics for a whole transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSummary {
    /// Cumulative GPA
    pub cgpa: f64,
    /// Credit hours across all semesters
    pub total_credit_hours: u32,
    /// Number of semesters
    pub semester_count: usize,
    /// Number of subjects
    pub subject_count: usize,
    /// Mean SGPA of semesters with credit hours; 0 if there are none
    pub average_sgpa: f64,
    /// Highest-SGPA semester; earliest wins ties
    pub best_semester: Option<BestSemester>,
    /// First-to-last SGPA direction
    pub trend: Trend,
    /// Subject counts per grade bucket, in [`GradeBucket::ALL`] order
    pub grade_distribution: Vec<GradeShare>,
    /// Progress toward the target, when one applies
    pub target: Option<TargetProgress>,
}

impl TranscriptSummary {
    /// Summarize a transcript, using its own target CGPA if set
    #[must_use]
    pub fn from_transcript(transcript: &Transcript) -> Self {
        Self::with_target(transcript, transcript.target_cgpa)
    }

    /// Summarize a transcript against an explicit target
    #[must_use]
    pub fn with_target(transcript: &Transcript, target_cgpa: Option<f64>) -> Self {
        let graded = transcript.graded_semesters();
        let cgpa = transcript.cgpa();

        let with_credits: Vec<&GradedSemester> =
            graded.iter().filter(|s| s.total_credit_hours > 0).collect();

        Self {
            cgpa,
            total_credit_hours: transcript.total_credit_hours(),
            semester_count: graded.len(),
            subject_count: transcript.subject_count(),
            average_sgpa: average_sgpa(&with_credits),
            best_semester: best_semester(&with_credits),
            trend: trend(&with_credits),
            grade_distribution: grade_distribution(&graded),
            target: target_cgpa.map(|target| TargetProgress::new(cgpa, target)),
        }
    }

    /// Share for one bucket
    #[must_use]
    pub fn share(&self, bucket: GradeBucket) -> Option<&GradeShare> {
        self.grade_distribution.iter().find(|s| s.bucket == bucket)
    }
}

fn average_sgpa(semesters: &[&GradedSemester]) -> f64 {
    if semesters.is_empty() {
        return 0.0;
    }
    let sum: f64 = semesters.iter().map(|s| s.sgpa).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = semesters.len() as f64;
    round2(sum / count)
}

fn best_semester(semesters: &[&GradedSemester]) -> Option<BestSemester> {
    let mut best: Option<&GradedSemester> = None;
    for semester in semesters {
        if best.map_or(true, |b| semester.sgpa > b.sgpa) {
            best = Some(semester);
        }
    }
    best.map(|s| BestSemester {
        number: s.number,
        name: s.name.clone(),
        sgpa: s.sgpa,
    })
}

fn trend(semesters: &[&GradedSemester]) -> Trend {
    match (semesters.first(), semesters.last()) {
        (Some(first), Some(last)) if semesters.len() >= 2 => Trend::between(first.sgpa, last.sgpa),
        _ => Trend::Insufficient,
    }
}

fn grade_distribution(semesters: &[GradedSemester]) -> Vec<GradeShare> {
    let mut counts = [0usize; 4];
    for subject in semesters.iter().flat_map(|s| &s.subjects) {
        counts[GradeBucket::for_letter(subject.result.letter_grade).index()] += 1;
    }
    let total: usize = counts.iter().sum();

    GradeBucket::ALL
        .iter()
        .map(|&bucket| {
            let count = counts[bucket.index()];
            GradeShare {
                bucket,
                count,
                percentage: whole_percent(count, total),
            }
        })
        .collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn whole_percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}
