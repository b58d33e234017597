//! Summary command handler

use super::{effective_target, load_transcript};
use gpa_tracker::config::Config;
use gpa_tracker::core::summary::TranscriptSummary;

/// Print transcript statistics
pub fn run(config: &Config) {
    let transcript = load_transcript(config);
    let target = effective_target(&transcript, config);
    let summary = TranscriptSummary::with_target(&transcript, Some(target));

    println!("\n=== Summary ({}) ===\n", transcript.university.display_name());
    println!("  CGPA:              {:.2}", summary.cgpa);
    println!("  Credit hours:      {}", summary.total_credit_hours);
    println!("  Semesters:         {}", summary.semester_count);
    println!("  Subjects:          {}", summary.subject_count);
    println!("  Average SGPA:      {:.2}", summary.average_sgpa);
    match &summary.best_semester {
        Some(best) => println!("  Best semester:     {} ({:.2})", best.name, best.sgpa),
        None => println!("  Best semester:     N/A"),
    }
    println!("  Trend:             {}", summary.trend);

    if let Some(progress) = summary.target {
        println!("\n  Target CGPA:       {:.2}", progress.target_cgpa);
        if progress.met {
            println!("  ✓ Target met");
        } else {
            println!("  Points needed:     {:.2}", progress.points_remaining);
        }
        println!("  Toward target:     {:.1}%", progress.percent_of_target.min(100.0));
        println!("  Toward 4.00:       {:.1}%", progress.percent_of_max);
    }

    println!("\n  Grade distribution:");
    for share in &summary.grade_distribution {
        println!(
            "    {:<10} {:>3} ({}%)",
            share.bucket.label(),
            share.count,
            share.percentage
        );
    }
}
