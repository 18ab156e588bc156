//! Screen presenter
//!
//! Draws one dashboard frame for a run snapshot. Every call is a pure
//! function of the frame and the output stream; no state survives between
//! redraws.

use std::io::Write;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use vigil_core::domain::annotation::{Annotation, AnnotationLevel};
use vigil_core::domain::job::Job;
use vigil_core::domain::run::Run;
use vigil_core::domain::status::{Conclusion, Status};

/// Everything one redraw needs
pub struct Frame<'a> {
    pub run: &'a Run,
    pub jobs: &'a [Job],
    pub annotations: &'a [Annotation],
    /// Elapsed time since the run was created
    pub age: chrono::Duration,
    pub interval: Duration,
    pub pr_number: Option<u64>,
    /// Terminals without fine-grained cursor control get a full clear
    /// per frame instead of a reposition; same content, more flicker.
    pub supports_cursor_addressing: bool,
}

/// Redraw the dashboard for one poll cycle
pub fn render<W: Write>(out: &mut W, frame: &Frame<'_>) -> std::io::Result<()> {
    if frame.supports_cursor_addressing {
        // Move cursor to 0,0 and clear from there to the bottom
        write!(out, "\x1b[0;0H")?;
        write!(out, "\x1b[J")?;
    } else {
        write!(out, "\x1b[2J")?;
    }

    writeln!(
        out,
        "{}",
        format!(
            "Refreshing run status every {} seconds. Press Ctrl+C to quit.",
            frame.interval.as_secs()
        )
        .bold()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", run_header(frame))?;
    writeln!(out)?;

    // A run can fail before any job is scheduled; there is nothing more to show
    if frame.jobs.is_empty() && frame.run.conclusion == Some(Conclusion::Failure) {
        return Ok(());
    }

    writeln!(out, "{}", "JOBS".bold())?;
    for job in frame.jobs {
        writeln!(
            out,
            "{} {}",
            symbol(job.status, job.conclusion),
            job.name.bold()
        )?;

        let mut steps: Vec<_> = job.steps.iter().collect();
        steps.sort_by_key(|s| s.number);
        for step in steps {
            writeln!(
                out,
                "  {} {}",
                symbol(step.status, step.conclusion),
                step.name
            )?;
        }
    }

    if !frame.annotations.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "ANNOTATIONS".bold())?;
        for annotation in frame.annotations {
            writeln!(
                out,
                "{} {}",
                level_symbol(annotation.level),
                annotation.message
            )?;
            if let Some(path) = &annotation.path {
                let location = match annotation.start_line {
                    Some(line) => format!("{}:{}", path, line),
                    None => path.clone(),
                };
                writeln!(out, "  {}", location.dimmed())?;
            }
        }
    }

    Ok(())
}

/// Status line for the run itself: symbol, title, fuzzy age, PR suffix
fn run_header(frame: &Frame<'_>) -> String {
    let age = frame.age.to_std().unwrap_or_default();
    let ago = timeago::Formatter::new().convert(age);
    let pr_suffix = match frame.pr_number {
        Some(number) => format!(" #{}", number),
        None => String::new(),
    };

    format!(
        "{} {} · {}{}",
        symbol(frame.run.status, frame.run.conclusion),
        frame.run.name.bold(),
        ago.dimmed(),
        pr_suffix
    )
}

/// Visual indicator for a status/conclusion pair
fn symbol(status: Status, conclusion: Option<Conclusion>) -> ColoredString {
    if !status.is_terminal() {
        return "*".yellow();
    }

    match conclusion.unwrap_or(Conclusion::Unknown) {
        Conclusion::Success => "✓".green(),
        Conclusion::Failure | Conclusion::TimedOut | Conclusion::ActionRequired => "X".red(),
        Conclusion::Cancelled
        | Conclusion::Neutral
        | Conclusion::Skipped
        | Conclusion::Stale
        | Conclusion::Unknown => "-".dimmed(),
    }
}

/// Visual indicator for an annotation severity
fn level_symbol(level: AnnotationLevel) -> ColoredString {
    match level {
        AnnotationLevel::Notice => "i".cyan(),
        AnnotationLevel::Warning => "!".yellow(),
        AnnotationLevel::Failure => "X".red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::domain::job::Step;

    fn sample_run(status: Status, conclusion: Option<Conclusion>) -> Run {
        Run {
            id: 42,
            name: "build and test".to_string(),
            status,
            conclusion,
            created_at: chrono::Utc::now(),
        }
    }

    fn frame<'a>(run: &'a Run, jobs: &'a [Job], annotations: &'a [Annotation]) -> Frame<'a> {
        Frame {
            run,
            jobs,
            annotations,
            age: chrono::Duration::minutes(3),
            interval: Duration::from_secs(2),
            pr_number: None,
            supports_cursor_addressing: true,
        }
    }

    fn render_to_string(frame: &Frame<'_>) -> String {
        let mut buf = Vec::new();
        render(&mut buf, frame).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn cursor_addressing_repositions_instead_of_clearing() {
        let run = sample_run(Status::InProgress, None);
        let mut f = frame(&run, &[], &[]);
        let output = render_to_string(&f);
        assert!(output.starts_with("\x1b[0;0H\x1b[J"));

        f.supports_cursor_addressing = false;
        let output = render_to_string(&f);
        assert!(output.starts_with("\x1b[2J"));
    }

    #[test]
    fn banner_names_the_refresh_interval() {
        let run = sample_run(Status::InProgress, None);
        let mut f = frame(&run, &[], &[]);
        f.interval = Duration::from_secs(7);
        let output = render_to_string(&f);
        assert!(output.contains("Refreshing run status every 7 seconds"));
        assert!(output.contains("Press Ctrl+C to quit"));
    }

    #[test]
    fn header_carries_the_pull_request_suffix() {
        let run = sample_run(Status::InProgress, None);
        let mut f = frame(&run, &[], &[]);
        f.pr_number = Some(1234);
        let output = render_to_string(&f);
        assert!(output.contains("#1234"));
    }

    #[test]
    fn failed_run_without_jobs_stops_after_the_header() {
        let run = sample_run(Status::InProgress, Some(Conclusion::Failure));
        let f = frame(&run, &[], &[]);
        let output = render_to_string(&f);
        assert!(output.contains("build and test"));
        assert!(!output.contains("JOBS"));
        assert!(!output.contains("ANNOTATIONS"));
    }

    #[test]
    fn jobs_render_with_steps_in_number_order() {
        let run = sample_run(Status::InProgress, None);
        let jobs = vec![Job {
            id: 7,
            run_id: 42,
            name: "unit tests".to_string(),
            status: Status::InProgress,
            conclusion: None,
            steps: vec![
                Step {
                    name: "second".to_string(),
                    status: Status::Queued,
                    conclusion: None,
                    number: 2,
                },
                Step {
                    name: "first".to_string(),
                    status: Status::Completed,
                    conclusion: Some(Conclusion::Success),
                    number: 1,
                },
            ],
        }];
        let f = frame(&run, &jobs, &[]);
        let output = render_to_string(&f);

        assert!(output.contains("JOBS"));
        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn annotations_section_appears_only_when_present() {
        let run = sample_run(Status::InProgress, None);
        let jobs = vec![Job {
            id: 7,
            run_id: 42,
            name: "lint".to_string(),
            status: Status::Completed,
            conclusion: Some(Conclusion::Failure),
            steps: vec![],
        }];

        let f = frame(&run, &jobs, &[]);
        assert!(!render_to_string(&f).contains("ANNOTATIONS"));

        let annotations = vec![Annotation {
            level: AnnotationLevel::Warning,
            message: "unused variable `x`".to_string(),
            path: Some("src/lib.rs".to_string()),
            start_line: Some(12),
        }];
        let f = frame(&run, &jobs, &annotations);
        let output = render_to_string(&f);
        assert!(output.contains("ANNOTATIONS"));
        assert!(output.contains("unused variable `x`"));
        assert!(output.contains("src/lib.rs:12"));
    }
}
