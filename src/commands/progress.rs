use crate::core::{
    error::Result,
    output::{print_info, print_section_header, print_success},
    progress::{ProgressStore, LESSONS},
};
use colored::*;
use std::path::{Path, PathBuf};

pub enum ProgressAction {
    Show,
    Complete { lesson: String },
    Quiz {
        lesson: String,
        score: u32,
        passing: u32,
    },
    Reset,
}

pub fn execute_progress(action: ProgressAction, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => ProgressStore::default_path()?,
    };
    log::debug!("Using progress file {}", path.display());

    match action {
        ProgressAction::Show => show_progress(&path),
        ProgressAction::Complete { lesson } => {
            let mut store = ProgressStore::load(&path)?;
            store.complete_lesson(&lesson)?;
            store.save(&path)?;
            print_success(&format!("Lesson '{lesson}' marked as completed."));
            Ok(())
        }
        ProgressAction::Quiz {
            lesson,
            score,
            passing,
        } => {
            let mut store = ProgressStore::load(&path)?;
            let passed = store.record_quiz(&lesson, score, passing)?;
            store.save(&path)?;
            if passed {
                print_success(&format!("Quiz '{lesson}' passed with {score}%."));
            } else {
                print_info(&format!(
                    "Quiz '{lesson}' scored {score}%. You need {passing}% to pass."
                ));
            }
            Ok(())
        }
        ProgressAction::Reset => {
            ProgressStore::default().save(&path)?;
            print_success("Progress reset.");
            Ok(())
        }
    }
}

fn show_progress(path: &Path) -> Result<()> {
    let store = ProgressStore::load(path)?;

    print_section_header("Lessons");
    for lesson in &LESSONS {
        let entry = store.lessons.get(lesson.id);
        let marker = if store.is_completed(lesson.id) {
            "✓".green()
        } else if store.is_unlocked(lesson.id) {
            "○".cyan()
        } else {
            "🔒".bright_black()
        };
        let quiz = match entry.and_then(|e| e.quiz_score.map(|score| (score, e.quiz_passed))) {
            Some((score, true)) => format!("quiz {score}%").green().to_string(),
            Some((score, false)) => format!("quiz {score}%").yellow().to_string(),
            None => String::new(),
        };
        println!(
            "  {marker} {:<14} {} ({}) {quiz}",
            lesson.id,
            lesson.title,
            lesson.difficulty.bright_black()
        );
    }
    println!(
        "\n  {} of {} lessons completed ({}%)",
        store.completed_count(),
        LESSONS.len(),
        store.completion_percentage(LESSONS.len())
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{error::PlaygroundError, progress::DEFAULT_PASSING_SCORE};
    use tempfile::TempDir;

    #[test]
    fn test_complete_then_quiz_persists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("progress.json");

        execute_progress(
            ProgressAction::Complete {
                lesson: "git-basics".to_string(),
            },
            Some(path.clone()),
        )?;
        execute_progress(
            ProgressAction::Quiz {
                lesson: "branching".to_string(),
                score: 55,
                passing: DEFAULT_PASSING_SCORE,
            },
            Some(path.clone()),
        )?;

        let store = ProgressStore::load(&path)?;
        assert!(store.is_completed("git-basics"));
        assert!(!store.is_completed("branching"));
        assert_eq!(store.lessons["branching"].quiz_score, Some(55));
        Ok(())
    }

    #[test]
    fn test_reset_clears_store() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("progress.json");

        execute_progress(
            ProgressAction::Complete {
                lesson: "git-basics".to_string(),
            },
            Some(path.clone()),
        )?;
        execute_progress(ProgressAction::Reset, Some(path.clone()))?;

        assert!(ProgressStore::load(&path)?.lessons.is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_lesson_is_not_saved() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("progress.json");

        let result = execute_progress(
            ProgressAction::Complete {
                lesson: "rebasing".to_string(),
            },
            Some(path.clone()),
        );

        assert!(matches!(result, Err(PlaygroundError::UnknownLesson { .. })));
        assert!(!path.exists());
        Ok(())
    }
}
