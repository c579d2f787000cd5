//! Lesson and quiz progress, persisted between runs.
//!
//! The store is a small JSON document keyed by lesson id. It is independent of the
//! simulated repository: the interpreter never reads or writes it.
//!
//! # Public API
//! - [`LESSONS`]: The lesson catalogue, in unlock order
//! - [`ProgressStore`]: Load, update and save learner progress
//! - [`LessonProgress`]: Completion flag and best quiz result for one lesson

use crate::core::{
    dirs::get_data_directory,
    error::{PlaygroundError, Result},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_PASSING_SCORE: u32 = 70;
const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub difficulty: &'static str,
}

/// Every lesson a learner can take. Each one unlocks once the one before it is completed.
pub const LESSONS: [Lesson; 4] = [
    Lesson {
        id: "git-basics",
        title: "Git Basics",
        difficulty: "Beginner",
    },
    Lesson {
        id: "branching",
        title: "Branching & Merging",
        difficulty: "Beginner",
    },
    Lesson {
        id: "remote-repos",
        title: "Remote Repositories",
        difficulty: "Intermediate",
    },
    Lesson {
        id: "advanced-git",
        title: "Advanced Git",
        difficulty: "Advanced",
    },
];

pub fn lesson(lesson_id: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.id == lesson_id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub completed: bool,
    pub quiz_score: Option<u32>,
    pub quiz_passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressStore {
    pub lessons: BTreeMap<String, LessonProgress>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProgressStore {
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_data_directory()?.join("progress.json"))
    }

    /// Load progress from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No progress file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read progress file '{}': {}", path.display(), e);
            PlaygroundError::progress_read_failed(path, e)
        })?;

        let store: Self = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse progress file '{}': {}", path.display(), e);
            PlaygroundError::progress_parse_failed(path, e)
        })?;

        log::debug!("Loaded progress for {} lessons", store.lessons.len());
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlaygroundError::write_failed(parent, e))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| {
            log::error!("Failed to write progress file '{}': {}", path.display(), e);
            PlaygroundError::write_failed(path, e)
        })
    }

    pub fn complete_lesson(&mut self, lesson_id: &str) -> Result<()> {
        self.entry(lesson_id)?.completed = true;
        self.touch();
        Ok(())
    }

    /// Record a quiz result and return whether it passed.
    ///
    /// Keeps the best score seen. A passing score also completes the lesson.
    pub fn record_quiz(&mut self, lesson_id: &str, score: u32, passing_score: u32) -> Result<bool> {
        if score > MAX_SCORE {
            return Err(PlaygroundError::InvalidQuizScore { score });
        }

        let passed = score >= passing_score;
        let lesson = self.entry(lesson_id)?;
        lesson.quiz_score = Some(lesson.quiz_score.map_or(score, |best| best.max(score)));
        if passed {
            lesson.quiz_passed = true;
            lesson.completed = true;
        }
        self.touch();
        Ok(passed)
    }

    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.lessons
            .get(lesson_id)
            .is_some_and(|lesson| lesson.completed)
    }

    /// The first lesson is always open; later ones need the previous one done.
    /// Ids outside [`LESSONS`] are never unlocked.
    pub fn is_unlocked(&self, lesson_id: &str) -> bool {
        match LESSONS.iter().position(|lesson| lesson.id == lesson_id) {
            Some(0) => true,
            Some(i) => self.is_completed(LESSONS[i - 1].id),
            None => false,
        }
    }

    /// Completed catalogue lessons. Stale ids left in an old file are not counted.
    pub fn completed_count(&self) -> usize {
        LESSONS
            .iter()
            .filter(|lesson| self.is_completed(lesson.id))
            .count()
    }

    /// Percentage of `total_lessons` completed, rounded to the nearest whole number
    pub fn completion_percentage(&self, total_lessons: usize) -> u32 {
        if total_lessons == 0 {
            return 0;
        }
        let ratio = self.completed_count().min(total_lessons) as f64 / total_lessons as f64;
        (ratio * 100.0).round() as u32
    }

    fn entry(&mut self, lesson_id: &str) -> Result<&mut LessonProgress> {
        let Some(lesson) = lesson(lesson_id.trim()) else {
            return Err(PlaygroundError::unknown_lesson(lesson_id));
        };
        Ok(self.lessons.entry(lesson.id.to_string()).or_default())
    }

    fn touch(&mut self) {
        self.last_updated = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = ProgressStore::load(&temp_dir.path().join("progress.json"))?;
        assert!(store.lessons.is_empty());
        assert!(store.last_updated.is_none());
        Ok(())
    }

    #[test]
    fn test_complete_lesson_is_idempotent() -> Result<()> {
        let mut store = ProgressStore::default();
        store.complete_lesson("git-basics")?;
        store.complete_lesson("git-basics")?;
        assert!(store.is_completed("git-basics"));
        assert_eq!(store.completed_count(), 1);
        Ok(())
    }

    #[test]
    fn test_unknown_lesson_rejected() {
        let mut store = ProgressStore::default();
        assert!(matches!(
            store.complete_lesson("rebasing"),
            Err(PlaygroundError::UnknownLesson { .. })
        ));
        assert!(matches!(
            store.complete_lesson("  "),
            Err(PlaygroundError::UnknownLesson { .. })
        ));
        assert!(store.lessons.is_empty());
    }

    #[test]
    fn test_catalogue_order() {
        let ids: Vec<_> = LESSONS.iter().map(|lesson| lesson.id).collect();
        assert_eq!(ids, ["git-basics", "branching", "remote-repos", "advanced-git"]);
        assert_eq!(lesson("branching").map(|l| l.title), Some("Branching & Merging"));
        assert!(lesson("rebasing").is_none());
    }

    #[test]
    fn test_record_quiz_keeps_best_score() -> Result<()> {
        let mut store = ProgressStore::default();
        assert!(!store.record_quiz("branching", 40, DEFAULT_PASSING_SCORE)?);
        assert!(!store.is_completed("branching"));

        assert!(store.record_quiz("branching", 90, DEFAULT_PASSING_SCORE)?);
        assert!(!store.record_quiz("branching", 50, DEFAULT_PASSING_SCORE)?);

        let lesson = &store.lessons["branching"];
        assert_eq!(lesson.quiz_score, Some(90));
        assert!(lesson.quiz_passed);
        assert!(lesson.completed);
        Ok(())
    }

    #[test]
    fn test_record_quiz_rejects_out_of_range() {
        let mut store = ProgressStore::default();
        assert!(matches!(
            store.record_quiz("git-basics", 101, DEFAULT_PASSING_SCORE),
            Err(PlaygroundError::InvalidQuizScore { score: 101 })
        ));
        assert!(store.lessons.is_empty());
    }

    #[test]
    fn test_lessons_unlock_in_order() -> Result<()> {
        let mut store = ProgressStore::default();
        assert!(store.is_unlocked("git-basics"));
        assert!(!store.is_unlocked("branching"));

        store.complete_lesson("git-basics")?;
        assert!(store.is_unlocked("branching"));
        assert!(!store.is_unlocked("remote-repos"));
        assert!(!store.is_unlocked("advanced-git"));
        assert!(!store.is_unlocked("rebasing"));
        Ok(())
    }

    #[test]
    fn test_completion_percentage() -> Result<()> {
        let mut store = ProgressStore::default();
        assert_eq!(store.completion_percentage(0), 0);
        store.complete_lesson("git-basics")?;
        assert_eq!(store.completion_percentage(LESSONS.len()), 25);
        assert_eq!(store.completion_percentage(3), 33);
        store.complete_lesson("branching")?;
        assert_eq!(store.completion_percentage(3), 67);
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("data").join("progress.json");

        let mut store = ProgressStore::default();
        store.complete_lesson("git-basics")?;
        store.record_quiz("remote-repos", 80, DEFAULT_PASSING_SCORE)?;
        store.save(&path)?;

        assert_eq!(ProgressStore::load(&path)?, store);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_parse_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("progress.json");
        std::fs::write(&path, "{ not json")?;
        assert!(matches!(
            ProgressStore::load(&path),
            Err(PlaygroundError::ProgressParseFailed { .. })
        ));
        Ok(())
    }
}
