//! Plain-language explanations of git commands.
//!
//! A fixed reference table that learners can look up by command, search by keyword or
//! browse by category and difficulty. It covers every command the interpreter accepts
//! plus the common ones it does not simulate.
//!
//! # Public API
//! - [`explain`]: Look up one command, with or without the leading `git`
//! - [`search`]: Keyword search over names, descriptions and use cases
//! - [`by_category`] / [`by_difficulty`]: Browse the table
//! - [`random_tip`]: Pick one explanation at random

use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Branching,
    Remote,
    History,
    Advanced,
    Collaboration,
    Maintenance,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Branching => "branching",
            Self::Remote => "remote",
            Self::History => "history",
            Self::Advanced => "advanced",
            Self::Collaboration => "collaboration",
            Self::Maintenance => "maintenance",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub flag: &'static str,
    pub description: &'static str,
}

impl Flag {
    const fn new(flag: &'static str, description: &'static str) -> Self {
        Self { flag, description }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandExplanation {
    pub command: &'static str,
    pub short_description: &'static str,
    pub detailed_explanation: &'static str,
    pub use_case: &'static str,
    pub example: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub related_commands: &'static [&'static str],
    pub common_flags: &'static [Flag],
}

impl CommandExplanation {
    /// Command name without the leading `git`
    pub fn name(&self) -> &'static str {
        self.command.strip_prefix("git ").unwrap_or(self.command)
    }

    fn mentions(&self, term: &str) -> bool {
        [
            self.command,
            self.short_description,
            self.detailed_explanation,
            self.use_case,
        ]
        .iter()
        .any(|text| text.to_lowercase().contains(term))
    }
}

static COMMANDS: &[CommandExplanation] = &[
    CommandExplanation {
        command: "git init",
        short_description: "Initialize a new Git repository in the current directory.",
        detailed_explanation: "Creates a new Git repository by setting up the necessary .git directory structure. This is the first command you run when starting version control for a project.",
        use_case: "Starting a new project or adding version control to an existing project.",
        example: "git init my-project",
        category: Category::Basic,
        difficulty: Difficulty::Beginner,
        related_commands: &["git clone", "git status"],
        common_flags: &[
            Flag::new("--bare", "Create a bare repository (no working directory)"),
            Flag::new("--initial-branch=<name>", "Set the initial branch name"),
        ],
    },
    CommandExplanation {
        command: "git clone",
        short_description: "Create a local copy of a remote repository.",
        detailed_explanation: "Downloads a complete copy of a remote repository, including all files, branches, and commit history. Sets up the remote connection automatically.",
        use_case: "Getting a copy of an existing project to work on locally.",
        example: "git clone https://github.com/user/repo.git",
        category: Category::Basic,
        difficulty: Difficulty::Beginner,
        related_commands: &["git init", "git remote", "git fetch"],
        common_flags: &[
            Flag::new("--depth <depth>", "Create a shallow clone with limited history"),
            Flag::new("--branch <name>", "Clone a specific branch"),
            Flag::new("--single-branch", "Clone only one branch"),
        ],
    },
    CommandExplanation {
        command: "git status",
        short_description: "Show the current state of your working directory and staging area.",
        detailed_explanation: "Displays which files are modified, staged for commit, or untracked. Essential for understanding what changes you have before committing.",
        use_case: "Checking what changes you have made before committing.",
        example: "git status --short",
        category: Category::Basic,
        difficulty: Difficulty::Beginner,
        related_commands: &["git add", "git commit", "git diff"],
        common_flags: &[
            Flag::new("--short", "Show status in short format"),
            Flag::new("--porcelain", "Machine-readable output"),
            Flag::new("--ignored", "Show ignored files too"),
        ],
    },
    CommandExplanation {
        command: "git add",
        short_description: "Stage changes for the next commit.",
        detailed_explanation: "Moves changes from your working directory to the staging area, preparing them to be included in the next commit. You can stage specific files or all changes.",
        use_case: "Selecting which changes to include in your next commit.",
        example: "git add .",
        category: Category::Basic,
        difficulty: Difficulty::Beginner,
        related_commands: &["git commit", "git status", "git reset"],
        common_flags: &[
            Flag::new(".", "Stage all changes in current directory"),
            Flag::new("-A", "Stage all changes including deletions"),
            Flag::new("-p", "Interactively stage parts of files"),
        ],
    },
    CommandExplanation {
        command: "git commit",
        short_description: "Save staged changes to the repository with a descriptive message.",
        detailed_explanation: "Creates a permanent snapshot of your staged changes with a commit message. Each commit represents a point in your project's history.",
        use_case: "Saving your work with a description of what you changed.",
        example: "git commit -m \"Add user authentication feature\"",
        category: Category::Basic,
        difficulty: Difficulty::Beginner,
        related_commands: &["git add", "git push", "git log"],
        common_flags: &[
            Flag::new("-m <message>", "Add commit message inline"),
            Flag::new("-a", "Stage and commit all tracked files"),
            Flag::new("--amend", "Modify the last commit"),
        ],
    },
    CommandExplanation {
        command: "git branch",
        short_description: "List, create, or delete branches in your repository.",
        detailed_explanation: "Manages branches in your repository. Without arguments, lists all branches. Can create new branches or delete existing ones.",
        use_case: "Managing different lines of development in your project.",
        example: "git branch feature-login",
        category: Category::Branching,
        difficulty: Difficulty::Beginner,
        related_commands: &["git checkout", "git merge", "git switch"],
        common_flags: &[
            Flag::new("-a", "List all branches (local and remote)"),
            Flag::new("-d <branch>", "Delete a branch"),
            Flag::new("-m <old> <new>", "Rename a branch"),
        ],
    },
    CommandExplanation {
        command: "git checkout",
        short_description: "Switch between branches or restore files to a previous state.",
        detailed_explanation: "Multi-purpose command that can switch branches, create new branches, or restore files. Updates your working directory to match the target branch or commit.",
        use_case: "Switching between different features or restoring files.",
        example: "git checkout main",
        category: Category::Branching,
        difficulty: Difficulty::Beginner,
        related_commands: &["git branch", "git switch", "git restore"],
        common_flags: &[
            Flag::new("-b <branch>", "Create and switch to new branch"),
            Flag::new("--", "Restore files instead of switching branches"),
            Flag::new("-f", "Force checkout, discarding local changes"),
        ],
    },
    CommandExplanation {
        command: "git switch",
        short_description: "Switch between branches (newer alternative to checkout).",
        detailed_explanation: "Modern command specifically for switching branches. Clearer and safer than checkout for branch operations.",
        use_case: "Moving between different branches in your project.",
        example: "git switch feature-branch",
        category: Category::Branching,
        difficulty: Difficulty::Beginner,
        related_commands: &["git checkout", "git branch", "git restore"],
        common_flags: &[
            Flag::new("-c <branch>", "Create and switch to new branch"),
            Flag::new("-d", "Detach HEAD at current commit"),
            Flag::new("--guess", "Try to match remote branch names"),
        ],
    },
    CommandExplanation {
        command: "git merge",
        short_description: "Combine changes from one branch into your current branch.",
        detailed_explanation: "Integrates changes from another branch into your current branch. Creates a merge commit that combines the histories of both branches.",
        use_case: "Bringing completed features into your main branch.",
        example: "git merge feature-branch",
        category: Category::Branching,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git rebase", "git branch", "git log"],
        common_flags: &[
            Flag::new("--no-ff", "Always create a merge commit"),
            Flag::new("--squash", "Combine all commits into one"),
            Flag::new("--abort", "Cancel an ongoing merge"),
        ],
    },
    CommandExplanation {
        command: "git remote",
        short_description: "Manage connections to remote repositories.",
        detailed_explanation: "Configure and manage remote repository connections. Remotes are aliases for repository URLs that make it easier to push and pull changes.",
        use_case: "Setting up connections to GitHub, GitLab, or other remote repositories.",
        example: "git remote add origin https://github.com/user/repo.git",
        category: Category::Remote,
        difficulty: Difficulty::Beginner,
        related_commands: &["git push", "git pull", "git fetch"],
        common_flags: &[
            Flag::new("-v", "Show remote URLs"),
            Flag::new("add <name> <url>", "Add a new remote"),
            Flag::new("remove <name>", "Remove a remote"),
        ],
    },
    CommandExplanation {
        command: "git push",
        short_description: "Upload your local commits to a remote repository.",
        detailed_explanation: "Sends your local commits to a remote repository, making them available to other collaborators. Updates the remote branch with your changes.",
        use_case: "Sharing your work with others or backing up to a remote server.",
        example: "git push origin main",
        category: Category::Remote,
        difficulty: Difficulty::Beginner,
        related_commands: &["git pull", "git commit", "git remote"],
        common_flags: &[
            Flag::new("-u", "Set upstream tracking for the branch"),
            Flag::new("--force", "Force push (dangerous, overwrites remote)"),
            Flag::new("--tags", "Push tags along with commits"),
        ],
    },
    CommandExplanation {
        command: "git pull",
        short_description: "Download and merge changes from a remote repository.",
        detailed_explanation: "Combines git fetch and git merge in one command. Downloads new commits from remote and merges them into your current branch.",
        use_case: "Getting the latest changes from your team before starting work.",
        example: "git pull origin main",
        category: Category::Remote,
        difficulty: Difficulty::Beginner,
        related_commands: &["git fetch", "git merge", "git push"],
        common_flags: &[
            Flag::new("--rebase", "Rebase instead of merge"),
            Flag::new("--no-commit", "Don't auto-commit the merge"),
            Flag::new("--ff-only", "Only allow fast-forward merges"),
        ],
    },
    CommandExplanation {
        command: "git fetch",
        short_description: "Download changes from remote without merging them.",
        detailed_explanation: "Retrieves new commits, branches, and tags from remote repository but doesn't merge them into your working branch. Safer than pull.",
        use_case: "Checking what changes are available before merging them.",
        example: "git fetch origin",
        category: Category::Remote,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git pull", "git merge", "git log"],
        common_flags: &[
            Flag::new("--all", "Fetch from all remotes"),
            Flag::new("--prune", "Remove remote-tracking branches that no longer exist"),
            Flag::new("--tags", "Fetch all tags"),
        ],
    },
    CommandExplanation {
        command: "git log",
        short_description: "Show the commit history of your repository.",
        detailed_explanation: "Displays a chronological list of commits with their messages, authors, dates, and commit hashes. Essential for understanding project history.",
        use_case: "Reviewing what changes have been made and by whom.",
        example: "git log --oneline --graph",
        category: Category::History,
        difficulty: Difficulty::Beginner,
        related_commands: &["git show", "git diff", "git blame"],
        common_flags: &[
            Flag::new("--oneline", "Show each commit on one line"),
            Flag::new("--graph", "Show branch and merge history graphically"),
            Flag::new("--since=\"2 weeks ago\"", "Show commits from specific time period"),
        ],
    },
    CommandExplanation {
        command: "git show",
        short_description: "Display detailed information about a specific commit.",
        detailed_explanation: "Shows the full details of a commit including the diff of changes made. Can also show information about tags and other Git objects.",
        use_case: "Examining exactly what changes were made in a specific commit.",
        example: "git show HEAD~1",
        category: Category::History,
        difficulty: Difficulty::Beginner,
        related_commands: &["git log", "git diff", "git blame"],
        common_flags: &[
            Flag::new("--stat", "Show file change statistics"),
            Flag::new("--name-only", "Show only names of changed files"),
            Flag::new("--pretty=format:", "Custom output format"),
        ],
    },
    CommandExplanation {
        command: "git diff",
        short_description: "Show differences between commits, branches, or files.",
        detailed_explanation: "Compares different versions of files and shows exactly what lines were added, removed, or modified. Very useful for reviewing changes.",
        use_case: "Seeing what changes you've made before committing.",
        example: "git diff HEAD~1 HEAD",
        category: Category::History,
        difficulty: Difficulty::Beginner,
        related_commands: &["git status", "git show", "git log"],
        common_flags: &[
            Flag::new("--staged", "Show differences of staged files"),
            Flag::new("--name-only", "Show only file names"),
            Flag::new("--word-diff", "Show word-level differences"),
        ],
    },
    CommandExplanation {
        command: "git rebase",
        short_description: "Reapply commits from one branch onto another, creating a linear history.",
        detailed_explanation: "Moves or combines commits from one branch to another, rewriting commit history to create a cleaner, linear progression.",
        use_case: "Cleaning up commit history before merging or updating feature branches.",
        example: "git rebase main",
        category: Category::Advanced,
        difficulty: Difficulty::Advanced,
        related_commands: &["git merge", "git cherry-pick", "git reset"],
        common_flags: &[
            Flag::new("-i", "Interactive rebase to edit commits"),
            Flag::new("--onto <branch>", "Rebase onto a different branch"),
            Flag::new("--abort", "Cancel an ongoing rebase"),
        ],
    },
    CommandExplanation {
        command: "git cherry-pick",
        short_description: "Apply a specific commit from another branch onto your current branch.",
        detailed_explanation: "Copies a commit from one branch and applies it to your current branch, creating a new commit with the same changes but different hash.",
        use_case: "Applying a specific bug fix or feature from another branch.",
        example: "git cherry-pick abc123",
        category: Category::Advanced,
        difficulty: Difficulty::Advanced,
        related_commands: &["git rebase", "git merge", "git revert"],
        common_flags: &[
            Flag::new("-n", "Don't auto-commit the cherry-pick"),
            Flag::new("-x", "Add reference to original commit"),
            Flag::new("--continue", "Continue after resolving conflicts"),
        ],
    },
    CommandExplanation {
        command: "git stash",
        short_description: "Temporarily save uncommitted changes without creating a commit.",
        detailed_explanation: "Stores your current changes in a temporary area, allowing you to switch branches or pull updates without committing incomplete work.",
        use_case: "Quickly switching contexts while preserving work in progress.",
        example: "git stash push -m \"Work in progress on login\"",
        category: Category::Advanced,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git commit", "git reset", "git checkout"],
        common_flags: &[
            Flag::new("pop", "Apply and remove the most recent stash"),
            Flag::new("list", "Show all stashes"),
            Flag::new("drop", "Delete a stash without applying it"),
        ],
    },
    CommandExplanation {
        command: "git reset",
        short_description: "Undo commits or unstage files by moving the HEAD pointer.",
        detailed_explanation: "Powerful command that can undo commits, unstage files, or completely reset your repository to a previous state. Use with caution.",
        use_case: "Undoing commits or unstaging files before committing.",
        example: "git reset --soft HEAD~1",
        category: Category::Advanced,
        difficulty: Difficulty::Advanced,
        related_commands: &["git revert", "git checkout", "git add"],
        common_flags: &[
            Flag::new("--soft", "Keep changes staged"),
            Flag::new("--mixed", "Keep changes but unstage them"),
            Flag::new("--hard", "Discard all changes (dangerous)"),
        ],
    },
    CommandExplanation {
        command: "git revert",
        short_description: "Create a new commit that undoes changes from a previous commit.",
        detailed_explanation: "Safely undoes a commit by creating a new commit with the opposite changes. Preserves history unlike reset.",
        use_case: "Undoing a commit that has already been shared with others.",
        example: "git revert HEAD~1",
        category: Category::Advanced,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git reset", "git cherry-pick", "git log"],
        common_flags: &[
            Flag::new("-n", "Don't auto-commit the revert"),
            Flag::new("--mainline <parent>", "Specify parent for merge commits"),
            Flag::new("--no-edit", "Don't open editor for commit message"),
        ],
    },
    CommandExplanation {
        command: "git blame",
        short_description: "Show who last modified each line of a file and when.",
        detailed_explanation: "Annotates each line of a file with the commit hash, author, and date of the last modification. Useful for understanding code history.",
        use_case: "Finding out who wrote or last changed specific lines of code.",
        example: "git blame src/main.js",
        category: Category::Collaboration,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git log", "git show", "git diff"],
        common_flags: &[
            Flag::new("-L <start>,<end>", "Blame only specific lines"),
            Flag::new("-w", "Ignore whitespace changes"),
            Flag::new("--since=<date>", "Show changes since specific date"),
        ],
    },
    CommandExplanation {
        command: "git tag",
        short_description: "Create, list, or delete tags to mark specific points in history.",
        detailed_explanation: "Tags are used to mark specific commits, typically for releases or important milestones. Unlike branches, tags don't move.",
        use_case: "Marking release versions or important milestones in your project.",
        example: "git tag v1.0.0",
        category: Category::Collaboration,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git push", "git log", "git show"],
        common_flags: &[
            Flag::new("-a", "Create annotated tag with message"),
            Flag::new("-d <tag>", "Delete a tag"),
            Flag::new("-l", "List all tags"),
        ],
    },
    CommandExplanation {
        command: "git clean",
        short_description: "Remove untracked files from your working directory.",
        detailed_explanation: "Deletes files that are not tracked by Git. Useful for cleaning up build artifacts or temporary files.",
        use_case: "Cleaning up your workspace by removing unwanted files.",
        example: "git clean -fd",
        category: Category::Maintenance,
        difficulty: Difficulty::Intermediate,
        related_commands: &["git status", "git reset", "git checkout"],
        common_flags: &[
            Flag::new("-f", "Force removal of files"),
            Flag::new("-d", "Remove directories too"),
            Flag::new("-n", "Dry run - show what would be deleted"),
        ],
    },
    CommandExplanation {
        command: "git gc",
        short_description: "Clean up and optimize your Git repository.",
        detailed_explanation: "Garbage collection command that optimizes repository storage by compressing files and removing unnecessary data.",
        use_case: "Optimizing repository performance and reducing disk usage.",
        example: "git gc --aggressive",
        category: Category::Maintenance,
        difficulty: Difficulty::Advanced,
        related_commands: &["git fsck", "git prune", "git repack"],
        common_flags: &[
            Flag::new("--aggressive", "More thorough optimization"),
            Flag::new("--auto", "Only run if needed"),
            Flag::new("--prune=<date>", "Prune objects older than date"),
        ],
    },
];

/// Every explanation, in table order
pub fn all() -> &'static [CommandExplanation] {
    COMMANDS
}

/// Look up a command. Case and surrounding whitespace are ignored, and the leading
/// `git ` is optional: `"Status"`, `"git status"` and `" GIT STATUS "` all match.
pub fn explain(query: &str) -> Option<&'static CommandExplanation> {
    let normalized = query.trim().to_lowercase();
    let name = normalized
        .strip_prefix("git ")
        .map(str::trim_start)
        .unwrap_or(&normalized);
    let found = COMMANDS.iter().find(|entry| entry.name() == name);
    log::debug!("Explain '{}': {}", query, found.is_some());
    found
}

/// Case-insensitive substring search over command, descriptions and use case
pub fn search(query: &str) -> Vec<&'static CommandExplanation> {
    let term = query.trim().to_lowercase();
    COMMANDS.iter().filter(|entry| entry.mentions(&term)).collect()
}

pub fn by_category(category: Category) -> Vec<&'static CommandExplanation> {
    COMMANDS
        .iter()
        .filter(|entry| entry.category == category)
        .collect()
}

pub fn by_difficulty(difficulty: Difficulty) -> Vec<&'static CommandExplanation> {
    COMMANDS
        .iter()
        .filter(|entry| entry.difficulty == difficulty)
        .collect()
}

pub fn random_tip<R: Rng>(rng: &mut R) -> Option<&'static CommandExplanation> {
    if COMMANDS.is_empty() {
        return None;
    }
    COMMANDS.get(rng.gen_range(0..COMMANDS.len()))
}
