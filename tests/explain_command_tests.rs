use predicates::prelude::*;

mod common;
use common::fixtures::*;

#[cfg(test)]
mod explain_command_tests {
    use super::*;

    #[test]
    fn test_explain_with_and_without_git_prefix() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        for args in [vec!["explain", "git", "status"], vec!["explain", "Status"]] {
            env.playground()?
                .args(&args)
                .assert()
                .success()
                .stdout(predicate::str::contains("git status  [basic · beginner]"))
                .stdout(predicate::str::contains("git status --short"));
        }

        Ok(())
    }

    #[test]
    fn test_explain_unknown_command_fails() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["explain", "frobnicate"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No explanation for 'frobnicate'"));

        Ok(())
    }

    #[test]
    fn test_explain_search_and_filters() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["explain", "--search", "remote repository"])
            .assert()
            .success()
            .stdout(predicate::str::contains("git clone"))
            .stdout(predicate::str::contains("git push"))
            .stdout(predicate::str::contains("git status").not());

        env.playground()?
            .args(["explain", "--category", "history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("git log"))
            .stdout(predicate::str::contains("git commit").not());

        env.playground()?
            .args(["explain", "--difficulty", "advanced"])
            .assert()
            .success()
            .stdout(predicate::str::contains("git rebase"))
            .stdout(predicate::str::contains("git add").not());

        Ok(())
    }

    #[test]
    fn test_explain_tip() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["explain", "--tip"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Tip: git "));

        Ok(())
    }
}
