use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*};

#[cfg(test)]
mod run_command_tests {
    use super::*;

    #[test]
    fn test_run_prints_transcript() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["run", "git status", "git add .", "git commit -m \"First pass\""])
            .assert()
            .success()
            .stdout(assertions::prompt("git status"))
            .stdout(assertions::on_branch("main"))
            .stdout(predicate::str::contains("Added all files to staging area"))
            .stdout(assertions::commit_line("main", "0000001", "First pass"));

        Ok(())
    }

    #[test]
    fn test_run_reports_unknown_commands() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["run", "git frobnicate", "foo bar"])
            .assert()
            .success()
            .stdout(assertions::not_a_git_command("frobnicate"))
            .stdout(predicate::str::contains("bash: foo bar: command not found"));

        Ok(())
    }

    #[test]
    fn test_strict_run_fails_on_command_failure() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["run", "--strict", "git commit"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "nothing to commit, working tree clean",
            ));

        env.playground()?
            .args(["run", "--strict", "git branch"])
            .assert()
            .success()
            .stdout(predicate::str::contains("* main"));

        Ok(())
    }

    #[test]
    fn test_run_state_snapshot() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let output = env
            .playground()?
            .args(["run", "--state", "git branch feature", "git checkout feature"])
            .output()?;
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout)?;
        let json_start = stdout.find('{').expect("snapshot in output");
        let snapshot: serde_json::Value = serde_json::from_str(&stdout[json_start..])?;
        assert_eq!(snapshot["currentBranch"], "feature");
        assert_eq!(snapshot["branches"], serde_json::json!(["main", "feature"]));
        assert_eq!(snapshot["commits"][0]["id"], "a1b2c3d");

        Ok(())
    }

    #[test]
    fn test_missing_args_flag_selects_policy() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .args(["run", "--strict", "git add"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Nothing specified, nothing added."));

        env.playground()?
            .args(["--missing-args", "silent", "run", "--strict", "git add"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing specified").not());

        Ok(())
    }

    #[test]
    fn test_config_file_is_honoured() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        std::fs::write(env.config_path(), r#"{ "missing_arguments": "silent" }"#)?;

        env.playground()?
            .args(["run", "--strict", "git remote add origin"])
            .assert()
            .success();

        Ok(())
    }

    #[test]
    fn test_invalid_config_file_is_reported() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        std::fs::write(env.config_path(), "not json")?;

        env.playground()?
            .args(["run", "git status"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot load settings"));

        Ok(())
    }

    #[test]
    fn test_repl_reads_stdin() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.playground()?
            .arg("repl")
            .write_stdin("git branch dev\ngit branch\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Initialized empty Git repository"))
            .stdout(predicate::str::contains("Created branch 'dev'"))
            .stdout(predicate::str::contains("* main\n  dev"));

        Ok(())
    }
}
