//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a dataxi command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - NO_COLOR set, so output can be matched literally
    /// - every DATAXI_* variable cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("dataxi").expect("failed to find dataxi binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DATAXI_DIR");
        cmd.env_remove("DATAXI_LOG");
        cmd.env_remove("DATAXI_SECRET_ENDPOINT");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Run dataxi with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run dataxi")
    }

    /// Run dataxi with the given arguments and piped stdin.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run dataxi")
    }

    /// Shortcut for `dataxi add <id> --kind token` with the token on stdin.
    pub fn add_token(&self, conn_id: &str, token: &str) -> Output {
        self.run_with_stdin(&["add", conn_id, "--kind", "token"], &format!("{}\n", token))
    }

    /// Shortcut for `dataxi add <id> --kind secret --user <user>`.
    pub fn add_secret(&self, conn_id: &str, user: &str, password: &str) -> Output {
        self.run_with_stdin(
            &["add", conn_id, "--kind", "secret", "--user", user],
            &format!("{}\n", password),
        )
    }

    /// Shortcut for `dataxi list`.
    pub fn list(&self) -> Output {
        self.run(&["list"])
    }

    /// Shortcut for `dataxi load --conn-id <id> --yes`.
    pub fn reveal(&self, conn_id: &str) -> Output {
        self.run(&["load", "--conn-id", conn_id, "--yes"])
    }
}
