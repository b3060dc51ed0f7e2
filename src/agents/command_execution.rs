use colored::Colorize;
use std::process::Command;

/// Outcome of one external command invocation.
///
/// Launch failures and non-zero exits share this shape: `success` is false
/// and `stdout` carries whatever diagnostic text is available.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
}

impl CommandOutput {
    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: detail.into(),
        }
    }
}

/// Seam between the orchestrator and the host's package tooling.
pub trait CommandRunner {
    /// Run an argument vector as a child process and capture its output.
    fn run(&self, argv: &[&str]) -> CommandOutput;

    /// Probe whether a tool is installed on this host.
    fn tool_available(&self, tool: &str) -> bool;
}

/// CommandExecutionAgent runs package-manager commands on the live system
pub struct CommandExecutionAgent {
    verbose: bool,
}

impl CommandExecutionAgent {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl CommandRunner for CommandExecutionAgent {
    fn run(&self, argv: &[&str]) -> CommandOutput {
        if self.verbose {
            println!("{} {}", "Running:".dimmed(), argv.join(" "));
        }

        let Some((program, args)) = argv.split_first() else {
            return CommandOutput::failure("empty command");
        };

        match Command::new(program).args(args).output() {
            Ok(output) => {
                if !output.status.success() && self.verbose {
                    eprintln!(
                        "{} {}",
                        "Command failed:".red(),
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }

                CommandOutput {
                    success: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                }
            }
            Err(e) => {
                if self.verbose {
                    eprintln!("{} {}", "Error running command:".red(), e);
                }
                CommandOutput::failure(e.to_string())
            }
        }
    }

    fn tool_available(&self, tool: &str) -> bool {
        self.run(&["which", tool]).success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn quiet_agent() -> CommandExecutionAgent {
        CommandExecutionAgent::new(false)
    }

    #[test]
    fn captures_stdout_on_success() {
        let result = quiet_agent().run(&["sh", "-c", "printf 'hello'"]);
        assert!(result.success);
        assert_eq!(result.stdout, "hello");
    }

    #[test]
    fn nonzero_exit_reports_failure() {
        let result = quiet_agent().run(&["sh", "-c", "printf 'partial'; exit 3"]);
        assert!(!result.success);
        assert_eq!(result.stdout, "partial");
    }

    #[test]
    fn missing_binary_substitutes_diagnostic() {
        let result = quiet_agent().run(&["debsweep-no-such-binary-a6f1"]);
        assert!(!result.success);
        assert!(!result.stdout.is_empty());
    }

    #[test]
    fn empty_argv_reports_failure() {
        let result = quiet_agent().run(&[]);
        assert!(!result.success);
    }

    #[test]
    fn runs_executables_by_path() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("fake-tool.sh");
        fs::write(&script, "#!/bin/sh\necho from-script\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let path = script.to_string_lossy().into_owned();
        let result = quiet_agent().run(&[&path]);
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "from-script");
    }

    #[test]
    fn probe_reports_missing_tool() {
        assert!(!quiet_agent().tool_available("debsweep-no-such-tool-a6f1"));
    }
}
