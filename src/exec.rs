//! External process execution
//!
//! Every package manager interaction goes through the `CommandRunner` trait.
//! The production implementation shells out with `tokio::process`; tests
//! substitute a scripted runner. A failing external command is a normal,
//! representable outcome here, never an error: missing binaries and launch
//! failures are folded into exit code 1 with the reason as stderr.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one external command invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Build a synthetic failure (launch error, missing binary)
    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: 1,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Abstract command execution interface
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion, capturing stdout and stderr.
    /// Never fails: any launch problem becomes a `CommandOutput` with
    /// exit code 1 and the reason in stderr.
    async fn run(&self, program: &str, args: &[&str]) -> CommandOutput;

    /// Check whether a program resolves on the search path
    fn can_locate(&self, program: &str) -> bool;
}

/// Runner backed by the host system
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> CommandOutput {
        debug!("Executing: {} {:?}", program, args);

        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match result {
            Ok(output) => CommandOutput {
                // Lossy decode: undecodable bytes become replacement
                // characters rather than failing the call.
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code().unwrap_or(1),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                CommandOutput::failure(format!("command not found: {program}"))
            }
            Err(e) => CommandOutput::failure(e.to_string()),
        }
    }

    fn can_locate(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    type Handler = Box<dyn Fn(&[&str]) -> CommandOutput + Send + Sync>;

    /// Scripted runner for tests: programs map to handlers, every
    /// invocation is recorded as a full command line.
    pub(crate) struct ScriptedRunner {
        handlers: Vec<(String, Handler)>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self {
                handlers: Vec::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Register a handler for a program name
        pub fn on(
            mut self,
            program: &str,
            handler: impl Fn(&[&str]) -> CommandOutput + Send + Sync + 'static,
        ) -> Self {
            self.handlers.push((program.to_string(), Box::new(handler)));
            self
        }

        /// Count recorded invocations whose command line starts with `prefix`
        pub fn call_count(&self, prefix: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|line| line.starts_with(prefix))
                .count()
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, program: &str, args: &[&str]) -> CommandOutput {
            let line = format!("{} {}", program, args.join(" "));
            self.calls.lock().unwrap().push(line);

            match self.handlers.iter().find(|(p, _)| p == program) {
                Some((_, handler)) => handler(args),
                None => CommandOutput::failure(format!("command not found: {program}")),
            }
        }

        fn can_locate(&self, program: &str) -> bool {
            self.handlers.iter().any(|(p, _)| p == program)
        }
    }
}
