use std::collections::VecDeque;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use crate::errors::{DuelError, Result};

/// Everything one engine invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Standard output and standard error, merged in write order
    pub transcript: String,
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl Invocation {
    pub fn new(transcript: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            transcript: transcript.into(),
            exit_code,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Plays one tournament and hands back its transcript.
///
/// Each call must be a fresh tournament; nothing is expected to carry over
/// between calls.
pub trait EngineInvoker {
    fn invoke(&mut self) -> Result<Invocation>;
}

impl<T: EngineInvoker + ?Sized> EngineInvoker for Box<T> {
    fn invoke(&mut self) -> Result<Invocation> {
        (**self).invoke()
    }
}

/// Runs the engine as a blocking child process.
///
/// Stdin is closed, and stdout and stderr share one pipe so the transcript
/// interleaves the two exactly as the engine wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvoker {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl ProcessInvoker {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    /// `python3 play.py Othello`
    pub fn othello() -> Self {
        Self::new("python3", ["play.py", "Othello"])
    }

    /// Run the engine from `dir` instead of the current directory
    pub fn current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl EngineInvoker for ProcessInvoker {
    #[instrument(level = "debug", skip(self), fields(program = %self.program))]
    fn invoke(&mut self) -> Result<Invocation> {
        let (mut reader, writer) = std::io::pipe()?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| DuelError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        // The command still owns write ends of the pipe; reading would never
        // see EOF while they are open.
        drop(command);

        let mut output = Vec::new();
        reader.read_to_end(&mut output)?;
        let status = child.wait()?;

        debug!(bytes = output.len(), ?status, "Engine exited");

        Ok(Invocation {
            transcript: String::from_utf8_lossy(&output).into_owned(),
            exit_code: status.code(),
        })
    }
}

/// Replays canned invocations in order, then fails.
///
/// Useful for exercising the run loop without an engine installed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInvoker {
    script: VecDeque<Invocation>,
}

impl ScriptedInvoker {
    pub fn new(script: impl IntoIterator<Item = Invocation>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// The same successful transcript `times` times.
    pub fn repeat(transcript: &str, times: usize) -> Self {
        Self::new((0..times).map(|_| Invocation::new(transcript, Some(0))))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EngineInvoker for ScriptedInvoker {
    fn invoke(&mut self) -> Result<Invocation> {
        self.script.pop_front().ok_or_else(|| {
            DuelError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "scripted engine has no invocations left",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_invoker_replays_in_order() {
        let mut invoker = ScriptedInvoker::new([
            Invocation::new("first", Some(0)),
            Invocation::new("second", Some(3)),
        ]);
        assert_eq!(invoker.invoke().unwrap().transcript, "first");
        let second = invoker.invoke().unwrap();
        assert_eq!(second.transcript, "second");
        assert!(!second.succeeded());
        assert_eq!(invoker.remaining(), 0);
        assert!(invoker.invoke().is_err());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut invoker = ProcessInvoker::new("engine-duel-no-such-program", Vec::<String>::new());
        match invoker.invoke() {
            Err(DuelError::Spawn { program, .. }) => {
                assert_eq!(program, "engine-duel-no-such-program")
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test_log::test]
    fn test_process_merges_stdout_and_stderr() {
        let mut invoker = ProcessInvoker::new(
            "sh",
            ["-c", "echo out; echo err 1>&2; echo out-again; exit 3"],
        );
        let invocation = invoker.invoke().unwrap();
        assert_eq!(invocation.transcript, "out\nerr\nout-again\n");
        assert_eq!(invocation.exit_code, Some(3));
        assert!(!invocation.succeeded());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_current_dir() {
        let dir = std::env::temp_dir();
        let mut invoker = ProcessInvoker::new("sh", ["-c", "pwd"]).current_dir(&dir);
        let invocation = invoker.invoke().unwrap();
        assert!(invocation.succeeded());
        let reported = PathBuf::from(invocation.transcript.trim_end());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.canonicalize().unwrap()
        );
    }
}
