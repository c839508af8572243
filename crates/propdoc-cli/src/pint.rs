use crate::config::FormatterConfig;

use propdoc_core::{err, Error, FormatStatus, Formatter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs Laravel Pint (or any formatter with the same command line) over a
/// single file from the project root.
#[derive(Debug, Clone)]
pub struct Pint {
    root: PathBuf,
    command: Vec<String>,
    config: PathBuf,
    timeout: Duration,
}

impl Pint {
    pub fn new(root: impl Into<PathBuf>, config: &FormatterConfig) -> Self {
        Self {
            root: root.into(),
            command: config.command.clone(),
            config: config.config.clone(),
            timeout: config.timeout(),
        }
    }

    /// Set how long the formatter may run before it is killed
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<program> <args..> <file relative to root> --config=<root>/<config>`
    fn command(&self, file: &Path) -> propdoc_core::Result<Command> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(err!("formatter command is empty"));
        };

        // Relative program paths such as `vendor/bin/pint` live in the project.
        let program = if program.contains('/') && Path::new(program).is_relative() {
            self.root.join(program)
        } else {
            PathBuf::from(program)
        };

        let relative = file.strip_prefix(&self.root).unwrap_or(file);

        let mut command = Command::new(program);
        command
            .args(args)
            .arg(relative)
            .arg(format!("--config={}", self.root.join(&self.config).display()))
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        Ok(command)
    }

    fn wait(&self, child: &mut Child) -> std::io::Result<Option<std::process::ExitStatus>> {
        let started = Instant::now();

        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }

            if started.elapsed() >= self.timeout {
                child.kill()?;
                child.wait()?;
                return Ok(None);
            }

            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Formatter for Pint {
    fn format(&self, path: &Path) -> propdoc_core::Result<FormatStatus> {
        let mut command = self.command(path)?;
        let program = command.get_program().to_string_lossy().into_owned();

        tracing::debug!(?command, "running formatter");

        let mut child = command
            .spawn()
            .map_err(|e| Error::from(e).context(err!("failed to run {program}")))?;

        // Drain both pipes while waiting so a chatty formatter cannot block.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let Some(status) = self.wait(&mut child)? else {
            // Grandchildren may still hold the pipes open; leave the readers be.
            return Ok(FormatStatus::Failed {
                code: None,
                output: format!(
                    "{program} timed out after {}s",
                    self.timeout.as_secs_f32()
                ),
            });
        };

        if status.success() {
            return Ok(FormatStatus::Formatted);
        }

        let mut output = String::new();
        for reader in [stdout, stderr].into_iter().flatten() {
            output.push_str(&reader.join().unwrap_or_default());
        }

        Ok(FormatStatus::Failed {
            code: status.code(),
            output,
        })
    }
}

fn drain(mut pipe: impl Read + Send + 'static) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}
