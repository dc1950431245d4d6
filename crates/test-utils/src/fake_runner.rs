use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use morphpoem::errors::{MorphError, Result};
use morphpoem::exec::{CapturedOutput, MorphCommand, ProcessRunner};

/// A fake runner that:
/// - records every command line it was asked to run
/// - answers with a scripted `CapturedOutput` per command line, or by
///   echoing the arguments one per line (what a morph program that found a
///   direct path would print)
/// - can refuse to spawn a given command, like a missing shell.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<String>>>,
    scripted: HashMap<String, CapturedOutput>,
    unspawnable: Vec<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded command lines.
    pub fn executed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.executed)
    }

    pub fn respond(mut self, line: &str, output: CapturedOutput) -> Self {
        self.scripted.insert(line.to_string(), output);
        self
    }

    pub fn fail_to_spawn(mut self, line: &str) -> Self {
        self.unspawnable.push(line.to_string());
        self
    }
}

impl ProcessRunner for FakeRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a MorphCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>> {
        Box::pin(async move {
            let line = command.line().to_string();
            if self.unspawnable.contains(&line) {
                return Err(MorphError::ExecutableNotFound { command: line });
            }

            self.executed.lock().unwrap().push(line.clone());

            Ok(self.scripted.get(&line).cloned().unwrap_or_else(|| {
                let text: String = command
                    .args
                    .iter()
                    .map(|a| format!("{}\n", a.trim_matches('\'')))
                    .collect();
                CapturedOutput::new(text, Some(0))
            }))
        })
    }
}
