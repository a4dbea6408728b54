#![allow(dead_code)]

use boilercaps_cli::commands::prompt::Prompter;
use boilercaps_cli::commands::toolchain::{CommandRunner, Invocation, ToolProbe};
use boilercaps_cli::error::ScaffoldError;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

/// One scripted answer, consumed in order.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Choice(usize),
    Choices(Vec<usize>),
    Yes,
    No,
    Cancel,
}

/// Replays a fixed list of answers and records every question asked.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String, ScaffoldError> {
        match self.next(prompt) {
            Answer::Text("") => Ok(default.to_string()),
            Answer::Text(text) => Ok(text.to_string()),
            Answer::Cancel => Err(ScaffoldError::Cancelled),
            other => panic!("expected text for '{prompt}', got {other:?}"),
        }
    }

    fn select(&self, prompt: &str, items: &[&str], _default: usize) -> Result<usize, ScaffoldError> {
        match self.next(prompt) {
            Answer::Choice(idx) => {
                assert!(idx < items.len(), "choice {idx} out of range for '{prompt}'");
                Ok(idx)
            }
            Answer::Cancel => Err(ScaffoldError::Cancelled),
            other => panic!("expected a choice for '{prompt}', got {other:?}"),
        }
    }

    fn multi_select(&self, prompt: &str, _items: &[&str]) -> Result<Vec<usize>, ScaffoldError> {
        match self.next(prompt) {
            Answer::Choices(picked) => Ok(picked),
            Answer::Cancel => Err(ScaffoldError::Cancelled),
            other => panic!("expected choices for '{prompt}', got {other:?}"),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, ScaffoldError> {
        match self.next(prompt) {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Cancel => Err(ScaffoldError::Cancelled),
            other => panic!("expected yes/no for '{prompt}', got {other:?}"),
        }
    }
}

/// A recorded child process, with whether the watched file existed when
/// it was started.
#[derive(Debug, Clone)]
pub struct Call {
    pub invocation: Invocation,
    pub watched_existed: bool,
}

/// Records invocations instead of running them. Fails the call whose
/// display string equals `fail_on`.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Call>>,
    fail_on: Option<String>,
    watch: Option<PathBuf>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(command: &str) -> Self {
        Self {
            fail_on: Some(command.to_string()),
            ..Self::default()
        }
    }

    pub fn watching(mut self, path: PathBuf) -> Self {
        self.watch = Some(path);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.invocation.to_string())
            .collect()
    }

    /// `npm install <dep>` calls, excluding global installs.
    pub fn installs(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter(|c| c.starts_with("npm install ") && !c.contains(" -g "))
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        let watched_existed = self.watch.as_ref().map(|p| p.exists()).unwrap_or(false);
        self.calls.borrow_mut().push(Call {
            invocation: invocation.clone(),
            watched_existed,
        });
        if self.fail_on.as_deref() == Some(invocation.to_string().as_str()) {
            return Err(ScaffoldError::CommandFailed {
                command: invocation.to_string(),
                status: Some(1),
            });
        }
        Ok(())
    }
}

/// Reports a fixed set of commands as present and records lookups.
pub struct FakeProbe {
    present: HashSet<String>,
    probed: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn with(commands: &[&str]) -> Self {
        Self {
            present: commands.iter().map(|c| c.to_string()).collect(),
            probed: RefCell::new(Vec::new()),
        }
    }

    /// npm plus every generator.
    pub fn everything() -> Self {
        Self::with(&[
            "npm",
            "npx",
            "create-react-app",
            "create-react-native-app",
            "create-expo-app",
            "create-next-app",
            "express",
        ])
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl ToolProbe for FakeProbe {
    fn is_available(&self, command: &str) -> bool {
        self.probed.borrow_mut().push(command.to_string());
        self.present.contains(command)
    }
}
