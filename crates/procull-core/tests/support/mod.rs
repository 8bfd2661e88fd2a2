//! Scripted fakes for driving the engine without a live process table.

use procull_core::{Console, CullError, Emphasis, ProcessId, ProcessProvider, ProcessRecord};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Build a record with a plausible command line
pub fn record(pid: ProcessId, name: &str, parent: Option<ProcessId>) -> ProcessRecord {
    ProcessRecord::new(pid, name, Some(format!("/usr/bin/{name} --work")), parent)
}

/// Scripted process table standing in for the OS
pub struct FakeProvider {
    table: Vec<ProcessRecord>,
    fail_name_listing: bool,
    fail_enumeration: bool,
    failing_pids: Vec<ProcessId>,
    killed: Rc<RefCell<Vec<ProcessId>>>,
}

impl FakeProvider {
    pub fn new(table: Vec<ProcessRecord>) -> Self {
        Self {
            table,
            fail_name_listing: false,
            fail_enumeration: false,
            failing_pids: Vec::new(),
            killed: Rc::default(),
        }
    }

    /// Make `processes_by_name` fail outright
    pub fn failing_name_listing(mut self) -> Self {
        self.fail_name_listing = true;
        self
    }

    /// Make `processes` (the children snapshot) fail outright
    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    /// Make terminate calls against `pid` fail as if it already exited
    pub fn failing_kill(mut self, pid: ProcessId) -> Self {
        self.failing_pids.push(pid);
        self
    }

    /// Shared recorder of terminate calls, in call order
    pub fn killed(&self) -> Rc<RefCell<Vec<ProcessId>>> {
        Rc::clone(&self.killed)
    }
}

impl ProcessProvider for FakeProvider {
    fn processes_by_name(&mut self, name: &str) -> Result<Vec<ProcessRecord>, CullError> {
        if self.fail_name_listing {
            return Err(CullError::Enumeration("scripted name listing failure".to_string()));
        }
        let mut matches: Vec<ProcessRecord> = self
            .table
            .iter()
            .filter(|record| record.name() == name)
            .cloned()
            .collect();
        matches.sort_by_key(|record| record.pid());
        Ok(matches)
    }

    fn processes(&mut self) -> Result<Vec<ProcessRecord>, CullError> {
        if self.fail_enumeration {
            return Err(CullError::Enumeration("scripted listing failure".to_string()));
        }
        Ok(self.table.clone())
    }

    fn terminate(&mut self, record: &ProcessRecord) -> Result<(), CullError> {
        self.killed.borrow_mut().push(record.pid());
        if self.failing_pids.contains(&record.pid()) {
            return Err(CullError::Termination {
                pid: record.pid(),
                reason: "process not found (already exited)".to_string(),
            });
        }
        Ok(())
    }
}

/// Console with pre-scripted operator input; running out of script lines
/// reads as end-of-input.
pub struct FakeConsole {
    input: VecDeque<String>,
    lines: Rc<RefCell<Vec<(Emphasis, String)>>>,
}

impl FakeConsole {
    pub fn with_input<S: ToString, I: IntoIterator<Item = S>>(input: I) -> Self {
        Self {
            input: input.into_iter().map(|line| line.to_string()).collect(),
            lines: Rc::default(),
        }
    }

    /// Shared recorder of every rendered line with its emphasis
    pub fn lines(&self) -> Rc<RefCell<Vec<(Emphasis, String)>>> {
        Rc::clone(&self.lines)
    }
}

impl Console for FakeConsole {
    fn line(&mut self, emphasis: Emphasis, text: &str) {
        self.lines.borrow_mut().push((emphasis, text.to_string()));
    }

    fn prompt(&mut self, _text: &str) -> Option<String> {
        self.input.pop_front()
    }
}

/// Position of `needle` in the rendered transcript, ignoring emphasis
pub fn rendered_position(lines: &[(Emphasis, String)], needle: &str) -> Option<usize> {
    lines.iter().position(|(_, text)| text == needle)
}

/// Whether any rendered line starts with `prefix`
pub fn rendered_with_prefix(lines: &[(Emphasis, String)], prefix: &str) -> bool {
    lines.iter().any(|(_, text)| text.starts_with(prefix))
}
