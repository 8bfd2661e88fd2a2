use crate::config::CullConfig;
use crate::console::{Console, Emphasis};
use crate::error::CullError;
use crate::process::ProcessProvider;
use crate::selection::parse_selection;
use crate::terminator::Terminator;
use tracing::info;

/// One discovery cycle: list matches, render them, read a selection, kill.
pub struct Scanner<'a, P, C> {
    provider: &'a mut P,
    console: &'a mut C,
    config: &'a CullConfig,
}

impl<'a, P: ProcessProvider, C: Console> Scanner<'a, P, C> {
    pub fn new(provider: &'a mut P, console: &'a mut C, config: &'a CullConfig) -> Self {
        Self {
            provider,
            console,
            config,
        }
    }

    /// Run the cycle to completion.
    ///
    /// A malformed or out-of-range selection voids the whole cycle (nothing
    /// gets killed) and is not an error at this level; only a failed initial
    /// enumeration propagates.
    pub fn scan(&mut self) -> Result<(), CullError> {
        let matches = self.provider.processes_by_name(&self.config.target)?;
        if matches.is_empty() {
            self.console
                .line(Emphasis::Normal, "No Matching Processes Found");
            return Ok(());
        }

        for (index, record) in matches.iter().enumerate() {
            self.console.line(
                Emphasis::Normal,
                &format!("{index}) {} {}", record.pid(), record.name()),
            );
            self.console.line(
                Emphasis::Normal,
                &format!(
                    "     {}",
                    record.cmdline().unwrap_or("<command line unavailable>")
                ),
            );
            self.console.blank();
        }

        self.console.blank();
        let Some(input) = self
            .console
            .prompt("Enter Index(es) To Kill or x to continue: ")
        else {
            return Ok(()); // end-of-input cancels like "x"
        };
        if input.trim() == "x" {
            return Ok(());
        }

        let indices = match parse_selection(&input) {
            Ok(indices) => indices,
            Err(err) => {
                self.console
                    .line(Emphasis::Danger, &format!("Nothing Killed: {err}"));
                return Ok(());
            }
        };
        // Bounds-check the whole batch before touching anything; one bad
        // index voids the entire request.
        if let Some(bad) = indices.iter().find(|index| **index >= matches.len()) {
            let err = CullError::InvalidSelection(format!("index {bad} is out of range"));
            self.console
                .line(Emphasis::Danger, &format!("Nothing Killed: {err}"));
            return Ok(());
        }

        info!(
            count = indices.len(),
            dry_run = self.config.dry_run,
            "terminating selected process trees"
        );
        let terminator = Terminator::new(self.config.dry_run);
        for index in indices {
            // Sequential on purpose: overlapping trees must not race.
            terminator.try_kill(self.provider, self.console, &matches[index]);
        }
        Ok(())
    }
}
