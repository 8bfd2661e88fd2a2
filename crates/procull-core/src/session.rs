use crate::config::CullConfig;
use crate::console::{Console, Emphasis};
use crate::process::ProcessProvider;
use crate::scanner::Scanner;

/// Where the interactive loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Scanning,
    Terminated,
}

/// Top-level interactive loop: reads a command, dispatches to the scanner,
/// exits on request.
pub struct Session<P, C> {
    provider: P,
    console: C,
    config: CullConfig,
}

impl<P: ProcessProvider, C: Console> Session<P, C> {
    pub fn new(provider: P, console: C, config: CullConfig) -> Self {
        Self {
            provider,
            console,
            config,
        }
    }

    /// Run until the operator exits. Returns the process exit code: 0 for a
    /// normal exit, 1 when an unexpected error escapes a scan cycle.
    pub fn run(&mut self) -> u8 {
        self.banner();

        let mut state = SessionState::Idle;
        loop {
            state = match state {
                SessionState::Idle => self.read_command(),
                SessionState::Scanning => {
                    let mut scanner =
                        Scanner::new(&mut self.provider, &mut self.console, &self.config);
                    match scanner.scan() {
                        Ok(()) => SessionState::Idle,
                        Err(err) => {
                            self.console
                                .line(Emphasis::Danger, &format!("Unexpected Error: {err}"));
                            return 1;
                        }
                    }
                }
                SessionState::Terminated => return 0,
            };
        }
    }

    fn read_command(&mut self) -> SessionState {
        self.console.blank();
        let Some(command) = self.console.prompt("Enter Command(x,g): ") else {
            return SessionState::Terminated; // end-of-input exits like "x"
        };
        match command.trim() {
            "x" => SessionState::Terminated,
            "g" => SessionState::Scanning,
            _ => {
                self.console.line(Emphasis::Normal, "Unknown Command");
                SessionState::Idle
            }
        }
    }

    fn banner(&mut self) {
        if self.config.dry_run {
            self.console
                .line(Emphasis::Warning, "Dry Run - No Processes Will Be Killed");
        } else {
            self.console.line(
                Emphasis::Danger,
                "Live Mode - Matching Processes Will Be Killed",
            );
        }
    }
}
