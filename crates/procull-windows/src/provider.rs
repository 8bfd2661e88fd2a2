#[cfg(windows)]
mod windows_impl {
    use procull_core::{CullError, ProcessProvider, ProcessRecord};
    use std::ffi::OsStr;
    use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System};
    use tracing::{debug, info};

    /// Windows provider backed by sysinfo for both enumeration and
    /// termination requests.
    pub struct WindowsProcessProvider {
        system: System,
    }

    impl WindowsProcessProvider {
        pub fn new() -> Self {
            info!("initializing windows process provider");
            Self {
                system: System::new_all(),
            }
        }

        fn refresh(&mut self) {
            self.system.refresh_processes_specifics(
                ProcessesToUpdate::All,
                true,
                ProcessRefreshKind::everything(),
            );
        }

        fn record(process: &Process) -> ProcessRecord {
            let parts: Vec<String> = process
                .cmd()
                .iter()
                .map(|part| part.to_string_lossy().into_owned())
                .collect();
            // Access-denied entries report an empty command line
            let cmdline = if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            };
            ProcessRecord::new(
                process.pid().as_u32(),
                process.name().to_string_lossy().into_owned(),
                cmdline,
                process.parent().map(|pid| pid.as_u32()),
            )
        }
    }

    impl Default for WindowsProcessProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProcessProvider for WindowsProcessProvider {
        fn processes_by_name(&mut self, name: &str) -> Result<Vec<ProcessRecord>, CullError> {
            self.refresh();
            let mut matches: Vec<ProcessRecord> = self
                .system
                .processes_by_exact_name(OsStr::new(name))
                .map(Self::record)
                .collect();
            matches.sort_by_key(|record| record.pid());
            debug!(name, count = matches.len(), "name scan complete");
            Ok(matches)
        }

        fn processes(&mut self) -> Result<Vec<ProcessRecord>, CullError> {
            self.refresh();
            Ok(self.system.processes().values().map(Self::record).collect())
        }

        fn terminate(&mut self, record: &ProcessRecord) -> Result<(), CullError> {
            self.refresh();
            let Some(process) = self.system.process(Pid::from_u32(record.pid())) else {
                return Err(CullError::Termination {
                    pid: record.pid(),
                    reason: "process not found (already exited)".to_string(),
                });
            };
            if process.kill() {
                info!(pid = record.pid(), "terminate requested");
                Ok(())
            } else {
                Err(CullError::Termination {
                    pid: record.pid(),
                    reason: "the OS rejected the terminate request".to_string(),
                })
            }
        }
    }
}

// Re-export the Windows implementation when on Windows systems
#[cfg(windows)]
pub use windows_impl::WindowsProcessProvider;

// Provide stub implementations for non-Windows systems
#[cfg(not(windows))]
pub struct WindowsProcessProvider;

#[cfg(not(windows))]
impl WindowsProcessProvider {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl Default for WindowsProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}
