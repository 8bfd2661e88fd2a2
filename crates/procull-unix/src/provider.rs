#[cfg(unix)]
mod unix_impl {
    use nix::errno::Errno;
    use nix::sys::signal::{self, Signal};
    use nix::unistd::Pid as NixPid;
    use procull_core::{CullError, ProcessProvider, ProcessRecord};
    use std::ffi::OsStr;
    use sysinfo::{Process, ProcessRefreshKind, ProcessesToUpdate, System};
    use tracing::{debug, info};

    /// Unix provider backed by sysinfo for enumeration and SIGKILL for
    /// termination. Every listing refreshes the owned process table, so a
    /// snapshot is never older than the call that produced it.
    pub struct UnixProcessProvider {
        system: System,
    }

    impl UnixProcessProvider {
        pub fn new() -> Self {
            info!("initializing unix process provider");
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
            // Kernel threads and zombies report an empty command line
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

    impl Default for UnixProcessProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProcessProvider for UnixProcessProvider {
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
            let pid = NixPid::from_raw(record.pid() as i32);
            match signal::kill(pid, Signal::SIGKILL) {
                Ok(()) => {
                    info!(pid = record.pid(), "sent SIGKILL");
                    Ok(())
                }
                Err(Errno::ESRCH) => Err(CullError::Termination {
                    pid: record.pid(),
                    reason: "process not found (already exited)".to_string(),
                }),
                Err(Errno::EPERM) => Err(CullError::Termination {
                    pid: record.pid(),
                    reason: "permission denied".to_string(),
                }),
                Err(err) => Err(CullError::Termination {
                    pid: record.pid(),
                    reason: format!("SIGKILL failed: {err}"),
                }),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn snapshot_contains_this_process() {
            let mut provider = UnixProcessProvider::new();
            let snapshot = provider.processes().unwrap();
            let own_pid = std::process::id();
            assert!(snapshot.iter().any(|record| record.pid() == own_pid));
        }

        #[test]
        fn terminating_a_nonexistent_pid_reports_not_found() {
            let mut provider = UnixProcessProvider::new();
            // Far beyond pid_max on any Linux default, still a positive pid_t
            let ghost = ProcessRecord::new(i32::MAX as u32, "ghost", None, None);
            assert!(matches!(
                provider.terminate(&ghost),
                Err(CullError::Termination { .. })
            ));
        }
    }
}

// Re-export the Unix implementation when on Unix systems
#[cfg(unix)]
pub use unix_impl::UnixProcessProvider;

// Provide stub implementations for non-Unix systems
#[cfg(not(unix))]
pub struct UnixProcessProvider;

#[cfg(not(unix))]
impl UnixProcessProvider {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(unix))]
impl Default for UnixProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}
