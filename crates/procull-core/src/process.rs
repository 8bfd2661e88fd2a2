use crate::error::CullError;

/// Unique identifier for a process. Unique at one point in time; the OS may
/// reuse it after the process exits.
pub type ProcessId = u32;

/// One process as captured by a provider snapshot.
///
/// Records are created fresh on every enumeration and never mutated. The
/// optional attributes are `None` when the OS would not yield them (the
/// process exited mid-scan, or access was denied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pid: ProcessId,
    name: String,
    cmdline: Option<String>,
    parent: Option<ProcessId>,
}

impl ProcessRecord {
    pub fn new(
        pid: ProcessId,
        name: impl Into<String>,
        cmdline: Option<String>,
        parent: Option<ProcessId>,
    ) -> Self {
        Self {
            pid,
            name: name.into(),
            cmdline,
            parent,
        }
    }

    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Executable name as reported by the OS
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command line as captured at snapshot time
    pub fn cmdline(&self) -> Result<&str, CullError> {
        self.cmdline
            .as_deref()
            .ok_or(CullError::AttributeUnavailable {
                pid: self.pid,
                attribute: "command line",
            })
    }

    /// Parent process id as captured at snapshot time
    pub fn parent(&self) -> Result<ProcessId, CullError> {
        self.parent.ok_or(CullError::AttributeUnavailable {
            pid: self.pid,
            attribute: "parent pid",
        })
    }
}

/// Source of process snapshots and termination requests.
///
/// Takes `&mut self` because implementations refresh an owned view of the OS
/// process table on every call; nothing is cached between calls.
pub trait ProcessProvider {
    /// All currently running processes whose executable name equals `name`,
    /// sorted by pid. Empty when nothing matches. One entry's unreadable
    /// metadata must not fail the listing; the affected optional attributes
    /// come back unavailable instead.
    fn processes_by_name(&mut self, name: &str) -> Result<Vec<ProcessRecord>, CullError>;

    /// Fresh snapshot of every running process
    fn processes(&mut self) -> Result<Vec<ProcessRecord>, CullError>;

    /// Request OS termination of the process behind `record`
    fn terminate(&mut self, record: &ProcessRecord) -> Result<(), CullError>;
}

/// Factory trait for creating platform-specific providers
pub trait ProviderFactory {
    /// The type of provider this factory creates
    type Provider: ProcessProvider;

    /// Create a provider for the current platform
    fn create_provider() -> Self::Provider;

    /// Get the platform name for logging and debugging
    fn platform_name() -> &'static str;
}
