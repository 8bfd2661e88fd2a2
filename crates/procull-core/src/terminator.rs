use crate::console::{Console, Emphasis};
use crate::error::CullError;
use crate::process::{ProcessId, ProcessProvider, ProcessRecord};
use tracing::{debug, warn};

/// Cascading process-tree killer.
///
/// Children are killed before their parent, each pass working from a fresh
/// snapshot of the live process table rather than the scan result that
/// selected the target. Nothing here propagates errors: one node failing
/// must not stop the rest of the pass.
pub struct Terminator {
    dry_run: bool,
}

impl Terminator {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Kill `target`'s descendants, then `target` itself. All failures are
    /// reported on the console and absorbed.
    pub fn try_kill<P: ProcessProvider, C: Console>(
        &self,
        provider: &mut P,
        console: &mut C,
        target: &ProcessRecord,
    ) {
        let mut visited = Vec::new();
        self.kill_node(provider, console, target, &mut visited);
    }

    fn kill_node<P: ProcessProvider, C: Console>(
        &self,
        provider: &mut P,
        console: &mut C,
        target: &ProcessRecord,
        visited: &mut Vec<ProcessId>,
    ) {
        // A parent chain that loops back on itself (self-referential parent
        // id, pid reuse mid-pass) fails this one node instead of recursing
        // forever.
        if visited.contains(&target.pid()) {
            warn!(pid = target.pid(), "parent chain loops, skipping node");
            return;
        }
        visited.push(target.pid());

        console.line(
            Emphasis::Danger,
            &format!("Killing Children For: {} {}", target.pid(), target.name()),
        );
        if let Err(err) = self.kill_children(provider, console, target.pid(), visited) {
            console.line(Emphasis::Danger, &format!("Error Killing Children: {err}"));
        }
        self.kill_target(provider, console, target);
    }

    fn kill_children<P: ProcessProvider, C: Console>(
        &self,
        provider: &mut P,
        console: &mut C,
        parent: ProcessId,
        visited: &mut Vec<ProcessId>,
    ) -> Result<(), CullError> {
        let snapshot = provider.processes()?;
        for candidate in &snapshot {
            match candidate.parent() {
                Ok(ppid) if ppid == parent => self.kill_node(provider, console, candidate, visited),
                Ok(_) => {}
                Err(err) => {
                    // An orphan or an unreadable entry is not a child of
                    // anything we can see; skip it and keep enumerating.
                    debug!(pid = candidate.pid(), %err, "candidate has no readable parent");
                }
            }
        }
        Ok(())
    }

    fn kill_target<P: ProcessProvider, C: Console>(
        &self,
        provider: &mut P,
        console: &mut C,
        target: &ProcessRecord,
    ) {
        console.line(
            Emphasis::Danger,
            &format!("Killing: {} {}", target.pid(), target.name()),
        );
        if self.dry_run {
            console.line(Emphasis::Warning, "Dry Run - Nothing Killed");
            return;
        }
        if let Err(err) = provider.terminate(target) {
            console.line(Emphasis::Danger, &format!("Error Killing Process: {err}"));
        }
    }
}
