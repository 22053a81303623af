use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, PoisonError,
};

use arc_swap::ArcSwap;
use models::{
    default_portfolio, Collection, ContactLink, ContactLinkInput, PartialPortfolioState, PortfolioState,
    ProfileField, Project, ProjectInput, SectionKey, StackIcon, StackIconInput,
};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

use super::collections::{self, Placement};
use crate::observability::{LOAD_FAILURES_TOTAL, MUTATIONS_TOTAL, PERSIST_FAILURES_TOTAL, PERSIST_WRITES_TOTAL};
use crate::storage::SnapshotBackend;

enum WriteCommand {
    Persist(Arc<PortfolioState>),
    Flush(oneshot::Sender<()>),
}

/// Owner of the portfolio snapshot.
///
/// Every mutation builds a new `PortfolioState` from the current one and swaps
/// it in, so readers only ever see whole snapshots. After the swap the full
/// snapshot is queued for a single background writer; callers never wait on
/// durability and never see storage errors, which are logged and counted.
pub struct ContentStore {
    key: String,
    backend: Arc<dyn SnapshotBackend>,
    current: ArcSwap<PortfolioState>,
    ready: AtomicBool,
    // held across read-modify-write so queued writes follow swap order
    mutation_lock: Mutex<()>,
    changes: watch::Sender<Arc<PortfolioState>>,
    writer: mpsc::UnboundedSender<WriteCommand>,
}

impl ContentStore {
    /// Build an unloaded store holding the default snapshot.
    ///
    /// Must be called inside a Tokio runtime: the persistence writer is spawned here.
    pub fn new(backend: Arc<dyn SnapshotBackend>, key: impl Into<String>) -> Arc<Self> {
        let key = key.into();
        let initial = Arc::new(default_portfolio());
        let (changes, _) = watch::channel(Arc::clone(&initial));
        let (writer, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(Arc::clone(&backend), key.clone(), rx));

        Arc::new(Self {
            key,
            backend,
            current: ArcSwap::new(initial),
            ready: AtomicBool::new(false),
            mutation_lock: Mutex::new(()),
            changes,
            writer,
        })
    }

    /// `new` followed by `load`.
    pub async fn open(backend: Arc<dyn SnapshotBackend>, key: impl Into<String>) -> Arc<Self> {
        let store = Self::new(backend, key);
        store.load().await;
        store
    }

    /// Read the persisted snapshot and merge it over the defaults.
    ///
    /// Absent data seeds the defaults and writes them back. Unreadable or
    /// corrupt data falls back to the defaults without writing, leaving the
    /// stored document untouched for inspection. Never fails.
    pub async fn load(&self) {
        let key = self.key.as_str();
        let (snapshot, seed) = match self.backend.read(key).await {
            Ok(None) => {
                info!(key, "no persisted snapshot; seeding defaults");
                (default_portfolio(), true)
            }
            Ok(Some(raw)) => match PartialPortfolioState::from_json(&raw) {
                Ok(partial) => {
                    debug!(key, bytes = raw.len(), "persisted snapshot loaded");
                    (partial.merge_over(default_portfolio()), false)
                }
                Err(e) => {
                    LOAD_FAILURES_TOTAL.inc();
                    error!(key, error = %e, "persisted snapshot is corrupt; falling back to defaults");
                    (default_portfolio(), false)
                }
            },
            Err(e) => {
                LOAD_FAILURES_TOTAL.inc();
                error!(key, error = %e, "failed to read persisted snapshot; falling back to defaults");
                (default_portfolio(), false)
            }
        };

        let _guard = self.mutation_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = Arc::new(snapshot);
        self.publish(Arc::clone(&snapshot));
        self.ready.store(true, Ordering::Release);
        info!(
            key,
            projects = snapshot.projects.len(),
            stacks = snapshot.stacks.len(),
            contacts = snapshot.contacts.len(),
            "content store ready"
        );
        if seed {
            self.queue_write(snapshot);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current snapshot. Later mutations never change a returned value.
    pub fn snapshot(&self) -> Arc<PortfolioState> {
        self.current.load_full()
    }

    /// Receive every snapshot published after this call.
    pub fn subscribe(&self) -> watch::Receiver<Arc<PortfolioState>> {
        self.changes.subscribe()
    }

    pub fn set_profile_field(&self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        self.mutate("set_profile_field", |state| *state.profile_field_mut(field) = value);
    }

    pub fn set_project_section_title(&self, key: SectionKey, value: impl Into<String>) {
        let value = value.into();
        self.mutate("set_project_section_title", |state| state.project_section_titles.set(key, value));
    }

    /// Insert or replace by id. New projects go to the front of the list.
    pub fn upsert_project(&self, input: ProjectInput) -> Project {
        let project = input.into_project();
        let stored = project.clone();
        self.mutate("upsert_project", |state| collections::upsert(&mut state.projects, project, Placement::Front));
        stored
    }

    /// Insert or replace by id. New stacks go to the end of the list.
    pub fn upsert_stack(&self, input: StackIconInput) -> StackIcon {
        let stack = input.into_stack();
        let stored = stack.clone();
        self.mutate("upsert_stack", |state| collections::upsert(&mut state.stacks, stack, Placement::Back));
        stored
    }

    /// Insert or replace by id. New contacts go to the end of the list.
    pub fn upsert_contact(&self, input: ContactLinkInput) -> ContactLink {
        let contact = input.into_contact();
        let stored = contact.clone();
        self.mutate("upsert_contact", |state| collections::upsert(&mut state.contacts, contact, Placement::Back));
        stored
    }

    /// Remove the item with `id` from `collection`. Unknown ids are a no-op;
    /// the return value only reports whether something was removed.
    pub fn delete(&self, collection: Collection, id: &str) -> bool {
        self.mutate("delete", |state| match collection {
            Collection::Projects => collections::remove(&mut state.projects, id),
            Collection::Stacks => collections::remove(&mut state.stacks, id),
            Collection::Contacts => collections::remove(&mut state.contacts, id),
        })
    }

    /// Wait until every write queued so far has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.writer.send(WriteCommand::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }

    fn mutate<R>(&self, op: &'static str, f: impl FnOnce(&mut PortfolioState) -> R) -> R {
        let _guard = self.mutation_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = PortfolioState::clone(&self.current.load_full());
        let out = f(&mut next);
        let next = Arc::new(next);
        self.publish(Arc::clone(&next));
        MUTATIONS_TOTAL.inc();

        if self.is_ready() {
            self.queue_write(next);
        } else {
            // persisting now would clobber stored data that load has not merged yet
            debug!(op, "store not loaded yet; mutation kept in memory only");
        }
        out
    }

    fn publish(&self, snapshot: Arc<PortfolioState>) {
        self.current.store(Arc::clone(&snapshot));
        self.changes.send_replace(snapshot);
    }

    fn queue_write(&self, snapshot: Arc<PortfolioState>) {
        if self.writer.send(WriteCommand::Persist(snapshot)).is_err() {
            PERSIST_FAILURES_TOTAL.inc();
            warn!(key = %self.key, "persistence writer is gone; snapshot kept in memory only");
        }
    }
}

async fn run_writer(
    backend: Arc<dyn SnapshotBackend>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            WriteCommand::Persist(snapshot) => persist(backend.as_ref(), &key, &snapshot).await,
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!(key = %key, "persistence writer stopped");
}

async fn persist(backend: &dyn SnapshotBackend, key: &str, snapshot: &PortfolioState) {
    let raw = match serde_json::to_string(snapshot) {
        Ok(raw) => raw,
        Err(e) => {
            PERSIST_FAILURES_TOTAL.inc();
            error!(key, error = %e, "failed to serialize snapshot");
            return;
        }
    };
    match backend.write(key, &raw).await {
        Ok(()) => {
            PERSIST_WRITES_TOTAL.inc();
            debug!(key, bytes = raw.len(), "snapshot persisted");
        }
        Err(e) => {
            PERSIST_FAILURES_TOTAL.inc();
            warn!(key, error = %e, "failed to persist snapshot; in-memory state retained");
        }
    }
}
