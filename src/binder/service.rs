//! Picker binding lifecycle.

use tracing::{debug, info};

use super::host::{DocumentHost, MutationWatch};

/// Binder lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    /// Not initialized, or shut down.
    Idle,
    /// Pickers bound, watch armed.
    Watching,
    /// Watch fired; full rebind in progress.
    Reinitializing,
}

/// Binds date pickers to marked inputs and keeps them bound across
/// document mutations.
///
/// The hosting application owns the lifecycle: call
/// [`initialize`](PickerBinder::initialize) once the document is ready,
/// forward watch firings to [`on_mutation`](PickerBinder::on_mutation),
/// and call [`shutdown`](PickerBinder::shutdown) on teardown. A firing
/// watch is disconnected before anything else, then the whole document
/// is re-scanned and a fresh watch armed - one full rebind pass per
/// mutation, no incremental diffing. Stale pickers from the replaced
/// document subtree are simply dropped, not destroyed.
pub struct PickerBinder<H: DocumentHost> {
    pickers: Vec<H::Picker>,
    watch: Option<H::Watch>,
    state: BinderState,
}

impl<H: DocumentHost> PickerBinder<H> {
    pub fn new() -> Self {
        Self {
            pickers: Vec::new(),
            watch: None,
            state: BinderState::Idle,
        }
    }

    /// Currently bound pickers, in the order they were attached.
    pub fn pickers(&self) -> &[H::Picker] {
        &self.pickers
    }

    pub fn state(&self) -> BinderState {
        self.state
    }

    /// Bind a picker to every marked input and arm one watch over the
    /// deduplicated set of their containers. Fully replaces any
    /// previous binding pass, disconnecting its watch.
    pub fn initialize(&mut self, host: &mut H) {
        self.disarm();
        self.bind_all(host);
        self.state = BinderState::Watching;
        info!(pickers = self.pickers.len(), "picker binder watching");
    }

    /// Handle a watch firing: disconnect the fired watch, then redo the
    /// full bind pass. Ignored unless currently watching.
    pub fn on_mutation(&mut self, host: &mut H) {
        if self.state != BinderState::Watching {
            return;
        }
        self.disarm();
        self.state = BinderState::Reinitializing;
        self.bind_all(host);
        self.state = BinderState::Watching;
        debug!(pickers = self.pickers.len(), "rebound after mutation");
    }

    /// Disconnect the watch and drop all pickers.
    pub fn shutdown(&mut self) {
        self.disarm();
        self.pickers.clear();
        self.state = BinderState::Idle;
        info!("picker binder shut down");
    }

    fn disarm(&mut self) {
        if let Some(watch) = self.watch.as_mut() {
            watch.disconnect();
        }
        self.watch = None;
    }

    /// One bind pass: scan, attach, resolve containers (first
    /// occurrence wins, later duplicates dropped), observe.
    fn bind_all(&mut self, host: &mut H) {
        let inputs = host.marked_inputs();
        let mut pickers = Vec::with_capacity(inputs.len());
        for input in &inputs {
            pickers.push(host.attach_picker(input));
        }
        self.pickers = pickers;

        let mut containers: Vec<H::Container> = Vec::new();
        for picker in &self.pickers {
            if let Some(container) = host.container_of(picker) {
                if !containers.contains(&container) {
                    containers.push(container);
                }
            }
        }

        debug!(
            pickers = self.pickers.len(),
            containers = containers.len(),
            "bind pass complete"
        );
        self.watch = Some(host.observe(&containers));
    }
}

impl<H: DocumentHost> Default for PickerBinder<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct TestWatch {
        connected: Rc<Cell<bool>>,
        containers: Vec<u32>,
    }

    impl MutationWatch for TestWatch {
        fn disconnect(&mut self) {
            self.connected.set(false);
        }

        fn is_connected(&self) -> bool {
            self.connected.get()
        }
    }

    struct TestPicker {
        input: u32,
        container: Option<u32>,
    }

    /// In-memory stand-in for the document: marked inputs with their
    /// containers, plus a handle to every watch ever registered.
    struct TestDocument {
        inputs: Vec<(u32, Option<u32>)>,
        attach_count: usize,
        watches: Vec<TestWatch>,
    }

    impl TestDocument {
        fn new(inputs: Vec<(u32, Option<u32>)>) -> Self {
            Self {
                inputs,
                attach_count: 0,
                watches: Vec::new(),
            }
        }
    }

    impl DocumentHost for TestDocument {
        type Input = u32;
        type Container = u32;
        type Picker = TestPicker;
        type Watch = TestWatch;

        fn marked_inputs(&self) -> Vec<u32> {
            self.inputs.iter().map(|(input, _)| *input).collect()
        }

        fn attach_picker(&mut self, input: &u32) -> TestPicker {
            self.attach_count += 1;
            let container = self
                .inputs
                .iter()
                .find(|(candidate, _)| candidate == input)
                .and_then(|(_, container)| *container);
            TestPicker {
                input: *input,
                container,
            }
        }

        fn container_of(&self, picker: &TestPicker) -> Option<u32> {
            picker.container
        }

        fn observe(&mut self, containers: &[u32]) -> TestWatch {
            let watch = TestWatch {
                connected: Rc::new(Cell::new(true)),
                containers: containers.to_vec(),
            };
            self.watches.push(watch.clone());
            watch
        }
    }

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_initialize_binds_every_marked_input() {
        init_logging();
        let mut doc = TestDocument::new(vec![(1, Some(10)), (2, Some(10)), (3, Some(20))]);
        let mut binder = PickerBinder::new();

        binder.initialize(&mut doc);

        assert_eq!(binder.state(), BinderState::Watching);
        assert_eq!(binder.pickers().len(), 3);
        assert_eq!(doc.attach_count, 3);
        let bound: Vec<u32> = binder.pickers().iter().map(|p| p.input).collect();
        assert_eq!(bound, vec![1, 2, 3]);
    }

    #[test]
    fn test_containers_deduplicated_first_occurrence_order() {
        let mut doc = TestDocument::new(vec![
            (1, Some(10)),
            (2, Some(20)),
            (3, Some(10)),
            (4, Some(30)),
        ]);
        let mut binder = PickerBinder::new();

        binder.initialize(&mut doc);

        assert_eq!(doc.watches.len(), 1);
        assert_eq!(doc.watches[0].containers, vec![10, 20, 30]);
    }

    #[test]
    fn test_unresolvable_container_still_binds_picker() {
        let mut doc = TestDocument::new(vec![(1, Some(10)), (2, None)]);
        let mut binder = PickerBinder::new();

        binder.initialize(&mut doc);

        assert_eq!(binder.pickers().len(), 2);
        assert_eq!(doc.watches[0].containers, vec![10]);
    }

    #[test]
    fn test_empty_document_yields_empty_bind_pass() {
        let mut doc = TestDocument::new(vec![]);
        let mut binder = PickerBinder::new();

        binder.initialize(&mut doc);

        assert_eq!(binder.state(), BinderState::Watching);
        assert!(binder.pickers().is_empty());
        // The watch is still armed, observing nothing.
        assert_eq!(doc.watches.len(), 1);
        assert!(doc.watches[0].containers.is_empty());
    }

    #[test]
    fn test_mutation_disconnects_old_watch_and_rebinds() {
        init_logging();
        let mut doc = TestDocument::new(vec![(1, Some(10)), (2, Some(10))]);
        let mut binder = PickerBinder::new();
        binder.initialize(&mut doc);
        assert_eq!(binder.pickers().len(), 2);

        // A new marked input lands in the observed container and the
        // watch fires.
        doc.inputs.push((3, Some(10)));
        binder.on_mutation(&mut doc);

        assert_eq!(binder.state(), BinderState::Watching);
        assert_eq!(binder.pickers().len(), 3);
        assert_eq!(doc.watches.len(), 2);
        assert!(!doc.watches[0].is_connected());
        assert!(doc.watches[1].is_connected());
    }

    #[test]
    fn test_mutation_ignored_when_idle() {
        let mut doc = TestDocument::new(vec![(1, Some(10))]);
        let mut binder: PickerBinder<TestDocument> = PickerBinder::new();

        binder.on_mutation(&mut doc);

        assert_eq!(binder.state(), BinderState::Idle);
        assert!(binder.pickers().is_empty());
        assert!(doc.watches.is_empty());
    }

    #[test]
    fn test_reinitialize_replaces_previous_watch() {
        let mut doc = TestDocument::new(vec![(1, Some(10))]);
        let mut binder = PickerBinder::new();

        binder.initialize(&mut doc);
        binder.initialize(&mut doc);

        assert_eq!(doc.watches.len(), 2);
        assert!(!doc.watches[0].is_connected());
        assert!(doc.watches[1].is_connected());
        // One binding pass worth of pickers, not two.
        assert_eq!(binder.pickers().len(), 1);
    }

    #[test]
    fn test_shutdown_disconnects_and_clears() {
        let mut doc = TestDocument::new(vec![(1, Some(10)), (2, Some(20))]);
        let mut binder = PickerBinder::new();
        binder.initialize(&mut doc);

        binder.shutdown();

        assert_eq!(binder.state(), BinderState::Idle);
        assert!(binder.pickers().is_empty());
        assert!(!doc.watches[0].is_connected());

        // A fired watch after shutdown is a no-op.
        binder.on_mutation(&mut doc);
        assert_eq!(binder.state(), BinderState::Idle);
        assert_eq!(doc.watches.len(), 1);
    }
}
