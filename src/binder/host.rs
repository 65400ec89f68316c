//! The seam between the binder and its hosting document.
//!
//! The hosting application supplies the input scan, the picker
//! constructor, the container lookup and the watch registration. Page
//! markup typically wraps every picker input in a fixed container
//! structure; the lookup is an explicit host operation so that layout
//! contract lives with the host rather than in a hard-coded ancestor
//! traversal.

/// A registered subtree observation. One-shot in practice: the binder
/// disconnects it the moment it fires.
pub trait MutationWatch {
    /// Stop observing. Must be idempotent.
    fn disconnect(&mut self);

    /// Whether the watch is still registered.
    fn is_connected(&self) -> bool;
}

/// Hosting document for picker binding.
pub trait DocumentHost {
    /// A marked form input eligible for a picker.
    type Input: Clone;
    /// An observed ancestor container. Equality must mean identity.
    type Container: Clone + PartialEq;
    /// An attached picker instance.
    type Picker;
    type Watch: MutationWatch;

    /// Every currently marked input, in document order.
    fn marked_inputs(&self) -> Vec<Self::Input>;

    /// Construct a picker attached to the input. Mutates the document.
    fn attach_picker(&mut self, input: &Self::Input) -> Self::Picker;

    /// The container whose subtree should be observed for this picker,
    /// if one can be resolved.
    fn container_of(&self, picker: &Self::Picker) -> Option<Self::Container>;

    /// Register one shared observation over the given containers,
    /// reacting to child additions and removals anywhere in each
    /// container's subtree.
    fn observe(&mut self, containers: &[Self::Container]) -> Self::Watch;
}
