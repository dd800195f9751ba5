use std::ptr::NonNull;

pub(crate) type Link = Option<NodePtr>;

pub(crate) struct Node {
    pub value: i32,
    pub next: Link,
}

/// A handle to a heap allocated [`Node`]. Handles are [`Copy`], ownership of the allocation
/// belongs to the list that the node is linked into, which frees it exactly once via
/// [`take_node`](NodePtr::take_node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodePtr(pub NonNull<Node>);

// SAFETY (for all accessors below): A NodePtr is only ever held by the list that owns its node,
// or by an iterator borrowing that list. The node stays allocated until the list takes it back
// with `take_node`, after which no copy of the handle is used again.
impl NodePtr {
    pub fn from_node(node: Node) -> NodePtr {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the allocation behind this handle.
    ///
    /// # Safety
    /// The node must still be allocated, and neither this handle nor any copy of it may be used
    /// again.
    pub unsafe fn take_node(self) -> Node {
        // SAFETY: The pointer came from Box::leak in from_node and hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a i32 {
        // SAFETY: See the comment on this impl block.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut i32 {
        // SAFETY: See the comment on this impl block.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next(self) -> Link {
        // SAFETY: See the comment on this impl block.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Link) {
        // SAFETY: See the comment on this impl block.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}
