extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Stable index of a node in a [`List`] arena.
///
/// A handle stays valid until the node it names is unlinked. Slots are
/// recycled through a free list, so a handle must never be used after its
/// node was removed; the cache upholds this by keeping exactly one handle
/// per resident key, stored in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(usize);

struct Slot<T> {
    /// `None` marks a free slot awaiting reuse.
    value: Option<T>,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// A doubly linked list backed by a slot arena.
///
/// Nodes are addressed by stable integer [`Handle`]s instead of pointers,
/// which keeps splice and remove O(1) without any `unsafe` or ownership
/// cycles. Both cache regions are built on this one type:
///
/// - FIFO use: `push_back` to admit, `pop_front` for the oldest entry.
/// - LRU use: `push_front` to rank as most recent, `pop_back` for the
///   least recent, `move_to_front` to re-rank.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free: Vec<Handle>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        List {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `cap` nodes before reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        List {
            slots: Vec::with_capacity(cap),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the current number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Takes a slot from the free list or grows the arena.
    fn alloc_slot(&mut self, value: T) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                let slot = &mut self.slots[handle.0];
                slot.value = Some(value);
                slot.prev = None;
                slot.next = None;
                handle
            }
            None => {
                self.slots.push(Slot {
                    value: Some(value),
                    prev: None,
                    next: None,
                });
                Handle(self.slots.len() - 1)
            }
        }
    }

    /// Inserts a value at the head and returns its handle.
    pub fn push_front(&mut self, value: T) -> Handle {
        let handle = self.alloc_slot(value);
        self.slots[handle.0].next = self.head;
        match self.head {
            Some(old_head) => self.slots[old_head.0].prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    /// Inserts a value at the tail and returns its handle.
    pub fn push_back(&mut self, value: T) -> Handle {
        let handle = self.alloc_slot(value);
        self.slots[handle.0].prev = self.tail;
        match self.tail {
            Some(old_tail) => self.slots[old_tail.0].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
        handle
    }

    /// Splices a node out of the chain without freeing its slot.
    fn detach(&mut self, handle: Handle) {
        let (prev, next) = {
            let slot = &self.slots[handle.0];
            (slot.prev, slot.next)
        };
        match prev {
            Some(p) => self.slots[p.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n.0].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Removes the node named by `handle`, returning its value.
    ///
    /// Returns `None` if the slot was already freed, so a stale handle is
    /// a no-op rather than a corruption.
    pub fn unlink(&mut self, handle: Handle) -> Option<T> {
        let value = self.slots[handle.0].value.take()?;
        self.detach(handle);
        let slot = &mut self.slots[handle.0];
        slot.prev = None;
        slot.next = None;
        self.free.push(handle);
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Removes and returns the tail value.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Moves the node named by `handle` to the head.
    pub fn move_to_front(&mut self, handle: Handle) {
        if self.head == Some(handle) || self.slots[handle.0].value.is_none() {
            return;
        }
        self.detach(handle);
        let old_head = self.head;
        {
            let slot = &mut self.slots[handle.0];
            slot.prev = None;
            slot.next = old_head;
        }
        // The list held at least two nodes (handle was not the head), so
        // old_head is present and the tail stays valid after the detach.
        if let Some(old_head) = old_head {
            self.slots[old_head.0].prev = Some(handle);
        }
        self.head = Some(handle);
    }

    /// Returns a reference to the head value.
    pub fn front(&self) -> Option<&T> {
        self.slots[self.head?.0].value.as_ref()
    }

    /// Returns a reference to the tail value.
    pub fn back(&self) -> Option<&T> {
        self.slots[self.tail?.0].value.as_ref()
    }

    /// Returns a reference to the value named by `handle`.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots[handle.0].value.as_ref()
    }

    /// Removes every node and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}
