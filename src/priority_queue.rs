use core::fmt::{Debug, Formatter};

/// One item in a `PriorityQueue`: a value and the priority it was queued with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<T, P> {
    pub value: T,
    pub priority: P,
}

/// A binary min-heap of (value, priority) pairs.
///
/// The entry with the lowest priority is always at the root. There is no
/// decrease-key operation; a value can be queued any number of times with
/// different priorities, and consumers are expected to ignore the stale copies.
/// Entries with equal priorities come out in no particular order.
pub struct PriorityQueue<T, P> {
    pq: Vec<Entry<T, P>>,
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self { pq: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pq: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    pub fn clear(&mut self) {
        self.pq.clear();
    }

    /// Returns the entry with the lowest priority, without removing it.
    pub fn peek(&self) -> Option<&Entry<T, P>> {
        self.pq.first()
    }

    /// Inserts a value into the partially-sorted heap.
    pub fn enqueue(&mut self, value: T, priority: P) {
        self.pq.push(Entry { value, priority });
        let mut i = self.pq.len() - 1;
        while i > 0 {
            let parent = parent(i);
            if self.pq[parent].priority <= self.pq[i].priority {
                break;
            }
            self.pq.swap(i, parent);
            i = parent;
        }
        debug_assert!(self.is_heap());
    }

    /// Removes the entry with the lowest priority.
    pub fn dequeue(&mut self) -> Option<Entry<T, P>> {
        if self.pq.is_empty() {
            return None;
        }
        let result = self.pq.swap_remove(0);

        let len = self.pq.len();
        let mut i: usize = 0;
        loop {
            let left = left(i);
            if left >= len {
                break;
            }
            let right = right(i);
            let smaller = if right < len && self.pq[right].priority < self.pq[left].priority {
                right
            } else {
                left
            };
            if self.pq[smaller].priority < self.pq[i].priority {
                self.pq.swap(i, smaller);
                i = smaller;
            } else {
                break;
            }
        }

        debug_assert!(self.is_heap());
        Some(result)
    }

    /// Checks the heap ordering of every parent/child pair.
    pub fn is_heap(&self) -> bool {
        (1..self.pq.len()).all(|i| self.pq[parent(i)].priority <= self.pq[i].priority)
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P: Debug> Debug for PriorityQueue<T, P> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for entry in self.pq.iter() {
            write!(fmt, "{:?}@{:?} ", entry.value, entry.priority)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, P: PartialOrd>(q: &mut PriorityQueue<T, P>) -> Vec<(T, P)> {
        let mut out = Vec::new();
        while let Some(e) = q.dequeue() {
            out.push((e.value, e.priority));
        }
        out
    }

    #[test]
    fn empty_queue() {
        let mut q: PriorityQueue<&str, u32> = PriorityQueue::new();
        assert!(q.is_empty());
        assert!(q.peek().is_none());
        assert!(q.dequeue().is_none());
        // still usable afterwards
        q.enqueue("a", 1);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn dequeue_order_test() {
        fn case(description: &str, input: &[u32]) {
            let mut q = PriorityQueue::with_capacity(input.len());
            for (i, &p) in input.iter().enumerate() {
                q.enqueue(i, p);
                assert!(q.is_heap(), "{}: heap broken after enqueue {}", description, i);
            }
            let mut expected = input.to_vec();
            expected.sort();
            let actual: Vec<u32> = drain(&mut q).into_iter().map(|(_, p)| p).collect();
            assert_eq!(actual, expected, "{}", description);
        }

        case("empty", &[]);
        case("single", &[7]);
        case("ascending", &[1, 2, 3, 4, 5, 6, 7]);
        case("descending", &[7, 6, 5, 4, 3, 2, 1]);
        case("duplicates", &[3, 1, 3, 1, 2, 2, 0, 3]);
        case("mixed", &[41, 2, 99, 17, 5, 63, 0, 12, 8, 8, 71]);
    }

    #[test]
    fn right_child_is_preferred_when_smaller() {
        // root 1, left 5, right 3: after removing the root the last entry
        // must be compared against both children.
        let mut q = PriorityQueue::new();
        for &(v, p) in [("a", 1), ("b", 5), ("c", 3), ("d", 9), ("e", 6)].iter() {
            q.enqueue(v, p);
        }
        assert_eq!(q.dequeue().map(|e| e.value), Some("a"));
        assert!(q.is_heap());
        assert_eq!(q.peek().map(|e| e.value), Some("c"));
    }

    #[test]
    fn same_value_queued_twice() {
        let mut q = PriorityQueue::new();
        q.enqueue("x", 10.0);
        q.enqueue("y", 4.0);
        q.enqueue("x", 2.5);
        let drained = drain(&mut q);
        assert_eq!(drained, vec![("x", 2.5), ("y", 4.0), ("x", 10.0)]);
    }

    #[test]
    fn interleaved_operations() {
        let mut q = PriorityQueue::new();
        q.enqueue('d', 4);
        q.enqueue('b', 2);
        assert_eq!(q.dequeue(), Some(Entry { value: 'b', priority: 2 }));
        q.enqueue('a', 1);
        q.enqueue('c', 3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue().map(|e| e.value), Some('a'));
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn debug_lists_entries() {
        let mut q = PriorityQueue::new();
        q.enqueue("a", 1);
        assert_eq!(format!("{:?}", q), "Q: \"a\"@1 ");
    }
}
