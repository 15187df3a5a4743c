use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry. `via` is the predecessor and the weight of the edge
/// that produced this entry; `None` only for the start entry.
#[derive(Clone, Debug)]
pub struct Entry<N> {
    pub f: f64,
    pub g: f64,
    pub seq: u64,
    pub node: N,
    pub via: Option<(N, f64)>,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N> Eq for Entry<N> {}
impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior.
        // Node values never take part in the ordering.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue ordered by (f, g, insertion sequence). Superseded
/// entries are not removed; callers discard them on pop.
pub struct Frontier<N> {
    heap: BinaryHeap<Entry<N>>,
    next_seq: u64,
}

impl<N> Default for Frontier<N> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }
}

impl<N> Frontier<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, f: f64, g: f64, node: N, via: Option<(N, f64)>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, g, seq, node, via });
    }

    pub fn pop(&mut self) -> Option<Entry<N>> {
        self.heap.pop()
    }

    /// Total pushes since creation.
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_priority_then_cost_then_insertion() {
        let mut q = Frontier::new();
        q.push(5.0, 1.0, "late", None);
        q.push(3.0, 2.0, "b", None);
        q.push(3.0, 1.0, "a", None);
        q.push(3.0, 2.0, "c", None);
        let order: Vec<&str> = std::iter::from_fn(|| q.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec!["a", "b", "c", "late"]);
        assert_eq!(q.pushed(), 4);
        assert!(q.pop().is_none());
    }

    #[test]
    fn nodes_need_no_ordering() {
        #[derive(Debug, PartialEq)]
        struct Opaque(u8);
        let mut q = Frontier::new();
        q.push(1.0, 1.0, Opaque(2), None);
        q.push(1.0, 1.0, Opaque(1), None);
        assert_eq!(q.pop().map(|e| e.node), Some(Opaque(2)));
        assert_eq!(q.pop().map(|e| e.node), Some(Opaque(1)));
    }
}
