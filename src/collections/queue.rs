use crate::{TreeError, TreeResult};

/// FIFO queue over a `Vec` with a moving front cursor.
///
/// Dequeued slots are vacated in place. When fewer than a quarter of the
/// underlying slots are live the storage is compacted.
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    data: Vec<Option<T>>,
    front: usize,
    size: usize,
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            front: 0,
            size: 0,
        }
    }
}

impl<T> ArrayQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Return the front element without removing it
    pub fn peek(&self) -> TreeResult<&T> {
        self.data
            .get(self.front)
            .and_then(Option::as_ref)
            .ok_or(TreeError::EmptyContainer)
    }

    /// Add an element to the back of the queue
    pub fn enqueue(&mut self, element: T) {
        self.data.push(Some(element));
        self.size += 1;
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> TreeResult<T> {
        if self.is_empty() {
            return Err(TreeError::EmptyContainer);
        }

        let value = self
            .data
            .get_mut(self.front)
            .and_then(Option::take)
            .ok_or(TreeError::EmptyContainer)?;
        self.front += 1;
        self.size -= 1;

        if self.size == 0 {
            self.data.clear();
            self.front = 0;
        } else if self.size < self.data.len() / 4 {
            self.compact();
        }

        Ok(value)
    }

    fn compact(&mut self) {
        self.data.drain(..self.front);
        self.front = 0;
    }

    /// Capacity in slots, including vacated ones not yet compacted
    #[cfg(test)]
    fn slots(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayQueue;
    use crate::TreeError;

    #[test]
    fn fifo_order() {
        let mut queue = ArrayQueue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Ok(&0));

        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_errors() {
        let mut queue: ArrayQueue<u8> = ArrayQueue::new();
        assert_eq!(queue.dequeue(), Err(TreeError::EmptyContainer));
        assert_eq!(queue.peek(), Err(TreeError::EmptyContainer));
    }

    #[test]
    fn compacts_sparse_storage() {
        let mut queue = ArrayQueue::new();
        for i in 0..16 {
            queue.enqueue(i);
        }
        for i in 0..13 {
            assert_eq!(queue.dequeue(), Ok(i));
        }

        // 3 live of 16 slots triggers compaction
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.slots(), 3);
        assert_eq!(queue.peek(), Ok(&13));

        queue.enqueue(16);
        assert_eq!(queue.dequeue(), Ok(13));
        assert_eq!(queue.dequeue(), Ok(14));
        assert_eq!(queue.dequeue(), Ok(15));
        assert_eq!(queue.dequeue(), Ok(16));
        assert!(queue.is_empty());
    }
}
