use crate::{TreeError, TreeResult};

/// LIFO stack backed by a `Vec`
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    data: Vec<T>,
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, element: T) {
        self.data.push(element)
    }

    /// Return the top element without removing it
    pub fn top(&self) -> TreeResult<&T> {
        self.data.last().ok_or(TreeError::EmptyContainer)
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> TreeResult<T> {
        self.data.pop().ok_or(TreeError::EmptyContainer)
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayStack;
    use crate::TreeError;

    #[test]
    fn lifo_order() {
        let mut stack = ArrayStack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Ok(&'c'));
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(TreeError::EmptyContainer));
        assert_eq!(stack.top(), Err(TreeError::EmptyContainer));
    }
}
