use super::{LinkedList, Singly, out_of_range};
use crate::{ListError, MemoryPolicy, NodePtr};

impl<T, M> LinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Returns a reference to the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::new();
    /// list.append("dog");
    /// list.append("cat");
    ///
    /// assert_eq!(list.at(1), Ok(&"cat"));
    /// assert_eq!(list.at(2), Err(ListError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ListError> {
        let len = self.len();
        if index >= len {
            return Err(out_of_range("at", index, len));
        }

        self.ptr_at(index)
            .and_then(|ptr| self.col.node(ptr).data())
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len();
        if index >= len {
            return Err(out_of_range("at_mut", index, len));
        }

        let ptr = self
            .ptr_at(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        self.col
            .node_mut(ptr)
            .data_mut()
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Returns true if some element of the list is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Returns the position of the first element equal to `value`;
    /// None if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.append("dog");
    /// list.append("cat");
    /// list.append("dog");
    ///
    /// assert_eq!(list.find(&"dog"), Some(0));
    /// assert_eq!(list.find(&"cat"), Some(1));
    /// assert_eq!(list.find(&"snake"), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Pointer to the node at position `index`; None if `index >= len()`.
    pub(super) fn ptr_at(&self, index: usize) -> Option<NodePtr<Singly<T>>> {
        match index + 1 == self.len() {
            true => self.col.ends().tail(),
            false => self
                .col
                .ends()
                .head()
                .and_then(|head| self.walk(head, index)),
        }
    }

    /// Pointer to the node `offset` links after `start`; None if the chain ends earlier.
    fn walk(&self, start: NodePtr<Singly<T>>, offset: usize) -> Option<NodePtr<Singly<T>>> {
        let mut current = start;
        for _ in 0..offset {
            current = self.col.node(current).next().get()?;
        }
        Some(current)
    }
}
