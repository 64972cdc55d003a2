use super::{LinkedList, Singly, out_of_range};
use crate::{ListError, MemoryPolicy};

impl<T, M> LinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Appends the `value` to the end of the list in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn append(&mut self, value: T) {
        let node = self.col.push(value);
        match self.col.ends().tail() {
            Some(tail) => {
                self.col.node_mut(tail).next_mut().set_some(node);
                self.col.ends_mut().set_tail(Some(node));
            }
            None => self.col.ends_mut().set_sole(node),
        }
    }

    /// Prepends the `value` to the front of the list in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.prepend(1);
    /// list.prepend(2);
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn prepend(&mut self, value: T) {
        let node = self.col.push(value);
        match self.col.ends().head() {
            Some(head) => {
                self.col.node_mut(node).next_mut().set_some(head);
                self.col.ends_mut().set_head(Some(node));
            }
            None => self.col.ends_mut().set_sole(node),
        }
    }

    /// Inserts the `value` so that it becomes the element at position `index`.
    ///
    /// `index == 0` is identical to [`prepend`] and `index == len()` is identical
    /// to [`append`]; anything in between is spliced after the element at `index - 1`.
    ///
    /// [`prepend`]: LinkedList::prepend
    /// [`append`]: LinkedList::append
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len()`; the list is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::new();
    /// list.append('a');
    /// list.append('c');
    ///
    /// assert_eq!(list.insert_at('b', 1), Ok(()));
    /// assert_eq!(list.render(), "(head) => (a) => (b) => (c) => (null)");
    ///
    /// assert_eq!(
    ///     list.insert_at('x', 4),
    ///     Err(ListError::IndexOutOfRange { index: 4, len: 3 })
    /// );
    /// ```
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        let len = self.len();
        match index {
            i if i > len => Err(out_of_range("insert_at", index, len)),
            0 => {
                self.prepend(value);
                Ok(())
            }
            i if i == len => {
                self.append(value);
                Ok(())
            }
            _ => {
                let prev = self
                    .ptr_at(index - 1)
                    .ok_or(ListError::IndexOutOfRange { index, len })?;
                let next = self.col.node(prev).next().get();

                let node = self.col.push(value);
                self.col.node_mut(node).next_mut().set(next);
                self.col.node_mut(prev).next_mut().set_some(node);
                Ok(())
            }
        }
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// Elements after `index` shift down by one position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`; the list is not modified.
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
    /// assert_eq!(list.remove_at(1), Ok("cat"));
    /// assert_eq!(list.remove_at(1), Err(ListError::IndexOutOfRange { index: 1, len: 1 }));
    /// assert_eq!(list.remove_at(0), Ok("dog"));
    /// assert!(list.is_empty());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len();
        if index >= len {
            return Err(out_of_range("remove_at", index, len));
        }

        let removed = match index.checked_sub(1) {
            None => {
                let head = self
                    .col
                    .ends()
                    .head()
                    .ok_or(ListError::IndexOutOfRange { index, len })?;
                let next = self.col.node(head).next().get();
                let ends = self.col.ends_mut();
                ends.set_head(next);
                if next.is_none() {
                    ends.set_tail(None);
                }
                head
            }
            Some(prev_index) => {
                let prev = self
                    .ptr_at(prev_index)
                    .ok_or(ListError::IndexOutOfRange { index, len })?;
                let removed = self
                    .col
                    .node(prev)
                    .next()
                    .get()
                    .ok_or(ListError::IndexOutOfRange { index, len })?;
                let next = self.col.node(removed).next().get();

                self.col.node_mut(prev).next_mut().set(next);
                if self.col.ends().tail() == Some(removed) {
                    self.col.ends_mut().set_tail(Some(prev));
                }
                removed
            }
        };

        Ok(self.col.close_and_reclaim(removed))
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::new();
    /// list.append(42);
    ///
    /// assert_eq!(list.pop(), Ok(42));
    /// assert_eq!(list.pop(), Err(ListError::EmptyList));
    /// assert_eq!(list.render(), "(head) => (null)");
    /// ```
    pub fn pop(&mut self) -> Result<T, ListError> {
        match self.len().checked_sub(1) {
            Some(last) => self.remove_at(last),
            None => {
                tracing::debug!(operation = "pop", "list is empty");
                Err(ListError::EmptyList)
            }
        }
    }
}
