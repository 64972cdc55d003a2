use super::{LinkedList, Singly};
use crate::MemoryPolicy;
use alloc::string::{String, ToString};
use core::fmt::{Debug, Display};

impl<T, M> LinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Renders the list as `(head) => (v0) => (v1) => ... => (null)`.
    ///
    /// An empty list renders as `(head) => (null)`.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }
}

impl<T, M> Display for LinkedList<T, M>
where
    T: Display,
    M: MemoryPolicy<Singly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("(head) => ")?;
        for value in self.iter() {
            write!(f, "({value}) => ")?;
        }
        f.write_str("(null)")
    }
}

impl<T, M> Debug for LinkedList<T, M>
where
    T: Debug,
    M: MemoryPolicy<Singly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
