mod ends;
mod node_ptr;
mod refs;
mod single;

pub use ends::RefsEnds;
pub use node_ptr::NodePtr;
pub use refs::Refs;
pub use single::RefsSingle;
