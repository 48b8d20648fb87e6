use crate::traversal::Traversable;
use super::{Forest, NodeId};

impl<P> Traversable for Forest<P> {
    type Cursor = NodeId;

    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.raw(*cursor).parent
    }
    #[track_caller]
    fn first_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.raw(*cursor).first_child
    }
    #[track_caller]
    fn last_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.raw(*cursor).last_child
    }
    #[track_caller]
    fn next_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.raw(*cursor).next_sibling
    }
    #[track_caller]
    fn prev_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.raw(*cursor).prev_sibling
    }
}
