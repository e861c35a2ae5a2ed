use crate::{SyntaxKind, TextRange};

/// The capability set the indexer needs from a syntax tree.
///
/// Implementations hand out owned child lists, so a consumer can never observe a
/// dangling or out-of-range child: every tree reachable through this trait is
/// structurally valid by construction.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> SyntaxKind;

    /// Character range of the node in the source it was parsed from.
    fn range(&self) -> TextRange;

    /// The source text covered by the node.
    fn text(&self) -> &str;

    /// All children, named and anonymous, in source order.
    fn children(&self) -> Vec<Self>;

    /// Depth-first, left-to-right search for the first node satisfying `predicate`,
    /// starting with `self`. The search stops at the first hit.
    fn find_first(&self, predicate: &impl Fn(&Self) -> bool) -> Option<Self>
    where
        Self: Clone,
    {
        if predicate(self) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_first(predicate))
    }

    /// Collects every node of `self`'s subtree (including `self`) satisfying `predicate`,
    /// in document order. Subtrees rejected by `descend` are not entered.
    fn collect_where(
        &self,
        predicate: &impl Fn(&Self) -> bool,
        descend: &impl Fn(&Self) -> bool,
    ) -> Vec<Self>
    where
        Self: Clone,
    {
        let mut found = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            if predicate(&node) {
                found.push(node.clone());
            }
            if descend(&node) {
                // Reversed so the leftmost child is popped first.
                stack.extend(node.children().into_iter().rev());
            }
        }
        found
    }
}
