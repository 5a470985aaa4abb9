//! The "current tree" a front end works with.
//!
//! A [`Session`] owns its catalogue tree by value. Loading a new dataset swaps the whole tree
//! out and hands the old one back, so nothing outside the session ever holds onto a tree that
//! has been replaced.

use tracing::debug;

use crate::input::{InputError, SAMPLE_CATALOG};
use crate::traversal::Order;
use crate::tree::Tree;

/// A catalogue of books keyed by numeric id.
pub type Catalog = Tree<i64, String>;

/// Owns the tree a front end is currently showing.
#[derive(Debug, Default)]
pub struct Session {
    tree: Catalog,
}

impl Session {
    /// A session with an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session preloaded with [`SAMPLE_CATALOG`].
    pub fn with_sample_catalog() -> Self {
        let tree = SAMPLE_CATALOG
            .iter()
            .map(|(id, title)| (*id, title.to_string()))
            .collect();
        Self { tree }
    }

    /// The current tree.
    pub fn tree(&self) -> &Catalog {
        &self.tree
    }

    /// Adds a book, returning whether it was new. A book whose id is already catalogued is
    /// ignored and keeps its original title.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.add_book(7, "Rayuela"), Ok(true));
    /// assert_eq!(session.add_book(7, "Ficciones"), Ok(false));
    /// assert!(session.add_book(8, "   ").is_err());
    /// ```
    pub fn add_book(&mut self, id: i64, title: &str) -> Result<bool, InputError> {
        if title.trim().is_empty() {
            return Err(InputError::BlankTitle);
        }
        let added = self.tree.insert(id, title.to_string());
        if !added {
            debug!(id, "book id already catalogued");
        }
        Ok(added)
    }

    /// Replaces the current tree with `tree` and gives back the one it replaced.
    pub fn load(&mut self, tree: Catalog) -> Catalog {
        debug!(old = self.tree.len(), new = tree.len(), "replacing session tree");
        std::mem::replace(&mut self.tree, tree)
    }

    /// Replaces the current tree with one built from bare keys, in order. The old tree is
    /// dropped.
    pub fn load_keys<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = i64>,
    {
        let mut tree = Catalog::new();
        tree.bulk_load(keys);
        self.load(tree);
    }

    /// Whether a book with this id is catalogued.
    pub fn search(&self, id: i64) -> bool {
        self.tree.search(&id)
    }

    /// One display line per node, in the given order: `ID: 100, Title: "El Principito"`, or
    /// just the id for nodes without a title.
    pub fn render(&self, order: Order) -> Vec<String> {
        self.tree
            .traverse(order)
            .into_iter()
            .map(|(id, title)| {
                if title.is_empty() {
                    id.to_string()
                } else {
                    format!("ID: {}, Title: \"{}\"", id, title)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_orders() {
        let session = Session::with_sample_catalog();

        assert_eq!(session.tree().len(), 7);
        assert_eq!(
            session.tree().keys(Order::Inorder),
            [25, 50, 75, 100, 125, 150, 175]
        );
        assert_eq!(
            session.tree().keys(Order::Preorder),
            [100, 50, 25, 75, 150, 125, 175]
        );
        assert_eq!(
            session.tree().keys(Order::Postorder),
            [25, 75, 50, 125, 175, 150, 100]
        );
        assert_eq!(
            session.tree().keys(Order::BreadthFirst),
            [100, 50, 150, 25, 75, 125, 175]
        );
    }

    #[test]
    fn render_formats_titles() {
        let session = Session::with_sample_catalog();
        let lines = session.render(Order::Inorder);

        assert_eq!(lines[0], "ID: 25, Title: \"Crónica de una Muerte Anunciada\"");
        assert_eq!(lines[6], "ID: 175, Title: \"Rayuela\"");
    }

    #[test]
    fn render_bare_keys() {
        let mut session = Session::new();
        session.load_keys([2, 1, 3]);

        assert_eq!(session.render(Order::Preorder), ["2", "1", "3"]);
    }

    #[test]
    fn empty_session() {
        let session = Session::new();

        for order in Order::ALL {
            assert!(session.render(order).is_empty());
        }
        assert!(!session.search(100));
    }

    #[test]
    fn load_hands_back_previous_tree() {
        let mut session = Session::with_sample_catalog();

        let mut replacement = Catalog::new();
        replacement.insert(1, "Uno".to_string());
        let previous = session.load(replacement);

        assert_eq!(previous.len(), 7);
        assert!(previous.search(&100));
        assert!(!session.search(100));
        assert!(session.search(1));
    }

    #[test]
    fn add_book_rejects_blank_titles() {
        let mut session = Session::new();

        assert_eq!(session.add_book(1, ""), Err(InputError::BlankTitle));
        assert_eq!(session.add_book(1, " \t"), Err(InputError::BlankTitle));
        assert!(session.tree().is_empty());
    }

    #[test]
    fn add_book_ignores_known_ids() {
        let mut session = Session::with_sample_catalog();

        assert_eq!(session.add_book(100, "Otro libro"), Ok(false));
        assert_eq!(
            session.tree().find(&100).map(String::as_str),
            Some("El Principito")
        );
        assert_eq!(session.add_book(60, "Pedro Páramo"), Ok(true));
        assert_eq!(session.tree().len(), 8);
    }
}
