//! src/ui/node.rs
//!
//! Layout tree: splits pair each child with its constraint, leaves draw a panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

pub enum Node {
    Split {
        direction: Direction,
        parts: Vec<(Constraint, Node)>,
    },
    Leaf(Box<dyn Panel>),
}

impl Node {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split { direction, parts } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(parts.iter().map(|(c, _)| *c))
                    .split(area);
                for ((_, child), chunk) in parts.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

pub fn rows(parts: Vec<(Constraint, Node)>) -> Node {
    Node::Split {
        direction: Direction::Vertical,
        parts,
    }
}

pub fn columns(parts: Vec<(Constraint, Node)>) -> Node {
    Node::Split {
        direction: Direction::Horizontal,
        parts,
    }
}

pub fn leaf(panel: impl Panel + 'static) -> Node {
    Node::Leaf(Box::new(panel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records the area it was asked to draw into.
    struct Probe(Rc<RefCell<Vec<Rect>>>);

    impl Panel for Probe {
        fn draw(&self, _f: &mut Frame<'_>, area: Rect) {
            self.0.borrow_mut().push(area);
        }
    }

    #[test]
    fn splits_area_by_constraints() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let root = rows(vec![
            (Constraint::Length(3), leaf(Probe(seen.clone()))),
            (
                Constraint::Min(0),
                columns(vec![
                    (Constraint::Percentage(50), leaf(Probe(seen.clone()))),
                    (Constraint::Percentage(50), leaf(Probe(seen.clone()))),
                ]),
            ),
        ]);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| root.draw(f, f.area())).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen[0], Rect::new(0, 0, 40, 3));
        assert_eq!(seen[1], Rect::new(0, 3, 20, 7));
        assert_eq!(seen[2], Rect::new(20, 3, 20, 7));
    }
}
