//! Selection-list menu model.

use crate::{
    input::{Button, InputFrame},
    scene::MenuView,
};


/// A vertical list menu with one highlighted item.
#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub selection: usize,
}

/// What one frame of input did to a menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuResult {
    /// Nothing chosen yet.
    None,
    /// The item at this index was confirmed.
    Chosen(usize),
    /// The menu was backed out of.
    Cancel,
}

impl Menu {
    pub fn new(title: &'static str, items: &'static [&'static str]) -> Self {
        assert!(!items.is_empty());
        Menu { title, items, selection: 0 }
    }

    /// Apply one frame of navigation input, wrapping the highlight at both
    /// ends.
    pub fn process_input(&mut self, input: &InputFrame) -> MenuResult {
        if input.pressed(Button::MenuConfirm) {
            return MenuResult::Chosen(self.selection);
        }
        if input.pressed(Button::MenuCancel) {
            return MenuResult::Cancel;
        }
        if input.pressed(Button::MenuUp) {
            self.selection = self.selection
                .checked_sub(1)
                .unwrap_or(self.items.len() - 1);
        } else if input.pressed(Button::MenuDown) {
            self.selection = (self.selection + 1) % self.items.len();
        }
        MenuResult::None
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            title: self.title,
            items: self.items,
            selection: self.selection,
        }
    }
}


#[test]
fn test_navigation_wraps() {
    let mut menu = Menu::new("test", &["a", "b", "c"]);
    let up = InputFrame::default().with(Button::MenuUp);
    let down = InputFrame::default().with(Button::MenuDown);

    assert_eq!(menu.process_input(&up), MenuResult::None);
    assert_eq!(menu.selection, 2);
    assert_eq!(menu.process_input(&down), MenuResult::None);
    assert_eq!(menu.process_input(&down), MenuResult::None);
    assert_eq!(menu.selection, 1);
}

#[test]
fn test_confirm_and_cancel() {
    let mut menu = Menu::new("test", &["a", "b"]);
    let down = InputFrame::default().with(Button::MenuDown);
    menu.process_input(&down);
    assert_eq!(
        menu.process_input(&InputFrame::default().with(Button::MenuConfirm)),
        MenuResult::Chosen(1),
    );
    assert_eq!(
        menu.process_input(&InputFrame::default().with(Button::MenuCancel)),
        MenuResult::Cancel,
    );
}
