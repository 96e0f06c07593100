use std::fmt::Display;
use std::io;
use termenu::{Item, Menu};

pub struct FzfInvoker<T> {
    msg: String,
    items: Vec<T>,
}

impl<T> FzfInvoker<T>
where
    T: Display + Clone,
{
    pub fn new(msg: String, items: Vec<T>) -> Self {
        Self { msg, items }
    }

    /// Show an fzf-like menu and return the selected item (cloned).
    ///
    /// `Ok(None)` means the user cancelled the menu.
    pub fn invoke(&self) -> io::Result<Option<T>> {
        let mut menu = Menu::new()?;

        let mut list: Vec<Item<usize>> = Vec::with_capacity(self.items.len());
        for (idx, item) in self.items.iter().enumerate() {
            list.push(Item::new(&item.to_string(), idx));
        }

        let selected = menu.set_title(self.msg.as_str()).add_list(list).select()?;

        Ok(selected.and_then(|idx| self.items.get(*idx).cloned()))
    }
}
