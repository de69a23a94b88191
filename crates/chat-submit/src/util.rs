#[allow(unused)]
use crate::key::{Key, KeyInput, Modifiers};

#[allow(unused_macros)]
macro_rules! enter {
    () => {
        KeyInput::new(Key::Enter, Modifiers::empty())
    };
    ($mods: expr) => {
        KeyInput::new(Key::Enter, $mods)
    };
}

#[allow(unused_macros)]
macro_rules! key {
    ($ch: literal) => {
        KeyInput::new(Key::Char($ch), Modifiers::empty())
    };
    ($key: expr) => {
        KeyInput::new($key, Modifiers::empty())
    };
    ($key: expr, $mods: expr) => {
        KeyInput::new($key, $mods)
    };
}

#[derive(Debug)]
pub(crate) struct IdGenerator {
    next_id: Option<u64>,
}

impl IdGenerator {
    /// Returns `None` once every ID has been handed out.
    pub fn next(&mut self) -> Option<u64> {
        let id = self.next_id?;

        self.next_id = id.checked_add(1);

        return Some(id);
    }

    #[cfg(test)]
    pub fn exhaust(&mut self) {
        self.next_id = None;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next_id: Some(0) }
    }
}
