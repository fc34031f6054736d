// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Canonical input events. Terminal backends (`crossterm`) are converted into these so
//! that the line editor never matches on backend specific types.

use crate::{Size, height, width};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Backspace,
    Delete,
    Down,
    End,
    Enter,
    Esc,
    Home,
    Left,
    Right,
    Tab,
    BackTab,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    #[must_use]
    pub fn is_ctrl_only(&self) -> bool { *self == Self::new().with_ctrl() }

    #[must_use]
    pub fn is_shift_only(&self) -> bool { *self == Self::new().with_shift() }
}

impl From<KeyModifiers> for ModifierKeysMask {
    fn from(modifiers: KeyModifiers) -> Self {
        let state = |flag: KeyModifiers| {
            if modifiers.contains(flag) {
                KeyState::Pressed
            } else {
                KeyState::NotPressed
            }
        };
        Self {
            shift_key_state: state(KeyModifiers::SHIFT),
            ctrl_key_state: state(KeyModifiers::CONTROL),
            alt_key_state: state(KeyModifiers::ALT),
        }
    }
}

impl InputEvent {
    /// Convert a `crossterm` event into an [`InputEvent`]. Returns [None] for events the
    /// line editor doesn't handle: key release and repeat, mouse, focus and paste.
    #[must_use]
    pub fn from_crossterm_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let key = match code {
                    KeyCode::Char(c) => Key::Character(c),
                    KeyCode::Backspace => Key::SpecialKey(SpecialKey::Backspace),
                    KeyCode::Delete => Key::SpecialKey(SpecialKey::Delete),
                    KeyCode::Down => Key::SpecialKey(SpecialKey::Down),
                    KeyCode::End => Key::SpecialKey(SpecialKey::End),
                    KeyCode::Enter => Key::SpecialKey(SpecialKey::Enter),
                    KeyCode::Esc => Key::SpecialKey(SpecialKey::Esc),
                    KeyCode::Home => Key::SpecialKey(SpecialKey::Home),
                    KeyCode::Left => Key::SpecialKey(SpecialKey::Left),
                    KeyCode::Right => Key::SpecialKey(SpecialKey::Right),
                    KeyCode::Tab => Key::SpecialKey(SpecialKey::Tab),
                    KeyCode::BackTab => Key::SpecialKey(SpecialKey::BackTab),
                    KeyCode::Up => Key::SpecialKey(SpecialKey::Up),
                    _ => return None,
                };

                let mask = ModifierKeysMask::from(modifiers);
                let keypress = if mask.is_empty() {
                    KeyPress::Plain { key }
                } else {
                    KeyPress::WithModifiers { key, mask }
                };

                Some(InputEvent::Keyboard(keypress))
            }
            Event::Resize(columns, rows) => {
                Some(InputEvent::Resize(Size::new((width(columns), height(rows)))))
            }
            _ => None,
        }
    }
}
