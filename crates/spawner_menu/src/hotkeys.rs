//! Keyboard shortcuts and per-frame key state
//!
//! Shortcuts are written as `Key + Modifier + Modifier`, e.g. `Z + LeftControl`.
//! A shortcut fires on the frame its main key goes down while every
//! modifier is held.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! keys {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// Physical keys a shortcut can use
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant),*
        }

        impl Key {
            /// Canonical name as written in config files
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Key::$variant => $text),*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($text) {
                        return Some(Key::$variant);
                    }
                )*
                None
            }
        }
    };
}

keys! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
    H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
    O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
    V => "V", W => "W", X => "X", Y => "Y", Z => "Z",
    Alpha0 => "Alpha0", Alpha1 => "Alpha1", Alpha2 => "Alpha2", Alpha3 => "Alpha3",
    Alpha4 => "Alpha4", Alpha5 => "Alpha5", Alpha6 => "Alpha6", Alpha7 => "Alpha7",
    Alpha8 => "Alpha8", Alpha9 => "Alpha9",
    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
    F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
    Slash => "Slash", Backslash => "Backslash", Equals => "Equals", Minus => "Minus",
    Comma => "Comma", Period => "Period", Semicolon => "Semicolon", Quote => "Quote",
    BackQuote => "BackQuote", LeftBracket => "LeftBracket", RightBracket => "RightBracket",
    Space => "Space", Return => "Return", Escape => "Escape", Tab => "Tab",
    Backspace => "Backspace", Delete => "Delete", Insert => "Insert",
    Home => "Home", End => "End", PageUp => "PageUp", PageDown => "PageDown",
    UpArrow => "UpArrow", DownArrow => "DownArrow", LeftArrow => "LeftArrow", RightArrow => "RightArrow",
    KeypadPlus => "KeypadPlus", KeypadMinus => "KeypadMinus",
    LeftControl => "LeftControl", RightControl => "RightControl",
    LeftShift => "LeftShift", RightShift => "RightShift",
    LeftAlt => "LeftAlt", RightAlt => "RightAlt",
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s.trim()).ok_or_else(|| format!("Unknown key: {}", s.trim()))
    }
}

/// A main key plus held modifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyboardShortcut {
    pub key: Key,
    pub modifiers: Vec<Key>,
}

impl KeyboardShortcut {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Key) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Whether the shortcut fired this frame
    pub fn is_down(&self, keys: &KeyState) -> bool {
        keys.went_down(self.key) && self.modifiers.iter().all(|&m| keys.is_held(m))
    }
}

impl fmt::Display for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        for modifier in &self.modifiers {
            write!(f, " + {}", modifier)?;
        }
        Ok(())
    }
}

impl FromStr for KeyboardShortcut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('+').map(str::trim);
        let key = match parts.next() {
            Some(main) if !main.is_empty() => main.parse()?,
            _ => return Err("Empty shortcut".to_string()),
        };
        let modifiers = parts.map(str::parse::<Key>).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { key, modifiers })
    }
}

impl TryFrom<String> for KeyboardShortcut {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyboardShortcut> for String {
    fn from(shortcut: KeyboardShortcut) -> Self {
        shortcut.to_string()
    }
}

/// Keys held and keys that went down this frame
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
    went_down: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if self.held.insert(key) {
            self.went_down.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn went_down(&self, key: Key) -> bool {
        self.went_down.contains(&key)
    }

    /// Forget this frame's key-down edges
    pub fn end_frame(&mut self) {
        self.went_down.clear();
    }
}

/// Actions the host can trigger from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleMenu,
    Spawn,
    Undo,
}

/// The three spawner shortcuts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    pub toggle_menu: KeyboardShortcut,
    pub spawn: KeyboardShortcut,
    pub undo: KeyboardShortcut,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            toggle_menu: KeyboardShortcut::new(Key::Slash),
            spawn: KeyboardShortcut::new(Key::Equals),
            undo: KeyboardShortcut::new(Key::Z).with_modifier(Key::LeftControl),
        }
    }
}

impl HotkeyConfig {
    /// The action for this frame. Toggle wins over spawn, spawn over undo.
    pub fn action(&self, keys: &KeyState) -> Option<MenuAction> {
        if self.toggle_menu.is_down(keys) {
            Some(MenuAction::ToggleMenu)
        } else if self.spawn.is_down(keys) {
            Some(MenuAction::Spawn)
        } else if self.undo.is_down(keys) {
            Some(MenuAction::Undo)
        } else {
            None
        }
    }

    pub fn spawn_hint(&self) -> String {
        format!("Spawn: {}", self.spawn)
    }

    pub fn undo_hint(&self) -> String {
        format!("Undo: {}", self.undo)
    }

    pub fn toggle_hint(&self) -> String {
        format!("Toggle: {}", self.toggle_menu)
    }
}
