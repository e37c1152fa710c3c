//! Key identifier table
//!
//! Profiles name keys with short lowercase identifiers (`"up"`, `"w"`,
//! `"space"`). This table resolves them to Linux input key codes.

use evdev::Key;

/// Canonical key identifiers and their input codes
const KEY_NAMES: &[(&str, Key)] = &[
    ("a", Key::KEY_A),
    ("b", Key::KEY_B),
    ("c", Key::KEY_C),
    ("d", Key::KEY_D),
    ("e", Key::KEY_E),
    ("f", Key::KEY_F),
    ("g", Key::KEY_G),
    ("h", Key::KEY_H),
    ("i", Key::KEY_I),
    ("j", Key::KEY_J),
    ("k", Key::KEY_K),
    ("l", Key::KEY_L),
    ("m", Key::KEY_M),
    ("n", Key::KEY_N),
    ("o", Key::KEY_O),
    ("p", Key::KEY_P),
    ("q", Key::KEY_Q),
    ("r", Key::KEY_R),
    ("s", Key::KEY_S),
    ("t", Key::KEY_T),
    ("u", Key::KEY_U),
    ("v", Key::KEY_V),
    ("w", Key::KEY_W),
    ("x", Key::KEY_X),
    ("y", Key::KEY_Y),
    ("z", Key::KEY_Z),
    ("1", Key::KEY_1),
    ("2", Key::KEY_2),
    ("3", Key::KEY_3),
    ("4", Key::KEY_4),
    ("5", Key::KEY_5),
    ("6", Key::KEY_6),
    ("7", Key::KEY_7),
    ("8", Key::KEY_8),
    ("9", Key::KEY_9),
    ("0", Key::KEY_0),
    ("up", Key::KEY_UP),
    ("down", Key::KEY_DOWN),
    ("left", Key::KEY_LEFT),
    ("right", Key::KEY_RIGHT),
    ("space", Key::KEY_SPACE),
    ("enter", Key::KEY_ENTER),
    ("tab", Key::KEY_TAB),
    ("esc", Key::KEY_ESC),
    ("backspace", Key::KEY_BACKSPACE),
    ("shift", Key::KEY_LEFTSHIFT),
    ("ctrl", Key::KEY_LEFTCTRL),
    ("alt", Key::KEY_LEFTALT),
    ("pageup", Key::KEY_PAGEUP),
    ("pagedown", Key::KEY_PAGEDOWN),
    ("home", Key::KEY_HOME),
    ("end", Key::KEY_END),
    ("insert", Key::KEY_INSERT),
    ("delete", Key::KEY_DELETE),
    ("f1", Key::KEY_F1),
    ("f2", Key::KEY_F2),
    ("f3", Key::KEY_F3),
    ("f4", Key::KEY_F4),
    ("f5", Key::KEY_F5),
    ("f6", Key::KEY_F6),
    ("f7", Key::KEY_F7),
    ("f8", Key::KEY_F8),
    ("f9", Key::KEY_F9),
    ("f10", Key::KEY_F10),
    ("f11", Key::KEY_F11),
    ("f12", Key::KEY_F12),
];

/// Accepted spellings for some canonical names
const ALIASES: &[(&str, &str)] = &[
    ("arrowup", "up"),
    ("arrowdown", "down"),
    ("arrowleft", "left"),
    ("arrowright", "right"),
    ("return", "enter"),
    ("escape", "esc"),
    ("control", "ctrl"),
    ("pgup", "pageup"),
    ("pgdn", "pagedown"),
    ("del", "delete"),
];

/// Resolve a key identifier (case-insensitive) to its input code
pub fn lookup(name: &str) -> Option<Key> {
    let name = name.trim();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, target)| *target)
        .unwrap_or(name);

    KEY_NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(canonical))
        .map(|(_, key)| *key)
}

/// Whether `name` is a recognized key identifier
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

/// Every input code the table can produce
pub fn all_keys() -> impl Iterator<Item = Key> {
    KEY_NAMES.iter().map(|(_, key)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_builtin_profile_keys() {
        assert_eq!(lookup("up"), Some(Key::KEY_UP));
        assert_eq!(lookup("down"), Some(Key::KEY_DOWN));
        assert_eq!(lookup("w"), Some(Key::KEY_W));
        assert_eq!(lookup("d"), Some(Key::KEY_D));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("SPACE"), Some(Key::KEY_SPACE));
        assert_eq!(lookup(" A "), Some(Key::KEY_A));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(lookup("Escape"), Some(Key::KEY_ESC));
        assert_eq!(lookup("ArrowLeft"), Some(Key::KEY_LEFT));
        assert_eq!(lookup("return"), Some(Key::KEY_ENTER));
    }

    #[test]
    fn test_unknown() {
        assert!(!is_known(""));
        assert!(!is_known("jump"));
        assert!(!is_known("f13"));
    }

    #[test]
    fn test_names_are_unique_and_resolve() {
        let names: Vec<_> = KEY_NAMES.iter().map(|(name, _)| *name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate key name {name}");
            assert!(is_known(name));
        }
        assert_eq!(all_keys().count(), names.len());
    }
}
