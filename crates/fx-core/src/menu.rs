//! Drag-to-unlock floating navigation.

use crate::constants::KEY_IMAGE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem { title: "Portal", icon: "portal", href: "#" },
    MenuItem { title: "Labyrinth", icon: "labyrinth", href: "#" },
    MenuItem { title: "Dreamscapes", icon: "dream", href: "#" },
    MenuItem { title: "Whispers", icon: "whisper", href: "#" },
    MenuItem { title: "Exit", icon: "exit", href: "#" },
];

impl MenuItem {
    pub fn icon_src(&self, base_path: &str) -> String {
        format!("{base_path}images/{}.png", self.icon)
    }

    pub fn icon_alt(&self) -> String {
        format!("{} icon", self.icon)
    }
}

pub fn key_src(base_path: &str) -> String {
    format!("{base_path}{KEY_IMAGE}")
}

/// The lock only ever opens once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnlockState {
    #[default]
    Locked,
    Unlocked,
}

impl UnlockState {
    /// Returns true if this call performed the unlock.
    pub fn unlock(&mut self) -> bool {
        match self {
            UnlockState::Locked => {
                *self = UnlockState::Unlocked;
                true
            }
            UnlockState::Unlocked => false,
        }
    }

    pub fn is_unlocked(self) -> bool {
        self == UnlockState::Unlocked
    }
}
