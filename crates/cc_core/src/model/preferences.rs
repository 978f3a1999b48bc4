use serde::{Deserialize, Serialize};

/// Number of preference attributes in scope for a given save version.
///
/// The preferences segment is a same-order bitstring truncated to this count.
pub fn preference_count(version: f64) -> usize {
    if version <= 2.031 {
        21
    } else if version <= 2.040 {
        25
    } else {
        26
    }
}

/// The ordered set of named option booleans. Field order here is the wire
/// order of the preferences bitstring; do not reorder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub particles: bool,
    pub numbers: bool,
    pub autosave: bool,
    pub autoupdate: bool,
    pub milk: bool,
    pub fancy: bool,
    pub warn: bool,
    pub cursors: bool,
    pub focus: bool,
    pub format: bool,
    pub notifs: bool,
    pub wobbly: bool,
    pub monospace: bool,
    pub filters: bool,
    pub cookiesound: bool,
    pub crates: bool,
    #[serde(rename = "showBackupWarning")]
    pub show_backup_warning: bool,
    #[serde(rename = "extraButtons")]
    pub extra_buttons: bool,
    #[serde(rename = "askLumps")]
    pub ask_lumps: bool,
    #[serde(rename = "customGrandmas")]
    pub custom_grandmas: bool,
    pub timeout: bool,
    // Added in 2.04
    #[serde(rename = "cloudSave")]
    pub cloud_save: bool,
    #[serde(rename = "bgMusic")]
    pub bg_music: bool,
    #[serde(rename = "notScary")]
    pub not_scary: bool,
    pub fullscreen: bool,
    // Added in 2.042
    pub screenreader: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            particles: true,
            numbers: true,
            autosave: true,
            autoupdate: true,
            milk: true,
            fancy: true,
            warn: false,
            cursors: true,
            focus: true,
            format: false,
            notifs: false,
            wobbly: true,
            monospace: false,
            filters: true,
            cookiesound: true,
            crates: false,
            show_backup_warning: true,
            extra_buttons: true,
            ask_lumps: false,
            custom_grandmas: true,
            timeout: false,
            cloud_save: true,
            bg_music: true,
            not_scary: false,
            fullscreen: false,
            screenreader: false,
        }
    }
}

impl Preferences {
    /// All attributes in wire order, longest layout.
    pub fn bits(&self) -> [bool; 26] {
        [
            self.particles,
            self.numbers,
            self.autosave,
            self.autoupdate,
            self.milk,
            self.fancy,
            self.warn,
            self.cursors,
            self.focus,
            self.format,
            self.notifs,
            self.wobbly,
            self.monospace,
            self.filters,
            self.cookiesound,
            self.crates,
            self.show_backup_warning,
            self.extra_buttons,
            self.ask_lumps,
            self.custom_grandmas,
            self.timeout,
            self.cloud_save,
            self.bg_music,
            self.not_scary,
            self.fullscreen,
            self.screenreader,
        ]
    }

    /// Overwrites the attribute at wire position `index`.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        match index {
            0 => self.particles = value,
            1 => self.numbers = value,
            2 => self.autosave = value,
            3 => self.autoupdate = value,
            4 => self.milk = value,
            5 => self.fancy = value,
            6 => self.warn = value,
            7 => self.cursors = value,
            8 => self.focus = value,
            9 => self.format = value,
            10 => self.notifs = value,
            11 => self.wobbly = value,
            12 => self.monospace = value,
            13 => self.filters = value,
            14 => self.cookiesound = value,
            15 => self.crates = value,
            16 => self.show_backup_warning = value,
            17 => self.extra_buttons = value,
            18 => self.ask_lumps = value,
            19 => self.custom_grandmas = value,
            20 => self.timeout = value,
            21 => self.cloud_save = value,
            22 => self.bg_music = value,
            23 => self.not_scary = value,
            24 => self.fullscreen = value,
            25 => self.screenreader = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_version_gates() {
        assert_eq!(preference_count(2.022), 21);
        assert_eq!(preference_count(2.031), 21);
        assert_eq!(preference_count(2.04), 25);
        assert_eq!(preference_count(2.042), 26);
        assert_eq!(preference_count(2.052), 26);
    }

    #[test]
    fn bits_and_set_bit_agree() {
        let mut prefs = Preferences::default();
        for i in 0..26 {
            prefs.set_bit(i, i % 2 == 0);
        }
        let bits = prefs.bits();
        for (i, bit) in bits.iter().enumerate() {
            assert_eq!(*bit, i % 2 == 0, "bit {}", i);
        }
    }
}
