//! Registered daily combos
//!
//! One combo per supported crypto game. The callback payload of every combo
//! button is the combo's label, so delivery is a single table lookup instead
//! of one handler per game.

/// A themed daily image bundle delivered in response to a callback selection.
#[derive(Debug, PartialEq, Eq)]
pub struct Combo {
    /// Opaque callback payload carried by the inline button.
    pub label: &'static str,
    /// Button text shown in the combo keyboard.
    pub button_text: &'static str,
    /// Path to today's combo image for this game.
    pub image_path: &'static str,
}

/// All registered combos, in keyboard order.
pub static COMBOS: &[Combo] = &[
    Combo {
        label: "Hamster",
        button_text: "Hamster Combat",
        image_path: "dailycombos/hamster/hamster.jpg",
    },
    Combo {
        label: "PixelVerse",
        button_text: "PixelVerse",
        image_path: "dailycombos/pixelverse/pixelverse.jpg",
    },
    Combo {
        label: "Gemz",
        button_text: "Gemz",
        image_path: "dailycombos/gemz/gemz.jpg",
    },
    Combo {
        label: "Swopin",
        button_text: "Swopin",
        image_path: "dailycombos/swopin/swopin.jpg",
    },
    Combo {
        label: "Chaindrops",
        button_text: "Chaindrops",
        image_path: "dailycombos/chaindrops/chaindrops.jpg",
    },
];

/// Looks up a combo by its callback label. Matching is exact and case-sensitive.
pub fn find(label: &str) -> Option<&'static Combo> {
    COMBOS.iter().find(|combo| combo.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_registered_combos() {
        for combo in COMBOS {
            assert_eq!(find(combo.label), Some(combo));
        }
    }

    #[test]
    fn unknown_label_finds_nothing() {
        assert_eq!(find("Unknown"), None);
        assert_eq!(find("hamster"), None); // case-sensitive
        assert_eq!(find(""), None);
    }

    #[test]
    fn labels_are_unique() {
        for (i, combo) in COMBOS.iter().enumerate() {
            assert!(!COMBOS[i + 1..].iter().any(|other| other.label == combo.label));
        }
    }
}
