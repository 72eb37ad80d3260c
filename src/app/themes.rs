//! src/app/themes.rs
//!
//! Palettes statiques (10 thèmes). Données pures : aucune logique d’affichage ici,
//! la vue choisit la couleur d’une touche via `Theme::couleur(role)`.

use eframe::egui::Color32;

/// Rôle visuel d’une touche : détermine sa couleur de fond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Secondaire,
    Accent,
    Fermer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub nom: &'static str,
    pub primaire: Color32,
    pub secondaire: Color32,
    pub accent: Color32,
    pub texte: Color32,
    pub fermer: Color32,
}

impl Theme {
    pub fn couleur(&self, role: Role) -> Color32 {
        match role {
            Role::Secondaire => self.secondaire,
            Role::Accent => self.accent,
            Role::Fermer => self.fermer,
        }
    }
}

/// Couleur des messages d’erreur, quel que soit le thème.
pub const COULEUR_ERREUR: Color32 = Color32::from_rgb(0xFF, 0x55, 0x55);

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub const THEMES: [Theme; 10] = [
    Theme {
        nom: "Night",
        primaire: hex(0x1A1A2E),
        secondaire: hex(0x16213E),
        accent: hex(0xE94560),
        texte: hex(0xFFFFFF),
        fermer: hex(0xE94560),
    },
    Theme {
        nom: "Ocean",
        primaire: hex(0x0A3D62),
        secondaire: hex(0x1E88E5),
        accent: hex(0xFFD166),
        texte: hex(0xE6F1FA),
        fermer: hex(0xEF5350),
    },
    Theme {
        nom: "Sunset",
        primaire: hex(0xFF6F61),
        secondaire: hex(0xFFB88C),
        accent: hex(0x2D3047),
        texte: hex(0x2D3047),
        fermer: hex(0x2D3047),
    },
    Theme {
        nom: "Forest",
        primaire: hex(0x2E8B57),
        secondaire: hex(0x3CB371),
        accent: hex(0xA9DFBF),
        texte: hex(0xF0FFF0),
        fermer: hex(0xC0392B),
    },
    Theme {
        nom: "Lavender",
        primaire: hex(0x6C3483),
        secondaire: hex(0xBB8FCE),
        accent: hex(0xF9E79F),
        texte: hex(0xFDEBD0),
        fermer: hex(0x922B21),
    },
    Theme {
        nom: "Sky",
        primaire: hex(0x3498DB),
        secondaire: hex(0x85C1E9),
        accent: hex(0xF7DC6F),
        texte: hex(0xEBF5FB),
        fermer: hex(0xE74C3C),
    },
    Theme {
        nom: "Sandstorm",
        primaire: hex(0xC19A6B),
        secondaire: hex(0xF4D03F),
        accent: hex(0x6E2C00),
        texte: hex(0xFDF2E9),
        fermer: hex(0x922B21),
    },
    Theme {
        nom: "Watermelon",
        primaire: hex(0xFF3B3F),
        secondaire: hex(0x75B79E),
        accent: hex(0xA8D8EA),
        texte: hex(0xFFF0F5),
        fermer: hex(0x8B0000),
    },
    Theme {
        nom: "Night Sky",
        primaire: hex(0x0D1B2A),
        secondaire: hex(0x1B263B),
        accent: hex(0xE0E1DD),
        texte: hex(0xF5F5F5),
        fermer: hex(0xFF6B6B),
    },
    Theme {
        nom: "Pastel Dream",
        primaire: hex(0xFADCD9),
        secondaire: hex(0xD6EADF),
        accent: hex(0xFFB7B2),
        texte: hex(0x5C5470),
        fermer: hex(0xEF476F),
    },
];

/// Index d’un thème par nom (insensible à la casse).
pub fn index_par_nom(nom: &str) -> Option<usize> {
    THEMES
        .iter()
        .position(|t| t.nom.eq_ignore_ascii_case(nom.trim()))
}

/// Thème suivant (boucle après le dernier).
pub fn suivant(index: usize) -> usize {
    (index + 1) % THEMES.len()
}
