//! src/app/etat.rs
//!
//! État de session (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, message affiché, historique,
//! thème, particules, horloges d’animation) et offrir les actions des touches.
//!
//! Contrats :
//! - L’évaluation passe uniquement par `noyau::evaluer` (pas de parsing ici).
//! - L’historique n’est touché que par une évaluation réussie.
//! - Le temps est fourni par l’appelant (secondes) : actions déterministes, testables.

use log::{debug, info};

use super::clavier::Action;
use super::particules::Particules;
use super::themes::{self, Theme, THEMES};
use crate::config::ConfigCalc;
use crate::noyau::{evaluer, Historique, Issue};

/// Message montré par "History" quand rien n’a encore été calculé.
pub const HISTORIQUE_VIDE: &str = "History is empty!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ton {
    Normal,
    Erreur,
}

/// Ce que montre le label de résultat.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub texte: String,
    pub ton: Ton,
    /// Instant d’apparition (pilote l’animation).
    pub depuis: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie ---
    /// None = label masqué (démarrage, après C).
    pub message: Option<Message>,

    // --- session ---
    pub historique: Historique,
    pub lignes_historique: usize,
    pub theme: usize,

    // --- décor ---
    pub particules: Particules,
    /// Dernière édition de l’entrée (pulsation de police).
    pub edition_depuis: Option<f64>,
    /// Dernier appui par touche (index dans TOUCHES, instant).
    pub pression: Option<(usize, f64)>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_config(&ConfigCalc::default())
    }
}

impl AppCalc {
    pub fn depuis_config(config: &ConfigCalc) -> Self {
        let theme = config.index_theme();
        let particules = Particules::aleatoires(
            config.particules,
            config.largeur,
            config.hauteur,
            &mut rand::thread_rng(),
        );

        Self {
            entree: String::new(),
            message: None,
            historique: Historique::new(),
            lignes_historique: config.lignes_historique,
            theme,
            particules,
            edition_depuis: None,
            pression: None,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    pub fn theme_courant(&self) -> &'static Theme {
        &THEMES[self.theme % THEMES.len()]
    }

    /* ------------------------ Actions “touches” ------------------------ */

    pub fn appliquer(&mut self, action: Action, maintenant: f64) {
        match action {
            Action::Inserer(s) => self.inserer(s, maintenant),
            Action::Effacer => self.clear_entree(maintenant),
            Action::Retour => self.backspace_entree(maintenant),
            Action::Egal => self.calculer(maintenant),
            Action::Historique => self.montrer_historique(maintenant),
            Action::Themes => self.theme_suivant(maintenant),
        }
        self.focus_entree = true;
    }

    pub fn inserer(&mut self, s: &str, maintenant: f64) {
        self.entree.push_str(s);
        self.edition_depuis = Some(maintenant);
    }

    /// C : efface l’entrée et masque le résultat (l’historique reste).
    pub fn clear_entree(&mut self, maintenant: f64) {
        self.entree.clear();
        self.message = None;
        self.edition_depuis = Some(maintenant);
    }

    /// ◄ “intelligent” : retire d’un coup les motifs utiles ("sin(", "pi", etc.).
    pub fn backspace_entree(&mut self, maintenant: f64) {
        self.edition_depuis = Some(maintenant);

        // Retire espaces finaux
        let coupe = self.entree.trim_end().len();
        self.entree.truncate(coupe);

        for pat in ["sin(", "cos(", "tan(", "pi"] {
            if self.entree.ends_with(pat) {
                let reste = self.entree.len() - pat.len();
                self.entree.truncate(reste);
                return;
            }
        }

        // Sinon : un caractère (π compris, multi-octets)
        self.entree.pop();
    }

    /// = : évalue l’entrée ; succès => historique + résultat, échec => message fixe.
    /// Entrée vide : rien ne bouge.
    pub fn calculer(&mut self, maintenant: f64) {
        let issue = evaluer(&self.entree);
        self.historique.enregistrer(&issue);

        match issue {
            Issue::Rien => {}
            Issue::Succes { affichage, .. } => {
                self.montrer(affichage, Ton::Normal, maintenant);
            }
            Issue::Erreur { message, cause } => {
                debug!("erreur d’évaluation ({cause}) pour {:?}", self.entree);
                self.montrer(message.to_string(), Ton::Erreur, maintenant);
            }
        }
    }

    pub fn montrer_historique(&mut self, maintenant: f64) {
        if self.historique.is_empty() {
            self.montrer(HISTORIQUE_VIDE.to_string(), Ton::Erreur, maintenant);
        } else {
            let texte = self.historique.derniers(self.lignes_historique).join("\n");
            self.montrer(texte, Ton::Normal, maintenant);
        }
    }

    pub fn theme_suivant(&mut self, maintenant: f64) {
        self.theme = themes::suivant(self.theme);
        let nom = self.theme_courant().nom;
        info!("thème: {nom}");
        self.montrer(format!("{nom} Theme"), Ton::Normal, maintenant);
    }

    fn montrer(&mut self, texte: String, ton: Ton, maintenant: f64) {
        self.message = Some(Message {
            texte,
            ton,
            depuis: maintenant,
        });
    }

    /// Mémorise l’appui d’une touche (animation d’échelle).
    pub fn presser(&mut self, index: usize, maintenant: f64) {
        self.pression = Some((index, maintenant));
    }
}
