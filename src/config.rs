// src/config.rs
//
// Configuration (fichier TOML optionnel)
// --------------------------------------
// Ordre de recherche (natif) :
//   1. chemin donné par CALCULATRICE_CONFIG
//   2. <config_dir>/calculatrice-animee/config.toml
//   3. valeurs par défaut
// Web : valeurs par défaut uniquement.
//
// Toutes les clés sont optionnelles ; une erreur n’est jamais fatale (main.rs
// la journalise et repart des défauts).

use std::io;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::app::themes;
use crate::noyau::historique::LIGNES_AFFICHEES;

/// Variable d’environnement qui désigne un fichier de configuration explicite.
pub const VAR_CONFIG: &str = "CALCULATRICE_CONFIG";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntaxe TOML invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigCalc {
    pub largeur: f32,
    pub hauteur: f32,
    /// Nom du thème de départ (insensible à la casse).
    pub theme: String,
    pub lignes_historique: usize,
    pub particules: usize,
}

impl Default for ConfigCalc {
    fn default() -> Self {
        Self {
            largeur: 400.0,
            hauteur: 600.0,
            theme: themes::THEMES[0].nom.to_string(),
            lignes_historique: LIGNES_AFFICHEES,
            particules: 20,
        }
    }
}

impl ConfigCalc {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }

    /// Index du thème demandé ; nom inconnu => premier thème.
    pub fn index_theme(&self) -> usize {
        themes::index_par_nom(&self.theme).unwrap_or_else(|| {
            warn!("thème inconnu {:?}, retour à {}", self.theme, themes::THEMES[0].nom);
            0
        })
    }
}

/// D’où vient la configuration chargée (pour le journal de démarrage).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Fichier(PathBuf),
    Defauts,
}

/// Charge la configuration native selon l’ordre documenté en tête de fichier.
#[cfg(not(target_arch = "wasm32"))]
pub fn charger() -> Result<(ConfigCalc, Source), ErreurConfig> {
    let chemin = match std::env::var_os(VAR_CONFIG) {
        // Chemin explicite : il doit exister.
        Some(p) => Some(PathBuf::from(p)),
        None => dirs::config_dir()
            .map(|d| d.join("calculatrice-animee").join("config.toml"))
            .filter(|p| p.is_file()),
    };

    match chemin {
        Some(chemin) => charger_fichier(chemin),
        None => Ok((ConfigCalc::default(), Source::Defauts)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn charger_fichier(chemin: PathBuf) -> Result<(ConfigCalc, Source), ErreurConfig> {
    let texte = match std::fs::read_to_string(&chemin) {
        Ok(t) => t,
        Err(source) => return Err(ErreurConfig::Lecture { chemin, source }),
    };
    let config = ConfigCalc::depuis_toml(&texte)?;
    Ok((config, Source::Fichier(chemin)))
}
