//! src/app/particules.rs
//!
//! Fond décoratif : petits carrés qui tombent et repassent en haut.
//! Avancent par pas fixes (TICK) rattrapés d’après l’horloge de la vue,
//! indépendamment du rythme réel des frames.

use rand::Rng;

/// Période d’un pas d’animation (secondes).
pub const TICK: f64 = 0.1;

/// Garde-fou : après une longue pause (fenêtre cachée), on ne rejoue pas tout.
const MAX_PAS_RATTRAPES: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particule {
    pub x: f32,
    pub y: f32,
    /// Sert à la fois de côté (px) et de vitesse.
    pub taille: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Particules {
    pub liste: Vec<Particule>,
    dernier_pas: Option<f64>,
}

impl Particules {
    /// `n` particules dans les 60 % centraux d’une zone `largeur × hauteur`.
    pub fn aleatoires<R: Rng>(n: usize, largeur: f32, hauteur: f32, rng: &mut R) -> Self {
        let liste = (0..n)
            .map(|_| Particule {
                x: largeur * 0.2 + largeur * 0.6 * rng.gen::<f32>(),
                y: hauteur * 0.2 + hauteur * 0.6 * rng.gen::<f32>(),
                taille: rng.gen_range(0.5..=2.0),
            })
            .collect();
        Self {
            liste,
            dernier_pas: None,
        }
    }

    /// Un pas : chute de 2×taille, retour en haut une fois sortie par le bas.
    pub fn avancer(&mut self, hauteur: f32) {
        for p in &mut self.liste {
            p.y += 2.0 * p.taille;
            if p.y > hauteur {
                p.y = 0.0;
            }
        }
    }

    /// Joue les pas dus depuis le dernier appel. Retourne le nombre de pas joués.
    pub fn rattraper(&mut self, maintenant: f64, hauteur: f32) -> u32 {
        let Some(dernier) = self.dernier_pas else {
            self.dernier_pas = Some(maintenant);
            return 0;
        };

        let dus = ((maintenant - dernier) / TICK).floor();
        if dus < 1.0 {
            return 0;
        }

        let joues = (dus as u32).min(MAX_PAS_RATTRAPES);
        for _ in 0..joues {
            self.avancer(hauteur);
        }
        self.dernier_pas = Some(dernier + dus * TICK);
        joues
    }
}
