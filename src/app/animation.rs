//! src/app/animation.rs
//!
//! Courbes d’animation (fonctions pures du temps écoulé, en secondes).
//! La vue les lit à chaque frame ; l’état ne stocke que les instants de départ.

use std::f32::consts::PI;

/// Durée d’une phase de pression (descente puis rebond).
const PHASE_PRESSION: f32 = 0.1;

/// Échelle minimale d’une touche pressée.
const ECHELLE_PRESSEE: f32 = 0.95;

/// Pulsation de la police d’entrée : 32 -> 34 -> 32.
pub const POLICE_ENTREE: f32 = 32.0;
const POLICE_ENTREE_MAX: f32 = 34.0;
const PHASE_POLICE: f32 = 0.1;

/// Apparition du résultat : montée de 20 px en 0.3 s, retour en 0.2 s.
const MONTEE_RESULTAT: f32 = 20.0;
const PHASE_MONTEE: f32 = 0.3;
const PHASE_RETOUR: f32 = 0.2;

pub fn out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -t * (t - 2.0)
}

/// Rebond élastique qui se stabilise sur 1.
pub fn out_elastic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let p = 0.3;
    2f32.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * PI) / p).sin() + 1.0
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Échelle d’une touche `dt` secondes après l’appui.
pub fn echelle_pression(dt: f32) -> f32 {
    if dt < 0.0 || dt >= 2.0 * PHASE_PRESSION {
        return 1.0;
    }
    if dt < PHASE_PRESSION {
        lerp(1.0, ECHELLE_PRESSEE, out_quad(dt / PHASE_PRESSION))
    } else {
        lerp(
            ECHELLE_PRESSEE,
            1.0,
            out_elastic((dt - PHASE_PRESSION) / PHASE_PRESSION),
        )
    }
}

/// Taille de police du champ d’entrée `dt` secondes après une édition.
pub fn police_entree(dt: f32) -> f32 {
    if dt < 0.0 || dt >= 2.0 * PHASE_POLICE {
        return POLICE_ENTREE;
    }
    if dt < PHASE_POLICE {
        lerp(POLICE_ENTREE, POLICE_ENTREE_MAX, dt / PHASE_POLICE)
    } else {
        lerp(POLICE_ENTREE_MAX, POLICE_ENTREE, (dt - PHASE_POLICE) / PHASE_POLICE)
    }
}

/// (opacité, décalage vertical en px) du résultat `dt` secondes après son affichage.
/// Décalage négatif = vers le haut.
pub fn apparition_resultat(dt: f32) -> (f32, f32) {
    if dt < 0.0 {
        return (0.0, 0.0);
    }
    if dt < PHASE_MONTEE {
        let k = out_quad(dt / PHASE_MONTEE);
        return (k, -MONTEE_RESULTAT * k);
    }
    let t = (dt - PHASE_MONTEE) / PHASE_RETOUR;
    if t < 1.0 {
        (1.0, -MONTEE_RESULTAT * (1.0 - out_elastic(t)))
    } else {
        (1.0, 0.0)
    }
}

/// Vrai tant qu’une animation âgée de `dt` secondes a encore besoin de frames.
pub fn en_cours(dt: f32) -> bool {
    (0.0..PHASE_MONTEE + PHASE_RETOUR).contains(&dt)
}
