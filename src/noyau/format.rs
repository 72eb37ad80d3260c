// src/noyau/format.rs
//
// Affichage du résultat :
// - Exact entier       => forme canonique courte ("4", "-12")
// - Exact non entier   => f64, 6 décimales ("3.333333")
// - Flottant           => 6 décimales ("1.000000")
// Jamais de "-0.000000" : un zéro arrondi s’affiche "0.000000".

use super::erreur::ErreurEval;
use super::valeur::{rat_en_f64, Valeur};

/// Décimales imposées pour tout résultat flottant.
pub const DECIMALES: usize = 6;

pub fn format_resultat(v: &Valeur) -> Result<String, ErreurEval> {
    match v {
        Valeur::Exact(r) if r.is_integer() => Ok(format!("{}", r.numer())),
        Valeur::Exact(r) => Ok(format_flottant(rat_en_f64(r)?)),
        Valeur::Flottant(x) => Ok(format_flottant(*x)),
    }
}

fn format_flottant(x: f64) -> String {
    let txt = format!("{:.*}", DECIMALES, x);
    match txt.strip_prefix('-') {
        Some(reste) if reste.chars().all(|c| c == '0' || c == '.') => reste.to_string(),
        _ => txt,
    }
}
