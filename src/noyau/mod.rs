//! Noyau d’évaluation
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (π -> littéral décimal)
//! - analyse.rs    : descente récursive + enveloppe degrés -> radians
//! - expr.rs       : AST + rendu de l’expression normalisée
//! - valeur.rs     : exact (rationnel) vs flottant
//! - trig.rs       : sin/cos/tan en degrés, quarts de tour exacts
//! - format.rs     : entier court / 6 décimales
//! - eval.rs       : pipeline complet + Issue
//! - historique.rs : lignes "expr = résultat" de la session
//! - erreur.rs     : causes typées, message unique

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod trig;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evaluer, Issue};
pub use historique::Historique;
