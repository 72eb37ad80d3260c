// src/noyau/erreur.rs

use thiserror::Error;

/// Message unique montré à l’utilisateur, quelle que soit la cause.
pub const MESSAGE_ERREUR: &str = "Invalid Expression!";

/// Causes d’échec du pipeline, distinctes en interne (tests + logs).
/// L’UI les écrase toutes sur `MESSAGE_ERREUR`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    /// Entrée vide ou blanche : ce n’est pas une erreur affichée (no-op).
    #[error("entrée vide")]
    EntreeVide,

    #[error("expression invalide: {0}")]
    ExpressionInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat non réel / non fini (ex: tan(90)).
    #[error("résultat non affichable: {0}")]
    ResultatNonReel(String),
}

impl ErreurEval {
    pub(crate) fn invalide(detail: impl Into<String>) -> Self {
        ErreurEval::ExpressionInvalide(detail.into())
    }
}
