// src/noyau/historique.rs
//
// Historique de session : liste append-only de "expr = résultat".
// Jamais modifiée ni vidée en cours de session ; seules les évaluations
// réussies y ajoutent une ligne.

use super::eval::Issue;

/// Nombre de lignes montrées par défaut (bouton History).
pub const LIGNES_AFFICHEES: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<String>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre l’issue d’une évaluation. Seul un succès ajoute une ligne.
    /// Retourne true si une ligne a été ajoutée.
    pub fn enregistrer(&mut self, issue: &Issue) -> bool {
        match issue {
            Issue::Succes {
                entree_historique, ..
            } => {
                self.entrees.push(entree_historique.clone());
                true
            }
            Issue::Rien | Issue::Erreur { .. } => false,
        }
    }

    /// Les `limite` dernières lignes, dans l’ordre où elles ont été ajoutées
    /// (la plus récente en dernier).
    pub fn derniers(&self, limite: usize) -> &[String] {
        let debut = self.entrees.len().saturating_sub(limite);
        &self.entrees[debut..]
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
