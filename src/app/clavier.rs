//! src/app/clavier.rs
//!
//! Pavé de 26 touches (5 colonnes) : libellé, action, rôle de couleur.

use super::themes::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Insère le texte tel quel (chiffres, opérateurs, parenthèses, π, "sin(").
    Inserer(&'static str),
    /// C : efface l’entrée et masque le résultat.
    Effacer,
    /// ◄ : retire le dernier symbole.
    Retour,
    /// = : évalue.
    Egal,
    Historique,
    Themes,
}

#[derive(Clone, Copy, Debug)]
pub struct Touche {
    pub libelle: &'static str,
    pub action: Action,
    pub role: Role,
}

/// Colonnes de la grille.
pub const COLONNES: usize = 5;

const fn t(libelle: &'static str, action: Action, role: Role) -> Touche {
    Touche {
        libelle,
        action,
        role,
    }
}

const fn chiffre(libelle: &'static str) -> Touche {
    t(libelle, Action::Inserer(libelle), Role::Secondaire)
}

const fn op(libelle: &'static str) -> Touche {
    t(libelle, Action::Inserer(libelle), Role::Accent)
}

pub const TOUCHES: [Touche; 26] = [
    chiffre("7"),
    chiffre("8"),
    chiffre("9"),
    op("/"),
    t("C", Action::Effacer, Role::Fermer),
    //
    chiffre("4"),
    chiffre("5"),
    chiffre("6"),
    op("*"),
    t("sin", Action::Inserer("sin("), Role::Secondaire),
    //
    chiffre("1"),
    chiffre("2"),
    chiffre("3"),
    op("-"),
    t("cos", Action::Inserer("cos("), Role::Secondaire),
    //
    chiffre("0"),
    chiffre("."),
    t("=", Action::Egal, Role::Secondaire),
    op("+"),
    t("tan", Action::Inserer("tan("), Role::Secondaire),
    //
    chiffre("("),
    chiffre(")"),
    chiffre("π"),
    t("◄", Action::Retour, Role::Secondaire),
    t("History", Action::Historique, Role::Secondaire),
    //
    t("Themes", Action::Themes, Role::Secondaire),
];
