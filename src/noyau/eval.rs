//! Noyau — évaluation (pipeline réel)
//!
//! trim -> jetons (π substitué) -> Expr (sin/cos/tan enveloppés dans radians)
//!      -> valeur (exacte ou flottante) -> texte affiché
//!
//! Aucun état : chaque appel est indépendant. L’historique vit chez l’appelant.

use log::debug;

use super::analyse::analyser;
use super::erreur::{ErreurEval, MESSAGE_ERREUR};
use super::expr::{Expr, Op};
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::trig::{en_radians, trig_degres, TrigFn};
use super::valeur::Valeur;

/// Issue d’un appui sur "=" côté UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    /// Entrée vide : ne rien toucher à l’affichage.
    Rien,
    /// Texte à afficher + ligne "expr = résultat" à ajouter à l’historique.
    Succes {
        affichage: String,
        entree_historique: String,
    },
    /// Message fixe pour l’UI ; la cause reste disponible (tests + logs).
    Erreur {
        message: &'static str,
        cause: ErreurEval,
    },
}

/// Détail d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub expression: String,
    pub normalisee: String,
    pub valeur: Valeur,
    pub affichage: String,
}

/// API publique : évalue le texte brut du champ d’entrée.
pub fn evaluer(brut: &str) -> Issue {
    match evaluer_detail(brut) {
        Ok(r) => {
            let nature = if r.valeur.est_exact() { "exacte" } else { "flottante" };
            debug!("{} => {} (valeur {nature})", r.normalisee, r.affichage);
            Issue::Succes {
                entree_historique: format!("{} = {}", r.expression, r.affichage),
                affichage: r.affichage,
            }
        }
        Err(ErreurEval::EntreeVide) => Issue::Rien,
        Err(cause) => {
            debug!("évaluation refusée pour {brut:?}: {cause}");
            Issue::Erreur {
                message: MESSAGE_ERREUR,
                cause,
            }
        }
    }
}

/// Pipeline complet avec erreurs typées (EntreeVide comprise).
pub fn evaluer_detail(brut: &str) -> Result<Resultat, ErreurEval> {
    // 1) trim
    let s = brut.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 2) jetons (π -> littéral décimal)
    let jetons = tokenize(s)?;
    debug!("jetons: {}", format_tokens(&jetons));

    // 3) AST (degrés -> radians posé sur l’arbre)
    let expr = analyser(&jetons)?;
    let normalisee = expr.to_string();
    debug!("normalisée: {normalisee} (profondeur {})", expr.profondeur());

    // 4) valeur
    let valeur = valeur_de(&expr)?;

    // 5) affichage
    let affichage = format_resultat(&valeur)?;

    Ok(Resultat {
        expression: s.to_string(),
        normalisee,
        valeur,
        affichage,
    })
}

/// Évaluation récursive de l’arbre.
/// La récursion suit l’imbrication (bornée par l’analyse) ; une chaîne est
/// repliée de gauche à droite sans récursion.
pub fn valeur_de(expr: &Expr) -> Result<Valeur, ErreurEval> {
    use Expr::*;

    match expr {
        Nombre(r) => Ok(Valeur::Exact(r.clone())),
        Neg(x) => Ok(valeur_de(x)?.neg()),

        Chaine(tete, suite) => suite.iter().try_fold(valeur_de(tete)?, |acc, (op, e)| {
            let v = valeur_de(e)?;
            match op {
                Op::Plus => acc.add(v),
                Op::Moins => acc.sub(v),
                Op::Fois => acc.mul(v),
                Op::Divise => acc.div(v),
            }
        }),

        Sin(x) => trig(TrigFn::Sin, x),
        Cos(x) => trig(TrigFn::Cos, x),
        Tan(x) => trig(TrigFn::Tan, x),

        Radians(x) => en_radians(&valeur_de(x)?),
    }
}

/// sin/cos/tan : l’analyse enveloppe toujours l’argument dans Radians(deg) ;
/// on calcule en degrés (réduction exacte, quarts de tour exacts).
fn trig(f: TrigFn, arg: &Expr) -> Result<Valeur, ErreurEval> {
    match arg {
        Expr::Radians(deg) => trig_degres(f, &valeur_de(deg)?),
        autre => Err(ErreurEval::invalide(format!(
            "argument trig non converti en radians: {autre}"
        ))),
    }
}
