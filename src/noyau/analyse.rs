// src/noyau/analyse.rs
//
// Descente récursive : Tok -> Expr
//
//   expr     := terme (('+' | '-') terme)*
//   terme    := facteur (('*' | '/') facteur)*
//   facteur  := ('+' | '-') facteur | primaire
//   primaire := Num | Ident '(' expr ')' | '(' expr ')'
//
// Règles:
// - sin/cos/tan(E) => Sin(Radians(E)) : l’argument entier (parenthèses et
//   appels imbriqués compris) est converti degrés -> radians.
// - radians(E)     => Radians(E)
// - tout autre identifiant est refusé
// - pas de multiplication implicite : "2π", "2(3)" sont invalides
// - a + b - c (resp. a * b / c) => une seule Chaine plate, quelle que soit sa longueur
// - profondeur bornée (garde-fou pile) : seules parenthèses et signes unaires imbriquent

use super::erreur::ErreurEval;
use super::expr::{Expr, Op};
use super::jetons::Tok;

/// Garde-fou : au-delà, on refuse plutôt que de risquer la pile.
const MAX_PROFONDEUR: usize = 256;

/// Construit l’AST complet. Tous les jetons doivent être consommés.
pub fn analyser(tokens: &[Tok]) -> Result<Expr, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::invalide("expression vide"));
    }

    let mut p = Analyseur {
        tokens,
        pos: 0,
        profondeur: 0,
    };
    let e = p.expr()?;

    match p.courant() {
        None => Ok(e),
        Some(Tok::RPar) => Err(ErreurEval::invalide("parenthèse fermante en trop")),
        Some(t) => Err(ErreurEval::invalide(format!(
            "jeton inattendu après l’expression: {t:?}"
        ))),
    }
}

struct Analyseur<'a> {
    tokens: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&Tok> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn attendre_rpar(&mut self) -> Result<(), ErreurEval> {
        match self.avancer() {
            Some(Tok::RPar) => Ok(()),
            Some(t) => Err(ErreurEval::invalide(format!("')' attendue, trouvé {t:?}"))),
            None => Err(ErreurEval::invalide("parenthèses non fermées")),
        }
    }

    fn entrer(&mut self) -> Result<(), ErreurEval> {
        self.profondeur += 1;
        if self.profondeur > MAX_PROFONDEUR {
            return Err(ErreurEval::invalide("expression trop imbriquée"));
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    fn expr(&mut self) -> Result<Expr, ErreurEval> {
        self.entrer()?;
        let tete = self.terme()?;
        let mut suite = Vec::new();

        loop {
            let op = match self.courant() {
                Some(Tok::Plus) => Op::Plus,
                Some(Tok::Minus) => Op::Moins,
                _ => break,
            };
            self.pos += 1;
            suite.push((op, self.terme()?));
        }

        self.sortir();
        Ok(Expr::chaine(tete, suite))
    }

    fn terme(&mut self) -> Result<Expr, ErreurEval> {
        let tete = self.facteur()?;
        let mut suite = Vec::new();

        loop {
            let op = match self.courant() {
                Some(Tok::Star) => Op::Fois,
                Some(Tok::Slash) => Op::Divise,
                _ => break,
            };
            self.pos += 1;
            suite.push((op, self.facteur()?));
        }

        Ok(Expr::chaine(tete, suite))
    }

    fn facteur(&mut self) -> Result<Expr, ErreurEval> {
        match self.courant() {
            Some(Tok::Minus) => {
                self.pos += 1;
                self.entrer()?;
                let x = self.facteur()?;
                self.sortir();
                Ok(Expr::Neg(Box::new(x)))
            }
            Some(Tok::Plus) => {
                self.pos += 1;
                self.entrer()?;
                let x = self.facteur()?;
                self.sortir();
                Ok(x)
            }
            _ => self.primaire(),
        }
    }

    fn primaire(&mut self) -> Result<Expr, ErreurEval> {
        let tok = self
            .avancer()
            .cloned()
            .ok_or_else(|| ErreurEval::invalide("opérande manquante en fin d’expression"))?;

        match tok {
            Tok::Num(r) => Ok(Expr::Nombre(r)),

            Tok::LPar => {
                if matches!(self.courant(), Some(Tok::RPar)) {
                    return Err(ErreurEval::invalide("parenthèses vides"));
                }
                let e = self.expr()?;
                self.attendre_rpar()?;
                Ok(e)
            }

            Tok::Ident(nom) => self.appel(&nom),

            Tok::RPar => Err(ErreurEval::invalide("parenthèse fermante inattendue")),
            t => Err(ErreurEval::invalide(format!("opérande attendue, trouvé {t:?}"))),
        }
    }

    /// `nom(` déjà en partie consommé (le nom) : lit `( expr )`.
    fn appel(&mut self, nom: &str) -> Result<Expr, ErreurEval> {
        if !matches!(nom, "sin" | "cos" | "tan" | "radians") {
            return Err(ErreurEval::invalide(format!("identifiant inconnu: {nom}")));
        }

        match self.avancer() {
            Some(Tok::LPar) => {}
            _ => return Err(ErreurEval::invalide(format!("'(' attendue après {nom}"))),
        }
        if matches!(self.courant(), Some(Tok::RPar) | None) {
            return Err(ErreurEval::invalide(format!("{nom} sans argument")));
        }

        let arg = self.expr()?;
        self.attendre_rpar()?;

        let rad = |x: Expr| Box::new(Expr::Radians(Box::new(x)));
        Ok(match nom {
            "sin" => Expr::Sin(rad(arg)),
            "cos" => Expr::Cos(rad(arg)),
            "tan" => Expr::Tan(rad(arg)),
            _ => Expr::Radians(Box::new(arg)),
        })
    }
}
