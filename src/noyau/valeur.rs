// src/noyau/valeur.rs
//
// Valeur numérique du calcul.
// - Exact    : rationnel (littéraux, + - * / entre exacts)
// - Flottant : f64 (trig, radians, ou tout calcul qui touche un flottant)
//
// Invariants:
// - un Flottant est toujours fini (sinon ResultatNonReel)
// - diviser par un zéro exact ou par 0.0 => DivisionParZero

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Exact(BigRational),
    Flottant(f64),
}

/// Flottant fini, ou erreur.
pub fn flottant(x: f64) -> Result<Valeur, ErreurEval> {
    if x.is_finite() {
        Ok(Valeur::Flottant(x))
    } else {
        Err(ErreurEval::ResultatNonReel(format!("{x}")))
    }
}

/// Rationnel -> f64 (fini) ; trop grand => ResultatNonReel.
pub fn rat_en_f64(r: &BigRational) -> Result<f64, ErreurEval> {
    match r.to_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(ErreurEval::ResultatNonReel(format!(
            "hors domaine f64: {}/{}",
            r.numer(),
            r.denom()
        ))),
    }
}

impl Valeur {
    pub fn en_f64(&self) -> Result<f64, ErreurEval> {
        match self {
            Valeur::Exact(r) => rat_en_f64(r),
            Valeur::Flottant(x) => Ok(*x),
        }
    }

    pub fn est_exact(&self) -> bool {
        matches!(self, Valeur::Exact(_))
    }

    pub fn neg(self) -> Valeur {
        match self {
            Valeur::Exact(r) => Valeur::Exact(-r),
            Valeur::Flottant(x) => Valeur::Flottant(-x),
        }
    }

    pub fn add(self, b: Valeur) -> Result<Valeur, ErreurEval> {
        combiner(self, b, |x, y| x + y, |x, y| x + y)
    }

    pub fn sub(self, b: Valeur) -> Result<Valeur, ErreurEval> {
        combiner(self, b, |x, y| x - y, |x, y| x - y)
    }

    pub fn mul(self, b: Valeur) -> Result<Valeur, ErreurEval> {
        combiner(self, b, |x, y| x * y, |x, y| x * y)
    }

    pub fn div(self, b: Valeur) -> Result<Valeur, ErreurEval> {
        let zero = match &b {
            Valeur::Exact(r) => r.is_zero(),
            Valeur::Flottant(x) => *x == 0.0,
        };
        if zero {
            return Err(ErreurEval::DivisionParZero);
        }
        combiner(self, b, |x, y| x / y, |x, y| x / y)
    }
}

/// Exact ∘ Exact reste exact ; dès qu’un flottant apparaît, tout passe en f64.
fn combiner(
    a: Valeur,
    b: Valeur,
    exact: impl FnOnce(BigRational, BigRational) -> BigRational,
    flot: impl FnOnce(f64, f64) -> f64,
) -> Result<Valeur, ErreurEval> {
    match (a, b) {
        (Valeur::Exact(x), Valeur::Exact(y)) => Ok(Valeur::Exact(exact(x, y))),
        (a, b) => flottant(flot(a.en_f64()?, b.en_f64()?)),
    }
}
