// src/noyau/trig.rs
//
// Trig en degrés pour sin/cos/tan
// -------------------------------
// - Argument exact : réduction modulo 360 exacte via mod_rationnel()
// - Argument flottant : rem_euclid(360)
// - Quarts de tour (0, 90, 180, 270), exacts ou flottants : table exacte
//   (pas de 1.2e-16 pour sin(180), pas de 1.6e16 pour tan(90.0))
// - tan(90 + k·180) : indéfini => ResultatNonReel
// - Sinon : f64 sur l’angle réduit
//
// Le résultat est toujours un Flottant (affiché avec 6 décimales).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurEval;
use super::valeur::{flottant, rat_en_f64, Valeur};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }

    fn appliquer(self, rad: f64) -> f64 {
        match self {
            TrigFn::Sin => rad.sin(),
            TrigFn::Cos => rad.cos(),
            TrigFn::Tan => rad.tan(),
        }
    }
}

/// Applique `f` à un angle donné en DEGRÉS.
pub fn trig_degres(f: TrigFn, degres: &Valeur) -> Result<Valeur, ErreurEval> {
    match degres {
        Valeur::Exact(d) => {
            let reduit = mod_rationnel(d, 360);

            if let Some(quart) = quart_de_tour(&reduit) {
                return table_quarts(f, quart);
            }

            flottant(f.appliquer(rat_en_f64(&reduit)?.to_radians()))
        }
        Valeur::Flottant(x) => {
            let reduit = x.rem_euclid(360.0);
            if reduit % 90.0 == 0.0 {
                // rem_euclid peut arrondir à 360.0 pour un x négatif minuscule
                return table_quarts(f, (reduit / 90.0) as u8 % 4);
            }
            flottant(f.appliquer(reduit.to_radians()))
        }
    }
}

/// radians(x) seul : conversion flottante.
pub fn en_radians(degres: &Valeur) -> Result<Valeur, ErreurEval> {
    flottant(degres.en_f64()?.to_radians())
}

/// angle réduit dans [0,360) : Some(k) si angle = k·90 (k ∈ 0..4).
fn quart_de_tour(reduit: &BigRational) -> Option<u8> {
    let q = reduit / BigRational::from_integer(BigInt::from(90));
    if !q.is_integer() {
        return None;
    }
    q.to_integer().to_u8()
}

fn table_quarts(f: TrigFn, quart: u8) -> Result<Valeur, ErreurEval> {
    let v = match (f, quart) {
        (TrigFn::Sin, 0) | (TrigFn::Sin, 2) => 0.0,
        (TrigFn::Sin, 1) => 1.0,
        (TrigFn::Sin, _) => -1.0,

        (TrigFn::Cos, 0) => 1.0,
        (TrigFn::Cos, 2) => -1.0,
        (TrigFn::Cos, _) => 0.0,

        (TrigFn::Tan, 0) | (TrigFn::Tan, 2) => 0.0,
        (TrigFn::Tan, _) => {
            return Err(ErreurEval::ResultatNonReel(format!(
                "{}({}) indéfini",
                f.nom(),
                u32::from(quart) * 90
            )))
        }
    };
    Ok(Valeur::Flottant(v))
}

/// coeff mod periode, résultat dans [0, periode).
pub(crate) fn mod_rationnel(coeff: &BigRational, periode: i64) -> BigRational {
    if periode <= 0 || coeff.is_zero() {
        return coeff.clone();
    }

    let d = coeff.denom().clone(); // denom > 0 (num_rational)
    let n = coeff.numer().clone();

    let p = BigInt::from(periode);
    let m = &p * &d; // periode*d  (m > 0)

    let r = mod_euclid_bigint(&n, &m);
    BigRational::new(r, d)
}

fn mod_euclid_bigint(a: &BigInt, m: &BigInt) -> BigInt {
    let r = a % m;
    if r < BigInt::zero() {
        r + m
    } else {
        r
    }
}
