// src/noyau/expr.rs
//
// AST du calcul.
// - Nombre  : rationnel exact (littéral décimal, π déjà substitué)
// - Neg     : moins unaire
// - Chaine  : suite gauche-associative d’opérateurs de même priorité
//             (a - b + c, a * b / c). Plate : la longueur d’une somme ne
//             pèse ni sur la pile ni sur la profondeur de l’arbre.
// - Radians : conversion degrés -> radians
// - Sin/Cos/Tan : toujours construits par le parse autour d’un Radians(..)
//
// Le Display rend l’« expression normalisée » : ce que l’évaluateur calcule
// réellement (π en décimal, arguments trig enveloppés dans radians(..)).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::Fois => "*",
            Op::Divise => "/",
        }
    }

    fn priorite(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Nombre(BigRational),

    Neg(Box<Expr>),

    /// tête puis (op, opérande)* ; tous les op d’une chaîne ont la même priorité.
    Chaine(Box<Expr>, Vec<(Op, Expr)>),

    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Radians(Box<Expr>),
}

impl Expr {
    /// Chaîne si au moins un opérateur, sinon la tête seule.
    pub fn chaine(tete: Expr, suite: Vec<(Op, Expr)>) -> Expr {
        if suite.is_empty() {
            tete
        } else {
            Expr::Chaine(Box::new(tete), suite)
        }
    }

    /// Niveau de priorité pour le rendu (parenthèses minimales).
    fn priorite(&self) -> u8 {
        use Expr::*;
        match self {
            Chaine(_, suite) => suite.first().map_or(4, |(op, _)| op.priorite()),
            Neg(_) => 3,
            Nombre(r) if r.is_negative() => 3,
            Nombre(_) | Sin(_) | Cos(_) | Tan(_) | Radians(_) => 4,
        }
    }

    /// Profondeur de l’arbre (sert aux garde-fous des tests et des logs).
    pub fn profondeur(&self) -> usize {
        use Expr::*;
        match self {
            Nombre(_) => 1,
            Neg(x) | Sin(x) | Cos(x) | Tan(x) | Radians(x) => 1 + x.profondeur(),
            Chaine(tete, suite) => {
                1 + suite
                    .iter()
                    .map(|(_, e)| e.profondeur())
                    .fold(tete.profondeur(), usize::max)
            }
        }
    }
}

/// Nombre de décimales si le dénominateur n’a que des facteurs 2 et 5.
fn decimales_finies(d: &BigInt) -> Option<u32> {
    let mut reste = d.clone();
    let (mut e2, mut e5) = (0u32, 0u32);
    while (&reste % 2u32).is_zero() {
        reste /= 2u32;
        e2 += 1;
    }
    while (&reste % 5u32).is_zero() {
        reste /= 5u32;
        e5 += 1;
    }
    reste.is_one().then_some(e2.max(e5))
}

/// Les littéraux viennent de décimaux : on retrouve leur forme "12.375".
/// Repli p/q si le développement n’est pas fini.
fn format_nombre(r: &BigRational) -> String {
    if r.denom().is_one() {
        return format!("{}", r.numer());
    }

    let Some(k) = decimales_finies(r.denom()) else {
        return format!("{}/{}", r.numer(), r.denom());
    };

    let scaled = r.numer() * BigInt::from(10).pow(k) / r.denom();
    let neg = scaled.is_negative();
    let mut txt = scaled.abs().to_str_radix(10);
    while txt.len() <= k as usize {
        txt.insert(0, '0');
    }
    let (ent, frac) = txt.split_at(txt.len() - k as usize);
    if neg {
        format!("-{ent}.{frac}")
    } else {
        format!("{ent}.{frac}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        // enfant gauche : parenthèses si priorité strictement plus faible
        // enfant droit  : parenthèses si priorité plus faible ou égale (associativité gauche)
        fn cote(f: &mut fmt::Formatter<'_>, e: &Expr, seuil: u8, strict: bool) -> fmt::Result {
            let p = e.priorite();
            let parens = if strict { p < seuil } else { p <= seuil };
            if parens {
                write!(f, "({e})")
            } else {
                write!(f, "{e}")
            }
        }

        match self {
            Nombre(r) => write!(f, "{}", format_nombre(r)),
            Neg(x) => {
                write!(f, "-")?;
                cote(f, x, 3, false)
            }
            Chaine(tete, suite) => {
                let p = self.priorite();
                cote(f, tete, p, true)?;
                for (op, e) in suite {
                    write!(f, " {} ", op.symbole())?;
                    cote(f, e, p, false)?;
                }
                Ok(())
            }
            Sin(x) => write!(f, "sin({x})"),
            Cos(x) => write!(f, "cos({x})"),
            Tan(x) => write!(f, "tan({x})"),
            Radians(x) => write!(f, "radians({x})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(a: i64, b: i64) -> Box<Expr> {
        Box::new(Expr::Nombre(BigRational::new(BigInt::from(a), BigInt::from(b))))
    }

    fn ch(tete: Box<Expr>, suite: Vec<(Op, Box<Expr>)>) -> Box<Expr> {
        let suite = suite.into_iter().map(|(op, e)| (op, *e)).collect();
        Box::new(Expr::chaine(*tete, suite))
    }

    #[test]
    fn rendu_decimal_des_litteraux() {
        assert_eq!(n(3, 2).to_string(), "1.5");
        assert_eq!(n(1, 20).to_string(), "0.05");
        assert_eq!(n(-7, 4).to_string(), "-1.75");
        assert_eq!(n(12, 1).to_string(), "12");
    }

    #[test]
    fn rendu_fraction_non_decimale() {
        assert_eq!(n(1, 3).to_string(), "1/3");
    }

    #[test]
    fn parentheses_minimales() {
        // (1 + 2) * 3
        let e = ch(ch(n(1, 1), vec![(Op::Plus, n(2, 1))]), vec![(Op::Fois, n(3, 1))]);
        assert_eq!(e.to_string(), "(1 + 2) * 3");

        // 1 - (2 - 3) garde ses parenthèses (associativité gauche)
        let e = ch(n(1, 1), vec![(Op::Moins, ch(n(2, 1), vec![(Op::Moins, n(3, 1))]))]);
        assert_eq!(e.to_string(), "1 - (2 - 3)");

        // 1 - 2 - 3 : une seule chaîne, sans parenthèses
        let e = ch(n(1, 1), vec![(Op::Moins, n(2, 1)), (Op::Moins, n(3, 1))]);
        assert_eq!(e.to_string(), "1 - 2 - 3");

        // 1 + 2 * 3 - 4
        let e = ch(
            n(1, 1),
            vec![
                (Op::Plus, ch(n(2, 1), vec![(Op::Fois, n(3, 1))])),
                (Op::Moins, n(4, 1)),
            ],
        );
        assert_eq!(e.to_string(), "1 + 2 * 3 - 4");
    }

    #[test]
    fn rendu_trig_normalise() {
        let e = Expr::Sin(Box::new(Expr::Radians(n(90, 1))));
        assert_eq!(e.to_string(), "sin(radians(90))");
    }

    #[test]
    fn profondeur_simple() {
        let e = Expr::Neg(ch(n(1, 1), vec![(Op::Plus, n(2, 1))]));
        assert_eq!(e.profondeur(), 3);
    }

    #[test]
    fn chaine_vide_rend_la_tete() {
        assert_eq!(Expr::chaine(*n(7, 1), Vec::new()), *n(7, 1));
    }

    #[test]
    fn longue_chaine_reste_plate() {
        let suite = (0..100_000).map(|_| (Op::Plus, *n(1, 1))).collect();
        let e = Expr::chaine(*n(1, 1), suite);
        assert_eq!(e.profondeur(), 2);
        assert!(e.to_string().starts_with("1 + 1 + 1"));
    }
}
