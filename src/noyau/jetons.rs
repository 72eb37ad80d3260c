// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurEval;

/// π en littéral décimal (20 chiffres significatifs, au-delà du f64).
pub const PI_LITTERAL: &str = "3.14159265358979323846";

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    // Fonctions : sin / cos / tan / radians (le parse refuse le reste)
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// π sous forme de rationnel exact, lu depuis `PI_LITTERAL`.
pub fn pi_rationnel() -> BigRational {
    // PI_LITTERAL est bien formé : la lecture ne peut pas échouer.
    lire_decimal(PI_LITTERAL).unwrap_or_else(BigRational::zero)
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 1.5, .5, 5.) -> rationnels exacts
/// - opérateurs + - * /
/// - parenthèses ( )
/// - π ou pi (substitués par le littéral décimal)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            'π' => Some(Tok::Num(pi_rationnel())),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            if w == "pi" {
                out.push(Tok::Num(pi_rationnel()));
            } else {
                out.push(Tok::Ident(w));
            }
            continue;
        }

        // Décimal : chiffres, au plus un point, au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let r = lire_decimal(&lit).ok_or_else(|| {
                ErreurEval::ExpressionInvalide(format!("nombre invalide: '{lit}'"))
            })?;
            out.push(Tok::Num(r));
            continue;
        }

        return Err(ErreurEval::ExpressionInvalide(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    Ok(out)
}

/// "12.375" -> 12375/1000 (exact). None si mal formé ("1.2.3", ".", "").
fn lire_decimal(lit: &str) -> Option<BigRational> {
    let (ent, frac) = match lit.split_once('.') {
        Some((e, f)) => (e, f),
        None => (lit, ""),
    };
    if frac.contains('.') || (ent.is_empty() && frac.is_empty()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);
    Some(BigRational::new(n, d))
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
