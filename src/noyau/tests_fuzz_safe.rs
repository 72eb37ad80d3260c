//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   - evaluer ne panique jamais, quelle que soit l’entrée
//!   - une erreur porte toujours le message unique
//!   - l’historique ne bouge que sur un succès

use std::time::{Duration, Instant};

use super::erreur::{ErreurEval, MESSAGE_ERREUR};
use super::eval::{evaluer, Issue};
use super::historique::Historique;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Alphabet des touches du pavé (ce qu’un utilisateur peut vraiment taper).
const TOUCHES: [&str; 21] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "(", ")", "sin(",
    "cos(", "tan(", "π",
];

fn gen_appuis(rng: &mut Rng, n: usize) -> String {
    (0..n)
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(400);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(100))
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(9) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("sin({})", gen_expr(rng, depth - 1)),
        6 => format!("cos({})", gen_expr(rng, depth - 1)),
        7 => format!("tan({})", gen_expr(rng, depth - 1)),
        _ => "π".to_string(),
    }
}

fn check_issue(expr: &str, issue: &Issue) {
    match issue {
        Issue::Erreur { message, cause } => {
            assert_eq!(*message, MESSAGE_ERREUR, "expr={expr:?}");
            assert_ne!(*cause, ErreurEval::EntreeVide, "expr={expr:?}");
        }
        Issue::Succes {
            affichage,
            entree_historique,
        } => {
            assert!(
                entree_historique.ends_with(&format!(" = {affichage}")),
                "expr={expr:?}"
            );
            assert_ne!(affichage, "-0.000000", "expr={expr:?}");
            if let Some((_, frac)) = affichage.split_once('.') {
                assert_eq!(frac.len(), 6, "expr={expr:?} affichage={affichage:?}");
            }
        }
        Issue::Rien => assert!(expr.trim().is_empty(), "expr={expr:?}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_appuis_aleatoires_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut h = Historique::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..600 {
        budget(t0, max);

        let n = rng.pick(12) as usize;
        let expr = gen_appuis(&mut rng, n);

        let avant = h.len();
        let issue = evaluer(&expr);
        check_issue(&expr, &issue);

        let ajoute = h.enregistrer(&issue);
        assert_eq!(h.len(), avant + usize::from(ajoute));

        match issue {
            Issue::Succes { .. } => seen_ok += 1,
            Issue::Erreur { .. } => seen_err += 1,
            Issue::Rien => {}
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
    assert_eq!(h.len(), seen_ok);
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut rng_bis = rng.clone();

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let expr_bis = gen_expr(&mut rng_bis, 4);
        assert_eq!(expr, expr_bis);

        let issue = evaluer(&expr);
        check_issue(&expr, &issue);
        assert_eq!(issue, evaluer(&expr_bis), "non déterministe: {expr:?}");

        // bien formée => seules les erreurs arithmétiques sont possibles
        if let Issue::Erreur { cause, .. } = &issue {
            assert!(
                matches!(
                    cause,
                    ErreurEval::DivisionParZero | ErreurEval::ResultatNonReel(_)
                ),
                "erreur non attendue: expr={expr:?} err={cause}"
            );
        }
    }
}

#[test]
fn fuzz_safe_caracteres_hors_alphabet() {
    let mut rng = Rng::new(0x5EED_u64);
    let etrangers = ['#', '%', '^', '√', 'é', ',', '=', '!', '\u{0}'];

    for _ in 0..100 {
        let c = etrangers[rng.pick(etrangers.len() as u32) as usize];
        let expr = format!("{}{c}{}", gen_nombre(&mut rng), gen_nombre(&mut rng));
        match evaluer(&expr) {
            Issue::Erreur { cause, .. } => {
                assert!(matches!(cause, ErreurEval::ExpressionInvalide(_)), "{expr:?}")
            }
            autre => panic!("erreur attendue pour {expr:?}, obtenu {autre:?}"),
        }
    }
}
