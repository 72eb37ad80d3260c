//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés du pipeline sans faire chauffer la machine.
//! - profondeur bornée, longueur libre (chaînes plates)
//!
//! Notes :
//! - Les arguments trig sont en DEGRÉS ; les quarts de tour sont exacts.
//! - Un résultat exact entier s’affiche sans décimales, tout le reste avec 6.
//! - Toutes les causes d’échec partagent le même message affiché.

use super::erreur::{ErreurEval, MESSAGE_ERREUR};
use super::eval::{evaluer, evaluer_detail, Issue};
use super::historique::{Historique, LIGNES_AFFICHEES};

fn eval_ok(expr: &str) -> String {
    match evaluer(expr) {
        Issue::Succes { affichage, .. } => affichage,
        autre => panic!("expr={expr:?} : {autre:?}"),
    }
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_erreur_affichee(expr: &str) {
    match evaluer(expr) {
        Issue::Erreur { message, .. } => assert_eq!(message, MESSAGE_ERREUR, "expr={expr:?}"),
        autre => panic!("erreur attendue pour {expr:?}, obtenu {autre:?}"),
    }
}

/// Référence flottante indépendante du noyau, pour comparer des formes.
fn six(x: f64) -> String {
    let s = format!("{x:.6}");
    if s == "-0.000000" {
        "0.000000".to_string()
    } else {
        s
    }
}

/* ------------------------ Propriétés affichage ------------------------ */

#[test]
fn sci_proprietes_documentees() {
    assert_affiche("sin(90)", "1.000000");
    assert_affiche("cos(180)", "-1.000000");
    assert_affiche("tan(45)", "1.000000");
    assert_affiche("2+2", "4");
    assert_affiche("10/3", "3.333333");
    assert_affiche("2*π", "6.283185");

    assert_erreur_affichee("2+");
    assert_erreur_affichee("((1)");
    assert_erreur_affichee("sin(");
    assert_erreur_affichee("5/0");

    assert_eq!(evaluer(""), Issue::Rien);
    assert_eq!(evaluer("   "), Issue::Rien);
}

#[test]
fn sci_entier_exact_vs_flottant() {
    // même valeur, deux natures : exact -> court, trig -> 6 décimales
    assert_affiche("6/3", "2");
    assert_affiche("2*sin(90)", "2.000000");
    assert_affiche("0.5+0.5", "1");
    assert_affiche("1/3*3", "1");
}

/* ------------------------ Arithmétique usuelle ------------------------ */

#[test]
fn sci_infixe_contre_reference() {
    let cas: [(&str, f64); 8] = [
        ("1+2*3", 1.0 + 2.0 * 3.0),
        ("(1+2)*3", (1.0 + 2.0) * 3.0),
        ("10-4-3", 10.0 - 4.0 - 3.0),
        ("64/4/2", 64.0 / 4.0 / 2.0),
        ("2*3/4", 2.0 * 3.0 / 4.0),
        ("7/2+1.25", 7.0 / 2.0 + 1.25),
        ("-(3-8)/5", -(3.0 - 8.0) / 5.0),
        ("1.5*(2-0.5)/3", 1.5 * (2.0 - 0.5) / 3.0),
    ];

    for (expr, v) in cas {
        let attendu = if v.fract() == 0.0 {
            format!("{}", v as i64)
        } else {
            six(v)
        };
        assert_affiche(expr, &attendu);
    }
}

/* ------------------------ Trig (degrés) ------------------------ */

#[test]
fn sci_symetries_trig() {
    // sin(-x) = -sin(x), cos(-x) = cos(x)
    for a in [15, 30, 45, 60, 75, 120] {
        assert_eq!(
            eval_ok(&format!("sin(-{a})")),
            six(-(a as f64).to_radians().sin())
        );
        assert_eq!(
            eval_ok(&format!("cos(-{a})")),
            eval_ok(&format!("cos({a})"))
        );
    }
}

#[test]
fn sci_periodicite_exacte() {
    // la réduction modulo 360 est exacte : mêmes affichages
    for a in [10, 30, 45, 89, 135] {
        assert_eq!(
            eval_ok(&format!("sin({a}+720)")),
            eval_ok(&format!("sin({a})")),
            "a={a}"
        );
        assert_eq!(
            eval_ok(&format!("cos({a}-360)")),
            eval_ok(&format!("cos({a})")),
            "a={a}"
        );
    }
}

#[test]
fn sci_quarts_de_tour_sans_bruit() {
    assert_affiche("sin(180)", "0.000000");
    assert_affiche("sin(-180)", "0.000000");
    assert_affiche("cos(90)", "0.000000");
    assert_affiche("cos(270)", "0.000000");
    assert_affiche("tan(180)", "0.000000");
    assert_affiche("sin(3600090)", "1.000000");
}

#[test]
fn sci_tan_indefini() {
    for a in ["90", "270", "-90", "90+180*7"] {
        let expr = format!("tan({a})");
        assert!(
            matches!(evaluer_detail(&expr), Err(ErreurEval::ResultatNonReel(_))),
            "expr={expr:?}"
        );
        assert_erreur_affichee(&expr);
    }
}

#[test]
fn sci_imbrication_resolue() {
    // l’argument complet est converti, appels imbriqués compris
    assert_affiche("sin(30+cos(60))", &six((30.0 + 60f64.to_radians().cos()).to_radians().sin()));
    assert_affiche("cos(2*(45+45))", "-1.000000");
    assert_affiche("sin((90))", "1.000000");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn sci_historique_idempotent_et_ordonne() {
    let mut h = Historique::new();
    let exprs = ["1+1", "5/0", "2*3", "", "10/4", "sin(90)", "((2)", "7-9", "π"];

    for e in exprs {
        h.enregistrer(&evaluer(e));
    }

    assert_eq!(h.len(), 6);
    assert_eq!(
        h.derniers(LIGNES_AFFICHEES),
        [
            "2*3 = 6",
            "10/4 = 2.500000",
            "sin(90) = 1.000000",
            "7-9 = -2",
            "π = 3.141593",
        ]
    );

    // lire l’historique ne le modifie pas
    let avant = h.derniers(LIGNES_AFFICHEES).to_vec();
    let _ = h.derniers(2);
    assert_eq!(h.derniers(LIGNES_AFFICHEES), avant.as_slice());
}

/* ------------------------ Limites contrôlées ------------------------ */

#[test]
fn sci_longues_sommes_sans_limite_de_longueur() {
    // Longueur non bornée : une chaîne plate ne descend pas dans la pile.
    assert_affiche(&format!("1{}", "+1".repeat(100_000)), "100001");
    assert_affiche(&format!("0{}", "+1-1".repeat(50_000)), "0");
    assert_affiche(&vec!["0.5"; 2000].join("+"), "1000");

    let detail = evaluer_detail(&format!("2{}", "*1".repeat(100_000))).unwrap();
    assert_eq!(detail.affichage, "2");
}

#[test]
fn sci_imbrication_excessive_refusee() {
    let expr = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert!(matches!(
        evaluer_detail(&expr),
        Err(ErreurEval::ExpressionInvalide(_))
    ));
}

#[test]
fn sci_grands_entiers_exacts() {
    assert_affiche("99999999999*99999999999", "9999999999800000000001");
}
