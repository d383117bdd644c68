//! Tests scientifiques (campagne) : identités mathématiques + cohérence entre modules.
//!
//! Tolérances explicites : on compare des f64, pas des réels exacts.

use super::arith::evaluer;
use super::nombre::Valeur;
use super::operation::Operation;
use super::polynome::{echantillonner_polynome, evaluer_polynome, formater_polynome};

fn val(a: f64, b: f64, op: Operation) -> f64 {
    evaluer(a, b, op)
        .unwrap_or_else(|e| panic!("evaluer({a}, {b}, {op:?}) err={e}"))
        .valeur
        .en_f64()
}

fn proche(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + b.abs())
}

/* ------------------------ Calculatrice ------------------------ */

#[test]
fn sci_commutativite() {
    for (a, b) in [(1.5, 2.0), (-3.0, 7.25), (0.0, -4.0)] {
        assert_eq!(val(a, b, Operation::Addition), val(b, a, Operation::Addition));
        assert_eq!(
            val(a, b, Operation::Multiplication),
            val(b, a, Operation::Multiplication)
        );
        assert_eq!(
            val(a, b, Operation::Soustraction),
            -val(b, a, Operation::Soustraction)
        );
    }
}

#[test]
fn sci_log_inverse_puissance() {
    // log_b(b^k) = k
    for b in [2.0, 3.0, 10.0, 0.5] {
        for k in [-3.0, -1.0, 0.5, 2.0, 7.0] {
            let p = val(b, k, Operation::Puissance);
            let l = val(p, b, Operation::Logarithme);
            assert!(proche(l, k, 1e-12), "b={b} k={k} l={l}");
        }
    }
}

#[test]
fn sci_log_changement_de_base() {
    // log_b(a) = log_c(a) / log_c(b)
    let a = 42.0;
    let b = 5.0;
    let direct = val(a, b, Operation::Logarithme);
    let via_10 = val(a, 10.0, Operation::Logarithme) / val(b, 10.0, Operation::Logarithme);
    assert!(proche(direct, via_10, 1e-12));
}

#[test]
fn sci_division_multiplication() {
    for (a, b) in [(10.0, 4.0), (-7.5, 3.0), (1e10, 1e-10)] {
        let q = val(a, b, Operation::Division);
        let m = val(q, b, Operation::Multiplication);
        assert!(proche(m, a, 1e-12), "a={a} b={b}");
    }
}

#[test]
fn sci_modulo_est_entier() {
    let r = evaluer(17.0, 5.0, Operation::Modulo).unwrap();
    assert!(matches!(r.valeur, Valeur::Entier(_)));
    assert_eq!(r.valeur.to_string(), "2");
    assert_eq!(r.expression, "17 mod 5");
}

/* ------------------------ Polynômes ------------------------ */

#[test]
fn sci_affichage_et_echantillons_coherents() {
    // f(x) = 2x^3 - x + 0.5
    let coeffs = [2.0, 0.0, -1.0, 0.5];
    assert_eq!(formater_polynome(&coeffs), "2x^3 - x + 0.5");

    let pts = echantillonner_polynome(&coeffs, -2.0, 2.0, 9).unwrap();
    for p in &pts {
        let attendu = 2.0 * p.x.powi(3) - p.x + 0.5;
        assert!(proche(p.y, attendu, 1e-12), "x={} y={}", p.x, p.y);
    }
    // x = 0 est un échantillon (pas de 0.5) : f(0) = 0.5
    assert_eq!(pts[4].x, 0.0);
    assert_eq!(pts[4].y, 0.5);
}

#[test]
fn sci_racines_droite() {
    // 2x + 3 s’annule en -1.5
    assert_eq!(evaluer_polynome(&[2.0, 3.0], -1.5), 0.0);
    // x^2 - 1 s’annule en ±1
    assert_eq!(evaluer_polynome(&[1.0, 0.0, -1.0], 1.0), 0.0);
    assert_eq!(evaluer_polynome(&[1.0, 0.0, -1.0], -1.0), 0.0);
}

#[test]
fn sci_symetrie_parabole() {
    let pts = echantillonner_polynome(&[1.0, 0.0, 0.0], -10.0, 10.0, 400).unwrap();
    // grille symétrique : y(i) ≈ y(n-1-i)
    for i in 0..200 {
        let a = pts[i].y;
        let b = pts[399 - i].y;
        assert!(proche(a, b, 1e-9), "i={i} a={a} b={b}");
    }
}
