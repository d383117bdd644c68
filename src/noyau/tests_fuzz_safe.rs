//! Tests fuzz safe : déterminisme + invariants, sans faire chauffer la machine.
//!
//! - RNG déterministe (seed fixe)
//! - nombre d’itérations borné + budget temps global
//! - erreurs attendues : uniquement celles que les entrées générées peuvent provoquer
//! - invariant clé : deux appels identiques => sorties identiques (bit à bit)

use std::time::{Duration, Instant};

use super::arith::evaluer;
use super::erreur::ErreurCalcul;
use super::nombre::Valeur;
use super::operation::Operation;
use super::polynome::{echantillonner_polynome, formater_polynome};

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
    /// Réel "humain" : entier ou demi-entier dans [-50, 50], zéro inclus.
    fn nombre(&mut self) -> f64 {
        let n = self.pick(201) as f64 - 100.0;
        n / 2.0
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// Égalité bit à bit (NaN == NaN ici).
fn meme_valeur(a: &Valeur, b: &Valeur) -> bool {
    match (a, b) {
        (Valeur::Reel(x), Valeur::Reel(y)) => x.to_bits() == y.to_bits(),
        (Valeur::Entier(x), Valeur::Entier(y)) => x == y,
        _ => false,
    }
}

fn erreur_attendue(op: Operation, e: &ErreurCalcul) -> bool {
    matches!(
        (op, e),
        (Operation::Division, ErreurCalcul::DivisionParZero)
            | (Operation::Modulo, ErreurCalcul::ModuloParZero)
            | (Operation::Logarithme, ErreurCalcul::ArgumentLogInvalide)
            | (Operation::Logarithme, ErreurCalcul::BaseLogInvalide)
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_division_exacte() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..500 {
        budget(t0, max);
        let a = rng.nombre();
        let b = rng.nombre();

        match evaluer(a, b, Operation::Division) {
            Ok(r) => {
                assert_ne!(b, 0.0);
                assert!(meme_valeur(&r.valeur, &Valeur::Reel(a / b)), "a={a} b={b}");
            }
            Err(e) => {
                assert_eq!(b, 0.0, "a={a} b={b} err={e}");
                assert_eq!(e, ErreurCalcul::DivisionParZero);
            }
        }
    }
}

#[test]
fn fuzz_safe_determinisme_toutes_operations() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);
        let op = Operation::TOUTES[rng.pick(7) as usize];
        let a = rng.nombre();
        let b = rng.nombre();

        match (evaluer(a, b, op), evaluer(a, b, op)) {
            (Ok(r1), Ok(r2)) => {
                assert!(meme_valeur(&r1.valeur, &r2.valeur), "op={op:?} a={a} b={b}");
                assert_eq!(r1.expression, r2.expression);
                vus_ok += 1;
            }
            (Err(e1), Err(e2)) => {
                assert_eq!(e1, e2);
                assert!(erreur_attendue(op, &e1), "op={op:?} a={a} b={b} err={e1}");
                vus_err += 1;
            }
            (r1, r2) => panic!("non déterministe: {r1:?} / {r2:?}"),
        }
    }

    // un mix des deux, sinon le fuzz ne balaye rien
    assert!(vus_ok > 100, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_modulo_signe_du_diviseur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);
        let a = rng.nombre();
        let b = rng.nombre();

        let Ok(r) = evaluer(a, b, Operation::Modulo) else {
            assert_eq!(b.trunc(), 0.0);
            continue;
        };
        let reste = r.valeur.en_f64();
        let ib = b.trunc();
        let ia = a.trunc();

        // |reste| < |b| et même signe que b (ou nul)
        assert!(reste.abs() < ib.abs(), "a={a} b={b} reste={reste}");
        assert!(reste == 0.0 || reste.signum() == ib.signum(), "a={a} b={b}");
        // a = q*b + reste, q entier
        let q = (ia - reste) / ib;
        assert_eq!(q, q.trunc(), "a={a} b={b}");
    }
}

#[test]
fn fuzz_safe_echantillons_et_affichage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..60 {
        budget(t0, max);

        let degre = 1 + rng.pick(5) as usize;
        let coeffs: Vec<f64> = (0..=degre).map(|_| rng.nombre()).collect();
        let x_min = rng.nombre();
        let x_max = rng.nombre();

        // affichage : déterministe, jamais vide
        let s = formater_polynome(&coeffs);
        assert_eq!(s, formater_polynome(&coeffs));
        assert!(!s.is_empty());

        match echantillonner_polynome(&coeffs, x_min, x_max, 64) {
            Ok(pts) => {
                assert!(x_min < x_max);
                assert_eq!(pts.len(), 64);
                assert_eq!(pts[0].x, x_min);
                assert_eq!(pts[63].x, x_max);
                assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
            }
            Err(e) => {
                assert!(x_min >= x_max);
                assert!(matches!(e, ErreurCalcul::IntervalleInvalide { .. }));
            }
        }
    }
}
