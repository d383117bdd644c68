//! Noyau — calculatrice à deux opérandes.
//!
//! `evaluer(a, b, op)` : un seul `match` exhaustif sur l’opération.
//! Aucun effet de bord, les erreurs sont des valeurs (ErreurCalcul).
//!
//! Modulo : convention PLANCHER (le reste prend le signe du diviseur).
//!   7 mod 3 = 1 ; -7 mod 3 = 2 ; 7 mod -3 = -2 ; -7 mod -3 = -1
//! Les opérandes sont d’abord tronqués vers zéro en entiers exacts (BigInt),
//! donc pas de saturation pour les grands flottants.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, Zero};

use super::erreur::{ErreurCalcul, Resultat as Res};
use super::nombre::{formater_nombre, Valeur};
use super::operation::Operation;

/// Résultat d’un calcul réussi : valeur + expression lisible.
#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub valeur: Valeur,
    pub expression: String,
}

impl Resultat {
    fn reel(valeur: f64, expression: String) -> Self {
        Self {
            valeur: Valeur::Reel(valeur),
            expression,
        }
    }
}

/// API publique : calcule `a op b`.
pub fn evaluer(a: f64, b: f64, op: Operation) -> Res<Resultat> {
    let sa = formater_nombre(a);
    let sb = formater_nombre(b);

    let r = match op {
        Operation::Addition => Resultat::reel(a + b, format!("{sa} + {sb}")),
        Operation::Soustraction => Resultat::reel(a - b, format!("{sa} - {sb}")),
        Operation::Multiplication => Resultat::reel(a * b, format!("{sa} × {sb}")),

        Operation::Division => {
            // -0.0 == 0.0 : les deux zéros sont refusés
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Resultat::reel(a / b, format!("{sa} ÷ {sb}"))
        }

        Operation::Modulo => {
            let ia = tronquer(a)?;
            let ib = tronquer(b)?;
            if ib.is_zero() {
                return Err(ErreurCalcul::ModuloParZero);
            }
            let expression = format!("{ia} mod {ib}");
            Resultat {
                valeur: Valeur::Entier(modulo_plancher(&ia, &ib)),
                expression,
            }
        }

        // Pas de restriction de domaine : (-8)^(1/3) donne NaN, accepté.
        Operation::Puissance => Resultat::reel(a.powf(b), format!("{sa}^{sb}")),

        Operation::Logarithme => {
            if a.is_nan() || a <= 0.0 {
                return Err(ErreurCalcul::ArgumentLogInvalide);
            }
            if b.is_nan() || b <= 0.0 || b == 1.0 {
                return Err(ErreurCalcul::BaseLogInvalide);
            }
            Resultat::reel(a.ln() / b.ln(), format!("log_{sb}({sa})"))
        }
    };

    Ok(r)
}

/// Troncature vers zéro, en entier exact.
fn tronquer(v: f64) -> Res<BigInt> {
    if !v.is_finite() {
        return Err(ErreurCalcul::OperandeNonFini);
    }
    BigInt::from_f64(v.trunc()).ok_or(ErreurCalcul::OperandeNonFini)
}

/// Reste plancher : même signe que `b` (ou nul). `b` non nul.
fn modulo_plancher(a: &BigInt, b: &BigInt) -> BigInt {
    let r = a % b;
    if !r.is_zero() && r.is_negative() != b.is_negative() {
        r + b
    } else {
        r
    }
}
