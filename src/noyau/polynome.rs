// src/noyau/polynome.rs
//
// Polynômes : affichage lisible + échantillonnage pour le graphe.
// Coefficients du plus haut degré au plus bas : [a_n, ..., a_1, a_0].

use super::erreur::{ErreurCalcul, Resultat};
use super::nombre::formater_nombre;

/// Sous ce seuil (en valeur absolue), un coefficient est considéré nul.
pub const EPSILON_COEFF: f64 = 1e-12;

/// Nombre de points du graphe par défaut.
pub const ECHANTILLONS_DEFAUT: usize = 400;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointEchantillon {
    pub x: f64,
    pub y: f64,
}

/* ------------------------ Affichage ------------------------ */

/// Texte du coefficient devant x^p. Pour p >= 1 : 1 -> "", -1 -> "-".
fn texte_coeff(a: f64, puissance: usize) -> String {
    if puissance == 0 {
        return formater_nombre(a);
    }
    if a == 1.0 {
        String::new()
    } else if a == -1.0 {
        "-".to_string()
    } else {
        formater_nombre(a)
    }
}

fn texte_variable(puissance: usize) -> String {
    match puissance {
        0 => String::new(),
        1 => "x".to_string(),
        p => format!("x^{p}"),
    }
}

/// [1, 0, -1] -> "x^2 - 1" ; [2, 3] -> "2x + 3" ; tout nul -> "0".
pub fn formater_polynome(coeffs: &[f64]) -> String {
    let degre = coeffs.len().saturating_sub(1);

    let termes = coeffs.iter().enumerate().filter_map(|(i, &a)| {
        if a.abs() < EPSILON_COEFF {
            return None;
        }
        let p = degre - i;
        Some(format!("{}{}", texte_coeff(a, p), texte_variable(p)))
    });

    let mut expr = String::new();
    for terme in termes {
        if expr.is_empty() {
            expr = terme;
        } else if let Some(reste) = terme.strip_prefix('-') {
            expr.push_str(" - ");
            expr.push_str(reste);
        } else {
            expr.push_str(" + ");
            expr.push_str(&terme);
        }
    }

    if expr.is_empty() {
        "0".to_string()
    } else {
        expr
    }
}

/* ------------------------ Évaluation + échantillonnage ------------------------ */

/// Horner : y = a_n ; y = y*x + a_k. Liste vide => 0.
pub fn evaluer_polynome(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |y, &a| y * x + a)
}

/// `nombre` points régulièrement espacés sur [x_min, x_max] (bornes incluses).
///
/// - bornes finies et x_min < x_max, sinon IntervalleInvalide (NaN, ±inf compris)
/// - 0 point => vide ; 1 point => x_min seul
/// - le dernier x vaut exactement x_max
///
/// x est interpolé sans calculer x_max - x_min, qui déborde pour ±f64::MAX.
pub fn echantillonner_polynome(
    coeffs: &[f64],
    x_min: f64,
    x_max: f64,
    nombre: usize,
) -> Resultat<Vec<PointEchantillon>> {
    if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
        return Err(ErreurCalcul::IntervalleInvalide { x_min, x_max });
    }

    let point = |x: f64| PointEchantillon {
        x,
        y: evaluer_polynome(coeffs, x),
    };

    let points = match nombre {
        0 => Vec::new(),
        1 => vec![point(x_min)],
        n => {
            let dernier = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let x = if i == n - 1 {
                        x_max
                    } else {
                        let t = i as f64 / dernier;
                        x_min * (1.0 - t) + x_max * t
                    };
                    point(x)
                })
                .collect()
        }
    };

    Ok(points)
}
