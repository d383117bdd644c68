// src/noyau/nombre.rs
//
// Règle unique d’affichage des nombres (opérandes, résultats, coefficients).
//
// Règle retenue : plus courte écriture décimale qui relit exactement le même f64
// (ryu), sans le ".0" final. Écriture décimale pour 1e-5 <= |v| < 1e16,
// scientifique sinon : 1e20 -> "1e20", 1.5e-7 -> "1.5e-7".

use num_bigint::BigInt;

/// f64 -> texte court, aller-retour exact.
pub fn formater_nombre(v: f64) -> String {
    let mut tampon = ryu::Buffer::new();
    let brut = tampon.format(v);
    brut.strip_suffix(".0").unwrap_or(brut).to_string()
}

/// Valeur d’un calcul : réel (cas général) ou entier exact (modulo).
#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Reel(f64),
    Entier(BigInt),
}

impl Valeur {
    /// Lecture f64 (pour comparer / tracer). Un entier énorme peut devenir ±inf.
    pub fn en_f64(&self) -> f64 {
        use num_traits::ToPrimitive;

        match self {
            Valeur::Reel(v) => *v,
            Valeur::Entier(n) => n.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl std::fmt::Display for Valeur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Valeur::Reel(v) => f.write_str(&formater_nombre(*v)),
            Valeur::Entier(n) => write!(f, "{n}"),
        }
    }
}
