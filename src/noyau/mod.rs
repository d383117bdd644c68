//! Noyau pur (sans UI)
//!
//! Organisation interne :
//! - erreur.rs    : ErreurCalcul (genres + messages)
//! - nombre.rs    : affichage court des nombres + Valeur (réel / entier exact)
//! - operation.rs : enum Operation + libellés de la vue
//! - arith.rs     : calculatrice à deux opérandes
//! - polynome.rs  : affichage lisible + Horner + échantillonnage

pub mod arith;
pub mod erreur;
pub mod nombre;
pub mod operation;
pub mod polynome;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use arith::evaluer;
pub use operation::Operation;
pub use polynome::{echantillonner_polynome, formater_polynome, PointEchantillon, ECHANTILLONS_DEFAUT};
