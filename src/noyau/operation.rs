//! Opérations de la calculatrice.
//!
//! Le noyau ne connaît que l’enum. Les libellés affichés (français) ne servent
//! qu’à la vue ; le nom court (`nom()` / `FromStr`) sert à la config et aux journaux.

use std::str::FromStr;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
    Logarithme,
}

impl Operation {
    /// Ordre d’affichage dans le sélecteur.
    pub const TOUTES: [Operation; 7] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulo,
        Operation::Puissance,
        Operation::Logarithme,
    ];

    /// Libellé du sélecteur (vue uniquement).
    pub fn libelle(self) -> &'static str {
        match self {
            Operation::Addition => "Addition (a + b)",
            Operation::Soustraction => "Soustraction (a - b)",
            Operation::Multiplication => "Multiplication (a × b)",
            Operation::Division => "Division (a ÷ b)",
            Operation::Modulo => "Modulo (a mod b)",
            Operation::Puissance => "Puissance (a^b)",
            Operation::Logarithme => "Logarithme (log_b(a))",
        }
    }

    /// Nom court stable (config, journaux).
    pub fn nom(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Soustraction => "soustraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Modulo => "modulo",
            Operation::Puissance => "puissance",
            Operation::Logarithme => "logarithme",
        }
    }
}

impl FromStr for Operation {
    type Err = ErreurCalcul;

    /// Nom court, sans casse ni espaces autour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cle = s.trim().to_lowercase();
        Self::TOUTES
            .into_iter()
            .find(|op| op.nom() == cle)
            .ok_or_else(|| ErreurCalcul::operation_inconnue(s))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.libelle())
    }
}
