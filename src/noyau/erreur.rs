//! Erreurs du noyau.
//!
//! Toutes récupérables : ce sont des validations d’entrée, jamais des pannes.
//! Le variant porte le genre, `Display` porte le message affiché à l’utilisateur.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro impossible")]
    DivisionParZero,

    #[error("modulo : le diviseur b ne peut pas être 0")]
    ModuloParZero,

    #[error("logarithme : l’argument a doit être strictement positif")]
    ArgumentLogInvalide,

    #[error("logarithme : la base b doit être > 0 et différente de 1")]
    BaseLogInvalide,

    #[error("modulo : opérande non fini (NaN ou infini), troncature impossible")]
    OperandeNonFini,

    #[error("opération inconnue : {0:?}")]
    OperationInconnue(String),

    #[error("intervalle invalide : x min ({x_min}) doit être < x max ({x_max})")]
    IntervalleInvalide { x_min: f64, x_max: f64 },
}

impl ErreurCalcul {
    pub fn operation_inconnue(texte: impl Into<String>) -> Self {
        Self::OperationInconnue(texte.into())
    }
}

pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;
