// src/config.rs
//
// Réglages de l’application (fichier TOML optionnel).
// ---------------------------------------------------
// - NATIF : <config_dir>/calculatrice-poly/config.toml (absent => valeurs par défaut)
// - WEB   : pas de fichier, valeurs par défaut
//
// Exemple :
//   echantillons = 400
//   x_min = -10.0
//   x_max = 10.0
//   degre = 2
//   operation = "addition"
//   niveau_journal = "info"
//
// Une valeur hors bornes ne bloque jamais le démarrage : `valider()` la remplace
// par la valeur par défaut (avec un warn).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::{Operation, ECHANTILLONS_DEFAUT};

/// Degrés proposés dans le sélecteur.
pub const DEGRES: [usize; 3] = [1, 2, 3];

/// Au-delà, le tracé allouerait sans limite utile.
pub const ECHANTILLONS_MAX: usize = 100_000;

const DEGRE_DEFAUT: usize = 2;
const X_MIN_DEFAUT: f64 = -10.0;
const X_MAX_DEFAUT: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin} impossible : {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config TOML invalide : {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Points du graphe (2..=ECHANTILLONS_MAX).
    pub echantillons: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Degré proposé au démarrage (1..=3).
    pub degre: usize,
    /// Nom court de l’opération sélectionnée au démarrage.
    pub operation: String,
    pub niveau_journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echantillons: ECHANTILLONS_DEFAUT,
            x_min: X_MIN_DEFAUT,
            x_max: X_MAX_DEFAUT,
            degre: DEGRE_DEFAUT,
            operation: Operation::Addition.nom().to_string(),
            niveau_journal: "info".to_string(),
        }
    }
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }

    /// Fichier absent => défaut. Fichier illisible ou invalide => erreur.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        if !chemin.exists() {
            tracing::debug!(chemin = %chemin.display(), "pas de fichier de config");
            return Ok(Self::default());
        }

        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    /// Charge le fichier de l’emplacement standard (natif seulement).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger_standard() -> Result<Self, ErreurConfig> {
        match dirs::config_dir() {
            Some(dir) => Self::charger(&dir.join("calculatrice-poly").join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Garde-fous : remplace chaque valeur incohérente par son défaut.
    pub fn valider(mut self) -> Self {
        let defaut = Self::default();

        if !(2..=ECHANTILLONS_MAX).contains(&self.echantillons) {
            tracing::warn!(
                echantillons = self.echantillons,
                max = ECHANTILLONS_MAX,
                "nombre d’échantillons hors bornes, défaut utilisé"
            );
            self.echantillons = defaut.echantillons;
        }

        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max) {
            tracing::warn!(x_min = self.x_min, x_max = self.x_max, "intervalle invalide, défaut utilisé");
            self.x_min = defaut.x_min;
            self.x_max = defaut.x_max;
        }

        if !DEGRES.contains(&self.degre) {
            tracing::warn!(degre = self.degre, "degré hors sélecteur, défaut utilisé");
            self.degre = defaut.degre;
        }

        if let Err(e) = self.operation.parse::<Operation>() {
            tracing::warn!(erreur = %e, "opération de démarrage ignorée");
            self.operation = defaut.operation;
        }

        self
    }

    /// Opération de démarrage (déjà validée par `valider`).
    pub fn operation_initiale(&self) -> Operation {
        self.operation.parse().unwrap_or(Operation::Addition)
    }
}
