//! src/app/etat.rs
//!
//! État UI (sans vue, sans calcul).
//!
//! Rôle : contenir l’état des deux onglets (calculatrice + graphe) et offrir des
//! opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau est appelé par vue.rs).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou : le degré reste dans le sélecteur (1..=3).

use crate::config::{Config, DEGRES};
use crate::noyau::{Operation, PointEchantillon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Onglet {
    #[default]
    Calculatrice,
    Graphe,
}

#[derive(Clone, Debug)]
pub struct EtatCalcul {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,

    pub sortie: String, // "Résultat : 7 ÷ 2 = 3.5"
    pub erreur: String,
}

#[derive(Clone, Debug)]
pub struct EtatGraphe {
    pub degre: usize,
    /// Du plus haut degré au plus bas, longueur degre + 1.
    pub coeffs: Vec<f64>,
    pub x_min: f64,
    pub x_max: f64,
    pub echantillons: usize,

    // --- sorties ---
    pub expression: String,
    pub points: Vec<PointEchantillon>,
    pub erreur: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub onglet: Onglet,
    pub calcul: EtatCalcul,
    pub graphe: EtatGraphe,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_config(&Config::default())
    }
}

/// Coefficients par défaut : 1 pour le plus haut degré, 0 ailleurs.
fn coeffs_defaut(degre: usize) -> Vec<f64> {
    (0..=degre).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect()
}

impl AppCalc {
    pub fn depuis_config(config: &Config) -> Self {
        Self {
            onglet: Onglet::default(),
            calcul: EtatCalcul {
                operation: config.operation_initiale(),
                a: 0.0,
                b: 0.0,
                sortie: String::new(),
                erreur: String::new(),
            },
            graphe: EtatGraphe {
                degre: config.degre,
                coeffs: coeffs_defaut(config.degre),
                x_min: config.x_min,
                x_max: config.x_max,
                echantillons: config.echantillons,
                expression: String::new(),
                points: Vec::new(),
                erreur: String::new(),
            },
        }
    }

    /// ESC : efface les sorties de l’onglet visible (pas les entrées).
    pub fn effacer_onglet(&mut self) {
        match self.onglet {
            Onglet::Calculatrice => self.calcul.effacer(),
            Onglet::Graphe => self.graphe.effacer(),
        }
    }
}

impl EtatCalcul {
    pub fn effacer(&mut self) {
        self.sortie.clear();
        self.erreur.clear();
    }

    pub fn set_sortie(&mut self, texte: impl Into<String>) {
        self.erreur.clear();
        self.sortie = texte.into();
    }

    /// Une erreur remplace le résultat précédent (il ne correspond plus aux entrées).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.sortie.clear();
        self.erreur = msg.into();
    }
}

impl EtatGraphe {
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.points.clear();
        self.erreur.clear();
    }

    /// Change le degré en gardant chaque coefficient à sa puissance.
    /// Puissances nouvelles : 1 pour la plus haute, 0 sinon. Degré hors sélecteur : ignoré.
    pub fn set_degre(&mut self, degre: usize) {
        if !DEGRES.contains(&degre) || degre == self.degre {
            return;
        }

        let ancien = self.degre;
        let coeffs = (0..=degre)
            .rev()
            .map(|p| {
                if p <= ancien {
                    self.coeffs.get(ancien - p).copied().unwrap_or(0.0)
                } else if p == degre {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();

        self.degre = degre;
        self.coeffs = coeffs;
    }

    pub fn set_courbe(&mut self, expression: impl Into<String>, points: Vec<PointEchantillon>) {
        self.erreur.clear();
        self.expression = expression.into();
        self.points = points;
    }

    /// Erreur => rien à tracer.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.expression.clear();
        self.points.clear();
        self.erreur = msg.into();
    }
}
