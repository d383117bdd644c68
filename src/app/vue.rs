// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux onglets :
// - Calculatrice : opération + a + b, bouton "Calculer"
// - Graphe       : degré + coefficients + intervalle x, bouton "Tracer"
//
// Les libellés des opérations restent ici (Operation::libelle) : le noyau ne
// reçoit que l’enum.

use eframe::egui;

use super::etat::{AppCalc, Onglet};
use super::trace;
use crate::config::DEGRES;
use crate::noyau::{self, Operation};

const VERT_OK: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);

/// Libellés + aides des deux champs, selon l’opération.
pub fn libelles_operandes(op: Operation) -> [(&'static str, Option<&'static str>); 2] {
    match op {
        Operation::Logarithme => [
            (
                "Argument a (a > 0)",
                Some("Valeur dont on prend le logarithme. Doit être strictement positive."),
            ),
            (
                "Base b (b > 0, b ≠ 1)",
                Some("Base du logarithme. Strictement positive et différente de 1."),
            ),
        ],
        Operation::Modulo => [
            (
                "Dividende a (entier)",
                Some("Nombre divisé. Tronqué vers zéro en entier."),
            ),
            (
                "Diviseur b (entier, non nul)",
                Some("Tronqué vers zéro en entier ; ne doit pas valoir 0. Le reste a le signe de b."),
            ),
        ],
        _ => [("Premier nombre a", None), ("Second nombre b", None)],
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice multifonction");
                ui.label(
                    "Quatre opérations, modulo, puissance et logarithme, \
                     plus le graphe d’un polynôme simple.",
                );

                ui.add_space(6.0);
                ui.separator();

                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.onglet, Onglet::Calculatrice, "Calculatrice");
                    ui.selectable_value(&mut self.onglet, Onglet::Graphe, "Graphe d’un polynôme");
                });

                ui.separator();
                ui.add_space(6.0);

                match self.onglet {
                    Onglet::Calculatrice => self.ui_calculatrice(ui),
                    Onglet::Graphe => self.ui_graphe(ui),
                }
            });
    }

    /* ------------------------ Onglet calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.label("Choisissez l’opération :");
        egui::ComboBox::from_id_salt("operation_select")
            .selected_text(self.calcul.operation.libelle())
            .width(260.0)
            .show_ui(ui, |ui| {
                for op in Operation::TOUTES {
                    ui.selectable_value(&mut self.calcul.operation, op, op.libelle());
                }
            });

        ui.add_space(6.0);

        let [(label_a, aide_a), (label_b, aide_b)] = libelles_operandes(self.calcul.operation);

        egui::Grid::new("operandes_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                Self::champ_nombre(ui, label_a, aide_a, &mut self.calcul.a);
                ui.end_row();
                Self::champ_nombre(ui, label_b, aide_b, &mut self.calcul.b);
                ui.end_row();
            });

        ui.add_space(6.0);

        if ui.add_sized([110.0, 30.0], egui::Button::new("Calculer")).clicked() {
            self.calculer();
        }

        ui.add_space(6.0);

        if !self.calcul.sortie.is_empty() {
            ui.colored_label(VERT_OK, egui::RichText::new(&self.calcul.sortie).strong());
        }
        if !self.calcul.erreur.is_empty() {
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("Erreur de calcul : {}", self.calcul.erreur),
            );
        }
    }

    /// Évalue via le noyau puis dépose le texte (ou l’erreur) dans l’état.
    pub(crate) fn calculer(&mut self) {
        let (op, a, b) = (self.calcul.operation, self.calcul.a, self.calcul.b);

        match noyau::evaluer(a, b, op) {
            Ok(r) => {
                tracing::debug!(operation = op.nom(), valeur = r.valeur.en_f64(), "calcul");
                self.calcul
                    .set_sortie(format!("Résultat : {} = {}", r.expression, r.valeur));
            }
            Err(e) => {
                tracing::info!(operation = op.nom(), a, b, erreur = %e, "calcul refusé");
                self.calcul.set_erreur(e.to_string());
            }
        }
    }

    /* ------------------------ Onglet graphe ------------------------ */

    fn ui_graphe(&mut self, ui: &mut egui::Ui) {
        ui.label("Coefficients de f(x) = a_n x^n + … + a_1 x + a_0");

        let mut degre = self.graphe.degre;
        ui.horizontal(|ui| {
            ui.label("Degré :");
            egui::ComboBox::from_id_salt("degre_select")
                .selected_text(degre.to_string())
                .show_ui(ui, |ui| {
                    for d in DEGRES {
                        ui.selectable_value(&mut degre, d, d.to_string());
                    }
                });
        });
        self.graphe.set_degre(degre);

        ui.add_space(4.0);

        let degre = self.graphe.degre;
        egui::Grid::new("coeffs_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (i, c) in self.graphe.coeffs.iter_mut().enumerate() {
                    let p = degre - i;
                    Self::champ_nombre(ui, &format!("a{p} (coefficient de x^{p})"), None, c);
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        ui.label("Intervalle de x :");
        egui::Grid::new("intervalle_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                Self::champ_nombre(ui, "x min", None, &mut self.graphe.x_min);
                ui.end_row();
                Self::champ_nombre(ui, "x max", None, &mut self.graphe.x_max);
                ui.end_row();
            });

        ui.add_space(6.0);

        if ui.add_sized([110.0, 30.0], egui::Button::new("Tracer")).clicked() {
            self.tracer();
        }

        if !self.graphe.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.graphe.erreur);
        }

        if !self.graphe.points.is_empty() {
            ui.add_space(6.0);
            ui.monospace(format!("f(x) = {}", self.graphe.expression));
            ui.add_space(4.0);
            trace::dessiner(ui, &self.graphe.points);
        }
    }

    /// Valide l’intervalle, échantillonne, formate ; erreur => rien à tracer.
    pub(crate) fn tracer(&mut self) {
        let g = &self.graphe;

        match noyau::echantillonner_polynome(&g.coeffs, g.x_min, g.x_max, g.echantillons) {
            Ok(points) => {
                let expression = noyau::formater_polynome(&g.coeffs);
                tracing::debug!(%expression, points = points.len(), "graphe");
                self.graphe.set_courbe(expression, points);
            }
            Err(e) => {
                tracing::info!(erreur = %e, "graphe refusé");
                self.graphe.set_erreur(e.to_string());
            }
        }
    }

    /* ------------------------ Widgets ------------------------ */

    fn champ_nombre(ui: &mut egui::Ui, label: &str, aide: Option<&str>, valeur: &mut f64) {
        let resp = ui.label(label);
        if let Some(aide) = aide {
            resp.on_hover_text(aide);
        }
        ui.add(egui::DragValue::new(valeur).speed(0.1).max_decimals(6));
    }
}
