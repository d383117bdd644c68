// src/app/trace.rs
//
// Graphe f(x) dessiné au Painter egui (pas de dépendance de plot).
// - projection pure (testable) : points -> segments écran
// - y non fini : coupe la courbe en segments
// - axes x = 0 / y = 0 seulement s’ils tombent dans le cadre

use eframe::egui;

use crate::noyau::PointEchantillon;

const HAUTEUR: f32 = 320.0;
const COULEUR_COURBE: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);

/// Bornes des données (y sur les seules valeurs finies).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cadre {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Cadre {
    /// None si aucun point, ou aucun y fini.
    pub fn depuis_points(points: &[PointEchantillon]) -> Option<Self> {
        let premier = points.first()?;
        let dernier = points.last()?;

        let (y_min, y_max) = points
            .iter()
            .map(|p| p.y)
            .filter(|y| y.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })?;

        // courbe plate : on ouvre le cadre d’une unité de chaque côté
        let (y_min, y_max) = if y_min == y_max {
            (y_min - 1.0, y_max + 1.0)
        } else {
            (y_min, y_max)
        };

        Some(Self {
            x_min: premier.x,
            x_max: dernier.x,
            y_min,
            y_max,
        })
    }

    fn vers_ecran(&self, x: f64, y: f64, rect: egui::Rect) -> Option<egui::Pos2> {
        let lx = rect.width() as f64;
        let ly = rect.height() as f64;
        let sx = rect.left() as f64 + (x - self.x_min) / (self.x_max - self.x_min) * lx;
        let sy = rect.bottom() as f64 - (y - self.y_min) / (self.y_max - self.y_min) * ly;
        let p = egui::pos2(sx as f32, sy as f32);
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    }
}

/// Points -> segments écran. Un point non projetable ferme le segment en cours.
pub fn projeter(
    points: &[PointEchantillon],
    cadre: &Cadre,
    rect: egui::Rect,
) -> Vec<Vec<egui::Pos2>> {
    let mut segments = Vec::new();
    let mut courant: Vec<egui::Pos2> = Vec::new();

    for p in points {
        match cadre.vers_ecran(p.x, p.y, rect) {
            Some(pos) => courant.push(pos),
            None => {
                if !courant.is_empty() {
                    segments.push(std::mem::take(&mut courant));
                }
            }
        }
    }
    if !courant.is_empty() {
        segments.push(courant);
    }

    segments
}

/// Dessine la courbe sur toute la largeur disponible.
pub fn dessiner(ui: &mut egui::Ui, points: &[PointEchantillon]) {
    let taille = egui::vec2(ui.available_width(), HAUTEUR);
    let (reponse, painter) = ui.allocate_painter(taille, egui::Sense::hover());
    let rect = reponse.rect;

    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let Some(cadre) = Cadre::depuis_points(points) else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "aucune valeur finie à tracer",
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    };

    let trait_axe = egui::Stroke::new(1.5, ui.visuals().weak_text_color());

    // axe vertical x = 0
    if cadre.x_min <= 0.0 && 0.0 <= cadre.x_max {
        if let (Some(haut), Some(bas)) = (
            cadre.vers_ecran(0.0, cadre.y_max, rect),
            cadre.vers_ecran(0.0, cadre.y_min, rect),
        ) {
            painter.line_segment([haut, bas], trait_axe);
        }
    }

    // axe horizontal y = 0
    if cadre.y_min <= 0.0 && 0.0 <= cadre.y_max {
        if let (Some(g), Some(d)) = (
            cadre.vers_ecran(cadre.x_min, 0.0, rect),
            cadre.vers_ecran(cadre.x_max, 0.0, rect),
        ) {
            painter.line_segment([g, d], trait_axe);
        }
    }

    let trait_courbe = egui::Stroke::new(2.0, COULEUR_COURBE);
    for segment in projeter(points, &cadre, rect) {
        if segment.len() >= 2 {
            painter.add(egui::Shape::line(segment, trait_courbe));
        }
    }

    // bornes lisibles dans les coins
    let police = egui::FontId::monospace(11.0);
    let couleur = ui.visuals().text_color();
    let marge = egui::vec2(4.0, 2.0);
    painter.text(
        rect.left_top() + marge,
        egui::Align2::LEFT_TOP,
        format!("y max = {}", crate::noyau::nombre::formater_nombre(cadre.y_max)),
        police.clone(),
        couleur,
    );
    painter.text(
        rect.left_bottom() + egui::vec2(marge.x, -marge.y),
        egui::Align2::LEFT_BOTTOM,
        format!("y min = {}", crate::noyau::nombre::formater_nombre(cadre.y_min)),
        police.clone(),
        couleur,
    );
    painter.text(
        rect.right_bottom() - marge,
        egui::Align2::RIGHT_BOTTOM,
        format!(
            "x : [{}, {}]",
            crate::noyau::nombre::formater_nombre(cadre.x_min),
            crate::noyau::nombre::formater_nombre(cadre.x_max)
        ),
        police,
        couleur,
    );
}
