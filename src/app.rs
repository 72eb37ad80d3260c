// src/app.rs
//
// Calculatrice animée — module App (racine)
// -----------------------------------------
//
// Rôle:
// - Déclarer les sous-modules (état, vue, décor)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).
// - Cadence : pleine pendant une animation courte, sinon un pas de particules.

pub mod animation;
pub mod clavier;
pub mod etat;
pub mod particules;
pub mod themes;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // ESC = effacer l’entrée (comme "C"), jamais fermer la fenêtre.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree(maintenant);
            self.focus_entree = true;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.ui(ui);
            });

        // Les particules tombent en continu : une frame par pas suffit,
        // les animations courtes (touches, résultat) demandent la cadence pleine.
        if self.anime(maintenant) {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_secs_f64(particules::TICK));
        }
    }
}

impl AppCalc {
    fn anime(&self, maintenant: f64) -> bool {
        let depuis = [
            self.edition_depuis,
            self.pression.map(|(_, t)| t),
            self.message.as_ref().map(|m| m.depuis),
        ];
        depuis
            .into_iter()
            .flatten()
            .any(|t| animation::en_cours((maintenant - t) as f32))
    }
}
