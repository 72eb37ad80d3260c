// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Fond peint à la main (deux bandes + particules), pas de widgets décoratifs
// - Clavier : Enter évalue (quand le champ est focus)
// - Pavé dessiné via Painter (couleur par rôle, échelle animée à l’appui)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Le temps vient de `ui.input(|i| i.time)` : l’état reste testable sans egui.

use eframe::egui::{
    self, vec2, Align2, Color32, CornerRadius, FontId, Painter, Rect, Sense, Stroke,
};

use super::animation::{apparition_resultat, echelle_pression, police_entree};
use super::clavier::{COLONNES, TOUCHES};
use super::etat::{AppCalc, Ton};
use super::themes::{Theme, COULEUR_ERREUR};

const SIGNATURE: &str = "Developer: Lütfü Karakeçili 2025";

const MARGE: f32 = 15.0;
const ESPACE_TOUCHES: f32 = 10.0;
const HAUTEUR_ENTREE: f32 = 64.0;
const HAUTEUR_RESULTAT: f32 = 120.0;
const POLICE_RESULTAT: f32 = 28.0;

/// Au-delà d’une ligne (historique), le résultat passe en plus petit.
const POLICE_RESULTAT_LIGNES: f32 = 18.0;

/// Blanc à 5 % d’opacité.
const COULEUR_PARTICULE: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 13);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);
        let theme = *self.theme_courant();
        let zone = ui.max_rect();

        // Décor d’abord : tout le reste se dessine par-dessus.
        self.particules.rattraper(maintenant, zone.height());
        self.peindre_fond(ui.painter(), zone, &theme);

        let interieur = zone.shrink(MARGE);
        let mut ui = ui.new_child(egui::UiBuilder::new().max_rect(interieur));
        ui.spacing_mut().item_spacing = vec2(ESPACE_TOUCHES, ESPACE_TOUCHES);

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(SIGNATURE)
                    .size(16.0)
                    .color(theme.texte),
            );
        });

        self.ui_entree(&mut ui, &theme, maintenant);
        self.ui_resultat(&mut ui, &theme, maintenant);
        self.ui_pave(&mut ui, &theme, maintenant);
    }

    fn peindre_fond(&self, painter: &Painter, zone: Rect, theme: &Theme) {
        painter.rect_filled(zone, CornerRadius::ZERO, theme.primaire);

        let haut = Rect::from_min_max(zone.min, egui::pos2(zone.max.x, zone.center().y));
        painter.rect_filled(haut, CornerRadius::ZERO, theme.secondaire);

        for p in &self.particules.liste {
            let r = Rect::from_min_size(
                zone.min + vec2(p.x, p.y),
                vec2(p.taille, p.taille),
            );
            painter.rect_filled(r, CornerRadius::ZERO, COULEUR_PARTICULE);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, theme: &Theme, maintenant: f64) {
        let taille = match self.edition_depuis {
            Some(t0) => police_entree((maintenant - t0) as f32),
            None => police_entree(f32::INFINITY),
        };

        let champ = egui::TextEdit::singleline(&mut self.entree)
            .id_salt("entree_calc")
            .font(FontId::proportional(taille))
            .text_color(theme.texte)
            .background_color(theme.primaire)
            .horizontal_align(egui::Align::Max)
            .margin(egui::Margin::symmetric(20, 12))
            .desired_width(f32::INFINITY);

        let resp = ui.add_sized([ui.available_width(), HAUTEUR_ENTREE], champ);

        // Si on a cliqué une touche, on redonne le focus au champ
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.edition_depuis = Some(maintenant);
        }

        // --- Clavier : Enter évalue ---
        // Un TextEdit singleline rend le focus sur Enter : on accepte les deux cas.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (resp.has_focus() || resp.lost_focus()) {
            self.calculer(maintenant);
            self.focus_entree = true;
        }
    }

    fn ui_resultat(&self, ui: &mut egui::Ui, theme: &Theme, maintenant: f64) {
        let (zone, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), HAUTEUR_RESULTAT),
            Sense::hover(),
        );

        let Some(message) = &self.message else {
            return;
        };

        let (opacite, decalage) = apparition_resultat((maintenant - message.depuis) as f32);
        let couleur = match message.ton {
            Ton::Normal => theme.accent,
            Ton::Erreur => COULEUR_ERREUR,
        };
        let taille = if message.texte.contains('\n') {
            POLICE_RESULTAT_LIGNES
        } else {
            POLICE_RESULTAT
        };

        // Gras simulé : même texte repeint à +1 px.
        let painter = ui.painter_at(zone);
        let centre = zone.center() + vec2(0.0, decalage);
        for dx in [0.0, 1.0] {
            painter.text(
                centre + vec2(dx, 0.0),
                Align2::CENTER_CENTER,
                &message.texte,
                FontId::proportional(taille),
                couleur.gamma_multiply(opacite),
            );
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, theme: &Theme, maintenant: f64) {
        let lignes = TOUCHES.len().div_ceil(COLONNES);
        let largeur =
            (ui.available_width() - ESPACE_TOUCHES * (COLONNES - 1) as f32) / COLONNES as f32;
        let hauteur = ((ui.available_height() - ESPACE_TOUCHES * (lignes - 1) as f32)
            / lignes as f32)
            .max(24.0);

        let mut clic = None;

        for (l, rangee) in TOUCHES.chunks(COLONNES).enumerate() {
            ui.horizontal(|ui| {
                for (c, touche) in rangee.iter().enumerate() {
                    let index = l * COLONNES + c;
                    let (rect, resp) =
                        ui.allocate_exact_size(vec2(largeur, hauteur), Sense::click());

                    let echelle = match self.pression {
                        Some((i, t0)) if i == index => {
                            echelle_pression((maintenant - t0) as f32)
                        }
                        _ => 1.0,
                    };
                    let rect = Rect::from_center_size(rect.center(), rect.size() * echelle);

                    let painter = ui.painter();
                    painter.rect_filled(rect, CornerRadius::same(8), theme.couleur(touche.role));
                    painter.rect_stroke(
                        rect,
                        CornerRadius::same(8),
                        Stroke::new(1.0, theme.primaire),
                        egui::StrokeKind::Inside,
                    );
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        touche.libelle,
                        FontId::proportional(taille_libelle(touche.libelle) * echelle),
                        theme.texte,
                    );

                    if resp.clicked() {
                        clic = Some((index, touche.action));
                    }
                }
            });
        }

        if let Some((index, action)) = clic {
            self.presser(index, maintenant);
            self.appliquer(action, maintenant);
        }
    }
}

/// Libellés longs ("History", "Themes") en plus petit.
fn taille_libelle(libelle: &str) -> f32 {
    if libelle.chars().count() > 3 {
        16.0
    } else {
        22.0
    }
}
