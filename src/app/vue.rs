// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Écran : texte du tampon ("0" si vide), cadre teinté pendant le retour visuel
// - Pavé : boutons étiquetés ; l’identifiant d’action décide de la commande,
//   le libellé est le texte ajouté (chiffres, opérateurs)
// - "Installer" : seulement quand la plateforme l’annonce

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Commande, Signal};

/// Un bouton du pavé : libellé + identifiant d’action (aucun => chiffre).
#[derive(Clone, Copy, Debug)]
pub struct Touche {
    pub libelle: &'static str,
    pub action: Option<&'static str>,
}

impl Touche {
    const fn chiffre(libelle: &'static str) -> Self {
        Self {
            libelle,
            action: None,
        }
    }

    const fn action(libelle: &'static str, action: &'static str) -> Self {
        Self {
            libelle,
            action: Some(action),
        }
    }

    pub fn commande(&self) -> Commande {
        Commande::depuis_bouton(self.action, self.libelle)
    }
}

/// Disposition du pavé (4 colonnes).
pub const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::action("C", "clear"),
        Touche::action("DEL", "back"),
        Touche::action("( )", "paren"),
        Touche::action("/", "op"),
    ],
    [
        Touche::chiffre("7"),
        Touche::chiffre("8"),
        Touche::chiffre("9"),
        Touche::action("*", "op"),
    ],
    [
        Touche::chiffre("4"),
        Touche::chiffre("5"),
        Touche::chiffre("6"),
        Touche::action("-", "op"),
    ],
    [
        Touche::chiffre("1"),
        Touche::chiffre("2"),
        Touche::chiffre("3"),
        Touche::action("+", "op"),
    ],
    [
        Touche::action("±", "neg"),
        Touche::chiffre("0"),
        Touche::action(".", "dot"),
        Touche::action("=", "equals"),
    ],
];

const COULEUR_SUCCES: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui, maintenant);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);

        if self.plateforme.bouton_installation_visible() {
            ui.add_space(8.0);
            if ui.button("Installer l’application").clicked() {
                self.plateforme.lancer_installation();
            }
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let fond = ui.visuals().extreme_bg_color;

        // Teinte qui s’estompe avec la progression de l’effet
        let (bordure, remplissage) = match self.retour.etat(maintenant) {
            Some((signal, t)) => {
                let accent = match signal {
                    Signal::Succes => COULEUR_SUCCES,
                    Signal::Erreur => ui.visuals().error_fg_color,
                };
                let intensite = 1.0 - t;
                (
                    melanger(fond, accent, intensite),
                    melanger(fond, accent, 0.25 * intensite),
                )
            }
            None => (ui.visuals().widgets.noninteractive.bg_stroke.color, fond),
        };

        egui::Frame::group(ui.style())
            .fill(remplissage)
            .stroke(egui::Stroke::new(2.0, bordure))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.controleur.affichage())
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for touche in rangee {
                        let resp = ui.add_sized(
                            [64.0, 48.0],
                            egui::Button::new(egui::RichText::new(touche.libelle).size(20.0)),
                        );
                        if resp.clicked() {
                            self.executer(touche.commande(), maintenant);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}

/// Interpolation linéaire a -> b (t dans [0, 1]).
fn melanger(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let canal = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    egui::Color32::from_rgb(canal(a.r(), b.r()), canal(a.g(), b.g()), canal(a.b(), b.b()))
}
