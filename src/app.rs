// src/app.rs
//
// Calculette : module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, clavier, retour)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est global : aucun champ de texte, donc pas de double déclenchement.
// - Le retour visuel demande des repaints tant qu’il est actif, puis s’arrête.

pub mod clavier;
pub mod etat;
pub mod retour;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // Clavier : chaque touche est appliquée entièrement, dans l’ordre.
        let commandes = ctx.input(|i| clavier::commandes(&i.events));
        for commande in commandes {
            self.executer(commande, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant); // méthode publique (dans vue.rs)
        });

        if self.retour.est_actif() {
            ctx.request_repaint();
        }
    }
}
