// src/app/clavier.rs
//
// Écouteur clavier global : événements egui -> noms de touches DOM -> Commande.
// - texte tapé : un nom par caractère ("7", "+", "c")
// - Enter / Backspace : touches pressées (répétition comprise)

use eframe::egui;

use crate::noyau::Commande;

/// Nom DOM des touches non textuelles utiles.
pub fn nom_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("Enter"),
        egui::Key::Backspace => Some("Backspace"),
        _ => None,
    }
}

/// Commandes produites par les événements d’une frame, dans l’ordre.
pub fn commandes(events: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                for c in texte.chars() {
                    if let Some(cmd) = Commande::depuis_touche(c.encode_utf8(&mut [0; 4])) {
                        out.push(cmd);
                    }
                }
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                if let Some(cmd) = nom_touche(*key).and_then(Commande::depuis_touche) {
                    out.push(cmd);
                }
            }
            _ => {}
        }
    }

    out
}
