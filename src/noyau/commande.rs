// src/noyau/commande.rs
//
// Commandes de la calculatrice + normalisation des deux entrées :
// - pointeur : bouton (identifiant d’action optionnel + libellé)
// - clavier  : nom de touche façon DOM ("7", "+", "Enter", "Backspace", "c")

/// Une action utilisateur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Effacer,
    Retour,
    Parenthese,
    Point,
    Negation,
    /// Opérateur du pavé : inséré entouré d’espaces.
    Operateur(String),
    Evaluer,
    /// Libellé ajouté tel quel (chiffres, et tout bouton à l’action inconnue).
    Chiffre(String),
    /// Caractère tapé au clavier (+ - * / ( ) .), ajouté sans espaces.
    Saisie(char),
}

/// Caractères que le clavier ajoute directement.
const SAISIE_DIRECTE: &str = "+-*/().";

impl Commande {
    /// Bouton du pavé : `action` vaut clear/back/paren/dot/neg/op/equals, ou rien (chiffre).
    pub fn depuis_bouton(action: Option<&str>, libelle: &str) -> Self {
        match action {
            Some("clear") => Commande::Effacer,
            Some("back") => Commande::Retour,
            Some("paren") => Commande::Parenthese,
            Some("dot") => Commande::Point,
            Some("neg") => Commande::Negation,
            Some("op") => Commande::Operateur(libelle.to_string()),
            Some("equals") => Commande::Evaluer,
            _ => Commande::Chiffre(libelle.to_string()),
        }
    }

    /// Touche clavier. `None` : touche ignorée.
    pub fn depuis_touche(touche: &str) -> Option<Self> {
        let mut chars = touche.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Some(Commande::Chiffre(c.to_string()));
            }
            if SAISIE_DIRECTE.contains(c) {
                return Some(Commande::Saisie(c));
            }
        }

        match touche {
            "Enter" => Some(Commande::Evaluer),
            "Backspace" => Some(Commande::Retour),
            "c" | "C" => Some(Commande::Effacer),
            _ => None,
        }
    }
}
