//! Tampon d’expression : l’unique état de la calculatrice.
//!
//! Contrats :
//! - `appliquer` est une transition synchrone ; elle retourne le signal
//!   (succès/erreur) à afficher, seulement pour `Evaluer`.
//! - Aucune validation à la saisie : "3.1.4" ou des négations imbriquées
//!   sont acceptés ici et refusés (ou non) à l’évaluation.

use super::commande::Commande;
use super::eval::evaluer;
use super::format::nombre_en_texte;

/// Texte déposé dans le tampon quand l’évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Retour visuel demandé après une évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Succes,
    Erreur,
}

#[derive(Clone, Debug, Default)]
pub struct Controleur {
    texte: String,
}

impl Controleur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contenu brut du tampon.
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Ce que l’écran montre : "0" quand le tampon est vide.
    pub fn affichage(&self) -> &str {
        if self.texte.is_empty() {
            "0"
        } else {
            &self.texte
        }
    }

    pub fn appliquer(&mut self, commande: Commande) -> Option<Signal> {
        let signal = match &commande {
            Commande::Effacer => {
                self.texte.clear();
                None
            }
            Commande::Retour => {
                self.texte.pop();
                None
            }
            Commande::Parenthese => {
                let p = if self.texte.ends_with('(') { ')' } else { '(' };
                self.texte.push(p);
                None
            }
            Commande::Point => {
                self.texte.push('.');
                None
            }
            Commande::Negation => {
                if !self.texte.is_empty() {
                    self.texte = format!("(-1)*({})", self.texte);
                }
                None
            }
            Commande::Operateur(op) => {
                self.texte.push(' ');
                self.texte.push_str(op);
                self.texte.push(' ');
                None
            }
            Commande::Chiffre(s) => {
                self.texte.push_str(s);
                None
            }
            Commande::Saisie(c) => {
                self.texte.push(*c);
                None
            }
            Commande::Evaluer => Some(self.evaluer()),
        };

        tracing::debug!(?commande, texte = %self.texte, ?signal, "commande appliquée");
        signal
    }

    fn evaluer(&mut self) -> Signal {
        match evaluer(&self.texte) {
            Ok(v) => {
                self.texte = nombre_en_texte(v);
                Signal::Succes
            }
            Err(e) => {
                tracing::debug!(erreur = %e, expression = %self.texte, "évaluation refusée");
                self.texte = MARQUEUR_ERREUR.to_string();
                Signal::Erreur
            }
        }
    }
}
