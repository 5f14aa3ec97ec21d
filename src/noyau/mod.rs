//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - commande.rs : commandes + adaptateurs pointeur/clavier
//! - tampon.rs   : tampon d’expression (état unique) + transitions
//! - eval.rs     : alphabet autorisé + pipeline d’évaluation
//! - jetons.rs   : tokenisation (règles du moteur JS hôte)
//! - rpn.rs      : shunting-yard + calcul f64
//! - format.rs   : f64 -> texte (Number.prototype.toString)

pub mod commande;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use commande::Commande;
pub use tampon::{Controleur, Signal};
