//! Noyau : évaluation (pipeline réel)
//!
//! alphabet autorisé -> enveloppe "(…)" -> jetons -> RPN -> f64
//!
//! L’alphabet est la seule barrière : tout texte qui le respecte est confié
//! à l’évaluateur arithmétique, qui suit la sémantique du moteur JS hôte
//! (précédence, f64, Infinity/NaN sans erreur).

use thiserror::Error;

use super::jetons::{est_espace_js, format_tokens, tokenize};
use super::rpn::{calculer_rpn, to_rpn};

/// Caractères non blancs admis avant évaluation.
const SYMBOLES: &str = "+-*/().";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    Vide,
    #[error("caractère interdit: {0:?}")]
    CaractereInterdit(char),
    #[error("nombre invalide: {0}")]
    NombreInvalide(String),
    #[error("zéro initial interdit: {0}")]
    ZeroInitial(String),
    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),
    #[error("commentaire non fermé")]
    CommentaireNonFerme,
    #[error("++/-- sans cible assignable")]
    Increment,
    #[error("littéral regex non pris en charge")]
    Regex,
    #[error("un nombre n’est pas une fonction")]
    PasUneFonction,
    #[error("base unaire de ** : parenthèses requises")]
    ExposantAmbigu,
    #[error("parenthèse fermante sans ouverture")]
    ParentheseSansOuverture,
    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,
    #[error("fin d’expression inattendue")]
    FinInattendue,
    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Vrai si `c` appartient à `[0-9+\-*/().\s]`.
pub fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || SYMBOLES.contains(c) || est_espace_js(c)
}

/// Barrière : au moins un caractère, tous dans l’alphabet.
pub fn verifier_alphabet(s: &str) -> Result<(), ErreurEval> {
    if s.is_empty() {
        return Err(ErreurEval::Vide);
    }
    match s.chars().find(|c| !est_autorise(*c)) {
        Some(c) => Err(ErreurEval::CaractereInterdit(c)),
        None => Ok(()),
    }
}

/// API publique : valide puis évalue une expression.
pub fn evaluer(expression: &str) -> Result<f64, ErreurEval> {
    // 1) Alphabet (avant toute évaluation)
    verifier_alphabet(expression)?;

    // 2) Enveloppe : l’hôte évaluait `return (<texte>)`
    let enveloppe = format!("({expression})");

    // 3) Jetons
    let jetons = tokenize(&enveloppe)?;

    // 4) RPN
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "pipeline");

    // 5) Valeur
    calculer_rpn(&rpn)
}
