// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
//
// Règles (celles du moteur JS hôte) :
// - précédence : ** (4, droite) > unaires + - (3, préfixe) > * / (2) > + - (1)
// - '+' / '-' là où une valeur est attendue => unaire (Tok::Pos / Tok::Neg)
// - base unaire de ** sans parenthèses ("-2**2") => refusé
// - '(' juste après une valeur ("2(3)") => appel d’un nombre, refusé
// - '/' là où une valeur est attendue => littéral regex, non pris en charge

use super::eval::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        Tok::StarStar => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::StarStar)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Neg, Num(3), Num(4), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai au début, après '(' et après tout opérateur.
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurEval::JetonInattendu(super::jetons::format_tokens(
                        &[tok],
                    )));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurEval::PasUneFonction);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    // "()" ou "(2+)"
                    return Err(ErreurEval::JetonInattendu(")".into()));
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::ParentheseSansOuverture),
                    }
                }
            }

            // moins / plus unaire : empilé sans rien dépiler (préfixe)
            Tok::Plus | Tok::Minus if attend_valeur => {
                ops.push(if tok == Tok::Minus { Tok::Neg } else { Tok::Pos });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                if attend_valeur {
                    return Err(match tok {
                        // L’hôte lirait un littéral regex ("/2/" rendu tel quel) ; refusé ici.
                        Tok::Slash => ErreurEval::Regex,
                        _ => ErreurEval::JetonInattendu(super::jetons::format_tokens(&[tok])),
                    });
                }

                // dépile tant que la précédence/associativité l’exige
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                if tok == Tok::StarStar && matches!(ops.last(), Some(Tok::Neg | Tok::Pos)) {
                    return Err(ErreurEval::ExposantAmbigu);
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Incr | Tok::Decr => return Err(ErreurEval::Increment),

            Tok::Neg | Tok::Pos => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    if attend_valeur {
        return Err(ErreurEval::FinInattendue);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// `a ** b` comme Math.pow (diffère de powf sur NaN et ±1 ** ±∞).
fn puissance(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}

/// Calcule une RPN en f64 (IEEE-754 : 1/0 => inf, 0/0 => NaN, sans erreur).
pub fn calculer_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(x) => st.push(*x),

            Tok::Neg | Tok::Pos => {
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(if *tok == Tok::Neg { -a } else { a });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::StarStar => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => puissance(a, b),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar | Tok::Incr | Tok::Decr => {
                return Err(ErreurEval::ExpressionInvalide)
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    st.pop().ok_or(ErreurEval::ExpressionInvalide)
}
