// src/noyau/jetons.rs
//
// Lexing de l’alphabet autorisé, avec les règles du moteur JS hôte :
// - maximal munch : "**", "++", "--"
// - littéraux 12, 1.5, 5., .5 (zéro initial suivi d’un chiffre refusé, mode strict)
// - espaces et fins de ligne ignorés
// - commentaires /* … */ et // … ignorés

use super::eval::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    StarStar, // **
    Slash,

    // Toujours refusés par le parse : aucune cible assignable dans l’alphabet.
    Incr,
    Decr,

    LPar,
    RPar,

    // Opérateurs unaires : produits seulement par to_rpn (jamais par tokenize).
    Neg,
    Pos,
}

/// Espaces au sens de `\s` (WhiteSpace + LineTerminator).
pub fn est_espace_js(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn est_fin_de_ligne(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Tokenize une chaîne en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let suivant = chars.get(i + 1).copied();

        if est_espace_js(c) {
            i += 1;
            continue;
        }

        // Commentaires (prioritaires sur la division)
        if c == '/' && suivant == Some('*') {
            i = fin_commentaire_bloc(&chars, i + 2).ok_or(ErreurEval::CommentaireNonFerme)?;
            continue;
        }
        if c == '/' && suivant == Some('/') {
            i += 2;
            while i < chars.len() && !est_fin_de_ligne(chars[i]) {
                i += 1;
            }
            continue;
        }

        // Ponctuation
        let (tok, largeur) = match (c, suivant) {
            ('(', _) => (Some(Tok::LPar), 1),
            (')', _) => (Some(Tok::RPar), 1),
            ('+', Some('+')) => (Some(Tok::Incr), 2),
            ('+', _) => (Some(Tok::Plus), 1),
            ('-', Some('-')) => (Some(Tok::Decr), 2),
            ('-', _) => (Some(Tok::Minus), 1),
            ('*', Some('*')) => (Some(Tok::StarStar), 2),
            ('*', _) => (Some(Tok::Star), 1),
            ('/', _) => (Some(Tok::Slash), 1),
            _ => (None, 0),
        };
        if let Some(tok) = tok {
            out.push(tok);
            i += largeur;
            continue;
        }

        // Nombres
        if c.is_ascii_digit() || c == '.' {
            let (x, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(x));
            i = fin;
            continue;
        }

        return Err(ErreurEval::JetonInattendu(c.to_string()));
    }

    Ok(out)
}

/// Position juste après le "*/" fermant, à partir de `debut` (après "/*").
fn fin_commentaire_bloc(chars: &[char], debut: usize) -> Option<usize> {
    let mut j = debut;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '/' {
            return Some(j + 2);
        }
        j += 1;
    }
    None
}

/// Lit un littéral décimal à partir de `debut`. Retourne (valeur, position suivante).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurEval> {
    let mut i = debut;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let nb_entiers = i - debut;

    // 05, 00.5 : interdits en mode strict
    if nb_entiers >= 2 && chars[debut] == '0' {
        let texte: String = chars[debut..i].iter().collect();
        return Err(ErreurEval::ZeroInitial(texte));
    }

    let mut nb_decimales = 0;
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let d = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        nb_decimales = i - d;
    }

    // "." seul : ponctuation d’accès membre, jamais valide ici
    if nb_entiers == 0 && nb_decimales == 0 {
        return Err(ErreurEval::JetonInattendu(".".into()));
    }

    let brut: String = chars[debut..i].iter().collect();
    let mut texte = brut.clone();
    if texte.starts_with('.') {
        texte.insert(0, '0');
    }
    if texte.ends_with('.') {
        texte.pop();
    }

    let x = texte
        .parse::<f64>()
        .map_err(|_| ErreurEval::NombreInvalide(brut))?;
    Ok((x, i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(x) => super::format::nombre_en_texte(*x),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::StarStar => "**".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Incr => "++".to_string(),
            Tok::Decr => "--".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
