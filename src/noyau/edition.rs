// src/noyau/edition.rs
//
// Chirurgie de texte pour la saisie touche par touche.
// Toutes les fonctions sont pures : &str en entrée, nouvelle valeur en sortie.

use std::sync::OnceLock;

use regex::Regex;

use super::erreur::ErreurNoyau;
use super::format::format_result;
use super::jetons::{is_operator, Operateur};

/// Résultat d’une fonction unaire appliquée à l’expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Unaire {
    pub expression: String,
    pub valeur: f64,
}

fn motif_dernier_nombre() -> &'static Regex {
    static MOTIF: OnceLock<Regex> = OnceLock::new();
    MOTIF.get_or_init(|| Regex::new(r"-?[0-9]*\.?[0-9]*$").expect("motif dernier nombre"))
}

/// Expression “aperçu” : on retire les opérateurs de queue
/// ("12+" -> "12", "5*-" -> "5", "-" -> "").
pub fn preview_expression(expr: &str) -> &str {
    expr.trim_end_matches(is_operator)
}

/// Dernier nombre (en cours de saisie ou complet) en fin d’expression :
/// plus long suffixe de la forme `-?[0-9]*\.?[0-9]*`.
///
/// Le '-' est toujours pris, même s’il sert de soustraction :
/// "5*-3" -> "-3", "5-3" -> "-3".
pub fn last_numeral(expr: &str) -> &str {
    motif_dernier_nombre()
        .find(expr)
        .map_or("", |m| m.as_str())
}

/// Opérateur binaire en attente de son opérande droit, s’il y en a un.
/// Un '-' seul ou juste après un opérateur est un signe, pas un binaire.
pub fn trailing_binary_operator(expr: &str) -> Option<Operateur> {
    let mut chars = expr.chars().rev();
    let op = Operateur::from_char(chars.next()?)?;

    if op == Operateur::Moins {
        match chars.next() {
            None => return None,
            Some(c) if is_operator(c) => return None,
            Some(_) => {}
        }
    }
    Some(op)
}

/// Remplace le dernier nombre par `remplacement`.
/// Sans dernier nombre, l’expression entière devient `remplacement`.
pub fn replace_last_numeral(expr: &str, remplacement: &str) -> String {
    let dernier = last_numeral(expr);
    if dernier.is_empty() {
        return remplacement.to_string();
    }
    let mut out = String::with_capacity(expr.len() + remplacement.len());
    out.push_str(&expr[..expr.len() - dernier.len()]);
    out.push_str(remplacement);
    out
}

/// Ajoute une valeur littérale (constante, mémoire).
/// Après un chiffre ou un point, on insère d’abord un '*' implicite.
pub fn insert_literal(expr: &str, valeur: f64) -> String {
    let texte = format_result(valeur);
    match expr.chars().next_back() {
        None => texte,
        Some(c) if c.is_ascii_digit() || c == '.' => format!("{expr}*{texte}"),
        Some(_) => format!("{expr}{texte}"),
    }
}

/// Applique `transform` au dernier nombre (0 s’il n’y en a pas).
///
/// - résultat non fini => ResultatInvalide
/// - sinon le nombre est remplacé par sa forme formatée,
///   ou l’expression entière devient ce nombre s’il n’y avait rien à remplacer
pub fn apply_unary<F>(expr: &str, transform: F) -> Result<Unaire, ErreurNoyau>
where
    F: FnOnce(f64) -> f64,
{
    let dernier = last_numeral(expr);
    let present = !matches!(dernier, "" | "-" | ".");

    let base = if present {
        dernier
            .parse::<f64>()
            .map_err(|_| ErreurNoyau::ResultatInvalide)?
    } else {
        0.0
    };

    let valeur = transform(base);
    if !valeur.is_finite() {
        return Err(ErreurNoyau::ResultatInvalide);
    }

    let texte = format_result(valeur);
    let expression = if present {
        replace_last_numeral(expr, &texte)
    } else {
        texte
    };

    Ok(Unaire { expression, valeur })
}
