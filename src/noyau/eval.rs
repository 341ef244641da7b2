//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> contrôle de forme -> RPN -> réduction -> Issue
//!
//! Remarque : aucune mémoire entre deux appels, l’aperçu est recalculé
//! à chaque rafraîchissement depuis le texte courant.

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, tokenize, Jeton};
use super::rpn::{reduce_rpn, to_rpn};

/// Issue d’une évaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Issue {
    /// Expression mal formée (aucune valeur).
    Invalide,
    /// Expression bien formée, mais division par zéro.
    DivisionParZero,
    /// Valeur finie.
    Succes(f64),
}

impl Issue {
    /// Vrai si l’expression est bien formée (succès OU division par zéro).
    pub fn is_valid(&self) -> bool {
        !matches!(self, Issue::Invalide)
    }

    pub fn valeur(&self) -> Option<f64> {
        match self {
            Issue::Succes(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Result<f64, ErreurNoyau>> for Issue {
    fn from(r: Result<f64, ErreurNoyau>) -> Self {
        match r {
            Ok(v) => Issue::Succes(v),
            Err(ErreurNoyau::DivisionParZero) => Issue::DivisionParZero,
            Err(_) => Issue::Invalide,
        }
    }
}

/// API publique : évalue une expression et retourne son Issue.
pub fn evaluate(expr: &str) -> Issue {
    evaluer(expr).into()
}

/// Variante détaillée : garde le type d’erreur précis.
pub fn evaluer(expr: &str) -> Result<f64, ErreurNoyau> {
    // 1) Jetons
    let jetons = tokenize(expr)?;
    match jetons.last() {
        None => return Err(ErreurNoyau::ExpressionVide),
        Some(Jeton::Op(_)) => return Err(ErreurNoyau::OperateurFinal),
        Some(Jeton::Nombre(_)) => {}
    }

    // 2) RPN
    let rpn = to_rpn(&jetons);
    tracing::trace!(rpn = %format_tokens(&rpn), "rpn");

    // 3) Valeur
    reduce_rpn(&rpn)
}
