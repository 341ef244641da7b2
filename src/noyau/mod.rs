//! Noyau de calcul (flottant, sans état)
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (moins unaire replié dans le nombre)
//! - rpn.rs       : shunting-yard + réduction sur pile
//! - eval.rs      : pipeline complet -> Issue
//! - format.rs    : affichage canonique d’un résultat
//! - edition.rs   : aperçu, dernier nombre, insertion, fonctions unaires
//! - fonctions.rs : √, x², trig (DEG/RAD), constantes
//! - erreur.rs    : ErreurNoyau

pub mod edition;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use edition::{
    apply_unary, insert_literal, last_numeral, preview_expression, replace_last_numeral,
    trailing_binary_operator, Unaire,
};
pub use erreur::ErreurNoyau;
pub use eval::{evaluate, Issue};
pub use fonctions::{degrees_to_radians, Constante, FonctionUnaire, ModeAngle};
pub use format::{format_result, ERREUR};
pub use jetons::{is_operator, tokenize, Jeton, Operateur};
