//! Calculatrice vive : noyau de calcul pur + application egui.
//!
//! - `noyau` : tokenizer, shunting-yard, format, aide à la saisie (sans état)
//! - `app`   : état de session, vue, historique persisté

pub mod app;
pub mod noyau;
