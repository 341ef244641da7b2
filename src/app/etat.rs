//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression, drapeaux, mémoire, historique)
//! et traduire chaque touche en une modification de l’expression.
//!
//! Contrats :
//! - Toute la logique de calcul vient du noyau (fonctions pures).
//! - Actions déterministes, sans effet de bord caché.
//! - État d’erreur “terminal” : l’affichage reste sur "Error" jusqu’à la prochaine touche.

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::noyau::{
    apply_unary, evaluate, format_result, insert_literal, is_operator, last_numeral,
    preview_expression, trailing_binary_operator, Constante, FonctionUnaire, Issue, ModeAngle,
    Operateur, ERREUR,
};

use super::historique::Historique;

/// Préférences persistées avec l’historique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub mode_angle: ModeAngle,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- drapeaux ---
    pub erreur: bool,          // écran figé sur "Error"
    pub vient_d_evaluer: bool, // le prochain chiffre démarre une nouvelle expression

    // --- mémoire (M+ M- MR MC) ---
    pub memoire: f64,

    // --- persistés ---
    pub historique: Historique,
    pub preferences: Preferences,
}

impl AppCalc {
    pub fn new(historique: Historique, preferences: Preferences) -> Self {
        Self {
            historique,
            preferences,
            ..Self::default()
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if !chiffre.is_ascii_digit() {
            return;
        }
        self.sortir_erreur();

        if self.vient_d_evaluer || self.expression == "0" {
            self.expression.clear();
            self.vient_d_evaluer = false;
        }
        self.expression.push(chiffre);
    }

    pub fn saisir_decimal(&mut self) {
        self.sortir_erreur();

        if self.vient_d_evaluer {
            self.expression = "0.".to_string();
            self.vient_d_evaluer = false;
            return;
        }

        match self.expression.chars().last() {
            None => self.expression.push_str("0."),
            Some(c) if is_operator(c) => self.expression.push_str("0."),
            Some(_) => {
                if !last_numeral(&self.expression).contains('.') {
                    self.expression.push('.');
                }
            }
        }
    }

    /// Opérateur : remplace un opérateur final, sauf '-' après un autre opérateur (signe).
    pub fn saisir_operateur(&mut self, op: Operateur) {
        self.sortir_erreur();
        if self.expression.is_empty() && op != Operateur::Moins {
            return;
        }
        self.vient_d_evaluer = false;

        match self.expression.chars().last() {
            Some(c) if is_operator(c) => {
                if op == Operateur::Moins {
                    // signe après un opérateur ; "-" puis "-" ne change rien
                    if c != '-' {
                        self.expression.push(op.symbole());
                    }
                    return;
                }
                // "5*-" puis '+' => "5+" (toute la suite d’opérateurs est remplacée)
                let base = preview_expression(&self.expression).len();
                self.expression.truncate(base);
                if self.expression.is_empty() && op != Operateur::Moins {
                    return;
                }
                self.expression.push(op.symbole());
            }
            _ => self.expression.push(op.symbole()),
        }
    }

    /// "=" : évalue l’aperçu ; ignoré si vide ou invalide.
    pub fn egal(&mut self) {
        if self.erreur {
            return;
        }
        let apercu = preview_expression(&self.expression).to_string();
        if apercu.is_empty() {
            return;
        }

        match evaluate(&apercu) {
            Issue::Invalide => {
                tracing::debug!(expression = %apercu, "expression invalide, ignorée");
            }
            Issue::DivisionParZero => self.montrer_erreur("division par zéro"),
            Issue::Succes(v) => {
                let resultat = format_result(v);
                tracing::debug!(expression = %apercu, resultat = %resultat, "évaluation");
                self.historique.ajouter(apercu, resultat.clone());
                self.expression = resultat;
                self.vient_d_evaluer = true;
            }
        }
    }

    /// Touche “texte” (clavier physique) : chiffres, '.', opérateurs, '='.
    /// Renvoie false si le caractère n’est pas une touche de la calculatrice.
    pub fn saisir_touche(&mut self, c: char) -> bool {
        match c {
            '0'..='9' => self.saisir_chiffre(c),
            '.' => self.saisir_decimal(),
            '=' => self.egal(),
            _ => match Operateur::from_char(c) {
                Some(op) => self.saisir_operateur(op),
                None => return false,
            },
        }
        true
    }

    /// Touches spéciales : Entrée (=), Retour arrière (⌫), Suppr / Échap (C).
    pub fn saisir_touche_speciale(&mut self, key: egui::Key) -> bool {
        match key {
            egui::Key::Enter => self.egal(),
            egui::Key::Backspace => self.supprimer(),
            egui::Key::Delete | egui::Key::Escape => self.effacer(),
            _ => return false,
        }
        true
    }

    /* ------------------------ Effacement ------------------------ */

    /// C : remise à zéro de l’expression et des drapeaux (mémoire + historique gardés).
    pub fn effacer(&mut self) {
        self.erreur = false;
        self.expression.clear();
        self.vient_d_evaluer = false;
    }

    /// ⌫ : retire le dernier caractère (ou sort de l’état d’erreur).
    pub fn supprimer(&mut self) {
        if self.erreur {
            self.effacer();
            return;
        }
        if self.expression.pop().is_some() {
            self.vient_d_evaluer = false;
        }
    }

    /* ------------------------ Fonctions + constantes ------------------------ */

    pub fn appliquer_fonction(&mut self, f: FonctionUnaire) {
        self.sortir_erreur();
        let mode = self.preferences.mode_angle;

        match apply_unary(&self.expression, |x| f.appliquer(x, mode)) {
            Ok(u) => self.expression = u.expression,
            Err(e) => self.montrer_erreur(&e.to_string()),
        }
    }

    pub fn inserer_constante(&mut self, c: Constante) {
        self.inserer_valeur(c.valeur());
    }

    fn inserer_valeur(&mut self, valeur: f64) {
        self.sortir_erreur();
        if self.vient_d_evaluer {
            self.expression.clear();
            self.vient_d_evaluer = false;
        }
        self.expression = insert_literal(&self.expression, valeur);
    }

    pub fn basculer_mode_angle(&mut self) {
        self.preferences.mode_angle = self.preferences.mode_angle.bascule();
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Valeur de l’aperçu courant, si elle existe.
    pub fn valeur_courante(&self) -> Option<f64> {
        if self.erreur {
            return None;
        }
        evaluate(preview_expression(&self.expression)).valeur()
    }

    pub fn memoire_ajouter(&mut self) {
        if let Some(v) = self.valeur_courante() {
            self.memoriser(self.memoire + v);
        }
    }

    pub fn memoire_soustraire(&mut self) {
        if let Some(v) = self.valeur_courante() {
            self.memoriser(self.memoire - v);
        }
    }

    /// Le registre reste fini (sinon MR insérerait "Error").
    fn memoriser(&mut self, valeur: f64) {
        if valeur.is_finite() {
            self.memoire = valeur;
        }
    }

    pub fn memoire_rappeler(&mut self) {
        self.inserer_valeur(self.memoire);
    }

    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    pub fn memoire_active(&self) -> bool {
        self.memoire != 0.0
    }

    /* ------------------------ Historique ------------------------ */

    /// Recharge le résultat d’une entrée (0 = plus récente).
    pub fn rappeler_historique(&mut self, index: usize) {
        if let Some(e) = self.historique.get(index) {
            self.expression = e.result.clone();
            self.erreur = false;
            self.vient_d_evaluer = true;
        }
    }

    /* ------------------------ Affichage ------------------------ */

    pub fn ligne_expression(&self) -> String {
        if self.erreur {
            ERREUR.to_string()
        } else if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        }
    }

    /// Aperçu en direct : "0" tant que rien d’évaluable, "Error" sur division par zéro.
    pub fn ligne_resultat(&self) -> String {
        if self.erreur {
            return ERREUR.to_string();
        }
        let apercu = preview_expression(&self.expression);
        if apercu.is_empty() {
            return "0".to_string();
        }
        match evaluate(apercu) {
            Issue::Invalide => "0".to_string(),
            Issue::DivisionParZero => ERREUR.to_string(),
            Issue::Succes(v) => format_result(v),
        }
    }

    /// Opérateur à mettre en surbrillance sur le clavier.
    pub fn operateur_actif(&self) -> Option<Operateur> {
        if self.erreur {
            return None;
        }
        trailing_binary_operator(&self.expression)
    }

    /* ------------------------ Interne ------------------------ */

    fn sortir_erreur(&mut self) {
        if self.erreur {
            self.effacer();
        }
    }

    fn montrer_erreur(&mut self, cause: &str) {
        tracing::warn!(expression = %self.expression, cause, "état d’erreur");
        self.erreur = true;
        self.expression.clear();
        self.vient_d_evaluer = false;
    }
}
