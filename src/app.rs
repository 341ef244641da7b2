// src/app.rs
//
// Calculatrice vive — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + historique.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Persister historique + préférences via eframe::Storage
//
// Important:
// - Le clavier physique est lu ici (événements globaux, aucun champ texte à focus).

pub mod etat;
pub mod historique;
pub mod vue;

// Ré-export pratique : `use calculatrice_vive::app::AppCalc;`
pub use etat::{AppCalc, Preferences};
pub use historique::{EntreeHistorique, Historique};

use eframe::egui;

/// Clés fixes du stockage clé/valeur.
pub const CLE_HISTORIQUE: &str = "calculatrice_vive/historique";
pub const CLE_PREFERENCES: &str = "calculatrice_vive/preferences";

impl AppCalc {
    /// Restaure historique + préférences ; blob absent ou illisible => valeurs par défaut.
    pub fn depuis_stockage(storage: Option<&dyn eframe::Storage>) -> Self {
        let historique: Historique = storage
            .and_then(|s| eframe::get_value(s, CLE_HISTORIQUE))
            .unwrap_or_default();
        let preferences: Preferences = storage
            .and_then(|s| eframe::get_value(s, CLE_PREFERENCES))
            .unwrap_or_default();

        tracing::debug!(
            entrees = historique.len(),
            mode_angle = ?preferences.mode_angle,
            "état restauré"
        );
        AppCalc::new(historique.borne(), preferences)
    }

    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.saisir_touche(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    self.saisir_touche_speciale(key);
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CLE_HISTORIQUE, &self.historique);
        eframe::set_value(storage, CLE_PREFERENCES, &self.preferences);
        tracing::trace!(entrees = self.historique.len(), "historique sauvegardé");
    }
}
