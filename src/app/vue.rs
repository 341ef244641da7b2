// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux lignes d’écran : expression + résultat en direct
// - Pavé tactile : gros boutons, opérateur en attente surligné
// - Historique cliquable (recharge le résultat)
//
// Note :
// - Le clavier physique est géré dans app.rs (événements globaux).

use eframe::egui;

use crate::noyau::{Constante, FonctionUnaire, Operateur};

use super::etat::AppCalc;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];
const TAILLE_PETITE: [f32; 2] = [50.0, 30.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_fonctions(ui);

                ui.add_space(6.0);
                self.ui_memoire(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(self.ligne_expression()).monospace().size(18.0));

                    let resultat = egui::RichText::new(self.ligne_resultat()).monospace().size(32.0);
                    if self.erreur {
                        ui.label(resultat.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(resultat.strong());
                    }
                });
            });

        ui.horizontal(|ui| {
            let mode = self.preferences.mode_angle;
            if ui
                .add_sized(TAILLE_PETITE, egui::Button::new(mode.libelle()))
                .on_hover_text("Unité d’angle pour sin / cos / tan")
                .clicked()
            {
                self.basculer_mode_angle();
            }
            if self.memoire_active() {
                ui.monospace("M");
            }
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in FonctionUnaire::TOUTES {
                if ui
                    .add_sized(TAILLE_PETITE, egui::Button::new(f.libelle()))
                    .clicked()
                {
                    self.appliquer_fonction(f);
                }
            }
            for c in [Constante::Pi, Constante::E] {
                if ui
                    .add_sized(TAILLE_PETITE, egui::Button::new(c.libelle()))
                    .clicked()
                {
                    self.inserer_constante(c);
                }
            }
        });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_action(ui, "MC", "Efface la mémoire", Action::MemoireEffacer);
            self.bouton_action(ui, "MR", "Insère la mémoire", Action::MemoireRappeler);
            self.bouton_action(ui, "M+", "Ajoute le résultat à la mémoire", Action::MemoireAjouter);
            self.bouton_action(
                ui,
                "M-",
                "Retire le résultat de la mémoire",
                Action::MemoireSoustraire,
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface tout", Action::Effacer);
                self.bouton_action(ui, "⌫", "Efface le dernier symbole", Action::Supprimer);
                self.bouton_fonction(ui, FonctionUnaire::Pourcentage);
                self.bouton_operateur(ui, Operateur::Divise);
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_operateur(ui, Operateur::Fois);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_operateur(ui, Operateur::Moins);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_operateur(ui, Operateur::Plus);
                ui.end_row();

                self.bouton_fonction(ui, FonctionUnaire::Oppose);
                self.bouton_chiffre(ui, '0');
                if ui.add_sized(TAILLE_TOUCHE, egui::Button::new(".")).clicked() {
                    self.saisir_decimal();
                }
                self.bouton_action(ui, "=", "Valide le calcul", Action::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel = None;
        let mut vider = false;

        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("Aucun calcul");
                    return;
                }
                egui::ScrollArea::vertical()
                    .max_height(180.0)
                    .show(ui, |ui| {
                        for (i, e) in self.historique.entrees().enumerate() {
                            let texte = format!("{} = {}", e.expression, e.result);
                            if ui
                                .add(egui::Button::new(egui::RichText::new(texte).monospace()).frame(false))
                                .on_hover_text("Reprendre ce résultat")
                                .clicked()
                            {
                                rappel = Some(i);
                            }
                        }
                    });
                if ui.button("Vider l’historique").clicked() {
                    vider = true;
                }
            });

        if let Some(i) = rappel {
            self.rappeler_historique(i);
        }
        if vider {
            self.historique.vider();
        }
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: char) {
        if ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(chiffre.to_string()))
            .clicked()
        {
            self.saisir_chiffre(chiffre);
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let actif = self.operateur_actif() == Some(op);
        let bouton = egui::Button::new(op.symbole().to_string()).selected(actif);
        if ui.add_sized(TAILLE_TOUCHE, bouton).clicked() {
            self.saisir_operateur(op);
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, f: FonctionUnaire) {
        if ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(f.libelle()))
            .clicked()
        {
            self.appliquer_fonction(f);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::Supprimer => self.supprimer(),
                Action::Egal => self.egal(),
                Action::MemoireEffacer => self.memoire_effacer(),
                Action::MemoireRappeler => self.memoire_rappeler(),
                Action::MemoireAjouter => self.memoire_ajouter(),
                Action::MemoireSoustraire => self.memoire_soustraire(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Supprimer,
    Egal,
    MemoireEffacer,
    MemoireRappeler,
    MemoireAjouter,
    MemoireSoustraire,
}
