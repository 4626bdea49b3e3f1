use super::dashboard::{self, Capacity, RECENT_FILES, STAT_CARDS};
use super::{Page, SkyVault};
use crate::utils::color::Accent;
use egui::{Align, Color32, Layout, RichText};
use tracing::debug;

const MUTED: Color32 = Color32::from_rgb(100, 116, 139);
const TREND: Color32 = Color32::from_rgb(52, 211, 153);

impl SkyVault {
    pub fn render(&mut self, ctx: &egui::Context) {
        match self.state.page {
            Page::Login => self.render_login(ctx),
            Page::Dashboard => {
                self.render_sidebar(ctx);
                self.render_dashboard(ctx);
            }
            Page::Upload => {
                self.render_sidebar(ctx);
                self.render_upload(ctx);
            }
        }
    }

    fn render_login(&mut self, ctx: &egui::Context) {
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.12);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("☁").size(48.0).color(Accent::Blue.color()));
                ui.heading(RichText::new(&self.config.title).size(40.0).strong());
                ui.label(
                    RichText::new("Your universe, securely synchronized.")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
                ui.add_space(30.0);

                let form = &mut self.state.login_form;
                let logging_in = self.state.gate.is_logging_in();
                let field_width = 320.0;

                ui.label(RichText::new("UNIVERSAL ID").small().strong());
                ui.add(
                    egui::TextEdit::singleline(&mut form.email)
                        .hint_text("explorer@skyvault.io")
                        .desired_width(field_width),
                );
                ui.add_space(10.0);

                ui.label(RichText::new("ACCESS KEY").small().strong());
                let password = ui.add(
                    egui::TextEdit::singleline(&mut form.password)
                        .password(true)
                        .hint_text("••••••••")
                        .desired_width(field_width),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.add_space(8.0);
                ui.checkbox(&mut form.remember_device, "Remember device");
                ui.add_space(16.0);

                if logging_in {
                    ui.spinner();
                } else {
                    let button =
                        egui::Button::new(RichText::new("Enter Vault →").strong().size(18.0))
                            .min_size(egui::vec2(field_width, 44.0));
                    if ui.add_enabled(form.can_submit(), button).clicked() {
                        submit = true;
                    }
                }

                ui.add_space(24.0);
                ui.label(RichText::new("FEDERATED LOGIN").small().color(MUTED));
                ui.horizontal(|ui| {
                    let indent = ((ui.available_width() - field_width) / 2.0).max(0.0);
                    ui.add_space(indent);
                    for provider in ["Google", "Github"] {
                        ui.add_enabled(
                            false,
                            egui::Button::new(provider).min_size(egui::vec2(150.0, 36.0)),
                        )
                        .on_disabled_hover_text("Not available");
                    }
                });
            });
        });

        if submit {
            self.state.submit_login(&self.runtime);
        }
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let mut target = None;
        let mut logout = false;
        let page = self.state.page;

        egui::SidePanel::left("sidebar")
            .exact_width(240.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("☁").size(24.0).color(Accent::Blue.color()));
                    ui.label(RichText::new(&self.config.title).size(22.0).strong());
                });
                ui.add_space(24.0);

                for (label, dest) in [
                    ("🏠 Home Base", Some(Page::Dashboard)),
                    ("📤 Upload Portal", Some(Page::Upload)),
                    ("🗂 Deep Storage", None),
                    ("🛡 Security", None),
                    ("📊 Analytics", None),
                ] {
                    let selected = dest == Some(page);
                    if ui.selectable_label(selected, label).clicked() {
                        target = dest;
                    }
                    ui.add_space(4.0);
                }

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(16.0);
                    if ui.button("⏻ Terminate Session").clicked() {
                        logout = true;
                    }
                    ui.add_space(12.0);
                    if page == Page::Dashboard {
                        Self::render_capacity(ui);
                    }
                });
            });

        if logout {
            self.state.logout();
        } else if let Some(dest) = target {
            self.state.navigate(dest);
        }
    }

    fn render_capacity(ui: &mut egui::Ui) {
        let capacity = Capacity::default();
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(capacity.summary());
            ui.add(
                egui::ProgressBar::new(capacity.fraction())
                    .fill(Accent::Blue.color())
                    .text(format!("{}%", capacity.percent())),
            );
            ui.label(RichText::new("DATA CAPACITY").small().color(Accent::Blue.color()));
        });
    }

    fn render_dashboard(&mut self, ctx: &egui::Context) {
        let mut quick_upload = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading(RichText::new("Systems Online.").size(30.0).strong());
                        ui.label(
                            RichText::new("Your planetary-scale storage is ready for instructions.")
                                .color(MUTED),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("⚡ Quick Upload").clicked() {
                            quick_upload = true;
                        }
                        ui.add(
                            egui::TextEdit::singleline(&mut self.state.search)
                                .hint_text("🔍 Locate file...")
                                .desired_width(220.0),
                        );
                    });
                });
                ui.add_space(24.0);

                ui.columns(STAT_CARDS.len(), |columns| {
                    for (card, ui) in STAT_CARDS.iter().zip(columns.iter_mut()) {
                        ui.group(|ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                RichText::new(card.label.to_uppercase())
                                    .small()
                                    .strong()
                                    .color(card.accent.color()),
                            );
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(card.value).size(26.0).strong());
                                ui.label(RichText::new(card.trend).small().color(TREND));
                            });
                        });
                    }
                });
                ui.add_space(24.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Recent Artifacts").size(18.0).strong());
                    ui.add_space(8.0);

                    let rows = dashboard::filter_recent(&RECENT_FILES, &self.state.search);
                    if rows.is_empty() {
                        ui.label(RichText::new("No files match your search.").color(MUTED));
                        return;
                    }

                    egui::Grid::new("recent_files")
                        .num_columns(4)
                        .spacing([32.0, 12.0])
                        .striped(true)
                        .show(ui, |ui| {
                            for header in ["IDENTITY", "SECTOR", "TEMPORAL SYNC", "VOLUME"] {
                                ui.label(RichText::new(header).small().strong().color(MUTED));
                            }
                            ui.end_row();

                            for file in rows {
                                ui.horizontal(|ui| {
                                    ui.colored_label(file.accent.color(), "■");
                                    ui.label(RichText::new(file.name).strong());
                                });
                                ui.label(RichText::new(file.sector).small());
                                ui.label(RichText::new(file.synced).color(MUTED));
                                ui.label(RichText::new(file.volume).color(MUTED));
                                ui.end_row();
                            }
                        });
                });
            });
        });

        if quick_upload {
            self.state.navigate(Page::Upload);
        }
    }

    fn render_upload(&mut self, ctx: &egui::Context) {
        let mut browse = false;
        let mut remove = None;
        let mut abort_all = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                ui.heading(RichText::new("Initialize Transfer").size(30.0).strong());
                ui.label(
                    RichText::new("Push your data into the vault's distributed network.")
                        .color(MUTED),
                );
                ui.add_space(20.0);

                let zone_color = if self.state.is_dragging {
                    Accent::Blue.color()
                } else {
                    ui.visuals().widgets.noninteractive.bg_stroke.color
                };
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(2.0, zone_color))
                    .rounding(16.0)
                    .inner_margin(32.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("📤").size(40.0).color(zone_color));
                            ui.label(RichText::new("Drop files here to sync").size(22.0).strong());
                            ui.label(
                                RichText::new(
                                    "Click to browse or drag documents, images, and videos directly into the vault zone.",
                                )
                                .color(MUTED),
                            );
                            ui.add_space(12.0);
                            if ui.button("📁 Browse Files").clicked() {
                                browse = true;
                            }
                        });
                    });
                ui.add_space(24.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    let queue = &self.state.queue;

                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Transfer Queue").size(18.0).strong());
                            ui.label(
                                RichText::new(format!("Monitoring {} active streams", queue.len()))
                                    .color(MUTED),
                            );
                        });
                        if !queue.is_empty() {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let abort = RichText::new("ABORT ALL").color(Accent::Red.color());
                                if ui.button(abort).clicked() {
                                    abort_all = true;
                                }
                            });
                        }
                    });
                    ui.separator();

                    if queue.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(RichText::new("📥").size(32.0).color(MUTED));
                            ui.label(RichText::new("Queue is currently idle.").strong().color(MUTED));
                            ui.add_space(40.0);
                        });
                        return;
                    }

                    for record in queue.records() {
                        ui.horizontal(|ui| {
                            let icon = if record.is_image() { "🖼" } else { "📄" };
                            ui.label(RichText::new(icon).size(22.0).color(Accent::Blue.color()));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&record.name).strong());
                                ui.label(
                                    RichText::new(format!("{} • {}", record.size, record.upload_date))
                                        .small()
                                        .color(MUTED),
                                );
                            });
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.button("🗑").on_hover_text("Remove").clicked() {
                                    remove = Some(record.id.clone());
                                }
                            });
                        });
                        ui.add(egui::ProgressBar::new(1.0).fill(Accent::Indigo.color()));
                        ui.add_space(8.0);
                    }

                    ui.add_space(12.0);
                    let finalize = egui::Button::new(
                        RichText::new("🚀 Finalize Global Sync").size(18.0).strong(),
                    )
                    .min_size(egui::vec2(ui.available_width(), 44.0));
                    if ui.add(finalize).clicked() {
                        debug!(queued = queue.len(), "Finalize sync requested");
                    }
                });
            });
        });

        if browse {
            self.pick_files();
        }
        if abort_all {
            self.state.queue.clear();
        }
        if let Some(id) = remove {
            self.state.queue.remove(&id);
        }
    }
}
