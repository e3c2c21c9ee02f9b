use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use eframe::{App, CreationContext, Frame, egui};
use egui::{Align, Color32, ComboBox, Layout, RichText, ScrollArea, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use tracing::{error, info};

use weekly_planner::client::ScheduleClient;
use weekly_planner::config::Config;
use weekly_planner::error::ScheduleResult;
use weekly_planner::form::{ScheduleForm, DURATION_STEP_HOURS, MAX_DURATION_HOURS};
use weekly_planner::models::{Gender, Goal};
use weekly_planner::render::{WorkoutBlock, REST_CAPTION};
use weekly_planner::submission::SubmissionHandler;
use weekly_planner::{logging, routines};

fn main() -> Result<(), eframe::Error> {
    logging::init_logging();

    let config = Config::from_env().unwrap_or_else(|e| {
        error!(error = %e, "falling back to default configuration");
        Config::default()
    });
    let client = match ScheduleClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "could not build HTTP client");
            std::process::exit(1);
        }
    };
    info!(endpoint = client.endpoint(), "starting weekly planner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Generator Jadwal Latihan",
        options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, client, config.html_out)))),
    )
}

struct PlannerApp {
    form: ScheduleForm,
    submissions: SubmissionHandler,
    html_out: PathBuf,
    export_status: Option<String>,
    today: &'static str,
}

impl PlannerApp {
    fn new(_cc: &CreationContext, client: ScheduleClient, html_out: PathBuf) -> Self {
        PlannerApp {
            form: ScheduleForm::new(),
            submissions: SubmissionHandler::new(client),
            html_out,
            export_status: None,
            today: routines::today_day_name(),
        }
    }
}

impl App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.submissions.poll() {
            self.export_status = None;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("🏋 Generator Jadwal Latihan");
                ui.add_space(10.0);

                self.show_form(ui);
                ui.add_space(10.0);
                ui.separator();

                self.show_error(ui);
                self.show_schedule(ui);
            });
        });

        if self.submissions.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl PlannerApp {
    fn show_form(&mut self, ui: &mut Ui) {
        let duration_hint = format!("0–{MAX_DURATION_HOURS}, langkah {DURATION_STEP_HOURS}");

        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(140.0))
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Hari");
                });
                header.col(|ui| {
                    ui.strong("Jam mulai");
                });
                header.col(|ui| {
                    ui.strong("Durasi (jam)");
                });
            })
            .body(|mut body| {
                for input in &mut self.form.days {
                    let start_id = input.start_id();
                    let duration_id = input.duration_id();
                    body.row(28.0, |mut row| {
                        row.col(|ui| {
                            ui.label(input.day);
                        });
                        row.col(|ui| {
                            ui.add(
                                TextEdit::singleline(&mut input.start)
                                    .id_salt(start_id)
                                    .hint_text("Opsional (HH:MM)"),
                            );
                        });
                        row.col(|ui| {
                            ui.add(
                                TextEdit::singleline(&mut input.duration)
                                    .id_salt(duration_id)
                                    .hint_text(duration_hint.as_str()),
                            );
                        });
                    });
                }
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label("Jenis kelamin:");
            ComboBox::from_id_salt("gender")
                .selected_text(self.form.gender.label())
                .show_ui(ui, |ui| {
                    for gender in Gender::ALL {
                        ui.selectable_value(&mut self.form.gender, gender, gender.label());
                    }
                });
        });
        ui.horizontal(|ui| {
            ui.label("Tujuan:");
            ComboBox::from_id_salt("goal")
                .selected_text(self.form.goal.label())
                .show_ui(ui, |ui| {
                    for goal in Goal::ALL {
                        ui.selectable_value(&mut self.form.goal, goal, goal.label());
                    }
                });
        });
        ui.horizontal(|ui| {
            ui.label("Berat target (kg):");
            ui.add(
                TextEdit::singleline(&mut self.form.target_weight)
                    .id_salt("targetWeight")
                    .hint_text("Opsional"),
            );
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button(RichText::new("Buat Jadwal").size(18.0).strong()).clicked() {
                self.export_status = None;
                self.submissions.submit(self.form.collect());
            }
            if self.submissions.is_pending() {
                ui.spinner();
            }
        });
    }

    fn show_error(&self, ui: &mut Ui) {
        if let Some(message) = self.submissions.error_message() {
            ui.label(RichText::new(message).color(Color32::RED).strong());
        }
    }

    fn show_schedule(&mut self, ui: &mut Ui) {
        let Some(result) = self.submissions.result() else {
            return;
        };

        let mut export = false;
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(result.title).heading().strong());
                if ui.button("Simpan HTML").clicked() {
                    export = true;
                }
            });
            if let Some(status) = &self.export_status {
                ui.label(status);
            }

            for day in &result.days {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&day.day).size(22.0).strong());
                    ui.label(RichText::new(&day.day_type).italics());
                    if day.day == self.today {
                        ui.label(RichText::new("(hari ini)").color(Color32::LIGHT_BLUE));
                    }
                });

                for workout in &day.workouts {
                    ui.group(|ui| {
                        ui.label(RichText::new(workout.title()).strong());
                        match workout {
                            WorkoutBlock::Rest { .. } => {
                                ui.label(REST_CAPTION);
                            }
                            WorkoutBlock::Exercise {
                                muscle,
                                sets,
                                reps,
                                minutes,
                                ..
                            } => {
                                ui.horizontal(|ui| {
                                    if let Some(summary) = workout.sets_reps() {
                                        ui.label(RichText::new(summary).color(Color32::BLUE));
                                    }
                                    ui.label(RichText::new(muscle).color(Color32::GREEN));
                                });
                                ui.label(format!("Target Otot: {muscle}"));
                                ui.label(format!("Repetisi per Set: {reps} kali"));
                                ui.label(format!("Jumlah Set: {sets} set"));
                                ui.label(format!("Estimasi Waktu: {minutes} menit"));
                            }
                        }
                    });
                }
            }
        });

        if export {
            let html = result.to_html();
            self.export_status = Some(match self.export_html(&html) {
                Ok(()) => format!("Tersimpan ke {}", self.html_out.display()),
                Err(e) => {
                    error!(error = %e, path = %self.html_out.display(), "HTML export failed");
                    format!("❌ Error: {e}")
                }
            });
        }
    }

    fn export_html(&self, html: &str) -> ScheduleResult<()> {
        fs::write(&self.html_out, html)?;
        info!(path = %self.html_out.display(), "schedule exported");
        Ok(())
    }
}
