use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::UserRecord, view::PageSize};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{reduce, DraftField, Intent, PageView, Transition, ViewState};

pub const APP_TITLE: &str = "User Management";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub page_size: PageSize,
    pub id_assignment: client_core::IdAssignment,
}

impl From<&client_core::Settings> for StartupConfig {
    fn from(settings: &client_core::Settings) -> Self {
        Self {
            page_size: settings.page_size,
            id_assignment: settings.id_assignment,
        }
    }
}

fn err_color(category: UiErrorCategory) -> egui::Color32 {
    match category {
        UiErrorCategory::Validation => egui::Color32::from_rgb(230, 160, 40),
        UiErrorCategory::Status | UiErrorCategory::Transport => {
            egui::Color32::from_rgb(220, 70, 70)
        }
    }
}

pub struct DashboardApp {
    state: ViewState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl DashboardApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            state: ViewState::new(startup.page_size, startup.id_assignment),
            cmd_tx,
            ui_rx,
        };
        app.apply(Intent::LoadAll);
        app
    }

    fn apply(&mut self, intent: Intent) {
        let Transition { state, command } = reduce(std::mem::take(&mut self.state), intent);
        self.state = state;

        if let Some(command) = command {
            if let Err(not_queued) = dispatch_backend_command(&self.cmd_tx, command) {
                let Transition { state, .. } = reduce(
                    std::mem::take(&mut self.state),
                    Intent::CommandNotQueued(not_queued),
                );
                self.state = state;
            }
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply(Intent::Backend(event));
        }
    }

    fn show_error_banner(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.state.error {
            ui.colored_label(err_color(err.category()), err.message());
        }
    }

    fn show_controls(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.horizontal(|ui| {
            let mut search = self.state.filter.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .id_salt("search")
                    .hint_text("Search...")
                    .desired_width(280.0),
            );
            if response.changed() {
                intents.push(Intent::SetFilter(search));
            }

            let mut page_size = self.state.page_size;
            egui::ComboBox::from_id_salt("page_size")
                .selected_text(page_size.to_string())
                .show_ui(ui, |ui| {
                    for size in PageSize::ALL {
                        ui.selectable_value(&mut page_size, size, size.to_string());
                    }
                });
            if page_size != self.state.page_size {
                intents.push(Intent::SetPageSize(page_size));
            }

            if self.state.loading {
                ui.spinner();
            }
        });
    }

    fn show_form(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let draft = &self.state.draft;
        ui.horizontal(|ui| {
            for (field, hint, value) in [
                (DraftField::Name, "Name", &draft.name),
                (DraftField::Email, "Email", &draft.email),
                (DraftField::Department, "Department", &draft.department),
            ] {
                let mut text = value.clone();
                let edit = egui::TextEdit::singleline(&mut text)
                    .id_salt(hint)
                    .hint_text(hint)
                    .desired_width(180.0);
                if ui.add(edit).changed() {
                    intents.push(Intent::EditDraft(field, text));
                }
            }

            let label = if draft.is_editing() {
                "Update User"
            } else {
                "Add User"
            };
            if ui
                .add_enabled(!self.state.saving, egui::Button::new(label))
                .clicked()
            {
                intents.push(Intent::Submit);
            }
            if draft.is_editing() && ui.button("Cancel").clicked() {
                intents.push(Intent::CancelEdit);
            }
        });
    }

    fn show_table(&self, ui: &mut egui::Ui, page: &PageView<'_>, intents: &mut Vec<Intent>) {
        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 48.0)
            .show(ui, |ui| {
                egui::Grid::new("user_table")
                    .num_columns(5)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["ID", "Name", "Email", "Department", "Actions"] {
                            ui.label(egui::RichText::new(header).strong());
                        }
                        ui.end_row();

                        for user in page.rows {
                            self.show_row(ui, user, intents);
                            ui.end_row();
                        }
                    });
            });
    }

    fn show_row(&self, ui: &mut egui::Ui, user: &UserRecord, intents: &mut Vec<Intent>) {
        ui.label(user.id.to_string());
        ui.label(user.name.as_str());
        ui.label(user.email.as_str());
        ui.label(user.department_label());
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                intents.push(Intent::BeginEdit(user.clone()));
            }
            let deleting = self.state.is_deleting(user.id);
            if ui
                .add_enabled(!deleting, egui::Button::new("Delete"))
                .clicked()
            {
                intents.push(Intent::Delete(user.id));
            }
        });
    }

    fn show_pagination(ui: &mut egui::Ui, page: &PageView<'_>, intents: &mut Vec<Intent>) {
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("{} matching users", page.matching));
            for number in 1..=page.total_pages {
                if ui
                    .selectable_label(page.current_page == number, number.to_string())
                    .clicked()
                {
                    intents.push(Intent::SetPage(number));
                }
            }
        });
    }

    fn show_dashboard(&mut self, ctx: &egui::Context) {
        let mut intents = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            self.show_error_banner(ui);
            ui.add_space(6.0);
            self.show_controls(ui, &mut intents);
            ui.add_space(6.0);
            self.show_form(ui, &mut intents);
            ui.separator();

            let page = self.state.projection();
            self.show_table(ui, &page, &mut intents);
            ui.separator();
            Self::show_pagination(ui, &page, &mut intents);
        });

        for intent in intents {
            self.apply(intent);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_dashboard(ctx);
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
