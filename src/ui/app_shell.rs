use eframe::egui;
use eframe::egui::load::SizedTexture;
use tracing::{debug, warn};

use crate::app::controller::ApplicationController;
use crate::app::error::AppError;
use crate::app::events::AppEvent;
use crate::app::state::ViewMode;
use crate::engine::adjustments::Parameter;
use crate::engine::codec::SUPPORTED_EXTENSIONS;
use crate::infra::config::AppConfig;
use crate::ui::preview::{display_size, preview_color_image};

const PLACEHOLDER_TEXT: &str = "Upload An Image !!!";

pub struct ColorAdjusterApp {
    config: AppConfig,
    controller: ApplicationController,
    preview: Option<egui::TextureHandle>,
    preview_generation: Option<u64>,
    error_message: Option<String>,
}

impl ColorAdjusterApp {
    pub fn new(config: AppConfig, controller: ApplicationController) -> Self {
        Self {
            config,
            controller,
            preview: None,
            preview_generation: None,
            error_message: None,
        }
    }

    fn handle(&mut self, event: AppEvent) {
        if let Err(error) = self.controller.dispatch(event) {
            self.error_message = Some(error.to_string());
        }
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let generation = self.controller.display_generation();
        if self.preview_generation == Some(generation) {
            return;
        }

        self.preview_generation = Some(generation);
        self.preview = self.controller.displayed_image().map(|image| {
            let color_image = preview_color_image(image, self.config.preview_max_size);
            ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR)
        });
        debug!(generation, "preview texture refreshed");
    }

    fn file_menu(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.strong("File Menu");
                let showing_enhanced = self.controller.view_mode() == ViewMode::Enhanced;
                let toggle_label = if showing_enhanced {
                    "Showing enhanced"
                } else {
                    "Showing original"
                };
                let toggle = egui::SelectableLabel::new(showing_enhanced, toggle_label);
                if ui.add_enabled(self.controller.has_image(), toggle).clicked() {
                    events.push(AppEvent::ToggleView);
                }
                if ui.button("Reset").clicked() {
                    events.push(AppEvent::ResetAdjustments);
                }
                if ui.button("Upload").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &SUPPORTED_EXTENSIONS)
                        .pick_file()
                    {
                        events.push(AppEvent::OpenImage(path));
                    }
                }
                if ui.button("Save").clicked() {
                    match self.controller.enhanced_image().map(|_| ()) {
                        Ok(()) => {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", &SUPPORTED_EXTENSIONS)
                                .set_file_name("enhanced.png")
                                .save_file()
                            {
                                events.push(AppEvent::SaveImage(path));
                            }
                        }
                        Err(error) => self.report(error),
                    }
                }
            });
        });
    }

    fn color_controllers(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.strong("Color Controllers");
                egui::Grid::new("color_controllers")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        let adjustments = self.controller.adjustments();
                        for parameter in Parameter::ALL {
                            let spec = parameter.spec();
                            let mut raw = adjustments.get(parameter);
                            ui.label(parameter.label());
                            let slider = egui::Slider::new(&mut raw, spec.raw_min..=spec.raw_max);
                            if ui.add(slider).changed() {
                                events.push(AppEvent::SetParameter(parameter, raw));
                            }
                            ui.end_row();
                        }
                    });
            });
        });
    }

    fn report(&mut self, error: AppError) {
        warn!("{error}");
        self.error_message = Some(error.to_string());
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.error_message = None;
        }
    }
}

impl eframe::App for ColorAdjusterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::TopBottomPanel::bottom("tool_bar")
            .max_height(self.config.toolbar_max_height)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.file_menu(ui, &mut events);
                    self.color_controllers(ui, &mut events);
                });
            });

        for event in events {
            self.handle(event);
        }
        self.refresh_preview(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| match &self.preview {
                Some(texture) => {
                    let size = display_size(
                        texture.size(),
                        ui.available_size(),
                        self.config.preview_max_size,
                    );
                    let image = egui::Image::from_texture(SizedTexture::from_handle(texture))
                        .fit_to_exact_size(size);
                    ui.add(image);
                }
                None => {
                    ui.label(PLACEHOLDER_TEXT);
                }
            });
        });

        self.error_window(ctx);
    }
}

pub fn launch_window(config: AppConfig, controller: ApplicationController) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };
    let title = config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ColorAdjusterApp::new(config, controller)))
        }),
    )
    .map_err(|error| AppError::Ui(error.to_string()))
}
