use std::sync::Arc;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::download::DownloadAction;
use crate::controllers::interactive::RecomputationController;
use crate::core::data::colour::Colour;
use crate::core::data::error_correction::ErrorCorrectionLevel;
use crate::core::data::parameters::Parameters;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::presenters::file::png::PngFilePresenter;

const EMPTY_PREVIEW_MESSAGE: &str = "Enter text to generate";

fn colour_picker(ui: &mut egui::Ui, label: &str, colour: &mut Colour) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut rgb = [colour.r, colour.g, colour.b];
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            *colour = Colour::rgb(rgb[0], rgb[1], rgb[2]);
        }
        ui.monospace(colour.to_hex());
    });
}

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: Arc<RecomputationController>,
    ui_state: GuiAppState,
    download: DownloadAction<PngFilePresenter>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: Arc<RecomputationController>,
        download: DownloadAction<PngFilePresenter>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let ui_state = GuiAppState::new(controller.clone());

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ui_state,
            download,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// Pushes this frame's widget edits into the parameter store.
    pub fn commit_edits(&mut self) {
        self.ui_state.commit();
    }

    fn download(&mut self) {
        let published = self.presenter.published();

        self.ui_state.last_download = match self.download.download(published.artifact.as_ref()) {
            Ok(saved) => saved.map(Ok),
            Err(e) => {
                error!("download failed: {e}");
                Some(Err(e.to_string()))
            }
        };
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let published = self.presenter.published();
        let download_status = self.ui_state.download_status();
        let mut download_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            let draft = &mut self.ui_state.draft;

            egui::Window::new("QR Code")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    ui.heading("QR Studio");
                    ui.separator();

                    ui.label("Content:");
                    ui.text_edit_singleline(&mut draft.content);

                    colour_picker(ui, "Foreground:", &mut draft.foreground);
                    colour_picker(ui, "Background:", &mut draft.background);

                    ui.label(format!("Size: {}px", draft.pixel_size));
                    ui.add(
                        egui::Slider::new(&mut draft.pixel_size, Parameters::pixel_size_range())
                            .show_value(false),
                    );

                    ui.horizontal(|ui| {
                        ui.label("Error correction:");
                        for &level in ErrorCorrectionLevel::ALL {
                            ui.selectable_value(
                                &mut draft.error_correction,
                                level,
                                level.display_name(),
                            );
                        }
                    });

                    ui.separator();
                    if let Some(artifact) = &published.artifact {
                        ui.label(format!("Preview: {}x{}", artifact.width(), artifact.height()));
                        if let Some(duration) = published.encode_duration {
                            ui.label(format!("Last encode: {} ms", duration.as_millis()));
                        }
                    }

                    let enabled = DownloadAction::<PngFilePresenter>::is_enabled(published.artifact.as_ref());
                    if ui
                        .add_enabled(enabled, egui::Button::new("Download PNG"))
                        .clicked()
                    {
                        download_clicked = true;
                    }

                    if let Some(status) = &download_status {
                        ui.small(status.as_str());
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    ui.label(format!(
                        "Latest generation: {}",
                        self.controller.current_generation()
                    ));
                });

            if published.artifact.is_none() {
                egui::Area::new(egui::Id::new("empty_preview"))
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.heading(EMPTY_PREVIEW_MESSAGE);
                    });
            }
        });

        if download_clicked {
            self.download();
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
