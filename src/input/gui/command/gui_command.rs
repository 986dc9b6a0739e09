use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::adapters::encoder::qrcode_png::QrcodePngEncoder;
use crate::controllers::download::DownloadAction;
use crate::controllers::interactive::RecomputationController;
use crate::input::gui::app::{events::gui::GuiEvent, gui_app::GuiApp, ports::presenter::GuiPresenterPort};
use crate::input::gui::command::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::file::png::PngFilePresenter;

pub struct GuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    download_directory: PathBuf,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> GuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, download_directory: impl Into<PathBuf>) -> Self {
        Self {
            presenter_factory,
            download_directory: download_directory.into(),
            _phantom: PhantomData,
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .thread_name("qr-encode")
            .build()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("QR Studio")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(320.0, 320.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy);
        let controller = Arc::new(RecomputationController::new(
            Arc::new(QrcodePngEncoder::new()),
            presenter.share_adapter(),
            runtime.handle().clone(),
        ));
        let download = DownloadAction::new(PngFilePresenter::new(), self.download_directory.clone());
        let mut app = GuiApp::new(window, &event_loop, presenter, controller, download);
        let mut redraw_pending = true;

        info!("downloads go to {}", self.download_directory.display());

        event_loop.run(|event, elwt| {
            match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    redraw_pending = true;
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let (_egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                    if egui_repaint {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::CloseRequested => {
                            app.controller.shutdown();
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            let egui_output = app.update_ui(window);
                            app.commit_edits();

                            // Handle egui platform output (e.g., clipboard, cursor changes)
                            app.egui_state.handle_platform_output(
                                window,
                                egui_output.platform_output.clone(),
                            );

                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            if let Err(e) = app.render(egui_output) {
                                error!("render error: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
