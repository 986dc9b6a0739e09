use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use image::{ImageFormat, RgbaImage};
use log::{debug, error};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::{blit_rgba_centered, fill_rgba};
use crate::controllers::interactive::ports::presenter::PreviewPresenterPort;
use crate::core::data::artifact::Artifact;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::memory::artifact_store::PublishedArtifact;
use crate::presenters::pixels::adapter::PixelsAdapter;

const BACKDROP: [u8; 4] = [48, 48, 48, 255];

fn decode_artifact(artifact: &Artifact) -> Option<RgbaImage> {
    match image::load_from_memory_with_format(artifact.bytes(), ImageFormat::Png) {
        Ok(image) => Some(image.to_rgba8()),
        Err(e) => {
            error!("could not decode preview artifact: {e}");
            None
        }
    }
}

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    preview: Option<RgbaImage>,
    frame_dirty: bool,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            preview: None,
            frame_dirty: true,
        }
    }

    fn share_adapter(&self) -> Arc<dyn PreviewPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn PreviewPresenterPort>
    }

    fn published(&self) -> PublishedArtifact {
        self.adapter.published()
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.maybe_update_preview();

        if self.frame_dirty {
            self.draw_frame();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the preview
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if let Err(e) = self.pixels.resize_surface(width, height) {
            error!("failed to resize surface: {e}");
        }

        if let Err(e) = self.pixels.resize_buffer(width, height) {
            error!("failed to resize buffer: {e}");
        }

        self.frame_dirty = true;
    }
}

impl PixelsPresenter {
    fn maybe_update_preview(&mut self) {
        if !self.adapter.take_changed() {
            return;
        }

        let published = self.adapter.published();
        debug!("presenting generation {}", published.generation);

        self.preview = published.artifact.as_ref().and_then(decode_artifact);
        self.frame_dirty = true;
    }

    fn draw_frame(&mut self) {
        let (width, height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();

        if frame.len() != (width * height * 4) as usize {
            return;
        }

        fill_rgba(frame, BACKDROP);

        if let Some(preview) = &self.preview {
            blit_rgba_centered(
                preview.as_raw(),
                preview.width(),
                preview.height(),
                frame,
                width,
                height,
            );
        }

        self.frame_dirty = false;
    }
}
