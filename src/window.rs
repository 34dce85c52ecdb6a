//! The winit application that hosts a field in a window.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::color::Rgb;
use crate::controls::StatsDisplay;
use crate::error::SimulationError;
use crate::frame_loop::FrameLoop;
use crate::gpu::{tessellate, GpuState, Vertex};
use crate::input::Input;
use crate::render::DrawList;

#[cfg(feature = "egui")]
use crate::gpu::EguiIntegration;

/// Window parameters fixed at startup.
#[derive(Debug, Clone)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
}

/// Mirrors the stats slots into the window title.
#[derive(Debug, Default)]
struct TitleStats {
    fps: u32,
    connections: usize,
    dirty: bool,
}

impl StatsDisplay for TitleStats {
    fn show_fps(&mut self, fps: u32) {
        self.fps = fps;
        self.dirty = true;
    }

    fn show_connections(&mut self, connections: usize) {
        self.connections = connections;
    }
}

pub(crate) struct App {
    settings: WindowSettings,
    frame_loop: FrameLoop,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    #[cfg(feature = "egui")]
    egui: Option<EguiIntegration>,
    input: Input,
    draw_list: DrawList,
    vertices: Vec<Vertex>,
    title_stats: TitleStats,
    error: Option<SimulationError>,
}

impl App {
    pub fn new(settings: WindowSettings, frame_loop: FrameLoop) -> Self {
        Self {
            settings,
            frame_loop,
            window: None,
            gpu: None,
            #[cfg(feature = "egui")]
            egui: None,
            input: Input::new(),
            draw_list: DrawList::new(),
            vertices: Vec::new(),
            title_stats: TitleStats::default(),
            error: None,
        }
    }

    /// The error that ended the event loop, if any.
    pub fn into_result(self) -> Result<(), SimulationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: SimulationError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.settings.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width,
                self.settings.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuState::new(window.clone(), self.settings.background))?;

        let scale_factor = window.scale_factor();
        self.input.set_scale_factor(scale_factor);

        let logical = window.inner_size().to_logical::<f32>(scale_factor);
        let state = self.frame_loop.state_mut();
        if state.bounds() != glam::Vec2::new(logical.width, logical.height) {
            state.resize(logical.width, logical.height);
            state.set_pointer(state.bounds() * 0.5);
        }
        log::info!(
            "Window created: {}x{} logical, scale factor {}",
            logical.width,
            logical.height,
            scale_factor
        );

        #[cfg(feature = "egui")]
        {
            self.egui = Some(EguiIntegration::new(gpu.device(), gpu.format(), &window));
        }

        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) else {
            return;
        };

        for event in self.input.control_events() {
            self.frame_loop.state_mut().apply(event);
        }
        if self.input.stop_requested() {
            log::info!("Stop requested");
            self.frame_loop.stop_handle().stop();
        }
        self.input.begin_frame();

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                return;
            }
        };

        #[cfg(feature = "egui")]
        let egui_output = match self.egui.as_mut() {
            Some(egui) => {
                egui.begin_pass(window);
                let events = crate::ui::render_control_panel(
                    &egui.ctx,
                    self.frame_loop.state(),
                    self.frame_loop.stats(),
                );
                for event in events {
                    self.frame_loop.state_mut().apply(event);
                }
                Some(egui.end_pass(window))
            }
            None => None,
        };

        self.frame_loop
            .frame(&mut self.draw_list, Some(&mut self.title_stats));
        tessellate(self.draw_list.commands(), &mut self.vertices);
        gpu.draw_field(&mut frame, &self.vertices, self.frame_loop.state().bounds());

        #[allow(unused_mut)]
        let mut extra = Vec::new();
        #[cfg(feature = "egui")]
        {
            if let (Some(egui), Some(output)) = (self.egui.as_mut(), egui_output) {
                let size = [gpu.config.width, gpu.config.height];
                extra = egui.paint(gpu.device(), gpu.queue(), &mut frame, size, output);
            }
        }
        gpu.finish(frame, extra);

        if self.title_stats.dirty {
            self.title_stats.dirty = false;
            window.set_title(&format!(
                "{} | {} fps | {} connections",
                self.settings.title, self.title_stats.fps, self.title_stats.connections
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        {
            if let (Some(egui), Some(window)) = (self.egui.as_mut(), self.window.as_ref()) {
                if egui.on_window_event(window, &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                self.frame_loop.stop_handle().stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(window) = &self.window {
                    let logical = physical_size.to_logical::<f32>(window.scale_factor());
                    self.frame_loop
                        .state_mut()
                        .resize(logical.width, logical.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                self.input.handle_event(&event);
                if let Some(pointer) = self.input.pointer() {
                    self.frame_loop.state_mut().set_pointer(pointer);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame_loop.is_running() {
            event_loop.exit();
        } else if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
