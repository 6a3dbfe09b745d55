use std::process::ExitCode;

use glam::Vec4;
use glow::HasContext;

use crate::{
    abs::*,
    config::Config,
    events::EventOutcome,
    font::FontFace,
    glyph::GlyphRenderer,
};

mod abs;
mod config;
mod events;
mod font;
mod glyph;
mod logging;
mod triangle;

macro_rules! shader_program {
    ($name:ident, $gl:expr) => {
        ShaderProgram::from_sources(
            &$gl,
            include_str!(concat!("shaders/", stringify!($name), "/vert.glsl")),
            include_str!(concat!("shaders/", stringify!($name), "/frag.glsl")),
        )
    };
}

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(level, config.log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), String> {
    let mut app = App::new(&config.title, config.width, config.height, config.vsync)
        .map_err(|e| format!("Failed to create window or OpenGL context: {e}"))?;
    log::info!("OpenGL {}", app.gl_version());

    let triangle_program = shader_program!(triangle, app.gl)?;
    let glyph_program = shader_program!(glyph, app.gl)?;

    let triangle = triangle::triangle_mesh(&app.gl)?;
    log::debug!("Triangle mesh ready with {} indices", triangle.index_count());
    let glyph_renderer = GlyphRenderer::new(&app.gl, glyph_program)?;

    let font_path = config.resolve_font_path()?;
    let face = FontFace::open(&font_path, config.pixel_size)?;
    let bitmap = face.rasterize(config.character)?;
    log::info!(
        "Drawing {:?} from {} at {}px",
        config.character,
        font_path.display(),
        face.pixel_size()
    );

    let glyph_color = Vec4::from_array(config.glyph_color);
    let [r, g, b, a] = config.clear_color;

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match events::handle_event(&event) {
                EventOutcome::Quit => break 'running,
                EventOutcome::Resized(width, height) => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                EventOutcome::Continue => {}
            }
        }

        unsafe {
            app.gl.clear_color(r, g, b, a);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if config.draw_triangle {
            triangle_program.use_program();
            triangle.draw();
        }

        glyph_renderer.draw(&bitmap, glyph_color)?;

        app.window.gl_swap_window();
    }

    log::info!("Shutting down");
    Ok(())
}
