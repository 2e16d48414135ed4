// File: crates/maze-plot/src/window.rs
// Summary: Displays a rendered chart in a native window via RGBA blit (CPU) using winit + softbuffer.
// Notes:
// - Blocks on the event loop until the window is closed; the process exits with it.
// - The chart is re-rendered at the window's size on every redraw.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use chart_core::{Chart, RenderOptions};
use tracing::{debug, warn};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Open a window titled `title` showing `chart`. Returns only on setup failure.
pub fn show(chart: Chart, opts: RenderOptions, title: &str) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .context("failed to create window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut frame_opts = opts;

    event_loop.run(move |event, _, control_flow| {
        // display connection must outlive the surface
        let _context = &context;
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                debug!("window closed");
                *control_flow = ControlFlow::Exit;
            }
            Event::WindowEvent { event: WindowEvent::Resized(new_size), .. } => {
                size = new_size;
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&chart, &mut frame_opts, size, &mut surface) {
                    warn!("redraw skipped: {e:#}");
                }
            }
            _ => {}
        }
    })
}

fn present(
    chart: &Chart,
    opts: &mut RenderOptions,
    size: PhysicalSize<u32>,
    surface: &mut softbuffer::Surface,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;
    opts.width = w.get() as i32;
    opts.height = h.get() as i32;

    let (rgba, _, _, _) = chart.render_to_rgba8(opts)?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = pack_rgb(px);
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

/// softbuffer pixels are `0x00RRGGBB`.
fn pack_rgb(px: &[u8]) -> u32 {
    (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32
}
