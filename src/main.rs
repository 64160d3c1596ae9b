use std::io::{self, BufWriter};
use std::time::Instant;

use log::debug;

use mandelbrot_pbm::{raster, render, Size};

/// Edge length used when no argument is given.
const DEFAULT_EDGE: u32 = 16000;

fn main() -> io::Result<()> {
    env_logger::init();

    // One optional positional edge length; anything unparseable falls
    // back to the default.
    let edge = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_EDGE);
    let size = Size::square(edge);
    debug!(
        "rendering {}x{} across {} cores",
        size.width,
        size.height,
        num_cpus::get()
    );

    let started = Instant::now();
    let pixels = render(size);
    debug!("rendered in {:?}", started.elapsed());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    raster::write_pbm(&mut out, size, &pixels)
}
