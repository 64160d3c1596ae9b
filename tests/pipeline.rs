use mandelbrot_pbm::{raster, render, Size};

/// Render `size` and frame it as a complete PBM stream.
fn render_stream(size: Size) -> Vec<u8> {
    let pixels = render(size);
    let mut out = Vec::new();
    raster::write_pbm(&mut out, size, &pixels).unwrap();
    out
}

#[test]
fn effective_size_is_rounded_up_for_any_request() {
    for n in [1, 7, 8, 9, 100, 1000, 1001] {
        let size = Size::square(n);
        assert_eq!(size.width, (n + 7) / 8 * 8);
        assert_eq!(size.height, size.width);
        assert_eq!(render(size).len(), size.buffer_len());
    }
}

#[test]
fn eight_by_eight_frame_layout() {
    let stream = render_stream(Size::square(8));

    // Two text lines of header, then exactly one byte per row.
    assert_eq!(&stream[..7], b"P4\n8 8\n");
    assert_eq!(stream.len(), 7 + 8);
}

#[test]
fn pipeline_is_idempotent() {
    let first = render_stream(Size::square(72));
    let second = render_stream(Size::square(72));
    assert_eq!(first, second);
}

#[test]
fn output_does_not_depend_on_worker_count() {
    let size = Size::square(96);
    let default_pool = render(size);

    let single = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| render(size));
    assert_eq!(default_pool, single);

    let three = rayon::ThreadPoolBuilder::new()
        .num_threads(3)
        .build()
        .unwrap()
        .install(|| render(size));
    assert_eq!(default_pool, three);
}

#[test]
fn interior_stays_black_at_any_scale() {
    // The origin maps to column 3/4 * width, row height/2; it is in the
    // set, so that pixel is black for every size.
    for n in [8, 16, 64] {
        let size = Size::square(n);
        let pixels = render(size);

        let x = 3 * size.width as usize / 4;
        let y = size.height as usize / 2;
        let byte = pixels[y * size.bytes_per_row() + x / 8];
        assert_eq!(byte >> (7 - x % 8) & 1, 1, "size {}", n);
    }
}
