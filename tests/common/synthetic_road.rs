/// Paints a 3px-wide bright marking for each `y = k·x + b` line into a dark
/// edge map, so every scanned row sees an isolated bright band per line.
pub fn road_edge_map(width: usize, height: usize, lines: &[(f32, f32)]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for &(k, b) in lines {
            assert!(k.abs() > 1e-3, "marking lines must not be horizontal");
            let x = ((y as f32 - b) / k).round() as isize;
            for dx in -1..=1 {
                let xi = x + dx;
                if xi >= 0 && (xi as usize) < width {
                    img[y * width + xi as usize] = 255;
                }
            }
        }
    }
    img
}

/// Endpoint quad lying on `y = k·x + b` between rows `y0` and `y1`, as the
/// upstream segment extractor would report it.
pub fn segment_on_line(k: f32, b: f32, y0: i32, y1: i32) -> [i32; 4] {
    let x0 = ((y0 as f32 - b) / k).round() as i32;
    let x1 = ((y1 as f32 - b) / k).round() as i32;
    [x0, y0, x1, y1]
}
