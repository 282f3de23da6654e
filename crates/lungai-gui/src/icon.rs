//! LungAI application icon generator.
//!
//! Produces a procedural icon: two lung lobes hanging from a trachea on a
//! rounded blue tile, crossed by a bright horizontal scan line. Rendered at
//! an arbitrary resolution as RGBA pixel data for the window icon.

/// Generate the LungAI icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let tile_margin = s * 0.04;
    let tile_radius = s * 0.20;

    // Lobes: ellipses either side of the midline.
    let lobe_cy = s * 0.58;
    let lobe_rx = s * 0.18;
    let lobe_ry = s * 0.27;
    let lobe_offset = s * 0.21;

    // Trachea and bronchi.
    let mid = s * 0.5;
    let trachea_top = s * 0.14;
    let fork_y = s * 0.40;
    let airway_w = s * 0.045;

    let scan_y = s * 0.55;
    let scan_half = (s * 0.018).max(0.6);

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // 1. Background tile. ────────────────────────────────
            let tile_d = rounded_rect_dist(px, py, tile_margin, s - tile_margin, tile_radius);
            let tile_a = smooth_edge(tile_d, 0.0);
            if tile_a <= 0.0 {
                continue;
            }
            let grad = py / s;
            let mut cr = lerp_c(0x25, 0x1e, grad);
            let mut cg = lerp_c(0x63, 0x3a, grad);
            let mut cb = lerp_c(0xeb, 0x8a, grad);

            // 2. Lobes. ──────────────────────────────────────────
            for side in [-1.0f32, 1.0] {
                let cx = mid + side * lobe_offset;
                let nx = (px - cx) / lobe_rx;
                let ny = (py - lobe_cy) / lobe_ry;
                let norm = (nx * nx + ny * ny).sqrt();
                // Distance in pixels, approximated along the minor axis.
                let d = (norm - 1.0) * lobe_rx;
                let a = smooth_edge(d, 0.0);
                if a > 0.0 {
                    // Lighter toward the outer edge of each lobe.
                    let shade = 0.85 + 0.15 * (nx * side).clamp(0.0, 1.0);
                    cr = lerp_c(cr, (0xe0 as f32 * shade) as u8, a);
                    cg = lerp_c(cg, (0xec as f32 * shade) as u8, a);
                    cb = lerp_c(cb, (0xff as f32 * shade) as u8, a);
                }
            }

            // 3. Airways. ────────────────────────────────────────
            let airways = [
                (mid, trachea_top, mid, fork_y),
                (mid, fork_y, mid - lobe_offset * 0.7, fork_y + s * 0.12),
                (mid, fork_y, mid + lobe_offset * 0.7, fork_y + s * 0.12),
            ];
            let airway_d = airways
                .iter()
                .map(|&(ax, ay, bx, by)| point_to_seg_dist(px, py, ax, ay, bx, by))
                .fold(f32::MAX, f32::min);
            let a = smooth_edge(airway_d, airway_w);
            cr = lerp_c(cr, 0x1e, a);
            cg = lerp_c(cg, 0x3a, a);
            cb = lerp_c(cb, 0x8a, a);

            // 4. Scan line. ──────────────────────────────────────
            let a = smooth_edge((py - scan_y).abs(), scan_half) * 0.85;
            cr = lerp_c(cr, 0x4a, a);
            cg = lerp_c(cg, 0xde, a);
            cb = lerp_c(cb, 0x80, a);

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (tile_a * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Signed distance to a square spanning `lo..hi` on both axes with corner
/// radius `r`. Negative inside.
fn rounded_rect_dist(px: f32, py: f32, lo: f32, hi: f32, r: f32) -> f32 {
    let c = (lo + hi) * 0.5;
    let half = (hi - lo) * 0.5 - r;
    let qx = (px - c).abs() - half;
    let qy = (py - c).abs() - half;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - r
}

/// Perpendicular distance from a point to a line segment.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let proj_x = ax + t * abx;
    let proj_y = ay + t * aby;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn buffer_has_rgba_for_every_pixel() {
        let icon = generate_icon(32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
        assert_eq!((icon.width, icon.height), (32, 32));
    }

    #[test]
    fn corners_are_transparent() {
        let buf = render_icon(64);
        assert_eq!(pixel(&buf, 64, 0, 0)[3], 0);
        assert_eq!(pixel(&buf, 64, 63, 63)[3], 0);
    }

    #[test]
    fn lobe_centre_is_light_and_opaque() {
        let size = 64;
        let buf = render_icon(size);
        // Left lobe, below the scan line.
        let p = pixel(&buf, size, 19, 44);
        assert_eq!(p[3], 255);
        assert!(p[0] > 0xb0 && p[2] > 0xc0, "lobe pixel {p:?}");
    }
}
