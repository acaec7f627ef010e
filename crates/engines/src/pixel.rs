//! Pure-computation RGBA8 rasterization.
//!
//! Two ways to turn a simulation into pixels: map a density [`Field`]
//! through a [`Palette`], or draw the classic figure (a gridded membrane
//! with one dot per filing) with [`draw_figure`]. Neither touches the
//! filesystem, so both are shared by the PNG snapshot and any in-memory host.

use chladni_core::error::EngineError;
use chladni_core::field::Field;
use chladni_core::palette::Palette;
use chladni_core::Srgb;

/// Maps field values through a palette to produce an RGBA8 pixel buffer.
///
/// The buffer length is `width * height * 4`; alpha is always 255.
pub fn field_to_rgba(field: &Field, palette: &Palette) -> Vec<u8> {
    field
        .data()
        .iter()
        .flat_map(|&t| palette.sample(t).to_rgba8())
        .collect()
}

/// Colors and geometry of the membrane figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub background: Srgb,
    pub grid: Srgb,
    pub border: Srgb,
    pub filings: Srgb,
    /// Number of grid cells along each side of the membrane.
    pub grid_divisions: usize,
    /// Border stroke width in pixels.
    pub border_width: usize,
    /// Filing dot radius in pixels.
    pub dot_radius: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            background: Srgb::BLACK,
            grid: Srgb::from_rgb8(0xa9, 0xa9, 0xa9),
            border: Srgb::from_rgb8(0x80, 0x80, 0x80),
            filings: Srgb::from_rgb8(0xd3, 0xd3, 0xd3),
            grid_divisions: 10,
            border_width: 2,
            dot_radius: 1.5,
        }
    }
}

/// Draws the membrane figure into a `width` × `height` RGBA8 buffer.
///
/// The membrane is the largest centered square; `positions` are membrane
/// coordinates in `[0, 1]²` with `y` growing downward. Grid lines go under
/// the border, filings on top.
///
/// Returns `EngineError::InvalidDimensions` if either dimension is zero.
pub fn draw_figure<I>(
    positions: I,
    width: usize,
    height: usize,
    style: &FigureStyle,
) -> Result<Vec<u8>, EngineError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut canvas = Canvas::new(width, height, style.background)?;
    let size = width.min(height) as f64;
    let left = (width as f64 - size) / 2.0;
    let top = (height as f64 - size) / 2.0;

    let divisions = style.grid_divisions.max(1);
    for i in 0..=divisions {
        let offset = i as f64 * size / divisions as f64;
        canvas.vline(left + offset, top, top + size, 1, style.grid);
        canvas.hline(top + offset, left, left + size, 1, style.grid);
    }

    let bw = style.border_width;
    canvas.vline(left, top, top + size, bw, style.border);
    canvas.vline(left + size, top, top + size, bw, style.border);
    canvas.hline(top, left, left + size, bw, style.border);
    canvas.hline(top + size, left, left + size, bw, style.border);

    for (x, y) in positions {
        canvas.disc(left + x * size, top + y * size, style.dot_radius, style.filings);
    }

    Ok(canvas.into_rgba())
}

/// RGBA8 drawing surface with clipped primitives.
struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    fn new(width: usize, height: usize, background: Srgb) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(EngineError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![background.to_rgba8(); len],
        })
    }

    fn put(&mut self, x: isize, y: isize, color: [u8; 4]) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Pixel span of a `thickness`-wide stroke centered on `pos`.
    fn stroke_span(pos: f64, thickness: usize) -> std::ops::Range<isize> {
        let t = thickness.max(1) as isize;
        let start = (pos - t as f64 / 2.0).round() as isize;
        start..start + t
    }

    fn vline(&mut self, x: f64, y0: f64, y1: f64, thickness: usize, color: Srgb) {
        let rgba = color.to_rgba8();
        for px in Self::stroke_span(x, thickness) {
            for py in y0.floor() as isize..=y1.ceil() as isize {
                self.put(px, py, rgba);
            }
        }
    }

    fn hline(&mut self, y: f64, x0: f64, x1: f64, thickness: usize, color: Srgb) {
        let rgba = color.to_rgba8();
        for py in Self::stroke_span(y, thickness) {
            for px in x0.floor() as isize..=x1.ceil() as isize {
                self.put(px, py, rgba);
            }
        }
    }

    /// Fills every pixel whose center lies within `radius` of `(cx, cy)`.
    fn disc(&mut self, cx: f64, cy: f64, radius: f64, color: Srgb) {
        let rgba = color.to_rgba8();
        let r2 = radius * radius;
        for py in (cy - radius).floor() as isize..=(cy + radius).ceil() as isize {
            for px in (cx - radius).floor() as isize..=(cx + radius).ceil() as isize {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put(px, py, rgba);
                }
            }
        }
    }

    fn into_rgba(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }
}
