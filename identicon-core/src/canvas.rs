//! Canvas Collaborator and Render Stage
//!
//! Pixel work is delegated to the `image` crate. The render stage only
//! decides what to paint and in which order.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb as Pixel, RgbImage};
use log::debug;

use crate::color::Rgb;
use crate::layout::{Rect, CANVAS_SIZE};
use crate::pipeline::PipelineError;
use crate::stages::Planned;

/// Raster surface the render stage paints on.
pub trait Canvas: Sized {
    fn blank(width: u32, height: u32) -> Self;

    /// Fill `x1 <= x < x2`, `y1 <= y < y2`, clipped to the canvas.
    fn fill_rect(&mut self, rect: &Rect, color: Rgb);

    fn encode(&self) -> Result<Vec<u8>, PipelineError>;
}

/// White RGB canvas encoded as PNG.
pub struct PngCanvas {
    image: RgbImage,
}

impl PngCanvas {
    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

impl Canvas for PngCanvas {
    fn blank(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Pixel(Rgb::WHITE.to_array())),
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        let x_end = rect.bottom_right.x.min(self.image.width());
        let y_end = rect.bottom_right.y.min(self.image.height());
        let pixel = Pixel(color.to_array());

        for y in rect.top_left.y..y_end {
            for x in rect.top_left.x..x_end {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    fn encode(&self) -> Result<Vec<u8>, PipelineError> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(buf)
    }
}

/// Paint every rectangle of the plan, in order, onto a fresh canvas.
pub fn paint<C: Canvas>(planned: &Planned) -> C {
    let mut canvas = C::blank(CANVAS_SIZE, CANVAS_SIZE);
    let color = planned.color();
    for rect in &planned.pixel_map {
        canvas.fill_rect(rect, color);
    }
    canvas
}

/// Render the plan and serialize it to encoded bytes.
pub fn render<C: Canvas>(planned: &Planned) -> Result<Vec<u8>, PipelineError> {
    let bytes = paint::<C>(planned).encode()?;
    debug!(
        "rendered {} rectangles into {} bytes",
        planned.pixel_map.len(),
        bytes.len()
    );
    Ok(bytes)
}
