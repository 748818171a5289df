//! PNG heatmap of a generated map
//!
//! Each cell becomes a `cell_size` square shaded by its payout relative to the
//! map maximum, with a black outline. Player one's spawn is a red disc, player
//! two's a blue one.

use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;
use thiserror::Error;

use crate::{grid::GridPos, map::MapDescriptor};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const P1_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const P2_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cell size must be at least 1 pixel")]
    InvalidCellSize,

    #[error("image of {width}x{height} cells at {cell_size}px exceeds the maximum size")]
    TooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Grey level for `value`, scaled against `max`. A non-positive max yields 0.
pub fn shade(value: f64, max: f64) -> u8 {
    if !max.is_finite() || max <= 0.0 {
        return 0;
    }
    (value / max * 255.0).clamp(0.0, 255.0) as u8
}

pub fn render_map(map: &MapDescriptor, cell_size: u32) -> Result<RgbImage, RenderError> {
    if cell_size == 0 {
        return Err(RenderError::InvalidCellSize);
    }
    let too_large = || RenderError::TooLarge {
        width: map.width(),
        height: map.height(),
        cell_size,
    };
    let img_w = map.width().checked_mul(cell_size).ok_or_else(too_large)?;
    let img_h = map.height().checked_mul(cell_size).ok_or_else(too_large)?;

    let mut img = RgbImage::from_pixel(img_w, img_h, BLACK);
    let max = map.payout_rates().max_value();

    for pos in map.dims().positions() {
        let g = shade(map.payout(pos.x, pos.y), max);
        fill_cell(&mut img, pos, cell_size, Rgb([g, g, g]));
    }

    draw_marker(&mut img, map.p1_spawn(), cell_size, P1_COLOR);
    draw_marker(&mut img, map.p2_spawn(), cell_size, P2_COLOR);
    Ok(img)
}

pub fn save_png(
    map: &MapDescriptor,
    cell_size: u32,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let img = render_map(map, cell_size)?;
    img.save(path)?;
    info!(
        "wrote {}x{} heatmap to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

fn fill_cell(img: &mut RgbImage, pos: GridPos, s: u32, color: Rgb<u8>) {
    let (x0, y0) = (pos.x * s, pos.y * s);
    for dy in 0..s {
        for dx in 0..s {
            let edge = dx == 0 || dy == 0 || dx == s - 1 || dy == s - 1;
            let px = if edge { BLACK } else { color };
            img.put_pixel(x0 + dx, y0 + dy, px);
        }
    }
}

// Disc inscribed in the cell with a one pixel black rim.
fn draw_marker(img: &mut RgbImage, pos: GridPos, s: u32, color: Rgb<u8>) {
    let r = f64::from(s) / 2.0;
    let (x0, y0) = (pos.x * s, pos.y * s);
    for dy in 0..s {
        for dx in 0..s {
            let fx = f64::from(dx) + 0.5 - r;
            let fy = f64::from(dy) + 0.5 - r;
            let d = (fx * fx + fy * fy).sqrt();
            if d > r {
                continue;
            }
            let px = if d > r - 1.0 { BLACK } else { color };
            img.put_pixel(x0 + dx, y0 + dy, px);
        }
    }
}
