use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Allocate a blank (all zero) canvas
pub fn new_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

/// Paint every pixel of the canvas with one color
pub fn fill(img: &mut RgbaImage, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    fill_rect(img, Rect::at(0, 0).of_size(width, height), color);
}

/// Paint a rectangle, clipped to the canvas. Pixels outside are left as-is.
pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    draw_filled_rect_mut(img, rect, color);
}

/// Set a pixel if it lies on the canvas. Returns false when skipped.
pub fn put_pixel_checked(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return false;
    }
    img.put_pixel(x, y, color);
    true
}
