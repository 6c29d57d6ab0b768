use super::*;

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(3, 2).unwrap();
    assert_eq!(s.data().len(), 3 * 2 * 4);
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn zero_sized_surface_is_rejected() {
    assert!(Surface::new(0, 4).is_err());
    assert!(Surface::from_premul(2, 2, vec![0; 15]).is_err());
}

#[test]
fn out_of_bounds_access_is_ignored() {
    let mut s = Surface::new(2, 2).unwrap();
    s.set_pixel(-1, 0, [255, 255, 255, 255]);
    s.set_pixel(2, 0, [255, 255, 255, 255]);
    s.blend_pixel(0, 5, [255, 255, 255, 255]);
    assert!(s.data().iter().all(|&b| b == 0));
    assert_eq!(s.pixel(-1, 0), None);
    assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn blend_over_opaque_background() {
    let mut s = Surface::new(1, 1).unwrap();
    s.set_pixel(0, 0, [255, 255, 255, 255]);
    s.blend_pixel(0, 0, Rgba8::new(0, 0, 0, 100).to_premul());
    let c = s.color_at(0, 0).unwrap();
    assert_eq!(c.a, 255);
    assert_eq!(c.r, 155);
}

#[test]
fn draw_over_clips_at_edges() {
    let mut dst = Surface::new(4, 4).unwrap();
    let src = Surface::from_premul(2, 2, [9u8, 9, 9, 255].repeat(4)).unwrap();
    dst.draw_over(&src, 3, -1);
    assert_eq!(dst.pixel(3, 0), Some([9, 9, 9, 255]));
    assert_eq!(dst.pixel(2, 0), Some([0, 0, 0, 0]));
    assert_eq!(dst.pixel(3, 1), Some([0, 0, 0, 0]));
}

#[test]
fn rgba_image_round_trip_preserves_opaque_pixels() {
    let img = image::RgbaImage::from_raw(2, 1, vec![10, 20, 30, 255, 0, 0, 0, 0]).unwrap();
    let s = Surface::from_rgba_image(img.clone()).unwrap();
    assert_eq!(s.to_rgba_image().unwrap(), img);
}

#[test]
fn fill_row_touches_only_that_row() {
    let mut s = Surface::new(2, 3).unwrap();
    s.fill_row(1, [1, 2, 3, 4]);
    assert_eq!(s.pixel(0, 1), Some([1, 2, 3, 4]));
    assert_eq!(s.pixel(1, 1), Some([1, 2, 3, 4]));
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(0, 2), Some([0, 0, 0, 0]));
}
