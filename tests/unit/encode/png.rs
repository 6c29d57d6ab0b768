use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "movie_collage_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn writes_decodable_png_into_created_dir() {
    let dir = temp_dir("png_sink").join("nested");
    let mut sink = PngDirSink::new(&dir);
    let frame = Surface::from_premul(3, 2, [10u8, 20, 30, 255].repeat(6)).unwrap();
    let info = FrameInfo {
        year: 2024,
        frame_number: 1,
        total_frames: 1,
    };

    sink.begin(1).unwrap();
    let shown = sink.push_frame(info, &frame).unwrap();
    sink.end().unwrap();

    let path = dir.join("movie_collage_2024.png");
    assert_eq!(shown, path.display().to_string());
    assert_eq!(sink.written(), &[path.clone()]);

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30, 255]);

    std::fs::remove_dir_all(dir.parent().unwrap()).ok();
}

#[test]
fn unwritable_target_is_an_encode_error() {
    let dir = temp_dir("png_sink_blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let info = FrameInfo {
        year: 2024,
        frame_number: 1,
        total_frames: 1,
    };
    // A directory squatting on the output file name makes the write fail.
    std::fs::create_dir_all(dir.join("movie_collage_2024.png")).unwrap();

    let mut sink = PngDirSink::new(&dir);
    sink.begin(1).unwrap();
    let err = sink
        .push_frame(info, &Surface::new(1, 1).unwrap())
        .unwrap_err();
    assert!(matches!(err, CollageError::Encode(_)));

    std::fs::remove_dir_all(&dir).ok();
}
