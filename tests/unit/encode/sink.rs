use super::*;

fn info(frame_number: usize, total_frames: usize) -> FrameInfo {
    FrameInfo {
        year: 2025,
        frame_number,
        total_frames,
    }
}

#[test]
fn single_frame_name_has_no_part_suffix() {
    assert_eq!(output_file_name(info(1, 1)), "movie_collage_2025.png");
}

#[test]
fn multi_frame_names_carry_part_suffix() {
    assert_eq!(output_file_name(info(1, 2)), "movie_collage_2025_part_1.png");
    assert_eq!(output_file_name(info(2, 2)), "movie_collage_2025_part_2.png");
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    let frame = Surface::new(2, 2).unwrap();

    sink.begin(2).unwrap();
    assert_eq!(sink.push_frame(info(1, 2), &frame).unwrap(), "movie_collage_2025_part_1.png");
    sink.push_frame(info(2, 2), &frame).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.total_frames(), Some(2));
    assert!(sink.ended());
    let numbers: Vec<usize> = sink.frames().iter().map(|(i, _)| i.frame_number).collect();
    assert_eq!(numbers, vec![1, 2]);
}
