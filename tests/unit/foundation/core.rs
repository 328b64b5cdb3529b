use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(matches!(
        Fps::new(0, 1),
        Err(StepreelError::InvalidArgument(_))
    ));
    assert!(matches!(
        Fps::new(30, 0),
        Err(StepreelError::InvalidArgument(_))
    ));
}

#[test]
fn secs_to_frames_rounds_to_nearest() {
    let fps = Fps::whole(30).unwrap();
    assert_eq!(fps.secs_to_frames_round(4.0), 120);
    assert_eq!(fps.secs_to_frames_round(1.49), 45);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.secs_to_frames_round(1.0), 30);
}

#[test]
fn fps_display_is_compact() {
    assert_eq!(BASELINE_FPS.to_string(), "30");
    assert_eq!(Fps::new(30000, 1001).unwrap().to_string(), "30000/1001");
}
