use super::*;

fn stub(label: &str, duration: u64) -> LabeledTrace {
    LabeledTrace {
        label: label.to_owned(),
        trace: Trace {
            events: vec![],
            duration,
        },
    }
}

fn starts(tl: &Timeline) -> Vec<u64> {
    tl.segments.iter().map(|s| s.start_frame).collect()
}

fn crossfade(overlap_frames: u64) -> AssembleOpts {
    AssembleOpts {
        policy: TransitionPolicy::Crossfade {
            overlap_frames,
            ease: Ease::Linear,
        },
        label_max_frames: 45,
    }
}

#[test]
fn hard_cut_tiles_without_gaps() {
    let traces = [stub("first", 373), stub("second", 244)];
    let tl = assemble(120, &traces, 120, &AssembleOpts::default());

    assert_eq!(starts(&tl), vec![0, 120, 493, 737]);
    assert_eq!(tl.total_duration, 120 + 373 + 244 + 120);
    for pair in tl.segments.windows(2) {
        assert_eq!(pair[1].start_frame, pair[0].end_frame());
    }
    assert_eq!(tl.segments.last().unwrap().end_frame(), tl.total_duration);
    assert!(
        tl.segments
            .iter()
            .all(|s| s.envelope.fade_in_frames == 0 && s.envelope.fade_out_frames == 0)
    );
}

#[test]
fn payloads_and_ids_follow_input_order() {
    let traces = [stub("first", 10), stub("second", 20)];
    let tl = assemble(5, &traces, 5, &AssembleOpts::default());
    let ids: Vec<_> = tl.segments.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["intro", "example-0", "example-1", "outro"]);
    assert_eq!(tl.segments[0].payload, SegmentPayload::Intro);
    assert_eq!(tl.segments[2].payload, SegmentPayload::Trace { index: 1 });
    assert_eq!(tl.segments[3].payload, SegmentPayload::Outro);
}

#[test]
fn labels_share_segment_start_and_are_bounded() {
    let traces = [stub("long", 300), stub("short", 20)];
    let tl = assemble(120, &traces, 120, &AssembleOpts::default());
    assert_eq!(tl.labels.len(), 2);
    assert_eq!(tl.labels[0].segment_id, "example-0");
    assert_eq!(tl.labels[0].text, "long");
    assert_eq!(tl.labels[0].start_frame, 120);
    assert_eq!(tl.labels[0].duration_frames, 45);
    assert_eq!(tl.labels[1].start_frame, 420);
    assert_eq!(tl.labels[1].duration_frames, 20);

    assert_eq!(tl.labels_at(130).count(), 1);
    assert_eq!(tl.labels_at(200).count(), 0);
}

#[test]
fn no_traces_places_intro_and_outro_back_to_back() {
    let tl = assemble::<char>(120, &[], 90, &AssembleOpts::default());
    assert_eq!(tl.segments.len(), 2);
    assert_eq!(starts(&tl), vec![0, 120]);
    assert_eq!(tl.total_duration, 210);
    assert!(tl.labels.is_empty());
}

#[test]
fn crossfade_subtracts_overlap_once_per_transition() {
    let traces = [stub("first", 373), stub("second", 244)];
    let tl = assemble(120, &traces, 120, &crossfade(15));

    assert_eq!(starts(&tl), vec![0, 105, 463, 692]);
    assert_eq!(tl.total_duration, 120 + 373 + 244 + 120 - 15 * 3);
    assert_eq!(tl.segments.last().unwrap().end_frame(), tl.total_duration);

    assert_eq!(tl.segments[0].envelope.fade_in_frames, 0);
    assert_eq!(tl.segments[0].envelope.fade_out_frames, 15);
    assert_eq!(tl.segments[1].envelope.fade_in_frames, 15);
    assert_eq!(tl.segments[3].envelope.fade_out_frames, 0);
}

#[test]
fn crossfade_overlap_is_capped_by_short_neighbors() {
    let traces = [stub("tiny", 4)];
    let tl = assemble(0, &traces, 120, &crossfade(15));

    // Empty intro cannot overlap; the 4-frame trace caps the next transition.
    assert_eq!(starts(&tl), vec![0, 0, 0]);
    assert_eq!(tl.segments[1].envelope.fade_in_frames, 0);
    assert_eq!(tl.segments[1].envelope.fade_out_frames, 4);
    assert_eq!(tl.total_duration, 120);
    for pair in tl.segments.windows(2) {
        assert!(pair[0].start_frame <= pair[1].start_frame);
    }
}

#[test]
fn short_segment_never_leaves_three_segments_live() {
    let traces = [stub("short", 20)];
    let tl = assemble(120, &traces, 120, &crossfade(15));

    // The 20-frame trace spends 15 frames fading in, leaving 5 to share with the outro.
    assert_eq!(starts(&tl), vec![0, 105, 120]);
    assert_eq!(tl.segments[1].envelope.fade_in_frames, 15);
    assert_eq!(tl.segments[1].envelope.fade_out_frames, 5);
    assert_eq!(tl.total_duration, 240);
    for f in 0..tl.total_duration {
        assert!(tl.segments_at(f).len() <= 2, "frame {f}");
    }

    let ids: Vec<_> = tl.segments_at(112).into_iter().map(|(s, _)| s.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "example-0"]);
}

#[test]
fn segments_at_reports_both_sides_of_a_crossfade() {
    let traces = [stub("first", 373)];
    let tl = assemble(120, &traces, 120, &crossfade(15));

    let live: Vec<_> = tl
        .segments_at(110)
        .into_iter()
        .map(|(s, local)| (s.id.as_str(), local))
        .collect();
    assert_eq!(live, vec![("intro", 110), ("example-0", 5)]);

    let hard = assemble(120, &traces, 120, &AssembleOpts::default());
    assert_eq!(hard.segments_at(110).len(), 1);
    assert!(hard.segments_at(hard.total_duration).is_empty());
}

#[test]
fn envelope_ramps_linearly() {
    let env = Envelope {
        fade_in_frames: 3,
        fade_out_frames: 3,
        ease: Ease::Linear,
    };
    let values: Vec<f64> = (0..11).map(|f| env.opacity(f, 10)).collect();
    assert_eq!(
        values,
        vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 0.0]
    );
}

#[test]
fn hard_cut_segments_are_fully_opaque() {
    let traces = [stub("first", 30)];
    let tl = assemble(10, &traces, 10, &AssembleOpts::default());
    let seg = &tl.segments[1];
    assert_eq!(seg.opacity_at(10), 1.0);
    assert_eq!(seg.opacity_at(39), 1.0);
    assert_eq!(seg.opacity_at(40), 0.0);
}

#[test]
fn policy_deserializes_from_config_json() {
    let p: TransitionPolicy =
        serde_json::from_str(r#"{ "kind": "crossfade", "overlap_frames": 12 }"#).unwrap();
    assert_eq!(
        p,
        TransitionPolicy::Crossfade {
            overlap_frames: 12,
            ease: Ease::Linear
        }
    );
    let p: TransitionPolicy = serde_json::from_str(r#"{ "kind": "hard_cut" }"#).unwrap();
    assert_eq!(p, TransitionPolicy::HardCut);
}
