use super::*;

#[test]
fn events_serialize_with_camel_case_tag() {
    let ev = StepEvent {
        t: 12,
        kind: StepKind::FoundDuplicate {
            symbol: 'a',
            at_index: 3,
        },
    };
    let v = serde_json::to_value(&ev).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "t": 12, "type": "foundDuplicate", "char": "a", "atIndex": 3 })
    );

    let ev = StepEvent {
        t: 0,
        kind: StepKind::<char>::MoveLeftUntil {
            from_index: 0,
            stop_at_index: 1,
        },
    };
    let v = serde_json::to_value(&ev).unwrap();
    assert_eq!(v["type"], "moveLeftUntil");
    assert_eq!(v["fromIndex"], 0);
    assert_eq!(v["stopAtIndex"], 1);
}

#[test]
fn events_deserialize_from_renderer_json() {
    let ev: StepEvent<char> =
        serde_json::from_str(r#"{ "t": 5, "type": "moveRight", "index": 2, "char": "c" }"#)
            .unwrap();
    assert_eq!(
        ev,
        StepEvent {
            t: 5,
            kind: StepKind::MoveRight {
                index: 2,
                symbol: 'c'
            }
        }
    );
}

#[test]
fn kind_names_match_categories() {
    let kinds: [StepKind<char>; 5] = [
        StepKind::MoveRight {
            index: 0,
            symbol: 'x',
        },
        StepKind::AddToSet { symbol: 'x' },
        StepKind::FoundDuplicate {
            symbol: 'x',
            at_index: 0,
        },
        StepKind::MoveLeftUntil {
            from_index: 0,
            stop_at_index: 1,
        },
        StepKind::UpdateBest { start: 0, end: 0 },
    ];
    let names: Vec<_> = kinds.iter().map(StepKind::name).collect();
    assert_eq!(
        names,
        [
            "moveRight",
            "addToSet",
            "foundDuplicate",
            "moveLeftUntil",
            "updateBest"
        ]
    );
    let cats: Vec<_> = kinds.iter().map(StepKind::category).collect();
    assert_eq!(cats, StepCategory::ALL);
}

#[test]
fn best_window_uses_last_update() {
    let trace = Trace {
        events: vec![
            StepEvent {
                t: 0,
                kind: StepKind::UpdateBest { start: 0, end: 0 },
            },
            StepEvent {
                t: 4,
                kind: StepKind::UpdateBest { start: 1, end: 3 },
            },
            StepEvent {
                t: 9,
                kind: StepKind::AddToSet { symbol: 'q' },
            },
        ],
        duration: 20,
    };
    assert_eq!(trace.best_window(), Some((1, 3)));
    assert_eq!(trace.best_len(), 3);

    let empty: Trace = Trace {
        events: vec![],
        duration: 1,
    };
    assert!(empty.is_empty());
    assert_eq!(empty.best_len(), 0);
}
