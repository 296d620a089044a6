use criterion::{criterion_group, criterion_main, Criterion};
use lanekit_tween_core::{
    parse_keyframe_set_json, Animator, Ease, KeyValue, Keyframe, KeyframeSet, PropBag,
    PropertyPath, TweenCfg,
};
use std::cell::RefCell;
use std::rc::Rc;

fn mk_set() -> KeyframeSet {
    let zoom = PropertyPath::parse("zoom").unwrap();
    let alpha = PropertyPath::parse("glow.alpha").unwrap();
    KeyframeSet::new(vec![
        Keyframe::at(0.0)
            .with(zoom.clone(), KeyValue::Number(1.25))
            .with(alpha.clone(), KeyValue::Number(1.0)),
        Keyframe::at(1.0)
            .with(zoom, KeyValue::Number(1.0))
            .with(alpha, KeyValue::Number(0.0)),
    ])
}

fn register_all(animator: &mut Animator, targets: &[Rc<RefCell<PropBag>>], set: &KeyframeSet) {
    for (i, target) in targets.iter().enumerate() {
        animator.animate(
            target,
            set,
            3600.0,
            TweenCfg {
                key: Some(format!("k{i}")),
                ease: Ease::bezier(0.33, 0.0, 0.66, 1.0),
                on_end: None,
            },
        );
    }
}

fn bench_tick(c: &mut Criterion) {
    let set = mk_set();
    let targets: Vec<Rc<RefCell<PropBag>>> = (0..64)
        .map(|_| Rc::new(RefCell::new(PropBag::new())))
        .collect();
    let mut animator = Animator::new();
    register_all(&mut animator, &targets, &set);

    c.bench_function("tick_64_tweens", |b| {
        b.iter(|| {
            if animator.is_empty() {
                register_all(&mut animator, &targets, &set);
            }
            animator.tick(0.004);
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let json = r#"{ "0": { "zoom": 0.5, "alpha": "inherit", "glow.alpha": 0 },
                    "0.6": { "zoom": 1.1, "alpha": 1, "glow.alpha": 0.8 },
                    "1": { "zoom": 1.0, "alpha": 1, "glow.alpha": 0 } }"#;

    c.bench_function("parse_keyframe_set", |b| {
        b.iter(|| parse_keyframe_set_json(json).unwrap())
    });
}

criterion_group!(benches, bench_tick, bench_parse);
criterion_main!(benches);
