mod common;

use common::{at, bounds, Call, Canvas, MockHost};
use potsdam::{
    error::Error,
    face::EventKind,
    geometry::{Angle, FULL_TURN},
    text::Locale,
    ui::{Digital, SweptHands, TicksDate},
    Event, Face, LayerId, LayerKind, LayerTable, Phase, TimeUnit, Variant, WatchFace,
};

fn load<W: potsdam::WatchFace>(face: &mut Face<W>, host: &mut MockHost, h: u32, m: u32, s: u32) {
    face.handle(
        host,
        Event::Load {
            bounds: bounds(),
            now: at(h, m, s),
        },
    )
    .unwrap();
}

#[test]
fn load_allocates_draws_and_subscribes() {
    let mut host = MockHost::new();
    let mut face = Face::new(SweptHands { seconds: true });
    assert_eq!(face.phase(), Phase::Created);

    load(&mut face, &mut host, 3, 0, 0);

    assert_eq!(face.phase(), Phase::Loaded);
    assert_eq!(
        host.calls,
        vec![
            Call::Create(LayerKind::Background, LayerId(0)),
            Call::Create(LayerKind::Hands, LayerId(1)),
            Call::Dirty(LayerId(0)),
            Call::Dirty(LayerId(1)),
            Call::Subscribe(TimeUnit::Second),
        ]
    );
    assert!(face.geometry().is_some());
}

#[test]
fn clock_is_sampled_before_the_first_paint() {
    let mut host = MockHost::new();
    let mut face = Face::new(Digital);
    load(&mut face, &mut host, 13, 5, 0);
    assert_eq!(face.state().time_label, "13:05");
    assert_eq!(face.state().angles.hour.raw(), FULL_TURN * (60 + 5) / 720);
}

#[test]
fn tick_recomputes_and_marks_only_dynamic_layers() {
    let mut host = MockHost::new();
    let mut face = Face::new(TicksDate { date: true });
    load(&mut face, &mut host, 10, 0, 0);
    host.calls.clear();

    face.handle(&mut host, Event::Tick { now: at(10, 30, 0) }).unwrap();

    assert_eq!(host.calls, vec![Call::Dirty(LayerId(1)), Call::Dirty(LayerId(2))]);
    assert_eq!(face.state().angles.minute, Angle::new(FULL_TURN / 2));
}

#[test]
fn unload_unsubscribes_before_releasing_in_reverse_order() {
    let mut host = MockHost::new();
    let mut face = Face::new(TicksDate { date: true });
    load(&mut face, &mut host, 10, 0, 0);
    host.calls.clear();

    face.handle(&mut host, Event::Unload).unwrap();

    assert_eq!(
        host.calls,
        vec![
            Call::Unsubscribe,
            Call::Destroy(LayerId(2)),
            Call::Destroy(LayerId(1)),
            Call::Destroy(LayerId(0)),
        ]
    );
    assert_eq!(face.phase(), Phase::Unloaded);
    assert!(face.geometry().is_none());
}

#[test]
fn every_created_layer_is_destroyed_exactly_once() {
    for variant in Variant::ALL {
        let mut host = MockHost::new();
        let mut face = Face::new(variant);
        load(&mut face, &mut host, 8, 15, 30);
        face.handle(&mut host, Event::Tick { now: at(8, 16, 0) }).unwrap();
        face.handle(&mut host, Event::Unload).unwrap();
        face.destroy(&mut host).unwrap();

        let mut created = host.created();
        let mut destroyed = host.destroyed();
        assert_eq!(created.len(), variant.layers().len(), "{:?}", variant);
        created.sort_by_key(|id| id.0);
        destroyed.sort_by_key(|id| id.0);
        assert_eq!(created, destroyed, "{:?}", variant);
        assert_eq!(face.phase(), Phase::Destroyed);
    }
}

#[test]
fn ticks_after_unload_are_rejected_without_side_effects() {
    let mut host = MockHost::new();
    let mut face = Face::new(SweptHands { seconds: false });
    load(&mut face, &mut host, 9, 0, 0);
    face.handle(&mut host, Event::Unload).unwrap();
    let before = face.state().clone();
    host.calls.clear();

    let result = face.handle(&mut host, Event::Tick { now: at(9, 1, 0) });

    assert_eq!(
        result,
        Err(Error::InvalidTransition {
            phase: Phase::Unloaded,
            event: EventKind::Tick,
        })
    );
    assert!(host.calls.is_empty());
    assert_eq!(face.state(), &before);
}

#[test]
fn events_out_of_order_are_rejected() {
    let mut host = MockHost::new();
    let mut face = Face::new(Digital);
    assert!(face.handle(&mut host, Event::Tick { now: at(1, 0, 0) }).is_err());
    assert!(face.handle(&mut host, Event::Unload).is_err());

    load(&mut face, &mut host, 1, 0, 0);
    let again = face.handle(
        &mut host,
        Event::Load {
            bounds: bounds(),
            now: at(1, 0, 0),
        },
    );
    assert_eq!(
        again,
        Err(Error::InvalidTransition {
            phase: Phase::Loaded,
            event: EventKind::Load,
        })
    );
    assert_eq!(host.created().len(), 2);
}

#[test]
fn face_can_be_loaded_again_after_unload() {
    let mut host = MockHost::new();
    let mut face = Face::new(Digital);
    load(&mut face, &mut host, 1, 0, 0);
    face.handle(&mut host, Event::Unload).unwrap();
    load(&mut face, &mut host, 2, 0, 0);

    assert_eq!(face.phase(), Phase::Loaded);
    assert_eq!(face.state().time_label, "02:00");
    assert_eq!(host.created().len(), 4);
    assert_eq!(host.destroyed().len(), 2);
}

#[test]
fn failed_allocation_aborts_load_and_releases_what_was_created() {
    let mut host = MockHost::new();
    host.fail_create_at = Some(1);
    let mut face = Face::new(TicksDate { date: true });

    let result = face.handle(
        &mut host,
        Event::Load {
            bounds: bounds(),
            now: at(1, 0, 0),
        },
    );

    assert_eq!(result, Err(Error::LayerAllocation));
    assert_eq!(face.phase(), Phase::Created);
    assert_eq!(
        host.calls,
        vec![
            Call::Create(LayerKind::Background, LayerId(0)),
            Call::Destroy(LayerId(0)),
        ]
    );
    assert_eq!(host.position(Call::Subscribe(TimeUnit::Minute)), None);
}

#[test]
fn destroy_unloads_a_loaded_face() {
    let mut host = MockHost::new();
    let mut face = Face::new(Digital);
    load(&mut face, &mut host, 1, 0, 0);

    face.destroy(&mut host).unwrap();

    let unsubscribe = host.position(Call::Unsubscribe).unwrap();
    let first_destroy = host.position(Call::Destroy(LayerId(1))).unwrap();
    assert!(unsubscribe < first_destroy);
    assert_eq!(face.phase(), Phase::Destroyed);
    assert!(face.destroy(&mut host).is_err());
    assert!(face
        .handle(
            &mut host,
            Event::Load {
                bounds: bounds(),
                now: at(1, 0, 0),
            },
        )
        .is_err());
}

#[test]
fn clock_style_is_queried_on_every_tick() {
    let mut host = MockHost::new();
    let mut face = Face::new(Digital);
    load(&mut face, &mut host, 13, 5, 0);
    assert_eq!(face.state().time_label, "13:05");

    host.use_24h = false;
    face.handle(&mut host, Event::Tick { now: at(13, 6, 0) }).unwrap();
    assert_eq!(face.state().time_label, "1:06");
    assert_eq!(host.clock_style_queries.get(), 2);
}

#[test]
fn locale_comes_from_the_host() {
    let mut host = MockHost::new();
    host.locale = Locale::German;
    let mut face = Face::new(TicksDate { date: true });
    load(&mut face, &mut host, 13, 5, 0);
    assert_eq!(face.state().date_label, "Mi 5");
}

#[test]
fn unloaded_face_paints_nothing() {
    let mut host = MockHost::new();
    let mut face = Face::new(Digital);
    load(&mut face, &mut host, 1, 0, 0);
    face.handle(&mut host, Event::Unload).unwrap();

    let mut canvas = Canvas::new();
    face.paint(LayerId(0), &mut canvas).unwrap();
    assert_eq!(canvas.count(common::UNPAINTED), (common::WIDTH * common::HEIGHT) as usize);
}

#[test]
fn layer_table_drives_a_face() {
    let mut table = LayerTable::<3>::new(true, Locale::English);
    let mut face = Face::new(Variant::SweptSeconds);
    let mut canvas = Canvas::new();

    face.handle(
        &mut table,
        Event::Load {
            bounds: bounds(),
            now: at(3, 0, 0),
        },
    )
    .unwrap();
    table.prime(&at(3, 0, 0));
    assert_eq!(table.subscription(), Some(TimeUnit::Second));
    assert_eq!(
        table.layer_kinds().collect::<Vec<_>>(),
        vec![LayerKind::Background, LayerKind::Hands]
    );

    assert!(table.paint_dirty(&face, &mut canvas).unwrap());
    assert!(!table.paint_dirty(&face, &mut canvas).unwrap());

    let now = at(3, 0, 1);
    if table.should_tick(&now) {
        face.handle(&mut table, Event::Tick { now }).unwrap();
    }
    assert!(table.is_dirty());
    assert!(table.paint_dirty(&face, &mut canvas).unwrap());

    face.handle(&mut table, Event::Unload).unwrap();
    assert_eq!(table.subscription(), None);
    assert_eq!(table.layer_count(), 0);
    assert!(!table.should_tick(&at(3, 0, 2)));
}

#[test]
fn minute_face_waits_for_the_next_minute_after_load() {
    let mut table = LayerTable::<3>::new(true, Locale::English);
    let mut face = Face::new(Variant::Digital);
    let mut canvas = Canvas::new();

    let loaded_at = at(10, 0, 30);
    face.handle(
        &mut table,
        Event::Load {
            bounds: bounds(),
            now: loaded_at,
        },
    )
    .unwrap();
    table.prime(&loaded_at);
    assert!(table.paint_dirty(&face, &mut canvas).unwrap());

    for second in 31..60 {
        assert!(!table.should_tick(&at(10, 0, second)));
    }
    assert!(!table.is_dirty());

    let now = at(10, 1, 0);
    assert!(table.should_tick(&now));
    face.handle(&mut table, Event::Tick { now }).unwrap();
    assert_eq!(face.state().time_label, "10:01");
    assert!(table.is_dirty());
}
