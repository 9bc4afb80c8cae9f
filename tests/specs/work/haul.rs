//! Hauling: fetch a loose item and carry it to a stockpile.

use crate::prelude::*;

#[test]
fn hauler_carries_item_to_the_stockpile() {
    let mut sim = colony(&["....."]).stockpile(pt(4, 0), 1).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Hauling]);
    let (item, _) = haul_request(&mut sim, "stone", pt(2, 0));

    let trace = trace(&mut sim, dwarf, 8);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "1: (0, 0) haul/goto",
            "2: (1, 0) haul/goto",
            "3: (2, 0) haul/pickup",
            "4: (2, 0) haul/seek-storage",
            "5: (2, 0) haul/seek-storage",
            "6: (3, 0) haul/seek-storage",
            "7: (4, 0) haul/drop",
            "8: (4, 0) idle",
        ]
    );
    assert_eq!(sim.world().items.location(item), None);
    assert!(sim.agent(dwarf).unwrap().body.hands.holding().is_none());
    assert_eq!(sim.world().storage.find_storage(&ItemKind::new("stone"), pt(0, 0)), None);
}

#[test]
fn item_is_put_back_down_when_no_storage_exists() {
    let mut sim = colony(&["....."]).config(|c| c.max_reoffers = 0).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Hauling]);
    let (item, request) = haul_request(&mut sim, "stone", pt(2, 0));

    sim.run(8).unwrap();

    assert_eq!(sim.world().items.location(item), Some(pt(2, 0)));
    let agent = sim.agent(dwarf).unwrap();
    assert!(agent.body.hands.holding().is_none());
    assert!(agent.scheduler.is_idle());
    assert!(!sim.senders().get(request).unwrap().is_job_available());
}

#[test]
fn haul_is_abandoned_when_the_item_vanishes() {
    let mut sim = colony(&["....."]).stockpile(pt(4, 0), 1).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Hauling]);
    let (item, request) = haul_request(&mut sim, "stone", pt(2, 0));

    sim.tick().unwrap();
    sim.world_mut().items.take(item);
    sim.run(3).unwrap();

    let agent = sim.agent(dwarf).unwrap();
    assert!(agent.scheduler.is_idle());
    assert!(agent.body.hands.holding().is_none());
    assert!(!sim.senders().get(request).unwrap().is_job_available());
}

#[test]
fn haulers_fill_a_stockpile_one_item_at_a_time() {
    let mut sim = colony(&["....."]).stockpile(pt(4, 0), 2).build();
    worker(&mut sim, "Urist", pt(0, 0), &[Category::Hauling]);
    let (first, _) = haul_request(&mut sim, "stone", pt(1, 0));
    let (second, _) = haul_request(&mut sim, "wood", pt(2, 0));

    run_until(&mut sim, 40, |sim| {
        sim.world().items.location(first).is_none()
            && sim.world().items.location(second).is_none()
            && sim.agents().all(|a| a.scheduler.is_idle())
    });

    assert_eq!(sim.world().storage.find_storage(&ItemKind::new("stone"), pt(0, 0)), None);
}
