//! Digging: walk next to a solid tile, dig it out.

use crate::prelude::*;

#[test]
fn digger_picks_the_closest_side() {
    let mut sim = colony(&["....", ".#..", "...."]).build();
    let dwarf = worker(&mut sim, "Urist", pt(3, 1), &[Category::Digging]);
    let site = dig_site(&mut sim, pt(1, 1));

    let trace = trace(&mut sim, dwarf, 4);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "1: (3, 1) dig/locate",
            "2: (2, 1) dig/dig",
            "3: (2, 1) idle",
            "4: (2, 1) idle",
        ]
    );
    assert!(sim.world().map.is_dug_out(pt(1, 1)));
    assert!(!sim.senders().get(site).unwrap().is_job_available());
}

#[test]
fn slow_digging_takes_the_configured_ticks() {
    let mut sim = colony(&["..#"]).config(|c| c.dig_ticks = 3).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging]);
    dig_site(&mut sim, pt(2, 0));

    let trace = trace(&mut sim, dwarf, 6);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "1: (0, 0) dig/locate",
            "2: (1, 0) dig/dig",
            "3: (1, 0) dig/dig",
            "4: (1, 0) dig/dig",
            "5: (1, 0) idle",
            "6: (1, 0) idle",
        ]
    );
    assert!(sim.world().map.is_dug_out(pt(2, 0)));
}

#[test]
fn unreachable_tile_is_given_up_after_reoffers() {
    let mut sim = colony(&[".#.#."]).config(|c| c.max_reoffers = 1).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging]);
    let site = dig_site(&mut sim, pt(3, 0));

    sim.run(12).unwrap();

    assert!(!sim.world().map.is_dug_out(pt(3, 0)));
    assert!(!sim.senders().get(site).unwrap().is_job_available());
    let agent = sim.agent(dwarf).unwrap();
    assert_eq!(agent.body.position, pt(0, 0));
    assert!(agent.scheduler.is_idle());
}

#[test]
fn two_diggers_never_share_one_tile() {
    let mut sim = colony(&["...#"]).build();
    let first = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging]);
    let second = worker(&mut sim, "Bomrek", pt(1, 0), &[Category::Digging]);
    dig_site(&mut sim, pt(3, 0));

    sim.tick().unwrap();

    assert!(sim.agent(first).unwrap().scheduler.current().is_some());
    assert!(sim.agent(second).unwrap().scheduler.current().is_none());
}
