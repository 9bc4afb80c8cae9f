//! How an agent chooses between its own chores and advertised work.

use crate::prelude::*;
use colony_engine::job::RestPlan;

#[test]
fn assigned_rest_comes_before_advertised_hauling() {
    let mut sim = colony(&["....."]).stockpile(pt(4, 0), 1).build();
    let dwarf = worker(&mut sim, "Urist", pt(2, 0), &[Category::Hauling]);
    haul_request(&mut sim, "stone", pt(2, 0));
    sim.assign(dwarf, RestPlan { ticks: 2 }).unwrap();

    let trace = trace(&mut sim, dwarf, 4);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "1: (2, 0) rest/wait",
            "2: (2, 0) idle",
            "3: (2, 0) haul/pickup",
            "4: (2, 0) haul/seek-storage",
        ]
    );
}

#[test]
fn a_running_job_is_not_interrupted() {
    let mut sim = colony(&["...#"]).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging]);
    dig_site(&mut sim, pt(3, 0));

    sim.tick().unwrap();
    sim.assign(dwarf, RestPlan { ticks: 2 }).unwrap();
    let trace = trace(&mut sim, dwarf, 4);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "2: (1, 0) dig/locate",
            "3: (2, 0) dig/dig",
            "4: (2, 0) idle",
            "5: (2, 0) rest/wait",
        ]
    );
}

#[test]
fn unsubscribed_agents_only_do_their_chores() {
    let mut sim = colony(&["...#"]).build();
    let dwarf = sim.spawn_agent("Urist", pt(0, 0));
    dig_site(&mut sim, pt(3, 0));
    sim.assign(dwarf, RestPlan { ticks: 2 }).unwrap();

    let trace = trace(&mut sim, dwarf, 3);

    similar_asserts::assert_eq!(
        trace,
        vec!["1: (0, 0) rest/wait", "2: (0, 0) idle", "3: (0, 0) idle"]
    );
}
