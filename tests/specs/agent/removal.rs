//! Removing an agent mid-job hands its work to someone else.

use crate::prelude::*;

#[test]
fn carried_item_is_dropped_and_hauled_by_another() {
    let mut sim = colony(&["....."]).stockpile(pt(4, 0), 1).build();
    let first = worker(&mut sim, "Urist", pt(0, 0), &[Category::Hauling]);
    let second = worker(&mut sim, "Bomrek", pt(0, 0), &[Category::Hauling]);
    let (item, request) = haul_request(&mut sim, "stone", pt(2, 0));

    sim.run(5).unwrap();
    assert!(sim.agent(first).unwrap().body.hands.holding().is_some());
    assert!(sim.agent(second).unwrap().scheduler.is_idle());

    let gone = sim.remove_agent(first).unwrap();

    assert!(gone.body.hands.holding().is_none());
    assert_eq!(sim.world().items.location(item), Some(pt(2, 0)));
    assert!(sim.senders().get(request).unwrap().is_job_available());

    run_until(&mut sim, 30, |sim| sim.agent(second).unwrap().scheduler.is_idle()
        && sim.world().items.location(item).is_none()
        && sim.agent(second).unwrap().body.hands.holding().is_none());
    assert_eq!(sim.agent(second).unwrap().body.position, pt(4, 0));
    assert!(!sim.senders().get(request).unwrap().is_job_available());
}

#[test]
fn removed_agent_stops_hearing_adverts() {
    let mut sim = colony(&["...#"]).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging, Category::Hauling]);

    sim.remove_agent(dwarf).unwrap();
    let site = dig_site(&mut sim, pt(3, 0));
    sim.run(3).unwrap();

    for category in [Category::Digging, Category::Hauling] {
        assert!(!sim.bus().channel(category).is_subscribed(dwarf));
    }
    assert!(sim.senders().get(site).unwrap().is_job_available());
    assert!(sim.agent(dwarf).is_none());
}
