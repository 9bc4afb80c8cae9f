//! Mining: agents take turns in a quarry's job slots.

use crate::prelude::*;
use colony_core::{ContractViolation, SlotId};

fn quarry(sim: &mut Simulation, face: Point, stand: Point, loads: u32) -> (SenderId, SlotId) {
    let slot = sim.world_mut().slots.insert(stand);
    let reoffers = sim.world().config.max_reoffers;
    let slots = vec![QuarrySlot { slot, stand, face }];
    let id = sim.add_sender(|id| Quarry::new(id, face, Blueprint::new("iron ore"), slots, loads, reoffers));
    (id, slot)
}

#[test]
fn one_slot_is_worked_by_one_miner_at_a_time() {
    let mut sim = colony(&["###", "..."]).build();
    let (site, slot) = quarry(&mut sim, pt(1, 0), pt(1, 1), 2);
    let first = worker(&mut sim, "Urist", pt(0, 1), &[Category::Mining]);
    let second = worker(&mut sim, "Bomrek", pt(2, 1), &[Category::Mining]);

    let trace = trace(&mut sim, first, 6);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "1: (0, 1) mine/goto",
            "2: (1, 1) mine/mine",
            "3: (1, 1) idle",
            "4: (1, 1) mine/mine",
            "5: (1, 1) idle",
            "6: (1, 1) idle",
        ]
    );
    let ore = ItemId::new(1);
    assert_eq!(sim.world().items.location(ore), Some(pt(1, 1)));
    assert_eq!(sim.world().items.location(ItemId::new(2)), Some(pt(1, 1)));
    assert!(!sim.world().map.is_dug_out(pt(1, 0)));
    assert!(sim.world().slots.get(slot).unwrap().is_free());
    assert!(!sim.senders().get(site).unwrap().is_job_available());
    assert_eq!(sim.agent(second).unwrap().body.position, pt(2, 1));
}

#[test]
fn removed_miner_frees_the_slot_for_the_next() {
    let mut sim = colony(&["###", "..."]).config(|c| c.mine_ticks = 5).build();
    let (_, slot) = quarry(&mut sim, pt(1, 0), pt(1, 1), 1);
    let first = worker(&mut sim, "Urist", pt(0, 1), &[Category::Mining]);
    let second = worker(&mut sim, "Bomrek", pt(2, 1), &[Category::Mining]);

    sim.run(3).unwrap();
    assert_eq!(sim.world().slots.get(slot).unwrap().occupant(), Some(first));

    sim.remove_agent(first).unwrap();
    assert!(sim.world().slots.get(slot).unwrap().is_free());

    run_until(&mut sim, 30, |sim| sim.world().items.location(ItemId::new(1)).is_some());
    assert_eq!(sim.agent(second).unwrap().body.position, pt(1, 1));
    assert!(sim.world().slots.get(slot).unwrap().is_free());
}

#[test]
fn slot_guards_reject_a_second_occupant() {
    let mut sim = colony(&["..."]).build();
    let a = AgentId::new(1);
    let b = AgentId::new(2);
    let slot = sim.world_mut().slots.insert(pt(1, 0));
    let slots = &mut sim.world_mut().slots;

    slots.occupy(slot, a).unwrap();
    assert_eq!(
        slots.occupy(slot, b).unwrap_err(),
        ContractViolation::SlotOccupied {
            location: pt(1, 0),
            occupant: a,
            contender: b,
        }
    );
    assert_eq!(
        slots.free(slot, b).unwrap_err(),
        ContractViolation::SlotNotHeld {
            location: pt(1, 0),
            caller: b,
            occupant: Some(a),
        }
    );
    slots.free(slot, a).unwrap();
    slots.occupy(slot, b).unwrap();
    assert_eq!(slots.get(slot).unwrap().occupant(), Some(b));
}
