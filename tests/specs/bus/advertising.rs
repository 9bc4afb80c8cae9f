//! Channel delivery: batching, new-subscriber notices, sender removal.

use crate::prelude::*;
use colony_core::ContractViolation;
use colony_engine::bus::Directory;
use colony_engine::{Channel, Message};

/// Records every delivery; senders listed in `with_work` answer
/// newcomers with a fresh advertisement.
#[derive(Default)]
struct Recorder {
    with_work: Vec<SenderId>,
    announced: Vec<(SenderId, AgentId)>,
    delivered: Vec<(AgentId, SenderId)>,
}

impl Directory for Recorder {
    fn announce(&mut self, sender: SenderId, subscriber: AgentId) -> Option<Message> {
        self.announced.push((sender, subscriber));
        self.with_work.contains(&sender).then(|| Message::new(sender))
    }

    fn deliver(&mut self, subscriber: AgentId, message: &Message) {
        self.delivered.push((subscriber, message.sender()));
    }
}

const A: AgentId = AgentId::new(1);
const B: AgentId = AgentId::new(2);
const Z: SenderId = SenderId::new(10);

#[test]
fn nothing_is_delivered_before_flush() {
    let mut channel = Channel::new("Digging").unwrap();
    channel.subscribe(A);
    channel.enqueue_message(Message::new(Z));

    assert_eq!(channel.pending_messages(), 1);
    assert_eq!(channel.pending_subscribers(), 1);
}

#[test]
fn late_subscriber_hears_about_existing_work() {
    let mut channel = Channel::new("Digging").unwrap();
    let mut directory = Recorder {
        with_work: vec![Z],
        ..Recorder::default()
    };
    channel.subscribe_sender(Z);
    channel.subscribe(A);
    channel.enqueue_message(Message::new(Z));

    let sent = channel.flush(&mut directory);

    assert_eq!(sent, 2);
    assert_eq!(directory.announced, vec![(Z, A)]);
    assert_eq!(directory.delivered, vec![(A, Z), (A, Z)]);
    assert_eq!(channel.pending_messages(), 0);
    assert_eq!(channel.pending_subscribers(), 0);
}

#[test]
fn new_subscriber_notice_is_sent_exactly_once() {
    let mut channel = Channel::new("Mining").unwrap();
    let mut directory = Recorder::default();
    channel.subscribe_sender(Z);
    channel.subscribe(A);

    channel.flush(&mut directory);
    channel.subscribe(B);
    channel.flush(&mut directory);
    channel.flush(&mut directory);

    assert_eq!(directory.announced, vec![(Z, A), (Z, B)]);
    assert!(directory.delivered.is_empty());
}

#[test]
fn every_subscriber_gets_every_message_in_order() {
    let mut channel = Channel::new("Hauling").unwrap();
    let mut directory = Recorder::default();
    let y = SenderId::new(11);
    channel.subscribe(A);
    channel.subscribe(B);
    channel.enqueue_message(Message::new(Z));
    channel.enqueue_message(Message::new(y));

    channel.flush(&mut directory);

    assert_eq!(directory.delivered, vec![(A, Z), (B, Z), (A, y), (B, y)]);
}

#[test]
fn subscribing_twice_changes_nothing() {
    let mut channel = Channel::new("Digging").unwrap();
    assert!(channel.subscribe(A));
    assert!(!channel.subscribe(A));
    assert_eq!(channel.subscribers().collect::<Vec<_>>(), vec![A]);
    assert_eq!(channel.pending_subscribers(), 1);
}

#[test]
fn leaving_before_flush_skips_the_notice() {
    let mut channel = Channel::new("Digging").unwrap();
    let mut directory = Recorder::default();
    channel.subscribe_sender(Z);
    channel.subscribe(A);
    channel.unsubscribe(A);

    channel.flush(&mut directory);

    assert!(directory.announced.is_empty());
}

#[test]
fn removed_sender_messages_are_purged() {
    let mut channel = Channel::new("Digging").unwrap();
    let mut directory = Recorder::default();
    channel.subscribe(A);
    channel.subscribe_sender(Z);
    channel.enqueue_message(Message::new(Z));

    assert!(channel.unsubscribe_sender(Z));
    channel.flush(&mut directory);

    assert!(directory.delivered.is_empty());
    assert!(directory.announced.is_empty());
}

#[test]
fn channels_need_a_name() {
    assert_eq!(Channel::new("").unwrap_err(), ContractViolation::EmptyChannelName);
}

#[test]
fn simulation_delivers_adverts_on_the_next_tick() {
    let mut sim = colony(&["...#"]).build();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging]);
    let site = dig_site(&mut sim, pt(3, 0));
    assert_eq!(sim.bus().channel(Category::Digging).pending_messages(), 1);

    sim.tick().unwrap();

    let agent = sim.agent(dwarf).unwrap();
    assert_eq!(agent.scheduler.current().unwrap().sender(), Some(site));
    assert_eq!(sim.bus().channel(Category::Digging).pending_messages(), 0);
}
