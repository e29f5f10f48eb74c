use paired_lights::monitoring::narrator::Narrator;
use paired_lights::{Intersection, LightColour, LightEvent, Time};

fn changed(at: Time, light: &str, colour: LightColour) -> LightEvent {
    LightEvent::ColourChanged {
        at,
        light: light.to_string(),
        colour,
    }
}

#[test]
fn red_pair_crossing_advances_two_delays() {
    let mut intersection = Intersection::new();
    let a = intersection.add_light(Time::new(0, 0, 10), "A");
    let b = intersection
        .add_light_with_collaborator(Time::new(0, 0, 10), "B", a)
        .unwrap();

    let events = intersection.request_crossing(a).unwrap();

    assert_eq!(
        events,
        vec![
            LightEvent::CrossingRequested {
                at: Time::new(0, 0, 0),
                light: "A".to_string(),
                colour: LightColour::Red,
            },
            changed(Time::new(0, 0, 10), "A", LightColour::Yellow),
            changed(Time::new(0, 0, 20), "A", LightColour::Green),
        ]
    );
    assert_eq!(intersection.light(b).unwrap().colour(), LightColour::Red);
}

#[test]
fn golden_trace_red_light_meets_green_collaborator() {
    let mut intersection = Intersection::new();
    let a = intersection.add_light(Time::new(0, 0, 5), "A");
    let b = intersection
        .add_light_with_collaborator(Time::new(0, 0, 5), "B", a)
        .unwrap();
    intersection.request_crossing(b).unwrap();
    intersection.set_time(Time::new(0, 0, 0));

    let events = intersection.request_crossing(a).unwrap();
    let lines = Narrator::default().render_all(&events).unwrap();

    assert_eq!(
        lines,
        vec![
            "",
            "***  at 0:0:0 a car wants to cross light A, with colour: red",
            "     at 0:0:5 B changes colour to yellow",
            "     at 0:0:10 A changes colour to yellow",
            "     at 0:0:15 B changes colour to red",
            "     at 0:0:20 A changes colour to green",
        ]
    );
    assert_eq!(intersection.light(a).unwrap().colour(), LightColour::Green);
    assert_eq!(intersection.light(b).unwrap().colour(), LightColour::Red);
    assert_eq!(intersection.clock(), Time::new(0, 0, 20));
}

#[test]
fn waiting_car_at_green_light_changes_nothing() {
    let mut intersection = Intersection::starting_at(Time::new(12, 0, 0));
    let a = intersection.add_light(Time::new(0, 0, 5), "A");
    intersection.request_crossing(a).unwrap();

    let events = intersection.request_crossing(a).unwrap();

    assert_eq!(events.len(), 1);
    assert!(!events[0].is_transition());
    assert_eq!(intersection.clock(), Time::new(12, 0, 10));
}

#[test]
fn isolated_light_has_no_collaborator_side_effects() {
    let mut intersection = Intersection::new();
    let lone = intersection.add_light(Time::new(0, 0, 7), "Lone");
    let other = intersection.add_light(Time::new(0, 0, 7), "Other");

    let events = intersection.request_crossing(lone).unwrap();

    assert!(events.iter().all(|e| e.light() == "Lone"));
    assert_eq!(intersection.light(lone).unwrap().colour(), LightColour::Green);
    assert_eq!(intersection.light(other).unwrap().colour(), LightColour::Red);
    assert_eq!(intersection.light(other).unwrap().collaborator(), None);
}

#[test]
fn light_added_before_partner_gets_linked() {
    let mut intersection = Intersection::new();
    let a = intersection.add_light(Time::new(0, 0, 5), "A");
    assert_eq!(intersection.light(a).unwrap().collaborator(), None);

    let b = intersection
        .add_light_with_collaborator(Time::new(0, 0, 5), "B", a)
        .unwrap();

    assert_eq!(intersection.light(a).unwrap().collaborator(), Some(b));
}

#[test]
fn clock_wraps_past_midnight_during_cascade() {
    let mut intersection = Intersection::starting_at(Time::new(23, 59, 55));
    let a = intersection.add_light(Time::new(0, 0, 5), "A");

    intersection.request_crossing(a).unwrap();

    assert_eq!(intersection.clock(), Time::new(0, 0, 5));
}

#[test]
fn cascade_through_one_way_link_follows_existing_pair() {
    let delay = Time::new(0, 0, 5);
    let mut intersection = Intersection::new();
    let a = intersection.add_light(delay, "A");
    let b = intersection.add_light_with_collaborator(delay, "B", a).unwrap();
    let c = intersection.add_light_with_collaborator(delay, "C", a).unwrap();
    assert_eq!(intersection.light(a).unwrap().collaborator(), Some(b));
    assert_eq!(intersection.light(c).unwrap().collaborator(), Some(a));
    intersection.request_crossing(a).unwrap();

    let events = intersection.request_crossing(c).unwrap();

    // A hands green to its own partner B; C is never part of the exchange
    assert_eq!(
        events[1..].to_vec(),
        vec![
            changed(Time::new(0, 0, 15), "A", LightColour::Yellow),
            changed(Time::new(0, 0, 20), "B", LightColour::Yellow),
            changed(Time::new(0, 0, 25), "A", LightColour::Red),
            changed(Time::new(0, 0, 30), "B", LightColour::Green),
        ]
    );
    assert_eq!(intersection.light(b).unwrap().colour(), LightColour::Green);
    assert_eq!(intersection.light(c).unwrap().colour(), LightColour::Red);
    assert_eq!(intersection.clock(), Time::new(0, 0, 30));
}
