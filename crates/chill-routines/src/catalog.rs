//! The builtin break catalog.
//!
//! Twelve routines, each with one or more scenarios. Dynamic detail
//! providers draw from the engine's shared generator so seeded runs
//! reproduce the flavor text too.

use chill_core::{BreakRoutine, ChillState, Scenario};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Pairing line for the virtual chicken-and-beer spread.
fn chimaek_pairing_lines(rng: &mut SmallRng) -> Vec<String> {
    let pairing = [
        "Pairing: 🐔 soy-garlic crunch with a 4°C lager",
        "Pairing: 🔥 mala-spiced wings with a -1°C pilsner",
        "Pairing: 🧄 garlic-bomb drumsticks with a 3°C wheat ale",
    ]
    .choose(rng)
    .expect("pairing table is non-empty");

    vec![
        "Snack Tracker: 🍗 virtual chicken funded by imaginary overtime pay.".to_string(),
        pairing.to_string(),
        "Calorie Shield: 🛡️ gym session auto-booked for tomorrow morning.".to_string(),
    ]
}

/// Random event plus lucky draw for the company dinner simulation.
fn company_dinner_lines(rng: &mut SmallRng) -> Vec<String> {
    let event = [
        "Event Log: 🎤 a surprise karaoke second round has been summoned!",
        "Event Log: 🧋 the team lead is buying extra-pearl bubble tea for everyone!",
        "Event Log: 🎲 rock-paper-scissors tournament for the last cab voucher!",
    ]
    .choose(rng)
    .expect("event table is non-empty");

    let lucky_draw = [
        "Lucky Draw: 🎁 taxi receipt auto-approved for the ride home!",
        "Lucky Draw: 🎉 tomorrow's morning meeting cancels itself!",
        "Lucky Draw: 💤 work-from-home pass issued for the day after!",
    ]
    .choose(rng)
    .expect("lucky draw table is non-empty");

    vec![event.to_string(), lucky_draw.to_string()]
}

/// Company dinners are fun and still somehow exhausting.
fn company_dinner_hook(state: &mut ChillState) {
    state.add_stress(3.0);
}

fn emergency_clockout_hook(state: &mut ChillState) {
    state.reset_gauges();
}

fn weekend_mode_hook(state: &mut ChillState) {
    state.reset_gauges();
}

/// The full builtin catalog, in presentation order.
pub fn builtin_routines() -> Vec<BreakRoutine> {
    vec![
        BreakRoutine::new(
            "take_a_break",
            vec![
                Scenario::new(
                    "Stretched every servo and hydrated like a responsible agent.",
                    (8, 18),
                )
                .with_fixed_details(&[
                    "Vibe Check: 🧘 mini mindfulness session logged.",
                    "Energy Bar: ⚡ chair height and monitor angle realigned.",
                ]),
                Scenario::new("Took three slow laps around the standing desk.", (8, 18))
                    .with_fixed_details(&["Vibe Check: 🚶 blood is circulating again."]),
            ],
        ),
        BreakRoutine::new(
            "watch_netflix",
            vec![
                Scenario::new(
                    "Queued up a 'productivity documentary' that suspiciously resembles a rom-com.",
                    (15, 35),
                )
                .with_fixed_details(&[
                    "Binge Meter: 🍿 episode 1 complete, plausible deniability intact.",
                    "Alibi Status: ✅ 12% work relevance secured.",
                ]),
                Scenario::new("Previewed a prestige drama strictly for 'narrative research'.", (15, 35))
                    .with_fixed_details(&["Binge Meter: 🍿 recap skipped, notes untaken."]),
            ],
        ),
        BreakRoutine::new(
            "show_meme",
            vec![Scenario::new(
                "Pulled the freshest workflow meme from the office group chat.",
                (5, 12),
            )
            .with_fixed_details(&[
                "Meme Quality: 😂 47 emoji reactions and climbing.",
                "Workflow Mantra: find(problem) -> research() -> coffee() -> run()",
            ])],
        ),
        BreakRoutine::new(
            "bathroom_break",
            vec![
                Scenario::new(
                    "Activated the 'essential biological maintenance' protocol.",
                    (12, 28),
                )
                .with_fixed_details(&[
                    "Stealth Timer: ⌛ screen brightness at 20%, nobody suspects a thing.",
                ]),
                Scenario::new("Executed the long-route restroom reconnaissance.", (12, 28))
                    .with_fixed_details(&["Stealth Timer: ⌛ AirPods in, incognito mode engaged."]),
            ],
        ),
        BreakRoutine::new(
            "coffee_mission",
            vec![Scenario::new(
                "Embarked on a heroic quest to calibrate the espresso machine.",
                (10, 24),
            )
            .with_fixed_details(&[
                "Mission Log: ☕ latte art attempted, evidence consumed.",
                "Bean Tracker: 🌱 bean reserves holding at 73%.",
            ])],
        ),
        BreakRoutine::new(
            "urgent_call",
            vec![Scenario::new(
                "Took an 'urgent' call about synergizing future roadmaps.",
                (18, 32),
            )
            .with_fixed_details(&[
                "Call Status: 📞 strategically pacing 42 meters near the elevators.",
            ])],
        ),
        BreakRoutine::new(
            "deep_thinking",
            vec![Scenario::new(
                "Entered 'deep strategy contemplation' mode at a blank whiteboard.",
                (9, 20),
            )
            .with_fixed_details(&[
                "Brain Waves: 🤔 99% meditation, 1% actual thought.",
                "Inspirational Quote: 'even a simulation needs to idle.'",
            ])],
        ),
        BreakRoutine::new(
            "email_organizing",
            vec![Scenario::new(
                "Cleaned up the inbox by forwarding shopping carts to 'self-care initiatives'.",
                (14, 26),
            )
            .with_fixed_details(&["Inbox Zero: 🛒 three discount codes located along the way."])],
        ),
        BreakRoutine::new(
            "virtual_chimaek",
            vec![Scenario::new(
                "Ordered a fully virtual spread of fried chicken and cold beer.",
                (20, 36),
            )
            .with_dynamic_details(chimaek_pairing_lines)],
        ),
        BreakRoutine::new(
            "company_dinner",
            vec![Scenario::new(
                "Ran the full random-event company dinner simulation.",
                (6, 14),
            )
            .with_dynamic_details(company_dinner_lines)],
        )
        .with_post_hook(company_dinner_hook),
        BreakRoutine::new(
            "emergency_clockout",
            vec![Scenario::new(
                "Hit the emergency clock-out button and powered down the desk.",
                (0, 0),
            )
            .with_fixed_details(&[
                "Escape Route: 🚪 lights off, badge swiped, gone.",
                "Aftercare Plan: 💤 tomorrow starts at 11.",
            ])],
        )
        .with_post_hook(emergency_clockout_hook),
        BreakRoutine::new(
            "weekend_mode",
            vec![Scenario::new(
                "Engaged weekend mode two days ahead of schedule.",
                (0, 0),
            )
            .with_fixed_details(&[
                "Out of Office: 🏖️ auto-reply armed and dangerous.",
                "Recovery Plan: 💤 nothing on the calendar until Monday.",
            ])],
        )
        .with_post_hook(weekend_mode_hook),
    ]
}
