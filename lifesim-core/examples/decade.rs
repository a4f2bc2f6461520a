//! Run ten simulated years with a simple policy and print the outcome.
//!
//! ```bash
//! cargo run -p lifesim-core --example decade
//! ```

use lifesim_core::{Action, Game, Gender};

fn main() {
    let mut game = Game::new();
    game.new_life("Sample", Gender::Other);

    // A creature of habit: study, then rest when tired, work when grown.
    for month in 0..120 {
        let action = {
            let p = game.player().expect("player exists");
            if p.stamina < 30 {
                Action::Rest
            } else if p.age >= 19 {
                Action::Work
            } else if p.school_progress < 5 {
                Action::Study
            } else {
                Action::Social
            }
        };
        game.perform(action);
        game.advance_month();

        if month % 12 == 11 {
            let p = game.player().expect("player exists");
            println!(
                "age {:2}: wealth {:5}  health {:3}  stamina {:3}  int {:3}  quizzes {}/10",
                p.age, p.wealth, p.health, p.stamina, p.intelligence, p.exam_progress
            );
        }
    }

    println!();
    for entry in game.log().entries().take(8) {
        println!("[{}] {}", entry.stamp(), entry.text);
    }
}
