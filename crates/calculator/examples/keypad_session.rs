//! Keypad Session Example
//!
//! Drives a calculator session with the button captions of the keypad and
//! prints the keypad after every key.
//!
//! Run with: cargo run -p keypad-calculator --example keypad_session

use keypad_calculator::prelude::*;

fn main() -> Result<(), CalcError> {
    let keypad = Keypad::standard();
    let mut session = Session::new();

    for key in ["1", "2", "+", "3", "0", "×", "2", "=", "push", "inv", "x^n", "2", "="] {
        session.press_key(key)?;
        println!("{key}");
        println!("{}", keypad.render(&session.display(), session.engine().is_inverted()));
        println!();
    }

    session.press_key("pop")?;
    println!("popped back: {}", session.display());
    println!();
    println!("{}", session.transcript().export_formatted());
    Ok(())
}
