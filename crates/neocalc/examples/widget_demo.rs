//! Keypad Widget Demo
//!
//! Drives the mock-DOM keypad from the keyboard and the pointer, then runs
//! the behaviour specifications against both input paths.
//!
//! Run with: cargo run --example widget_demo

use neocalc::driver::run_full_specification;
use neocalc::prelude::*;
use neocalc::wasm::PRESS_TRANSITION;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            NeoCalc Keypad Demo - Mock DOM Widget             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut widget = WasmCalculator::new();

    println!("⌨️  Keyboard: 1 2 + 3 4 Enter");
    for key in ["1", "2", "+", "3", "4", "Enter"] {
        let outcome = widget.key_down(key);
        println!(
            "   {key:>9} → {:<10} {:?}",
            widget.display(),
            outcome.map(|r| r.map_err(|e| e.to_string()))
        );
    }
    println!("   highlighted: {:?}", widget.dom().active_keys());

    let active: Vec<String> = widget
        .dom()
        .active_keys()
        .into_iter()
        .map(String::from)
        .collect();
    for id in &active {
        widget.transition_end(id, PRESS_TRANSITION);
    }
    println!("   after transitionend: {:?}", widget.dom().active_keys());
    println!();

    println!("🖱️  Pointer: 7 ÷ 0 =");
    let mut pointer = WasmDriver::pointer();
    let display = pointer.press_all(&["7", "/", "0", "="]);
    println!("   display: {display}");
    println!("   state:   {:?}", pointer.state());
    println!("   events:  {}", pointer.dom().event_history().len());
    println!();

    println!("🧪 Behaviour specifications");
    run_full_specification(&mut WasmDriver::keyboard());
    println!("   ✓ keyboard driver");
    run_full_specification(&mut WasmDriver::pointer());
    println!("   ✓ pointer driver");
    run_full_specification(&mut Calculator::new());
    println!("   ✓ calculator facade");
}
