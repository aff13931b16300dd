// tests/symbios_interop.rs
use glam::IVec2;
use heighway_dragon::{DragonInterpreter, TurtleOp, expand};
use symbios::{SymbiosState, SymbolTable};

fn setup() -> (DragonInterpreter, SymbolTable) {
    let mut interner = SymbolTable::new();
    let mut interpreter = DragonInterpreter::default();

    interner.intern("F").unwrap();
    interner.intern("L").unwrap();
    interner.intern("R").unwrap();
    interner.intern("a").unwrap();

    interpreter.populate_standard_symbols(&interner);

    (interpreter, interner)
}

#[test]
fn test_hand_built_state() {
    let (interpreter, interner) = setup();
    let f_id = interner.resolve_id("F").unwrap();
    let r_id = interner.resolve_id("R").unwrap();
    let a_id = interner.resolve_id("a").unwrap();

    // F a R F: North to (0, 1), turn East, step to (1, 1).
    let mut state = SymbiosState::new();
    state.push(f_id, 0.0, &[]).unwrap();
    state.push(a_id, 0.0, &[]).unwrap();
    state.push(r_id, 0.0, &[]).unwrap();
    state.push(f_id, 0.0, &[]).unwrap();

    let result = interpreter.simulate_state(&state, 10);

    assert_eq!(result.total_steps, 2);
    assert_eq!(result.final_position, IVec2::new(1, 1));
    assert_eq!(result.sequence_length_used, 4);
}

#[test]
fn test_expansion_matches_typed_walk() {
    let (interpreter, mut interner) = setup();
    let seq = expand(7).unwrap();

    let state = seq.to_symbios_state(&mut interner).unwrap();
    assert_eq!(state.len(), seq.len());

    let from_state = interpreter.simulate_state(&state, 60);
    let from_sequence = interpreter.simulate(&seq, 60);
    assert_eq!(from_state, from_sequence);
}

#[test]
fn test_unmapped_symbols_are_ignored() {
    let mut interner = SymbolTable::new();
    interner.intern("F").unwrap();
    let f_id = interner.resolve_id("F").unwrap();

    let mut state = SymbiosState::new();
    state.push(f_id, 0.0, &[]).unwrap();

    // No mapping registered: F does nothing.
    let blank = DragonInterpreter::default();
    assert_eq!(blank.simulate_state(&state, 5).total_steps, 0);

    let mut mapped = DragonInterpreter::default();
    mapped.set_op(f_id, TurtleOp::Forward);
    assert_eq!(mapped.simulate_state(&state, 5).total_steps, 1);
}
