//! Tests for SBC (Subtract with Carry). Carry acts as inverted borrow:
//! set carry before a subtraction with no borrow pending.

use cycle6502::{status, ExecutionError, FlatMemory, MemoryBus, Status, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

fn carry_set() -> Status {
    Status::from_byte(status::C | status::U)
}

// ========== Basic subtraction ==========

#[test]
fn test_sbc_immediate_no_borrow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.set_status(carry_set());

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c()); // no borrow occurred
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_borrow_clears_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x60]); // SBC #$60
    cpu.set_a(0x50);
    cpu.set_status(carry_set());

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag_c()); // borrow occurred
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_with_borrow_pending() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    // Carry clear: an extra 1 is subtracted

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x3F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_equal_operands_yield_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x42]); // SBC #$42
    cpu.set_a(0x42);
    cpu.set_status(carry_set());

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

// ========== Signed overflow ==========

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x01]); // SBC #$01
    cpu.set_a(0x80);
    cpu.set_status(carry_set());

    cpu.step().unwrap();

    // -128 - 1 underflows to +127
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_no_overflow_same_sign() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x30]); // SBC #$30
    cpu.set_a(0x50);
    cpu.set_status(carry_set());

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x20);
    assert!(!cpu.flag_v());
}

// ========== Memory modes ==========

#[test]
fn test_sbc_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0200, &[0xE1, 0x20]); // SBC ($20,X)
    cpu.set_pc(0x0200);
    cpu.set_x(0x04);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x40);
    cpu.memory_mut().write(0x4000, 0x05);
    cpu.set_a(0x0A);
    cpu.set_status(carry_set());

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 6);
    assert_eq!(cpu.a(), 0x05);
}

// ========== Decimal mode ==========

#[test]
fn test_sbc_in_decimal_mode_is_fatal() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xE9, 0x01]); // SBC #$01
    cpu.set_status(Status::from_byte(status::D | status::C | status::U));

    let err = cpu.step().unwrap_err();
    assert!(matches!(
        err,
        ExecutionError::DecimalModeUnsupported { mnemonic } if mnemonic.as_str() == "SBC"
    ));
}
