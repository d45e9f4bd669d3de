//! Tests for LDX and LDY across their addressing modes.

use cycle6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

// ========== LDX ==========

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xA2, 0x7F]); // LDX #$7F

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.x(), 0x7F);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xB6, 0x10]); // LDX $10,Y
    cpu.memory_mut().write(0x0013, 0x80);
    cpu.set_y(0x03);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xBE, 0xFF, 0x10]); // LDX $10FF,Y
    cpu.memory_mut().write(0x1100, 0x00);
    cpu.set_y(0x01);
    cpu.set_x(0x33);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

// ========== LDY ==========

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xA0, 0x00]); // LDY #$00

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xB4, 0x20]); // LDY $20,X
    cpu.memory_mut().write(0x0025, 0x44);
    cpu.set_x(0x05);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.y(), 0x44);
}

#[test]
fn test_ldy_absolute_x_no_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xBC, 0x00, 0x30]); // LDY $3000,X
    cpu.memory_mut().write(0x3010, 0x91);
    cpu.set_x(0x10);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.y(), 0x91);
    assert!(cpu.flag_n());
}

#[test]
fn test_loads_do_not_touch_other_registers() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xA2, 0x11, 0xA0, 0x22]); // LDX / LDY
    cpu.set_a(0xAA);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.x(), 0x11);
    assert_eq!(cpu.y(), 0x22);
    assert_eq!(cpu.s(), 0xFF);
}
