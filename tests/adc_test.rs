//! Tests for ADC (Add with Carry): flag semantics, carry chaining,
//! signed overflow, and the decimal-mode fault.

use cycle6502::{status, ExecutionError, FlatMemory, MemoryBus, Status, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

// ========== Basic arithmetic ==========

#[test]
fn test_adc_immediate_simple_add() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x69, 0x10]); // ADC #$10
    cpu.set_a(0x20);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_includes_carry_in() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x69, 0x10]); // ADC #$10
    cpu.set_a(0x20);
    cpu.set_status(Status::from_byte(status::C | status::U));

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x31);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_out() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x69, 0x01]); // ADC #$01
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

// ========== Signed overflow ==========

#[test]
fn test_adc_positive_overflow_sets_v_and_n() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x69, 0x01]); // ADC #$01
    cpu.set_a(0x7F);

    let cycles = cpu.step().unwrap();

    // 0x7F + 0x01 = 0x80: positive + positive yielding negative
    assert_eq!(cycles, 2);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_negative_overflow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x69, 0x80]); // ADC #$80
    cpu.set_a(0x80);

    cpu.step().unwrap();

    // -128 + -128 = 0 with carry out; both V and C set
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x69, 0x90]); // ADC #$90
    cpu.set_a(0x50);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_n());
}

// ========== Memory modes ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x65, 0x42]); // ADC $42
    cpu.memory_mut().write(0x0042, 0x05);
    cpu.set_a(0x03);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 3);
    assert_eq!(cpu.a(), 0x08);
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0x79, 0xFF, 0x20]); // ADC $20FF,Y
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_y(0x01);
    cpu.set_a(0x01);

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.a(), 0x02);
}

// ========== Decimal mode ==========

#[test]
fn test_adc_in_decimal_mode_is_fatal() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0000, &[0xF8, 0x69, 0x01]); // SED; ADC #$01
    cpu.set_a(0x09);

    cpu.step().unwrap();
    assert!(cpu.flag_d());

    let err = cpu.step().unwrap_err();
    match err {
        ExecutionError::DecimalModeUnsupported { mnemonic } => {
            assert_eq!(mnemonic.as_str(), "ADC");
        }
        other => panic!("expected DecimalModeUnsupported, got {other:?}"),
    }
}
