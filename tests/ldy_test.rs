//! Tests for the LDY (Load Y Register) instruction across its five
//! addressing modes, including flag behavior and the Absolute,X
//! page-crossing penalty.

use cpu6502::{Cpu, FlatMemory, Machine, MemoryBus};

fn setup() -> Machine<FlatMemory> {
    Machine::new(FlatMemory::new())
}

#[test]
fn test_ldy_immediate() {
    let mut machine = setup();
    // LDY #$42
    machine.memory_mut().write(0x0000, 0xA0);
    machine.memory_mut().write(0x0001, 0x42);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x42);
    assert!(!cpu.machine().flag_z());
    assert!(!cpu.machine().flag_n());
    assert_eq!(cpu.machine().pc(), 0x0002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_ldy_immediate_negative_flag() {
    let mut machine = setup();
    // LDY #$FF
    machine.memory_mut().write(0x0000, 0xA0);
    machine.memory_mut().write(0x0001, 0xFF);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0xFF);
    assert!(cpu.machine().flag_n());
    assert!(!cpu.machine().flag_z());
}

#[test]
fn test_ldy_zero_page() {
    let mut machine = setup();
    machine.memory_mut().write(0x0080, 0x37);
    // LDY $80
    machine.memory_mut().write(0x0000, 0xA4);
    machine.memory_mut().write(0x0001, 0x80);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x37);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_ldy_zero_page_x() {
    let mut machine = setup();
    machine.set_x(0x05);
    machine.memory_mut().write(0x0085, 0x37);
    // LDY $80,X
    machine.memory_mut().write(0x0000, 0xB4);
    machine.memory_mut().write(0x0001, 0x80);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x37);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute() {
    let mut machine = setup();
    machine.memory_mut().write(0x2000, 0x00);
    machine.set_y(0x01);
    // LDY $2000 - loads zero, sets Z
    machine.memory_mut().write(0x0000, 0xAC);
    machine.memory_mut().write(0x0001, 0x00);
    machine.memory_mut().write(0x0002, 0x20);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x00);
    assert!(cpu.machine().flag_z());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute_x_no_page_cross() {
    let mut machine = setup();
    machine.set_x(0x01);
    machine.memory_mut().write(0x2001, 0x37);
    // LDY $2000,X
    machine.memory_mut().write(0x0000, 0xBC);
    machine.memory_mut().write(0x0001, 0x00);
    machine.memory_mut().write(0x0002, 0x20);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x37);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute_x_page_cross_costs_extra_cycle() {
    let mut machine = setup();
    machine.set_x(0x01);
    machine.memory_mut().write(0x2100, 0x37);
    // LDY $20FF,X - crosses into page 0x21
    machine.memory_mut().write(0x0000, 0xBC);
    machine.memory_mut().write(0x0001, 0xFF);
    machine.memory_mut().write(0x0002, 0x20);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x37);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_ldy_does_not_touch_other_registers() {
    let mut machine = setup();
    machine.set_a(0xAA);
    machine.set_x(0xBB);
    // LDY #$11
    machine.memory_mut().write(0x0000, 0xA0);
    machine.memory_mut().write(0x0001, 0x11);

    let mut cpu = Cpu::new(&mut machine);
    cpu.step().unwrap();

    assert_eq!(cpu.machine().y(), 0x11);
    assert_eq!(cpu.machine().a(), 0xAA);
    assert_eq!(cpu.machine().x(), 0xBB);
}
