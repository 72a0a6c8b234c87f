use nestalgic_mc6809::{Bus, Cpu, Error, RamBus, StatusFlag};

fn cpu_at(pc: u16) -> (Cpu, RamBus) {
    let mut bus = RamBus::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    cpu.registers.pc = pc;
    (cpu, bus)
}

#[test]
fn reset_initializes_irq_firq_masks_and_entry_point() {
    let mut bus = RamBus::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    assert_eq!(cpu.registers.pc, 0xC000);
    assert!(cpu.registers.cc.get(StatusFlag::IrqMask));
    assert!(cpu.registers.cc.get(StatusFlag::FirqMask));
}

#[test]
fn lda_immediate_42_takes_four_cycles() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    bus.memory[0x2000] = 0x86; // LDA #
    bus.memory[0x2001] = 0x42;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers.a, 0x42);
    assert_eq!(cycles, 4);
    assert!(!cpu.registers.cc.get(StatusFlag::Zero));
    assert!(!cpu.registers.cc.get(StatusFlag::Negative));
}

#[test]
fn neg_a_of_0x80_is_its_own_negation_with_nvc_set() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    cpu.registers.a = 0x80;
    bus.memory[0x2000] = 0x40; // NEGA
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers.a, 0x80);
    assert!(cpu.registers.cc.get(StatusFlag::Negative));
    assert!(cpu.registers.cc.get(StatusFlag::Overflow));
    assert!(cpu.registers.cc.get(StatusFlag::Carry));
}

#[test]
fn mul_multiplies_a_and_b_into_d() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    cpu.registers.a = 0x0C;
    cpu.registers.b = 0x0A;
    bus.memory[0x2000] = 0x3D; // MUL
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers.d(), 0x78);
    assert!(!cpu.registers.cc.get(StatusFlag::Zero));
}

#[test]
fn pshs_with_0xff_postbyte_pushes_every_field() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    cpu.registers.s = 0x1000;
    bus.memory[0x2000] = 0x34; // PSHS
    bus.memory[0x2001] = 0xFF;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers.s, 0x1000 - 12);
    assert_eq!(cycles, 5 + 12);
}

#[test]
fn swi_stacks_full_state_masks_interrupts_and_jumps_to_vector() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    cpu.registers.s = 0x1000;
    bus.write_u16(0xFFFA, 0x4000);
    bus.memory[0x2000] = 0x3F; // SWI
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers.pc, 0x4000);
    assert_eq!(cpu.registers.s, 0x1000 - 12);
    assert!(cpu.registers.cc.get(StatusFlag::Entire));
    assert!(cpu.registers.cc.get(StatusFlag::IrqMask));
    assert!(cpu.registers.cc.get(StatusFlag::FirqMask));
}

#[test]
fn indexed_lda_with_post_increment_advances_x() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    cpu.registers.x = 0x5000;
    bus.memory[0x5000] = 0x99;
    bus.memory[0x2000] = 0xA6; // LDA indexed
    bus.memory[0x2001] = 0b1000_0000; // ,X+
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers.a, 0x99);
    assert_eq!(cpu.registers.x, 0x5001);
}

#[test]
fn illegal_indexed_post_byte_is_reported_instead_of_executed() {
    let (mut cpu, mut bus) = cpu_at(0x2000);
    bus.memory[0x2000] = 0xA6; // LDA indexed
    bus.memory[0x2001] = 0b1001_0000; // undefined low5 = 0x10
    let result = cpu.step(&mut bus);
    assert_eq!(result, Err(Error::IllegalIndexedPostbyte { post_byte: 0x90 }));
}
