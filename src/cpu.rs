//! The execution engine (components G, H, I): ties the register file, ALU helpers and addressing
//! decoder to a [`Bus`] and drives one instruction, or one pending interrupt, per [`Cpu::step`].

use crate::addressing;
use crate::alu;
use crate::bus::Bus;
use crate::error::{Error, Result};
use crate::instruction::{self, AddressingMode};
use crate::interrupt::Interrupt;
use crate::opcode::Opcode;
use crate::register::{RegisterCode, Registers};
use crate::status::StatusFlag;

const MMU_CONTROL_ADDRESS: u16 = 0xFF90;
const RESET_ROM_MODE_AND_MMU_DISABLED: u8 = 0x02;

fn push_byte(stack: &mut u16, bus: &mut impl Bus, value: u8) {
    *stack = stack.wrapping_sub(1);
    bus.write_u8(*stack, value);
}

fn pull_byte(stack: &mut u16, bus: &mut impl Bus) -> u8 {
    let value = bus.read_u8(*stack);
    *stack = stack.wrapping_add(1);
    value
}

fn push_word(stack: &mut u16, bus: &mut impl Bus, value: u16) {
    let [hi, lo] = value.to_be_bytes();
    push_byte(stack, bus, lo);
    push_byte(stack, bus, hi);
}

fn pull_word(stack: &mut u16, bus: &mut impl Bus) -> u16 {
    let hi = pull_byte(stack, bus);
    let lo = pull_byte(stack, bus);
    u16::from_be_bytes([hi, lo])
}

/// Number of bytes a `PSHS`/`PULS`/`PSHU`/`PULU` post-byte mask touches, used for the `+1 cycle
/// per byte` accounting those instructions carry.
fn mask_byte_count(mask: u8) -> u32 {
    [(0x80u8, 2u32), (0x40, 2), (0x20, 2), (0x10, 2), (0x08, 1), (0x04, 1), (0x02, 1), (0x01, 1)]
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, size)| size)
        .sum()
}

/// The full 6809E core: register file plus the pending-interrupt latches `schedule_*` sets.
#[derive(Debug, Clone)]
pub struct Cpu {
    pub registers: Registers,
    pending_nmi: bool,
    pending_firq: bool,
    pending_irq: bool,
    trace: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut registers = Registers::default();
        registers.cc.or_mask(StatusFlag::IrqMask as u8 | StatusFlag::FirqMask as u8);
        registers.pc = 0xC000;
        Cpu {
            registers,
            pending_nmi: false,
            pending_firq: false,
            pending_irq: false,
            trace: false,
        }
    }

    /// Re-initializes CC to `(IRQ|FIRQ)`, PC to `0xC000`, and the MMU to disabled/ROM-mode 2, via
    /// the same memory-mapped register a running program would use (`0xFF90`).
    pub fn reset(&mut self, bus: &mut impl Bus) {
        self.registers = Registers::default();
        self.registers.cc.or_mask(StatusFlag::IrqMask as u8 | StatusFlag::FirqMask as u8);
        self.registers.pc = 0xC000;
        self.pending_nmi = false;
        self.pending_firq = false;
        self.pending_irq = false;
        bus.write_u8(MMU_CONTROL_ADDRESS, RESET_ROM_MODE_AND_MMU_DISABLED);
    }

    pub fn schedule_nmi(&mut self) {
        self.pending_nmi = true;
    }

    pub fn schedule_firq(&mut self) {
        self.pending_firq = true;
    }

    pub fn schedule_irq(&mut self) {
        self.pending_irq = true;
    }

    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Services one pending interrupt or executes one instruction, whichever is due, and returns
    /// the number of cycles it took.
    pub fn step(&mut self, bus: &mut impl Bus) -> Result<u32> {
        if let Some(cycles) = self.service_pending_interrupt(bus) {
            return Ok(cycles);
        }

        let instruction_pc = self.registers.pc;
        let opcode_byte = self.fetch_u8(bus);
        let (signature, prefix_cycles) = match opcode_byte {
            0x10 => {
                let page_byte = self.fetch_u8(bus);
                let signature = instruction::page2(page_byte).ok_or(Error::UnknownOpcode {
                    opcode: page_byte,
                    pc: instruction_pc,
                })?;
                (signature, 1)
            }
            0x11 => {
                let page_byte = self.fetch_u8(bus);
                let signature = instruction::page3(page_byte).ok_or(Error::UnknownOpcode {
                    opcode: page_byte,
                    pc: instruction_pc,
                })?;
                (signature, 1)
            }
            other => {
                let signature = instruction::primary(other).ok_or(Error::UnknownOpcode {
                    opcode: other,
                    pc: instruction_pc,
                })?;
                (signature, 0)
            }
        };

        if self.trace {
            log::trace!(
                "pc={:#06x} opcode={:?} mode={:?}",
                self.registers.pc,
                signature.opcode,
                signature.addressing
            );
        }

        let extra_cycles = self.execute(bus, signature.opcode, signature.addressing)?;
        Ok(instruction::base_cycles(signature.opcode, signature.addressing) + prefix_cycles + extra_cycles)
    }

    fn fetch_u8(&mut self, bus: &mut impl Bus) -> u8 {
        let value = bus.read_u8(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    fn fetch_u16(&mut self, bus: &mut impl Bus) -> u16 {
        let value = bus.read_u16(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(2);
        value
    }

    fn resolve_direct(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.fetch_u8(bus);
        ((self.registers.dp as u16) << 8) | low as u16
    }

    fn resolve_indexed(&mut self, bus: &mut impl Bus) -> Result<(u16, u32)> {
        let result = addressing::decode_indexed(&mut self.registers, bus)?;
        Ok((result.address.0, result.bytes_consumed.saturating_sub(1)))
    }

    fn operand_address(&mut self, bus: &mut impl Bus, mode: AddressingMode) -> Result<(u16, u32)> {
        match mode {
            AddressingMode::Direct => Ok((self.resolve_direct(bus), 0)),
            AddressingMode::Extended => Ok((self.fetch_u16(bus), 0)),
            AddressingMode::Indexed => self.resolve_indexed(bus),
            _ => unreachable!("operand_address called with a non-memory addressing mode"),
        }
    }

    fn fetch_operand8(&mut self, bus: &mut impl Bus, mode: AddressingMode) -> Result<(u8, u32)> {
        match mode {
            AddressingMode::Immediate8 => Ok((self.fetch_u8(bus), 0)),
            AddressingMode::Direct | AddressingMode::Extended | AddressingMode::Indexed => {
                let (address, extra) = self.operand_address(bus, mode)?;
                Ok((bus.read_u8(address), extra))
            }
            _ => unreachable!("fetch_operand8 called with a non-byte addressing mode"),
        }
    }

    fn store_operand8(&mut self, bus: &mut impl Bus, mode: AddressingMode, value: u8) -> Result<u32> {
        let (address, extra) = self.operand_address(bus, mode)?;
        bus.write_u8(address, value);
        Ok(extra)
    }

    fn fetch_operand16(&mut self, bus: &mut impl Bus, mode: AddressingMode) -> Result<(u16, u32)> {
        match mode {
            AddressingMode::Immediate16 => Ok((self.fetch_u16(bus), 0)),
            AddressingMode::Direct | AddressingMode::Extended | AddressingMode::Indexed => {
                let (address, extra) = self.operand_address(bus, mode)?;
                Ok((bus.read_u16(address), extra))
            }
            _ => unreachable!("fetch_operand16 called with a non-word addressing mode"),
        }
    }

    fn store_operand16(&mut self, bus: &mut impl Bus, mode: AddressingMode, value: u16) -> Result<u32> {
        let (address, extra) = self.operand_address(bus, mode)?;
        bus.write_u16(address, value);
        Ok(extra)
    }

    fn apply_rmw(&mut self, opcode: Opcode, value: u8) -> u8 {
        let cc = &mut self.registers.cc;
        match opcode {
            Opcode::Neg => alu::negate(value, cc),
            Opcode::Com => alu::complement(value, cc),
            Opcode::Lsr => alu::lsr(value, cc),
            Opcode::Ror => alu::ror(value, cc),
            Opcode::Asr => alu::asr(value, cc),
            Opcode::Asl => alu::asl(value, cc),
            Opcode::Rol => alu::rol(value, cc),
            Opcode::Dec => alu::decrement(value, cc),
            Opcode::Inc => alu::increment(value, cc),
            Opcode::Tst => alu::test(value, cc),
            Opcode::Clr => alu::clear(cc),
            _ => unreachable!("apply_rmw called with a non-RMW opcode"),
        }
    }

    fn condition_true(&self, opcode: Opcode) -> bool {
        let cc = &self.registers.cc;
        let c = cc.get(StatusFlag::Carry);
        let z = cc.get(StatusFlag::Zero);
        let v = cc.get(StatusFlag::Overflow);
        let n = cc.get(StatusFlag::Negative);
        use Opcode::*;
        match opcode {
            Bra | Lbra => true,
            Brn | Lbrn => false,
            Bhi | Lbhi => !c && !z,
            Bls | Lbls => c || z,
            Bcc | Lbcc => !c,
            Bcs | Lbcs => c,
            Bne | Lbne => !z,
            Beq | Lbeq => z,
            Bvc | Lbvc => !v,
            Bvs | Lbvs => v,
            Bpl | Lbpl => !n,
            Bmi | Lbmi => n,
            Bge | Lbge => n == v,
            Blt | Lblt => n != v,
            Bgt | Lbgt => !z && (n == v),
            Ble | Lble => z || (n != v),
            _ => unreachable!("condition_true called with a non-branch opcode"),
        }
    }

    fn pshs(&mut self, bus: &mut impl Bus) -> u32 {
        let mask = self.fetch_u8(bus);
        if mask & 0x80 != 0 {
            let pc = self.registers.pc;
            push_word(&mut self.registers.s, bus, pc);
        }
        if mask & 0x40 != 0 {
            let u = self.registers.u;
            push_word(&mut self.registers.s, bus, u);
        }
        if mask & 0x20 != 0 {
            let y = self.registers.y;
            push_word(&mut self.registers.s, bus, y);
        }
        if mask & 0x10 != 0 {
            let x = self.registers.x;
            push_word(&mut self.registers.s, bus, x);
        }
        if mask & 0x08 != 0 {
            let dp = self.registers.dp;
            push_byte(&mut self.registers.s, bus, dp);
        }
        if mask & 0x04 != 0 {
            let b = self.registers.b;
            push_byte(&mut self.registers.s, bus, b);
        }
        if mask & 0x02 != 0 {
            let a = self.registers.a;
            push_byte(&mut self.registers.s, bus, a);
        }
        if mask & 0x01 != 0 {
            let cc = self.registers.cc.0;
            push_byte(&mut self.registers.s, bus, cc);
        }
        mask_byte_count(mask)
    }

    fn puls(&mut self, bus: &mut impl Bus) -> u32 {
        let mask = self.fetch_u8(bus);
        if mask & 0x01 != 0 {
            self.registers.cc.0 = pull_byte(&mut self.registers.s, bus);
        }
        if mask & 0x02 != 0 {
            self.registers.a = pull_byte(&mut self.registers.s, bus);
        }
        if mask & 0x04 != 0 {
            self.registers.b = pull_byte(&mut self.registers.s, bus);
        }
        if mask & 0x08 != 0 {
            self.registers.dp = pull_byte(&mut self.registers.s, bus);
        }
        if mask & 0x10 != 0 {
            self.registers.x = pull_word(&mut self.registers.s, bus);
        }
        if mask & 0x20 != 0 {
            self.registers.y = pull_word(&mut self.registers.s, bus);
        }
        if mask & 0x40 != 0 {
            self.registers.u = pull_word(&mut self.registers.s, bus);
        }
        if mask & 0x80 != 0 {
            self.registers.pc = pull_word(&mut self.registers.s, bus);
        }
        mask_byte_count(mask)
    }

    fn pshu(&mut self, bus: &mut impl Bus) -> u32 {
        let mask = self.fetch_u8(bus);
        if mask & 0x80 != 0 {
            let pc = self.registers.pc;
            push_word(&mut self.registers.u, bus, pc);
        }
        if mask & 0x40 != 0 {
            let s = self.registers.s;
            push_word(&mut self.registers.u, bus, s);
        }
        if mask & 0x20 != 0 {
            let y = self.registers.y;
            push_word(&mut self.registers.u, bus, y);
        }
        if mask & 0x10 != 0 {
            let x = self.registers.x;
            push_word(&mut self.registers.u, bus, x);
        }
        if mask & 0x08 != 0 {
            let dp = self.registers.dp;
            push_byte(&mut self.registers.u, bus, dp);
        }
        if mask & 0x04 != 0 {
            let b = self.registers.b;
            push_byte(&mut self.registers.u, bus, b);
        }
        if mask & 0x02 != 0 {
            let a = self.registers.a;
            push_byte(&mut self.registers.u, bus, a);
        }
        if mask & 0x01 != 0 {
            let cc = self.registers.cc.0;
            push_byte(&mut self.registers.u, bus, cc);
        }
        mask_byte_count(mask)
    }

    fn pulu(&mut self, bus: &mut impl Bus) -> u32 {
        let mask = self.fetch_u8(bus);
        if mask & 0x01 != 0 {
            self.registers.cc.0 = pull_byte(&mut self.registers.u, bus);
        }
        if mask & 0x02 != 0 {
            self.registers.a = pull_byte(&mut self.registers.u, bus);
        }
        if mask & 0x04 != 0 {
            self.registers.b = pull_byte(&mut self.registers.u, bus);
        }
        if mask & 0x08 != 0 {
            self.registers.dp = pull_byte(&mut self.registers.u, bus);
        }
        if mask & 0x10 != 0 {
            self.registers.x = pull_word(&mut self.registers.u, bus);
        }
        if mask & 0x20 != 0 {
            self.registers.y = pull_word(&mut self.registers.u, bus);
        }
        if mask & 0x40 != 0 {
            self.registers.s = pull_word(&mut self.registers.u, bus);
        }
        if mask & 0x80 != 0 {
            self.registers.pc = pull_word(&mut self.registers.u, bus);
        }
        mask_byte_count(mask)
    }

    /// Pushes the full eight-field interrupt frame (`CC,A,B,DP,X,Y,U,PC`) onto S.
    fn push_full_state(&mut self, bus: &mut impl Bus) {
        let pc = self.registers.pc;
        push_word(&mut self.registers.s, bus, pc);
        let u = self.registers.u;
        push_word(&mut self.registers.s, bus, u);
        let y = self.registers.y;
        push_word(&mut self.registers.s, bus, y);
        let x = self.registers.x;
        push_word(&mut self.registers.s, bus, x);
        let dp = self.registers.dp;
        push_byte(&mut self.registers.s, bus, dp);
        let b = self.registers.b;
        push_byte(&mut self.registers.s, bus, b);
        let a = self.registers.a;
        push_byte(&mut self.registers.s, bus, a);
        let cc = self.registers.cc.0;
        push_byte(&mut self.registers.s, bus, cc);
    }

    /// Pushes the short FIRQ frame (`CC,PC` only) onto S.
    fn push_short_state(&mut self, bus: &mut impl Bus) {
        let pc = self.registers.pc;
        push_word(&mut self.registers.s, bus, pc);
        let cc = self.registers.cc.0;
        push_byte(&mut self.registers.s, bus, cc);
    }

    fn service_software_interrupt(&mut self, bus: &mut impl Bus, interrupt: Interrupt) -> u32 {
        self.registers.cc.or_mask(StatusFlag::Entire as u8);
        self.push_full_state(bus);
        if interrupt == Interrupt::Swi {
            self.registers.cc.or_mask(StatusFlag::IrqMask as u8 | StatusFlag::FirqMask as u8);
        }
        self.registers.pc = bus.read_u16(interrupt.vector_address());
        0
    }

    /// NMI beats FIRQ beats IRQ. Returns `Some(cycles)` if an interrupt was serviced this step.
    fn service_pending_interrupt(&mut self, bus: &mut impl Bus) -> Option<u32> {
        if self.pending_nmi {
            self.pending_nmi = false;
            self.registers.cc.or_mask(StatusFlag::Entire as u8);
            self.push_full_state(bus);
            self.registers.cc.or_mask(StatusFlag::IrqMask as u8 | StatusFlag::FirqMask as u8);
            self.registers.pc = bus.read_u16(Interrupt::Nmi.vector_address());
            return Some(19);
        }
        if self.pending_firq && !self.registers.cc.get(StatusFlag::FirqMask) {
            self.pending_firq = false;
            self.registers.cc.clear_mask(StatusFlag::Entire as u8);
            self.push_short_state(bus);
            self.registers.cc.or_mask(StatusFlag::FirqMask as u8 | StatusFlag::IrqMask as u8);
            self.registers.pc = bus.read_u16(Interrupt::Firq.vector_address());
            return Some(10);
        }
        if self.pending_irq && !self.registers.cc.get(StatusFlag::IrqMask) {
            self.pending_irq = false;
            self.registers.cc.or_mask(StatusFlag::Entire as u8);
            self.push_full_state(bus);
            self.registers.cc.or_mask(StatusFlag::IrqMask as u8);
            self.registers.pc = bus.read_u16(Interrupt::Irq.vector_address());
            return Some(19);
        }
        None
    }

    fn execute(&mut self, bus: &mut impl Bus, opcode: Opcode, mode: AddressingMode) -> Result<u32> {
        use Opcode::*;

        match opcode {
            Neg | Com | Lsr | Ror | Asr | Asl | Rol | Dec | Inc | Tst | Clr => match mode {
                AddressingMode::AccumulatorA => {
                    self.registers.a = self.apply_rmw(opcode, self.registers.a);
                    Ok(0)
                }
                AddressingMode::AccumulatorB => {
                    self.registers.b = self.apply_rmw(opcode, self.registers.b);
                    Ok(0)
                }
                AddressingMode::Direct | AddressingMode::Extended | AddressingMode::Indexed => {
                    let (address, extra) = self.operand_address(bus, mode)?;
                    let value = bus.read_u8(address);
                    let result = self.apply_rmw(opcode, value);
                    if opcode != Tst {
                        bus.write_u8(address, result);
                    }
                    Ok(extra)
                }
                _ => unreachable!(),
            },

            Jmp => {
                let (address, extra) = self.operand_address(bus, mode)?;
                self.registers.pc = address;
                Ok(extra)
            }

            Suba => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::subtract_m(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Subb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::subtract_m(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Sbca => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::subtract_m_c(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Sbcb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::subtract_m_c(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Cmpa => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                alu::compare_byte(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Cmpb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                alu::compare_byte(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Anda => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::logical_and(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Andb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::logical_and(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Bita => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                alu::logical_and(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Bitb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                alu::logical_and(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Lda => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::load_byte(v, &mut self.registers.cc);
                Ok(extra)
            }
            Ldb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::load_byte(v, &mut self.registers.cc);
                Ok(extra)
            }
            Sta => {
                let v = self.registers.a;
                alu::load_byte(v, &mut self.registers.cc);
                self.store_operand8(bus, mode, v)
            }
            Stb => {
                let v = self.registers.b;
                alu::load_byte(v, &mut self.registers.cc);
                self.store_operand8(bus, mode, v)
            }
            Eora => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::logical_xor(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Eorb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::logical_xor(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Adca => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::add_with_carry(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Adcb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::add_with_carry(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Ora => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::logical_or(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Orb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::logical_or(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }
            Adda => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.a = alu::add_byte(self.registers.a, v, &mut self.registers.cc);
                Ok(extra)
            }
            Addb => {
                let (v, extra) = self.fetch_operand8(bus, mode)?;
                self.registers.b = alu::add_byte(self.registers.b, v, &mut self.registers.cc);
                Ok(extra)
            }

            Subd => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                let d = alu::subtract_d(self.registers.d(), v, &mut self.registers.cc);
                self.registers.set_d(d);
                Ok(extra)
            }
            Addd => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                let d = alu::add_d(self.registers.d(), v, &mut self.registers.cc);
                self.registers.set_d(d);
                Ok(extra)
            }
            Cmpd => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                alu::compare_word(self.registers.d(), v, &mut self.registers.cc);
                Ok(extra)
            }
            Cmpx => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                alu::compare_word(self.registers.x, v, &mut self.registers.cc);
                Ok(extra)
            }
            Cmpy => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                alu::compare_word(self.registers.y, v, &mut self.registers.cc);
                Ok(extra)
            }
            Cmpu => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                alu::compare_word(self.registers.u, v, &mut self.registers.cc);
                Ok(extra)
            }
            Cmps => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                alu::compare_word(self.registers.s, v, &mut self.registers.cc);
                Ok(extra)
            }
            Ldd => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                let d = alu::load_word(v, &mut self.registers.cc);
                self.registers.set_d(d);
                Ok(extra)
            }
            Std => {
                let v = self.registers.d();
                alu::load_word(v, &mut self.registers.cc);
                self.store_operand16(bus, mode, v)
            }
            Ldx => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                self.registers.x = alu::load_word(v, &mut self.registers.cc);
                Ok(extra)
            }
            Stx => {
                let v = self.registers.x;
                alu::load_word(v, &mut self.registers.cc);
                self.store_operand16(bus, mode, v)
            }
            Ldy => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                self.registers.y = alu::load_word(v, &mut self.registers.cc);
                Ok(extra)
            }
            Sty => {
                let v = self.registers.y;
                alu::load_word(v, &mut self.registers.cc);
                self.store_operand16(bus, mode, v)
            }
            Ldu => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                self.registers.u = alu::load_word(v, &mut self.registers.cc);
                Ok(extra)
            }
            Stu => {
                let v = self.registers.u;
                alu::load_word(v, &mut self.registers.cc);
                self.store_operand16(bus, mode, v)
            }
            Lds => {
                let (v, extra) = self.fetch_operand16(bus, mode)?;
                self.registers.s = alu::load_word(v, &mut self.registers.cc);
                Ok(extra)
            }
            Sts => {
                let v = self.registers.s;
                alu::load_word(v, &mut self.registers.cc);
                self.store_operand16(bus, mode, v)
            }

            Leax => {
                let (address, extra) = self.resolve_indexed(bus)?;
                self.registers.x = address;
                self.registers.cc.set(StatusFlag::Zero, address == 0);
                Ok(extra)
            }
            Leay => {
                let (address, extra) = self.resolve_indexed(bus)?;
                self.registers.y = address;
                self.registers.cc.set(StatusFlag::Zero, address == 0);
                Ok(extra)
            }
            Leas => {
                let (address, extra) = self.resolve_indexed(bus)?;
                self.registers.s = address;
                Ok(extra)
            }
            Leau => {
                let (address, extra) = self.resolve_indexed(bus)?;
                self.registers.u = address;
                Ok(extra)
            }

            Bra | Brn | Bhi | Bls | Bcc | Bcs | Bne | Beq | Bvc | Bvs | Bpl | Bmi | Bge | Blt
            | Bgt | Ble => {
                let offset = self.fetch_u8(bus) as i8 as i16;
                let taken = self.condition_true(opcode);
                let target = self.registers.pc.wrapping_add(offset as u16);
                if taken {
                    self.registers.pc = target;
                }
                Ok(0)
            }
            Lbra | Lbrn | Lbhi | Lbls | Lbcc | Lbcs | Lbne | Lbeq | Lbvc | Lbvs | Lbpl | Lbmi
            | Lbge | Lblt | Lbgt | Lble => {
                let offset = self.fetch_u16(bus) as i16;
                let taken = self.condition_true(opcode);
                let target = self.registers.pc.wrapping_add(offset as u16);
                if taken {
                    self.registers.pc = target;
                }
                Ok(0)
            }

            Bsr => {
                let offset = self.fetch_u8(bus) as i8 as i16;
                let return_address = self.registers.pc;
                let target = self.registers.pc.wrapping_add(offset as u16);
                push_word(&mut self.registers.s, bus, return_address);
                self.registers.pc = target;
                Ok(0)
            }
            Lbsr => {
                let offset = self.fetch_u16(bus) as i16;
                let return_address = self.registers.pc;
                let target = self.registers.pc.wrapping_add(offset as u16);
                push_word(&mut self.registers.s, bus, return_address);
                self.registers.pc = target;
                Ok(0)
            }
            Jsr => {
                let (address, extra) = self.operand_address(bus, mode)?;
                let return_address = self.registers.pc;
                push_word(&mut self.registers.s, bus, return_address);
                self.registers.pc = address;
                Ok(extra)
            }
            Rts => {
                self.registers.pc = pull_word(&mut self.registers.s, bus);
                Ok(0)
            }
            Rti => {
                let cc = pull_byte(&mut self.registers.s, bus);
                self.registers.cc.0 = cc;
                if self.registers.cc.get(StatusFlag::Entire) {
                    self.registers.a = pull_byte(&mut self.registers.s, bus);
                    self.registers.b = pull_byte(&mut self.registers.s, bus);
                    self.registers.dp = pull_byte(&mut self.registers.s, bus);
                    self.registers.x = pull_word(&mut self.registers.s, bus);
                    self.registers.y = pull_word(&mut self.registers.s, bus);
                    self.registers.u = pull_word(&mut self.registers.s, bus);
                    self.registers.pc = pull_word(&mut self.registers.s, bus);
                    Ok(9)
                } else {
                    self.registers.pc = pull_word(&mut self.registers.s, bus);
                    Ok(0)
                }
            }

            Pshs => Ok(self.pshs(bus)),
            Puls => Ok(self.puls(bus)),
            Pshu => Ok(self.pshu(bus)),
            Pulu => Ok(self.pulu(bus)),

            Exg => {
                let post_byte = self.fetch_u8(bus);
                let source = RegisterCode::from_nibble(post_byte >> 4);
                let destination = RegisterCode::from_nibble(post_byte & 0x0F);
                if let (Some(source), Some(destination)) = (source, destination) {
                    if source.is_word() && destination.is_word() {
                        let a = self.registers.read_word(source).unwrap_or(0);
                        let b = self.registers.read_word(destination).unwrap_or(0);
                        self.registers.write_word(source, b);
                        self.registers.write_word(destination, a);
                    } else if !source.is_word() && !destination.is_word() {
                        let a = self.registers.read_byte(source).unwrap_or(0);
                        let b = self.registers.read_byte(destination).unwrap_or(0);
                        self.registers.write_byte(source, b);
                        self.registers.write_byte(destination, a);
                    }
                }
                Ok(0)
            }
            Tfr => {
                let post_byte = self.fetch_u8(bus);
                let source = RegisterCode::from_nibble(post_byte >> 4);
                let destination = RegisterCode::from_nibble(post_byte & 0x0F);
                if let (Some(source), Some(destination)) = (source, destination) {
                    if source.is_word() && destination.is_word() {
                        let v = self.registers.read_word(source).unwrap_or(0);
                        self.registers.write_word(destination, v);
                    } else if !source.is_word() && !destination.is_word() {
                        let v = self.registers.read_byte(source).unwrap_or(0);
                        self.registers.write_byte(destination, v);
                    }
                }
                Ok(0)
            }

            Nop => Ok(0),
            Sync => Ok(0),
            Daa => {
                self.registers.a = alu::decimal_adjust_a(self.registers.a, &mut self.registers.cc);
                Ok(0)
            }
            Orcc => {
                let v = self.fetch_u8(bus);
                self.registers.cc.or_mask(v);
                Ok(0)
            }
            Andcc => {
                let v = self.fetch_u8(bus);
                self.registers.cc.clear_mask(!v);
                Ok(0)
            }
            Sex => {
                self.registers.a = if self.registers.b & 0x80 != 0 { 0xFF } else { 0x00 };
                let d = self.registers.d();
                self.registers.cc.clear_mask(StatusFlag::Negative as u8 | StatusFlag::Zero as u8);
                if d == 0 {
                    self.registers.cc.or_mask(StatusFlag::Zero as u8);
                }
                if d & 0x8000 != 0 {
                    self.registers.cc.or_mask(StatusFlag::Negative as u8);
                }
                Ok(0)
            }
            Swi => Ok(self.service_software_interrupt(bus, Interrupt::Swi)),
            Swi2 => Ok(self.service_software_interrupt(bus, Interrupt::Swi2)),
            Swi3 => Ok(self.service_software_interrupt(bus, Interrupt::Swi3)),
            Cwai => {
                let mask = self.fetch_u8(bus);
                self.registers.cc.clear_mask(!mask);
                self.registers.cc.or_mask(StatusFlag::Entire as u8);
                self.push_full_state(bus);
                Ok(0)
            }
            Mul => {
                let product = self.registers.a as u16 * self.registers.b as u16;
                self.registers.set_d(product);
                self.registers.cc.clear_mask(StatusFlag::Zero as u8 | StatusFlag::Carry as u8);
                if product == 0 {
                    self.registers.cc.or_mask(StatusFlag::Zero as u8);
                }
                if product & 0x0080 != 0 {
                    self.registers.cc.or_mask(StatusFlag::Carry as u8);
                }
                Ok(0)
            }
            Abx => {
                self.registers.x = self.registers.x.wrapping_add(self.registers.b as u16);
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::RamBus;

    fn cpu_with_reset_vector(target: u16) -> (Cpu, RamBus) {
        let mut bus = RamBus::new();
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        cpu.registers.pc = target;
        (cpu, bus)
    }

    #[test]
    fn reset_sets_masks_and_entry_point() {
        let (cpu, _bus) = cpu_with_reset_vector(0x2000);
        assert!(cpu.registers.cc.get(StatusFlag::IrqMask));
        assert!(cpu.registers.cc.get(StatusFlag::FirqMask));
    }

    #[test]
    fn lda_immediate_sets_a_and_flags() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        bus.memory[0x2000] = 0x86;
        bus.memory[0x2001] = 0x42;
        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.a, 0x42);
        assert!(!cpu.registers.cc.get(StatusFlag::Zero));
        assert!(!cpu.registers.cc.get(StatusFlag::Negative));
        assert_eq!(cycles, 4);
    }

    #[test]
    fn neg_accumulator_a_of_0x80_sets_nvc() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        cpu.registers.a = 0x80;
        bus.memory[0x2000] = 0x40;
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.a, 0x80);
        assert!(cpu.registers.cc.get(StatusFlag::Negative));
        assert!(cpu.registers.cc.get(StatusFlag::Overflow));
        assert!(cpu.registers.cc.get(StatusFlag::Carry));
    }

    #[test]
    fn mul_computes_unsigned_product_into_d() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        cpu.registers.a = 0x0C;
        cpu.registers.b = 0x0A;
        bus.memory[0x2000] = 0x3D;
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.d(), 0x78);
    }

    #[test]
    fn pshs_pulls_mark_with_full_mask_roundtrips_registers() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        cpu.registers.s = 0x1000;
        cpu.registers.a = 0x11;
        cpu.registers.b = 0x22;
        cpu.registers.x = 0x3344;
        bus.memory[0x2000] = 0x34; // PSHS
        bus.memory[0x2001] = 0b0001_0111; // X, B, A, CC
        cpu.step(&mut bus).unwrap();
        cpu.registers.a = 0;
        cpu.registers.b = 0;
        cpu.registers.x = 0;
        bus.memory[0x2002] = 0x35; // PULS
        bus.memory[0x2003] = 0b0001_0111;
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.a, 0x11);
        assert_eq!(cpu.registers.b, 0x22);
        assert_eq!(cpu.registers.x, 0x3344);
        assert_eq!(cpu.registers.s, 0x1000);
    }

    #[test]
    fn pshs_with_full_mask_pushes_all_twelve_bytes() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        cpu.registers.s = 0x1000;
        bus.memory[0x2000] = 0x34; // PSHS
        bus.memory[0x2001] = 0xFF; // every field
        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.s, 0x1000 - 12);
        assert_eq!(cycles, 5 + 12);
    }

    #[test]
    fn swi_pushes_full_state_and_jumps_to_vector() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        cpu.registers.s = 0x1000;
        bus.write_u16(0xFFFA, 0x4000);
        bus.memory[0x2000] = 0x3F; // SWI
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.pc, 0x4000);
        assert!(cpu.registers.cc.get(StatusFlag::Entire));
        assert!(cpu.registers.cc.get(StatusFlag::IrqMask));
        assert!(cpu.registers.cc.get(StatusFlag::FirqMask));
        assert_eq!(cpu.registers.s, 0x1000 - 12);
    }

    #[test]
    fn indexed_load_auto_increments_x() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        cpu.registers.x = 0x5000;
        bus.memory[0x5000] = 0x99;
        bus.memory[0x2000] = 0xA6; // LDA indexed
        bus.memory[0x2001] = 0b1000_0000; // ,X+
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers.a, 0x99);
        assert_eq!(cpu.registers.x, 0x5001);
    }

    #[test]
    fn illegal_indexed_postbyte_surfaces_as_an_error() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        bus.memory[0x2000] = 0xA6; // LDA indexed
        bus.memory[0x2001] = 0b1001_0000; // undefined low5 = 0x10
        let result = cpu.step(&mut bus);
        assert_eq!(result, Err(Error::IllegalIndexedPostbyte { post_byte: 0x90 }));
    }

    #[test]
    fn unknown_opcode_surfaces_with_pc() {
        let (mut cpu, mut bus) = cpu_with_reset_vector(0x2000);
        bus.memory[0x2000] = 0x01; // undefined primary opcode
        let result = cpu.step(&mut bus);
        assert_eq!(result, Err(Error::UnknownOpcode { opcode: 0x01, pc: 0x2000 }));
    }
}
