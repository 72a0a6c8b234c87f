//! The indexed-addressing post-byte decoder (component E).

use crate::bus::Bus;
use crate::error::{Error, Result};
use crate::register::{IndexRegister, Registers};
use crate::word::UWord16;

/// The effective address an addressing mode resolved to, plus how many bytes past the opcode
/// (and, for indexed modes, past the post-byte) it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryResult {
    pub address: UWord16,
    pub bytes_consumed: u32,
}

fn fetch_byte(bus: &mut impl Bus, pc: &mut u16) -> u8 {
    let value = bus.read_u8(*pc);
    *pc = pc.wrapping_add(1);
    value
}

fn fetch_word(bus: &mut impl Bus, pc: &mut u16) -> u16 {
    let value = bus.read_u16(*pc);
    *pc = pc.wrapping_add(2);
    value
}

fn sign_extend_5(value: u8) -> i16 {
    // bit 4 is the sign bit of the 5-bit field.
    ((value << 3) as i8 >> 3) as i16
}

/// Decodes the post-byte at `registers.pc`, advancing `pc` past it and any displacement bytes,
/// and returns the resolved effective address.
pub fn decode_indexed(registers: &mut Registers, bus: &mut impl Bus) -> Result<MemoryResult> {
    let post_byte = fetch_byte(bus, &mut registers.pc);

    if post_byte & 0x80 == 0 {
        let register = IndexRegister::from_bits(post_byte >> 5);
        let offset = sign_extend_5(post_byte & 0x1F);
        let address = registers.index(register).wrapping_add(offset as u16);
        return Ok(MemoryResult {
            address: UWord16(address),
            bytes_consumed: 1,
        });
    }

    let register = IndexRegister::from_bits(post_byte >> 5);
    let low5 = post_byte & 0x1F;

    let (address, extra, indirect) = match low5 {
        0x00 => {
            let r = registers.index(register);
            registers.set_index(register, r.wrapping_add(1));
            (r, 0, false)
        }
        0x01 => {
            let r = registers.index(register);
            registers.set_index(register, r.wrapping_add(2));
            (r, 0, false)
        }
        0x02 => {
            let r = registers.index(register);
            registers.set_index(register, r.wrapping_sub(1));
            (r, 0, false)
        }
        0x03 => {
            let r = registers.index(register);
            registers.set_index(register, r.wrapping_sub(2));
            (r, 0, false)
        }
        0x04 => (registers.index(register), 0, false),
        0x05 => (
            registers
                .index(register)
                .wrapping_add((registers.b as i8) as i16 as u16),
            0,
            false,
        ),
        0x06 => (
            registers
                .index(register)
                .wrapping_add((registers.a as i8) as i16 as u16),
            0,
            false,
        ),
        0x08 => {
            let n = fetch_byte(bus, &mut registers.pc);
            (
                registers.index(register).wrapping_add((n as i8) as i16 as u16),
                1,
                false,
            )
        }
        0x09 => {
            let n = fetch_word(bus, &mut registers.pc);
            (registers.index(register).wrapping_add(n), 2, false)
        }
        0x0B => (registers.index(register).wrapping_add(registers.d()), 0, false),
        0x0C => {
            let n = fetch_byte(bus, &mut registers.pc);
            (registers.pc.wrapping_add((n as i8) as i16 as u16), 1, false)
        }
        0x0D => {
            let n = fetch_word(bus, &mut registers.pc);
            (registers.pc.wrapping_add(n), 2, false)
        }
        0x11 => {
            let r = registers.index(register);
            registers.set_index(register, r.wrapping_add(2));
            (r, 0, true)
        }
        0x13 => {
            let r = registers.index(register);
            registers.set_index(register, r.wrapping_sub(2));
            (r, 0, true)
        }
        0x14 => (registers.index(register), 0, true),
        0x15 => (
            registers
                .index(register)
                .wrapping_add((registers.b as i8) as i16 as u16),
            0,
            true,
        ),
        0x16 => (
            registers
                .index(register)
                .wrapping_add((registers.a as i8) as i16 as u16),
            0,
            true,
        ),
        0x18 => {
            let n = fetch_byte(bus, &mut registers.pc);
            (
                registers.index(register).wrapping_add((n as i8) as i16 as u16),
                1,
                true,
            )
        }
        0x19 => {
            let n = fetch_word(bus, &mut registers.pc);
            (registers.index(register).wrapping_add(n), 2, true)
        }
        0x1B => (registers.index(register).wrapping_add(registers.d()), 0, true),
        0x1C => {
            let n = fetch_byte(bus, &mut registers.pc);
            (registers.pc.wrapping_add((n as i8) as i16 as u16), 1, true)
        }
        0x1D => {
            let n = fetch_word(bus, &mut registers.pc);
            (registers.pc.wrapping_add(n), 2, true)
        }
        0x1F => {
            let n = fetch_word(bus, &mut registers.pc);
            (n, 2, true)
        }
        _ => return Err(Error::IllegalIndexedPostbyte { post_byte }),
    };

    let resolved = if indirect {
        bus.read_u16(address)
    } else {
        address
    };

    Ok(MemoryResult {
        address: UWord16(resolved),
        bytes_consumed: 1 + extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::RamBus;

    fn setup() -> (Registers, RamBus) {
        (Registers::default(), RamBus::new())
    }

    #[test]
    fn five_bit_offset_fast_path() {
        let (mut registers, mut bus) = setup();
        registers.x = 0xB000;
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0x05; // offset +5 from X, high bit clear selects X (bits 5-6 = 00)
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0xB005);
        assert_eq!(result.bytes_consumed, 1);
        assert_eq!(registers.x, 0xB000);
    }

    #[test]
    fn auto_increment_by_one() {
        let (mut registers, mut bus) = setup();
        registers.x = 0xB000;
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1000_0000; // ,X+
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0xB000);
        assert_eq!(registers.x, 0xB001);
    }

    #[test]
    fn indirect_auto_increment_by_two() {
        let (mut registers, mut bus) = setup();
        registers.x = 0xB000;
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1001_0001; // [,X++]
        bus.memory[0xB000] = 0x12;
        bus.memory[0xB001] = 0x34;
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0x1234);
        assert_eq!(registers.x, 0xB002);
    }

    #[test]
    fn auto_decrement_by_one_uses_original_value_as_address() {
        let (mut registers, mut bus) = setup();
        registers.x = 0xB000;
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1000_0010; // ,X-
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0xB000);
        assert_eq!(registers.x, 0xAFFF);
    }

    #[test]
    fn auto_decrement_by_two_uses_original_value_as_address() {
        let (mut registers, mut bus) = setup();
        registers.x = 0xB000;
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1000_0011; // ,X--
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0xB000);
        assert_eq!(registers.x, 0xAFFE);
    }

    #[test]
    fn indirect_auto_decrement_by_two_indirects_through_original_value() {
        let (mut registers, mut bus) = setup();
        registers.x = 0xB000;
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1001_0011; // [,X--]
        bus.memory[0xB000] = 0x12;
        bus.memory[0xB001] = 0x34;
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0x1234);
        assert_eq!(registers.x, 0xAFFE);
    }

    #[test]
    fn illegal_postbyte_is_reported() {
        let (mut registers, mut bus) = setup();
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1001_0000; // low5 = 0x10, undefined
        let result = decode_indexed(&mut registers, &mut bus);
        assert_eq!(result, Err(Error::IllegalIndexedPostbyte { post_byte: 0x90 }));
    }

    #[test]
    fn extended_indirect() {
        let (mut registers, mut bus) = setup();
        registers.pc = 0x1000;
        bus.memory[0x1000] = 0b1001_1111; // [n] extended indirect
        bus.memory[0x1001] = 0xB0;
        bus.memory[0x1002] = 0x00;
        bus.memory[0xB000] = 0xCA;
        bus.memory[0xB001] = 0xFE;
        let result = decode_indexed(&mut registers, &mut bus).unwrap();
        assert_eq!(result.address.0, 0xCAFE);
        assert_eq!(result.bytes_consumed, 3);
    }
}
