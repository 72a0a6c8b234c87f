//! The static opcode tables (component G). Mirrors the `[Option<InstructionSignature>; 256]`
//! convention: a flat, compile-time lookup keyed by opcode byte, generalised to three pages
//! (primary, and the `0x10`/`0x11` prefixed extensions) instead of one.

use crate::opcode::Opcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Inherent,
    /// Single-operand read-modify-write targeting accumulator A directly (opcodes `0x40`-`0x4F`).
    AccumulatorA,
    /// Single-operand read-modify-write targeting accumulator B directly (opcodes `0x50`-`0x5F`).
    AccumulatorB,
    Immediate8,
    Immediate16,
    Direct,
    Extended,
    Indexed,
    Relative8,
    Relative16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSignature {
    pub opcode: Opcode,
    pub addressing: AddressingMode,
}

impl InstructionSignature {
    const fn new(opcode: Opcode, addressing: AddressingMode) -> Self {
        InstructionSignature { opcode, addressing }
    }
}

use AddressingMode::*;
use Opcode::*;

macro_rules! sig {
    ($op:expr, $mode:expr) => {
        Some(InstructionSignature::new($op, $mode))
    };
}

#[rustfmt::skip]
static PRIMARY: [Option<InstructionSignature>; 256] = [
    /*0x00*/ sig!(Neg, Direct),    /*0x01*/ None,                 /*0x02*/ None,                 /*0x03*/ sig!(Com, Direct),
    /*0x04*/ sig!(Lsr, Direct),    /*0x05*/ None,                 /*0x06*/ sig!(Ror, Direct),    /*0x07*/ sig!(Asr, Direct),
    /*0x08*/ sig!(Asl, Direct),    /*0x09*/ sig!(Rol, Direct),    /*0x0A*/ sig!(Dec, Direct),    /*0x0B*/ None,
    /*0x0C*/ sig!(Inc, Direct),    /*0x0D*/ sig!(Tst, Direct),    /*0x0E*/ sig!(Jmp, Direct),    /*0x0F*/ sig!(Clr, Direct),

    /*0x10*/ None,                 /*0x11*/ None,                 /*0x12*/ sig!(Nop, Inherent), /*0x13*/ sig!(Sync, Inherent),
    /*0x14*/ None,                 /*0x15*/ None,                 /*0x16*/ sig!(Lbra, Relative16), /*0x17*/ sig!(Lbsr, Relative16),
    /*0x18*/ None,                 /*0x19*/ sig!(Daa, Inherent),  /*0x1A*/ sig!(Orcc, Immediate8), /*0x1B*/ None,
    /*0x1C*/ sig!(Andcc, Immediate8), /*0x1D*/ sig!(Sex, Inherent), /*0x1E*/ sig!(Exg, Immediate8), /*0x1F*/ sig!(Tfr, Immediate8),

    /*0x20*/ sig!(Bra, Relative8), /*0x21*/ sig!(Brn, Relative8), /*0x22*/ sig!(Bhi, Relative8), /*0x23*/ sig!(Bls, Relative8),
    /*0x24*/ sig!(Bcc, Relative8), /*0x25*/ sig!(Bcs, Relative8), /*0x26*/ sig!(Bne, Relative8), /*0x27*/ sig!(Beq, Relative8),
    /*0x28*/ sig!(Bvc, Relative8), /*0x29*/ sig!(Bvs, Relative8), /*0x2A*/ sig!(Bpl, Relative8), /*0x2B*/ sig!(Bmi, Relative8),
    /*0x2C*/ sig!(Bge, Relative8), /*0x2D*/ sig!(Blt, Relative8), /*0x2E*/ sig!(Bgt, Relative8), /*0x2F*/ sig!(Ble, Relative8),

    /*0x30*/ sig!(Leax, Indexed), /*0x31*/ sig!(Leay, Indexed), /*0x32*/ sig!(Leas, Indexed), /*0x33*/ sig!(Leau, Indexed),
    /*0x34*/ sig!(Pshs, Immediate8), /*0x35*/ sig!(Puls, Immediate8), /*0x36*/ sig!(Pshu, Immediate8), /*0x37*/ sig!(Pulu, Immediate8),
    /*0x38*/ None,                 /*0x39*/ sig!(Rts, Inherent), /*0x3A*/ sig!(Abx, Inherent),  /*0x3B*/ sig!(Rti, Inherent),
    /*0x3C*/ sig!(Cwai, Immediate8), /*0x3D*/ sig!(Mul, Inherent), /*0x3E*/ None,                /*0x3F*/ sig!(Swi, Inherent),

    /*0x40*/ sig!(Neg, AccumulatorA), /*0x41*/ None,                 /*0x42*/ None,                 /*0x43*/ sig!(Com, AccumulatorA),
    /*0x44*/ sig!(Lsr, AccumulatorA), /*0x45*/ None,                 /*0x46*/ sig!(Ror, AccumulatorA), /*0x47*/ sig!(Asr, AccumulatorA),
    /*0x48*/ sig!(Asl, AccumulatorA), /*0x49*/ sig!(Rol, AccumulatorA), /*0x4A*/ sig!(Dec, AccumulatorA), /*0x4B*/ None,
    /*0x4C*/ sig!(Inc, AccumulatorA), /*0x4D*/ sig!(Tst, AccumulatorA), /*0x4E*/ None,                 /*0x4F*/ sig!(Clr, AccumulatorA),

    /*0x50*/ sig!(Neg, AccumulatorB), /*0x51*/ None,                 /*0x52*/ None,                 /*0x53*/ sig!(Com, AccumulatorB),
    /*0x54*/ sig!(Lsr, AccumulatorB), /*0x55*/ None,                 /*0x56*/ sig!(Ror, AccumulatorB), /*0x57*/ sig!(Asr, AccumulatorB),
    /*0x58*/ sig!(Asl, AccumulatorB), /*0x59*/ sig!(Rol, AccumulatorB), /*0x5A*/ sig!(Dec, AccumulatorB), /*0x5B*/ None,
    /*0x5C*/ sig!(Inc, AccumulatorB), /*0x5D*/ sig!(Tst, AccumulatorB), /*0x5E*/ None,                 /*0x5F*/ sig!(Clr, AccumulatorB),

    /*0x60*/ sig!(Neg, Indexed), /*0x61*/ None,                 /*0x62*/ None,                 /*0x63*/ sig!(Com, Indexed),
    /*0x64*/ sig!(Lsr, Indexed), /*0x65*/ None,                 /*0x66*/ sig!(Ror, Indexed), /*0x67*/ sig!(Asr, Indexed),
    /*0x68*/ sig!(Asl, Indexed), /*0x69*/ sig!(Rol, Indexed), /*0x6A*/ sig!(Dec, Indexed), /*0x6B*/ None,
    /*0x6C*/ sig!(Inc, Indexed), /*0x6D*/ sig!(Tst, Indexed), /*0x6E*/ sig!(Jmp, Indexed), /*0x6F*/ sig!(Clr, Indexed),

    /*0x70*/ sig!(Neg, Extended), /*0x71*/ None,                 /*0x72*/ None,                 /*0x73*/ sig!(Com, Extended),
    /*0x74*/ sig!(Lsr, Extended), /*0x75*/ None,                 /*0x76*/ sig!(Ror, Extended), /*0x77*/ sig!(Asr, Extended),
    /*0x78*/ sig!(Asl, Extended), /*0x79*/ sig!(Rol, Extended), /*0x7A*/ sig!(Dec, Extended), /*0x7B*/ None,
    /*0x7C*/ sig!(Inc, Extended), /*0x7D*/ sig!(Tst, Extended), /*0x7E*/ sig!(Jmp, Extended), /*0x7F*/ sig!(Clr, Extended),

    /*0x80*/ sig!(Suba, Immediate8), /*0x81*/ sig!(Cmpa, Immediate8), /*0x82*/ sig!(Sbca, Immediate8), /*0x83*/ sig!(Subd, Immediate16),
    /*0x84*/ sig!(Anda, Immediate8), /*0x85*/ sig!(Bita, Immediate8), /*0x86*/ sig!(Lda, Immediate8), /*0x87*/ None,
    /*0x88*/ sig!(Eora, Immediate8), /*0x89*/ sig!(Adca, Immediate8), /*0x8A*/ sig!(Ora, Immediate8), /*0x8B*/ sig!(Adda, Immediate8),
    /*0x8C*/ sig!(Cmpx, Immediate16), /*0x8D*/ sig!(Bsr, Relative8), /*0x8E*/ sig!(Ldx, Immediate16), /*0x8F*/ None,

    /*0x90*/ sig!(Suba, Direct), /*0x91*/ sig!(Cmpa, Direct), /*0x92*/ sig!(Sbca, Direct), /*0x93*/ sig!(Subd, Direct),
    /*0x94*/ sig!(Anda, Direct), /*0x95*/ sig!(Bita, Direct), /*0x96*/ sig!(Lda, Direct), /*0x97*/ sig!(Sta, Direct),
    /*0x98*/ sig!(Eora, Direct), /*0x99*/ sig!(Adca, Direct), /*0x9A*/ sig!(Ora, Direct), /*0x9B*/ sig!(Adda, Direct),
    /*0x9C*/ sig!(Cmpx, Direct), /*0x9D*/ sig!(Jsr, Direct), /*0x9E*/ sig!(Ldx, Direct), /*0x9F*/ sig!(Stx, Direct),

    /*0xA0*/ sig!(Suba, Indexed), /*0xA1*/ sig!(Cmpa, Indexed), /*0xA2*/ sig!(Sbca, Indexed), /*0xA3*/ sig!(Subd, Indexed),
    /*0xA4*/ sig!(Anda, Indexed), /*0xA5*/ sig!(Bita, Indexed), /*0xA6*/ sig!(Lda, Indexed), /*0xA7*/ sig!(Sta, Indexed),
    /*0xA8*/ sig!(Eora, Indexed), /*0xA9*/ sig!(Adca, Indexed), /*0xAA*/ sig!(Ora, Indexed), /*0xAB*/ sig!(Adda, Indexed),
    /*0xAC*/ sig!(Cmpx, Indexed), /*0xAD*/ sig!(Jsr, Indexed), /*0xAE*/ sig!(Ldx, Indexed), /*0xAF*/ sig!(Stx, Indexed),

    /*0xB0*/ sig!(Suba, Extended), /*0xB1*/ sig!(Cmpa, Extended), /*0xB2*/ sig!(Sbca, Extended), /*0xB3*/ sig!(Subd, Extended),
    /*0xB4*/ sig!(Anda, Extended), /*0xB5*/ sig!(Bita, Extended), /*0xB6*/ sig!(Lda, Extended), /*0xB7*/ sig!(Sta, Extended),
    /*0xB8*/ sig!(Eora, Extended), /*0xB9*/ sig!(Adca, Extended), /*0xBA*/ sig!(Ora, Extended), /*0xBB*/ sig!(Adda, Extended),
    /*0xBC*/ sig!(Cmpx, Extended), /*0xBD*/ sig!(Jsr, Extended), /*0xBE*/ sig!(Ldx, Extended), /*0xBF*/ sig!(Stx, Extended),

    /*0xC0*/ sig!(Subb, Immediate8), /*0xC1*/ sig!(Cmpb, Immediate8), /*0xC2*/ sig!(Sbcb, Immediate8), /*0xC3*/ sig!(Addd, Immediate16),
    /*0xC4*/ sig!(Andb, Immediate8), /*0xC5*/ sig!(Bitb, Immediate8), /*0xC6*/ sig!(Ldb, Immediate8), /*0xC7*/ None,
    /*0xC8*/ sig!(Eorb, Immediate8), /*0xC9*/ sig!(Adcb, Immediate8), /*0xCA*/ sig!(Orb, Immediate8), /*0xCB*/ sig!(Addb, Immediate8),
    /*0xCC*/ sig!(Ldd, Immediate16), /*0xCD*/ None, /*0xCE*/ sig!(Ldu, Immediate16), /*0xCF*/ None,

    /*0xD0*/ sig!(Subb, Direct), /*0xD1*/ sig!(Cmpb, Direct), /*0xD2*/ sig!(Sbcb, Direct), /*0xD3*/ sig!(Addd, Direct),
    /*0xD4*/ sig!(Andb, Direct), /*0xD5*/ sig!(Bitb, Direct), /*0xD6*/ sig!(Ldb, Direct), /*0xD7*/ sig!(Stb, Direct),
    /*0xD8*/ sig!(Eorb, Direct), /*0xD9*/ sig!(Adcb, Direct), /*0xDA*/ sig!(Orb, Direct), /*0xDB*/ sig!(Addb, Direct),
    /*0xDC*/ sig!(Ldd, Direct), /*0xDD*/ sig!(Std, Direct), /*0xDE*/ sig!(Ldu, Direct), /*0xDF*/ sig!(Stu, Direct),

    /*0xE0*/ sig!(Subb, Indexed), /*0xE1*/ sig!(Cmpb, Indexed), /*0xE2*/ sig!(Sbcb, Indexed), /*0xE3*/ sig!(Addd, Indexed),
    /*0xE4*/ sig!(Andb, Indexed), /*0xE5*/ sig!(Bitb, Indexed), /*0xE6*/ sig!(Ldb, Indexed), /*0xE7*/ sig!(Stb, Indexed),
    /*0xE8*/ sig!(Eorb, Indexed), /*0xE9*/ sig!(Adcb, Indexed), /*0xEA*/ sig!(Orb, Indexed), /*0xEB*/ sig!(Addb, Indexed),
    /*0xEC*/ sig!(Ldd, Indexed), /*0xED*/ sig!(Std, Indexed), /*0xEE*/ sig!(Ldu, Indexed), /*0xEF*/ sig!(Stu, Indexed),

    /*0xF0*/ sig!(Subb, Extended), /*0xF1*/ sig!(Cmpb, Extended), /*0xF2*/ sig!(Sbcb, Extended), /*0xF3*/ sig!(Addd, Extended),
    /*0xF4*/ sig!(Andb, Extended), /*0xF5*/ sig!(Bitb, Extended), /*0xF6*/ sig!(Ldb, Extended), /*0xF7*/ sig!(Stb, Extended),
    /*0xF8*/ sig!(Eorb, Extended), /*0xF9*/ sig!(Adcb, Extended), /*0xFA*/ sig!(Orb, Extended), /*0xFB*/ sig!(Addb, Extended),
    /*0xFC*/ sig!(Ldd, Extended), /*0xFD*/ sig!(Std, Extended), /*0xFE*/ sig!(Ldu, Extended), /*0xFF*/ sig!(Stu, Extended),
];

#[rustfmt::skip]
static PAGE2: [Option<InstructionSignature>; 256] = [
    /*0x00*/ None, /*0x01*/ None, /*0x02*/ None, /*0x03*/ None,
    /*0x04*/ None, /*0x05*/ None, /*0x06*/ None, /*0x07*/ None,
    /*0x08*/ None, /*0x09*/ None, /*0x0A*/ None, /*0x0B*/ None,
    /*0x0C*/ None, /*0x0D*/ None, /*0x0E*/ None, /*0x0F*/ None,

    /*0x10*/ None, /*0x11*/ None, /*0x12*/ None, /*0x13*/ None,
    /*0x14*/ None, /*0x15*/ None, /*0x16*/ None, /*0x17*/ None,
    /*0x18*/ None, /*0x19*/ None, /*0x1A*/ None, /*0x1B*/ None,
    /*0x1C*/ None, /*0x1D*/ None, /*0x1E*/ None, /*0x1F*/ None,

    /*0x20*/ None,                    /*0x21*/ sig!(Lbrn, Relative16), /*0x22*/ sig!(Lbhi, Relative16), /*0x23*/ sig!(Lbls, Relative16),
    /*0x24*/ sig!(Lbcc, Relative16), /*0x25*/ sig!(Lbcs, Relative16), /*0x26*/ sig!(Lbne, Relative16), /*0x27*/ sig!(Lbeq, Relative16),
    /*0x28*/ sig!(Lbvc, Relative16), /*0x29*/ sig!(Lbvs, Relative16), /*0x2A*/ sig!(Lbpl, Relative16), /*0x2B*/ sig!(Lbmi, Relative16),
    /*0x2C*/ sig!(Lbge, Relative16), /*0x2D*/ sig!(Lblt, Relative16), /*0x2E*/ sig!(Lbgt, Relative16), /*0x2F*/ sig!(Lble, Relative16),

    /*0x30*/ None, /*0x31*/ None, /*0x32*/ None, /*0x33*/ None,
    /*0x34*/ None, /*0x35*/ None, /*0x36*/ None, /*0x37*/ None,
    /*0x38*/ None, /*0x39*/ None, /*0x3A*/ None, /*0x3B*/ None,
    /*0x3C*/ None, /*0x3D*/ None, /*0x3E*/ None, /*0x3F*/ sig!(Swi2, Inherent),

    /*0x40*/ None, /*0x41*/ None, /*0x42*/ None, /*0x43*/ None,
    /*0x44*/ None, /*0x45*/ None, /*0x46*/ None, /*0x47*/ None,
    /*0x48*/ None, /*0x49*/ None, /*0x4A*/ None, /*0x4B*/ None,
    /*0x4C*/ None, /*0x4D*/ None, /*0x4E*/ None, /*0x4F*/ None,

    /*0x50*/ None, /*0x51*/ None, /*0x52*/ None, /*0x53*/ None,
    /*0x54*/ None, /*0x55*/ None, /*0x56*/ None, /*0x57*/ None,
    /*0x58*/ None, /*0x59*/ None, /*0x5A*/ None, /*0x5B*/ None,
    /*0x5C*/ None, /*0x5D*/ None, /*0x5E*/ None, /*0x5F*/ None,

    /*0x60*/ None, /*0x61*/ None, /*0x62*/ None, /*0x63*/ None,
    /*0x64*/ None, /*0x65*/ None, /*0x66*/ None, /*0x67*/ None,
    /*0x68*/ None, /*0x69*/ None, /*0x6A*/ None, /*0x6B*/ None,
    /*0x6C*/ None, /*0x6D*/ None, /*0x6E*/ None, /*0x6F*/ None,

    /*0x70*/ None, /*0x71*/ None, /*0x72*/ None, /*0x73*/ None,
    /*0x74*/ None, /*0x75*/ None, /*0x76*/ None, /*0x77*/ None,
    /*0x78*/ None, /*0x79*/ None, /*0x7A*/ None, /*0x7B*/ None,
    /*0x7C*/ None, /*0x7D*/ None, /*0x7E*/ None, /*0x7F*/ None,

    /*0x80*/ None, /*0x81*/ None, /*0x82*/ None, /*0x83*/ sig!(Cmpd, Immediate16),
    /*0x84*/ None, /*0x85*/ None, /*0x86*/ None, /*0x87*/ None,
    /*0x88*/ None, /*0x89*/ None, /*0x8A*/ None, /*0x8B*/ None,
    /*0x8C*/ sig!(Cmpy, Immediate16), /*0x8D*/ None, /*0x8E*/ sig!(Ldy, Immediate16), /*0x8F*/ None,

    /*0x90*/ None, /*0x91*/ None, /*0x92*/ None, /*0x93*/ sig!(Cmpd, Direct),
    /*0x94*/ None, /*0x95*/ None, /*0x96*/ None, /*0x97*/ None,
    /*0x98*/ None, /*0x99*/ None, /*0x9A*/ None, /*0x9B*/ None,
    /*0x9C*/ sig!(Cmpy, Direct), /*0x9D*/ None, /*0x9E*/ sig!(Ldy, Direct), /*0x9F*/ sig!(Sty, Direct),

    /*0xA0*/ None, /*0xA1*/ None, /*0xA2*/ None, /*0xA3*/ sig!(Cmpd, Indexed),
    /*0xA4*/ None, /*0xA5*/ None, /*0xA6*/ None, /*0xA7*/ None,
    /*0xA8*/ None, /*0xA9*/ None, /*0xAA*/ None, /*0xAB*/ None,
    /*0xAC*/ sig!(Cmpy, Indexed), /*0xAD*/ None, /*0xAE*/ sig!(Ldy, Indexed), /*0xAF*/ sig!(Sty, Indexed),

    /*0xB0*/ None, /*0xB1*/ None, /*0xB2*/ None, /*0xB3*/ sig!(Cmpd, Extended),
    /*0xB4*/ None, /*0xB5*/ None, /*0xB6*/ None, /*0xB7*/ None,
    /*0xB8*/ None, /*0xB9*/ None, /*0xBA*/ None, /*0xBB*/ None,
    /*0xBC*/ sig!(Cmpy, Extended), /*0xBD*/ None, /*0xBE*/ sig!(Ldy, Extended), /*0xBF*/ sig!(Sty, Extended),

    /*0xC0*/ None, /*0xC1*/ None, /*0xC2*/ None, /*0xC3*/ None,
    /*0xC4*/ None, /*0xC5*/ None, /*0xC6*/ None, /*0xC7*/ None,
    /*0xC8*/ None, /*0xC9*/ None, /*0xCA*/ None, /*0xCB*/ None,
    /*0xCC*/ None, /*0xCD*/ None, /*0xCE*/ sig!(Lds, Immediate16), /*0xCF*/ None,

    /*0xD0*/ None, /*0xD1*/ None, /*0xD2*/ None, /*0xD3*/ None,
    /*0xD4*/ None, /*0xD5*/ None, /*0xD6*/ None, /*0xD7*/ None,
    /*0xD8*/ None, /*0xD9*/ None, /*0xDA*/ None, /*0xDB*/ None,
    /*0xDC*/ None, /*0xDD*/ None, /*0xDE*/ sig!(Lds, Direct), /*0xDF*/ sig!(Sts, Direct),

    /*0xE0*/ None, /*0xE1*/ None, /*0xE2*/ None, /*0xE3*/ None,
    /*0xE4*/ None, /*0xE5*/ None, /*0xE6*/ None, /*0xE7*/ None,
    /*0xE8*/ None, /*0xE9*/ None, /*0xEA*/ None, /*0xEB*/ None,
    /*0xEC*/ None, /*0xED*/ None, /*0xEE*/ sig!(Lds, Indexed), /*0xEF*/ sig!(Sts, Indexed),

    /*0xF0*/ None, /*0xF1*/ None, /*0xF2*/ None, /*0xF3*/ None,
    /*0xF4*/ None, /*0xF5*/ None, /*0xF6*/ None, /*0xF7*/ None,
    /*0xF8*/ None, /*0xF9*/ None, /*0xFA*/ None, /*0xFB*/ None,
    /*0xFC*/ None, /*0xFD*/ None, /*0xFE*/ sig!(Lds, Extended), /*0xFF*/ sig!(Sts, Extended),
];

#[rustfmt::skip]
static PAGE3: [Option<InstructionSignature>; 256] = [
    /*0x00*/ None, /*0x01*/ None, /*0x02*/ None, /*0x03*/ None,
    /*0x04*/ None, /*0x05*/ None, /*0x06*/ None, /*0x07*/ None,
    /*0x08*/ None, /*0x09*/ None, /*0x0A*/ None, /*0x0B*/ None,
    /*0x0C*/ None, /*0x0D*/ None, /*0x0E*/ None, /*0x0F*/ None,

    /*0x10*/ None, /*0x11*/ None, /*0x12*/ None, /*0x13*/ None,
    /*0x14*/ None, /*0x15*/ None, /*0x16*/ None, /*0x17*/ None,
    /*0x18*/ None, /*0x19*/ None, /*0x1A*/ None, /*0x1B*/ None,
    /*0x1C*/ None, /*0x1D*/ None, /*0x1E*/ None, /*0x1F*/ None,

    /*0x20*/ None, /*0x21*/ None, /*0x22*/ None, /*0x23*/ None,
    /*0x24*/ None, /*0x25*/ None, /*0x26*/ None, /*0x27*/ None,
    /*0x28*/ None, /*0x29*/ None, /*0x2A*/ None, /*0x2B*/ None,
    /*0x2C*/ None, /*0x2D*/ None, /*0x2E*/ None, /*0x2F*/ None,

    /*0x30*/ None, /*0x31*/ None, /*0x32*/ None, /*0x33*/ None,
    /*0x34*/ None, /*0x35*/ None, /*0x36*/ None, /*0x37*/ None,
    /*0x38*/ None, /*0x39*/ None, /*0x3A*/ None, /*0x3B*/ None,
    /*0x3C*/ None, /*0x3D*/ None, /*0x3E*/ None, /*0x3F*/ sig!(Swi3, Inherent),

    /*0x40*/ None, /*0x41*/ None, /*0x42*/ None, /*0x43*/ None,
    /*0x44*/ None, /*0x45*/ None, /*0x46*/ None, /*0x47*/ None,
    /*0x48*/ None, /*0x49*/ None, /*0x4A*/ None, /*0x4B*/ None,
    /*0x4C*/ None, /*0x4D*/ None, /*0x4E*/ None, /*0x4F*/ None,

    /*0x50*/ None, /*0x51*/ None, /*0x52*/ None, /*0x53*/ None,
    /*0x54*/ None, /*0x55*/ None, /*0x56*/ None, /*0x57*/ None,
    /*0x58*/ None, /*0x59*/ None, /*0x5A*/ None, /*0x5B*/ None,
    /*0x5C*/ None, /*0x5D*/ None, /*0x5E*/ None, /*0x5F*/ None,

    /*0x60*/ None, /*0x61*/ None, /*0x62*/ None, /*0x63*/ None,
    /*0x64*/ None, /*0x65*/ None, /*0x66*/ None, /*0x67*/ None,
    /*0x68*/ None, /*0x69*/ None, /*0x6A*/ None, /*0x6B*/ None,
    /*0x6C*/ None, /*0x6D*/ None, /*0x6E*/ None, /*0x6F*/ None,

    /*0x70*/ None, /*0x71*/ None, /*0x72*/ None, /*0x73*/ None,
    /*0x74*/ None, /*0x75*/ None, /*0x76*/ None, /*0x77*/ None,
    /*0x78*/ None, /*0x79*/ None, /*0x7A*/ None, /*0x7B*/ None,
    /*0x7C*/ None, /*0x7D*/ None, /*0x7E*/ None, /*0x7F*/ None,

    /*0x80*/ None, /*0x81*/ None, /*0x82*/ None, /*0x83*/ sig!(Cmpu, Immediate16),
    /*0x84*/ None, /*0x85*/ None, /*0x86*/ None, /*0x87*/ None,
    /*0x88*/ None, /*0x89*/ None, /*0x8A*/ None, /*0x8B*/ None,
    /*0x8C*/ sig!(Cmps, Immediate16), /*0x8D*/ None, /*0x8E*/ None, /*0x8F*/ None,

    /*0x90*/ None, /*0x91*/ None, /*0x92*/ None, /*0x93*/ sig!(Cmpu, Direct),
    /*0x94*/ None, /*0x95*/ None, /*0x96*/ None, /*0x97*/ None,
    /*0x98*/ None, /*0x99*/ None, /*0x9A*/ None, /*0x9B*/ None,
    /*0x9C*/ sig!(Cmps, Direct), /*0x9D*/ None, /*0x9E*/ None, /*0x9F*/ None,

    /*0xA0*/ None, /*0xA1*/ None, /*0xA2*/ None, /*0xA3*/ sig!(Cmpu, Indexed),
    /*0xA4*/ None, /*0xA5*/ None, /*0xA6*/ None, /*0xA7*/ None,
    /*0xA8*/ None, /*0xA9*/ None, /*0xAA*/ None, /*0xAB*/ None,
    /*0xAC*/ sig!(Cmps, Indexed), /*0xAD*/ None, /*0xAE*/ None, /*0xAF*/ None,

    /*0xB0*/ None, /*0xB1*/ None, /*0xB2*/ None, /*0xB3*/ sig!(Cmpu, Extended),
    /*0xB4*/ None, /*0xB5*/ None, /*0xB6*/ None, /*0xB7*/ None,
    /*0xB8*/ None, /*0xB9*/ None, /*0xBA*/ None, /*0xBB*/ None,
    /*0xBC*/ sig!(Cmps, Extended), /*0xBD*/ None, /*0xBE*/ None, /*0xBF*/ None,

    /*0xC0*/ None, /*0xC1*/ None, /*0xC2*/ None, /*0xC3*/ None,
    /*0xC4*/ None, /*0xC5*/ None, /*0xC6*/ None, /*0xC7*/ None,
    /*0xC8*/ None, /*0xC9*/ None, /*0xCA*/ None, /*0xCB*/ None,
    /*0xCC*/ None, /*0xCD*/ None, /*0xCE*/ None, /*0xCF*/ None,

    /*0xD0*/ None, /*0xD1*/ None, /*0xD2*/ None, /*0xD3*/ None,
    /*0xD4*/ None, /*0xD5*/ None, /*0xD6*/ None, /*0xD7*/ None,
    /*0xD8*/ None, /*0xD9*/ None, /*0xDA*/ None, /*0xDB*/ None,
    /*0xDC*/ None, /*0xDD*/ None, /*0xDE*/ None, /*0xDF*/ None,

    /*0xE0*/ None, /*0xE1*/ None, /*0xE2*/ None, /*0xE3*/ None,
    /*0xE4*/ None, /*0xE5*/ None, /*0xE6*/ None, /*0xE7*/ None,
    /*0xE8*/ None, /*0xE9*/ None, /*0xEA*/ None, /*0xEB*/ None,
    /*0xEC*/ None, /*0xED*/ None, /*0xEE*/ None, /*0xEF*/ None,

    /*0xF0*/ None, /*0xF1*/ None, /*0xF2*/ None, /*0xF3*/ None,
    /*0xF4*/ None, /*0xF5*/ None, /*0xF6*/ None, /*0xF7*/ None,
    /*0xF8*/ None, /*0xF9*/ None, /*0xFA*/ None, /*0xFB*/ None,
    /*0xFC*/ None, /*0xFD*/ None, /*0xFE*/ None, /*0xFF*/ None,
];

pub fn primary(byte: u8) -> Option<InstructionSignature> {
    PRIMARY[byte as usize]
}

pub fn page2(byte: u8) -> Option<InstructionSignature> {
    PAGE2[byte as usize]
}

pub fn page3(byte: u8) -> Option<InstructionSignature> {
    PAGE3[byte as usize]
}

/// Base cycle count for an (opcode, addressing mode) pair, excluding the extra byte indexed
/// addressing consumes (the dispatcher adds `MemoryResult::bytes_consumed` itself) and excluding
/// the one-cycle prefix-byte surcharge `0x10`/`0x11` opcodes pay (also added by the dispatcher).
pub fn base_cycles(opcode: Opcode, mode: AddressingMode) -> u32 {
    use AddressingMode::*;
    match opcode {
        Neg | Com | Lsr | Ror | Asr | Asl | Rol | Dec | Inc | Tst | Clr => match mode {
            AccumulatorA | AccumulatorB | Inherent => 2,
            Direct | Indexed => 6,
            Extended => 7,
            _ => 2,
        },
        Jmp => match mode {
            Direct | Indexed => 3,
            Extended => 4,
            _ => 3,
        },
        Suba | Subb | Cmpa | Cmpb | Sbca | Sbcb | Anda | Andb | Bita | Bitb | Sta | Stb | Eora
        | Eorb | Adca | Adcb | Ora | Orb | Adda | Addb => match mode {
            Immediate8 => 2,
            Direct | Indexed => 4,
            Extended => 5,
            _ => 2,
        },
        Lda | Ldb => match mode {
            Immediate8 => 4,
            Direct | Indexed => 4,
            Extended => 5,
            _ => 4,
        },
        Subd | Addd | Cmpd | Cmpx | Cmpy | Cmpu | Cmps | Ldd | Std | Ldx | Stx | Ldy | Sty
        | Ldu | Stu | Lds | Sts => match mode {
            Immediate16 => 4,
            Direct | Indexed => 5,
            Extended => 6,
            _ => 4,
        },
        Leax | Leay | Leas | Leau => 4,
        Bra | Brn | Bhi | Bls | Bcc | Bcs | Bne | Beq | Bvc | Bvs | Bpl | Bmi | Bge | Blt | Bgt
        | Ble => 3,
        Lbra => 5,
        Lbsr => 9,
        Lbrn | Lbhi | Lbls | Lbcc | Lbcs | Lbne | Lbeq | Lbvc | Lbvs | Lbpl | Lbmi | Lbge | Lblt
        | Lbgt | Lble => 5,
        Bsr => 7,
        Jsr => match mode {
            Direct | Indexed => 7,
            Extended => 8,
            _ => 7,
        },
        Rts => 5,
        Rti => 6,
        Pshs | Puls | Pshu | Pulu => 5,
        Exg => 8,
        Tfr => 6,
        Nop => 2,
        Sync => 2,
        Daa => 2,
        Orcc | Andcc => 3,
        Sex => 2,
        Swi => 19,
        Swi2 | Swi3 => 20,
        Cwai => 20,
        Mul => 11,
        Abx => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_opcodes_are_none() {
        assert_eq!(primary(0x01), None);
        assert_eq!(primary(0x87), None);
    }

    #[test]
    fn known_opcodes_resolve() {
        assert_eq!(
            primary(0x86),
            sig!(Lda, Immediate8)
        );
        assert_eq!(page2(0x8E), sig!(Ldy, Immediate16));
        assert_eq!(page3(0x83), sig!(Cmpu, Immediate16));
    }
}
