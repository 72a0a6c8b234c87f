#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("illegal indexed addressing post-byte: {post_byte:#04x}")]
    IllegalIndexedPostbyte { post_byte: u8 },

    #[error("unknown opcode {opcode:#04x} at pc {pc:#06x}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}

pub type Result<A> = std::result::Result<A, Error>;
