use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

pub type Register = String;

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    MOV { dst: Register, src: Operand },
    INC { reg: Register },
    DEC { reg: Register },
    JNZ { cond: Operand, offset: i32 },
}

pub static NUM_ARGS_ERR: &str = "Wrong number of arguments";
pub static EMPTY_LINE_ERR: &str = "Empty line";
pub static LIT_DST_ERR: &str = "Literal not allowed as register operand";
pub static REG_OFFSET_ERR: &str = "Jump offset must be a literal";
pub static BAD_LITERAL_ERR: &str = "Literal is not a 32-bit integer";

/// Why a single line failed to parse. The program parser pins it to an address.
#[derive(Debug, PartialEq)]
pub enum InsnError {
    Opcode(String),
    Malformed(&'static str),
}

impl InsnError {
    pub fn at(self, line: usize) -> Error {
        match self {
            InsnError::Opcode(opcode) => Error::InvalidOpcode { line, opcode },
            InsnError::Malformed(reason) => Error::MalformedInstruction { line, reason },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Opcode {
    MOV,
    INC,
    DEC,
    JNZ,
}

impl Opcode {
    pub fn arity(self) -> usize {
        match self {
            Opcode::MOV | Opcode::JNZ => 2,
            Opcode::INC | Opcode::DEC => 1,
        }
    }
}

impl FromStr for Opcode {
    type Err = InsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MOV" => Ok(Opcode::MOV),
            "INC" => Ok(Opcode::INC),
            "DEC" => Ok(Opcode::DEC),
            "JNZ" => Ok(Opcode::JNZ),
            _ => Err(InsnError::Opcode(s.to_string())),
        }
    }
}

impl FromStr for Instruction {
    type Err = InsnError;

    fn from_str(insn: &str) -> Result<Instruction, Self::Err> {
        let words: Vec<&str> = insn.split_whitespace().collect();

        let opcode = match words.first() {
            Some(w) => Opcode::from_str(w)?,
            None => return Err(InsnError::Malformed(EMPTY_LINE_ERR)),
        };
        let args = &words[1..];
        if args.len() != opcode.arity() {
            return Err(InsnError::Malformed(NUM_ARGS_ERR));
        }

        match opcode {
            Opcode::MOV => Ok(Instruction::MOV {
                dst: register(args[0])?,
                src: Operand::from_str(args[1])?,
            }),
            Opcode::INC => register(args[0]).map(|reg| Instruction::INC { reg }),
            Opcode::DEC => register(args[0]).map(|reg| Instruction::DEC { reg }),
            Opcode::JNZ => {
                let cond = Operand::from_str(args[0])?;
                match Operand::from_str(args[1])? {
                    Operand::Lit(offset) => Ok(Instruction::JNZ { cond, offset }),
                    Operand::Reg(_) => Err(InsnError::Malformed(REG_OFFSET_ERR)),
                }
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::MOV { dst, src } => write!(f, "MOV {} {}", dst, src),
            Instruction::INC { reg } => write!(f, "INC {}", reg),
            Instruction::DEC { reg } => write!(f, "DEC {}", reg),
            Instruction::JNZ { cond, offset } => write!(f, "JNZ {} {}", cond, offset),
        }
    }
}

fn register(s: &str) -> Result<Register, InsnError> {
    match Operand::from_str(s)? {
        Operand::Reg(r) => Ok(r),
        Operand::Lit(_) => Err(InsnError::Malformed(LIT_DST_ERR)),
    }
}

/* Optional sign, digits, optional fractional part. Anything shaped like this is a literal. */
static LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]*\.?[0-9]+$").unwrap());

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Lit(i32),
    Reg(Register),
}

impl FromStr for Operand {
    type Err = InsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if LITERAL_RE.is_match(s) {
            return i32::from_str(s)
                .map(Operand::Lit)
                .map_err(|_| InsnError::Malformed(BAD_LITERAL_ERR));
        }
        Ok(Operand::Reg(s.to_string()))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Lit(i) => write!(f, "{}", i),
            Operand::Reg(r) => write!(f, "{}", r),
        }
    }
}
